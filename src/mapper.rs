//! Domain-space to drawing-area coordinate mapping.
//!
//! Each axis is normalized independently against the instance bounds and
//! stretched into the padded drawing area. Aspect ratio is not preserved.

use kurbo::Point;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{Instance, Location};

/// Fixed-size target area the scene is drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawingArea {
    pub width: f64,
    pub height: f64,
    /// Inset kept free on every side.
    pub padding: f64,
}

impl Default for DrawingArea {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 300.0,
            padding: 30.0,
        }
    }
}

impl DrawingArea {
    pub fn new(width: f64, height: f64, padding: f64) -> Result<Self> {
        let area = Self {
            width,
            height,
            padding,
        };
        area.validate()?;
        Ok(area)
    }

    /// Rejects areas whose padding leaves no room to draw in.
    pub fn validate(&self) -> Result<()> {
        let finite = self.width.is_finite() && self.height.is_finite() && self.padding.is_finite();
        if !finite
            || self.padding < 0.0
            || self.width <= 2.0 * self.padding
            || self.height <= 2.0 * self.padding
        {
            return Err(Error::InvalidDrawingArea {
                width: self.width,
                height: self.height,
                padding: self.padding,
            });
        }
        Ok(())
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Per-axis extent of a set of domain locations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Computes bounds over the finite coordinates of `locations`.
    ///
    /// An axis with no finite coordinate collapses to zero and is therefore
    /// treated as degenerate by the mapper.
    pub fn from_locations(locations: impl IntoIterator<Item = Location>) -> Self {
        let mut bounds = Self {
            min_x: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            min_y: f64::INFINITY,
            max_y: f64::NEG_INFINITY,
        };

        for location in locations {
            if location.x.is_finite() {
                bounds.min_x = bounds.min_x.min(location.x);
                bounds.max_x = bounds.max_x.max(location.x);
            }
            if location.y.is_finite() {
                bounds.min_y = bounds.min_y.min(location.y);
                bounds.max_y = bounds.max_y.max(location.y);
            }
        }

        if bounds.min_x > bounds.max_x {
            bounds.min_x = 0.0;
            bounds.max_x = 0.0;
        }
        if bounds.min_y > bounds.max_y {
            bounds.min_y = 0.0;
            bounds.max_y = 0.0;
        }

        bounds
    }

    /// Bounds over the depot and every customer location.
    pub fn of_instance(instance: &Instance) -> Self {
        Self::from_locations(instance.locations())
    }
}

/// Maps domain locations of one instance into a drawing area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    bounds: Bounds,
    area: DrawingArea,
}

impl CoordinateMapper {
    pub fn new(bounds: Bounds, area: DrawingArea) -> Self {
        Self { bounds, area }
    }

    pub fn for_instance(instance: &Instance, area: DrawingArea) -> Self {
        Self::new(Bounds::of_instance(instance), area)
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn area(&self) -> DrawingArea {
        self.area
    }

    pub fn scale_x(&self, x: f64) -> f64 {
        map_axis(x, self.bounds.min_x, self.bounds.max_x, self.area.width, self.area.padding)
    }

    pub fn scale_y(&self, y: f64) -> f64 {
        map_axis(y, self.bounds.min_y, self.bounds.max_y, self.area.height, self.area.padding)
    }

    pub fn map(&self, location: Location) -> Point {
        Point::new(self.scale_x(location.x), self.scale_y(location.y))
    }
}

/// A zero-width axis maps every value to the middle of the extent.
fn map_axis(value: f64, min: f64, max: f64, extent: f64, padding: f64) -> f64 {
    let span = max - min;
    if span <= 0.0 {
        return extent / 2.0;
    }
    ((value - min) / span) * (extent - 2.0 * padding) + padding
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Customer;

    fn instance(depot: (f64, f64), customers: &[(f64, f64)]) -> Instance {
        Instance::new(
            Location::new(depot.0, depot.1),
            customers
                .iter()
                .enumerate()
                .map(|(i, &(x, y))| Customer::new(i as u32 + 1, Location::new(x, y), 1.0))
                .collect(),
        )
    }

    #[test]
    fn test_extremes_map_to_padded_corners() {
        let area = DrawingArea::default();
        let mapper = CoordinateMapper::for_instance(&instance((5.0, 5.0), &[(0.0, -3.0), (20.0, 10.0)]), area);

        assert_eq!(mapper.map(Location::new(0.0, -3.0)), Point::new(30.0, 30.0));
        assert_eq!(mapper.map(Location::new(20.0, 10.0)), Point::new(370.0, 270.0));
    }

    #[test]
    fn test_interior_point_is_linear() {
        let mapper = CoordinateMapper::for_instance(
            &instance((5.0, 5.0), &[(0.0, 0.0), (10.0, 10.0)]),
            DrawingArea::new(200.0, 100.0, 10.0).unwrap(),
        );

        assert_eq!(mapper.map(Location::new(5.0, 5.0)), Point::new(100.0, 50.0));
        assert_eq!(mapper.scale_x(2.5), 55.0);
    }

    #[test]
    fn test_degenerate_x_axis_centers_horizontally() {
        let mapper = CoordinateMapper::for_instance(
            &instance((3.0, 0.0), &[(3.0, 10.0), (3.0, 5.0)]),
            DrawingArea::default(),
        );

        let point = mapper.map(Location::new(3.0, 10.0));
        assert_eq!(point.x, 200.0);
        assert_eq!(point.y, 270.0);
    }

    #[test]
    fn test_degenerate_both_axes() {
        let mapper = CoordinateMapper::for_instance(&instance((1.0, 1.0), &[]), DrawingArea::default());

        let point = mapper.map(Location::new(1.0, 1.0));
        assert!(point.x.is_finite() && point.y.is_finite());
        assert_eq!(point, DrawingArea::default().center());
    }

    #[test]
    fn test_bounds_ignore_non_finite() {
        let bounds = Bounds::from_locations(vec![
            Location::new(1.0, f64::NAN),
            Location::new(f64::INFINITY, 2.0),
            Location::new(4.0, 6.0),
        ]);

        assert_eq!(bounds.min_x, 1.0);
        assert_eq!(bounds.max_x, 4.0);
        assert_eq!(bounds.min_y, 2.0);
        assert_eq!(bounds.max_y, 6.0);
    }

    #[test]
    fn test_drawing_area_rejects_oversized_padding() {
        assert!(DrawingArea::new(60.0, 300.0, 30.0).is_err());
        assert!(DrawingArea::new(400.0, 300.0, -1.0).is_err());
        assert!(DrawingArea::new(f64::NAN, 300.0, 0.0).is_err());
        assert!(DrawingArea::new(61.0, 61.0, 30.0).is_ok());
    }
}
