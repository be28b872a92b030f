//! Route renderer: turns an instance and its solution into a flat scene.
//!
//! The scene is expressed in drawing-area coordinates and is independent of
//! any viewport state. Output is deterministic: segments follow route order,
//! then visit order; markers list customers in instance order, depot last.
//! A location with a non-finite coordinate has no place in the drawing: it
//! gets no marker, and segments touching it are skipped like dangling ids.

use std::collections::HashMap;

use kurbo::{Line, Point};
use tracing::debug;

use crate::config::RenderConfig;
use crate::mapper::{CoordinateMapper, DrawingArea};
use crate::model::{CustomerId, Instance, Location, Solution};
use crate::style::{Color, MarkerStyle, Palette, StrokeStyle};

pub const DEPOT_LABEL: &str = "DEPOT";

/// Where a segment sits within its route's loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// Depot to the first customer.
    DepotDeparture,
    /// Customer to customer.
    Transit,
    /// Last customer back to the depot.
    DepotReturn,
}

/// A stop along a route loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stop {
    Depot,
    Customer(CustomerId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub route_index: usize,
    pub vehicle_id: u32,
    pub kind: SegmentKind,
    pub line: Line,
    pub color: Color,
    pub stroke: StrokeStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Depot,
    Customer(CustomerId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub kind: MarkerKind,
    pub position: Point,
    pub label: String,
    pub style: MarkerStyle,
}

impl Marker {
    /// Anchor of the label text, above the marker.
    pub fn label_anchor(&self) -> Point {
        Point::new(self.position.x, self.position.y - self.style.label_offset)
    }
}

/// Everything needed to draw one solution, in drawing-area coordinates.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    pub segments: Vec<Segment>,
    pub markers: Vec<Marker>,
}

impl Scene {
    /// Segments belonging to the route at `route_index`.
    pub fn route_segments(&self, route_index: usize) -> impl Iterator<Item = &Segment> {
        self.segments
            .iter()
            .filter(move |segment| segment.route_index == route_index)
    }

    pub fn depot(&self) -> Option<&Marker> {
        self.markers
            .iter()
            .find(|marker| marker.kind == MarkerKind::Depot)
    }

    pub fn customer_markers(&self) -> impl Iterator<Item = &Marker> {
        self.markers
            .iter()
            .filter(|marker| matches!(marker.kind, MarkerKind::Customer(_)))
    }
}

#[derive(Debug, Clone)]
pub struct RouteRenderer {
    area: DrawingArea,
    palette: Palette,
    stroke: StrokeStyle,
    customer_marker: MarkerStyle,
    depot_marker: MarkerStyle,
}

impl Default for RouteRenderer {
    fn default() -> Self {
        Self::new(&RenderConfig::default())
    }
}

impl RouteRenderer {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            area: config.area,
            palette: config.palette.clone(),
            stroke: config.route_stroke,
            customer_marker: config.customer_marker.clone(),
            depot_marker: config.depot_marker.clone(),
        }
    }

    pub fn area(&self) -> DrawingArea {
        self.area
    }

    pub fn render(&self, instance: &Instance, solution: &Solution) -> Scene {
        let mapper = CoordinateMapper::for_instance(instance, self.area);
        let place = |location: Location| Some(mapper.map(location)).filter(|point| point.is_finite());
        let depot = place(instance.depot);
        let mut positions: HashMap<CustomerId, Point> = HashMap::with_capacity(instance.customers.len());
        for customer in &instance.customers {
            if let Some(position) = place(customer.location) {
                positions.entry(customer.id).or_insert(position);
            }
        }

        let resolve = |stop: Stop| match stop {
            Stop::Depot => depot,
            Stop::Customer(id) => positions.get(&id).copied(),
        };

        let mut segments = Vec::new();
        for (route_index, route) in solution.routes.iter().enumerate() {
            if route.customer_sequence.is_empty() {
                continue;
            }

            let color = self.palette.color_for(route_index);
            let stops: Vec<Stop> = std::iter::once(Stop::Depot)
                .chain(route.customer_sequence.iter().map(|&id| Stop::Customer(id)))
                .chain(std::iter::once(Stop::Depot))
                .collect();
            let last_leg = stops.len() - 2;

            for (leg, pair) in stops.windows(2).enumerate() {
                let (Some(from), Some(to)) = (resolve(pair[0]), resolve(pair[1])) else {
                    debug!(
                        route_index,
                        vehicle_id = route.vehicle_id,
                        from = ?pair[0],
                        to = ?pair[1],
                        "skipping segment with unknown or unplaceable stop"
                    );
                    continue;
                };

                let kind = if leg == 0 {
                    SegmentKind::DepotDeparture
                } else if leg == last_leg {
                    SegmentKind::DepotReturn
                } else {
                    SegmentKind::Transit
                };

                segments.push(Segment {
                    route_index,
                    vehicle_id: route.vehicle_id,
                    kind,
                    line: Line::new(from, to),
                    color: color.clone(),
                    stroke: self.stroke,
                });
            }
        }

        let mut markers: Vec<Marker> = instance
            .customers
            .iter()
            .filter_map(|customer| {
                Some(Marker {
                    kind: MarkerKind::Customer(customer.id),
                    position: place(customer.location)?,
                    label: customer.id.to_string(),
                    style: self.customer_marker.clone(),
                })
            })
            .collect();
        if let Some(position) = depot {
            markers.push(Marker {
                kind: MarkerKind::Depot,
                position,
                label: DEPOT_LABEL.to_string(),
                style: self.depot_marker.clone(),
            });
        } else {
            debug!("depot has a non-finite coordinate; not drawn");
        }

        Scene { segments, markers }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Customer, Route};

    fn square_instance() -> Instance {
        Instance::new(
            Location::new(5.0, 5.0),
            vec![
                Customer::new(1, Location::new(0.0, 0.0), 1.0),
                Customer::new(2, Location::new(10.0, 10.0), 1.0),
                Customer::new(3, Location::new(0.0, 10.0), 1.0),
            ],
        )
    }

    #[test]
    fn test_single_customer_route_has_departure_and_return() {
        let scene = RouteRenderer::default().render(
            &square_instance(),
            &Solution::new(vec![Route::new(0, vec![3])]),
        );

        let kinds: Vec<_> = scene.segments.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![SegmentKind::DepotDeparture, SegmentKind::DepotReturn]);
        assert_eq!(scene.segments[0].line.p0, scene.segments[1].line.p1);
    }

    #[test]
    fn test_dangling_first_stop_keeps_later_segments() {
        let scene = RouteRenderer::default().render(
            &square_instance(),
            &Solution::new(vec![Route::new(0, vec![42, 1, 2])]),
        );

        let kinds: Vec<_> = scene.segments.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![SegmentKind::Transit, SegmentKind::DepotReturn]);
    }

    #[test]
    fn test_duplicate_customer_ids_resolve_to_first_position() {
        let mut instance = square_instance();
        instance.customers.push(Customer::new(1, Location::new(10.0, 0.0), 1.0));

        let scene = RouteRenderer::default().render(
            &instance,
            &Solution::new(vec![Route::new(0, vec![1])]),
        );
        assert_eq!(scene.customer_markers().count(), 4);
        let first = scene.customer_markers().next().unwrap().position;
        assert_eq!(scene.segments[0].line.p1, first);
    }

    #[test]
    fn test_segments_carry_route_metadata() {
        let scene = RouteRenderer::default().render(
            &square_instance(),
            &Solution::new(vec![Route::new(7, vec![1]), Route::new(9, vec![2, 3])]),
        );

        assert_eq!(scene.route_segments(0).count(), 2);
        assert_eq!(scene.route_segments(1).count(), 3);
        assert!(scene.route_segments(1).all(|s| s.vehicle_id == 9));
        assert!(scene.segments.iter().all(|s| s.stroke == StrokeStyle::default()));
    }

    #[test]
    fn test_non_finite_customer_is_not_drawn() {
        let mut instance = square_instance();
        instance.customers.push(Customer::new(4, Location::new(f64::NAN, 3.0), 1.0));

        let scene = RouteRenderer::default().render(
            &instance,
            &Solution::new(vec![Route::new(0, vec![1, 4, 2])]),
        );

        assert_eq!(scene.customer_markers().count(), 3);
        let kinds: Vec<_> = scene.segments.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![SegmentKind::DepotDeparture, SegmentKind::DepotReturn]);
        assert!(scene.segments.iter().all(|s| s.line.p0.is_finite() && s.line.p1.is_finite()));
    }

    #[test]
    fn test_non_finite_depot_drops_depot_legs() {
        let mut instance = square_instance();
        instance.depot = Location::new(f64::INFINITY, 5.0);

        let scene = RouteRenderer::default().render(
            &instance,
            &Solution::new(vec![Route::new(0, vec![1, 2])]),
        );

        assert!(scene.depot().is_none());
        assert_eq!(scene.customer_markers().count(), 3);
        let kinds: Vec<_> = scene.segments.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![SegmentKind::Transit]);
    }

    #[test]
    fn test_labels() {
        let scene = RouteRenderer::default().render(&square_instance(), &Solution::default());

        let depot = scene.depot().unwrap();
        assert_eq!(depot.label, DEPOT_LABEL);
        assert_eq!(depot.label_anchor(), Point::new(depot.position.x, depot.position.y - 12.0));
        let labels: Vec<_> = scene.customer_markers().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, vec!["1", "2", "3"]);
    }
}
