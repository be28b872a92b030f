//! Render configuration.
//!
//! Defaults reproduce the route map of the demo client. Hosts can override
//! any subset from JSON; missing keys keep their defaults.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::mapper::DrawingArea;
use crate::style::{self, MarkerStyle, Palette, StrokeStyle};

/// Zoom limits and the multiplicative factor of each zoom input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomSettings {
    pub min: f64,
    pub max: f64,
    /// Applied on a wheel-down tick.
    pub wheel_down_factor: f64,
    /// Applied on a wheel-up tick.
    pub wheel_up_factor: f64,
    /// Multiplied in by zoom-in, divided out by zoom-out.
    pub step_factor: f64,
}

impl Default for ZoomSettings {
    fn default() -> Self {
        Self {
            min: 0.5,
            max: 5.0,
            wheel_down_factor: 1.1,
            wheel_up_factor: 0.9,
            step_factor: 1.2,
        }
    }
}

impl ZoomSettings {
    pub fn validate(&self) -> Result<()> {
        if !(self.min.is_finite() && self.max.is_finite())
            || self.min <= 0.0
            || self.min > self.max
            || !(self.min..=self.max).contains(&1.0)
        {
            return Err(Error::InvalidZoomLimits {
                min: self.min,
                max: self.max,
            });
        }

        let factors = [
            ("wheel_down_factor", self.wheel_down_factor),
            ("wheel_up_factor", self.wheel_up_factor),
            ("step_factor", self.step_factor),
        ];
        for (name, value) in factors {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidZoomFactor { name, value });
            }
        }
        Ok(())
    }

    pub fn clamp(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min, self.max)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub area: DrawingArea,
    pub palette: Palette,
    pub route_stroke: StrokeStyle,
    #[serde(deserialize_with = "style::customer_marker_overrides")]
    pub customer_marker: MarkerStyle,
    #[serde(deserialize_with = "style::depot_marker_overrides")]
    pub depot_marker: MarkerStyle,
    pub zoom: ZoomSettings,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            area: DrawingArea::default(),
            palette: Palette::default(),
            route_stroke: StrokeStyle::default(),
            customer_marker: MarkerStyle::customer(),
            depot_marker: MarkerStyle::depot(),
            zoom: ZoomSettings::default(),
        }
    }
}

impl RenderConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_reader(reader: impl Read) -> Result<Self> {
        let config: Self = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.area.validate()?;
        self.palette.validate()?;
        self.zoom.validate()
    }
}
