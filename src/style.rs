//! Colors, the route palette and stroke/marker styles.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};

/// A CSS color string, usually `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

const DEFAULT_ROUTE_COLORS: [&str; 8] = [
    "#10b981", "#3b82f6", "#f59e0b", "#ef4444", "#8b5cf6", "#ec4899", "#14b8a6", "#f97316",
];

/// Fixed, cyclically indexed set of route colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_ROUTE_COLORS.iter().map(|&c| Color::new(c)).collect(),
        }
    }
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> Result<Self> {
        let palette = Self { colors };
        palette.validate()?;
        Ok(palette)
    }

    pub fn validate(&self) -> Result<()> {
        if self.colors.is_empty() {
            return Err(Error::EmptyPalette);
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color for the route at `route_index`, wrapping around the palette.
    ///
    /// An empty palette (only reachable by skipping validation) yields black.
    pub fn color_for(&self, route_index: usize) -> Color {
        if self.colors.is_empty() {
            return Color::new("#000000");
        }
        self.colors[route_index % self.colors.len()].clone()
    }
}

/// Stroke used for route segments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeStyle {
    pub width: f64,
    pub opacity: f64,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            width: 1.5,
            opacity: 0.6,
        }
    }
}

/// Appearance of a point marker and its text label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub radius: f64,
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f64,
    pub label_color: Color,
    pub label_size: f64,
    /// Distance of the label baseline above the marker center.
    pub label_offset: f64,
    pub label_bold: bool,
}

impl MarkerStyle {
    pub fn customer() -> Self {
        Self {
            radius: 4.0,
            fill: Color::new("#64748b"),
            stroke: Color::new("#94a3b8"),
            stroke_width: 1.0,
            label_color: Color::new("#cbd5e1"),
            label_size: 8.0,
            label_offset: 8.0,
            label_bold: false,
        }
    }

    pub fn depot() -> Self {
        Self {
            radius: 6.0,
            fill: Color::new("#ef4444"),
            stroke: Color::new("#fca5a5"),
            stroke_width: 2.0,
            label_color: Color::new("#fca5a5"),
            label_size: 9.0,
            label_offset: 12.0,
            label_bold: true,
        }
    }
}

/// Marker fields a host may override; unset fields keep the role default.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct MarkerStyleOverrides {
    radius: Option<f64>,
    fill: Option<Color>,
    stroke: Option<Color>,
    stroke_width: Option<f64>,
    label_color: Option<Color>,
    label_size: Option<f64>,
    label_offset: Option<f64>,
    label_bold: Option<bool>,
}

impl MarkerStyleOverrides {
    fn apply(self, base: MarkerStyle) -> MarkerStyle {
        MarkerStyle {
            radius: self.radius.unwrap_or(base.radius),
            fill: self.fill.unwrap_or(base.fill),
            stroke: self.stroke.unwrap_or(base.stroke),
            stroke_width: self.stroke_width.unwrap_or(base.stroke_width),
            label_color: self.label_color.unwrap_or(base.label_color),
            label_size: self.label_size.unwrap_or(base.label_size),
            label_offset: self.label_offset.unwrap_or(base.label_offset),
            label_bold: self.label_bold.unwrap_or(base.label_bold),
        }
    }
}

pub(crate) fn customer_marker_overrides<'de, D>(deserializer: D) -> std::result::Result<MarkerStyle, D::Error>
where
    D: Deserializer<'de>,
{
    MarkerStyleOverrides::deserialize(deserializer).map(|overrides| overrides.apply(MarkerStyle::customer()))
}

pub(crate) fn depot_marker_overrides<'de, D>(deserializer: D) -> std::result::Result<MarkerStyle, D::Error>
where
    D: Deserializer<'de>,
{
    MarkerStyleOverrides::deserialize(deserializer).map(|overrides| overrides.apply(MarkerStyle::depot()))
}
