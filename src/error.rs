//! Error type for the route-map core.
//!
//! Only configuration and output sinks can fail. Bad data inside an
//! instance or solution is recovered where it is found and never surfaces here.

use std::fmt;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("drawing area {width}x{height} cannot hold padding {padding} on both sides")]
    InvalidDrawingArea { width: f64, height: f64, padding: f64 },
    #[error("zoom limits [{min}, {max}] are not a positive, ordered range")]
    InvalidZoomLimits { min: f64, max: f64 },
    #[error("zoom factor `{name}` must be positive and finite, got {value}")]
    InvalidZoomFactor { name: &'static str, value: f64 },
    #[error("palette must contain at least one color")]
    EmptyPalette,
    #[error("failed to parse render configuration")]
    Config(#[from] serde_json::Error),
    #[error("surface refused wheel listener: {0}")]
    Surface(String),
    #[error("failed to write svg output")]
    Format(#[from] fmt::Error),
}
