//! route-viz core
//!
//! Interactive route map for CVRP solutions: maps instance geometry into a
//! drawing area, renders routes and markers into a scene, and tracks the
//! pan/zoom viewport driven by pointer, wheel and button input.

pub mod error;
pub mod model;
pub mod mapper;
pub mod style;
pub mod config;
pub mod renderer;
pub mod viewport;
pub mod controller;
pub mod controls;
pub mod surface;
pub mod visualization;
pub mod svg;

pub use error::{Error, Result};
