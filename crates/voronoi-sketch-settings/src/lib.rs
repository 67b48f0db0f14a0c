//! Voronoi Sketch Settings Crate
//!
//! Geometry tolerances and document defaults, loaded from JSON or TOML.

pub mod config;

pub use config::{Config, ConstructionPlane, DocumentSettings, GeometrySettings, MeasurementSystem};
