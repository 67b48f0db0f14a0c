//! # Voronoi Sketch Core
//!
//! Core types and utilities shared by the Voronoi sketch crates.
//! Provides the value types for points and bounding boxes, length unit
//! handling, and the error taxonomy used across the workspace.

pub mod error;
pub mod geometry;
pub mod units;

pub use error::{Error, GeometryError, MessageError, Result};
pub use geometry::{BoundingBox, Point, DEFAULT_TOLERANCE};
pub use units::{LengthUnit, MeasurementSystem};
