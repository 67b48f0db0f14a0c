//! Value types for profile geometry.
//!
//! Points and axis-aligned bounding boxes in the host document's length
//! unit. Equality between points is tolerance based, matching the host's
//! modeling tolerance rather than exact floating point comparison.

use crate::error::GeometryError;
use serde::{Deserialize, Serialize};

/// Default absolute tolerance used when comparing points.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// A point in the reference frame's length unit.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

impl Point {
    /// Creates a planar point (z = 0).
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Creates a point with an explicit z coordinate.
    pub fn new_3d(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Calculates the distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2) + (self.z - other.z).powi(2))
            .sqrt()
    }

    /// True when every coordinate differs by less than `tolerance`.
    pub fn approx_eq(&self, other: &Point, tolerance: f64) -> bool {
        (self.x - other.x).abs() < tolerance
            && (self.y - other.y).abs() < tolerance
            && (self.z - other.z).abs() < tolerance
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Returns this point shifted by the given deltas.
    pub fn translated(&self, dx: f64, dy: f64, dz: f64) -> Point {
        Point::new_3d(self.x + dx, self.y + dy, self.z + dz)
    }
}

/// Axis-aligned bounding box defined by its min and max corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Point,
    pub max: Point,
}

impl BoundingBox {
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Smallest box containing every point, or `None` for an empty iterator.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point>,
    {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        let mut bbox = BoundingBox::new(first, first);
        for p in iter {
            bbox.expand_to(p);
        }
        Some(bbox)
    }

    /// Grows the box to include `point`.
    pub fn expand_to(&mut self, point: &Point) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.min.z = self.min.z.min(point.z);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
        self.max.z = self.max.z.max(point.z);
    }

    /// Box covering both `self` and `other`.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        let mut combined = *self;
        combined.expand_to(&other.min);
        combined.expand_to(&other.max);
        combined
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Fails with `InvalidBounds` when any corner coordinate is not finite.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if !self.min.is_finite() {
            return Err(GeometryError::invalid_bounds(format!(
                "min corner ({}, {}, {}) is not finite",
                self.min.x, self.min.y, self.min.z
            )));
        }
        if !self.max.is_finite() {
            return Err(GeometryError::invalid_bounds(format!(
                "max corner ({}, {}, {}) is not finite",
                self.max.x, self.max.y, self.max.z
            )));
        }
        Ok(())
    }
}
