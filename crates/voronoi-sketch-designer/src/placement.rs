//! # Placement
//!
//! Computes the translation that moves freshly imported SVG geometry to
//! where the user expects it.
//!
//! SVG places its origin at the top-left with Y increasing downward, while
//! sketches are Y-up. With a target region, the artifact's origin is moved
//! onto the region's lower-left corner shifted up by the region height.
//! Without one, the geometry is lifted by the artifact's own height so it
//! sits right-side-up from the plane origin.

use nalgebra::{Matrix4, Vector3};
use serde::{Deserialize, Serialize};
use tracing::debug;
use voronoi_sketch_core::{BoundingBox, GeometryError, Point};

/// Origin convention of the imported artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OriginConvention {
    /// Origin at top-left, Y increasing downward (SVG)
    #[default]
    TopLeftYDown,
}

/// Where the artifact should land.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlacementTarget {
    /// Align with a selected region's bounds
    Region(BoundingBox),
    /// Free placement from the sketch plane origin
    Free,
}

impl PlacementTarget {
    pub fn region(min: Point, max: Point) -> Self {
        Self::Region(BoundingBox::new(min, max))
    }
}

/// Translation applied to imported geometry.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlacementOffset {
    pub dx: f64,
    pub dy: f64,
    pub dz: f64,
}

impl PlacementOffset {
    pub fn new(dx: f64, dy: f64, dz: f64) -> Self {
        Self { dx, dy, dz }
    }

    pub fn apply(&self, point: &Point) -> Point {
        point.translated(self.dx, self.dy, self.dz)
    }

    pub fn apply_all(&self, points: &[Point]) -> Vec<Point> {
        points.iter().map(|p| self.apply(p)).collect()
    }

    /// Homogeneous translation matrix, translation in the last column.
    pub fn to_matrix(&self) -> Matrix4<f64> {
        Matrix4::new_translation(&Vector3::new(self.dx, self.dy, self.dz))
    }
}

/// Compute the offset for an artifact of `source_height`.
///
/// - Region: `dx = min.x`, `dy = (max.y - min.y) + min.y`, `dz = 0`
/// - Free: `dx = 0`, `dy = source_height`, `dz = 0`
///
/// # Errors
/// `InvalidBounds` when the region or the height is not finite.
pub fn compute_offset(
    target: &PlacementTarget,
    convention: OriginConvention,
    source_height: f64,
) -> Result<PlacementOffset, GeometryError> {
    if !source_height.is_finite() {
        return Err(GeometryError::invalid_bounds(format!(
            "source height {} is not finite",
            source_height
        )));
    }

    let offset = match (convention, target) {
        (OriginConvention::TopLeftYDown, PlacementTarget::Region(bounds)) => {
            bounds.validate()?;
            PlacementOffset::new(bounds.min.x, bounds.height() + bounds.min.y, 0.0)
        }
        (OriginConvention::TopLeftYDown, PlacementTarget::Free) => {
            PlacementOffset::new(0.0, source_height, 0.0)
        }
    };

    debug!(
        "Placement offset ({}, {}, {}) for {:?}",
        offset.dx, offset.dy, offset.dz, target
    );
    Ok(offset)
}
