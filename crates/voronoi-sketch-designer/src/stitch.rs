//! # Curve-Loop Stitching
//!
//! Orders the unordered boundary fragments of a planar region into one
//! connected loop by matching shared endpoints.
//!
//! Matching is greedy and first-match: the pool of remaining fragments is
//! scanned in its current order and the first fragment whose start (kept
//! as-is) or end (reversed) meets the loop's current end point is taken.
//! There is no backtracking, so an ambiguous junction can consume a
//! fragment that a later step needed. When a scan finds nothing, the rest
//! of the pool is appended untouched and the loop is reported as having an
//! unresolved gap instead of failing outright.

use serde::Serialize;
use tracing::{debug, warn};
use voronoi_sketch_core::{BoundingBox, GeometryError, Point};

use crate::curve::CurveFragment;

/// How completely a stitch connected its fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum StitchStatus {
    /// A single fragment, returned unchanged; closure is not checked
    Single,
    /// Every fragment chained and the last end meets the first start
    Closed,
    /// Every fragment chained but the loop does not return to its start
    Open,
    /// A scan found no successor; fragments after `connected` are unmodified
    UnresolvedGap {
        /// Fragments chained before the gap, seed included.
        connected: usize,
    },
}

/// Where a stitched fragment came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StitchEntry {
    /// Index of the fragment in the stitcher's input.
    pub source_index: usize,
    /// True when the fragment's points were reversed to fit the loop.
    pub reversed: bool,
}

/// Result of [`stitch`]: fragments in traversal order plus a status.
#[derive(Debug, Clone, PartialEq)]
pub struct StitchedLoop {
    fragments: Vec<CurveFragment>,
    entries: Vec<StitchEntry>,
    status: StitchStatus,
}

impl StitchedLoop {
    pub fn fragments(&self) -> &[CurveFragment] {
        &self.fragments
    }

    pub fn into_fragments(self) -> Vec<CurveFragment> {
        self.fragments
    }

    /// Provenance of each fragment, parallel to [`fragments`](Self::fragments).
    pub fn entries(&self) -> &[StitchEntry] {
        &self.entries
    }

    pub fn status(&self) -> StitchStatus {
        self.status
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.status == StitchStatus::Closed
    }

    /// True when the result is a best-effort partial loop.
    pub fn is_partial(&self) -> bool {
        matches!(self.status, StitchStatus::UnresolvedGap { .. })
    }

    /// Concatenation of all fragment points in traversal order.
    pub fn path(&self) -> Vec<Point> {
        self.fragments
            .iter()
            .flat_map(|f| f.points().iter().copied())
            .collect()
    }

    /// Combined bounds of every fragment.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.fragments
            .iter()
            .filter_map(CurveFragment::bounding_box)
            .reduce(|acc, b| acc.union(&b))
    }

    /// Turns an unresolved gap into a hard `UnresolvedGap` error.
    pub fn into_complete(self) -> Result<Self, GeometryError> {
        match self.status {
            StitchStatus::UnresolvedGap { connected } => Err(GeometryError::UnresolvedGap {
                connected,
                total: self.fragments.len(),
            }),
            _ => Ok(self),
        }
    }
}

/// Stitch unordered fragments into one loop.
///
/// The first input fragment seeds the loop. Points are compared with an
/// absolute per-axis `tolerance`.
///
/// # Errors
/// - `EmptyInput` when `fragments` is empty
/// - `DegenerateFragment` when any fragment has fewer than two points
/// - `InvalidTolerance` when `tolerance` is not a positive finite number
pub fn stitch(fragments: &[CurveFragment], tolerance: f64) -> Result<StitchedLoop, GeometryError> {
    if !tolerance.is_finite() || tolerance <= 0.0 {
        return Err(GeometryError::InvalidTolerance { tolerance });
    }
    if fragments.is_empty() {
        return Err(GeometryError::EmptyInput);
    }
    if let Some((index, frag)) = fragments.iter().enumerate().find(|(_, f)| f.len() < 2) {
        return Err(GeometryError::DegenerateFragment {
            index,
            points: frag.len(),
        });
    }

    if fragments.len() == 1 {
        return Ok(StitchedLoop {
            fragments: fragments.to_vec(),
            entries: vec![StitchEntry {
                source_index: 0,
                reversed: false,
            }],
            status: StitchStatus::Single,
        });
    }

    let mut result = Vec::with_capacity(fragments.len());
    let mut entries = Vec::with_capacity(fragments.len());
    result.push(fragments[0].clone());
    entries.push(StitchEntry {
        source_index: 0,
        reversed: false,
    });

    let mut pool: Vec<usize> = (1..fragments.len()).collect();
    // validated above: every fragment has a last point
    let mut current_end = fragments[0].points()[fragments[0].len() - 1];

    while !pool.is_empty() {
        let mut found = None;
        for (pos, &idx) in pool.iter().enumerate() {
            let candidate = fragments[idx].points();
            if current_end.approx_eq(&candidate[0], tolerance) {
                found = Some((pos, false));
                break;
            } else if current_end.approx_eq(&candidate[candidate.len() - 1], tolerance) {
                found = Some((pos, true));
                break;
            }
        }

        let Some((pos, reversed)) = found else {
            let connected = result.len();
            warn!(
                "Stitching stopped after {} of {} fragments: no fragment meets ({:.6}, {:.6})",
                connected,
                fragments.len(),
                current_end.x,
                current_end.y
            );
            for idx in pool {
                result.push(fragments[idx].clone());
                entries.push(StitchEntry {
                    source_index: idx,
                    reversed: false,
                });
            }
            return Ok(StitchedLoop {
                fragments: result,
                entries,
                status: StitchStatus::UnresolvedGap { connected },
            });
        };

        let idx = pool.remove(pos);
        let next = if reversed {
            fragments[idx].reversed()
        } else {
            fragments[idx].clone()
        };
        current_end = next.points()[next.len() - 1];
        result.push(next);
        entries.push(StitchEntry {
            source_index: idx,
            reversed,
        });
    }

    let start = result[0].points()[0];
    let status = if current_end.approx_eq(&start, tolerance) {
        StitchStatus::Closed
    } else {
        StitchStatus::Open
    };

    debug!("Stitched {} fragments into a {:?} loop", result.len(), status);

    Ok(StitchedLoop {
        fragments: result,
        entries,
        status,
    })
}
