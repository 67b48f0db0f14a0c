//! # Voronoi Sketch Designer
//!
//! Host-independent geometry for placing a Voronoi drawing into a sketch:
//!
//! - [`curve`]: sampling a profile's boundary curves into point fragments
//! - [`stitch`]: ordering unordered fragments into one connected loop
//! - [`placement`]: translating SVG geometry (top-left, Y down) onto a
//!   target region or plane (Y up)
//! - [`profile`]: the JSON form of a stitched loop handed to the editor
//! - [`svg`]: dimensions of the SVG artifact returned by the editor

pub mod curve;
pub mod placement;
pub mod profile;
pub mod stitch;
pub mod svg;

pub use curve::{
    curves_bounding_box, sample_curves, CurveEvaluator, CurveFragment, CurveSegment,
    ParametricCurve, ProfileCurve, DEFAULT_SAMPLE_STEP, MAX_SAMPLES_PER_CURVE,
};
pub use placement::{compute_offset, OriginConvention, PlacementOffset, PlacementTarget};
pub use profile::{format_significant, parse_profile, profile_paths, to_profile_json, ProfilePoint};
pub use stitch::{stitch, StitchEntry, StitchStatus, StitchedLoop};
pub use svg::SvgArtifact;
