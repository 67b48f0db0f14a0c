//! # Voronoi Sketch
//!
//! Host-side logic for adding drawings from a Voronoi pattern editor to a
//! CAD sketch:
//! - Stitching the boundary curves of a selected profile into one loop
//! - Exchanging JSON messages with the editor palette
//! - Placing the published SVG so its top-left origin lands where expected
//!
//! ## Architecture
//!
//! The workspace is organized as several crates:
//!
//! 1. **voronoi-sketch-core** - Points, bounds, length units, errors
//! 2. **voronoi-sketch-designer** - Curve sampling, stitching, placement, profile JSON, SVG
//! 3. **voronoi-sketch-settings** - Configuration (JSON/TOML)
//! 4. **voronoi-sketch-palette** - Palette message parsing and the `init` payload
//! 5. **voronoi-sketch** - Publish session and the command-line driver

pub mod session;

pub use voronoi_sketch_core::units;
pub use voronoi_sketch_designer as designer;

pub use voronoi_sketch_core::{
    BoundingBox, Error, GeometryError, LengthUnit, MeasurementSystem, MessageError, Point, Result,
    DEFAULT_TOLERANCE,
};

pub use voronoi_sketch_designer::{
    compute_offset, parse_profile, sample_curves, stitch, to_profile_json, CurveEvaluator,
    CurveFragment, CurveSegment, OriginConvention, PlacementOffset, PlacementTarget, ProfileCurve,
    StitchStatus, StitchedLoop, SvgArtifact,
};

pub use voronoi_sketch_palette::{parse_message, InitPayload, PaletteMessage, PublishArguments};

pub use voronoi_sketch_settings::{Config, ConstructionPlane, DocumentSettings, GeometrySettings};

pub use session::{new_sketch_name, PublishPlan, PublishSession, SessionAction};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Pretty console output on stderr, leaving stdout for JSON results
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
