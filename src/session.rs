//! # Publish Session
//!
//! Host-side state of one editor palette: the sketch selected when the
//! command ran, the stitched profile (if a profile was selected) and the
//! configuration. Palette messages are turned into [`SessionAction`]s the
//! host carries out.
//!
//! Placement: with a selected profile the drawing is aligned to the
//! profile's bounds; otherwise it is lifted by its own height from the
//! plane origin.

use tracing::{debug, info, warn};
use voronoi_sketch_core::{BoundingBox, Result};
use voronoi_sketch_designer::{
    compute_offset, curves_bounding_box, profile_paths, sample_curves, stitch, CurveFragment,
    OriginConvention, PlacementOffset, PlacementTarget, ProfileCurve, StitchedLoop, SvgArtifact,
};
use voronoi_sketch_palette::{InitPayload, PaletteMessage, PublishArguments};
use voronoi_sketch_settings::{Config, ConstructionPlane};

/// Prefix given to sketches created for a drawing
pub const NEW_SKETCH_PREFIX: &str = "Voronoi - ";

/// Name for a sketch the host just created and named `host_name`.
pub fn new_sketch_name(host_name: &str) -> String {
    format!("{}{}", NEW_SKETCH_PREFIX, host_name)
}

/// What the host should do in response to a palette message
#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    /// Send `init` with this payload
    SendInit(InitPayload),
    /// Hide the palette
    Hide,
    /// Hide the palette and import the drawing
    Publish(PublishPlan),
}

/// Everything the host needs to import a published drawing
#[derive(Debug, Clone, PartialEq)]
pub struct PublishPlan {
    /// Sketch to look up by name; `None` or a missing sketch means create one
    pub sketch_name: Option<String>,
    /// Plane for a newly created sketch
    pub construction_plane: ConstructionPlane,
    pub artifact: SvgArtifact,
    /// Translation applied to the imported geometry
    pub offset: PlacementOffset,
}

impl PublishPlan {
    /// Row-major 4x4 move transform, translation in the last column
    pub fn transform(&self) -> [[f64; 4]; 4] {
        let matrix = self.offset.to_matrix();
        std::array::from_fn(|row| std::array::from_fn(|col| matrix[(row, col)]))
    }
}

/// State of one palette session
#[derive(Debug, Clone)]
pub struct PublishSession {
    config: Config,
    selected_sketch: Option<String>,
    profile: Option<StitchedLoop>,
    // Exact curve bounds when the profile came from curves that report them
    exact_region: Option<BoundingBox>,
}

impl PublishSession {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            selected_sketch: None,
            profile: None,
            exact_region: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn selected_sketch(&self) -> Option<&str> {
        self.selected_sketch.as_deref()
    }

    pub fn profile(&self) -> Option<&StitchedLoop> {
        self.profile.as_ref()
    }

    /// Record the sketch selected in the command dialog
    pub fn select_sketch(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.selected_sketch = if name.trim().is_empty() {
            None
        } else {
            Some(name)
        };
    }

    /// Stitch the boundary fragments of a selected profile.
    ///
    /// An unresolved gap is kept: the partial loop still bounds the region.
    pub fn select_profile_fragments(&mut self, fragments: &[CurveFragment]) -> Result<&StitchedLoop> {
        self.store_profile(fragments, None)
    }

    /// Sample boundary curves at the configured step, then stitch them.
    ///
    /// The placement region uses the curves' exact bounds when every curve
    /// can report them, so arc extremes between samples are not lost.
    pub fn select_profile_curves(&mut self, curves: &[ProfileCurve]) -> Result<&StitchedLoop> {
        let fragments = sample_curves(curves, self.config.geometry.sample_step)?;
        self.store_profile(&fragments, curves_bounding_box(curves))
    }

    fn store_profile(
        &mut self,
        fragments: &[CurveFragment],
        exact_region: Option<BoundingBox>,
    ) -> Result<&StitchedLoop> {
        let stitched = stitch(fragments, self.config.geometry.tolerance)?;
        if stitched.is_partial() {
            warn!(
                "Profile boundary has a gap; placing against {} of {} curves as stitched",
                stitched.len(),
                fragments.len()
            );
        }
        info!("Selected profile with {} curves ({:?})", stitched.len(), stitched.status());
        self.exact_region = exact_region;
        Ok(self.profile.insert(stitched))
    }

    /// Bounds of the selected profile, exact when known
    pub fn region(&self) -> Option<BoundingBox> {
        self.exact_region
            .or_else(|| self.profile.as_ref().and_then(StitchedLoop::bounding_box))
    }

    /// Payload for the editor's `init` message
    pub fn init_payload(&self) -> Result<InitPayload> {
        let system = self.config.document.measurement_system;
        let mut payload = InitPayload::new(
            self.selected_sketch.clone().unwrap_or_default(),
            system.unit().symbol(),
        );

        if let Some(bounds) = self.region() {
            payload = payload.with_size(bounds.width(), bounds.height());
        }
        if let Some(profile) = &self.profile {
            let paths = profile_paths(profile.fragments(), self.config.geometry.significant_digits);
            payload = payload.with_profile(paths);
        }

        Ok(payload)
    }

    /// React to a palette message
    pub fn handle(&mut self, message: PaletteMessage) -> Result<SessionAction> {
        match message {
            PaletteMessage::Started => Ok(SessionAction::SendInit(self.init_payload()?)),
            PaletteMessage::Close => Ok(SessionAction::Hide),
            PaletteMessage::Publish(arguments) => {
                Ok(SessionAction::Publish(self.plan_publish(arguments)?))
            }
        }
    }

    /// Resolve sketch, dimensions and offset for a published drawing.
    ///
    /// A sketch name typed in the editor replaces the selection.
    pub fn plan_publish(&mut self, arguments: PublishArguments) -> Result<PublishPlan> {
        if let Some(name) = arguments.sketch_name {
            if self.selected_sketch.as_deref() != Some(name.as_str()) {
                debug!("Editor sketch name '{}' replaces selection", name);
                self.selected_sketch = Some(name);
            }
        }

        let document = &self.config.document;
        let artifact = SvgArtifact::with_fallback_size(
            arguments.svg,
            arguments.width,
            arguments.height,
            document.default_width,
            document.default_height,
        )?;

        let target = match self.region() {
            Some(bounds) => PlacementTarget::Region(bounds),
            None => PlacementTarget::Free,
        };
        let offset = compute_offset(&target, OriginConvention::TopLeftYDown, artifact.height)?;

        info!(
            "Publishing {} x {} drawing to {}",
            artifact.width,
            artifact.height,
            self.selected_sketch.as_deref().unwrap_or("a new sketch")
        );

        Ok(PublishPlan {
            sketch_name: self.selected_sketch.clone(),
            construction_plane: document.construction_plane,
            artifact,
            offset,
        })
    }

    /// Name and remember a sketch the host created for the drawing
    pub fn record_created_sketch(&mut self, host_name: &str) -> String {
        let name = new_sketch_name(host_name);
        self.selected_sketch = Some(name.clone());
        name
    }
}
