//! # SVG Artifact
//!
//! The editor publishes its drawing as SVG text, optionally with a declared
//! width and height in centimeters. Only the dimensions matter here: the
//! height drives the placement offset. When the editor omits them, they are
//! read from the `<svg>` element (`width`/`height`, overridden by `viewBox`)
//! and converted to centimeters. Unitless values and `viewBox` entries are
//! editor pixels at 96 per inch. Failing that, the defaults of 15 × 10 apply.

use tracing::debug;
use voronoi_sketch_core::units::{convert, pixels_to_cm, LengthUnit};
use voronoi_sketch_core::{Error, Result};

/// Drawing returned by the editor, with resolved dimensions in centimeters.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgArtifact {
    pub content: String,
    pub width: f64,
    pub height: f64,
}

impl SvgArtifact {
    pub const DEFAULT_WIDTH: f64 = 15.0;
    pub const DEFAULT_HEIGHT: f64 = 10.0;

    /// Build an artifact from decoded SVG text and the editor's declared size.
    ///
    /// Declared values win when they are positive and finite.
    pub fn new(
        content: impl Into<String>,
        declared_width: Option<f64>,
        declared_height: Option<f64>,
    ) -> Result<Self> {
        Self::with_fallback_size(
            content,
            declared_width,
            declared_height,
            Self::DEFAULT_WIDTH,
            Self::DEFAULT_HEIGHT,
        )
    }

    /// Like [`SvgArtifact::new`], with caller-supplied defaults for the last resort.
    pub fn with_fallback_size(
        content: impl Into<String>,
        declared_width: Option<f64>,
        declared_height: Option<f64>,
        fallback_width: f64,
        fallback_height: f64,
    ) -> Result<Self> {
        let content = content.into();
        if !content.contains("<svg") {
            return Err(Error::other("Invalid SVG: missing <svg> element"));
        }

        let (intrinsic_width, intrinsic_height) = Self::intrinsic_size(&content);
        let usable = |v: &f64| v.is_finite() && *v > 0.0;

        let width = declared_width
            .filter(usable)
            .or(intrinsic_width.filter(usable))
            .unwrap_or(fallback_width);
        let height = declared_height
            .filter(usable)
            .or(intrinsic_height.filter(usable))
            .unwrap_or(fallback_height);

        debug!("SVG artifact {} x {} ({} bytes)", width, height, content.len());

        Ok(Self {
            content,
            width,
            height,
        })
    }

    /// Width and height declared on the root `<svg>` element, in centimeters.
    pub fn intrinsic_size(svg_content: &str) -> (Option<f64>, Option<f64>) {
        let mut width = None;
        let mut height = None;

        if let Some(svg_start) = svg_content.find("<svg") {
            if let Some(svg_end) = svg_content[svg_start..].find('>') {
                let svg_tag = &svg_content[svg_start..svg_start + svg_end];

                width = Self::extract_attr_length(svg_tag, "width");
                height = Self::extract_attr_length(svg_tag, "height");

                if let Some(viewbox_str) = Self::extract_attr_str(svg_tag, "viewBox") {
                    let parts: Vec<f64> = viewbox_str
                        .split(|c: char| c.is_whitespace() || c == ',')
                        .filter(|s| !s.is_empty())
                        .filter_map(|s| s.parse().ok())
                        .collect();
                    if parts.len() == 4 {
                        width = Some(pixels_to_cm(parts[2]));
                        height = Some(pixels_to_cm(parts[3]));
                    }
                }
            }
        }

        (width, height)
    }

    fn extract_attr_str<'a>(tag: &'a str, attr: &str) -> Option<&'a str> {
        let pattern = format!(" {}=\"", attr);
        let start = tag.find(&pattern)?;
        let val_start = start + pattern.len();
        let end = tag[val_start..].find('"')?;
        Some(&tag[val_start..val_start + end])
    }

    // "15cm", "6in", "960px" or a bare pixel count; percentages are ignored.
    fn extract_attr_length(tag: &str, attr: &str) -> Option<f64> {
        let raw = Self::extract_attr_str(tag, attr)?.trim();
        let split = raw
            .find(|c: char| c.is_ascii_alphabetic() || c == '%')
            .unwrap_or(raw.len());
        let (number, suffix) = raw.split_at(split);
        let value: f64 = number.trim().parse().ok()?;

        match suffix {
            "" | "px" => Some(pixels_to_cm(value)),
            _ => {
                let unit = suffix.parse::<LengthUnit>().ok()?;
                Some(convert(value, unit, LengthUnit::Centimeter))
            }
        }
    }
}
