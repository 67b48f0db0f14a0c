//! # Profile JSON
//!
//! The stitched boundary of the selected profile is handed to the editor
//! as reference geometry: an array of paths, each an array of points whose
//! coordinates are strings rounded to a fixed number of significant digits.
//!
//! ```json
//! [[{"x":"2.54","y":"7.62"},{"x":"2.54","y":"2.54"}],[...]]
//! ```

use serde::{Deserialize, Serialize};
use voronoi_sketch_core::{Error, MessageError, Point, Result};

use crate::curve::CurveFragment;
use crate::stitch::StitchedLoop;

/// One point of a profile path as exchanged with the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfilePoint {
    pub x: String,
    pub y: String,
}

impl ProfilePoint {
    pub fn from_point(point: &Point, digits: usize) -> Self {
        Self {
            x: format_significant(point.x, digits),
            y: format_significant(point.y, digits),
        }
    }
}

/// Format `value` with `digits` significant digits, trailing zeros removed.
///
/// Behaves like C's `%g` without switching to exponent notation:
/// `12.7` → `"12.7"`, `8.21947` → `"8.219"`, `123456.0` → `"123500"`.
pub fn format_significant(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let digits = digits.clamp(1, 17) as i32;
    let exponent = value.abs().log10().floor() as i32;

    let mut text = if exponent >= digits {
        let scale = 10f64.powi(exponent - digits + 1);
        format!("{:.0}", (value / scale).round() * scale)
    } else {
        let decimals = (digits - 1 - exponent).max(0) as usize;
        format!("{:.*}", decimals, value)
    };

    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.');
        text = trimmed.to_string();
    }
    if text == "-0" {
        text = "0".to_string();
    }
    text
}

/// Convert fragments into profile paths, one path per fragment.
pub fn profile_paths(fragments: &[CurveFragment], digits: usize) -> Vec<Vec<ProfilePoint>> {
    fragments
        .iter()
        .map(|f| {
            f.points()
                .iter()
                .map(|p| ProfilePoint::from_point(p, digits))
                .collect()
        })
        .collect()
}

/// Serialize a stitched loop as profile JSON.
pub fn to_profile_json(stitched: &StitchedLoop, digits: usize) -> Result<String> {
    serde_json::to_string(&profile_paths(stitched.fragments(), digits))
        .map_err(|e| Error::other(format!("Failed to serialize profile: {}", e)))
}

// The editor coerces coordinates with Number(), so accept both forms.
#[derive(Deserialize)]
#[serde(untagged)]
enum Coordinate {
    Number(f64),
    Text(String),
}

impl Coordinate {
    fn value(&self, axis: &str) -> Result<f64> {
        match self {
            Coordinate::Number(v) => Ok(*v),
            Coordinate::Text(s) => s.trim().parse::<f64>().map_err(|_| {
                MessageError::InvalidNumber {
                    argument: axis.to_string(),
                    value: s.clone(),
                }
                .into()
            }),
        }
    }
}

#[derive(Deserialize)]
struct RawPoint {
    x: Coordinate,
    y: Coordinate,
}

/// Parse profile JSON back into fragments.
pub fn parse_profile(json: &str) -> Result<Vec<CurveFragment>> {
    let raw: Vec<Vec<RawPoint>> =
        serde_json::from_str(json).map_err(|e| MessageError::InvalidJson {
            reason: e.to_string(),
        })?;

    raw.iter()
        .map(|path| {
            let points = path
                .iter()
                .map(|p| Ok(Point::new(p.x.value("x")?, p.y.value("y")?)))
                .collect::<Result<Vec<Point>>>()?;
            Ok(CurveFragment::new(points))
        })
        .collect()
}
