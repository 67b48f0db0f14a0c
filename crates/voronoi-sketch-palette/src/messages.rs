//! Palette message definitions.
//!
//! Inbound: `{"action": "started" | "close" | "publish", "arguments": {...}}`.
//! Payloads that are empty, not an object, or lack `action` are not
//! messages at all (the palette also echoes handler return values) and
//! parse to `None`.

use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, trace};
use voronoi_sketch_core::{MessageError, Result};
use voronoi_sketch_designer::ProfilePoint;

/// Message sent by the editor palette
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteMessage {
    /// Palette finished loading and wants the `init` payload
    Started,
    /// Palette asks to be hidden
    Close,
    /// Editor drawing should be added to a sketch
    Publish(PublishArguments),
}

impl PaletteMessage {
    /// Action name as sent on the wire
    pub fn action(&self) -> &'static str {
        match self {
            Self::Started => "started",
            Self::Close => "close",
            Self::Publish(_) => "publish",
        }
    }
}

/// Arguments of a `publish` action
#[derive(Debug, Clone, PartialEq)]
pub struct PublishArguments {
    /// Sketch name typed in the editor, `None` when blank
    pub sketch_name: Option<String>,
    /// Decoded SVG text
    pub svg: String,
    /// Declared drawing width, `None` when absent, blank, or zero
    pub width: Option<f64>,
    /// Declared drawing height, `None` when absent, blank, or zero
    pub height: Option<f64>,
}

/// Parse a raw palette payload.
///
/// # Errors
/// `InvalidJson` for malformed JSON, `UnknownAction` for unrecognised
/// actions, `MissingArgument`/`InvalidEncoding`/`InvalidNumber` for a
/// `publish` with bad arguments.
pub fn parse_message(payload: &str) -> Result<Option<PaletteMessage>> {
    if payload.trim().is_empty() {
        return Ok(None);
    }

    let value: Value = serde_json::from_str(payload).map_err(|e| MessageError::InvalidJson {
        reason: e.to_string(),
    })?;

    let object = match value {
        Value::Object(object) => object,
        _ => {
            trace!("Ignoring non-object palette payload");
            return Ok(None);
        }
    };

    let action = match object.get("action") {
        Some(Value::String(action)) => action.as_str(),
        Some(_) | None => {
            trace!("Ignoring palette payload without action");
            return Ok(None);
        }
    };

    let empty = Map::new();
    let arguments = match object.get("arguments") {
        Some(Value::Object(arguments)) => arguments,
        _ => &empty,
    };

    let message = match action {
        "started" => PaletteMessage::Started,
        "close" => PaletteMessage::Close,
        "publish" => PaletteMessage::Publish(parse_publish(arguments)?),
        other => {
            return Err(MessageError::UnknownAction {
                action: other.to_string(),
            }
            .into())
        }
    };

    debug!("Palette message: {}", message.action());
    Ok(Some(message))
}

fn parse_publish(arguments: &Map<String, Value>) -> Result<PublishArguments> {
    let encoded = match arguments.get("svg") {
        Some(Value::String(svg)) => svg,
        _ => {
            return Err(MessageError::MissingArgument {
                argument: "svg".to_string(),
            }
            .into())
        }
    };

    let svg = percent_decode_str(encoded)
        .decode_utf8()
        .map_err(|e| MessageError::InvalidEncoding {
            reason: e.to_string(),
        })?
        .into_owned();

    let sketch_name = arguments
        .get("sketchName")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string);

    Ok(PublishArguments {
        sketch_name,
        svg,
        width: dimension(arguments, "width")?,
        height: dimension(arguments, "height")?,
    })
}

// Blank and zero values, numeric or string, mean "not declared" so a zero
// size falls through to the SVG's own size or the configured default.
fn dimension(arguments: &Map<String, Value>, name: &str) -> Result<Option<f64>> {
    let value = match arguments.get(name) {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) if s.trim().is_empty() => return Ok(None),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    };

    match value {
        Some(v) if v.is_finite() => Ok(Some(v).filter(|v| *v != 0.0)),
        _ => Err(MessageError::InvalidNumber {
            argument: name.to_string(),
            value: arguments
                .get(name)
                .map(Value::to_string)
                .unwrap_or_default(),
        }
        .into()),
    }
}

/// Payload of the host's `init` message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitPayload {
    pub sketch_name: String,
    /// Unit symbol, `in` or `cm`
    pub units: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Stitched profile paths, sent as a JSON array of point arrays
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<Vec<Vec<ProfilePoint>>>,
}

impl InitPayload {
    pub fn new(sketch_name: impl Into<String>, units: impl Into<String>) -> Self {
        Self {
            sketch_name: sketch_name.into(),
            units: units.into(),
            width: None,
            height: None,
            profile: None,
        }
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_profile(mut self, paths: Vec<Vec<ProfilePoint>>) -> Self {
        self.profile = Some(paths);
        self
    }

    /// Serialize for `sendInfoToHTML("init", ...)`
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            MessageError::InvalidJson {
                reason: e.to_string(),
            }
            .into()
        })
    }
}
