//! Unit conversion utilities
//!
//! Handles conversion between the host's internal length unit (centimeters),
//! inches, millimeters, and editor pixels (96 per inch).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Centimeters per inch.
pub const CM_PER_INCH: f64 = 2.54;

/// Editor pixels per inch.
pub const PIXELS_PER_INCH: f64 = 96.0;

/// Length unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// Centimeters, the host's internal unit
    Centimeter,
    /// Inches
    Inch,
    /// Millimeters
    Millimeter,
    /// Editor pixels
    Pixel,
}

impl LengthUnit {
    /// Short symbol as used in editor payloads ("cm", "in", "mm", "px")
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Centimeter => "cm",
            Self::Inch => "in",
            Self::Millimeter => "mm",
            Self::Pixel => "px",
        }
    }

    fn cm_per_unit(&self) -> f64 {
        match self {
            Self::Centimeter => 1.0,
            Self::Inch => CM_PER_INCH,
            Self::Millimeter => 0.1,
            Self::Pixel => CM_PER_INCH / PIXELS_PER_INCH,
        }
    }
}

impl Default for LengthUnit {
    fn default() -> Self {
        Self::Centimeter
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for LengthUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cm" | "centimeter" | "centimeters" => Ok(Self::Centimeter),
            "in" | "inch" | "inches" => Ok(Self::Inch),
            "mm" | "millimeter" | "millimeters" => Ok(Self::Millimeter),
            "px" | "pixel" | "pixels" => Ok(Self::Pixel),
            _ => Err(format!("Unknown length unit: {}", s)),
        }
    }
}

/// Measurement system offered to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// English system (inches)
    English,
    /// Metric system (centimeters)
    Metric,
}

impl MeasurementSystem {
    /// Pick the initial system from the host's default length unit.
    ///
    /// Inches and feet map to English, everything else to Metric.
    pub fn from_host_default_units(units: &str) -> Self {
        match units.trim() {
            "in" | "ft" => Self::English,
            _ => Self::Metric,
        }
    }

    /// Length unit used by the editor for this system
    pub fn unit(&self) -> LengthUnit {
        match self {
            Self::English => LengthUnit::Inch,
            Self::Metric => LengthUnit::Centimeter,
        }
    }

    /// Label shown in the units drop-down
    pub fn item_name(&self) -> &'static str {
        match self {
            Self::English => "English (Inches)",
            Self::Metric => "Metric (Centimeters)",
        }
    }
}

impl Default for MeasurementSystem {
    fn default() -> Self {
        Self::Metric
    }
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::English => write!(f, "English"),
            Self::Metric => write!(f, "Metric"),
        }
    }
}

impl FromStr for MeasurementSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(system) = [Self::English, Self::Metric]
            .into_iter()
            .find(|system| system.item_name() == s)
        {
            return Ok(system);
        }
        match s.to_lowercase().as_str() {
            "english" | "imperial" | "in" | "inch" => Ok(Self::English),
            "metric" | "cm" | "mm" => Ok(Self::Metric),
            _ => Err(format!("Unknown measurement system: {}", s)),
        }
    }
}

/// Convert a length between units
pub fn convert(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    if from == to {
        return value;
    }
    value * from.cm_per_unit() / to.cm_per_unit()
}

pub fn inches_to_cm(value: f64) -> f64 {
    value * CM_PER_INCH
}

/// Editor pixels to centimeters
pub fn pixels_to_cm(value: f64) -> f64 {
    inches_to_cm(value / PIXELS_PER_INCH)
}
