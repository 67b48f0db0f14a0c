//! Configuration for Voronoi sketch placement
//!
//! Configuration is organized into two sections:
//! - Geometry settings (stitch tolerance, curve sampling, profile precision)
//! - Document defaults (units, construction plane, fallback drawing size)
//!
//! Files are JSON or TOML, chosen by extension.

pub use voronoi_sketch_core::units::MeasurementSystem;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info};
use voronoi_sketch_core::{Error, Result, DEFAULT_TOLERANCE};

/// Plane a new sketch is created on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstructionPlane {
    #[default]
    Xy,
    Xz,
    Yz,
}

impl ConstructionPlane {
    pub const ALL: [ConstructionPlane; 3] = [Self::Xy, Self::Xz, Self::Yz];
}

impl fmt::Display for ConstructionPlane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Xy => write!(f, "XY Plane"),
            Self::Xz => write!(f, "XZ Plane"),
            Self::Yz => write!(f, "YZ Plane"),
        }
    }
}

impl FromStr for ConstructionPlane {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        match key.trim_end_matches(" plane") {
            "xy" => Ok(Self::Xy),
            "xz" => Ok(Self::Xz),
            "yz" => Ok(Self::Yz),
            _ => Err(format!("Unknown construction plane: {}", s)),
        }
    }
}

/// Geometry settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometrySettings {
    /// Per-axis endpoint match tolerance for stitching
    pub tolerance: f64,
    /// Arc-length distance between curve samples
    pub sample_step: f64,
    /// Significant digits in profile JSON
    pub significant_digits: usize,
}

impl Default for GeometrySettings {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            sample_step: 2.0,
            significant_digits: 4,
        }
    }
}

/// Document defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentSettings {
    pub measurement_system: MeasurementSystem,
    pub construction_plane: ConstructionPlane,
    /// Drawing width used when the editor does not declare one
    pub default_width: f64,
    /// Drawing height used when the editor does not declare one
    pub default_height: f64,
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            measurement_system: MeasurementSystem::default(),
            construction_plane: ConstructionPlane::default(),
            default_width: 15.0,
            default_height: 10.0,
        }
    }
}

/// Complete configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub geometry: GeometrySettings,
    pub document: DocumentSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults with the measurement system picked from the host's unit
    pub fn for_host_default_units(units: &str) -> Self {
        let mut config = Self::default();
        config.document.measurement_system = MeasurementSystem::from_host_default_units(units);
        config
    }

    /// Platform config location, e.g. `~/.config/voronoi-sketch/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("voronoi-sketch").join("config.toml"))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::other(format!("Failed to read config file: {}", e)))?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .map_err(|e| Error::other(format!("Invalid JSON config: {}", e)))?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)
                .map_err(|e| Error::other(format!("Invalid TOML config: {}", e)))?
        } else {
            return Err(Error::other("Config file must be .json or .toml"));
        };

        config.validate()?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `path` when it exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self)
                .map_err(|e| Error::other(format!("Failed to serialize config: {}", e)))?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(self)
                .map_err(|e| Error::other(format!("Failed to serialize config: {}", e)))?
        } else {
            return Err(Error::other("Config file must be .json or .toml"));
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
            .map_err(|e| Error::other(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let geometry = &self.geometry;
        if !(geometry.tolerance.is_finite() && geometry.tolerance > 0.0) {
            return Err(Error::other("Stitch tolerance must be > 0"));
        }

        if !(geometry.sample_step.is_finite() && geometry.sample_step > 0.0) {
            return Err(Error::other("Sample step must be > 0"));
        }

        if !(1..=15).contains(&geometry.significant_digits) {
            return Err(Error::other("Significant digits must be between 1 and 15"));
        }

        let document = &self.document;
        if !(document.default_width > 0.0 && document.default_height > 0.0) {
            return Err(Error::other("Default drawing dimensions must be > 0"));
        }

        Ok(())
    }

    /// Merge another config into this one, taking only sections that differ from defaults
    pub fn merge(&mut self, other: &Config) {
        if other.geometry != GeometrySettings::default() {
            self.geometry = other.geometry.clone();
        }
        if other.document != DocumentSettings::default() {
            self.document = other.document.clone();
        }
    }
}
