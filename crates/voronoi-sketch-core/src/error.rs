//! Error handling for Voronoi sketch placement
//!
//! Provides error types for each layer of the workspace:
//! - Geometry errors (stitching, sampling, placement)
//! - Message errors (editor palette payloads)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Geometry error type
///
/// Represents errors raised while sampling profile curves, stitching
/// fragments into a loop, or computing a placement offset.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// No fragments were supplied
    #[error("No curve fragments supplied")]
    EmptyInput,

    /// A fragment has fewer than two points
    #[error("Fragment {index} is degenerate: {points} point(s), at least 2 required")]
    DegenerateFragment {
        /// Position of the fragment in the input.
        index: usize,
        /// Number of points the fragment carried.
        points: usize,
    },

    /// Stitching could not connect every fragment
    #[error("Unresolved gap: connected {connected} of {total} fragments")]
    UnresolvedGap {
        /// Fragments chained before the gap, seed included.
        connected: usize,
        /// Total number of fragments in the loop.
        total: usize,
    },

    /// Non-finite coordinates or dimensions
    #[error("Invalid bounds: {reason}")]
    InvalidBounds {
        /// What was not finite.
        reason: String,
    },

    /// Tolerance is negative or not finite
    #[error("Invalid tolerance: {tolerance}")]
    InvalidTolerance {
        /// The rejected tolerance.
        tolerance: f64,
    },

    /// Sampling step is not a positive finite length
    #[error("Invalid sample step: {step}")]
    InvalidSampleStep {
        /// The rejected step.
        step: f64,
    },

    /// Curve cannot be evaluated
    #[error("Invalid curve: {reason}")]
    InvalidCurve {
        /// The reason the curve was rejected.
        reason: String,
    },
}

impl GeometryError {
    /// Build an `InvalidBounds` error from a message
    pub fn invalid_bounds(reason: impl Into<String>) -> Self {
        GeometryError::InvalidBounds {
            reason: reason.into(),
        }
    }
}

/// Message error type
///
/// Represents errors decoding or encoding the JSON messages exchanged
/// with the editor palette.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MessageError {
    /// Payload is not valid JSON
    #[error("Invalid JSON payload: {reason}")]
    InvalidJson {
        /// The parser's description of the problem.
        reason: String,
    },

    /// Action name is not recognised
    #[error("Unknown palette action: {action}")]
    UnknownAction {
        /// The action that was sent.
        action: String,
    },

    /// Required argument is absent
    #[error("Missing argument '{argument}'")]
    MissingArgument {
        /// The argument name.
        argument: String,
    },

    /// Percent-encoded text could not be decoded
    #[error("Invalid encoding: {reason}")]
    InvalidEncoding {
        /// The reason decoding failed.
        reason: String,
    },

    /// Numeric argument could not be parsed
    #[error("Invalid number for '{argument}': {value}")]
    InvalidNumber {
        /// The argument name.
        argument: String,
        /// The raw value.
        value: String,
    },
}

/// Main error type
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Message error
    #[error(transparent)]
    Message(#[from] MessageError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a geometry error
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, Error::Geometry(_))
    }

    /// Check if this is a message error
    pub fn is_message_error(&self) -> bool {
        matches!(self, Error::Message(_))
    }

    /// Check if this is the soft stitching failure
    pub fn is_unresolved_gap(&self) -> bool {
        matches!(self, Error::Geometry(GeometryError::UnresolvedGap { .. }))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
