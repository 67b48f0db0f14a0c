//! # Voronoi Sketch Palette
//!
//! The editor runs in an HTML palette and talks to the host through JSON
//! strings. Inbound payloads carry an `action` and its `arguments`; the
//! host answers with an `init` payload describing the target sketch.

pub mod messages;

pub use messages::{parse_message, InitPayload, PaletteMessage, PublishArguments};
