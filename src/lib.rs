//! Seedavatar - deterministic SVG avatars from any seed string
//!
//! This library provides functionality to:
//! - Hash a seed string into a stable 32-bit value
//! - Draw one of several built-in styles with a named color palette
//! - Return the result as SVG markup or a base64 data URI
//! - Register custom styles and palettes at runtime
//!
//! ```
//! use seedavatar::{generate_avatar, AvatarOptions, Variant};
//!
//! let options = AvatarOptions::default().with_style("rings").with_variant(Variant::Dark);
//! let uri = generate_avatar("user@example.com", &options).unwrap();
//! assert!(uri.starts_with("data:image/svg+xml;base64,"));
//! ```
//!
//! Hosts that want explicit ownership of their registries construct an
//! [`AvatarGenerator`] instead of using the free functions.

pub mod cli;
pub mod color;
pub mod config;
pub mod encode;
pub mod error;
pub mod generator;
pub mod hash;
pub mod options;
pub mod palette;
pub mod palettes;
pub mod preview;
pub mod registry;
pub mod sequence;
pub mod style;
pub mod styles;
pub mod suggest;
pub mod svg;

#[cfg(feature = "wasm")]
pub mod wasm;

use std::sync::Arc;

pub use error::AvatarError;
pub use generator::{AvatarGenerator, SharedGenerator};
pub use options::{AvatarOptions, Variant};
pub use palette::Palette;
pub use style::{style_fn, DrawOptions, Style};

/// Generate a data URI with the process-wide default generator.
///
/// # Errors
///
/// Returns [`AvatarError::UnknownStyle`] or [`AvatarError::UnknownPalette`]
/// when a requested name is not registered.
pub fn generate_avatar(seed: &str, options: &AvatarOptions) -> Result<String, AvatarError> {
    generator::global().generate(seed, options)
}

/// Register a style with the process-wide default generator.
pub fn register_style(style: impl Style + 'static) -> Option<Arc<dyn Style>> {
    generator::global().register_style(style)
}

/// Register a palette with the process-wide default generator.
pub fn register_palette(palette: Palette) -> Option<Palette> {
    generator::global().register_palette(palette)
}
