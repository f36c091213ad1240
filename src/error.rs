//! Top-level error type for avatar generation.

use thiserror::Error;

use crate::palette::PaletteError;

/// Errors that abort a generation call.
///
/// Unknown names are the only failures during generation; sparse palettes
/// and missing display names degrade to a simpler image instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AvatarError {
    /// Requested style is not registered
    #[error("Avatar style \"{0}\" not found")]
    UnknownStyle(String),
    /// Requested palette is not registered
    #[error("Color palette \"{0}\" not found")]
    UnknownPalette(String),
    /// A palette could not be built
    #[error(transparent)]
    Palette(#[from] PaletteError),
}
