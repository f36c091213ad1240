//! Per-call generation options with documented defaults.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Style used when none is requested.
pub const DEFAULT_STYLE: &str = "block";

/// Palette used when none is requested.
pub const DEFAULT_PALETTE: &str = "monokai";

/// Output size in pixels when none is requested.
pub const DEFAULT_SIZE: u32 = 100;

/// Which luminance extreme becomes the background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Lightest palette color as background
    #[default]
    Light,
    /// Darkest palette color as background
    Dark,
}

impl Variant {
    /// Lowercase name as used in options and config files.
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Light => "light",
            Variant::Dark => "dark",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Variant::Light),
            "dark" => Ok(Variant::Dark),
            _ => Err(format!("Unknown variant '{}', expected 'light' or 'dark'", s)),
        }
    }
}

/// Options for a single avatar.
///
/// Every field has a default, so callers only set what they care about:
///
/// ```
/// use seedavatar::options::{AvatarOptions, Variant};
///
/// let options = AvatarOptions::default().with_style("rings").with_variant(Variant::Dark);
/// assert_eq!(options.style, "rings");
/// assert_eq!(options.palette, "monokai");
/// assert_eq!(options.size, 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarOptions {
    /// Registered style name (default `block`)
    pub style: String,
    /// Output width and height in pixels (default 100)
    pub size: u32,
    /// Registered palette name (default `monokai`)
    pub palette: String,
    /// Background variant (default light)
    pub variant: Variant,
    /// Display name used by text styles such as `initials`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl Default for AvatarOptions {
    fn default() -> Self {
        Self {
            style: DEFAULT_STYLE.to_string(),
            size: DEFAULT_SIZE,
            palette: DEFAULT_PALETTE.to_string(),
            variant: Variant::default(),
            display_name: None,
        }
    }
}

impl AvatarOptions {
    /// Set the style name.
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    /// Set the palette name.
    pub fn with_palette(mut self, palette: impl Into<String>) -> Self {
        self.palette = palette.into();
        self
    }

    /// Set the output size.
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Set the background variant.
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the display name.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Size clamped to at least one pixel.
    pub fn effective_size(&self) -> u32 {
        self.size.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = AvatarOptions::default();
        assert_eq!(options.style, "block");
        assert_eq!(options.palette, "monokai");
        assert_eq!(options.size, 100);
        assert_eq!(options.variant, Variant::Light);
        assert!(options.display_name.is_none());
    }

    #[test]
    fn test_builders() {
        let options = AvatarOptions::default()
            .with_style("pixel")
            .with_palette("cool")
            .with_size(64)
            .with_variant(Variant::Dark)
            .with_display_name("Ada Lovelace");
        assert_eq!(options.style, "pixel");
        assert_eq!(options.palette, "cool");
        assert_eq!(options.size, 64);
        assert_eq!(options.variant, Variant::Dark);
        assert_eq!(options.display_name.as_deref(), Some("Ada Lovelace"));
    }

    #[test]
    fn test_effective_size_clamps_zero() {
        assert_eq!(AvatarOptions::default().with_size(0).effective_size(), 1);
        assert_eq!(AvatarOptions::default().with_size(48).effective_size(), 48);
    }

    #[test]
    fn test_variant_parse() {
        assert_eq!("light".parse::<Variant>(), Ok(Variant::Light));
        assert_eq!("DARK".parse::<Variant>(), Ok(Variant::Dark));
        assert!("dim".parse::<Variant>().is_err());
        assert_eq!(Variant::Dark.to_string(), "dark");
    }

    #[test]
    fn test_deserialize_partial() {
        let options: AvatarOptions = toml::from_str("style = \"rings\"\nvariant = \"dark\"").unwrap();
        assert_eq!(options.style, "rings");
        assert_eq!(options.variant, Variant::Dark);
        assert_eq!(options.palette, "monokai");
        assert_eq!(options.size, 100);
    }
}
