//! Configuration schema types for `avatar.toml`

use serde::{Deserialize, Serialize};

use crate::options::{AvatarOptions, Variant, DEFAULT_PALETTE, DEFAULT_SIZE, DEFAULT_STYLE};
use crate::palette::{Palette, PaletteError};

/// Root of an `avatar.toml` file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AvatarConfig {
    /// Options used when the caller does not override them
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// Extra palettes registered on top of the built-ins
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub palettes: Vec<PaletteConfig>,
}

/// `[defaults]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultsConfig {
    /// Default style name
    #[serde(default = "default_style")]
    pub style: String,
    /// Default palette name
    #[serde(default = "default_palette")]
    pub palette: String,
    /// Default pixel size
    #[serde(default = "default_size")]
    pub size: u32,
    /// Default light/dark variant
    #[serde(default)]
    pub variant: Variant,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            style: default_style(),
            palette: default_palette(),
            size: default_size(),
            variant: Variant::default(),
        }
    }
}

fn default_style() -> String {
    DEFAULT_STYLE.to_string()
}

fn default_palette() -> String {
    DEFAULT_PALETTE.to_string()
}

fn default_size() -> u32 {
    DEFAULT_SIZE
}

impl DefaultsConfig {
    /// Generation options carrying these defaults.
    pub fn to_options(&self) -> AvatarOptions {
        AvatarOptions {
            style: self.style.clone(),
            palette: self.palette.clone(),
            size: self.size,
            variant: self.variant,
            display_name: None,
        }
    }
}

/// One `[[palettes]]` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaletteConfig {
    /// Registry name
    pub name: String,
    /// Hex colors
    pub colors: Vec<String>,
}

impl PaletteConfig {
    /// Validate the entry into a [`Palette`].
    pub fn to_palette(&self) -> Result<Palette, PaletteError> {
        Palette::new(self.name.as_str(), &self.colors)
    }
}
