//! Configuration loading and discovery for `avatar.toml`

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use super::schema::AvatarConfig;
use crate::generator::AvatarGenerator;
use crate::options::{AvatarOptions, Variant};
use crate::palette::PaletteError;

/// File name searched for by [`find_config`].
pub const CONFIG_FILE_NAME: &str = "avatar.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse avatar.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// A `[[palettes]]` entry is invalid
    #[error("Invalid palette in avatar.toml: {0}")]
    Palette(#[from] PaletteError),
}

/// Command-line values that take precedence over `[defaults]`
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override style
    pub style: Option<String>,
    /// Override palette
    pub palette: Option<String>,
    /// Override size
    pub size: Option<u32>,
    /// Override variant
    pub variant: Option<Variant>,
    /// Display name for the initials style
    pub display_name: Option<String>,
}

/// Find `avatar.toml` by walking up from the current working directory.
pub fn find_config() -> Option<PathBuf> {
    env::current_dir().ok().and_then(find_config_from)
}

/// Find `avatar.toml` by walking up from `start`.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.is_file() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration.
///
/// With an explicit `path` the file must exist. Without one, the file is
/// discovered with [`find_config`]; when none is found the defaults apply.
///
/// Every `[[palettes]]` entry is validated here so a bad color is reported at
/// load time rather than when the palette is first used.
///
/// # Example
/// ```ignore
/// let config = load_config(None)?;
/// let config = load_config(Some(Path::new("site/avatar.toml")))?;
/// ```
pub fn load_config(path: Option<&Path>) -> Result<AvatarConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => load_config_file(&p),
        None => {
            debug!("no avatar.toml found, using defaults");
            Ok(AvatarConfig::default())
        }
    }
}

fn load_config_file(path: &Path) -> Result<AvatarConfig, ConfigError> {
    debug!(path = %path.display(), "loading config");
    let contents = fs::read_to_string(path)?;
    parse_config(&contents)
}

/// Parse and validate `avatar.toml` contents.
pub fn parse_config(contents: &str) -> Result<AvatarConfig, ConfigError> {
    let config: AvatarConfig = toml::from_str(contents)?;
    for entry in &config.palettes {
        entry.to_palette()?;
    }
    Ok(config)
}

/// Register the configured palettes with `generator`.
///
/// Returns how many palettes were registered. Entries that share a name with
/// an existing palette replace it, with the usual overwrite warning.
pub fn apply_config(config: &AvatarConfig, generator: &mut AvatarGenerator) -> Result<usize, ConfigError> {
    for entry in &config.palettes {
        generator.register_palette(entry.to_palette()?);
    }
    if !config.palettes.is_empty() {
        info!(count = config.palettes.len(), "registered configured palettes");
    }
    Ok(config.palettes.len())
}

/// Build generation options from the config defaults and CLI overrides.
///
/// CLI arguments take precedence over config file values.
pub fn resolve_options(config: &AvatarConfig, overrides: &CliOverrides) -> AvatarOptions {
    let mut options = config.defaults.to_options();

    if let Some(ref style) = overrides.style {
        options.style = style.clone();
    }
    if let Some(ref palette) = overrides.palette {
        options.palette = palette.clone();
    }
    if let Some(size) = overrides.size {
        options.size = size;
    }
    if let Some(variant) = overrides.variant {
        options.variant = variant;
    }
    options.display_name = overrides.display_name.clone();

    options
}
