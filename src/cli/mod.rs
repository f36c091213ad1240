//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod generate;
mod info;
mod preview;

use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::config::{self, AvatarConfig};
use crate::error::AvatarError;
use crate::generator::AvatarGenerator;
use crate::options::Variant;
use crate::suggest::did_you_mean;

pub use info::PaletteAction;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Seedavatar - deterministic SVG avatars from any seed string
#[derive(Parser)]
#[command(name = "seedavatar")]
#[command(about = "Seedavatar - deterministic SVG avatars from any seed string")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to avatar.toml (default: search upward from the current directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate one avatar and print it as a data URI
    Generate {
        /// Seed string (user id, email, ...); empty gives the gray placeholder
        seed: String,

        /// Style name (default: block, or [defaults] in avatar.toml)
        #[arg(short, long)]
        style: Option<String>,

        /// Palette name (default: monokai, or [defaults] in avatar.toml)
        #[arg(short, long)]
        palette: Option<String>,

        /// Output width and height in pixels
        #[arg(long)]
        size: Option<u32>,

        /// Light or dark background
        #[arg(long, value_enum)]
        variant: Option<Variant>,

        /// Display name used by the initials style
        #[arg(short, long)]
        name: Option<String>,

        /// Print raw SVG markup instead of a data URI
        #[arg(long)]
        svg: bool,
    },

    /// List registered styles
    Styles {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List or inspect palettes
    Palettes {
        #[command(subcommand)]
        action: PaletteAction,
    },

    /// Render every style x palette combination into a directory
    Preview {
        /// Output directory
        dir: PathBuf,

        /// Seed used for every avatar
        #[arg(long, default_value = crate::preview::DEFAULT_PREVIEW_NAME)]
        seed: String,

        /// Display name used by the initials style
        #[arg(short, long, default_value = crate::preview::DEFAULT_PREVIEW_NAME)]
        name: String,

        /// Light or dark background
        #[arg(long, value_enum, default_value_t = Variant::Light)]
        variant: Variant,
    },

    /// Write HTML and Markdown swatch guides for every palette
    PaletteGuide {
        /// Output directory
        dir: PathBuf,
    },
}

/// Install the stderr log subscriber. WARN by default, DEBUG with `--verbose`.
fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .finish();
    // A subscriber may already be set when embedded; keep the existing one.
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Build a generator with the built-ins plus any configured palettes.
///
/// Prints the error and returns the exit code on failure.
pub(crate) fn load_generator(
    config_path: Option<&Path>,
) -> Result<(AvatarGenerator, AvatarConfig), ExitCode> {
    let loaded = config::load_config(config_path).and_then(|config| {
        let mut generator = AvatarGenerator::new();
        config::apply_config(&config, &mut generator)?;
        Ok((generator, config))
    });

    loaded.map_err(|e| {
        eprintln!("Error: {}", e);
        ExitCode::from(EXIT_ERROR)
    })
}

/// Report a generation error, with a hint for mistyped names.
pub(crate) fn report_avatar_error(error: &AvatarError, generator: &AvatarGenerator) -> ExitCode {
    eprintln!("Error: {}", error);
    let hint = match error {
        AvatarError::UnknownStyle(name) => {
            let names = generator.style_names();
            print_available("styles", &names);
            did_you_mean(name, names.iter().map(String::as_str))
        }
        AvatarError::UnknownPalette(name) => {
            let names = generator.palette_names();
            print_available("palettes", &names);
            did_you_mean(name, names.iter().map(String::as_str))
        }
        _ => return ExitCode::from(EXIT_ERROR),
    };
    if let Some(hint) = hint {
        eprintln!("{}", hint);
    }
    ExitCode::from(EXIT_INVALID_ARGS)
}

fn print_available(kind: &str, names: &[String]) {
    eprintln!("Available {}: {}", kind, names.join(", "));
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Generate { seed, style, palette, size, variant, name, svg } => {
            let overrides = config::CliOverrides { style, palette, size, variant, display_name: name };
            generate::run_generate(config_path, &seed, &overrides, svg)
        }
        Commands::Styles { json } => generate::run_styles(config_path, json),
        Commands::Palettes { action } => info::run_palettes(config_path, action),
        Commands::Preview { dir, seed, name, variant } => {
            preview::run_preview(config_path, &dir, seed, name, variant)
        }
        Commands::PaletteGuide { dir } => preview::run_palette_guide(config_path, &dir),
    }
}
