//! Preview and palette-guide command implementations

use std::path::Path;
use std::process::ExitCode;

use crate::options::Variant;
use crate::palette::Palette;
use crate::preview::{self, GalleryOptions};

use super::{load_generator, report_avatar_error, EXIT_ERROR, EXIT_SUCCESS};

/// Execute the preview command
pub fn run_preview(
    config_path: Option<&Path>,
    dir: &Path,
    seed: String,
    name: String,
    variant: Variant,
) -> ExitCode {
    let (generator, config) = match load_generator(config_path) {
        Ok(loaded) => loaded,
        Err(code) => return code,
    };

    let options = GalleryOptions {
        seed,
        display_name: Some(name).filter(|n| !n.is_empty()),
        variant,
        size: config.defaults.size,
    };
    let entries = match preview::render_gallery(&generator, &options) {
        Ok(entries) => entries,
        Err(e) => return report_avatar_error(&e, &generator),
    };

    match preview::write_gallery(dir, &entries) {
        Ok(index) => {
            println!("Wrote {} avatars and {}", entries.len(), index.display());
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: Failed to write gallery to {}: {}", dir.display(), e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Execute the palette-guide command
pub fn run_palette_guide(config_path: Option<&Path>, dir: &Path) -> ExitCode {
    let (generator, _) = match load_generator(config_path) {
        Ok(loaded) => loaded,
        Err(code) => return code,
    };

    let palettes: Vec<&Palette> = generator
        .palette_names()
        .iter()
        .filter_map(|name| generator.palettes().get(name))
        .collect();

    match preview::write_palette_guide(dir, &palettes) {
        Ok((html, markdown)) => {
            println!("Wrote {} and {}", html.display(), markdown.display());
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: Failed to write palette guide to {}: {}", dir.display(), e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
