//! Palette command implementations

use clap::Subcommand;
use std::path::Path;
use std::process::ExitCode;

use crate::registry::Registry;

use super::{load_generator, report_avatar_error, EXIT_SUCCESS};

#[derive(Subcommand)]
pub enum PaletteAction {
    /// List all registered palettes
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the colors of one palette, sorted by luminance
    Show {
        /// Name of the palette to show
        name: String,
    },
}

/// Execute the palettes command
pub fn run_palettes(config_path: Option<&Path>, action: PaletteAction) -> ExitCode {
    let (generator, _) = match load_generator(config_path) {
        Ok(loaded) => loaded,
        Err(code) => return code,
    };
    let registry = generator.palettes();

    match action {
        PaletteAction::List { json } => {
            let names = registry.sorted_names();
            if json {
                let entries: Vec<serde_json::Value> = names
                    .iter()
                    .filter_map(|name| registry.get(name))
                    .map(|palette| {
                        let colors: Vec<&str> = palette.colors().iter().map(|c| c.as_str()).collect();
                        serde_json::json!({ "name": palette.name(), "colors": colors })
                    })
                    .collect();
                println!("{}", serde_json::Value::Array(entries));
            } else {
                println!("Registered palettes:");
                for name in &names {
                    let count = registry.get(name).map_or(0, |p| p.len());
                    println!("  {} ({} colors)", name, count);
                }
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        PaletteAction::Show { name } => match registry.resolve(&name) {
            Ok(palette) => {
                println!("Palette: {}", palette.name());
                println!();
                for color in crate::color::sort_by_luminance(palette.colors()) {
                    println!("  {:<10} luminance {:>6.1}", color.as_str(), color.luminance());
                }
                ExitCode::from(EXIT_SUCCESS)
            }
            Err(e) => report_avatar_error(&e, &generator),
        },
    }
}
