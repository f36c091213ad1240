//! Generate and styles command implementations

use std::path::Path;
use std::process::ExitCode;

use crate::config::{resolve_options, CliOverrides};

use super::{load_generator, report_avatar_error, EXIT_SUCCESS};

/// Execute the generate command
pub fn run_generate(
    config_path: Option<&Path>,
    seed: &str,
    overrides: &CliOverrides,
    raw_svg: bool,
) -> ExitCode {
    let (generator, config) = match load_generator(config_path) {
        Ok(loaded) => loaded,
        Err(code) => return code,
    };
    let options = resolve_options(&config, overrides);

    let result = if raw_svg {
        generator.render_svg(seed, &options)
    } else {
        generator.generate(seed, &options)
    };

    match result {
        Ok(output) => {
            println!("{}", output);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => report_avatar_error(&e, &generator),
    }
}

/// Execute the styles command
pub fn run_styles(config_path: Option<&Path>, json: bool) -> ExitCode {
    let (generator, _) = match load_generator(config_path) {
        Ok(loaded) => loaded,
        Err(code) => return code,
    };
    let names = generator.style_names();

    if json {
        println!("{}", serde_json::json!(names));
    } else {
        println!("Registered styles:");
        for name in &names {
            println!("  {}", name);
        }
    }
    ExitCode::from(EXIT_SUCCESS)
}
