//! Seedavatar - command-line tool for generating deterministic SVG avatars

use std::process::ExitCode;

use seedavatar::cli;

fn main() -> ExitCode {
    cli::run()
}
