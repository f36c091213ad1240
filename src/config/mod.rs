//! Configuration for the `seedavatar` command-line tool
//!
//! Provides types and loading for the optional `avatar.toml` file.

pub mod loader;
pub mod schema;

pub use loader::*;
pub use schema::*;
