//! Built-in avatar styles.
//!
//! Every style follows the same outline:
//!
//! 1. Split the palette into a background and foreground candidates with
//!    [`ColorScheme`](crate::color::ColorScheme), based on the variant.
//! 2. Fall back to a plain background when the palette has fewer foreground
//!    colors than the style needs.
//! 3. Derive counts, positions and color picks from the hash, either by bit
//!    extraction or through a hash-seeded [`Sequence`](crate::sequence::Sequence).
//! 4. Emit SVG primitives in the `0 0 100 100` viewBox.

mod bauhaus;
mod block;
mod gradient;
mod initials;
mod nebula;
mod pixel;
mod polygon;
mod rings;
mod stripes;

use std::sync::Arc;

use crate::color::Color;
use crate::style::Style;
use crate::svg;

pub use bauhaus::Bauhaus;
pub use block::Block;
pub use gradient::Gradient;
pub use initials::{initials, Initials};
pub use nebula::Nebula;
pub use pixel::Pixel;
pub use polygon::Polygon;
pub use rings::Rings;
pub use stripes::Stripes;

/// List of all built-in style names, in catalogue order.
const BUILTIN_NAMES: &[&str] =
    &["block", "gradient", "rings", "stripes", "nebula", "polygon", "bauhaus", "pixel", "initials"];

/// Returns a list of all built-in style names.
pub fn list_builtins() -> Vec<&'static str> {
    BUILTIN_NAMES.to_vec()
}

/// All built-in styles, ready for registration.
pub fn all_builtins() -> Vec<Arc<dyn Style>> {
    vec![
        Arc::new(Block),
        Arc::new(Gradient),
        Arc::new(Rings),
        Arc::new(Stripes),
        Arc::new(Nebula),
        Arc::new(Polygon),
        Arc::new(Bauhaus),
        Arc::new(Pixel),
        Arc::new(Initials),
    ]
}

/// Body for a palette too sparse for the style: just the background.
fn background_only(background: &Color) -> String {
    svg::background(background)
}

/// Pick `colors[index % len]`.
fn cycle(colors: &[Color], index: u32) -> &Color {
    &colors[index as usize % colors.len()]
}
