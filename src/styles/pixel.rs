//! `pixel`: an 8x8 grid of independently colored cells.

use crate::color::ColorScheme;
use crate::hash;
use crate::style::{DrawOptions, Style};
use crate::svg;

use super::{background_only, cycle};

const GRID: u32 = 8;
const CELL: f64 = svg::VIEWBOX / GRID as f64;

/// Cell `i` (row-major) is on when hash bit `i % 32` is set and takes color
/// `(hash >> (i % 8)) % foreground.len()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pixel;

impl Style for Pixel {
    fn name(&self) -> &str {
        "pixel"
    }

    fn draw(&self, hash: u32, options: &DrawOptions<'_>) -> String {
        let Some(scheme) = ColorScheme::new(options.palette.colors(), options.variant) else {
            return String::new();
        };
        if scheme.foreground.is_empty() {
            return background_only(&scheme.background);
        }

        let mut body = svg::background(&scheme.background);
        for y in 0..GRID {
            for x in 0..GRID {
                let index = y * GRID + x;
                if !hash::bit(hash, index) {
                    continue;
                }
                let color = cycle(&scheme.foreground, hash >> (index % 8));
                body.push_str(&svg::rect(
                    f64::from(x) * CELL,
                    f64::from(y) * CELL,
                    CELL,
                    CELL,
                    color,
                ));
            }
        }
        body
    }
}
