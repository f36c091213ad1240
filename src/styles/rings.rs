//! `rings`: concentric circles.

use crate::color::ColorScheme;
use crate::style::{DrawOptions, Style};
use crate::svg;

use super::{background_only, cycle};

/// Three to six concentric rings drawn largest first.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rings;

impl Style for Rings {
    fn name(&self) -> &str {
        "rings"
    }

    fn draw(&self, hash: u32, options: &DrawOptions<'_>) -> String {
        let Some(scheme) = ColorScheme::new(options.palette.colors(), options.variant) else {
            return String::new();
        };
        if scheme.foreground.is_empty() {
            return background_only(&scheme.background);
        }

        let count = hash % 4 + 3;
        let max_radius = svg::VIEWBOX / 2.0;
        let mut body = svg::background(&scheme.background);
        for i in 0..count {
            let color = cycle(&scheme.foreground, hash >> i);
            let radius = max_radius * (1.0 - f64::from(i) / f64::from(count));
            body.push_str(&svg::circle(50.0, 50.0, radius, color));
        }
        body
    }
}
