//! `stripes`: parallel bands at a hash-chosen angle.

use crate::color::ColorScheme;
use crate::style::{DrawOptions, Style};
use crate::svg;

use super::{background_only, cycle};

/// Bands cover a 200x200 square centered on the canvas so any rotation still
/// fills the viewBox.
const SPAN: f64 = 200.0;
const ORIGIN: f64 = -50.0;

/// Three to six parallel bands, rotated in 45 degree steps.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stripes;

impl Style for Stripes {
    fn name(&self) -> &str {
        "stripes"
    }

    fn draw(&self, hash: u32, options: &DrawOptions<'_>) -> String {
        let Some(scheme) = ColorScheme::new(options.palette.colors(), options.variant) else {
            return String::new();
        };
        if scheme.foreground.is_empty() {
            return background_only(&scheme.background);
        }

        let count = hash % 4 + 3;
        let angle = (hash >> 8) % 4 * 45;
        let width = SPAN / f64::from(count);

        let mut body = svg::background(&scheme.background);
        body.push_str(&format!(r#"<g transform="rotate({} 50 50)">"#, angle));
        for i in 0..count {
            let color = cycle(&scheme.foreground, hash >> i);
            let x = ORIGIN + f64::from(i) * width;
            body.push_str(&svg::rect(x, ORIGIN, width, SPAN, color));
        }
        body.push_str("</g>");
        body
    }
}
