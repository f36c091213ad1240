//! `gradient`: a rotated three-stop linear gradient.

use crate::color::{contrasting, Color, ColorScheme, CONTRAST_THRESHOLD};
use crate::style::{DrawOptions, Style};

use super::cycle;

/// Background, a contrasting middle color, then the opposite luminance extreme.
#[derive(Debug, Clone, Copy, Default)]
pub struct Gradient;

impl Style for Gradient {
    fn name(&self) -> &str {
        "gradient"
    }

    fn draw(&self, hash: u32, options: &DrawOptions<'_>) -> String {
        let Some(scheme) = ColorScheme::new(options.palette.colors(), options.variant) else {
            return String::new();
        };
        let angle = hash % 360;
        let middle = middle_color(&scheme, hash >> 3);

        format!(
            concat!(
                r#"<defs><linearGradient id="gradient" gradientTransform="rotate({angle}, 0.5, 0.5)">"#,
                r#"<stop offset="0%" stop-color="{start}"/>"#,
                r#"<stop offset="50%" stop-color="{middle}"/>"#,
                r#"<stop offset="100%" stop-color="{end}"/>"#,
                r#"</linearGradient></defs>"#,
                r#"<rect width="100" height="100" fill="url(#gradient)"/>"#,
            ),
            angle = angle,
            start = scheme.background,
            middle = middle,
            end = scheme.opposite,
        )
    }
}

/// Middle stop: a high-contrast color other than the two extremes, relaxing
/// the contrast filter and then the extremes rule when the palette is sparse.
fn middle_color(scheme: &ColorScheme, index: u32) -> Color {
    let inner: Vec<Color> =
        scheme.foreground.iter().filter(|c| **c != scheme.opposite).cloned().collect();
    let strong = contrasting(&inner, &scheme.background, CONTRAST_THRESHOLD);
    if !strong.is_empty() {
        return cycle(&strong, index).clone();
    }
    if !inner.is_empty() {
        return cycle(&inner, index).clone();
    }
    scheme.opposite.clone()
}
