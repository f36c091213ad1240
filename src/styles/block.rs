//! `block`: a 5x5 horizontally mirrored bit grid.

use crate::color::ColorScheme;
use crate::hash;
use crate::style::{DrawOptions, Style};
use crate::svg;

use super::cycle;

const GRID: u32 = 5;
const CELL: f64 = svg::VIEWBOX / GRID as f64;

/// Symmetric identicon grid in a single high-contrast color.
///
/// Cell `(x, y)` in the left three columns is filled when bit `y * 5 + x` of
/// the hash is set; columns 0 and 1 are mirrored onto 4 and 3.
#[derive(Debug, Clone, Copy, Default)]
pub struct Block;

impl Style for Block {
    fn name(&self) -> &str {
        "block"
    }

    fn draw(&self, hash: u32, options: &DrawOptions<'_>) -> String {
        let Some(scheme) = ColorScheme::new(options.palette.colors(), options.variant) else {
            return String::new();
        };
        let candidates = scheme.readable();
        let color = cycle(&candidates, hash);

        let mut body = svg::background(&scheme.background);
        for y in 0..GRID {
            for x in 0..GRID.div_ceil(2) {
                if !hash::bit(hash, y * GRID + x) {
                    continue;
                }
                let top = f64::from(y) * CELL;
                body.push_str(&svg::rect(f64::from(x) * CELL, top, CELL, CELL, color));
                let mirror = GRID - 1 - x;
                if mirror != x {
                    body.push_str(&svg::rect(f64::from(mirror) * CELL, top, CELL, CELL, color));
                }
            }
        }
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Color, CONTRAST_THRESHOLD};
    use crate::options::Variant;
    use crate::palette::Palette;
    use crate::palettes;

    fn draw(hash: u32, palette: &Palette, variant: Variant) -> String {
        Block.draw(hash, &DrawOptions { size: 100, palette, variant, display_name: None })
    }

    #[test]
    fn test_zero_hash_is_background_only() {
        let palette = palettes::get_builtin("grayscale").unwrap();
        assert_eq!(draw(0, &palette, Variant::Light), svg::background(&Color::parse("#eeeeee").unwrap()));
    }

    #[test]
    fn test_center_column_not_mirrored() {
        let palette = palettes::get_builtin("grayscale").unwrap();
        // bit 2 -> cell (2, 0) only
        let body = draw(1 << 2, &palette, Variant::Light);
        assert_eq!(body.matches("<rect x=").count(), 1);
        assert!(body.contains(r#"x="40" y="0""#));
    }

    #[test]
    fn test_left_column_mirrored() {
        let palette = palettes::get_builtin("grayscale").unwrap();
        // bit 5 -> cell (0, 1) plus mirror (4, 1)
        let body = draw(1 << 5, &palette, Variant::Light);
        assert!(body.contains(r#"x="0" y="20""#));
        assert!(body.contains(r#"x="80" y="20""#));
    }

    #[test]
    fn test_foreground_clears_contrast_threshold() {
        let palette = palettes::get_builtin("muted").unwrap();
        for variant in [Variant::Light, Variant::Dark] {
            let scheme = ColorScheme::new(palette.colors(), variant).unwrap();
            for hash in 1..200u32 {
                let body = draw(hash * 7919, &palette, variant);
                let Some(start) = body.find("<rect x=") else { continue };
                let fill_at = body[start..].find("fill=\"").unwrap() + start + 6;
                let hex = &body[fill_at..fill_at + 7];
                let color = Color::parse(hex).unwrap();
                assert!(color.contrast_with(&scheme.background) > CONTRAST_THRESHOLD);
            }
        }
    }

    #[test]
    fn test_low_contrast_palette_falls_back_to_opposite_extreme() {
        let palette = Palette::new("pale", ["#dddddd", "#eeeeee", "#e5e5e5"]).unwrap();
        let body = draw(u32::MAX, &palette, Variant::Light);
        assert!(body.contains(r##"fill="#dddddd""##));
        assert!(!body.contains(r##"<rect x="0" y="0" width="20" height="20" fill="#e5e5e5""##));
    }
}
