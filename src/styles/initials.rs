//! `initials`: up to two letters from the display name.

use crate::color::ColorScheme;
use crate::style::{DrawOptions, Style};
use crate::svg;

/// Shown when no usable display name is given.
const FALLBACK: &str = "?";

/// Initials centered on the background in the opposite luminance extreme.
#[derive(Debug, Clone, Copy, Default)]
pub struct Initials;

impl Style for Initials {
    fn name(&self) -> &str {
        "initials"
    }

    fn draw(&self, _hash: u32, options: &DrawOptions<'_>) -> String {
        let Some(scheme) = ColorScheme::new(options.palette.colors(), options.variant) else {
            return String::new();
        };
        let text = initials(options.display_name);
        format!(
            concat!(
                "{}",
                r#"<text x="50" y="50" font-family="sans-serif" font-size="40" font-weight="bold" "#,
                r#"fill="{}" text-anchor="middle" dy=".35em">{}</text>"#,
            ),
            svg::background(&scheme.background),
            scheme.opposite,
            svg::escape(&text)
        )
    }
}

/// Derive uppercase initials from a display name.
///
/// Two or more words give the first letters of the first and last word; a
/// single word gives its first two letters; nothing gives `?`.
///
/// ```
/// use seedavatar::styles::initials;
///
/// assert_eq!(initials(Some("Ada King Lovelace")), "AL");
/// assert_eq!(initials(Some("grace")), "GR");
/// assert_eq!(initials(Some("   ")), "?");
/// assert_eq!(initials(None), "?");
/// ```
pub fn initials(display_name: Option<&str>) -> String {
    let words: Vec<&str> = display_name.unwrap_or_default().split_whitespace().collect();
    let letters: String = match words.as_slice() {
        [] => return FALLBACK.to_string(),
        [only] => only.chars().take(2).collect(),
        [first, .., last] => first.chars().take(1).chain(last.chars().take(1)).collect(),
    };
    letters.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Variant;
    use crate::palette::Palette;

    #[test]
    fn test_initials_rules() {
        assert_eq!(initials(Some("Ada Lovelace")), "AL");
        assert_eq!(initials(Some("  ada   lovelace  ")), "AL");
        assert_eq!(initials(Some("Q")), "Q");
        assert_eq!(initials(Some("émile zola")), "ÉZ");
        assert_eq!(initials(Some("")), "?");
    }

    #[test]
    fn test_text_contrasts_background() {
        let palette = Palette::new("duo", ["#101010", "#f0f0f0"]).unwrap();
        let light = Initials.draw(
            0,
            &DrawOptions {
                size: 100,
                palette: &palette,
                variant: Variant::Light,
                display_name: Some("Grace Hopper"),
            },
        );
        assert!(light.contains(r##"<rect width="100" height="100" fill="#f0f0f0"/>"##));
        assert!(light.contains(r##"fill="#101010" text-anchor="middle" dy=".35em">GH</text>"##));

        let dark = Initials.draw(
            0,
            &DrawOptions { size: 100, palette: &palette, variant: Variant::Dark, display_name: None },
        );
        assert!(dark.contains(r##"fill="#f0f0f0" text-anchor="middle" dy=".35em">?</text>"##));
    }

    #[test]
    fn test_markup_is_escaped() {
        let palette = Palette::new("duo", ["#000000", "#ffffff"]).unwrap();
        let body = Initials.draw(
            0,
            &DrawOptions {
                size: 100,
                palette: &palette,
                variant: Variant::Light,
                display_name: Some("<script> &co"),
            },
        );
        assert!(body.contains(">&lt;&amp;</text>"));
    }
}
