//! Color parsing and luminance utilities
//!
//! Palettes are written as hex strings. This module parses them once into
//! [`Color`] values that remember both the original text (emitted verbatim
//! into SVG markup) and the decoded RGB channels.
//!
//! Supported formats: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`. Alpha is
//! accepted but ignored; luminance only looks at RGB.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::options::Variant;

/// Minimum luminance difference (0-255 scale) for a foreground color to count
/// as readable against a background.
pub const CONTRAST_THRESHOLD: f64 = 60.0;

/// Error type for color parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input string was empty
    #[error("empty color string")]
    Empty,
    /// Input string doesn't start with '#'
    #[error("color must start with '#'")]
    MissingHash,
    /// Invalid length (must be 3, 4, 6, or 8 hex chars after #)
    #[error("invalid color length {0}, expected 3, 4, 6, or 8")]
    InvalidLength(usize),
    /// Contains non-hex characters
    #[error("invalid hex character '{0}'")]
    InvalidHex(char),
}

/// A parsed palette color.
///
/// Equality compares the decoded RGB channels, so `#FFF` and `#ffffff` are
/// the same color.
#[derive(Debug, Clone)]
pub struct Color {
    hex: String,
    rgb: [u8; 3],
}

impl Color {
    /// Parse a hex color string.
    ///
    /// # Examples
    ///
    /// ```
    /// use seedavatar::color::Color;
    ///
    /// let red = Color::parse("#F00").unwrap();
    /// assert_eq!(red.rgb(), [255, 0, 0]);
    /// assert_eq!(red.as_str(), "#F00");
    ///
    /// let teal = Color::parse("#008080cc").unwrap();
    /// assert_eq!(teal.rgb(), [0, 128, 128]);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `ColorError` if the input is not a valid hex color.
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        let rgb = parse_hex_color(s)?;
        Ok(Self { hex: s.to_string(), rgb })
    }

    /// Build a color from RGB channels, rendered as lowercase `#rrggbb`.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { hex: format!("#{:02x}{:02x}{:02x}", r, g, b), rgb: [r, g, b] }
    }

    /// The color exactly as it was written.
    pub fn as_str(&self) -> &str {
        &self.hex
    }

    /// Decoded `[r, g, b]` channels.
    pub fn rgb(&self) -> [u8; 3] {
        self.rgb
    }

    /// Perceived brightness on a 0-255 scale (ITU-R BT.709 luma weights).
    pub fn luminance(&self) -> f64 {
        let [r, g, b] = self.rgb;
        0.2126 * f64::from(r) + 0.7152 * f64::from(g) + 0.0722 * f64::from(b)
    }

    /// Absolute luminance difference between two colors.
    pub fn contrast_with(&self, other: &Color) -> f64 {
        (self.luminance() - other.luminance()).abs()
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.rgb == other.rgb
    }
}

impl Eq for Color {}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Luminance of a hex color string.
///
/// # Examples
///
/// ```
/// use seedavatar::color::luminance;
///
/// assert_eq!(luminance("#000000").unwrap(), 0.0);
/// assert!((luminance("#ffffff").unwrap() - 255.0).abs() < 1e-9);
/// ```
///
/// # Errors
///
/// Returns `ColorError` if the input is not a valid hex color.
pub fn luminance(s: &str) -> Result<f64, ColorError> {
    Color::parse(s).map(|c| c.luminance())
}

/// Copy `colors` and sort them from darkest to lightest.
///
/// The sort is stable, so colors with equal luminance keep palette order.
pub fn sort_by_luminance(colors: &[Color]) -> Vec<Color> {
    let mut sorted = colors.to_vec();
    sorted.sort_by(|a, b| a.luminance().total_cmp(&b.luminance()));
    sorted
}

/// Candidates whose luminance differs from `background` by more than `threshold`.
pub fn contrasting(candidates: &[Color], background: &Color, threshold: f64) -> Vec<Color> {
    candidates.iter().filter(|c| c.contrast_with(background) > threshold).cloned().collect()
}

/// The candidate furthest from `background` in luminance.
///
/// Ties resolve to the earliest candidate. Returns `None` for an empty slice.
pub fn most_contrasting<'a>(candidates: &'a [Color], background: &Color) -> Option<&'a Color> {
    candidates.iter().fold(None, |best: Option<&Color>, c| match best {
        Some(b) if b.contrast_with(background) >= c.contrast_with(background) => Some(b),
        _ => Some(c),
    })
}

/// Colors of a palette split into background and foreground for a variant.
///
/// The light variant uses the lightest color as background, the dark variant
/// the darkest. Every other color (anything not equal to the background) is a
/// foreground candidate, ordered darkest to lightest.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    /// All palette colors, darkest first.
    pub sorted: Vec<Color>,
    /// The background extreme.
    pub background: Color,
    /// The extreme opposite the background (darkest for light, lightest for dark).
    pub opposite: Color,
    /// Colors usable on top of the background.
    pub foreground: Vec<Color>,
}

impl ColorScheme {
    /// Split `colors` for `variant`.
    ///
    /// Returns `None` only when `colors` is empty, which validated palettes
    /// never are.
    pub fn new(colors: &[Color], variant: Variant) -> Option<Self> {
        let sorted = sort_by_luminance(colors);
        let darkest = sorted.first()?.clone();
        let lightest = sorted.last()?.clone();
        let (background, opposite) = match variant {
            Variant::Light => (lightest, darkest),
            Variant::Dark => (darkest, lightest),
        };
        let foreground = sorted.iter().filter(|c| **c != background).cloned().collect();
        Some(Self { sorted, background, opposite, foreground })
    }

    /// Foreground colors that clear [`CONTRAST_THRESHOLD`] against the background.
    pub fn high_contrast(&self) -> Vec<Color> {
        contrasting(&self.foreground, &self.background, CONTRAST_THRESHOLD)
    }

    /// High-contrast foreground colors, or the opposite extreme alone when
    /// nothing clears the threshold.
    pub fn readable(&self) -> Vec<Color> {
        let candidates = self.high_contrast();
        if candidates.is_empty() {
            vec![self.opposite.clone()]
        } else {
            candidates
        }
    }
}

/// Parse a hex color string (#RGB, #RGBA, #RRGGBB, #RRGGBBAA) into RGB
fn parse_hex_color(s: &str) -> Result<[u8; 3], ColorError> {
    if s.is_empty() {
        return Err(ColorError::Empty);
    }
    let Some(hex) = s.strip_prefix('#') else {
        return Err(ColorError::MissingHash);
    };

    // Validate all characters are hex
    if let Some(c) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHex(c));
    }

    let bytes = hex.as_bytes();
    match bytes.len() {
        // #RGB / #RGBA: each digit is doubled, alpha dropped
        3 | 4 => Ok([
            parse_hex_digit(bytes[0])? * 17,
            parse_hex_digit(bytes[1])? * 17,
            parse_hex_digit(bytes[2])? * 17,
        ]),
        // #RRGGBB / #RRGGBBAA
        6 | 8 => Ok([
            parse_hex_pair(bytes[0], bytes[1])?,
            parse_hex_pair(bytes[2], bytes[3])?,
            parse_hex_pair(bytes[4], bytes[5])?,
        ]),
        len => Err(ColorError::InvalidLength(len)),
    }
}

/// Parse a single hex digit (0-9, A-F, a-f) to u8 (0-15)
fn parse_hex_digit(c: u8) -> Result<u8, ColorError> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(ColorError::InvalidHex(char::from(c))),
    }
}

/// Parse two hex digits to u8 (0-255)
fn parse_hex_pair(high: u8, low: u8) -> Result<u8, ColorError> {
    Ok(parse_hex_digit(high)? * 16 + parse_hex_digit(low)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors(hexes: &[&str]) -> Vec<Color> {
        hexes.iter().map(|h| Color::parse(h).unwrap()).collect()
    }

    #[test]
    fn test_parse_formats() {
        assert_eq!(Color::parse("#F00").unwrap().rgb(), [255, 0, 0]);
        assert_eq!(Color::parse("#F00F").unwrap().rgb(), [255, 0, 0]);
        assert_eq!(Color::parse("#00ff00").unwrap().rgb(), [0, 255, 0]);
        assert_eq!(Color::parse("#0000FF80").unwrap().rgb(), [0, 0, 255]);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Color::parse(""), Err(ColorError::Empty));
        assert_eq!(Color::parse("fff"), Err(ColorError::MissingHash));
        assert_eq!(Color::parse("#ff"), Err(ColorError::InvalidLength(2)));
        assert_eq!(Color::parse("#fffff"), Err(ColorError::InvalidLength(5)));
        assert_eq!(Color::parse("#ggg"), Err(ColorError::InvalidHex('g')));
    }

    #[test]
    fn test_parse_keeps_original_text() {
        let c: Color = "#AbCdEf".parse().unwrap();
        assert_eq!(c.as_str(), "#AbCdEf");
        assert_eq!(c.to_string(), "#AbCdEf");
    }

    #[test]
    fn test_equality_uses_rgb() {
        assert_eq!(Color::parse("#fff").unwrap(), Color::parse("#FFFFFF").unwrap());
        assert_ne!(Color::parse("#fff").unwrap(), Color::parse("#fffffe").unwrap());
    }

    #[test]
    fn test_luminance_weights() {
        assert_eq!(luminance("#000000").unwrap(), 0.0);
        assert!((luminance("#ff0000").unwrap() - 0.2126 * 255.0).abs() < 1e-9);
        assert!((luminance("#00ff00").unwrap() - 0.7152 * 255.0).abs() < 1e-9);
        assert!((luminance("#0000ff").unwrap() - 0.0722 * 255.0).abs() < 1e-9);
        assert!((luminance("#eeeeee").unwrap() - 238.0).abs() < 1e-9);
    }

    #[test]
    fn test_luminance_ignores_alpha() {
        assert_eq!(luminance("#33333300").unwrap(), luminance("#333333").unwrap());
    }

    #[test]
    fn test_sort_by_luminance() {
        let sorted = sort_by_luminance(&colors(&["#ffffff", "#000000", "#808080"]));
        let hexes: Vec<&str> = sorted.iter().map(Color::as_str).collect();
        assert_eq!(hexes, vec!["#000000", "#808080", "#ffffff"]);
    }

    #[test]
    fn test_contrasting_filters_by_threshold() {
        let bg = Color::parse("#eeeeee").unwrap();
        let candidates = colors(&["#222222", "#aaaaaa", "#cccccc", "#dddddd"]);
        let picked = contrasting(&candidates, &bg, CONTRAST_THRESHOLD);
        let hexes: Vec<&str> = picked.iter().map(Color::as_str).collect();
        assert_eq!(hexes, vec!["#222222", "#aaaaaa"]);
    }

    #[test]
    fn test_most_contrasting() {
        let bg = Color::parse("#ffffff").unwrap();
        let candidates = colors(&["#eeeeee", "#111111", "#888888"]);
        assert_eq!(most_contrasting(&candidates, &bg).unwrap().as_str(), "#111111");
        assert!(most_contrasting(&[], &bg).is_none());
    }

    #[test]
    fn test_scheme_light_and_dark() {
        let palette = colors(&["#888888", "#ffffff", "#000000", "#444444"]);

        let light = ColorScheme::new(&palette, Variant::Light).unwrap();
        assert_eq!(light.background.as_str(), "#ffffff");
        assert_eq!(light.opposite.as_str(), "#000000");
        assert_eq!(light.foreground.len(), 3);
        assert_eq!(light.foreground[0].as_str(), "#000000");

        let dark = ColorScheme::new(&palette, Variant::Dark).unwrap();
        assert_eq!(dark.background.as_str(), "#000000");
        assert_eq!(dark.opposite.as_str(), "#ffffff");
        assert!(!dark.foreground.contains(&dark.background));
    }

    #[test]
    fn test_scheme_excludes_duplicate_backgrounds() {
        let palette = colors(&["#ffffff", "#FFF", "#000000"]);
        let scheme = ColorScheme::new(&palette, Variant::Light).unwrap();
        assert_eq!(scheme.foreground.len(), 1);
    }

    #[test]
    fn test_scheme_readable_falls_back_to_opposite() {
        let palette = colors(&["#dddddd", "#eeeeee", "#cccccc"]);
        let scheme = ColorScheme::new(&palette, Variant::Light).unwrap();
        assert!(scheme.high_contrast().is_empty());
        let readable = scheme.readable();
        assert_eq!(readable.len(), 1);
        assert_eq!(readable[0].as_str(), "#cccccc");
    }

    #[test]
    fn test_scheme_empty_palette() {
        assert!(ColorScheme::new(&[], Variant::Light).is_none());
    }
}
