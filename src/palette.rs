//! Named color palettes.

use thiserror::Error;

use crate::color::{Color, ColorError};

/// Error building a palette.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PaletteError {
    /// Palette name was empty
    #[error("Palette name must not be empty")]
    EmptyName,
    /// Palette had no colors
    #[error("Palette '{0}' has no colors")]
    NoColors(String),
    /// One of the colors failed to parse
    #[error("Palette '{palette}' has invalid color '{color}': {source}")]
    InvalidColor {
        palette: String,
        color: String,
        #[source]
        source: ColorError,
    },
}

/// A named, ordered, non-empty list of colors.
///
/// Palettes are immutable once built. Styles read them and reorder local
/// copies, never the palette itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    name: String,
    colors: Vec<Color>,
}

impl Palette {
    /// Build a palette from hex color strings.
    ///
    /// # Examples
    ///
    /// ```
    /// use seedavatar::palette::Palette;
    ///
    /// let brand = Palette::new("brand", ["#101820", "#FEE715"]).unwrap();
    /// assert_eq!(brand.name(), "brand");
    /// assert_eq!(brand.len(), 2);
    ///
    /// assert!(Palette::new("empty", Vec::<String>::new()).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `PaletteError` if the name is empty, there are no colors, or
    /// any color is not a valid hex string.
    pub fn new<I, S>(name: impl Into<String>, colors: I) -> Result<Self, PaletteError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = name.into();
        if name.is_empty() {
            return Err(PaletteError::EmptyName);
        }

        let colors = colors
            .into_iter()
            .map(|c| {
                let c = c.as_ref();
                Color::parse(c).map_err(|source| PaletteError::InvalidColor {
                    palette: name.clone(),
                    color: c.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if colors.is_empty() {
            return Err(PaletteError::NoColors(name));
        }

        Ok(Self { name, colors })
    }

    /// Palette name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Colors in palette order.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Number of colors (always at least one).
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let palette = Palette::new("mono", ["#000000", "#FFFFFF"]).unwrap();
        assert_eq!(palette.name(), "mono");
        assert_eq!(palette.len(), 2);
        assert!(!palette.is_empty());
        assert_eq!(palette.colors()[1].as_str(), "#FFFFFF");
    }

    #[test]
    fn test_single_color_allowed() {
        let palette = Palette::new("solo", ["#123456"]).unwrap();
        assert_eq!(palette.len(), 1);
    }

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(Palette::new("", ["#000"]), Err(PaletteError::EmptyName));
    }

    #[test]
    fn test_no_colors_rejected() {
        let err = Palette::new("void", Vec::<&str>::new()).unwrap_err();
        assert_eq!(err, PaletteError::NoColors("void".to_string()));
    }

    #[test]
    fn test_invalid_color_rejected() {
        let err = Palette::new("bad", ["#000000", "red"]).unwrap_err();
        match err {
            PaletteError::InvalidColor { palette, color, source } => {
                assert_eq!(palette, "bad");
                assert_eq!(color, "red");
                assert_eq!(source, ColorError::MissingHash);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_error_message_names_palette() {
        let err = Palette::new("bad", ["#zz0000"]).unwrap_err();
        assert!(err.to_string().contains("bad"));
        assert!(err.to_string().contains("#zz0000"));
    }
}
