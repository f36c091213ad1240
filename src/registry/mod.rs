//! Registry traits and implementations for named items.
//!
//! This module provides:
//! - A unified `Registry` trait for consistent registry interfaces
//! - `StyleRegistry` for storing drawing styles by name
//! - `PaletteRegistry` for storing color palettes by name
//!
//! Registration replaces existing entries with a logged warning; lookups of
//! unknown names fail with a name-specific error and never substitute a default.

mod palette;
mod style;
mod traits;

// Re-export all public items from submodules
pub use palette::PaletteRegistry;
pub use style::StyleRegistry;
pub use traits::Registry;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AvatarError;
    use crate::palette::Palette;
    use crate::style::{style_fn, Style};
    use std::sync::Arc;

    fn mono_palette() -> Palette {
        Palette::new("mono", ["#000000", "#FFFFFF"]).unwrap()
    }

    fn flat_style(name: &str, fill: &'static str) -> Arc<dyn Style> {
        Arc::new(style_fn(name, move |_, _| {
            format!(r#"<rect width="100" height="100" fill="{}"/>"#, fill)
        }))
    }

    #[test]
    fn test_registry_new_is_empty() {
        let palettes = PaletteRegistry::new();
        assert!(!palettes.contains("anything"));
        assert!(palettes.is_empty());

        let styles = StyleRegistry::new();
        assert!(styles.is_empty());
    }

    #[test]
    fn test_register_and_get_palette() {
        let mut registry = PaletteRegistry::new();
        assert!(registry.register(mono_palette()).is_none());

        assert!(registry.contains("mono"));
        let retrieved = registry.get("mono").unwrap();
        assert_eq!(retrieved.name(), "mono");
        assert_eq!(retrieved.colors()[1].as_str(), "#FFFFFF");
    }

    #[test]
    fn test_register_palette_overwrites() {
        let mut registry = PaletteRegistry::new();
        registry.register(Palette::new("test", ["#FF0000"]).unwrap());
        let previous = registry.register(Palette::new("test", ["#00FF00"]).unwrap());

        assert_eq!(previous.unwrap().colors()[0].as_str(), "#FF0000");
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("test").unwrap().colors()[0].as_str(), "#00FF00");
    }

    #[test]
    fn test_resolve_palette_not_found() {
        let registry = PaletteRegistry::new();
        assert_eq!(
            registry.resolve("nonexistent").unwrap_err(),
            AvatarError::UnknownPalette("nonexistent".to_string())
        );
    }

    #[test]
    fn test_register_and_resolve_style() {
        let mut registry = StyleRegistry::new();
        registry.register(flat_style("flat", "#123456"));

        let style = registry.resolve("flat").unwrap();
        assert_eq!(style.name(), "flat");
    }

    #[test]
    fn test_register_style_overwrites_last_write_wins() {
        let mut registry = StyleRegistry::new();
        registry.register(flat_style("flat", "#111111"));
        let previous = registry.register(flat_style("flat", "#222222"));
        assert!(previous.is_some());
        assert_eq!(registry.len(), 1);

        let palette = mono_palette();
        let options = crate::style::DrawOptions {
            size: 100,
            palette: &palette,
            variant: crate::options::Variant::Light,
            display_name: None,
        };
        assert!(registry.get("flat").unwrap().draw(0, &options).contains("#222222"));
    }

    #[test]
    fn test_resolve_style_not_found() {
        let registry = StyleRegistry::with_builtins();
        let err = registry.resolve("no-such-style").err().unwrap();
        assert_eq!(err, AvatarError::UnknownStyle("no-such-style".to_string()));
        assert!(err.to_string().contains("no-such-style"));
    }

    #[test]
    fn test_builtins_registered() {
        let styles = StyleRegistry::with_builtins();
        assert_eq!(styles.len(), 9);
        assert_eq!(
            styles.sorted_names(),
            vec![
                "bauhaus", "block", "gradient", "initials", "nebula", "pixel", "polygon", "rings",
                "stripes"
            ]
        );

        let palettes = PaletteRegistry::with_builtins();
        assert_eq!(palettes.len(), 8);
        assert!(palettes.contains("grayscale"));
        assert!(palettes.sorted_names().contains(&"monokai".to_string()));
    }

    #[test]
    fn test_registry_trait_clear() {
        let mut registry = PaletteRegistry::with_builtins();
        Registry::clear(&mut registry);
        assert!(Registry::is_empty(&registry));
    }
}
