//! Palette registry for named palettes.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::error::AvatarError;
use crate::palette::Palette;
use crate::palettes;

use super::traits::Registry;

/// Registry for named palettes.
#[derive(Debug, Clone, Default)]
pub struct PaletteRegistry {
    palettes: HashMap<String, Palette>,
}

impl PaletteRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self { palettes: HashMap::new() }
    }

    /// Create a registry holding every built-in palette.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for palette in palettes::all_builtins() {
            registry.register(palette);
        }
        registry
    }

    /// Register a palette in the registry.
    ///
    /// If a palette with the same name already exists, it is replaced, a
    /// warning is logged, and the previous palette is returned.
    pub fn register(&mut self, palette: Palette) -> Option<Palette> {
        let previous = self.palettes.insert(palette.name().to_string(), palette);
        if let Some(old) = &previous {
            warn!(palette = old.name(), "Color palette \"{}\" is being overwritten", old.name());
        }
        previous
    }

    /// Get a palette by name.
    pub fn get(&self, name: &str) -> Option<&Palette> {
        self.palettes.get(name)
    }

    /// Check if a palette with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.palettes.contains_key(name)
    }

    /// Look up a palette, failing with [`AvatarError::UnknownPalette`].
    pub fn resolve(&self, name: &str) -> Result<&Palette, AvatarError> {
        debug!(palette = name, "resolving palette");
        self.palettes.get(name).ok_or_else(|| AvatarError::UnknownPalette(name.to_string()))
    }

    /// Get the number of palettes in the registry.
    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }

    /// Iterate over all palettes in the registry.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Palette)> {
        self.palettes.iter()
    }
}

impl Registry<Palette> for PaletteRegistry {
    fn contains(&self, name: &str) -> bool {
        self.palettes.contains_key(name)
    }

    fn get(&self, name: &str) -> Option<&Palette> {
        self.palettes.get(name)
    }

    fn len(&self) -> usize {
        self.palettes.len()
    }

    fn clear(&mut self) {
        self.palettes.clear();
    }

    fn names(&self) -> Box<dyn Iterator<Item = &String> + '_> {
        Box::new(self.palettes.keys())
    }
}
