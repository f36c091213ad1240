//! Style registry for named drawing styles.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::AvatarError;
use crate::style::Style;
use crate::styles;

use super::traits::Registry;

/// Registry for named styles.
///
/// Styles are stored behind `Arc` so one style value can be registered under
/// its name and still be shared with the caller.
#[derive(Clone, Default)]
pub struct StyleRegistry {
    styles: HashMap<String, Arc<dyn Style>>,
}

impl fmt::Debug for StyleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&String> = self.styles.keys().collect();
        names.sort();
        f.debug_struct("StyleRegistry").field("styles", &names).finish()
    }
}

impl StyleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self { styles: HashMap::new() }
    }

    /// Create a registry holding every built-in style.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for style in styles::all_builtins() {
            registry.register(style);
        }
        registry
    }

    /// Register a style under its own name.
    ///
    /// If a style with the same name already exists, it is replaced, a
    /// warning is logged, and the previous style is returned.
    pub fn register(&mut self, style: Arc<dyn Style>) -> Option<Arc<dyn Style>> {
        let name = style.name().to_string();
        let previous = self.styles.insert(name.clone(), style);
        if previous.is_some() {
            warn!(style = %name, "Avatar style \"{}\" is being overwritten", name);
        }
        previous
    }

    /// Get a style by name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Style>> {
        self.styles.get(name)
    }

    /// Check if a style with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Look up a style, failing with [`AvatarError::UnknownStyle`].
    pub fn resolve(&self, name: &str) -> Result<&Arc<dyn Style>, AvatarError> {
        debug!(style = name, "resolving style");
        self.styles.get(name).ok_or_else(|| AvatarError::UnknownStyle(name.to_string()))
    }

    /// Get the number of styles in the registry.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

impl Registry<Arc<dyn Style>> for StyleRegistry {
    fn contains(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    fn get(&self, name: &str) -> Option<&Arc<dyn Style>> {
        self.styles.get(name)
    }

    fn len(&self) -> usize {
        self.styles.len()
    }

    fn clear(&mut self) {
        self.styles.clear();
    }

    fn names(&self) -> Box<dyn Iterator<Item = &String> + '_> {
        Box::new(self.styles.keys())
    }
}
