//! Common trait for registries that store named items.

/// Common trait for registries that store named items.
///
/// Style and palette registries are structurally identical: a map from a
/// unique name to an entry, with insert-or-replace registration and lookup by
/// exact name.
///
/// # Type Parameters
///
/// * `V` - The type of value stored in the registry
///
/// # Example
///
/// ```
/// use seedavatar::registry::{PaletteRegistry, Registry};
/// use seedavatar::palette::Palette;
///
/// let mut registry = PaletteRegistry::new();
/// registry.register(Palette::new("mono", ["#000000", "#FFFFFF"]).unwrap());
///
/// assert!(registry.contains("mono"));
/// assert_eq!(registry.len(), 1);
/// assert_eq!(registry.sorted_names(), vec!["mono".to_string()]);
/// ```
pub trait Registry<V: ?Sized> {
    /// Check if an item with the given name exists in the registry.
    fn contains(&self, name: &str) -> bool;

    /// Get an item by name.
    ///
    /// Returns `None` if no item with the given name exists.
    fn get(&self, name: &str) -> Option<&V>;

    /// Get the number of items in the registry.
    fn len(&self) -> usize;

    /// Check if the registry is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all items from the registry.
    fn clear(&mut self);

    /// Get an iterator over all names in the registry.
    fn names(&self) -> Box<dyn Iterator<Item = &String> + '_>;

    /// All names, sorted alphabetically.
    fn sorted_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.names().cloned().collect();
        names.sort();
        names
    }
}
