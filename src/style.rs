//! The style contract.
//!
//! A style is a named pure function from `(hash, options)` to SVG body markup
//! drawn in the fixed `0 0 100 100` coordinate space. The encoder wraps that
//! body in the outer `<svg>` element sized to the requested pixel size, so a
//! style never needs to know the output resolution.
//!
//! New styles can be added at runtime either by implementing [`Style`] or by
//! wrapping a closure with [`style_fn`].

use std::fmt;

use crate::options::Variant;
use crate::palette::Palette;

/// Read-only inputs handed to a style for one draw call.
#[derive(Debug, Clone, Copy)]
pub struct DrawOptions<'a> {
    /// Requested output size in pixels (already clamped to at least 1)
    pub size: u32,
    /// Resolved palette
    pub palette: &'a Palette,
    /// Background variant
    pub variant: Variant,
    /// Display name, if the caller supplied one
    pub display_name: Option<&'a str>,
}

/// A pluggable avatar style.
///
/// Implementations must be pure: identical `(hash, options)` must produce
/// byte-identical output, with no state carried between calls.
pub trait Style: Send + Sync {
    /// Unique registry name.
    fn name(&self) -> &str;

    /// Draw the SVG body for `hash`.
    fn draw(&self, hash: u32, options: &DrawOptions<'_>) -> String;
}

/// Style backed by a closure. Built with [`style_fn`].
pub struct FnStyle<F> {
    name: String,
    draw: F,
}

impl<F> fmt::Debug for FnStyle<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnStyle").field("name", &self.name).finish_non_exhaustive()
    }
}

impl<F> Style for FnStyle<F>
where
    F: Fn(u32, &DrawOptions<'_>) -> String + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn draw(&self, hash: u32, options: &DrawOptions<'_>) -> String {
        (self.draw)(hash, options)
    }
}

/// Build a style from a name and a drawing closure.
///
/// # Examples
///
/// ```
/// use seedavatar::style::{style_fn, Style};
///
/// let flat = style_fn("flat", |_hash, options| {
///     format!(r#"<rect width="100" height="100" fill="{}"/>"#, options.palette.colors()[0])
/// });
/// assert_eq!(flat.name(), "flat");
/// ```
pub fn style_fn<F>(name: impl Into<String>, draw: F) -> FnStyle<F>
where
    F: Fn(u32, &DrawOptions<'_>) -> String + Send + Sync,
{
    FnStyle { name: name.into(), draw }
}
