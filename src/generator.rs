//! Avatar generation facade.
//!
//! [`AvatarGenerator`] owns a style registry and a palette registry and runs
//! the pipeline: resolve style and palette, hash the seed, draw, wrap, encode.
//! Hosts construct one at startup and pass it where it is needed; concurrent
//! hosts that keep registering after startup can use [`SharedGenerator`].

use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;
use tracing::debug;

use crate::encode;
use crate::error::AvatarError;
use crate::hash::hash_seed;
use crate::options::AvatarOptions;
use crate::palette::Palette;
use crate::registry::{PaletteRegistry, Registry, StyleRegistry};
use crate::style::{DrawOptions, Style};

/// Fill of the placeholder shown for an empty seed.
pub const PLACEHOLDER_FILL: &str = "#cccccc";

/// Flat gray placeholder document for an empty seed.
pub fn placeholder(size: u32) -> String {
    encode::document(
        &format!(r#"<rect width="100" height="100" fill="{}"/>"#, PLACEHOLDER_FILL),
        size.max(1),
    )
}

/// Style and palette registries plus the generation pipeline.
///
/// # Examples
///
/// ```
/// use seedavatar::{AvatarGenerator, AvatarOptions};
///
/// let generator = AvatarGenerator::new();
/// let uri = generator.generate("alice", &AvatarOptions::default()).unwrap();
/// assert!(uri.starts_with("data:image/svg+xml;base64,"));
/// assert_eq!(uri, generator.generate("alice", &AvatarOptions::default()).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct AvatarGenerator {
    styles: StyleRegistry,
    palettes: PaletteRegistry,
}

impl Default for AvatarGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl AvatarGenerator {
    /// Generator with every built-in style and palette registered.
    pub fn new() -> Self {
        Self { styles: StyleRegistry::with_builtins(), palettes: PaletteRegistry::with_builtins() }
    }

    /// Generator with empty registries.
    pub fn empty() -> Self {
        Self { styles: StyleRegistry::new(), palettes: PaletteRegistry::new() }
    }

    /// Register a style, replacing (with a warning) any style of the same name.
    pub fn register_style(&mut self, style: impl Style + 'static) -> Option<Arc<dyn Style>> {
        self.styles.register(Arc::new(style))
    }

    /// Register an already shared style.
    pub fn register_shared_style(&mut self, style: Arc<dyn Style>) -> Option<Arc<dyn Style>> {
        self.styles.register(style)
    }

    /// Register a palette, replacing (with a warning) any palette of the same name.
    pub fn register_palette(&mut self, palette: Palette) -> Option<Palette> {
        self.palettes.register(palette)
    }

    /// The style registry.
    pub fn styles(&self) -> &StyleRegistry {
        &self.styles
    }

    /// The palette registry.
    pub fn palettes(&self) -> &PaletteRegistry {
        &self.palettes
    }

    /// Registered style names, sorted.
    pub fn style_names(&self) -> Vec<String> {
        self.styles.sorted_names()
    }

    /// Registered palette names, sorted.
    pub fn palette_names(&self) -> Vec<String> {
        self.palettes.sorted_names()
    }

    /// Generate the complete SVG document for `seed`.
    ///
    /// An empty seed short-circuits to the gray placeholder without resolving
    /// the style or palette, so it never fails.
    ///
    /// # Errors
    ///
    /// Returns [`AvatarError::UnknownStyle`] or [`AvatarError::UnknownPalette`]
    /// when a requested name is not registered.
    pub fn render_svg(&self, seed: &str, options: &AvatarOptions) -> Result<String, AvatarError> {
        let size = options.effective_size();
        if seed.is_empty() {
            debug!(size, "empty seed, using placeholder");
            return Ok(placeholder(size));
        }

        let style = self.styles.resolve(&options.style)?;
        let palette = self.palettes.resolve(&options.palette)?;
        let hash = hash_seed(seed);
        debug!(
            style = %options.style,
            palette = %options.palette,
            variant = %options.variant,
            hash,
            "drawing avatar"
        );

        let draw_options = DrawOptions {
            size,
            palette,
            variant: options.variant,
            display_name: options.display_name.as_deref(),
        };
        let body = style.draw(hash, &draw_options);
        Ok(encode::document(&body, size))
    }

    /// Generate a `data:image/svg+xml;base64,...` URI for `seed`.
    ///
    /// # Errors
    ///
    /// Same as [`render_svg`](Self::render_svg).
    pub fn generate(&self, seed: &str, options: &AvatarOptions) -> Result<String, AvatarError> {
        self.render_svg(seed, options).map(|svg| encode::to_data_uri(&svg))
    }
}

/// An [`AvatarGenerator`] behind a read-write lock.
///
/// Registration takes the write lock; generation and lookups share the read
/// lock and run in parallel.
#[derive(Debug, Default)]
pub struct SharedGenerator {
    inner: RwLock<AvatarGenerator>,
}

impl SharedGenerator {
    /// Wrap a generator.
    pub fn new(generator: AvatarGenerator) -> Self {
        Self { inner: RwLock::new(generator) }
    }

    /// See [`AvatarGenerator::register_style`].
    pub fn register_style(&self, style: impl Style + 'static) -> Option<Arc<dyn Style>> {
        self.inner.write().register_style(style)
    }

    /// See [`AvatarGenerator::register_palette`].
    pub fn register_palette(&self, palette: Palette) -> Option<Palette> {
        self.inner.write().register_palette(palette)
    }

    /// See [`AvatarGenerator::generate`].
    ///
    /// # Errors
    ///
    /// Same as [`AvatarGenerator::generate`].
    pub fn generate(&self, seed: &str, options: &AvatarOptions) -> Result<String, AvatarError> {
        self.inner.read().generate(seed, options)
    }

    /// See [`AvatarGenerator::render_svg`].
    ///
    /// # Errors
    ///
    /// Same as [`AvatarGenerator::render_svg`].
    pub fn render_svg(&self, seed: &str, options: &AvatarOptions) -> Result<String, AvatarError> {
        self.inner.read().render_svg(seed, options)
    }

    /// Registered style names, sorted.
    pub fn style_names(&self) -> Vec<String> {
        self.inner.read().style_names()
    }

    /// Registered palette names, sorted.
    pub fn palette_names(&self) -> Vec<String> {
        self.inner.read().palette_names()
    }

    /// Run `f` with shared access to the wrapped generator.
    pub fn with<R>(&self, f: impl FnOnce(&AvatarGenerator) -> R) -> R {
        f(&self.inner.read())
    }
}

/// Process-wide generator with the built-ins registered, created on first use.
pub fn global() -> &'static SharedGenerator {
    static GLOBAL: OnceLock<SharedGenerator> = OnceLock::new();
    GLOBAL.get_or_init(SharedGenerator::default)
}
