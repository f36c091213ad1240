//! WASM API module for browser/JS interop
//!
//! Exposes the process-wide generator to JavaScript. Option arguments left
//! `undefined` fall back to the same defaults as [`AvatarOptions::default`].
//!
//! Palettes can be registered from JavaScript; styles cannot, since a
//! `Style` must be `Send + Sync` and JS functions are neither.

use wasm_bindgen::prelude::*;

use crate::error::AvatarError;
use crate::generator;
use crate::options::{AvatarOptions, Variant};
use crate::palette::Palette;

/// Initialize panic hook for better error messages in WASM
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn build_options(
    style: Option<String>,
    palette: Option<String>,
    size: Option<u32>,
    variant: Option<String>,
    display_name: Option<String>,
) -> Result<AvatarOptions, String> {
    let mut options = AvatarOptions::default();
    if let Some(style) = style {
        options.style = style;
    }
    if let Some(palette) = palette {
        options.palette = palette;
    }
    if let Some(size) = size {
        options.size = size;
    }
    if let Some(variant) = variant {
        options.variant = variant.parse::<Variant>()?;
    }
    options.display_name = display_name;
    Ok(options)
}

fn generate_with_defaults(seed: &str, options: &AvatarOptions) -> Result<String, AvatarError> {
    generator::global().generate(seed, options)
}

/// Generate a `data:image/svg+xml;base64,...` avatar URI.
///
/// Throws when the style, palette, or variant is unknown.
#[wasm_bindgen(js_name = generateAvatar)]
pub fn generate_avatar(
    seed: &str,
    style: Option<String>,
    palette: Option<String>,
    size: Option<u32>,
    variant: Option<String>,
    display_name: Option<String>,
) -> Result<String, JsError> {
    let options =
        build_options(style, palette, size, variant, display_name).map_err(|e| JsError::new(&e))?;
    generate_with_defaults(seed, &options).map_err(|e| JsError::new(&e.to_string()))
}

/// Register a palette on the shared generator, replacing one of the same name.
#[wasm_bindgen(js_name = registerPalette)]
pub fn register_palette(name: &str, colors: Vec<String>) -> Result<(), JsError> {
    let palette = Palette::new(name, &colors).map_err(|e| JsError::new(&e.to_string()))?;
    generator::global().register_palette(palette);
    Ok(())
}

/// Registered style names, sorted.
#[wasm_bindgen(js_name = styleNames)]
pub fn style_names() -> Vec<String> {
    generator::global().style_names()
}

/// Registered palette names, sorted.
#[wasm_bindgen(js_name = paletteNames)]
pub fn palette_names() -> Vec<String> {
    generator::global().palette_names()
}
