//! Built-in palette definitions.
//!
//! Each palette lists ten colors spanning a
//! range of luminance so both variants have a usable background and enough
//! contrasting foreground colors.

use crate::palette::Palette;

/// List of all available built-in palette names.
const BUILTIN_NAMES: &[&str] =
    &["monokai", "pride", "muted", "grayscale", "cool", "warm", "dark", "light"];

const MONOKAI: &[&str] = &[
    "#272822", "#383d3b", "#49483e", "#75715e", "#a59f85", "#f92672", "#a6e22e", "#f4bf75",
    "#66d9ef", "#ae81ff",
];

const PRIDE: &[&str] = &[
    "#e40303", "#ff8c00", "#ffed00", "#008026", "#004dff", "#750787", "#ffffff", "#000000",
    "#613915", "#ffafc8",
];

const MUTED: &[&str] = &[
    "#5a6a62", "#6e8179", "#839990", "#97b1a7", "#acb9b1", "#e0e0e0", "#c7c7c7", "#aeaeae",
    "#959595", "#7d7d7d",
];

const GRAYSCALE: &[&str] = &[
    "#222222", "#333333", "#444444", "#555555", "#666666", "#eeeeee", "#dddddd", "#cccccc",
    "#bbbbbb", "#aaaaaa",
];

const COOL: &[&str] = &[
    "#09186D", "#2B3252", "#3D155F", "#021c41", "#4D4C53", "#8AAAE5", "#bde8f1", "#819fa7",
    "#CDC6B4", "#dfe5f3",
];

const WARM: &[&str] = &[
    "#AF165E", "#EE092D", "#FF6302", "#e96616", "#D60457", "#FC9F1B", "#FFBD27", "#FFE72B",
    "#FCE77D", "#ffca7b",
];

/// Charcoal base with violet accents.
const DARK: &[&str] = &[
    "#1a1a1a", "#2c2c2c", "#444444", "#5a5a5a", "#717171", "#eeeeee", "#c5c5c5", "#8b5cf6",
    "#a78bfa", "#d8b4fe",
];

/// Paper whites with indigo accents.
const LIGHT: &[&str] = &[
    "#e0e0e0", "#f5f5f5", "#bdbdbd", "#fafafa", "#eeeeee", "#212121", "#757575", "#6366F1",
    "#4f46e5", "#312e81",
];

/// Returns a list of all available built-in palette names.
pub fn list_builtins() -> Vec<&'static str> {
    BUILTIN_NAMES.to_vec()
}

/// Returns a built-in palette by name, or None if not found.
pub fn get_builtin(name: &str) -> Option<Palette> {
    let colors = match name {
        "monokai" => MONOKAI,
        "pride" => PRIDE,
        "muted" => MUTED,
        "grayscale" => GRAYSCALE,
        "cool" => COOL,
        "warm" => WARM,
        "dark" => DARK,
        "light" => LIGHT,
        _ => return None,
    };
    // The tables above are all valid hex, so construction cannot fail
    Palette::new(name, colors).ok()
}

/// All built-in palettes in catalogue order.
pub fn all_builtins() -> Vec<Palette> {
    BUILTIN_NAMES.iter().filter_map(|name| get_builtin(name)).collect()
}
