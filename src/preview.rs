//! Preview galleries and palette guides.
//!
//! Renders every registered style x palette combination and writes the
//! markup plus an index document, so a set of registries can be reviewed at a
//! glance. Only the public generator surface is used here: sorted name
//! listings and [`AvatarGenerator::render_svg`].
//!
//! # Example
//!
//! ```ignore
//! let generator = AvatarGenerator::new();
//! let entries = preview::render_gallery(&generator, &GalleryOptions::default())?;
//! preview::write_gallery(Path::new("preview"), &entries)?;
//! ```

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::info;

use crate::error::AvatarError;
use crate::generator::AvatarGenerator;
use crate::options::{AvatarOptions, Variant, DEFAULT_SIZE};
use crate::palette::Palette;
use crate::svg::escape;

/// Index file written next to the gallery SVGs.
pub const GALLERY_INDEX: &str = "PREVIEW.md";
/// HTML palette guide file name.
pub const PALETTE_GUIDE_HTML: &str = "palettes.html";
/// Markdown palette guide file name.
pub const PALETTE_GUIDE_MARKDOWN: &str = "PALETTES.md";
/// Seed and display name used when none is given.
pub const DEFAULT_PREVIEW_NAME: &str = "Ava Mier";

/// What to render for each gallery cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryOptions {
    pub seed: String,
    pub display_name: Option<String>,
    pub variant: Variant,
    pub size: u32,
}

impl Default for GalleryOptions {
    fn default() -> Self {
        Self {
            seed: DEFAULT_PREVIEW_NAME.to_string(),
            display_name: Some(DEFAULT_PREVIEW_NAME.to_string()),
            variant: Variant::default(),
            size: DEFAULT_SIZE,
        }
    }
}

/// One rendered style x palette combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryEntry {
    pub style: String,
    pub palette: String,
    pub svg: String,
}

impl GalleryEntry {
    /// `<style>-<palette>.svg`
    pub fn file_name(&self) -> String {
        format!("{}-{}.svg", self.style, self.palette)
    }
}

/// Render every registered style with every registered palette.
///
/// Entries are ordered by style name, then palette name.
pub fn render_gallery(
    generator: &AvatarGenerator,
    options: &GalleryOptions,
) -> Result<Vec<GalleryEntry>, AvatarError> {
    let styles = generator.style_names();
    let palettes = generator.palette_names();
    let pairs: Vec<(&String, &String)> =
        styles.iter().flat_map(|style| palettes.iter().map(move |palette| (style, palette))).collect();

    let entries = pairs
        .par_iter()
        .map(|&(style, palette)| -> Result<GalleryEntry, AvatarError> {
            let avatar_options = AvatarOptions {
                style: style.clone(),
                palette: palette.clone(),
                size: options.size,
                variant: options.variant,
                display_name: options.display_name.clone(),
            };
            let svg = generator.render_svg(&options.seed, &avatar_options)?;
            Ok(GalleryEntry { style: style.clone(), palette: palette.clone(), svg })
        })
        .collect::<Result<Vec<_>, _>>()?;

    info!(
        styles = styles.len(),
        palettes = palettes.len(),
        entries = entries.len(),
        "rendered gallery"
    );
    Ok(entries)
}

/// Markdown table linking every gallery entry.
pub fn gallery_markdown(entries: &[GalleryEntry]) -> String {
    let mut markdown = String::from("# Avatar Previews\n\n| Style | Palette | Preview |\n|---|---|---|\n");
    for entry in entries {
        let _ = writeln!(
            markdown,
            "| {} | {} | ![{} {}](./{}) |",
            entry.style,
            entry.palette,
            entry.style,
            entry.palette,
            entry.file_name()
        );
    }
    markdown
}

const GUIDE_CSS: &str = r#"body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif; background-color: #111; color: #eee; margin: 0; padding: 2rem; }
.header { text-align: center; margin-bottom: 3rem; }
h1 { color: #a855f7; font-size: 2.5rem; margin-bottom: 0.5rem; }
.palette-section { margin-bottom: 4rem; }
.palette-name { font-size: 2rem; color: #d8b4fe; border-bottom: 2px solid #333; padding-bottom: 0.5rem; margin-bottom: 1.5rem; text-transform: capitalize; }
.swatch-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(120px, 1fr)); gap: 1.5rem; }
.color-swatch-container { background-color: #1f1f1f; border-radius: 8px; padding: 1rem; border: 1px solid #2a2a2a; text-align: center; }
.color-swatch { width: 100%; height: 80px; border-radius: 4px; margin-bottom: 0.5rem; }
.color-code { font-family: monospace; font-size: 0.9rem; color: #aaa; margin: 0; }"#;

/// Standalone HTML page with one swatch grid per palette.
pub fn palette_guide_html(palettes: &[&Palette]) -> String {
    let mut sections = String::new();
    for palette in palettes {
        let _ = writeln!(sections, r#"<section class="palette-section">"#);
        let _ = writeln!(sections, r#"<h2 class="palette-name">{}</h2>"#, escape(palette.name()));
        let _ = writeln!(sections, r#"<div class="swatch-grid">"#);
        for color in palette.colors() {
            let _ = writeln!(
                sections,
                r#"<div class="color-swatch-container"><div class="color-swatch" style="background-color: {hex};"></div><p class="color-code">{hex}</p></div>"#,
                hex = escape(color.as_str())
            );
        }
        sections.push_str("</div>\n</section>\n");
    }

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>Color Palette Guide</title>\n<style>\n{}\n</style>\n</head>\n<body>\n\
         <div class=\"header\"><h1>Color Palette Guide</h1></div>\n{}</body>\n</html>\n",
        GUIDE_CSS, sections
    )
}

/// Markdown table with a small swatch image per color.
pub fn palette_guide_markdown(palettes: &[&Palette]) -> String {
    let mut markdown = String::from(
        "## Available Color Palettes\n\nThis document shows a preview for each available color palette.\n\n\
         | Palette | Colors |\n|:---|:---|\n",
    );
    for palette in palettes {
        let swatches: Vec<String> = palette
            .colors()
            .iter()
            .map(|color| {
                let hex = color.as_str().trim_start_matches('#');
                format!(
                    r#"<img src="https://placehold.co/20x20/{hex}/{hex}.png" alt="{full}" title="{full}">"#,
                    hex = hex,
                    full = color.as_str()
                )
            })
            .collect();
        let _ = writeln!(markdown, "| `{}` | {} |", palette.name(), swatches.join(" "));
    }
    markdown
}

/// Write each entry's SVG and the `PREVIEW.md` index into `dir`.
///
/// Returns the index path.
pub fn write_gallery(dir: &Path, entries: &[GalleryEntry]) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    for entry in entries {
        fs::write(dir.join(entry.file_name()), &entry.svg)?;
    }

    let index = dir.join(GALLERY_INDEX);
    fs::write(&index, gallery_markdown(entries))?;
    info!(dir = %dir.display(), files = entries.len(), "wrote gallery");
    Ok(index)
}

/// Write `palettes.html` and `PALETTES.md` into `dir`.
///
/// Returns the HTML and Markdown paths.
pub fn write_palette_guide(dir: &Path, palettes: &[&Palette]) -> io::Result<(PathBuf, PathBuf)> {
    fs::create_dir_all(dir)?;
    let html = dir.join(PALETTE_GUIDE_HTML);
    let markdown = dir.join(PALETTE_GUIDE_MARKDOWN);
    fs::write(&html, palette_guide_html(palettes))?;
    fs::write(&markdown, palette_guide_markdown(palettes))?;
    info!(dir = %dir.display(), palettes = palettes.len(), "wrote palette guide");
    Ok((html, markdown))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::style_fn;
    use tempfile::TempDir;

    fn small_generator() -> AvatarGenerator {
        let mut generator = AvatarGenerator::empty();
        generator.register_palette(Palette::new("zeta", ["#000000", "#ffffff"]).unwrap());
        generator.register_palette(Palette::new("alpha", ["#112233", "#ddeeff"]).unwrap());
        generator.register_style(style_fn("solid", |_, opts| {
            format!(r#"<rect width="100" height="100" fill="{}"/>"#, opts.palette.colors()[0])
        }));
        generator.register_style(style_fn("empty", |_, _| String::new()));
        generator
    }

    #[test]
    fn test_render_gallery_order_and_count() {
        let entries = render_gallery(&small_generator(), &GalleryOptions::default()).unwrap();
        let keys: Vec<(&str, &str)> =
            entries.iter().map(|e| (e.style.as_str(), e.palette.as_str())).collect();
        assert_eq!(
            keys,
            vec![("empty", "alpha"), ("empty", "zeta"), ("solid", "alpha"), ("solid", "zeta")]
        );
        assert!(entries[2].svg.contains("#112233"));
    }

    #[test]
    fn test_render_gallery_builtins() {
        let generator = AvatarGenerator::new();
        let entries = render_gallery(&generator, &GalleryOptions::default()).unwrap();
        assert_eq!(entries.len(), 9 * 8);
        assert!(entries.iter().all(|e| e.svg.starts_with("<svg ")));
        let initials = entries.iter().find(|e| e.style == "initials").unwrap();
        assert!(initials.svg.contains(">AM</text>"));
    }

    #[test]
    fn test_gallery_markdown_rows() {
        let entries = vec![GalleryEntry {
            style: "rings".into(),
            palette: "cool".into(),
            svg: "<svg/>".into(),
        }];
        let markdown = gallery_markdown(&entries);
        assert!(markdown.starts_with("# Avatar Previews\n"));
        assert!(markdown.contains("| rings | cool | ![rings cool](./rings-cool.svg) |\n"));
    }

    #[test]
    fn test_palette_guides() {
        let palette = Palette::new("brand", ["#101820", "#FEE715"]).unwrap();
        let html = palette_guide_html(&[&palette]);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<h2 class="palette-name">brand</h2>"#));
        assert!(html.contains("background-color: #FEE715;"));

        let markdown = palette_guide_markdown(&[&palette]);
        assert!(markdown.contains("| `brand` | "));
        assert!(markdown.contains("https://placehold.co/20x20/101820/101820.png"));
    }

    #[test]
    fn test_write_gallery_and_guide() {
        let temp = TempDir::new().expect("should create temp dir");
        let out = temp.path().join("preview");
        let generator = small_generator();

        let entries = render_gallery(&generator, &GalleryOptions::default()).unwrap();
        let index = write_gallery(&out, &entries).unwrap();
        assert_eq!(index, out.join(GALLERY_INDEX));
        assert!(out.join("solid-zeta.svg").is_file());
        assert_eq!(fs::read_to_string(out.join("empty-alpha.svg")).unwrap(), entries[0].svg);

        let palettes: Vec<&Palette> = generator
            .palette_names()
            .iter()
            .filter_map(|name| generator.palettes().get(name))
            .collect();
        let (html, markdown) = write_palette_guide(&out, &palettes).unwrap();
        assert!(fs::read_to_string(html).unwrap().contains("alpha"));
        assert!(fs::read_to_string(markdown).unwrap().contains("`zeta`"));
    }
}
