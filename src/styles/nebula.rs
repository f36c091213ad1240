//! `nebula`: a glowing radial background scattered with stars.
//!
//! All parameters come from one hash-seeded [`Sequence`] in a fixed order:
//! glow color, glow center, star count, then per star position, radius,
//! color and opacity. Changing that order changes every nebula.

use std::fmt::Write;

use crate::color::{Color, ColorScheme};
use crate::sequence::Sequence;
use crate::style::{DrawOptions, Style};
use crate::svg::num;

const MIN_STARS: u32 = 10;
const MAX_STARS: u32 = 25;

/// Radial glow over the background, fractal noise, and 10-25 stars.
#[derive(Debug, Clone, Copy, Default)]
pub struct Nebula;

impl Style for Nebula {
    fn name(&self) -> &str {
        "nebula"
    }

    fn draw(&self, hash: u32, options: &DrawOptions<'_>) -> String {
        let Some(scheme) = ColorScheme::new(options.palette.colors(), options.variant) else {
            return String::new();
        };
        let mut seq = Sequence::new(hash);

        let glow = seq.pick(&scheme.foreground).unwrap_or(&scheme.background).clone();
        let glow_x = seq.range(30.0, 70.0);
        let glow_y = seq.range(30.0, 70.0);
        let stars = star_pool(&scheme, &glow);

        let frequency = f64::from(hash % 7 + 2) / 100.0;
        let octaves = 3 + hash % 2;

        let mut body = String::new();
        let _ = write!(
            body,
            concat!(
                r#"<defs><radialGradient id="nebula-glow" cx="{cx}%" cy="{cy}%" r="75%">"#,
                r#"<stop offset="0%" stop-color="{glow}"/>"#,
                r#"<stop offset="100%" stop-color="{background}"/></radialGradient>"#,
                r#"<filter id="nebula-noise"><feTurbulence type="fractalNoise" baseFrequency="{frequency}" numOctaves="{octaves}" stitchTiles="stitch"/>"#,
                r#"<feColorMatrix type="saturate" values="0"/></filter></defs>"#,
                r#"<rect width="100" height="100" fill="url(#nebula-glow)"/>"#,
                r#"<rect width="100" height="100" filter="url(#nebula-noise)" opacity="0.12"/>"#,
            ),
            cx = num(glow_x),
            cy = num(glow_y),
            glow = glow,
            background = scheme.background,
            frequency = num(frequency),
            octaves = octaves,
        );

        let count = seq.int_range(MIN_STARS, MAX_STARS);
        for _ in 0..count {
            let x = seq.range(0.0, 100.0);
            let y = seq.range(0.0, 100.0);
            let r = seq.range(0.4, 1.6);
            let Some(color) = seq.pick(&stars) else { break };
            let opacity = seq.range(0.5, 1.0);
            let _ = write!(
                body,
                r#"<circle cx="{}" cy="{}" r="{}" fill="{}" opacity="{}"/>"#,
                num(x),
                num(y),
                num(r),
                color,
                num(opacity)
            );
        }
        body
    }
}

/// Palette colors not used by the background layers, falling back to the
/// opposite extreme when the palette has nothing left.
fn star_pool(scheme: &ColorScheme, glow: &Color) -> Vec<Color> {
    let pool: Vec<Color> = scheme
        .sorted
        .iter()
        .filter(|c| **c != scheme.background && *c != glow)
        .cloned()
        .collect();
    if pool.is_empty() {
        vec![scheme.opposite.clone()]
    } else {
        pool
    }
}
