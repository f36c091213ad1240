//! `polygon`: two overlapping irregular polygons in three colors.
//!
//! Polygon B is centered less than half of A's radius away from A's center.
//! A's vertices all sit at 75% or more of its radius and no two neighbours
//! are more than 1.3 angular steps apart, so A always contains a disk of
//! about 0.51 radii around its center and B's center lies inside A.

use std::f64::consts::TAU;

use crate::color::ColorScheme;
use crate::sequence::Sequence;
use crate::style::{DrawOptions, Style};
use crate::svg;

use super::{background_only, cycle};

/// Vertex coordinates of one polygon.
type Vertices = Vec<(f64, f64)>;

/// Two overlapping polygons; the overlap is recolored through a mask cut
/// from polygon A.
#[derive(Debug, Clone, Copy, Default)]
pub struct Polygon;

impl Style for Polygon {
    fn name(&self) -> &str {
        "polygon"
    }

    fn draw(&self, hash: u32, options: &DrawOptions<'_>) -> String {
        let Some(scheme) = ColorScheme::new(options.palette.colors(), options.variant) else {
            return String::new();
        };
        if scheme.foreground.is_empty() {
            return background_only(&scheme.background);
        }

        let start = hash % scheme.foreground.len() as u32;
        let color_a = cycle(&scheme.foreground, start);
        let color_b = cycle(&scheme.foreground, start + 1);
        let color_overlap = if scheme.foreground.len() >= 3 {
            cycle(&scheme.foreground, start + 2)
        } else {
            // Every other color is already A or B; cut the overlap out instead.
            &scheme.background
        };

        let layout = Layout::new(hash);
        let a = svg::points(&layout.a);
        let b = svg::points(&layout.b);

        let mut body = format!(
            concat!(
                r#"<defs><mask id="polygon-a">"#,
                r#"<rect width="100" height="100" fill="black"/>"#,
                r#"<polygon points="{a}" fill="white"/></mask></defs>"#,
            ),
            a = a
        );
        body.push_str(&svg::background(&scheme.background));
        body.push_str(&format!(r#"<polygon points="{}" fill="{}"/>"#, a, color_a));
        body.push_str(&format!(r#"<polygon points="{}" fill="{}"/>"#, b, color_b));
        body.push_str(&format!(
            r#"<polygon points="{}" fill="{}" mask="url(#polygon-a)"/>"#,
            b, color_overlap
        ));
        body
    }
}

/// Geometry of both polygons, drawn from the hash-seeded sequence.
#[derive(Debug, Clone)]
struct Layout {
    a: Vertices,
    b: Vertices,
    b_center: (f64, f64),
}

impl Layout {
    fn new(hash: u32) -> Self {
        let mut seq = Sequence::new(hash);

        let a_center = (seq.range(40.0, 60.0), seq.range(40.0, 60.0));
        let a_radius = seq.range(20.0, 28.0);
        let a = irregular(&mut seq, a_center, a_radius);

        let direction = seq.range(0.0, TAU);
        let distance = seq.range(0.2, 0.5) * a_radius;
        let b_center =
            (a_center.0 + distance * direction.cos(), a_center.1 + distance * direction.sin());
        let b_radius = seq.range(18.0, 26.0);
        let b = irregular(&mut seq, b_center, b_radius);

        Self { a, b, b_center }
    }
}

/// Five to eight vertices around `center` with jittered angles and radii.
fn irregular(seq: &mut Sequence, center: (f64, f64), radius: f64) -> Vertices {
    let sides = seq.int_range(5, 8);
    let rotation = seq.range(0.0, TAU);
    let step = TAU / f64::from(sides);
    (0..sides)
        .map(|i| {
            let angle = rotation + f64::from(i) * step + seq.range(-0.15, 0.15) * step;
            let r = radius * seq.range(0.75, 1.0);
            (center.0 + r * angle.cos(), center.1 + r * angle.sin())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Variant;
    use crate::palette::Palette;
    use crate::palettes;

    /// Even-odd ray casting.
    fn contains(polygon: &[(f64, f64)], point: (f64, f64)) -> bool {
        let mut inside = false;
        let mut j = polygon.len() - 1;
        for i in 0..polygon.len() {
            let (xi, yi) = polygon[i];
            let (xj, yj) = polygon[j];
            if (yi > point.1) != (yj > point.1)
                && point.0 < (xj - xi) * (point.1 - yi) / (yj - yi) + xi
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }

    #[test]
    fn test_polygons_always_overlap() {
        for hash in (0..2000u32).map(|h| h.wrapping_mul(2_654_435_761)) {
            let layout = Layout::new(hash);
            assert!(
                contains(&layout.a, layout.b_center),
                "hash {}: polygon B center outside polygon A",
                hash
            );
        }
    }

    #[test]
    fn test_vertex_counts() {
        for hash in 1..200u32 {
            let layout = Layout::new(hash);
            assert!((5..=8).contains(&layout.a.len()));
            assert!((5..=8).contains(&layout.b.len()));
        }
    }

    #[test]
    fn test_three_distinct_colors() {
        let palette = palettes::get_builtin("pride").unwrap();
        let body = Polygon.draw(
            99,
            &DrawOptions { size: 100, palette: &palette, variant: Variant::Light, display_name: None },
        );
        assert_eq!(body.matches("<polygon").count(), 4); // mask + A + B + overlap
        assert!(body.contains(r#"mask="url(#polygon-a)""#));
    }

    fn polygon_fills(body: &str) -> Vec<&str> {
        body.split("<polygon")
            .skip(2) // mask silhouette
            .map(|part| {
                let start = part.find(r#"fill=""#).unwrap() + 6;
                &part[start..start + 7]
            })
            .collect()
    }

    #[test]
    fn test_single_foreground_uses_background_for_overlap() {
        let palette = Palette::new("duo", ["#000000", "#ffffff"]).unwrap();
        let body = Polygon.draw(
            5,
            &DrawOptions { size: 100, palette: &palette, variant: Variant::Light, display_name: None },
        );
        assert_eq!(polygon_fills(&body), vec!["#000000", "#000000", "#ffffff"]);
    }

    #[test]
    fn test_two_foreground_colors_keep_overlap_distinct() {
        let palette = Palette::new("tri", ["#000000", "#777777", "#ffffff"]).unwrap();
        for seed in ["someone", "anyone", "no one"] {
            let hash = crate::hash::hash_seed(seed);
            let body = Polygon.draw(
                hash,
                &DrawOptions { size: 100, palette: &palette, variant: Variant::Light, display_name: None },
            );
            let fills = polygon_fills(&body);
            assert_eq!(fills.len(), 3);
            assert_ne!(fills[0], fills[1], "{}", seed);
            assert_ne!(fills[2], fills[0], "{}", seed);
            assert_ne!(fills[2], fills[1], "{}", seed);
            assert!(body.contains(&format!(r#"fill="{}" mask="url(#polygon-a)""#, fills[2])));
        }
    }

    #[test]
    fn test_dark_variant_overlap_is_background() {
        let palette = Palette::new("tri", ["#000000", "#777777", "#ffffff"]).unwrap();
        let body = Polygon.draw(
            1,
            &DrawOptions { size: 100, palette: &palette, variant: Variant::Dark, display_name: None },
        );
        let fills = polygon_fills(&body);
        assert_ne!(fills[2], fills[0]);
        assert_ne!(fills[2], fills[1]);
        assert_eq!(fills[2], "#000000");
    }
}
