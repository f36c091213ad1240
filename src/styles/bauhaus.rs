//! `bauhaus`: a geometric composition of circles, rectangles and triangles.

use std::f64::consts::PI;

use crate::color::{Color, ColorScheme};
use crate::sequence::Sequence;
use crate::style::{DrawOptions, Style};
use crate::svg::{self, num};

use super::background_only;

/// One guaranteed circle, one guaranteed rotated rectangle, and up to two
/// extra shapes, painted largest first.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bauhaus;

impl Style for Bauhaus {
    fn name(&self) -> &str {
        "bauhaus"
    }

    fn draw(&self, hash: u32, options: &DrawOptions<'_>) -> String {
        let Some(scheme) = ColorScheme::new(options.palette.colors(), options.variant) else {
            return String::new();
        };
        if scheme.foreground.is_empty() {
            return background_only(&scheme.background);
        }

        let mut body = svg::background(&scheme.background);
        for (shape, color) in compose(hash, &scheme.foreground) {
            body.push_str(&shape.render(&color));
        }
        body
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Shape {
    Circle { cx: f64, cy: f64, r: f64 },
    Rect { x: f64, y: f64, width: f64, height: f64, rotation: f64 },
    Triangle { cx: f64, cy: f64, side: f64, rotation: f64 },
}

impl Shape {
    fn area(&self) -> f64 {
        match *self {
            Shape::Circle { r, .. } => PI * r * r,
            Shape::Rect { width, height, .. } => width * height,
            Shape::Triangle { side, .. } => 3f64.sqrt() / 4.0 * side * side,
        }
    }

    fn render(&self, fill: &Color) -> String {
        match *self {
            Shape::Circle { cx, cy, r } => svg::circle(cx, cy, r, fill),
            Shape::Rect { x, y, width, height, rotation } => format!(
                r#"<rect x="{}" y="{}" width="{}" height="{}" transform="rotate({} {} {})" fill="{}"/>"#,
                num(x),
                num(y),
                num(width),
                num(height),
                num(rotation),
                num(x + width / 2.0),
                num(y + height / 2.0),
                fill
            ),
            Shape::Triangle { cx, cy, side, rotation } => {
                // circumradius of an equilateral triangle
                let radius = side / 3f64.sqrt();
                let vertices: Vec<(f64, f64)> = (0..3)
                    .map(|i| {
                        let angle = rotation.to_radians() + f64::from(i) * 2.0 * PI / 3.0 - PI / 2.0;
                        (cx + radius * angle.cos(), cy + radius * angle.sin())
                    })
                    .collect();
                format!(r#"<polygon points="{}" fill="{}"/>"#, svg::points(&vertices), fill)
            }
        }
    }
}

/// Shapes with their colors, ordered back to front by descending area.
fn compose(hash: u32, palette: &[Color]) -> Vec<(Shape, Color)> {
    let mut seq = Sequence::new(hash);
    let mut shapes = Vec::with_capacity(4);

    let circle = Shape::Circle {
        cx: seq.range(25.0, 45.0),
        cy: seq.range(25.0, 50.0),
        r: seq.range(15.0, 25.0),
    };
    shapes.push((circle, pick(&mut seq, palette)));

    let rect = Shape::Rect {
        x: seq.range(45.0, 60.0),
        y: seq.range(40.0, 60.0),
        width: seq.range(20.0, 35.0),
        height: seq.range(20.0, 40.0),
        rotation: seq.range(-22.0, 22.0),
    };
    shapes.push((rect, pick(&mut seq, palette)));

    for _ in 0..hash % 3 {
        let extra = match seq.int_range(0, 2) {
            0 => Shape::Circle {
                cx: seq.range(10.0, 90.0),
                cy: seq.range(10.0, 90.0),
                r: seq.range(5.0, 15.0),
            },
            1 => Shape::Rect {
                x: seq.range(5.0, 75.0),
                y: seq.range(5.0, 75.0),
                width: seq.range(8.0, 25.0),
                height: seq.range(8.0, 25.0),
                rotation: seq.range(-45.0, 45.0),
            },
            _ => Shape::Triangle {
                cx: seq.range(15.0, 85.0),
                cy: seq.range(15.0, 85.0),
                side: seq.range(12.0, 30.0),
                rotation: seq.range(0.0, 120.0),
            },
        };
        shapes.push((extra, pick(&mut seq, palette)));
    }

    shapes.sort_by(|(a, _), (b, _)| b.area().total_cmp(&a.area()));
    shapes
}

fn pick(seq: &mut Sequence, palette: &[Color]) -> Color {
    // callers guarantee a non-empty palette
    seq.pick(palette).cloned().unwrap_or_else(|| Color::from_rgb(0, 0, 0))
}
