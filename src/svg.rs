//! SVG markup helpers shared by the built-in styles.
//!
//! All coordinates live in the `0 0 100 100` viewBox.

use std::fmt::Write;

use crate::color::Color;

/// Width and height of the shared viewBox.
pub const VIEWBOX: f64 = 100.0;

/// Format a coordinate with at most two decimals and no trailing zeros.
///
/// ```
/// use seedavatar::svg::num;
///
/// assert_eq!(num(20.0), "20");
/// assert_eq!(num(12.5), "12.5");
/// assert_eq!(num(1.0 / 3.0), "0.33");
/// assert_eq!(num(-0.001), "0");
/// ```
pub fn num(value: f64) -> String {
    let mut s = format!("{:.2}", value);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

/// Escape text content for inclusion in markup.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Full-canvas background rectangle.
pub fn background(fill: &Color) -> String {
    format!(r#"<rect width="100" height="100" fill="{}"/>"#, fill)
}

/// Axis-aligned rectangle.
pub fn rect(x: f64, y: f64, width: f64, height: f64, fill: &Color) -> String {
    format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
        num(x),
        num(y),
        num(width),
        num(height),
        fill
    )
}

/// Circle.
pub fn circle(cx: f64, cy: f64, r: f64, fill: &Color) -> String {
    format!(r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#, num(cx), num(cy), num(r), fill)
}

/// `points` attribute value for a polygon.
pub fn points(vertices: &[(f64, f64)]) -> String {
    let mut out = String::new();
    for (i, (x, y)) in vertices.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{},{}", num(*x), num(*y));
    }
    out
}
