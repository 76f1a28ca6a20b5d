//! SVG serialization of a recorded frame.

#[cfg(test)]
#[path = "svg_test.rs"]
mod svg_test;

use std::fmt::Write;

use starmap::DrawOp;
use starmap::consts::INK;

const BACKGROUND: &str = "#000000";
const FONT_FAMILY: &str = "Montserrat";
const FONT_SIZE_PX: u32 = 18;

/// Render `ops` as a standalone SVG document of the given logical size.
///
/// # Errors
///
/// Returns [`std::fmt::Error`] only if writing to the output string fails.
pub fn render(ops: &[DrawOp], width: f64, height: f64) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    )?;
    for op in ops {
        match op {
            DrawOp::Clear { width, height } => {
                writeln!(out, r#"  <rect x="0" y="0" width="{width}" height="{height}" fill="{BACKGROUND}"/>"#)?;
            }
            DrawOp::Circle { center, radius } => {
                writeln!(out, r#"  <circle cx="{:.2}" cy="{:.2}" r="{radius:.2}" fill="{INK}"/>"#, center.x, center.y)?;
            }
            DrawOp::Line { from, to, width } => {
                writeln!(
                    out,
                    r#"  <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{INK}" stroke-width="{width:.2}"/>"#,
                    from.x, from.y, to.x, to.y
                )?;
            }
            DrawOp::Text { at, text } => {
                writeln!(
                    out,
                    r#"  <text x="{:.2}" y="{:.2}" fill="{INK}" font-family="{FONT_FAMILY}" font-size="{FONT_SIZE_PX}">{}</text>"#,
                    at.x,
                    at.y,
                    escape(text)
                )?;
            }
        }
    }
    writeln!(out, "</svg>")?;
    Ok(out)
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
