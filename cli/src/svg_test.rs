use starmap::Point;

use super::*;

#[test]
fn empty_frame_is_bare_document() {
    let svg = render(&[], 800.0, 600.0).unwrap();
    assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="800" height="600""#));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn clear_paints_background() {
    let svg = render(&[DrawOp::Clear { width: 800.0, height: 600.0 }], 800.0, 600.0).unwrap();
    assert!(svg.contains(r##"<rect x="0" y="0" width="800" height="600" fill="#000000"/>"##));
}

#[test]
fn primitives_keep_order() {
    let ops = [
        DrawOp::Circle { center: Point::new(400.0, 300.0), radius: 4.0 },
        DrawOp::Line { from: Point::new(0.0, 0.0), to: Point::new(10.5, 20.25), width: 2.0 },
        DrawOp::Text { at: Point::new(420.0, 320.0), text: "Orion".into() },
    ];
    let svg = render(&ops, 800.0, 600.0).unwrap();
    let circle = svg.find(r#"<circle cx="400.00" cy="300.00" r="4.00""#).unwrap();
    let line = svg.find(r#"<line x1="0.00" y1="0.00" x2="10.50" y2="20.25""#).unwrap();
    let text = svg.find(">Orion</text>").unwrap();
    assert!(circle < line && line < text);
}

#[test]
fn label_text_is_escaped() {
    let ops = [DrawOp::Text { at: Point::new(0.0, 0.0), text: "<A & B>".into() }];
    let svg = render(&ops, 10.0, 10.0).unwrap();
    assert!(svg.contains(">&lt;A &amp; B&gt;</text>"));
}
