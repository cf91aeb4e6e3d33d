#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// HatchPattern
// =============================================================

#[test]
fn horizontal_lines_span_full_width() {
    let lines = HatchPattern::HorizontalLine.lines(100.0, 30.0, 10.0);
    assert_eq!(lines.len(), 4);
    for (x0, y0, x1, y1) in &lines {
        assert_eq!(*x0, 0.0);
        assert_eq!(*x1, 100.0);
        assert_eq!(y0, y1);
    }
}

#[test]
fn vertical_lines_span_full_height() {
    let lines = HatchPattern::VerticalLine.lines(20.0, 50.0, 10.0);
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|(_, y0, _, y1)| *y0 == 0.0 && *y1 == 50.0));
}

#[test]
fn cross_is_horizontal_plus_vertical() {
    let h = HatchPattern::HorizontalLine.lines(40.0, 40.0, 10.0).len();
    let v = HatchPattern::VerticalLine.lines(40.0, 40.0, 10.0).len();
    assert_eq!(HatchPattern::Cross.lines(40.0, 40.0, 10.0).len(), h + v);
}

#[test]
fn diagonal_lines_have_unit_slope() {
    for (x0, y0, x1, y1) in HatchPattern::DiagonalLine.lines(50.0, 50.0, 10.0) {
        assert_eq!(x0 + y0, x1 + y1);
    }
    for (x0, y0, x1, y1) in HatchPattern::LeftDiagonalLine.lines(50.0, 50.0, 10.0) {
        assert_eq!(x0 - y0, x1 - y1);
    }
}

#[test]
fn degenerate_spacing_yields_no_lines() {
    assert!(HatchPattern::Cross.lines(100.0, 100.0, 0.0).is_empty());
    assert!(HatchPattern::Cross.lines(100.0, 100.0, -4.0).is_empty());
    assert!(HatchPattern::Cross.lines(100.0, 100.0, f64::NAN).is_empty());
    assert!(HatchPattern::Cross.lines(f64::INFINITY, 100.0, 10.0).is_empty());
}

#[test]
fn hatch_pattern_deserializes_snake_case() {
    let p: HatchPattern = serde_json::from_str("\"left_diagonal_line\"").unwrap();
    assert_eq!(p, HatchPattern::LeftDiagonalLine);
}

// =============================================================
// RecordingContext
// =============================================================

#[test]
fn recording_starts_empty() {
    let ctx = RecordingContext::new();
    assert!(ctx.is_empty());
}

#[test]
fn recording_keeps_call_order() {
    let mut ctx = RecordingContext::new();
    ctx.begin_path();
    ctx.move_to(1.0, 2.0);
    ctx.line_to(3.0, 4.0);
    ctx.stroke();
    assert_eq!(
        ctx.commands,
        vec![
            Command::BeginPath,
            Command::MoveTo { x: 1.0, y: 2.0 },
            Command::LineTo { x: 3.0, y: 4.0 },
            Command::Stroke,
        ]
    );
}

#[test]
fn recording_rejects_negative_arc_radius() {
    let mut ctx = RecordingContext::new();
    assert!(ctx.arc(0.0, 0.0, -1.0, 0.0, 1.0, false).is_err());
    assert!(ctx.is_empty());
}

#[test]
fn recording_measures_text_by_char_count() {
    let mut ctx = RecordingContext { char_width: 5.0, ..RecordingContext::default() };
    assert_eq!(ctx.measure_text("45.00°").unwrap(), 30.0);
    assert!(ctx.is_empty());
}

#[test]
fn recording_count_and_clear() {
    let mut ctx = RecordingContext::new();
    ctx.fill();
    ctx.stroke();
    ctx.fill();
    assert_eq!(ctx.count(|c| matches!(c, Command::Fill)), 2);
    ctx.clear();
    assert!(ctx.is_empty());
}

#[test]
fn commands_serialize_with_op_tag() {
    let value = serde_json::to_value(Command::MoveTo { x: 1.0, y: 2.0 }).unwrap();
    assert_eq!(value, serde_json::json!({"op": "move_to", "x": 1.0, "y": 2.0}));
}
