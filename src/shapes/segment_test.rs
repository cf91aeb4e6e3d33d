use super::*;
use crate::context::{Command, RecordingContext};

fn paint(segment: &Segment) -> RecordingContext {
    let mut ctx = RecordingContext::new();
    segment.paint(&mut ctx, &XyScales::screen(), &ViewStorage::new()).unwrap();
    ctx
}

#[test]
fn paint_moves_then_lines() {
    let ctx = paint(&Segment::new(1.0, 2.0, 3.0, 4.0));
    assert_eq!(
        &ctx.commands[..3],
        &[Command::BeginPath, Command::MoveTo { x: 1.0, y: 2.0 }, Command::LineTo { x: 3.0, y: 4.0 }]
    );
    assert_eq!(ctx.commands.last(), Some(&Command::Stroke));
}

#[test]
fn segment_is_never_filled() {
    let ctx = paint(&Segment::new(0.0, 0.0, 1.0, 1.0));
    assert_eq!(ctx.count(|c| matches!(c, Command::Fill | Command::FillHatch { .. })), 0);
}

#[test]
fn invisible_line_builds_path_only() {
    let ctx = paint(&Segment::new(0.0, 0.0, 1.0, 1.0).with_line(LineVisual::none()));
    assert_eq!(ctx.commands.len(), 3);
}

#[test]
fn unset_segment_draws_nothing() {
    assert!(paint(&Segment::unset()).is_empty());
}

#[test]
fn one_nan_endpoint_draws_nothing() {
    assert!(paint(&Segment::new(0.0, 0.0, 1.0, f64::NAN)).is_empty());
}
