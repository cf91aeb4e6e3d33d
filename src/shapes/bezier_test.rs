use super::*;
use crate::context::{Command, RecordingContext};

fn paint(bezier: &Bezier) -> RecordingContext {
    let mut ctx = RecordingContext::new();
    bezier.paint(&mut ctx, &XyScales::screen(), &ViewStorage::new()).unwrap();
    ctx
}

#[test]
fn one_control_point_is_quadratic() {
    let ctx = paint(&Bezier::quadratic(0.0, 0.0, 10.0, 0.0, 5.0, 5.0));
    assert_eq!(ctx.commands[1], Command::MoveTo { x: 0.0, y: 0.0 });
    assert_eq!(ctx.commands[2], Command::QuadraticCurveTo { cpx: 5.0, cpy: 5.0, x: 10.0, y: 0.0 });
}

#[test]
fn two_control_points_are_cubic() {
    let ctx = paint(&Bezier::cubic(0.0, 0.0, 10.0, 0.0, 2.0, 5.0, 8.0, 5.0));
    assert_eq!(
        ctx.commands[2],
        Command::BezierCurveTo { cp1x: 2.0, cp1y: 5.0, cp2x: 8.0, cp2y: 5.0, x: 10.0, y: 0.0 }
    );
}

#[test]
fn half_second_control_point_falls_back_to_quadratic() {
    let mut bezier = Bezier::quadratic(0.0, 0.0, 10.0, 0.0, 5.0, 5.0);
    bezier.cx1 = Some(8.0);
    let ctx = paint(&bezier);
    assert!(matches!(ctx.commands[2], Command::QuadraticCurveTo { .. }));
}

#[test]
fn bezier_is_stroked_only() {
    let ctx = paint(&Bezier::quadratic(0.0, 0.0, 1.0, 1.0, 0.5, 0.0));
    assert_eq!(ctx.count(|c| matches!(c, Command::Fill)), 0);
    assert_eq!(ctx.commands.last(), Some(&Command::Stroke));
}

#[test]
fn nan_control_point_draws_nothing() {
    assert!(paint(&Bezier::quadratic(0.0, 0.0, 1.0, 1.0, f64::NAN, 0.0)).is_empty());
    assert!(paint(&Bezier::cubic(0.0, 0.0, 1.0, 1.0, 0.5, 0.0, f64::INFINITY, 0.0)).is_empty());
}
