#![allow(clippy::float_cmp)]

use std::f64::consts::FRAC_PI_2;

use super::*;
use crate::context::{Command, RecordingContext};
use crate::visuals::{FillVisual, HatchVisual, LineVisual};

fn paint(wedge: &Wedge) -> RecordingContext {
    let mut ctx = RecordingContext::new();
    wedge.paint(&mut ctx, &XyScales::screen(), &ViewStorage::new()).unwrap();
    ctx
}

#[test]
fn new_rejects_negative_radius() {
    assert!(Wedge::new(0.0, 0.0, -2.0, 0.0, 1.0).is_err());
}

#[test]
fn paint_closes_back_to_center() {
    let ctx = paint(&Wedge::new(30.0, 40.0, 10.0, 0.0, FRAC_PI_2).unwrap());
    assert_eq!(ctx.commands[0], Command::BeginPath);
    assert!(matches!(ctx.commands[1], Command::Arc { x, y, radius, .. } if x == 30.0 && y == 40.0 && radius == 10.0));
    assert_eq!(ctx.commands[2], Command::LineTo { x: 30.0, y: 40.0 });
    assert_eq!(ctx.commands[3], Command::ClosePath);
}

#[test]
fn paint_applies_fill_before_stroke() {
    let wedge = Wedge::new(0.0, 0.0, 10.0, 0.0, 1.0)
        .unwrap()
        .with_visuals(Visuals::new(FillVisual::new("red"), HatchVisual::none(), LineVisual::default()));
    let ctx = paint(&wedge);
    let fill = ctx.commands.iter().position(|c| *c == Command::Fill).unwrap();
    let stroke = ctx.commands.iter().position(|c| *c == Command::Stroke).unwrap();
    assert!(fill < stroke);
}

#[test]
fn paint_nan_center_draws_nothing() {
    let ctx = paint(&Wedge::new(f64::NAN, 0.0, 10.0, 0.0, 1.0).unwrap());
    assert!(ctx.is_empty());
}

#[test]
fn paint_nan_radius_draws_nothing() {
    let ctx = paint(&Wedge::new(0.0, 0.0, f64::NAN, 0.0, 1.0).unwrap());
    assert!(ctx.is_empty());
}
