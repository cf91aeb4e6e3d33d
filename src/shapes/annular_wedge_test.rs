#![allow(clippy::float_cmp)]

use std::f64::consts::FRAC_PI_2;

use super::*;
use crate::context::{Command, RecordingContext};

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn paint(wedge: &AnnularWedge) -> RecordingContext {
    let mut ctx = RecordingContext::new();
    wedge.paint(&mut ctx, &XyScales::screen(), &ViewStorage::new()).unwrap();
    ctx
}

#[test]
fn new_rejects_negative_radii() {
    assert!(AnnularWedge::new(0.0, 0.0, -1.0, 2.0, 0.0, 1.0).is_err());
    assert!(AnnularWedge::new(0.0, 0.0, 1.0, -2.0, 0.0, 1.0).is_err());
}

#[test]
fn geometry_sweep_is_end_minus_start() {
    let wedge = AnnularWedge::new(0.0, 0.0, 1.0, 2.0, 0.5, 2.0).unwrap();
    let g = wedge.geometry(&XyScales::screen());
    assert!(approx_eq(g.start_angle, -0.5));
    assert!(approx_eq(g.angle, -1.5));
}

#[test]
fn paint_builds_path_in_rotated_frame() {
    let ctx = paint(&AnnularWedge::new(100.0, 50.0, 10.0, 20.0, 0.0, FRAC_PI_2).unwrap());
    let angle = -FRAC_PI_2;
    assert_eq!(
        &ctx.commands[..10],
        &[
            Command::Translate { x: 100.0, y: 50.0 },
            Command::Rotate { angle: 0.0 },
            Command::BeginPath,
            Command::MoveTo { x: 20.0, y: 0.0 },
            Command::Arc { x: 0.0, y: 0.0, radius: 20.0, start: 0.0, end: angle, anticlockwise: true },
            Command::Rotate { angle },
            Command::LineTo { x: 10.0, y: 0.0 },
            Command::Arc { x: 0.0, y: 0.0, radius: 10.0, start: 0.0, end: -angle, anticlockwise: false },
            Command::ClosePath,
            Command::Rotate { angle: -angle },
        ]
    );
    assert_eq!(ctx.commands[10], Command::Translate { x: -100.0, y: -50.0 });
}

#[test]
fn transform_is_unwound_before_visuals() {
    let ctx = paint(&AnnularWedge::new(5.0, 5.0, 1.0, 2.0, 0.3, 1.1).unwrap());
    let unwind = ctx.commands.iter().position(|c| *c == Command::Translate { x: -5.0, y: -5.0 }).unwrap();
    let fill = ctx.commands.iter().position(|c| *c == Command::Fill).unwrap();
    assert!(unwind < fill);

    let net: f64 = ctx
        .commands
        .iter()
        .filter_map(|c| match c {
            Command::Rotate { angle } => Some(*angle),
            _ => None,
        })
        .sum();
    assert!(approx_eq(net, 0.0));
}

#[test]
fn clockwise_flips_both_arcs() {
    let ctx = paint(&AnnularWedge::new(0.0, 0.0, 1.0, 2.0, 0.0, 1.0).unwrap().with_direction(Direction::Clock));
    let flags: Vec<bool> = ctx
        .commands
        .iter()
        .filter_map(|c| match c {
            Command::Arc { anticlockwise, .. } => Some(*anticlockwise),
            _ => None,
        })
        .collect();
    assert_eq!(flags, vec![false, true]);
}

#[test]
fn paint_nan_angle_draws_nothing() {
    let ctx = paint(&AnnularWedge::new(0.0, 0.0, 1.0, 2.0, f64::NAN, 1.0).unwrap());
    assert!(ctx.is_empty());
}
