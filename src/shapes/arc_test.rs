#![allow(clippy::float_cmp)]

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use super::*;
use crate::context::{Command, RecordingContext};
use crate::coordinates::CoordinateMapping;
use crate::scale::{LinearScale, Range1d};
use crate::shapes::arrow_head::ArrowHeadKind;
use crate::shapes::{Renderable, ShapeView};

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn mapping() -> CoordinateMapping {
    CoordinateMapping::new(
        Box::new(LinearScale::new(Range1d::new(0.0, 10.0), Range1d::new(0.0, 100.0))),
        Box::new(LinearScale::new(Range1d::new(0.0, 10.0), Range1d::new(100.0, 0.0))),
    )
}

fn vee() -> ArrowHead {
    ArrowHead::new(ArrowHeadKind::Vee, 10.0).unwrap()
}

fn translates(ctx: &RecordingContext) -> Vec<(f64, f64)> {
    ctx.commands
        .iter()
        .filter_map(|c| match c {
            Command::Translate { x, y } => Some((*x, *y)),
            _ => None,
        })
        .collect()
}

fn rotations(ctx: &RecordingContext) -> Vec<f64> {
    ctx.commands
        .iter()
        .filter_map(|c| match c {
            Command::Rotate { angle } => Some(*angle),
            _ => None,
        })
        .collect()
}

// =============================================================
// Geometry
// =============================================================

#[test]
fn new_rejects_negative_radius() {
    assert!(Arc::new(0.0, 0.0, -1.0, 0.0, 1.0).is_err());
}

#[test]
fn geometry_maps_center_and_radius() {
    let mapping = mapping();
    let arc = Arc::new(5.0, 5.0, 2.0, 0.0, FRAC_PI_2).unwrap();
    let g = arc.geometry(&mapping.scales());
    assert!(approx_eq(g.sx, 50.0));
    assert!(approx_eq(g.sy, 50.0));
    assert!(approx_eq(g.sradius, 20.0));
    assert!(approx_eq(g.start_angle, 0.0));
    assert!(approx_eq(g.end_angle, -FRAC_PI_2));
    assert!(g.anticlock);
    assert!(g.is_finite());
}

#[test]
fn geometry_converts_degrees() {
    let arc = Arc::new(0.0, 0.0, 1.0, 0.0, 180.0).unwrap().with_units(AngleUnits::Deg);
    let g = arc.geometry(&XyScales::screen());
    assert!(approx_eq(g.end_angle, -PI));
}

#[test]
fn geometry_clockwise_direction_clears_anticlock_flag() {
    let arc = Arc::new(0.0, 0.0, 1.0, 0.0, 1.0).unwrap().with_direction(Direction::Clock);
    assert!(!arc.geometry(&XyScales::screen()).anticlock);
}

// =============================================================
// Paint
// =============================================================

#[test]
fn paint_draws_arc_then_stroke() {
    let mut ctx = RecordingContext::new();
    let arc = Arc::new(10.0, 20.0, 5.0, 0.0, 1.0).unwrap();
    arc.paint(&mut ctx, &XyScales::screen(), &ViewStorage::new()).unwrap();
    assert_eq!(ctx.commands[0], Command::BeginPath);
    assert_eq!(
        ctx.commands[1],
        Command::Arc { x: 10.0, y: 20.0, radius: 5.0, start: 0.0, end: -1.0, anticlockwise: true }
    );
    assert_eq!(ctx.commands.last(), Some(&Command::Stroke));
}

#[test]
fn paint_nan_radius_draws_nothing() {
    let mut ctx = RecordingContext::new();
    let mut arc = Arc::new(10.0, 20.0, 5.0, 0.0, 1.0).unwrap();
    arc.radius = f64::NAN;
    arc.paint(&mut ctx, &XyScales::screen(), &ViewStorage::new()).unwrap();
    assert!(ctx.is_empty());
}

#[test]
fn paint_infinite_angle_draws_nothing() {
    let mut ctx = RecordingContext::new();
    let arc = Arc::new(10.0, 20.0, 5.0, 0.0, f64::INFINITY).unwrap();
    arc.paint(&mut ctx, &XyScales::screen(), &ViewStorage::new()).unwrap();
    assert!(ctx.is_empty());
}

#[test]
fn decoration_at_end_is_unrotated() {
    let view = ShapeView::new(
        Arc::new(100.0, 100.0, 50.0, 0.0, FRAC_PI_2)
            .unwrap()
            .with_decoration(vee(), DecorationNode::End),
    );
    let mut ctx = RecordingContext::new();
    view.render(&mut ctx, &XyScales::screen()).unwrap();

    let t = translates(&ctx);
    assert_eq!(t.len(), 1);
    assert!(approx_eq(t[0].0, 100.0));
    assert!(approx_eq(t[0].1, 50.0));

    let r = rotations(&ctx);
    assert_eq!(r.len(), 1);
    assert!(approx_eq(r[0], -FRAC_PI_2));
}

#[test]
fn decoration_transform_is_scoped_by_save_restore() {
    let view = ShapeView::new(
        Arc::new(0.0, 0.0, 10.0, 0.0, 1.0)
            .unwrap()
            .with_decoration(vee(), DecorationNode::End),
    );
    let mut ctx = RecordingContext::new();
    view.render(&mut ctx, &XyScales::screen()).unwrap();

    let stroke = ctx.commands.iter().position(|c| *c == Command::Stroke).unwrap();
    let save = ctx.commands.iter().position(|c| *c == Command::Save).unwrap();
    let translate = ctx.commands.iter().position(|c| matches!(c, Command::Translate { .. })).unwrap();
    assert!(stroke < save && save < translate);
    assert_eq!(ctx.commands.last(), Some(&Command::Restore));
}

/// Dot product of the marker body (+y in the marker frame) with the
/// direction of travel at the arc's end.
fn end_marker_body_dot_travel(direction: Direction) -> f64 {
    let arc = Arc::new(0.0, 0.0, 10.0, 0.0, 1.0)
        .unwrap()
        .with_direction(direction)
        .with_decoration(vee(), DecorationNode::End);
    let theta = arc.geometry(&XyScales::screen()).end_angle;
    let view = ShapeView::new(arc);
    let mut ctx = RecordingContext::new();
    view.render(&mut ctx, &XyScales::screen()).unwrap();

    let r = rotations(&ctx)[0];
    let body = (-r.sin(), r.cos());
    // Canvas anticlockwise sweeps decrease the screen angle.
    let travel = match direction {
        Direction::Anticlock => (theta.sin(), -theta.cos()),
        Direction::Clock => (-theta.sin(), theta.cos()),
    };
    body.0 * travel.0 + body.1 * travel.1
}

#[test]
fn end_marker_trails_travel_anticlockwise() {
    assert!(approx_eq(end_marker_body_dot_travel(Direction::Anticlock), -1.0));
}

#[test]
fn end_marker_trails_travel_clockwise() {
    assert!(approx_eq(end_marker_body_dot_travel(Direction::Clock), -1.0));
}

#[test]
fn clockwise_start_marker_is_unflipped() {
    let view = ShapeView::new(
        Arc::new(0.0, 0.0, 10.0, 0.0, 1.0)
            .unwrap()
            .with_direction(Direction::Clock)
            .with_decoration(vee(), DecorationNode::Start),
    );
    let mut ctx = RecordingContext::new();
    view.render(&mut ctx, &XyScales::screen()).unwrap();
    assert!(approx_eq(rotations(&ctx)[0], TAU));
}

#[test]
fn decoration_at_start_is_flipped() {
    let view = ShapeView::new(
        Arc::new(0.0, 0.0, 10.0, 0.0, FRAC_PI_2)
            .unwrap()
            .with_decoration(vee(), DecorationNode::Start),
    );
    let mut ctx = RecordingContext::new();
    view.render(&mut ctx, &XyScales::screen()).unwrap();
    let t = translates(&ctx);
    assert!(approx_eq(t[0].0, 10.0) && approx_eq(t[0].1, 0.0));
    assert!(approx_eq(rotations(&ctx)[0], PI));
}

#[test]
fn decoration_at_middle_uses_bisector() {
    let view = ShapeView::new(
        Arc::new(0.0, 0.0, 10.0, 0.0, FRAC_PI_2)
            .unwrap()
            .with_decoration(vee(), DecorationNode::Middle),
    );
    let mut ctx = RecordingContext::new();
    view.render(&mut ctx, &XyScales::screen()).unwrap();
    assert!(approx_eq(rotations(&ctx)[0], -FRAC_PI_2 / 2.0 + PI));
}

#[test]
fn decorations_skipped_when_line_invisible() {
    let view = ShapeView::new(
        Arc::new(0.0, 0.0, 10.0, 0.0, 1.0)
            .unwrap()
            .with_line(LineVisual::none())
            .with_decoration(vee(), DecorationNode::End),
    );
    let mut ctx = RecordingContext::new();
    view.render(&mut ctx, &XyScales::screen()).unwrap();
    assert!(translates(&ctx).is_empty());
}

#[test]
fn decorations_without_built_view_are_skipped() {
    let arc = Arc::new(0.0, 0.0, 10.0, 0.0, 1.0).unwrap().with_decoration(vee(), DecorationNode::End);
    let mut ctx = RecordingContext::new();
    arc.paint(&mut ctx, &XyScales::screen(), &ViewStorage::new()).unwrap();
    assert!(translates(&ctx).is_empty());
    assert_eq!(ctx.commands.last(), Some(&Command::Stroke));
}

// =============================================================
// Sub-renderers
// =============================================================

#[test]
fn view_builds_one_child_per_marker_identity() {
    let shared = vee();
    let view = ShapeView::new(
        Arc::new(0.0, 0.0, 10.0, 0.0, 1.0)
            .unwrap()
            .with_decoration(shared.clone(), DecorationNode::Start)
            .with_decoration(shared, DecorationNode::End)
            .with_decoration(vee(), DecorationNode::Middle),
    );
    assert_eq!(view.children().count(), 2);
}

#[test]
fn update_drops_removed_decorations() {
    let mut view = ShapeView::new(Arc::new(0.0, 0.0, 10.0, 0.0, 1.0).unwrap().with_decoration(vee(), DecorationNode::End));
    assert_eq!(view.children().count(), 1);
    view.update(|arc| arc.decorations.clear());
    assert_eq!(view.children().count(), 0);
}

#[test]
fn update_refreshes_changed_marker() {
    let mut view = ShapeView::new(Arc::new(0.0, 0.0, 10.0, 0.0, 1.0).unwrap().with_decoration(vee(), DecorationNode::End));
    view.update(|arc| arc.decorations[0].marker.size = 20.0);
    let child = view.children().next().unwrap();
    assert_eq!(child.model().size, 20.0);
}
