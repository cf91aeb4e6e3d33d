//! Angle and distance measurement by dragging.
//!
//! Pressing inside the plotting frame anchors a measurement. While dragging,
//! the overlay shows:
//!
//! - an arc from the reference leg to the drag direction, arrow at its end
//! - the hypotenuse from the anchor to the pointer
//! - the adjacent (reference) leg, as long as the arc radius
//! - markers at the anchor and at the pointer
//! - the angle, at the arc's bisector
//! - the drag length, just right of the pointer
//!
//! The arc radius is the drag length clamped to the anchor's distance from
//! each frame edge, so the arc never leaves the frame.
//!
//! The overlay shapes are built once and mutated in place on every event.
//! Releasing the pointer freezes the last measurement; the host decides,
//! based on [`AngleTool::persistent`], when to call [`AngleToolView::clear`].

#[cfg(test)]
#[path = "angle_tool_test.rs"]
mod angle_tool_test;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::{Action, PanEvent};
use crate::anchor::{Anchor, Padding};
use crate::bbox::BBox;
use crate::consts::{
    LENGTH_LABEL_OFFSET_PX, MAX_PRECISION, OVERLAY_ARROW_SIZE_PX, OVERLAY_LABEL_PADDING_PX, OVERLAY_MARKER_SIZE_PX,
};
use crate::context::Context2d;
use crate::coordinates::{Coordinate, XyScales};
use crate::error::{ConfigError, ContextError, ShapeError, ToolError};
use crate::math::{AngleUnits, Direction, atan2, invert_angle, normalize_angle, to_cartesian, to_fixed};
use crate::shapes::arc::{Arc, DecorationNode};
use crate::shapes::arrow_head::{ArrowHead, ArrowHeadKind};
use crate::shapes::label::Label;
use crate::shapes::marker::{Marker, MarkerType};
use crate::shapes::segment::Segment;
use crate::shapes::{Renderable, ShapeView};
use crate::visuals::{FillVisual, HatchVisual, LineVisual, Visuals};

// =============================================================
// Configuration
// =============================================================

/// Configuration of the angle measurement tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AngleTool {
    /// Angle of the reference leg, in radians, measured anticlockwise from
    /// the positive x axis.
    pub angle_offset: f64,
    /// Units the angle label is displayed in.
    pub angle_units: AngleUnits,
    /// Which way angles are measured from the reference leg.
    pub direction: Direction,
    /// Decimal places in both labels.
    pub precision: usize,
    /// Whether to show the length label.
    pub distance: bool,
    /// Whether the host should keep the overlay after the drag ends.
    pub persistent: bool,
}

impl Default for AngleTool {
    fn default() -> Self {
        Self {
            angle_offset: 0.0,
            angle_units: AngleUnits::Deg,
            direction: Direction::Anticlock,
            precision: 2,
            distance: true,
            persistent: false,
        }
    }
}

impl AngleTool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed input and the validation
    /// errors of [`AngleTool::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tool: Self = serde_json::from_str(json)?;
        tool.validate()?;
        Ok(tool)
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPrecision`] if `precision` exceeds
    /// [`MAX_PRECISION`] and [`ConfigError::NonFiniteOffset`] if
    /// `angle_offset` is not finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.precision > MAX_PRECISION {
            return Err(ConfigError::InvalidPrecision { value: self.precision, max: MAX_PRECISION });
        }
        if !self.angle_offset.is_finite() {
            return Err(ConfigError::NonFiniteOffset(self.angle_offset));
        }
        Ok(())
    }

    #[must_use]
    pub fn with_angle_offset(mut self, angle_offset: f64) -> Self {
        self.angle_offset = angle_offset;
        self
    }

    #[must_use]
    pub fn with_units(mut self, angle_units: AngleUnits) -> Self {
        self.angle_units = angle_units;
        self
    }

    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    #[must_use]
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    #[must_use]
    pub fn with_distance(mut self, distance: bool) -> Self {
        self.distance = distance;
        self
    }

    #[must_use]
    pub fn with_persistent(mut self, persistent: bool) -> Self {
        self.persistent = persistent;
        self
    }
}

// =============================================================
// Measurement
// =============================================================

/// An in-progress drag: the anchor and the cumulative delta from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    pub sx: f64,
    pub sy: f64,
    pub dx: f64,
    pub dy: f64,
}

impl DragState {
    /// The pointer position `(x1, y1)`.
    #[must_use]
    pub fn end(&self) -> (f64, f64) {
        (self.sx + self.dx, self.sy + self.dy)
    }
}

/// Values derived from a drag. Angles are in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Distance from the anchor to the pointer.
    pub length: f64,
    /// `length` clamped to the anchor's distance from each frame edge.
    pub radius: f64,
    /// Angle from the reference leg to the hypotenuse in the configured
    /// direction, in `[0, 2π)`.
    pub angle: f64,
}

/// Measure a drag inside `frame`.
#[must_use]
pub fn measure(tool: &AngleTool, frame: &BBox, state: &DragState) -> Measurement {
    let (x1, y1) = state.end();
    let length = state.dx.hypot(state.dy);
    let radius = frame.edge_distances(state.sx, state.sy).into_iter().fold(length, f64::min);

    // Screen y points down, so the screen atan2 is the negated plot angle.
    let sign = tool.direction.sign();
    let raw = atan2((state.sx, state.sy), (x1, y1));
    let angle = normalize_angle(-sign * raw - sign * tool.angle_offset);

    Measurement { length, radius, angle }
}

// =============================================================
// View
// =============================================================

/// The angle tool's gesture state and overlay.
#[derive(Debug, Clone)]
pub struct AngleToolView {
    tool: AngleTool,
    frame: BBox,
    state: Option<DragState>,
    measurement: Option<Measurement>,
    arc: ShapeView<Arc>,
    hypotenuse: ShapeView<Segment>,
    adjacent: ShapeView<Segment>,
    start: ShapeView<Marker>,
    end: ShapeView<Marker>,
    angle: ShapeView<Label>,
    length: ShapeView<Label>,
}

fn overlay_marker() -> Result<Marker, ShapeError> {
    let visuals = Visuals::new(FillVisual::new("white"), HatchVisual::none(), LineVisual::default());
    Ok(Marker::new(Coordinate::unset(), MarkerType::Circle, OVERLAY_MARKER_SIZE_PX)?.with_visuals(visuals))
}

fn overlay_label(anchor: Anchor) -> Label {
    Label::new(f64::NAN, f64::NAN, "")
        .with_anchor(anchor)
        .with_padding(Padding::uniform(OVERLAY_LABEL_PADDING_PX))
        .with_background(FillVisual::new("white"), LineVisual::none())
}

impl AngleToolView {
    /// Build the tool view for a plotting frame. The overlay starts unset.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError`] if an overlay shape cannot be constructed.
    pub fn new(tool: AngleTool, frame: BBox) -> Result<Self, ShapeError> {
        let arrow = ArrowHead::new(ArrowHeadKind::Vee, OVERLAY_ARROW_SIZE_PX)?;
        let arc = Arc::new(f64::NAN, f64::NAN, f64::NAN, f64::NAN, f64::NAN)?.with_decoration(arrow, DecorationNode::End);

        let mut view = Self {
            tool,
            frame,
            state: None,
            measurement: None,
            arc: ShapeView::new(arc),
            hypotenuse: ShapeView::new(Segment::unset()),
            adjacent: ShapeView::new(Segment::unset()),
            start: ShapeView::new(overlay_marker()?),
            end: ShapeView::new(overlay_marker()?),
            angle: ShapeView::new(overlay_label(Anchor::Center)),
            length: ShapeView::new(overlay_label(Anchor::CenterLeft)),
        };
        view.set_visible(true);
        Ok(view)
    }

    #[must_use]
    pub fn tool(&self) -> &AngleTool {
        &self.tool
    }

    /// Whether the host should keep the overlay after a drag ends.
    #[must_use]
    pub fn persistent(&self) -> bool {
        self.tool.persistent
    }

    /// The drag in progress, if any.
    #[must_use]
    pub fn state(&self) -> Option<DragState> {
        self.state
    }

    /// The most recent measurement, kept after the drag ends until cleared.
    #[must_use]
    pub fn measurement(&self) -> Option<Measurement> {
        self.measurement
    }

    #[must_use]
    pub fn frame(&self) -> BBox {
        self.frame
    }

    /// Replace the frame, e.g. after a resize. Takes effect on the next event.
    pub fn set_frame(&mut self, frame: BBox) {
        self.frame = frame;
    }

    // --- Gestures ---

    /// Begin a measurement at the event position.
    ///
    /// A press outside the frame is ignored and returns [`Action::None`].
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::PanStartWhileDragging`] if a drag is already in
    /// progress.
    pub fn pan_start(&mut self, ev: &PanEvent) -> Result<Action, ToolError> {
        if self.state.is_some() {
            let err = ToolError::PanStartWhileDragging;
            warn!(error = %err, sx = ev.sx, sy = ev.sy, "angle tool invariant violated");
            return Err(err);
        }
        if !self.frame.contains(ev.sx, ev.sy) {
            debug!(sx = ev.sx, sy = ev.sy, "angle measurement ignored outside frame");
            return Ok(Action::None);
        }

        let state = DragState { sx: ev.sx, sy: ev.sy, dx: 0.0, dy: 0.0 };
        self.state = Some(state);
        debug!(sx = ev.sx, sy = ev.sy, "angle measurement started");

        self.set_visible(true);
        self.update_geometry(state);
        Ok(Action::RenderNeeded)
    }

    /// Move the pointer to `anchor + (ev.dx, ev.dy)`.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::PanWhileIdle`] if no drag is in progress.
    pub fn pan(&mut self, ev: &PanEvent) -> Result<Action, ToolError> {
        let Some(DragState { sx, sy, .. }) = self.state else {
            return Err(idle("pan"));
        };
        let state = DragState { sx, sy, dx: ev.dx, dy: ev.dy };
        self.state = Some(state);
        self.update_geometry(state);
        Ok(Action::RenderNeeded)
    }

    /// Finish the drag. The overlay keeps its last pose.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::PanWhileIdle`] if no drag is in progress.
    pub fn pan_end(&mut self, _ev: &PanEvent) -> Result<Action, ToolError> {
        let Some(state) = self.state.take() else {
            return Err(idle("pan_end"));
        };
        debug!(sx = state.sx, sy = state.sy, dx = state.dx, dy = state.dy, "angle measurement finished");
        Ok(Action::None)
    }

    // --- Overlay ---

    /// Overlay shapes in paint order.
    #[must_use]
    pub fn overlays(&self) -> Vec<&dyn Renderable> {
        vec![&self.arc, &self.hypotenuse, &self.adjacent, &self.start, &self.end, &self.angle, &self.length]
    }

    /// Paint every visible overlay shape. Overlay coordinates are in pixels.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a backend call fails.
    pub fn render(&self, ctx: &mut dyn Context2d) -> Result<(), ContextError> {
        let scales = XyScales::screen();
        for overlay in self.overlays() {
            overlay.render(ctx, &scales)?;
        }
        Ok(())
    }

    /// Show or hide the whole overlay. The length label stays hidden when
    /// the tool does not measure distance.
    pub fn set_visible(&mut self, visible: bool) {
        self.arc.set_visible(visible);
        self.hypotenuse.set_visible(visible);
        self.adjacent.set_visible(visible);
        self.start.set_visible(visible);
        self.end.set_visible(visible);
        self.angle.set_visible(visible);
        self.length.set_visible(visible && self.tool.distance);
    }

    /// Reset the overlay to its unset pose and hide it.
    ///
    /// Does not touch an in-progress drag; the next `pan` redraws.
    pub fn clear(&mut self) {
        self.measurement = None;
        self.arc.update(|arc| {
            arc.x = f64::NAN;
            arc.y = f64::NAN;
            arc.radius = f64::NAN;
            arc.start_angle = f64::NAN;
            arc.end_angle = f64::NAN;
        });
        self.hypotenuse.update(|s| *s = Segment { line: s.line.clone(), ..Segment::unset() });
        self.adjacent.update(|s| *s = Segment { line: s.line.clone(), ..Segment::unset() });
        self.start.update(|m| m.at = Coordinate::unset());
        self.end.update(|m| m.at = Coordinate::unset());
        for label in [&mut self.angle, &mut self.length] {
            label.update(|l| {
                l.x = f64::NAN;
                l.y = f64::NAN;
                l.text.clear();
            });
        }
        self.set_visible(false);
    }

    #[must_use]
    pub fn arc(&self) -> &ShapeView<Arc> {
        &self.arc
    }

    #[must_use]
    pub fn hypotenuse(&self) -> &ShapeView<Segment> {
        &self.hypotenuse
    }

    #[must_use]
    pub fn adjacent(&self) -> &ShapeView<Segment> {
        &self.adjacent
    }

    #[must_use]
    pub fn start_marker(&self) -> &ShapeView<Marker> {
        &self.start
    }

    #[must_use]
    pub fn end_marker(&self) -> &ShapeView<Marker> {
        &self.end
    }

    #[must_use]
    pub fn angle_label(&self) -> &ShapeView<Label> {
        &self.angle
    }

    #[must_use]
    pub fn length_label(&self) -> &ShapeView<Label> {
        &self.length
    }

    /// Recompute every overlay shape from `state`.
    fn update_geometry(&mut self, state: DragState) {
        let m = measure(&self.tool, &self.frame, &state);
        trace!(
            sx = state.sx,
            sy = state.sy,
            dx = state.dx,
            dy = state.dy,
            radius = m.radius,
            angle = m.angle,
            "angle overlay update"
        );
        self.measurement = Some(m);

        let DragState { sx: x0, sy: y0, .. } = state;
        let (x1, y1) = state.end();
        let AngleTool { angle_offset, angle_units, direction, precision, .. } = self.tool;

        // Plot-space (anticlockwise) angles of the reference leg, the arc's
        // far end and its bisector.
        let sign = direction.sign();
        let reference = angle_offset;
        let sweep_end = angle_offset + sign * m.angle;
        let bisector = angle_offset + sign * m.angle / 2.0;

        self.arc.update(|arc| {
            arc.x = x0;
            arc.y = y0;
            arc.radius = m.radius;
            arc.start_angle = reference;
            arc.end_angle = sweep_end;
            arc.direction = direction;
        });

        self.start.update(|marker| marker.at = Coordinate::xy(x0, y0));
        self.end.update(|marker| marker.at = Coordinate::xy(x1, y1));

        self.hypotenuse.update(|segment| {
            segment.x0 = x0;
            segment.y0 = y0;
            segment.x1 = x1;
            segment.y1 = y1;
        });

        let (rx, ry) = to_cartesian(m.radius, -reference);
        self.adjacent.update(|segment| {
            segment.x0 = x0;
            segment.y0 = y0;
            segment.x1 = x0 + rx;
            segment.y1 = y0 + ry;
        });

        let (ax, ay) = to_cartesian(m.radius, -bisector);
        let shown = invert_angle(-m.angle, angle_units, Direction::Anticlock);
        self.angle.update(|label| {
            label.x = x0 + ax;
            label.y = y0 + ay;
            label.text = format!("{}\u{b0}", to_fixed(shown, precision));
        });

        self.length.update(|label| {
            label.x = x1 + LENGTH_LABEL_OFFSET_PX;
            label.y = y1;
            label.text = to_fixed(m.length, precision);
        });
    }
}

fn idle(event: &'static str) -> ToolError {
    let err = ToolError::PanWhileIdle { event };
    warn!(error = %err, "angle tool invariant violated");
    err
}
