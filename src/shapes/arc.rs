//! Open circular arc with optional arrowhead decorations.

#[cfg(test)]
#[path = "arc_test.rs"]
mod arc_test;

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use super::arrow_head::ArrowHead;
use super::{RadiusDimension, Shape, ViewStorage, all_finite, sradius};
use crate::context::Context2d;
use crate::coordinates::XyScales;
use crate::error::{ContextError, ShapeError, non_negative};
use crate::math::{AngleUnits, Direction, compute_angle, to_cartesian};
use crate::visuals::{LineVisual, Visual};

/// Where along the arc a decoration sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecorationNode {
    Start,
    Middle,
    End,
}

/// A marker attached to a node of the arc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decoration {
    pub marker: ArrowHead,
    pub node: DecorationNode,
}

/// A circular arc centered at `(x, y)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub radius_dimension: RadiusDimension,
    pub start_angle: f64,
    pub end_angle: f64,
    pub angle_units: AngleUnits,
    pub direction: Direction,
    pub decorations: Vec<Decoration>,
    pub line: LineVisual,
}

/// Screen-space arc geometry. Angles are in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcGeometry {
    pub sx: f64,
    pub sy: f64,
    pub sradius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub anticlock: bool,
}

impl ArcGeometry {
    #[must_use]
    pub fn is_finite(&self) -> bool {
        all_finite(&[self.sx, self.sy, self.sradius, self.start_angle, self.end_angle])
    }
}

impl Arc {
    /// # Errors
    ///
    /// Returns [`ShapeError::Negative`] for a negative `radius`.
    pub fn new(x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) -> Result<Self, ShapeError> {
        Ok(Self {
            x,
            y,
            radius: non_negative("radius", radius)?,
            radius_dimension: RadiusDimension::default(),
            start_angle,
            end_angle,
            angle_units: AngleUnits::Rad,
            direction: Direction::Anticlock,
            decorations: Vec::new(),
            line: LineVisual::default(),
        })
    }

    #[must_use]
    pub fn with_decoration(mut self, marker: ArrowHead, node: DecorationNode) -> Self {
        self.decorations.push(Decoration { marker, node });
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
    pub fn with_radius_dimension(mut self, radius_dimension: RadiusDimension) -> Self {
        self.radius_dimension = radius_dimension;
        self
    }

    #[must_use]
    pub fn with_line(mut self, line: LineVisual) -> Self {
        self.line = line;
        self
    }
}

impl Shape for Arc {
    type Geometry = ArcGeometry;

    fn geometry(&self, scales: &XyScales<'_>) -> ArcGeometry {
        ArcGeometry {
            sx: scales.x_scale.compute(self.x),
            sy: scales.y_scale.compute(self.y),
            sradius: sradius(scales, self.x, self.y, self.radius, self.radius_dimension),
            start_angle: compute_angle(self.start_angle, self.angle_units, Direction::Anticlock),
            end_angle: compute_angle(self.end_angle, self.angle_units, Direction::Anticlock),
            anticlock: self.direction == Direction::Anticlock,
        }
    }

    fn paint(&self, ctx: &mut dyn Context2d, scales: &XyScales<'_>, views: &ViewStorage) -> Result<(), ContextError> {
        let ArcGeometry { sx, sy, sradius, start_angle, end_angle, anticlock } = self.geometry(scales);
        if !all_finite(&[sx, sy, sradius, start_angle, end_angle]) {
            return Ok(());
        }

        ctx.begin_path();
        ctx.arc(sx, sy, sradius, start_angle, end_angle, anticlock)?;

        if !self.line.apply(ctx)? {
            return Ok(());
        }

        for decoration in &self.decorations {
            let Some(marker_view) = views.get(&decoration.marker.id) else {
                continue;
            };

            let (angle, rotation) = match decoration.node {
                DecorationNode::Start => (start_angle, PI),
                DecorationNode::Middle => ((start_angle + end_angle) / 2.0, PI),
                DecorationNode::End => (end_angle, 0.0),
            };
            // Marker bodies trail the direction of travel; a clockwise sweep
            // travels the other way round.
            let rotation = if anticlock { rotation } else { rotation + PI };

            let (dx, dy) = to_cartesian(sradius, angle);

            ctx.save();
            let painted = place_marker(ctx, sx + dx, sy + dy, angle + rotation)
                .and_then(|()| marker_view.paint(ctx));
            ctx.restore();
            painted?;
        }

        Ok(())
    }

    fn sub_renderers(&self) -> Vec<&ArrowHead> {
        self.decorations.iter().map(|d| &d.marker).collect()
    }
}

fn place_marker(ctx: &mut dyn Context2d, x: f64, y: f64, angle: f64) -> Result<(), ContextError> {
    ctx.translate(x, y)?;
    ctx.rotate(angle)
}
