//! Arrowheads drawn as decorations of other shapes.
//!
//! An arrowhead has no position of its own. Its owner translates and rotates
//! the context so the tip sits at the origin with the body along +y, then
//! calls [`ArrowHeadView::paint`].

#[cfg(test)]
#[path = "arrow_head_test.rs"]
mod arrow_head_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::context::Context2d;
use crate::error::{ContextError, ShapeError, non_negative};
use crate::visuals::{FillVisual, HatchVisual, LineVisual, Visual, Visuals};

/// Identity of a marker, shared by every clone of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkerId(pub Uuid);

impl MarkerId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MarkerId {
    fn default() -> Self {
        Self::new()
    }
}

/// Arrowhead outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowHeadKind {
    /// Two open strokes.
    Open,
    /// Closed triangle.
    Normal,
    /// Closed triangle with a notch at the back.
    Vee,
    /// A bar across the tip.
    Tee,
}

/// An arrowhead marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrowHead {
    pub id: MarkerId,
    pub kind: ArrowHeadKind,
    /// Length and width of the head in screen pixels.
    pub size: f64,
    pub visuals: Visuals,
}

impl ArrowHead {
    /// # Errors
    ///
    /// Returns [`ShapeError::Negative`] for a negative `size`.
    pub fn new(kind: ArrowHeadKind, size: f64) -> Result<Self, ShapeError> {
        let fill = match kind {
            ArrowHeadKind::Normal | ArrowHeadKind::Vee => FillVisual::new("black"),
            ArrowHeadKind::Open | ArrowHeadKind::Tee => FillVisual::none(),
        };
        Ok(Self {
            id: MarkerId::new(),
            kind,
            size: non_negative("size", size)?,
            visuals: Visuals::new(fill, HatchVisual::none(), LineVisual::default()),
        })
    }

    #[must_use]
    pub fn with_visuals(mut self, visuals: Visuals) -> Self {
        self.visuals = visuals;
        self
    }
}

/// The view that paints one [`ArrowHead`].
#[derive(Debug, Clone)]
pub struct ArrowHeadView {
    model: ArrowHead,
}

impl ArrowHeadView {
    #[must_use]
    pub fn new(model: ArrowHead) -> Self {
        Self { model }
    }

    #[must_use]
    pub fn model(&self) -> &ArrowHead {
        &self.model
    }

    pub(crate) fn set_model(&mut self, model: ArrowHead) {
        self.model = model;
    }

    /// Paint at the origin of the current transform.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a backend call fails.
    pub fn paint(&self, ctx: &mut dyn Context2d) -> Result<(), ContextError> {
        let s = self.model.size;
        if !s.is_finite() {
            return Ok(());
        }
        let visuals = &self.model.visuals;

        ctx.begin_path();
        match self.model.kind {
            ArrowHeadKind::Open => {
                ctx.move_to(0.5 * s, s);
                ctx.line_to(0.0, 0.0);
                ctx.line_to(-0.5 * s, s);
                visuals.line.apply(ctx)?;
            }
            ArrowHeadKind::Normal => {
                ctx.move_to(0.5 * s, s);
                ctx.line_to(0.0, 0.0);
                ctx.line_to(-0.5 * s, s);
                ctx.close_path();
                visuals.apply(ctx)?;
            }
            ArrowHeadKind::Vee => {
                ctx.move_to(0.5 * s, s);
                ctx.line_to(0.0, 0.0);
                ctx.line_to(-0.5 * s, s);
                ctx.line_to(0.0, 0.5 * s);
                ctx.close_path();
                visuals.apply(ctx)?;
            }
            ArrowHeadKind::Tee => {
                ctx.move_to(0.5 * s, 0.0);
                ctx.line_to(-0.5 * s, 0.0);
                visuals.line.apply(ctx)?;
            }
        }
        Ok(())
    }
}
