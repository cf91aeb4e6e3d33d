//! Shape primitives and the view wrapper that paints them.
//!
//! Every primitive is a plain model struct implementing [`Shape`]: a pure
//! `geometry` from model + scales, and a `paint` that rebuilds the geometry,
//! bails out silently when any value is non-finite, and otherwise constructs a
//! path and applies its visuals.
//!
//! [`ShapeView`] owns a model together with the views of its sub-renderers
//! (arrowhead decorations), keyed by marker identity, and its visibility.


pub mod annular_wedge;
pub mod annulus;
pub mod arc;
pub mod arrow_head;
pub mod bezier;
pub mod circle;
pub mod label;
pub mod marker;
pub mod rect;
pub mod segment;
pub mod wedge;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::context::Context2d;
use crate::coordinates::XyScales;
use crate::error::ContextError;
use crate::scale::Scale;

use self::arrow_head::{ArrowHead, ArrowHeadView, MarkerId};

/// Child views of a shape, keyed by the identity of the marker they draw.
pub type ViewStorage = HashMap<MarkerId, ArrowHeadView>;

/// A screen-rendered primitive.
pub trait Shape {
    /// Screen-space values derived from the model and scales.
    type Geometry;

    /// Compute screen-space geometry. Pure; never fails.
    fn geometry(&self, scales: &XyScales<'_>) -> Self::Geometry;

    /// Paint onto `ctx`. Draws nothing when the geometry is not finite.
    ///
    /// `views` holds the built views of [`Shape::sub_renderers`].
    ///
    /// # Errors
    ///
    /// Returns `Err` if a backend call fails.
    fn paint(&self, ctx: &mut dyn Context2d, scales: &XyScales<'_>, views: &ViewStorage) -> Result<(), ContextError>;

    /// Markers this shape delegates part of its painting to.
    fn sub_renderers(&self) -> Vec<&ArrowHead> {
        Vec::new()
    }
}

/// Something the renderer can paint each frame.
pub trait Renderable {
    /// Paint if visible.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a backend call fails.
    fn render(&self, ctx: &mut dyn Context2d, scales: &XyScales<'_>) -> Result<(), ContextError>;

    fn is_visible(&self) -> bool;
}

/// A shape model plus the views it owns.
#[derive(Debug, Clone)]
pub struct ShapeView<S: Shape> {
    model: S,
    visible: bool,
    sub_renderers: ViewStorage,
}

impl<S: Shape> ShapeView<S> {
    /// Wrap a model and build views for its sub-renderers.
    #[must_use]
    pub fn new(model: S) -> Self {
        let mut view = Self { model, visible: true, sub_renderers: ViewStorage::new() };
        view.build_sub_renderers();
        view
    }

    #[must_use]
    pub fn model(&self) -> &S {
        &self.model
    }

    /// Mutate the model in place, then resync sub-renderer views.
    pub fn update<F>(&mut self, f: F)
    where
        F: FnOnce(&mut S),
    {
        f(&mut self.model);
        self.build_sub_renderers();
    }

    /// Current screen-space geometry.
    #[must_use]
    pub fn geometry(&self, scales: &XyScales<'_>) -> S::Geometry {
        self.model.geometry(scales)
    }

    /// Views of the sub-renderers, in no particular order.
    pub fn children(&self) -> impl Iterator<Item = &ArrowHeadView> {
        self.sub_renderers.values()
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Create views for new markers, refresh changed ones, drop stale ones.
    fn build_sub_renderers(&mut self) {
        let markers = self.model.sub_renderers();
        for marker in &markers {
            match self.sub_renderers.get_mut(&marker.id) {
                Some(view) if view.model() == *marker => {}
                Some(view) => view.set_model((*marker).clone()),
                None => {
                    self.sub_renderers.insert(marker.id, ArrowHeadView::new((*marker).clone()));
                }
            }
        }
        self.sub_renderers.retain(|id, _| markers.iter().any(|m| m.id == *id));
    }
}

impl<S: Shape> Renderable for ShapeView<S> {
    fn render(&self, ctx: &mut dyn Context2d, scales: &XyScales<'_>) -> Result<(), ContextError> {
        if !self.visible {
            return Ok(());
        }
        self.model.paint(ctx, scales, &self.sub_renderers)
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}

// =============================================================
// Distances
// =============================================================

/// Where a data-space span is anchored when measuring it on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceAnchor {
    /// The span starts at the point: `[pt, pt + span]`.
    #[default]
    Edge,
    /// The span is centered on the point: `[pt - span/2, pt + span/2]`.
    Center,
}

/// Screen length of the data-space `span` at `pt` along `scale`.
///
/// Non-linear scales make the result depend on `anchor`. With `round_up` the
/// result is ceiled so a drawn extent never under-covers its data extent.
#[must_use]
pub fn sdist(scale: &dyn Scale, pt: f64, span: f64, anchor: DistanceAnchor, round_up: bool) -> f64 {
    let distance = match anchor {
        DistanceAnchor::Center => {
            let halfspan = span / 2.0;
            (scale.s_compute(pt + halfspan) - scale.s_compute(pt - halfspan)).abs()
        }
        DistanceAnchor::Edge => (scale.s_compute(pt + span) - scale.s_compute(pt)).abs(),
    };
    if round_up { distance.ceil() } else { distance }
}

/// Which per-axis screen radius a round shape uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RadiusDimension {
    #[default]
    X,
    Y,
    Min,
    Max,
}

impl RadiusDimension {
    /// Pick between the x- and y-derived screen radii.
    #[must_use]
    pub fn resolve(self, srx: f64, sry: f64) -> f64 {
        match self {
            Self::X => srx,
            Self::Y => sry,
            Self::Min => srx.min(sry),
            Self::Max => srx.max(sry),
        }
    }
}

/// Screen radius of a data-space `radius` centered at `(x, y)`.
pub(crate) fn sradius(scales: &XyScales<'_>, x: f64, y: f64, radius: f64, dimension: RadiusDimension) -> f64 {
    let srx = sdist(scales.x_scale, x, radius, DistanceAnchor::Edge, false);
    let sry = sdist(scales.y_scale, y, radius, DistanceAnchor::Edge, false);
    // f64::min/max drop a NaN operand; keep it so the paint is skipped.
    if srx.is_nan() || sry.is_nan() {
        return match dimension {
            RadiusDimension::X => srx,
            RadiusDimension::Y => sry,
            RadiusDimension::Min | RadiusDimension::Max => f64::NAN,
        };
    }
    dimension.resolve(srx, sry)
}

/// Whether every value is finite.
pub(crate) fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}
