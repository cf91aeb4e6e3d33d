//! Coordinates and the x/y scale pair every shape is painted through.

#[cfg(test)]
#[path = "coordinates_test.rs"]
mod coordinates_test;

use serde::{Deserialize, Serialize};

use crate::scale::{IdentityScale, Scale};

/// A screen-space point produced by mapping a coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sxy {
    pub sx: f64,
    pub sy: f64,
}

impl Sxy {
    #[must_use]
    pub fn new(sx: f64, sy: f64) -> Self {
        Self { sx, sy }
    }

    /// The unmappable point.
    #[must_use]
    pub fn nan() -> Self {
        Self { sx: f64::NAN, sy: f64::NAN }
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.sx.is_finite() && self.sy.is_finite()
    }
}

/// A position a shape can be anchored at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Coordinate {
    /// A data-space scalar pair.
    Xy { x: f64, y: f64 },
    /// A symbolic node of another renderer (e.g. `"top_left"` of a frame).
    ///
    /// Resolving nodes needs the view tree, which this crate does not own, so
    /// a node is not mappable here.
    Node { target: String, term: String },
}

impl Coordinate {
    #[must_use]
    pub fn xy(x: f64, y: f64) -> Self {
        Self::Xy { x, y }
    }

    /// The overlay placeholder: a scalar pair that maps to NaN.
    #[must_use]
    pub fn unset() -> Self {
        Self::Xy { x: f64::NAN, y: f64::NAN }
    }
}

/// The pair of scales a shape maps its x and y parameters through.
#[derive(Clone, Copy)]
pub struct XyScales<'a> {
    pub x_scale: &'a dyn Scale,
    pub y_scale: &'a dyn Scale,
}

impl<'a> XyScales<'a> {
    #[must_use]
    pub fn new(x_scale: &'a dyn Scale, y_scale: &'a dyn Scale) -> Self {
        Self { x_scale, y_scale }
    }

    /// Identity scales, for shapes whose parameters are already in pixels.
    #[must_use]
    pub fn screen() -> XyScales<'static> {
        XyScales { x_scale: &IdentityScale, y_scale: &IdentityScale }
    }

    /// Map a coordinate to screen space.
    ///
    /// Anything other than a scalar pair comes back as `{NaN, NaN}` so the
    /// caller's finite check skips the paint instead of failing.
    #[must_use]
    pub fn compute_coord(&self, coord: &Coordinate) -> Sxy {
        match coord {
            Coordinate::Xy { x, y } => Sxy::new(self.x_scale.compute(*x), self.y_scale.compute(*y)),
            Coordinate::Node { .. } => Sxy::nan(),
        }
    }
}

/// Owned x/y scales of a plotting frame.
pub struct CoordinateMapping {
    x_scale: Box<dyn Scale>,
    y_scale: Box<dyn Scale>,
}

impl CoordinateMapping {
    #[must_use]
    pub fn new(x_scale: Box<dyn Scale>, y_scale: Box<dyn Scale>) -> Self {
        Self { x_scale, y_scale }
    }

    /// Borrow both scales for painting.
    #[must_use]
    pub fn scales(&self) -> XyScales<'_> {
        XyScales::new(self.x_scale.as_ref(), self.y_scale.as_ref())
    }
}

impl Default for CoordinateMapping {
    fn default() -> Self {
        Self::new(Box::new(IdentityScale), Box::new(IdentityScale))
    }
}
