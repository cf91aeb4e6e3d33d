//! Angle conventions and small polar helpers shared by shapes and tools.
//!
//! Screen space has y pointing down, so a model angle that sweeps
//! anticlockwise on screen is negative once mapped. [`compute_angle`] performs
//! that mapping and [`invert_angle`] undoes it.

#[cfg(test)]
#[path = "math_test.rs"]
mod math_test;

use std::f64::consts::{PI, TAU};

use serde::{Deserialize, Serialize};

/// Units in which model angles are expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnits {
    /// Degrees.
    Deg,
    /// Radians.
    #[default]
    Rad,
    /// Gradians (400 per turn).
    Grad,
    /// Full turns.
    Turn,
}

impl AngleUnits {
    /// Factor converting one unit into radians.
    #[must_use]
    pub fn to_radians_coeff(self) -> f64 {
        match self {
            Self::Deg => PI / 180.0,
            Self::Rad => 1.0,
            Self::Grad => PI / 200.0,
            Self::Turn => TAU,
        }
    }
}

/// Sweep direction of an angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Clockwise.
    #[serde(alias = "clockwise")]
    Clock,
    /// Anticlockwise (the mathematical positive direction).
    #[default]
    Anticlock,
}

impl Direction {
    /// `1.0` for anticlockwise, `-1.0` for clockwise.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Anticlock => 1.0,
            Self::Clock => -1.0,
        }
    }
}

/// Map a model angle to a screen angle in radians.
#[must_use]
pub fn compute_angle(angle: f64, units: AngleUnits, direction: Direction) -> f64 {
    -direction.sign() * angle * units.to_radians_coeff()
}

/// Inverse of [`compute_angle`]: map a screen angle back to model units.
#[must_use]
pub fn invert_angle(angle: f64, units: AngleUnits, direction: Direction) -> f64 {
    -direction.sign() * angle / units.to_radians_coeff()
}

/// Angle of the vector from `start` to `end`, in radians.
#[must_use]
pub fn atan2(start: (f64, f64), end: (f64, f64)) -> f64 {
    (end.1 - start.1).atan2(end.0 - start.0)
}

/// Polar to cartesian, relative to the origin.
#[must_use]
pub fn to_cartesian(radius: f64, angle: f64) -> (f64, f64) {
    (radius * angle.cos(), radius * angle.sin())
}

/// Wrap an angle into `[0, 2π)`.
///
/// Negative zero comes back as positive zero so formatted labels never read
/// `-0`.
#[must_use]
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU) + 0.0;
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Format `value` with `precision` fractional digits, breaking exact decimal
/// ties away from zero (`2.5` -> `"3"`) rather than to even.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn to_fixed(value: f64, precision: usize) -> String {
    // A tie at `precision` digits has at most `precision + 1` fractional bits.
    let dyadic = (0..=precision).fold(value, |acc, _| acc * 2.0).fract() == 0.0;
    let digits = format!("{value:.*}", precision + 1);
    if dyadic && digits.ends_with('5') {
        let quarter_step = (0..precision).fold(0.25, |acc, _| acc / 10.0);
        return format!("{:.*}", precision, value + value.signum() * quarter_step);
    }
    format!("{value:.precision$}")
}
