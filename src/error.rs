//! Error types for drawing, shape construction, gesture handling and config.
//!
//! Degenerate geometry (a non-finite screen coordinate) is deliberately absent
//! here: shapes skip painting for that frame and return `Ok(())`.

/// A drawing backend call failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("drawing context error: {0}")]
pub struct ContextError(pub String);

/// Invalid parameters passed to a shape constructor.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShapeError {
    /// A length-like parameter (radius, size, width) was negative.
    #[error("{field} must be non-negative, got {value}")]
    Negative { field: &'static str, value: f64 },
}

/// A gesture arrived in a state where it is not allowed.
///
/// These are programmer errors in the event wiring: pan events must arrive as
/// one `pan_start`, any number of `pan`, then one `pan_end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ToolError {
    /// `pan` or `pan_end` was received with no drag in progress.
    #[error("{event} received while no drag is in progress")]
    PanWhileIdle { event: &'static str },
    /// `pan_start` was received while a drag is already in progress.
    #[error("pan_start received while a drag is already in progress")]
    PanStartWhileDragging,
}

/// Tool configuration could not be parsed or failed validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration document is not valid JSON for the tool.
    #[error("failed to parse tool config: {0}")]
    Json(#[from] serde_json::Error),
    /// `precision` exceeds [`crate::consts::MAX_PRECISION`].
    #[error("precision must be at most {max}, got {value}")]
    InvalidPrecision { value: usize, max: usize },
    /// `angle_offset` is NaN or infinite.
    #[error("angle_offset must be finite, got {0}")]
    NonFiniteOffset(f64),
}

/// Reject negative values while letting NaN through.
///
/// NaN is how an unset overlay shape is represented; it is filtered out later
/// by the finite check in `paint`.
pub(crate) fn non_negative(field: &'static str, value: f64) -> Result<f64, ShapeError> {
    if value < 0.0 {
        return Err(ShapeError::Negative { field, value });
    }
    Ok(value)
}
