//! Shared numeric constants for the plotshapes crate.

// ── Overlay ─────────────────────────────────────────────────────

/// Size of the arrowhead decorating the angle tool's arc, in screen pixels.
pub const OVERLAY_ARROW_SIZE_PX: f64 = 10.0;

/// Size of the start/end point markers of the angle tool, in screen pixels.
pub const OVERLAY_MARKER_SIZE_PX: f64 = 10.0;

/// Padding around the angle tool's text labels, in screen pixels.
pub const OVERLAY_LABEL_PADDING_PX: f64 = 5.0;

/// Horizontal gap between the drag end point and the length label.
pub const LENGTH_LABEL_OFFSET_PX: f64 = 10.0;

// ── Text ────────────────────────────────────────────────────────

/// Default label font size in pixels.
pub const DEFAULT_FONT_SIZE_PX: f64 = 13.0;

/// Line height as a multiple of the font size.
pub const LINE_HEIGHT_FACTOR: f64 = 1.2;

/// Largest decimal precision accepted for measurement labels.
pub const MAX_PRECISION: usize = 20;

// ── Hatching ────────────────────────────────────────────────────

/// Default spacing between hatch lines in pixels.
pub const DEFAULT_HATCH_SCALE_PX: f64 = 12.0;

/// Default hatch line width in pixels.
pub const DEFAULT_HATCH_WEIGHT_PX: f64 = 1.0;
