//! Geometric and rendering core for interactive 2D plots.
//!
//! This crate turns model-space shape parameters into screen-space drawing
//! commands and drives the interactive angle measurement overlay. It is
//! compiled natively for tests and to WebAssembly for the browser, where the
//! host wires pointer events to [`tools::angle_tool::AngleToolView`] and hands
//! a [`web_sys::CanvasRenderingContext2d`] to the shapes' `paint` methods.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`scale`] | Data-space to screen-space mappings (linear, log, identity) |
//! | [`coordinates`] | Coordinate values and the per-shape x/y scale pair |
//! | [`bbox`] | Axis-aligned screen rectangles (the plotting frame) |
//! | [`anchor`] | Named anchors and padding |
//! | [`math`] | Angle units, direction and polar helpers |
//! | [`context`] | The [`context::Context2d`] drawing trait and its backends |
//! | [`visuals`] | Fill, hatch and line styling applied after path construction |
//! | [`shapes`] | Shape primitives, the [`shapes::ShapeView`] wrapper and distance helpers |
//! | [`tools`] | Gesture events and the angle measurement tool |
//! | [`error`] | Error types |
//! | [`consts`] | Shared numeric constants |

pub mod anchor;
pub mod bbox;
pub mod consts;
pub mod context;
pub mod coordinates;
pub mod error;
pub mod math;
pub mod scale;
pub mod shapes;
pub mod tools;
pub mod visuals;
