#![forbid(unsafe_code)]

//! Render: colors, paints, the drawing [`Surface`](surface::Surface)
//! abstraction, an in-memory recording surface, and half-arc node geometry.

pub mod color;
pub mod geometry;
pub mod half_arc;
pub mod paint;
pub mod recording;
pub mod surface;

pub use color::{Color, ColorParseError};
pub use geometry::{RectF, Transform};
pub use paint::{Paint, PaintStyle, StrokeCap};
pub use recording::{DrawOp, RecordingSurface};
pub use surface::{Surface, SurfaceExt};
