#![forbid(unsafe_code)]

//! In-memory [`Surface`] that records every call.
//!
//! Used by tests and the headless harness. Each recorded op carries the
//! transform that was active and how many clips were in effect, so callers
//! can check placement without rasterizing.

use crate::color::Color;
use crate::geometry::{RectF, Transform};
use crate::paint::Paint;
use crate::surface::Surface;

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
///
/// Draw variants carry the transform that was active and the number of
/// arc clips in effect.
pub enum DrawOp {
    /// Whole surface filled with a color.
    Clear(Color),
    /// Arc-shaped clip pushed onto the current layer.
    Clip {
        oval: RectF,
        start_deg: f32,
        sweep_deg: f32,
        transform: Transform,
    },
    /// Filled or stroked rectangle.
    Rect {
        rect: RectF,
        paint: Paint,
        transform: Transform,
        clips: usize,
    },
    /// Arc of the ellipse inscribed in `oval`.
    Arc {
        oval: RectF,
        start_deg: f32,
        sweep_deg: f32,
        use_center: bool,
        paint: Paint,
        transform: Transform,
        clips: usize,
    },
    /// Straight segment.
    Line {
        from: (f32, f32),
        to: (f32, f32),
        paint: Paint,
        transform: Transform,
        clips: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Layer {
    transform: Transform,
    clips: usize,
}

impl Layer {
    const ROOT: Self = Self {
        transform: Transform::IDENTITY,
        clips: 0,
    };
}

/// Surface that records draw calls instead of rasterizing them.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: f32,
    height: f32,
    stack: Vec<Layer>,
    ops: Vec<DrawOp>,
    unbalanced_restores: usize,
}

impl RecordingSurface {
    /// Create an empty surface of the given size.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            stack: vec![Layer::ROOT],
            ops: Vec::new(),
            unbalanced_restores: 0,
        }
    }

    /// Recorded ops in call order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Take the recorded ops, leaving the surface empty and the state stack reset.
    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        self.stack.truncate(1);
        self.stack[0] = Layer::ROOT;
        std::mem::take(&mut self.ops)
    }

    /// Number of `save` calls not yet matched by `restore`.
    pub fn save_depth(&self) -> usize {
        self.stack.len() - 1
    }

    /// `restore` calls that had no matching `save`.
    pub fn unbalanced_restores(&self) -> usize {
        self.unbalanced_restores
    }

    /// Transform currently in effect.
    pub fn transform(&self) -> Transform {
        self.top().transform
    }

    /// Recorded arcs.
    pub fn arcs(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Arc { .. }))
    }

    /// Recorded rectangles.
    pub fn rects(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Rect { .. }))
    }

    fn top(&self) -> Layer {
        self.stack.last().copied().unwrap_or(Layer::ROOT)
    }

    fn top_mut(&mut self) -> &mut Layer {
        if self.stack.is_empty() {
            self.stack.push(Layer::ROOT);
        }
        let last = self.stack.len() - 1;
        &mut self.stack[last]
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn save(&mut self) {
        let top = self.top();
        self.stack.push(top);
    }

    fn restore(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        } else {
            self.unbalanced_restores += 1;
            arcstep_core::warn!("restore without matching save ignored");
        }
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        let layer = self.top_mut();
        layer.transform = layer.transform.translated(dx, dy);
    }

    fn rotate(&mut self, degrees: f32) {
        let layer = self.top_mut();
        layer.transform = layer.transform.rotated(degrees);
    }

    fn clip_arc(&mut self, oval: RectF, start_deg: f32, sweep_deg: f32) {
        let layer = self.top_mut();
        layer.clips += 1;
        let transform = layer.transform;
        self.ops.push(DrawOp::Clip {
            oval,
            start_deg,
            sweep_deg,
            transform,
        });
    }

    fn clear(&mut self, color: Color) {
        self.ops.push(DrawOp::Clear(color));
    }

    fn draw_rect(&mut self, rect: RectF, paint: &Paint) {
        let Layer { transform, clips } = self.top();
        self.ops.push(DrawOp::Rect {
            rect,
            paint: *paint,
            transform,
            clips,
        });
    }

    fn draw_arc(
        &mut self,
        oval: RectF,
        start_deg: f32,
        sweep_deg: f32,
        use_center: bool,
        paint: &Paint,
    ) {
        let Layer { transform, clips } = self.top();
        self.ops.push(DrawOp::Arc {
            oval,
            start_deg,
            sweep_deg,
            use_center,
            paint: *paint,
            transform,
            clips,
        });
    }

    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, paint: &Paint) {
        let Layer { transform, clips } = self.top();
        self.ops.push(DrawOp::Line {
            from: (x0, y0),
            to: (x1, y1),
            paint: *paint,
            transform,
            clips,
        });
    }
}
