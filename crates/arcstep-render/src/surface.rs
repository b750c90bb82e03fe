#![forbid(unsafe_code)]

//! The drawing surface abstraction.
//!
//! Hosts implement [`Surface`] over their own canvas. The primitives follow
//! the usual retained-state canvas model: a stack of saved states, each
//! holding a transform and a clip. [`SurfaceExt`] adds scoped helpers that
//! pair every `save` with its `restore`.

use crate::color::Color;
use crate::geometry::RectF;
use crate::paint::Paint;

/// A 2-D drawing target with save/restore semantics.
pub trait Surface {
    /// Surface width in drawing units.
    fn width(&self) -> f32;

    /// Surface height in drawing units.
    fn height(&self) -> f32;

    /// Push the current transform and clip.
    fn save(&mut self);

    /// Pop to the last saved transform and clip.
    fn restore(&mut self);

    /// Move the origin.
    fn translate(&mut self, dx: f32, dy: f32);

    /// Rotate about the origin by `degrees`.
    fn rotate(&mut self, degrees: f32);

    /// Intersect the clip with the region enclosed by an arc of `oval`
    /// and its chord.
    fn clip_arc(&mut self, oval: RectF, start_deg: f32, sweep_deg: f32);

    /// Fill the whole surface, ignoring transform and clip.
    fn clear(&mut self, color: Color);

    /// Draw a rectangle.
    fn draw_rect(&mut self, rect: RectF, paint: &Paint);

    /// Draw an arc of `oval`. With `use_center` the wedge is closed through
    /// the oval's center.
    fn draw_arc(
        &mut self,
        oval: RectF,
        start_deg: f32,
        sweep_deg: f32,
        use_center: bool,
        paint: &Paint,
    );

    /// Draw a line segment.
    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, paint: &Paint);
}

/// Scoped drawing helpers for any [`Surface`].
pub trait SurfaceExt: Surface {
    /// Run `draw` with the origin moved to `(x, y)`.
    fn with_translation(&mut self, x: f32, y: f32, draw: impl FnOnce(&mut Self)) {
        self.save();
        self.translate(x, y);
        draw(self);
        self.restore();
    }

    /// Run `draw` rotated by `degrees`.
    fn with_rotation(&mut self, degrees: f32, draw: impl FnOnce(&mut Self)) {
        self.save();
        self.rotate(degrees);
        draw(self);
        self.restore();
    }

    /// Run `draw` clipped to an arc region.
    fn with_clip_arc(
        &mut self,
        oval: RectF,
        start_deg: f32,
        sweep_deg: f32,
        draw: impl FnOnce(&mut Self),
    ) {
        self.save();
        self.clip_arc(oval, start_deg, sweep_deg);
        draw(self);
        self.restore();
    }
}

impl<S: Surface + ?Sized> SurfaceExt for S {}
