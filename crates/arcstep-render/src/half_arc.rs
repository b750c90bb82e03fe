#![forbid(unsafe_code)]

//! Half-arc node geometry.
//!
//! Each node is a row of small half discs centered horizontally at the
//! node's row. A node's scale is split twice: first into two halves, then
//! each half into [`ARCS`] sub-arcs. The first half rotates each half disc
//! by up to 180°, the second fills it from the top down.
//!
//! The row visits `ARCS + 1` positions; the last one only ever sees empty
//! sub-scales, so it is drawn as a plain outline.

use arcstep_core::scale::{ARCS, NODES, divide_scale};

use crate::geometry::RectF;
use crate::paint::{Paint, PaintStyle};
use crate::surface::{Surface, SurfaceExt};

/// Sweep of a half arc, in degrees.
const HALF_SWEEP: f32 = 180.0;

/// Row spacing and arc sizing for a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeLayout {
    /// Vertical distance between node rows.
    pub gap: f32,
    /// Half-width of a node row.
    pub size: f32,
    /// Horizontal distance between adjacent half arcs.
    pub x_gap: f32,
    /// Horizontal center of every row.
    pub center_x: f32,
}

impl NodeLayout {
    /// Compute the layout for a `width × height` surface.
    pub fn new(width: f32, height: f32, size_factor: f32) -> Self {
        let gap = height / (NODES + 1) as f32;
        let size = gap / size_factor;
        Self {
            gap,
            size,
            x_gap: size / ARCS as f32,
            center_x: width / 2.0,
        }
    }

    /// Vertical center of node `i`.
    #[inline]
    pub fn row_y(&self, i: usize) -> f32 {
        self.gap * (i + 1) as f32
    }

    /// Horizontal offset of arc `j` from the row center.
    #[inline]
    pub fn arc_x(&self, j: usize) -> f32 {
        -self.size + self.x_gap * j as f32 + self.x_gap / 2.0
    }

    /// Radius of each half arc.
    #[inline]
    pub fn radius(&self) -> f32 {
        self.x_gap / 2.0
    }
}

/// Draw one half arc at horizontal offset `x`.
///
/// `rotation` in `[0, 1]` turns the half disc by up to 180°; `fill` in
/// `[0, 1]` fills it from the flat top edge toward the curve.
pub fn draw_half_arc<S: Surface + ?Sized>(
    surface: &mut S,
    x: f32,
    rotation: f32,
    fill: f32,
    r: f32,
    paint: &Paint,
) {
    let oval = RectF::centered(r);
    let fill_paint = paint.style(PaintStyle::FILL);
    let stroke_paint = paint.style(PaintStyle::STROKE);
    surface.with_translation(x, 0.0, |s| {
        s.with_rotation(HALF_SWEEP * rotation, |s| {
            s.with_clip_arc(oval, HALF_SWEEP, HALF_SWEEP, |s| {
                s.draw_rect(RectF::new(-r, -r, r, -r + r * fill), &fill_paint);
            });
            s.draw_arc(oval, HALF_SWEEP, HALF_SWEEP, false, &stroke_paint);
        });
    });
}

/// Draw node `i` at `scale`.
pub fn draw_node<S: Surface + ?Sized>(
    surface: &mut S,
    i: usize,
    scale: f32,
    paint: &Paint,
    size_factor: f32,
) {
    let layout = NodeLayout::new(surface.width(), surface.height(), size_factor);
    let sc1 = divide_scale(scale, 0, 2);
    let sc2 = divide_scale(scale, 1, 2);
    surface.with_translation(layout.center_x, layout.row_y(i), |s| {
        for j in 0..=ARCS {
            draw_half_arc(
                s,
                layout.arc_x(j),
                divide_scale(sc1, j, ARCS),
                divide_scale(sc2, j, ARCS),
                layout.radius(),
                paint,
            );
        }
    });
}
