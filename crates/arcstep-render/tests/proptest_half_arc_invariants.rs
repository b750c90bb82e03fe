//! Property-based invariant tests for half-arc node drawing.
//!
//! 1. Drawing a node leaves the save stack balanced.
//! 2. Every node draws exactly `ARCS + 1` outlines.
//! 3. Fill heights stay within one radius.
//! 4. Rotations stay within a half turn.
//! 5. Every fill is clipped; no outline is.

use arcstep_core::scale::{ARCS, NODES};
use arcstep_render::half_arc::{NodeLayout, draw_node};
use arcstep_render::{Color, DrawOp, Paint, RecordingSurface};
use proptest::prelude::*;

fn surface_size() -> impl Strategy<Value = (f32, f32)> {
    (50.0f32..2000.0, 50.0f32..2000.0)
}

proptest! {
    #[test]
    fn node_drawing_invariants(
        (w, h) in surface_size(),
        i in 0..NODES,
        scale in -0.2f32..1.2,
    ) {
        let mut surface = RecordingSurface::new(w, h);
        let paint = Paint::new(Color::rgb(0x9C, 0x27, 0xB0));
        draw_node(&mut surface, i, scale, &paint, 2.9);

        prop_assert_eq!(surface.save_depth(), 0);
        prop_assert_eq!(surface.unbalanced_restores(), 0);
        prop_assert_eq!(surface.arcs().count(), ARCS + 1);

        let r = NodeLayout::new(w, h, 2.9).radius();
        for op in surface.ops() {
            match op {
                DrawOp::Rect { rect, clips, .. } => {
                    prop_assert!(rect.height() >= 0.0);
                    prop_assert!(rect.height() <= r * 1.0001);
                    prop_assert_eq!(*clips, 1);
                }
                DrawOp::Arc { transform, clips, .. } => {
                    prop_assert!(transform.rotation_degrees().abs() <= 180.001);
                    prop_assert_eq!(*clips, 0);
                }
                _ => {}
            }
        }
    }
}
