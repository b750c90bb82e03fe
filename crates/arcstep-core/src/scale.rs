#![forbid(unsafe_code)]

//! Scale math.
//!
//! A node's animation is driven by one running `f32` scale. These helpers
//! split that scale into nested per-arc sub-scales for drawing and compute
//! the per-tick increment for the state machine. Every function is pure.
//!
//! # Splitting
//!
//! [`divide_scale`] maps the global scale onto division `i` of `n`: the
//! division is empty until the scale passes `i / n` and full once it passes
//! `(i + 1) / n`. Applying it twice (first into two halves, then into
//! [`ARCS`] sub-arcs) yields the fill fraction for each drawn half arc.

/// Number of nodes in the step chain.
pub const NODES: usize = 5;

/// Number of arc divisions per node half.
pub const ARCS: usize = 2;

/// Base scale increment per tick.
pub const SC_GAP: f32 = 0.05;

/// Width of one half of a cycle, slightly above 0.5 to absorb overshoot.
pub const SC_DIV: f64 = 0.51;

/// Reciprocal of a division count.
#[inline]
pub fn inverse(n: usize) -> f32 {
    1.0 / n as f32
}

/// Portion of `scale` past the start of division `i` of `n`, floored at zero.
#[inline]
pub fn max_scale(scale: f32, i: usize, n: usize) -> f32 {
    (scale - i as f32 * inverse(n)).max(0.0)
}

/// Fill fraction of division `i` of `n`, in `[0, 1]`.
#[inline]
pub fn divide_scale(scale: f32, i: usize, n: usize) -> f32 {
    inverse(n).min(max_scale(scale, i, n)) * n as f32
}

/// Which half of the cycle `scale` is in: 0 below [`SC_DIV`], 1 up to twice it.
#[inline]
pub fn scale_factor(scale: f32) -> f32 {
    (f64::from(scale) / SC_DIV).floor() as f32
}

/// Linear interpolation from `a` (at `k = 0`) to `b` (at `k = 1`).
#[inline]
pub fn mirror(k: f32, a: f32, b: f32) -> f32 {
    (1.0 - k) * a + b * k
}

/// Increment magnitude for the active cycle half: `1/a` in the first, `1/b` in the second.
#[inline]
pub fn mirror_value(scale: f32, a: usize, b: usize) -> f32 {
    mirror(scale_factor(scale), inverse(a), inverse(b))
}

/// Signed per-tick scale delta.
#[inline]
pub fn update_value(scale: f32, dir: f32, a: usize, b: usize) -> f32 {
    mirror_value(scale, a, b) * dir * SC_GAP
}
