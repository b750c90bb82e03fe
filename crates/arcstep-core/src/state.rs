#![forbid(unsafe_code)]

//! Per-node animation state machine.
//!
//! A [`NodeState`] is either idle (`direction == 0`) or animating. Starting
//! picks the direction from the last committed scale, so successive cycles
//! alternate between filling (0 → 1) and emptying (1 → 0).
//!
//! # Invariants
//!
//! 1. `direction` is one of `-1.0`, `0.0`, `1.0`.
//! 2. While idle, `scale == previous_scale`.
//! 3. `previous_scale` only ever holds a committed value (0 or 1 after any
//!    number of full cycles from the default state).

use crate::scale::{ARCS, update_value};

/// Result of one [`NodeState::update`] step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UpdateOutcome {
    /// The node was not animating; nothing changed.
    Idle,
    /// The node advanced and is still animating.
    Animating(f32),
    /// The node finished its cycle and committed this scale.
    Completed(f32),
}

impl UpdateOutcome {
    /// The committed scale, if this step completed a cycle.
    #[must_use]
    pub const fn completed(self) -> Option<f32> {
        match self {
            Self::Completed(scale) => Some(scale),
            _ => None,
        }
    }
}

/// Mutable animation state owned by one node.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NodeState {
    scale: f32,
    direction: f32,
    previous_scale: f32,
}

impl NodeState {
    /// Create an idle state with every field at zero.
    pub const fn new() -> Self {
        Self {
            scale: 0.0,
            direction: 0.0,
            previous_scale: 0.0,
        }
    }

    /// Current animated scale.
    #[inline]
    pub const fn scale(&self) -> f32 {
        self.scale
    }

    /// Current direction: `1.0` filling, `-1.0` emptying, `0.0` idle.
    #[inline]
    pub const fn direction(&self) -> f32 {
        self.direction
    }

    /// Scale committed by the last completed cycle.
    #[inline]
    pub const fn previous_scale(&self) -> f32 {
        self.previous_scale
    }

    /// Whether a cycle is in progress.
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.direction != 0.0
    }

    /// Advance the running scale by one tick.
    ///
    /// Once the scale has moved more than one unit away from the committed
    /// value, the cycle snaps to `previous_scale + direction` and the state
    /// returns to idle.
    pub fn update(&mut self) -> UpdateOutcome {
        if !self.is_animating() {
            return UpdateOutcome::Idle;
        }
        self.scale += update_value(self.scale, self.direction, ARCS, ARCS);
        if (self.scale - self.previous_scale).abs() > 1.0 {
            self.scale = self.previous_scale + self.direction;
            self.direction = 0.0;
            self.previous_scale = self.scale;
            return UpdateOutcome::Completed(self.previous_scale);
        }
        UpdateOutcome::Animating(self.scale)
    }

    /// Begin a cycle if idle. Returns `true` when a cycle was started.
    pub fn start_updating(&mut self) -> bool {
        if self.is_animating() {
            return false;
        }
        self.direction = 1.0 - 2.0 * self.previous_scale;
        true
    }
}
