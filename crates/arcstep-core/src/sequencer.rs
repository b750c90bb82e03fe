#![forbid(unsafe_code)]

//! Step sequencing across the node chain.
//!
//! The sequencer animates one node at a time. When the current node
//! completes a cycle it moves to the neighbor in the traversal direction.
//! At either end of the chain there is no neighbor to move to, so the
//! direction flips and the same end node stays current for the next cycle.
//!
//! ```
//! use arcstep_core::StepSequencer;
//!
//! let mut seq = StepSequencer::new();
//! assert!(seq.start_updating());
//! let step = loop {
//!     if let Some(step) = seq.update() {
//!         break step;
//!     }
//! };
//! assert_eq!((step.index, step.scale), (0, 1.0));
//! assert_eq!(seq.current_index(), 1);
//! ```

use crate::chain::{ChainIter, Node, NodeChain};

/// A node finished its cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepEvent {
    /// Index of the node that completed.
    pub index: usize,
    /// Scale it committed (0.0 or 1.0).
    pub scale: f32,
}

/// Owns the node chain and tracks which node animates next.
#[derive(Debug, Clone, PartialEq)]
pub struct StepSequencer {
    chain: NodeChain,
    current: usize,
    direction: i32,
}

impl StepSequencer {
    /// Start at the head node, traversing forward.
    pub fn new() -> Self {
        let chain = NodeChain::new();
        let current = chain.head();
        Self {
            chain,
            current,
            direction: 1,
        }
    }

    /// The node currently animating (or next to animate).
    #[inline]
    pub fn current(&self) -> &Node {
        self.chain.node(self.current)
    }

    /// Index of the current node.
    #[inline]
    pub const fn current_index(&self) -> usize {
        self.current
    }

    /// Traversal direction: `1` forward, `-1` backward.
    #[inline]
    pub const fn direction(&self) -> i32 {
        self.direction
    }

    /// The underlying chain.
    #[inline]
    pub const fn chain(&self) -> &NodeChain {
        &self.chain
    }

    /// Nodes in draw order (front to back).
    pub fn nodes(&self) -> ChainIter<'_> {
        self.chain.iter()
    }

    /// Advance the current node by one tick.
    ///
    /// Returns the completion event when the node finished its cycle; the
    /// sequencer has already moved on (or flipped direction) by then.
    pub fn update(&mut self) -> Option<StepEvent> {
        let index = self.current;
        let scale = self.chain.node_mut(index).state.update().completed()?;
        self.advance();
        crate::debug!(
            index,
            scale,
            next = self.current,
            direction = self.direction,
            "step completed"
        );
        Some(StepEvent { index, scale })
    }

    /// Callback form of [`update`](Self::update).
    pub fn update_with(&mut self, on_step: impl FnOnce(usize, f32)) {
        if let Some(step) = self.update() {
            on_step(step.index, step.scale);
        }
    }

    /// Start the current node if it is idle. Returns `true` when it started.
    pub fn start_updating(&mut self) -> bool {
        let started = self.chain.node_mut(self.current).state.start_updating();
        if started {
            crate::debug!(
                index = self.current,
                direction = self.current().state.direction(),
                "step started"
            );
        }
        started
    }

    /// Callback form of [`start_updating`](Self::start_updating).
    pub fn start_updating_with(&mut self, on_start: impl FnOnce()) {
        if self.start_updating() {
            on_start();
        }
    }

    fn advance(&mut self) {
        match self.chain.neighbor(self.current, self.direction) {
            Some(next) => self.current = next,
            None => self.direction *= -1,
        }
    }
}

impl Default for StepSequencer {
    fn default() -> Self {
        Self::new()
    }
}
