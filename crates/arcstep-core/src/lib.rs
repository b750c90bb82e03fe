#![forbid(unsafe_code)]

//! Core: scale math, node animation state, step sequencing, and the
//! animation driver for the half-arc step indicator.

pub mod chain;
pub mod driver;
pub mod logging;
pub mod scale;
pub mod sequencer;
pub mod state;

pub use chain::{Node, NodeChain};
pub use driver::{
    AnimationDriver, DriverConfig, ManualPacer, Pacer, PacingError, RunReport, Schedule,
    SleepPacer, WakeablePacer, Waker,
};
pub use scale::{ARCS, NODES};
pub use sequencer::{StepEvent, StepSequencer};
pub use state::{NodeState, UpdateOutcome};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, info, trace, warn};
