#![forbid(unsafe_code)]

//! Widgets: the half-arc step view and its style configuration.

pub mod step_view;
pub mod style;

pub use step_view::{HalfArcStepView, StepFrame, TickReport};
pub use style::StepStyle;
