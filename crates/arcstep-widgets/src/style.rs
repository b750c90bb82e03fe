#![forbid(unsafe_code)]

//! Visual and timing configuration for [`HalfArcStepView`](crate::HalfArcStepView).

use std::time::Duration;

use arcstep_core::DriverConfig;
use arcstep_render::{Color, Paint, StrokeCap};

/// Default foreground (arc) color.
pub const FORE_COLOR: Color = Color::rgb(0x9C, 0x27, 0xB0);
/// Default background color.
pub const BACK_COLOR: Color = Color::rgb(0xBD, 0xBD, 0xBD);
/// Default divisor of the shorter surface side giving the stroke width.
pub const STROKE_FACTOR: f32 = 90.0;
/// Default divisor of the row gap giving the row half-width.
pub const SIZE_FACTOR: f32 = 2.9;

/// Configuration for the step view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepStyle {
    /// Arc color.
    pub fore: Color,
    /// Background color.
    pub back: Color,
    /// Stroke width is `min(width, height) / stroke_factor`.
    pub stroke_factor: f32,
    /// Row half-width is `row_gap / size_factor`.
    pub size_factor: f32,
    /// Delay between animation ticks.
    pub interval: Duration,
}

impl Default for StepStyle {
    fn default() -> Self {
        Self {
            fore: FORE_COLOR,
            back: BACK_COLOR,
            stroke_factor: STROKE_FACTOR,
            size_factor: SIZE_FACTOR,
            interval: DriverConfig::default().interval,
        }
    }
}

impl StepStyle {
    /// Set the arc color.
    #[must_use]
    pub fn fore(mut self, color: Color) -> Self {
        self.fore = color;
        self
    }

    /// Set the background color.
    #[must_use]
    pub fn back(mut self, color: Color) -> Self {
        self.back = color;
        self
    }

    /// Set the stroke factor. Non-positive values keep the current one.
    #[must_use]
    pub fn stroke_factor(mut self, factor: f32) -> Self {
        if factor > 0.0 {
            self.stroke_factor = factor;
        }
        self
    }

    /// Set the size factor. Non-positive values keep the current one.
    #[must_use]
    pub fn size_factor(mut self, factor: f32) -> Self {
        if factor > 0.0 {
            self.size_factor = factor;
        }
        self
    }

    /// Set the delay between animation ticks.
    #[must_use]
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Driver configuration derived from this style.
    pub fn driver_config(&self) -> DriverConfig {
        DriverConfig::default().interval(self.interval)
    }

    /// Arc paint for a `width × height` surface.
    pub fn paint(&self, width: f32, height: f32) -> Paint {
        Paint::new(self.fore)
            .stroke_width(width.min(height) / self.stroke_factor)
            .cap(StrokeCap::Round)
    }
}
