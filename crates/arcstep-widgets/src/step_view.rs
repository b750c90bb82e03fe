#![forbid(unsafe_code)]

//! Half-arc step view.
//!
//! The host-facing unit: [`render`](HalfArcStepView::render) draws every
//! node, [`handle_tap`](HalfArcStepView::handle_tap) starts the current
//! node, and [`on_tick`](HalfArcStepView::on_tick) advances the animation
//! by one driver tick.
//!
//! # Host loop
//!
//! ```
//! use arcstep_core::Schedule;
//! use arcstep_render::RecordingSurface;
//! use arcstep_widgets::{HalfArcStepView, StepStyle};
//!
//! let mut view = HalfArcStepView::new(StepStyle::default());
//! let mut surface = RecordingSurface::new(480.0, 800.0);
//!
//! if view.handle_tap() {
//!     view.render(&mut surface);
//! }
//! loop {
//!     let tick = view.on_tick();
//!     if tick.schedule == Schedule::Idle {
//!         break;
//!     }
//!     view.render(&mut surface);
//!     // A real host waits for `Schedule::Tick(delay)` before ticking again.
//! }
//! assert_eq!(view.sequencer().current_index(), 1);
//! ```

use arcstep_core::{AnimationDriver, Pacer, RunReport, Schedule, StepEvent, StepSequencer};
use arcstep_render::Surface;
use arcstep_render::half_arc::draw_node;

use crate::style::StepStyle;

/// Outcome of one [`HalfArcStepView::on_tick`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    /// The step that completed on this tick, if any.
    pub step: Option<StepEvent>,
    /// What the host should schedule next.
    pub schedule: Schedule,
}

/// A vertical stack of half-arc nodes that fill one after another on tap.
#[derive(Debug, Clone)]
pub struct HalfArcStepView {
    sequencer: StepSequencer,
    driver: AnimationDriver,
    style: StepStyle,
}

impl Default for HalfArcStepView {
    fn default() -> Self {
        Self::new(StepStyle::default())
    }
}

impl HalfArcStepView {
    /// Create a view with every node empty and the driver stopped.
    pub fn new(style: StepStyle) -> Self {
        Self {
            sequencer: StepSequencer::new(),
            driver: AnimationDriver::new(style.driver_config()),
            style,
        }
    }

    /// Visual and timing configuration.
    pub fn style(&self) -> &StepStyle {
        &self.style
    }

    /// Step state: current node, direction, and every node's scale.
    pub fn sequencer(&self) -> &StepSequencer {
        &self.sequencer
    }

    /// Whether the driver is currently ticking.
    pub fn is_animating(&self) -> bool {
        self.driver.is_animated()
    }

    /// Draw the background and every node, front to back.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        self.frame().render(surface);
    }

    /// Borrowed snapshot of everything [`render`](Self::render) reads.
    pub fn frame(&self) -> StepFrame<'_> {
        StepFrame {
            sequencer: &self.sequencer,
            style: &self.style,
        }
    }

    /// Start the current node if idle. Returns `true` when the host should
    /// request a redraw.
    pub fn handle_tap(&mut self) -> bool {
        if !self.sequencer.start_updating() {
            return false;
        }
        self.driver.start()
    }

    /// Advance the animation by one tick. The driver stops itself as soon
    /// as a step completes.
    pub fn on_tick(&mut self) -> TickReport {
        let sequencer = &mut self.sequencer;
        let mut step = None;
        let schedule = self.driver.tick(|driver| {
            step = sequencer.update();
            if step.is_some() {
                driver.stop();
            }
        });
        TickReport { step, schedule }
    }

    /// Tick until the current step completes, pausing between ticks.
    ///
    /// The loop is [`AnimationDriver::run`]. `on_frame` runs after every tick
    /// with a [`StepFrame`] of the new state; hosts redraw there. Pacing
    /// failures skip that delay and are counted in the report.
    pub fn run_animation<P: Pacer + ?Sized>(
        &mut self,
        pacer: &mut P,
        mut on_frame: impl FnMut(&StepFrame<'_>, &TickReport),
    ) -> RunReport {
        let Self {
            sequencer,
            driver,
            style,
        } = self;
        driver.run(pacer, |driver| {
            let step = sequencer.update();
            if step.is_some() {
                driver.stop();
            }
            let schedule = if driver.is_animated() {
                Schedule::Tick(driver.interval())
            } else {
                Schedule::Redraw
            };
            let frame = StepFrame {
                sequencer: &*sequencer,
                style: &*style,
            };
            on_frame(&frame, &TickReport { step, schedule });
        })
    }
}

/// Read-only view of the step state handed to frame callbacks.
#[derive(Debug, Clone, Copy)]
pub struct StepFrame<'a> {
    sequencer: &'a StepSequencer,
    style: &'a StepStyle,
}

impl<'a> StepFrame<'a> {
    /// Sequencer state for this frame.
    pub fn sequencer(&self) -> &'a StepSequencer {
        self.sequencer
    }

    /// Style used to draw this frame.
    pub fn style(&self) -> &'a StepStyle {
        self.style
    }

    /// Draw the background and every node, front to back.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        let (w, h) = (surface.width(), surface.height());

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "HalfArcStepView",
            w,
            h,
            current = self.sequencer.current_index()
        )
        .entered();

        surface.clear(self.style.back);
        let paint = self.style.paint(w, h);
        for node in self.sequencer.nodes() {
            draw_node(
                surface,
                node.index(),
                node.state.scale(),
                &paint,
                self.style.size_factor,
            );
        }
    }
}
