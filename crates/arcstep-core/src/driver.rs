#![forbid(unsafe_code)]

//! Animation driver: a flag-gated, self-pacing tick loop.
//!
//! The driver owns a single `animated` flag. [`AnimationDriver::tick`] runs
//! the caller's tick callback only while the flag is set and reports what
//! the host should schedule next. [`AnimationDriver::run`] is the
//! cooperative loop form: it ticks, pauses for the configured interval via a
//! [`Pacer`], and exits at the first iteration boundary where the flag is
//! clear. Clearing the flag (usually from inside the tick callback, once a
//! step completes) is the only cancellation mechanism.
//!
//! # Failure Modes
//!
//! A pacer may fail to wait (interrupted or poisoned). The delay for that
//! tick is skipped, a warning is logged, and the loop carries on.
//!
//! # Threading
//!
//! Everything here runs on the caller's thread. Pacers only block that
//! thread; [`Waker`] is the one handle meant for other threads, and it can
//! only cut a wait short.

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Default delay between ticks.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(50);

/// Configuration for [`AnimationDriver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverConfig {
    /// Delay between consecutive ticks.
    pub interval: Duration,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
        }
    }
}

impl DriverConfig {
    /// Set the tick interval.
    #[must_use]
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }
}

/// What the host should do after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    /// The driver is stopped; nothing ran.
    Idle,
    /// The tick ran and the driver stopped itself: redraw once, no more ticks.
    Redraw,
    /// Redraw and tick again after the delay.
    Tick(Duration),
}

/// Summary of one [`AnimationDriver::run`] loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Tick callbacks executed.
    pub ticks: usize,
    /// Pauses that failed and were skipped.
    pub pacing_failures: usize,
}

/// Boolean-gated repeating scheduler.
#[derive(Debug, Clone, Default)]
pub struct AnimationDriver {
    animated: bool,
    config: DriverConfig,
}

impl AnimationDriver {
    /// Create a stopped driver.
    pub fn new(config: DriverConfig) -> Self {
        Self {
            animated: false,
            config,
        }
    }

    /// Whether ticks are currently being scheduled.
    #[inline]
    pub const fn is_animated(&self) -> bool {
        self.animated
    }

    /// The tick interval.
    #[inline]
    pub const fn interval(&self) -> Duration {
        self.config.interval
    }

    /// Begin animating. Returns `true` when the host should request a redraw now.
    pub fn start(&mut self) -> bool {
        if self.animated {
            return false;
        }
        self.animated = true;
        crate::trace!("driver started");
        true
    }

    /// Stop animating. Pending ticks become no-ops.
    pub fn stop(&mut self) {
        if self.animated {
            self.animated = false;
            crate::trace!("driver stopped");
        }
    }

    /// Run one tick if animated.
    ///
    /// `on_tick` receives the driver so it can [`stop`](Self::stop) it once
    /// the animation cycle is done.
    pub fn tick(&mut self, on_tick: impl FnOnce(&mut Self)) -> Schedule {
        if !self.animated {
            return Schedule::Idle;
        }
        on_tick(self);
        if self.animated {
            Schedule::Tick(self.config.interval)
        } else {
            Schedule::Redraw
        }
    }

    /// Tick until the callback stops the driver, pausing between ticks.
    pub fn run<P: Pacer + ?Sized>(
        &mut self,
        pacer: &mut P,
        mut on_tick: impl FnMut(&mut Self),
    ) -> RunReport {
        let _span = crate::debug_span!("driver_run").entered();
        let mut report = RunReport::default();
        loop {
            match self.tick(&mut on_tick) {
                Schedule::Idle => break,
                Schedule::Redraw => {
                    report.ticks += 1;
                    break;
                }
                Schedule::Tick(delay) => {
                    report.ticks += 1;
                    if !Self::pace(pacer, delay) {
                        report.pacing_failures += 1;
                    }
                }
            }
        }
        crate::debug!(
            ticks = report.ticks,
            pacing_failures = report.pacing_failures,
            "driver loop finished"
        );
        report
    }

    /// Pause for `delay`, swallowing failures. Returns `false` if the pause failed.
    pub fn pace<P: Pacer + ?Sized>(pacer: &mut P, delay: Duration) -> bool {
        match pacer.pause(delay) {
            Ok(()) => true,
            #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
            Err(err) => {
                crate::warn!(error = %err, ?delay, "pacing delay skipped");
                false
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Pacing
// ---------------------------------------------------------------------------

/// Error from a [`Pacer`] wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacingError {
    /// The wait was cut short.
    Interrupted,
    /// The pacer's lock was poisoned by a panicking thread.
    Poisoned,
}

impl fmt::Display for PacingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PacingError::Interrupted => write!(f, "pacing wait interrupted"),
            PacingError::Poisoned => write!(f, "pacing lock poisoned"),
        }
    }
}

impl std::error::Error for PacingError {}

impl<T> From<PoisonError<T>> for PacingError {
    fn from(_: PoisonError<T>) -> Self {
        PacingError::Poisoned
    }
}

/// Blocks the calling thread between ticks.
pub trait Pacer {
    /// Wait for `delay`.
    fn pause(&mut self, delay: Duration) -> Result<(), PacingError>;
}

/// Pacer backed by [`std::thread::sleep`]. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct SleepPacer;

impl Pacer for SleepPacer {
    fn pause(&mut self, delay: Duration) -> Result<(), PacingError> {
        std::thread::sleep(delay);
        Ok(())
    }
}

type WakeState = Arc<(Mutex<bool>, Condvar)>;

/// Pacer whose waits can be interrupted from another thread.
#[derive(Debug, Clone, Default)]
pub struct WakeablePacer {
    inner: WakeState,
}

impl WakeablePacer {
    /// Create a pacer with no pending wake-up.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle that interrupts the current (or next) wait.
    pub fn waker(&self) -> Waker {
        Waker {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Pacer for WakeablePacer {
    fn pause(&mut self, delay: Duration) -> Result<(), PacingError> {
        let (lock, cvar) = &*self.inner;
        let mut woken = lock.lock()?;
        let start = Instant::now();
        loop {
            if *woken {
                *woken = false;
                return Err(PacingError::Interrupted);
            }
            let elapsed = start.elapsed();
            if elapsed >= delay {
                return Ok(());
            }
            let (guard, _) = cvar.wait_timeout(woken, delay - elapsed)?;
            woken = guard;
        }
    }
}

/// Cross-thread handle for [`WakeablePacer`].
#[derive(Debug, Clone)]
pub struct Waker {
    inner: WakeState,
}

impl Waker {
    /// Interrupt the pacer's current wait, or the next one if it is not waiting.
    pub fn wake(&self) {
        let (lock, cvar) = &*self.inner;
        let mut woken = lock.lock().unwrap_or_else(PoisonError::into_inner);
        *woken = true;
        cvar.notify_all();
    }
}

/// Pacer that never blocks. Records each requested delay and replays queued failures.
#[derive(Debug, Clone, Default)]
pub struct ManualPacer {
    pauses: Vec<Duration>,
    failures: VecDeque<PacingError>,
}

impl ManualPacer {
    /// Create a pacer with no recorded pauses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next un-failed pause return `err`.
    pub fn fail_next(&mut self, err: PacingError) {
        self.failures.push_back(err);
    }

    /// Delays requested so far, in order.
    pub fn pauses(&self) -> &[Duration] {
        &self.pauses
    }
}

impl Pacer for ManualPacer {
    fn pause(&mut self, delay: Duration) -> Result<(), PacingError> {
        self.pauses.push(delay);
        match self.failures.pop_front() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_1: Duration = Duration::from_millis(1);

    #[test]
    fn default_interval_is_fifty_ms() {
        let driver = AnimationDriver::default();
        assert_eq!(driver.interval(), Duration::from_millis(50));
        assert!(!driver.is_animated());
    }

    #[test]
    fn start_requests_redraw_once() {
        let mut driver = AnimationDriver::default();
        assert!(driver.start());
        assert!(!driver.start());
        assert!(driver.is_animated());
        driver.stop();
        assert!(!driver.is_animated());
        assert!(driver.start());
    }

    #[test]
    fn tick_when_stopped_skips_callback() {
        let mut driver = AnimationDriver::default();
        let mut called = false;
        assert_eq!(driver.tick(|_| called = true), Schedule::Idle);
        assert!(!called);
    }

    #[test]
    fn tick_reschedules_while_animated() {
        let mut driver = AnimationDriver::new(DriverConfig::default().interval(MS_1));
        driver.start();
        assert_eq!(driver.tick(|_| {}), Schedule::Tick(MS_1));
        assert_eq!(driver.tick(AnimationDriver::stop), Schedule::Redraw);
        assert_eq!(driver.tick(|_| panic!("stopped driver ticked")), Schedule::Idle);
    }

    #[test]
    fn run_stops_when_callback_stops() {
        let mut driver = AnimationDriver::default();
        let mut pacer = ManualPacer::new();
        driver.start();
        let mut remaining = 5;
        let report = driver.run(&mut pacer, |d| {
            remaining -= 1;
            if remaining == 0 {
                d.stop();
            }
        });
        assert_eq!(report.ticks, 5);
        assert_eq!(report.pacing_failures, 0);
        assert_eq!(pacer.pauses(), &[DEFAULT_INTERVAL; 4]);
        assert!(!driver.is_animated());
    }

    #[test]
    fn run_without_start_does_nothing() {
        let mut driver = AnimationDriver::default();
        let mut pacer = ManualPacer::new();
        let report = driver.run(&mut pacer, |_| panic!("should not tick"));
        assert_eq!(report, RunReport::default());
        assert!(pacer.pauses().is_empty());
    }

    #[test]
    fn run_survives_pacing_failures() {
        let mut driver = AnimationDriver::default();
        let mut pacer = ManualPacer::new();
        pacer.fail_next(PacingError::Interrupted);
        pacer.fail_next(PacingError::Poisoned);
        driver.start();
        let mut count = 0;
        let report = driver.run(&mut pacer, |d| {
            count += 1;
            if count == 4 {
                d.stop();
            }
        });
        assert_eq!(report.ticks, 4);
        assert_eq!(report.pacing_failures, 2);
    }

    #[test]
    fn pace_swallows_failure() {
        let mut pacer = ManualPacer::new();
        pacer.fail_next(PacingError::Poisoned);
        assert!(!AnimationDriver::pace(&mut pacer, MS_1));
        assert!(AnimationDriver::pace(&mut pacer, MS_1));
        assert_eq!(pacer.pauses(), &[MS_1, MS_1]);
    }

    #[test]
    fn wakeable_pacer_times_out_normally() {
        let mut pacer = WakeablePacer::new();
        assert_eq!(pacer.pause(MS_1), Ok(()));
    }

    #[test]
    fn wake_before_pause_interrupts_next_wait() {
        let mut pacer = WakeablePacer::new();
        pacer.waker().wake();
        let start = Instant::now();
        assert_eq!(pacer.pause(Duration::from_secs(5)), Err(PacingError::Interrupted));
        assert!(start.elapsed() < Duration::from_secs(5));
        // The wake-up is consumed.
        assert_eq!(pacer.pause(MS_1), Ok(()));
    }

    #[test]
    fn wake_from_other_thread_interrupts_wait() {
        let mut pacer = WakeablePacer::new();
        let waker = pacer.waker();
        let handle = std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(20));
            waker.wake();
        });
        assert_eq!(pacer.pause(Duration::from_secs(10)), Err(PacingError::Interrupted));
        handle.join().unwrap();
    }

    #[test]
    fn pacing_error_display() {
        assert_eq!(PacingError::Interrupted.to_string(), "pacing wait interrupted");
        assert_eq!(PacingError::Poisoned.to_string(), "pacing lock poisoned");
    }
}
