#![forbid(unsafe_code)]

//! Headless harness for the half-arc step view.
//!
//! Plays the host role: delivers taps, paces driver ticks on the calling
//! thread, renders every frame into a [`RecordingSurface`], and reports one
//! line per completed step.

pub mod args;

use std::io::{self, Write};

use arcstep_core::SleepPacer;
use arcstep_render::RecordingSurface;
use arcstep_widgets::HalfArcStepView;

pub use args::{Args, ArgsError};

/// Summary of one tap's animation.
#[derive(Debug, Clone, PartialEq)]
pub struct StepRecord {
    /// Tap number, starting at 1.
    pub tap: usize,
    /// Node that completed.
    pub index: usize,
    /// Scale it committed.
    pub scale: f32,
    /// Frames rendered for this step.
    pub frames: usize,
    /// Draw ops recorded for the last frame.
    pub ops: usize,
    /// Pacing delays that were skipped.
    pub pacing_failures: usize,
}

impl StepRecord {
    /// One human-readable line.
    pub fn to_line(&self) -> String {
        format!(
            "tap {:>2}: node {} -> {:.0} ({} frames, {} ops{})",
            self.tap,
            self.index,
            self.scale,
            self.frames,
            self.ops,
            if self.pacing_failures > 0 {
                format!(", {} pacing failures", self.pacing_failures)
            } else {
                String::new()
            }
        )
    }

    /// One JSON object.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "tap": self.tap,
            "index": self.index,
            "scale": self.scale,
            "frames": self.frames,
            "ops": self.ops,
            "pacing_failures": self.pacing_failures,
        })
    }
}

/// Fill bar for every node, e.g. `[#####.....]`, one per line.
pub fn fill_bars(view: &HalfArcStepView, width: usize) -> String {
    view.sequencer()
        .nodes()
        .map(|node| {
            let filled = (node.state.scale().clamp(0.0, 1.0) * width as f32).round() as usize;
            format!(
                "{} [{}{}]",
                node.index(),
                "#".repeat(filled),
                ".".repeat(width - filled)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Run the harness, writing one report line per completed step to `out`.
pub fn run(args: &Args, out: &mut impl Write) -> io::Result<Vec<StepRecord>> {
    let mut view = HalfArcStepView::new(args.style());
    let mut surface = RecordingSurface::new(args.width, args.height);
    let mut pacer = SleepPacer;
    let mut records = Vec::with_capacity(args.taps);

    view.render(&mut surface);
    for tap in 1..=args.taps {
        if !view.handle_tap() {
            tracing::warn!(tap, "tap ignored: node already animating");
            continue;
        }
        surface.take_ops();
        view.render(&mut surface);

        let mut step = None;
        let mut frames = 0;
        let report = view.run_animation(&mut pacer, |frame, tick| {
            surface.take_ops();
            frame.render(&mut surface);
            frames += 1;
            if tick.step.is_some() {
                step = tick.step;
            }
        });

        let Some(step) = step else {
            tracing::warn!(tap, ticks = report.ticks, "animation ended without a step");
            continue;
        };
        let record = StepRecord {
            tap,
            index: step.index,
            scale: step.scale,
            frames,
            ops: surface.ops().len(),
            pacing_failures: report.pacing_failures,
        };
        if args.json {
            writeln!(out, "{}", record.to_json())?;
        } else {
            writeln!(out, "{}", record.to_line())?;
        }
        tracing::info!(tap, index = step.index, scale = step.scale, "step recorded");
        records.push(record);
    }

    if args.bars && !args.json {
        writeln!(out, "{}", fill_bars(&view, 10))?;
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn fast_args(taps: usize) -> Args {
        Args {
            taps,
            interval: Duration::ZERO,
            ..Args::default()
        }
    }

    #[test]
    fn runs_requested_taps() {
        let mut out = Vec::new();
        let records = run(&fast_args(3), &mut out).unwrap();
        let indices: Vec<usize> = records.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert!(records.iter().all(|r| r.scale == 1.0 && r.frames > 1));
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert!(text.starts_with("tap  1: node 0 -> 1"));
    }

    #[test]
    fn json_lines_parse() {
        let mut out = Vec::new();
        let args = Args {
            json: true,
            ..fast_args(1)
        };
        run(&args, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let value: serde_json::Value = serde_json::from_str(text.trim()).unwrap();
        assert_eq!(value["index"], 0);
        assert_eq!(value["tap"], 1);
    }

    #[test]
    fn bars_show_committed_fills() {
        let mut out = Vec::new();
        let args = Args {
            bars: true,
            ..fast_args(2)
        };
        run(&args, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("0 [##########]"));
        assert!(text.contains("1 [##########]"));
        assert!(text.contains("2 [..........]"));
    }
}
