//! End-to-end tests: sequencer driven by the animation driver.

use arcstep_core::*;

/// Tick the sequencer until a node completes.
fn tick_until_step(seq: &mut StepSequencer) -> StepEvent {
    for _ in 0..200 {
        if let Some(step) = seq.update() {
            return step;
        }
    }
    panic!("no step completed within 200 ticks");
}

#[test]
fn first_two_steps_fill_nodes_zero_and_one() {
    let mut seq = StepSequencer::new();
    assert!(seq.start_updating());

    let step = tick_until_step(&mut seq);
    assert_eq!(step.index, 0);
    assert_eq!(step.scale, 1.0);

    assert!(seq.start_updating());
    let step = tick_until_step(&mut seq);
    assert_eq!(step.index, 1);
    assert_eq!(step.scale, 1.0);
}

#[test]
fn ticking_after_completion_without_tap_is_silent() {
    let mut seq = StepSequencer::new();
    seq.start_updating();
    tick_until_step(&mut seq);
    for _ in 0..100 {
        assert_eq!(seq.update(), None);
    }
    assert_eq!(seq.current_index(), 1);
    assert_eq!(seq.current().state.scale(), 0.0);
}

#[test]
fn driver_stops_itself_on_completion() {
    let mut seq = StepSequencer::new();
    let mut driver = AnimationDriver::default();
    let mut pacer = ManualPacer::new();

    let mut steps = Vec::new();
    for _ in 0..3 {
        if seq.start_updating() {
            assert!(driver.start());
        }
        let report = driver.run(&mut pacer, |d| {
            if let Some(step) = seq.update() {
                steps.push(step);
                d.stop();
            }
        });
        assert!(report.ticks > 1);
        assert!(!driver.is_animated());
    }

    let indices: Vec<usize> = steps.iter().map(|s| s.index).collect();
    assert_eq!(indices, vec![0, 1, 2]);
    assert!(steps.iter().all(|s| s.scale == 1.0));
    assert!(pacer.pauses().iter().all(|d| *d == driver.interval()));
}

#[test]
fn full_round_trip_visits_every_node_twice() {
    let mut seq = StepSequencer::new();
    let mut order = Vec::new();
    for _ in 0..(2 * NODES) {
        assert!(seq.start_updating());
        order.push(tick_until_step(&mut seq));
    }
    let indices: Vec<usize> = order.iter().map(|s| s.index).collect();
    assert_eq!(indices, vec![0, 1, 2, 3, 4, 4, 3, 2, 1, 0]);
    let scales: Vec<f32> = order.iter().map(|s| s.scale).collect();
    assert_eq!(scales, vec![1.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    assert_eq!(seq.current_index(), 0);
    assert_eq!(seq.direction(), 1);
}
