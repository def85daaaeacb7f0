// Host-side tests for the wheel-driven phase machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod phase {
        include!("../src/core/phase.rs");
    }
}

use crate::core::phase::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const COOLDOWN: f64 = 800.0;

fn phase(i: u8) -> Phase {
    Phase::new(i).unwrap()
}

#[test]
fn phase_new_rejects_out_of_range() {
    assert_eq!(Phase::new(0), Some(Phase::MIN));
    assert_eq!(Phase::new(4), Some(Phase::MAX));
    assert_eq!(Phase::new(5), None);
    assert_eq!(Phase::default(), Phase::MIN);
}

#[test]
fn step_stops_at_bounds() {
    assert_eq!(Phase::MIN.step(ScrollDirection::Backward), None);
    assert_eq!(Phase::MAX.step(ScrollDirection::Forward), None);
    assert_eq!(phase(2).step(ScrollDirection::Still), None);
    assert_eq!(phase(2).step(ScrollDirection::Forward), Some(phase(3)));
    assert_eq!(phase(2).step(ScrollDirection::Backward), Some(phase(1)));
}

#[test]
fn direction_follows_delta_sign() {
    assert_eq!(ScrollDirection::from_delta(120.0), ScrollDirection::Forward);
    assert_eq!(ScrollDirection::from_delta(-3.5), ScrollDirection::Backward);
    assert_eq!(ScrollDirection::from_delta(0.0), ScrollDirection::Still);
    assert_eq!(ScrollDirection::from_delta(f64::NAN), ScrollDirection::Still);
}

#[test]
fn first_transition_needs_no_cooldown() {
    let s = transition(PhaseState::default(), ScrollDirection::Forward, 0.0, COOLDOWN);
    assert_eq!(s.phase, phase(1));
    assert_eq!(s.last_transition_ms, Some(0.0));
}

#[test]
fn transitions_inside_cooldown_are_rejected() {
    let s = transition(PhaseState::default(), ScrollDirection::Forward, 1000.0, COOLDOWN);
    let early = transition(s, ScrollDirection::Forward, 1500.0, COOLDOWN);
    assert_eq!(early, s);
    // the boundary itself is still inside the cooldown
    let edge = transition(s, ScrollDirection::Forward, 1800.0, COOLDOWN);
    assert_eq!(edge, s);
    let late = transition(s, ScrollDirection::Forward, 1800.5, COOLDOWN);
    assert_eq!(late.phase, phase(2));
}

#[test]
fn rejected_event_does_not_restart_cooldown() {
    let mut seq = PhaseSequencer::new(COOLDOWN);
    seq.on_wheel(ScrollDirection::Forward, 0.0, true);
    seq.on_wheel(ScrollDirection::Forward, 700.0, true);
    let out = seq.on_wheel(ScrollDirection::Forward, 801.0, true);
    assert_eq!(out.transition, Some((phase(1), phase(2))));
}

#[test]
fn unpinned_wheel_is_ignored_and_not_consumed() {
    let mut seq = PhaseSequencer::default();
    let out = seq.on_wheel(ScrollDirection::Forward, 0.0, false);
    assert!(!out.consumed);
    assert_eq!(out.transition, None);
    assert_eq!(seq.phase(), Phase::MIN);
}

#[test]
fn pinned_wheel_inside_cooldown_is_still_consumed() {
    let mut seq = PhaseSequencer::new(COOLDOWN);
    let first = seq.on_wheel(ScrollDirection::Forward, 0.0, true);
    assert!(first.consumed);
    assert_eq!(first.transition, Some((phase(0), phase(1))));
    let second = seq.on_wheel(ScrollDirection::Forward, 100.0, true);
    assert!(second.consumed);
    assert_eq!(second.transition, None);
    assert_eq!(seq.phase(), phase(1));
}

#[test]
fn wheel_past_bounds_is_left_to_the_page() {
    let mut seq = PhaseSequencer::new(0.0);
    let up = seq.on_wheel(ScrollDirection::Backward, 0.0, true);
    assert!(!up.consumed);
    for i in 0..4 {
        seq.on_wheel(ScrollDirection::Forward, 10.0 * (i + 1) as f64, true);
    }
    assert_eq!(seq.phase(), Phase::MAX);
    let down = seq.on_wheel(ScrollDirection::Forward, 100.0, true);
    assert!(!down.consumed);
    assert_eq!(seq.phase(), Phase::MAX);
}

#[test]
fn still_wheel_is_not_consumed() {
    let mut seq = PhaseSequencer::default();
    let out = seq.on_wheel(ScrollDirection::Still, 0.0, true);
    assert!(!out.consumed);
}

#[test]
fn random_bursts_stay_in_range_and_respect_cooldown() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut seq = PhaseSequencer::new(COOLDOWN);
    let mut now = 0.0;
    let mut last_accept: Option<f64> = None;
    for _ in 0..5_000 {
        now += rng.gen_range(0.0..300.0);
        let dir = match rng.gen_range(0..3) {
            0 => ScrollDirection::Forward,
            1 => ScrollDirection::Backward,
            _ => ScrollDirection::Still,
        };
        let before = seq.phase();
        let out = seq.on_wheel(dir, now, rng.gen_bool(0.8));
        let after = seq.phase();
        assert!(after <= Phase::MAX);
        assert!((after.index() as i16 - before.index() as i16).abs() <= 1);
        if let Some((from, to)) = out.transition {
            assert_eq!((from, to), (before, after));
            if let Some(prev) = last_accept {
                assert!(now - prev > COOLDOWN);
            }
            last_accept = Some(now);
        }
    }
}

#[test]
fn overlay_copy_per_phase() {
    let copy = |i| phase(i).overlay();
    assert_eq!(copy(0), OverlayCopy::default());
    assert!(copy(1).line_one && !copy(1).line_two && !copy(1).call_to_action);
    assert!(!copy(2).line_one && copy(2).line_two && !copy(2).call_to_action);
    assert!(copy(3).call_to_action && copy(4).call_to_action);
    assert!(!copy(3).line_one && !copy(4).line_two);
}

#[test]
fn only_last_phase_is_released() {
    for i in 0..4 {
        assert!(!phase(i).is_released());
    }
    assert!(Phase::MAX.is_released());
}
