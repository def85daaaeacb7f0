// Host-side tests for smoothing, the scale spring and the per-frame simulation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod mapper {
        include!("../src/core/mapper.rs");
    }
    pub mod phase {
        include!("../src/core/phase.rs");
    }
    pub mod session {
        include!("../src/core/session.rs");
    }
    pub mod sim {
        include!("../src/core/sim.rs");
    }
    pub mod smoothing {
        include!("../src/core/smoothing.rs");
    }
    pub mod spring {
        include!("../src/core/spring.rs");
    }
}

use crate::constants::*;
use crate::core::phase::Phase;
use crate::core::session::{IntroMode, Session};
use crate::core::sim::*;
use crate::core::smoothing::*;
use crate::core::spring::ScaleSpring;
use glam::Vec2;

const DT: f32 = 1.0 / 60.0;

fn input(phase: u8, pointer: Vec2) -> FrameInput {
    FrameInput {
        phase: Phase::new(phase).unwrap(),
        pointer,
    }
}

fn run(mut state: SimState, inp: FrameInput, frames: usize) -> SimState {
    for _ in 0..frames {
        state = step(&state, &inp, DT);
    }
    state
}

#[test]
fn frame_dt_is_clamped() {
    assert_eq!(clamp_frame_dt(0.0), MIN_FRAME_DT);
    assert_eq!(clamp_frame_dt(-1.0), MIN_FRAME_DT);
    assert_eq!(clamp_frame_dt(5.0), MAX_FRAME_DT);
    assert_eq!(clamp_frame_dt(f32::NAN), MIN_FRAME_DT);
    assert_eq!(clamp_frame_dt(f32::INFINITY), MIN_FRAME_DT);
    assert_eq!(clamp_frame_dt(DT), DT);
}

#[test]
fn approach_never_passes_target() {
    let mut v = 0.0;
    for _ in 0..100 {
        let next = approach(v, 1.0, 50.0, 0.1);
        assert!(next >= v && next <= 1.0);
        v = next;
    }
    assert_eq!(v, 1.0);
}

#[test]
fn easing_endpoints_and_symmetry() {
    assert_eq!(ease_in_out_quart(0.0), 0.0);
    assert_eq!(ease_in_out_quart(1.0), 1.0);
    assert!((ease_in_out_quart(0.5) - 0.5).abs() < 1e-6);
    assert!((ease_in_out_quart(0.25) + ease_in_out_quart(0.75) - 1.0).abs() < 1e-6);
    assert_eq!(ease_in_out_quart(-2.0), 0.0);
    assert_eq!(ease_in_out_quart(3.0), 1.0);
}

#[test]
fn spring_settles_without_visible_overshoot() {
    for dt in [1.0 / 144.0, 1.0 / 60.0, 1.0 / 30.0, MAX_FRAME_DT] {
        let mut s = ScaleSpring::default();
        let mut peak: f32 = 0.0;
        let frames = (6.0 / dt) as usize;
        for _ in 0..frames {
            s.step(1.0, dt);
            peak = peak.max(s.position);
        }
        assert!(peak <= 1.01, "dt={} peak={}", dt, peak);
        assert!((s.position - 1.0).abs() < 1e-3, "dt={} end={}", dt, s.position);
    }
}

#[test]
fn spring_ignores_non_positive_dt() {
    let mut s = ScaleSpring::at_rest(0.5);
    s.step(1.0, 0.0);
    s.step(1.0, -1.0);
    s.step(1.0, f32::NAN);
    assert_eq!(s, ScaleSpring::at_rest(0.5));
}

#[test]
fn session_plays_intro_once() {
    let mut session = Session::new();
    assert!(!session.intro_played());
    assert_eq!(session.claim_intro(), IntroMode::Play);
    assert!(session.intro_played());
    assert_eq!(session.claim_intro(), IntroMode::Skip);
    assert_eq!(session.claim_intro(), IntroMode::Skip);
}

#[test]
fn skipped_intro_starts_assembled() {
    let s = SimState::new(IntroMode::Skip);
    assert_eq!(s.intro, 1.0);
    assert!(s.assembled);
    assert_eq!(s.spring.position, 1.0);
    let next = step(&s, &input(0, Vec2::ZERO), DT);
    assert_eq!(next.intro, 1.0);
    assert!((next.spring.position - 1.0).abs() < 1e-4);
}

#[test]
fn intro_waits_then_rises_monotonically() {
    let mut s = SimState::new(IntroMode::Play);
    let inp = input(0, Vec2::ZERO);
    let mut prev = s.intro;
    let mut t = 0.0;
    for _ in 0..180 {
        s = step(&s, &inp, DT);
        t += DT;
        if t < INTRO_DELAY_SEC - DT {
            assert_eq!(s.intro, 0.0);
        }
        assert!(s.intro >= prev && s.intro <= 1.0);
        prev = s.intro;
    }
    assert_eq!(s.intro, 1.0);
    assert!(s.assembled);
}

#[test]
fn smoothed_phase_converges_without_overshoot() {
    let mut s = SimState::new(IntroMode::Skip);
    let inp = input(3, Vec2::ZERO);
    let mut prev = s.phase;
    for _ in 0..200 {
        s = step(&s, &inp, DT);
        assert!(s.phase >= prev);
        assert!(s.phase <= 3.0);
        prev = s.phase;
    }
    assert!((s.phase - 3.0).abs() < 1e-3);
}

#[test]
fn copy_phases_stage_a_scripted_focus() {
    let pointer = Vec2::new(0.9, -0.7);
    let s = run(SimState::new(IntroMode::Skip), input(1, pointer), 400);
    assert!(s.pointer.distance(Vec2::from(PHASE_ONE_FOCUS)) < 1e-3);
    assert!((s.influence - INFLUENCE_FOCUSED).abs() < 1e-3);

    let s = run(s, input(2, pointer), 400);
    assert!(s.pointer.distance(Vec2::from(PHASE_TWO_FOCUS)) < 1e-3);

    let s = run(s, input(3, pointer), 400);
    assert!(s.pointer.distance(pointer) < 1e-3);
    assert!((s.influence - INFLUENCE_BASE).abs() < 1e-3);
}

#[test]
fn velocity_stays_finite_for_degenerate_frames() {
    let s = SimState::new(IntroMode::Skip);
    let jump = input(0, Vec2::new(1.0, 1.0));
    for dt in [0.0, -0.5, f32::NAN, f32::INFINITY] {
        let next = step(&s, &jump, dt);
        assert!(next.velocity.is_finite(), "dt={}", dt);
        assert!(next.pointer.is_finite());
        assert!(next.time.is_finite());
    }
}

#[test]
fn velocity_decays_once_the_pointer_rests() {
    let s = run(SimState::new(IntroMode::Skip), input(0, Vec2::new(0.5, 0.0)), 2);
    assert!(s.velocity.x > 0.0);
    let s = run(s, input(0, Vec2::new(0.5, 0.0)), 300);
    assert!(s.velocity.length() < 1e-3);
}

#[test]
fn last_phases_grow_the_cube() {
    assert_eq!(target_scale(0.0, false, 0.0), 0.0);
    assert_eq!(target_scale(1.0, true, 2.0), 1.0);
    assert!((target_scale(1.0, true, 4.0) - (1.0 + GROW_AMOUNT)).abs() < 1e-6);

    let s = run(SimState::new(IntroMode::Skip), input(4, Vec2::ZERO), 600);
    assert!((s.spring.position - (1.0 + GROW_AMOUNT)).abs() < 1e-2);
}

#[test]
fn step_leaves_previous_state_untouched() {
    let s = SimState::new(IntroMode::Play);
    let copy = s.clone();
    let _ = step(&s, &input(2, Vec2::new(0.3, 0.3)), DT);
    assert_eq!(s, copy);
}
