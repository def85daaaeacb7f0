use crate::constants::*;
use crate::core::mapper::rotation_target;
use crate::core::phase::Phase;
use crate::core::session::IntroMode;
use crate::core::smoothing::{
    approach, approach_vec2, approach_vec3, clamp_frame_dt, ease_in_out_quart,
};
use crate::core::spring::ScaleSpring;
use glam::{Vec2, Vec3};

/// Samples handed to the simulation once per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInput {
    pub phase: Phase,
    /// Real pointer in normalized device coordinates.
    pub pointer: Vec2,
}

/// Everything the hero animates, advanced by [`step`].
#[derive(Clone, Debug, PartialEq)]
pub struct SimState {
    /// Accumulated (clamped) frame time.
    pub time: f32,
    pub intro_timer: f32,
    /// Assembly progress in `[0, 1]`; also the global opacity.
    pub intro: f32,
    pub assembled: bool,
    /// Smoothed phase chasing the discrete one.
    pub phase: f32,
    /// Smoothed pointer chasing the active focus point.
    pub pointer: Vec2,
    /// Active focus point of the previous frame.
    pub prev_focus: Vec2,
    /// Smoothed focus velocity (units per second).
    pub velocity: Vec2,
    pub spring: ScaleSpring,
    /// Smoothed Euler angles (radians, XYZ).
    pub rotation: Vec3,
    /// Reveal radius multiplier.
    pub influence: f32,
}

impl SimState {
    pub fn new(mode: IntroMode) -> Self {
        let base = Self {
            time: 0.0,
            intro_timer: 0.0,
            intro: 0.0,
            assembled: false,
            phase: 0.0,
            pointer: Vec2::ZERO,
            prev_focus: Vec2::ZERO,
            velocity: Vec2::ZERO,
            spring: ScaleSpring::default(),
            rotation: Vec3::ZERO,
            influence: INFLUENCE_BASE,
        };
        match mode {
            IntroMode::Play => base,
            IntroMode::Skip => Self {
                intro_timer: INTRO_DELAY_SEC,
                intro: 1.0,
                assembled: true,
                spring: ScaleSpring::at_rest(1.0),
                rotation: rotation_target(0.0, Vec2::ZERO),
                ..base
            },
        }
    }
}

/// Focus point and reveal-radius target for a phase. The copy phases stage a
/// scripted focus instead of following the real pointer.
pub fn focus_for_phase(phase: Phase, pointer: Vec2) -> (Vec2, f32) {
    match phase.index() {
        1 => (Vec2::from(PHASE_ONE_FOCUS), INFLUENCE_FOCUSED),
        2 => (Vec2::from(PHASE_TWO_FOCUS), INFLUENCE_FOCUSED),
        _ => (pointer, INFLUENCE_BASE),
    }
}

/// Scale the spring chases: the eased intro until assembled, then 1.0, with
/// extra growth once the smoothed phase passes `GROW_PHASE_START`.
pub fn target_scale(intro: f32, assembled: bool, smoothed_phase: f32) -> f32 {
    if smoothed_phase > GROW_PHASE_START {
        let grow = ((smoothed_phase - GROW_PHASE_START) * GROW_PHASE_SPAN_RATE).min(1.0);
        return 1.0 + grow * GROW_AMOUNT;
    }
    if assembled {
        1.0
    } else {
        ease_in_out_quart(intro)
    }
}

/// Advance the simulation by one frame. Pure: the previous state is untouched.
pub fn step(state: &SimState, input: &FrameInput, dt: f32) -> SimState {
    let dt = clamp_frame_dt(dt);
    let mut next = state.clone();

    next.time += dt;
    next.intro_timer += dt;
    if next.intro_timer > INTRO_DELAY_SEC && next.intro < 1.0 {
        next.intro = (next.intro + dt * INTRO_RATE).min(1.0);
    }
    if next.intro >= 1.0 && !next.assembled {
        next.assembled = true;
        log::info!("[hero] assembled");
    }

    next.phase = approach(state.phase, input.phase.as_f32(), PHASE_RATE, dt);

    let (focus, influence_target) = focus_for_phase(input.phase, input.pointer);
    next.pointer = approach_vec2(state.pointer, focus, POINTER_RATE, dt);
    let raw_velocity = (focus - state.prev_focus) / dt;
    next.velocity = approach_vec2(state.velocity, raw_velocity, VELOCITY_RATE, dt);
    next.prev_focus = focus;

    let scale_target = target_scale(next.intro, next.assembled, next.phase);
    next.spring.step(scale_target, dt);

    next.rotation = approach_vec3(
        state.rotation,
        rotation_target(next.phase, next.pointer),
        ROTATION_RATE,
        dt,
    );
    next.influence = approach(state.influence, influence_target, INFLUENCE_RATE, dt);
    next
}
