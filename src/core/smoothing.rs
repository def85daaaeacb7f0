use crate::constants::{MAX_FRAME_DT, MIN_FRAME_DT};
use glam::{Vec2, Vec3};

/// Clamp a raw frame delta into the range the integrators are tuned for.
/// Non-finite deltas collapse to the minimum step.
#[inline]
pub fn clamp_frame_dt(dt: f32) -> f32 {
    if dt.is_finite() {
        dt.clamp(MIN_FRAME_DT, MAX_FRAME_DT)
    } else {
        MIN_FRAME_DT
    }
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

// Blend factor for an exponential approach; never past the target.
#[inline]
fn approach_factor(rate: f32, dt: f32) -> f32 {
    (rate * dt).clamp(0.0, 1.0)
}

/// Move `current` toward `target` by `rate * dt` of the remaining distance.
#[inline]
pub fn approach(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    lerp(current, target, approach_factor(rate, dt))
}

#[inline]
pub fn approach_vec2(current: Vec2, target: Vec2, rate: f32, dt: f32) -> Vec2 {
    current.lerp(target, approach_factor(rate, dt))
}

#[inline]
pub fn approach_vec3(current: Vec3, target: Vec3, rate: f32, dt: f32) -> Vec3 {
    current.lerp(target, approach_factor(rate, dt))
}

pub fn ease_in_out_quart(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        8.0 * t * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(4) / 2.0
    }
}
