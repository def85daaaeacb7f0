use crate::constants::{SPRING_DAMPING, SPRING_MAX_SUBSTEP, SPRING_STIFFNESS};

/// Damped spring driving the showcase scale.
///
/// Integrated with semi-implicit Euler; each frame is split into sub-steps of
/// at most `SPRING_MAX_SUBSTEP` so a clamped long frame stays as smooth as a
/// short one. With the default constants the overshoot stays under 1%.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleSpring {
    pub position: f32,
    pub velocity: f32,
    stiffness: f32,
    damping: f32,
}

impl Default for ScaleSpring {
    fn default() -> Self {
        Self::new(SPRING_STIFFNESS, SPRING_DAMPING)
    }
}

impl ScaleSpring {
    pub fn new(stiffness: f32, damping: f32) -> Self {
        Self {
            position: 0.0,
            velocity: 0.0,
            stiffness,
            damping,
        }
    }

    /// Spring already settled at `position`.
    pub fn at_rest(position: f32) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn step(&mut self, target: f32, dt: f32) {
        if dt.is_nan() || dt <= 0.0 {
            return;
        }
        let steps = (dt / SPRING_MAX_SUBSTEP).ceil().max(1.0) as u32;
        let h = dt / steps as f32;
        for _ in 0..steps {
            let force = (target - self.position) * self.stiffness;
            self.velocity += (force - self.velocity * self.damping) * h;
            self.position += self.velocity * h;
        }
    }
}
