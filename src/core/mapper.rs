use crate::constants::*;
use crate::core::sim::SimState;
use crate::core::smoothing::{ease_in_out_quart, lerp};
use glam::{Vec2, Vec3};

/// World-space extent of the z=0 plane as seen by the hero camera.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn aspect(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubeTransform {
    /// Group translation shared by the cube and its markers.
    pub position: Vec3,
    /// Group Euler angles (XYZ).
    pub rotation: Vec3,
    /// Uniform scale of the cube mesh only.
    pub scale: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerTransform {
    /// Position relative to the group.
    pub position: Vec3,
    /// Signed scale; the sign mirrors the marker into its octant.
    pub scale: Vec3,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShaderUniforms {
    pub time: f32,
    pub pointer: Vec2,
    pub velocity: Vec2,
    pub aspect: f32,
    pub influence: f32,
    pub opacity: f32,
    pub intro: f32,
}

pub const MARKER_COUNT: usize = 8;

/// Everything the renderer needs for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneParams {
    pub cube: CubeTransform,
    pub markers: [MarkerTransform; MARKER_COUNT],
    pub uniforms: ShaderUniforms,
}

/// Octant signs of the eight cube corners.
pub const CORNER_SIGNS: [[f32; 3]; MARKER_COUNT] = [
    [1.0, 1.0, 1.0],
    [1.0, 1.0, -1.0],
    [1.0, -1.0, 1.0],
    [1.0, -1.0, -1.0],
    [-1.0, 1.0, 1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [-1.0, -1.0, -1.0],
];

#[inline]
fn corner(i: usize) -> (Vec3, Vec3) {
    let sign = Vec3::from(CORNER_SIGNS[i]);
    (sign * CORNER_EXTENT, sign)
}

/// Horizontal group offset: center -> left -> right -> center across phases 0..3.
pub fn horizontal_offset(smoothed_phase: f32, viewport_width: f32) -> f32 {
    let side = viewport_width * SIDE_OFFSET_FRACTION;
    let p = smoothed_phase;
    if p < 1.0 {
        lerp(0.0, -side, p.max(0.0))
    } else if p < 2.0 {
        lerp(-side, side, p - 1.0)
    } else {
        lerp(side, 0.0, (p - 2.0).min(1.0))
    }
}

/// Euler target for the group: piecewise in the smoothed phase plus a small
/// tilt toward the pointer.
pub fn rotation_target(smoothed_phase: f32, pointer: Vec2) -> Vec3 {
    let p = smoothed_phase;
    let (pitch, yaw) = if p > 0.0 && p <= 1.0 {
        (REST_PITCH + p * 0.15, REST_YAW + p * 0.5)
    } else if p > 1.0 && p <= 2.0 {
        (0.3 - (p - 1.0) * 0.1, 0.9 + (p - 1.0) * 0.7)
    } else if p > 2.0 {
        (0.2 - (p - 2.0) * 0.1, 1.6 + (p - 2.0))
    } else {
        (REST_PITCH, REST_YAW)
    };
    Vec3::new(
        pitch - pointer.y * POINTER_TILT,
        yaw + pointer.x * POINTER_TILT,
        REST_ROLL,
    )
}

/// Corner marker placement.
///
/// Before the intro starts the markers sit collapsed near the center in the
/// z=0 plane; during assembly they fly out along the eased intro; once
/// assembled they breathe radially, following the spring scale.
///
/// The radial factor (breath times spring) is blended in with the eased intro,
/// so the last assembling frame and the first assembled one coincide.
pub fn marker_transforms(state: &SimState) -> [MarkerTransform; MARKER_COUNT] {
    let eased = ease_in_out_quart(state.intro);
    std::array::from_fn(|i| {
        let (home, sign) = corner(i);
        let collapsed = Vec3::new(home.x * CORNER_COLLAPSED, home.y * CORNER_COLLAPSED, 0.0);
        let breath = 1.0 + (state.time * BREATH_FREQUENCY + i as f32).sin() * BREATH_AMPLITUDE;
        let radial = breath * state.spring.position;
        if state.intro <= 0.0 {
            MarkerTransform {
                position: collapsed,
                scale: Vec3::new(
                    MARKER_COLLAPSED_SCALE,
                    MARKER_COLLAPSED_SCALE,
                    MARKER_COLLAPSED_DEPTH,
                ) * sign,
            }
        } else if !state.assembled {
            MarkerTransform {
                position: collapsed.lerp(home, eased) * lerp(1.0, radial, eased),
                scale: Vec3::splat(lerp(MARKER_COLLAPSED_SCALE, 1.0, eased)) * sign,
            }
        } else {
            MarkerTransform {
                position: home * radial,
                scale: sign,
            }
        }
    })
}

/// Map simulation state to the frame's transforms and uniforms.
pub fn map_scene(state: &SimState, viewport: Viewport) -> SceneParams {
    let x = horizontal_offset(state.phase, viewport.width) + state.pointer.x * POINTER_OFFSET;
    let y = state.pointer.y * POINTER_OFFSET + (state.time * BOB_FREQUENCY).sin() * BOB_AMPLITUDE;
    SceneParams {
        cube: CubeTransform {
            position: Vec3::new(x, y, 0.0),
            rotation: state.rotation,
            scale: state.spring.position,
        },
        markers: marker_transforms(state),
        uniforms: ShaderUniforms {
            time: state.time,
            pointer: state.pointer,
            velocity: state.velocity,
            aspect: viewport.aspect(),
            influence: state.influence,
            opacity: state.intro,
            intro: state.intro,
        },
    }
}
