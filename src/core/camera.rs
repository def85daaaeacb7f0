use crate::constants::{CAMERA_FOV_DEG, CAMERA_Z, CAMERA_ZFAR, CAMERA_ZNEAR};
use crate::core::mapper::Viewport;
use glam::{Mat4, Vec3};

/// Fixed perspective camera looking at the origin down -Z.
#[derive(Clone, Debug)]
pub struct HeroCamera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for HeroCamera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl HeroCamera {
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, aspect.max(1e-3), self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }

    /// Visible extent of the plane through the target at the given aspect.
    pub fn viewport_at_target(&self, aspect: f32) -> Viewport {
        let distance = (self.eye - self.target).length();
        let height = 2.0 * distance * (self.fovy_radians * 0.5).tan();
        Viewport {
            width: height * aspect.max(1e-3),
            height,
        }
    }
}
