use crate::constants::{MARKER_ARM_LENGTH, MARKER_ARM_THICKNESS, MARKER_TINT};
use glam::{Mat4, Vec3};

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct CubeVertex {
    pub(crate) position: [f32; 3],
    pub(crate) normal: [f32; 3],
    pub(crate) uv: [f32; 2],
    pub(crate) face: f32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct BoxVertex {
    pub(crate) position: [f32; 3],
    pub(crate) normal: [f32; 3],
}

// (outward normal, tangent); bitangent = normal x tangent keeps CCW winding
const FACES: [([f32; 3], [f32; 3]); 6] = [
    ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
    ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
    ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0]),
    ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0]),
    ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0]),
    ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0]),
];

const QUAD: [(f32, f32); 4] = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];

fn for_each_face_corner(half: f32, mut f: impl FnMut(usize, Vec3, Vec3, [f32; 2])) {
    for (face, (n, t)) in FACES.iter().enumerate() {
        let n = Vec3::from(*n);
        let t = Vec3::from(*t);
        let b = n.cross(t);
        for (su, sv) in QUAD {
            let p = (n + t * su + b * sv) * half;
            f(face, p, n, [(su + 1.0) * 0.5, 1.0 - (sv + 1.0) * 0.5]);
        }
    }
}

fn quad_indices() -> Vec<u16> {
    (0..FACES.len() as u16)
        .flat_map(|f| {
            let o = f * 4;
            [o, o + 1, o + 2, o, o + 2, o + 3]
        })
        .collect()
}

/// Axis-aligned cube of edge `size`, four vertices per face so every face
/// carries its own UVs and face index.
pub(crate) fn cube_mesh(size: f32) -> (Vec<CubeVertex>, Vec<u16>) {
    let mut verts = Vec::with_capacity(24);
    for_each_face_corner(size * 0.5, |face, p, n, uv| {
        verts.push(CubeVertex {
            position: p.to_array(),
            normal: n.to_array(),
            uv,
            face: face as f32,
        });
    });
    (verts, quad_indices())
}

/// Unit box centered on the origin, used for marker arms.
pub(crate) fn unit_box_mesh() -> (Vec<BoxVertex>, Vec<u16>) {
    let mut verts = Vec::with_capacity(24);
    for_each_face_corner(0.5, |_, p, n, _| {
        verts.push(BoxVertex {
            position: p.to_array(),
            normal: n.to_array(),
        });
    });
    (verts, quad_indices())
}

pub(crate) const ARMS_PER_MARKER: usize = 4;

/// Local transforms of the four boxes forming one corner chevron: three arms
/// running back along -X, -Y and -Z from the corner, plus the joint.
pub(crate) fn chevron_arms() -> [Mat4; ARMS_PER_MARKER] {
    let len = MARKER_ARM_LENGTH;
    let th = MARKER_ARM_THICKNESS;
    let h = len * 0.5;
    [
        Mat4::from_translation(Vec3::new(-h, 0.0, 0.0)) * Mat4::from_scale(Vec3::new(len, th, th)),
        Mat4::from_translation(Vec3::new(0.0, -h, 0.0)) * Mat4::from_scale(Vec3::new(th, len, th)),
        Mat4::from_translation(Vec3::new(0.0, 0.0, -h)) * Mat4::from_scale(Vec3::new(th, th, len)),
        Mat4::from_scale(Vec3::splat(th)),
    ]
}

/// Marker colour for the premultiplied-alpha pipeline: rgb scaled once by the
/// clamped opacity, which also goes in alpha.
pub(crate) fn marker_tint(opacity: f32) -> [f32; 4] {
    let o = opacity.clamp(0.0, 1.0);
    [MARKER_TINT[0] * o, MARKER_TINT[1] * o, MARKER_TINT[2] * o, o]
}
