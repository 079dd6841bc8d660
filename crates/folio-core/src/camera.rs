//! Fixed perspective camera and pointer picking against item planes.

use crate::constants::{
    CAMERA_EYE, CAMERA_FOVY_DEG, CAMERA_ZFAR, CAMERA_ZNEAR, DEFAULT_ASPECT, PLANE_HEIGHT,
};
use crate::motion::LiveTransform;
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: CAMERA_EYE,
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 16.0 / 9.0,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl Camera {
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space ray through a point in normalized device coordinates
    /// (x right, y up, both -1..1). Returns `(origin, direction)`.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> (Vec3, Vec3) {
        let inv = self.view_proj().inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let p1 = p_far.truncate() / p_far.w;
        (self.eye, (p1 - self.eye).normalize())
    }
}

/// Unscaled plane size of an item: fixed height, width from aspect ratio.
#[inline]
pub fn plane_size(aspect: Option<f32>) -> Vec2 {
    let aspect = aspect.unwrap_or(DEFAULT_ASPECT);
    Vec2::new(PLANE_HEIGHT * aspect, PLANE_HEIGHT)
}

/// Distance along the ray to an item's rectangle, if hit.
pub fn ray_item(ray_origin: Vec3, ray_dir: Vec3, live: &LiveTransform, size: Vec2) -> Option<f32> {
    let normal = live.rotation * Vec3::Z;
    let denom = normal.dot(ray_dir);
    if denom.abs() < 1e-6 {
        return None;
    }
    let t = normal.dot(live.position - ray_origin) / denom;
    if t < 0.0 {
        return None;
    }
    let hit = ray_origin + ray_dir * t;
    let local = live.rotation.inverse() * (hit - live.position);
    let half = size * 0.5 * live.scale.truncate();
    (local.x.abs() <= half.x && local.y.abs() <= half.y).then_some(t)
}

/// Nearest item under the ray; `sizes[i]` is item `i`'s unscaled plane size.
pub fn pick_item(
    ray_origin: Vec3,
    ray_dir: Vec3,
    items: &[LiveTransform],
    sizes: &[Vec2],
) -> Option<usize> {
    let mut best = None::<(usize, f32)>;
    for (i, (live, size)) in items.iter().zip(sizes).enumerate() {
        if let Some(t) = ray_item(ray_origin, ray_dir, live, *size) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((i, t)),
            }
        }
    }
    best.map(|(i, _)| i)
}
