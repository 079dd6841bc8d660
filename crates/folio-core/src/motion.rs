//! Interpolation driver.
//!
//! Owns one `LiveTransform` per item and eases it toward the resolved target
//! once per frame. Items are independent: a step only ever touches the item's
//! own slot, and no step can block.

use crate::constants::{
    AMBIENT_EASE_RATE, BREATH_AMPLITUDE, BREATH_FREQUENCY, CAPTION_EASE_RATE, FOCUS_EASE_RATE,
    OPACITY_DIMMED, OPACITY_EASE_RATE, OPACITY_FULL, PARALLAX_DEPTH_GAIN, PARALLAX_DEPTH_OFFSET,
    REFERENCE_FRAME_SEC,
};
use crate::parallax::ParallaxInput;
use crate::resolver::{Regime, Resolution, Target};
use glam::{Mat4, Quat, Vec3};
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LiveTransform {
    pub position: Vec3,
    pub scale: Vec3,
    pub rotation: Quat,
    pub opacity: f32,
    /// Opacity of the caption overlay under the item.
    pub caption_opacity: f32,
    /// Breathing phase, fixed per item so items never move in lockstep.
    pub phase: f32,
}

impl LiveTransform {
    pub fn at_rest(target: &Target, phase: f32) -> Self {
        Self {
            position: target.position,
            scale: target.scale,
            rotation: Quat::IDENTITY,
            opacity: OPACITY_FULL,
            caption_opacity: 0.0,
            phase,
        }
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }
}

/// Per-frame interpolation factor for a rate expressed per reference frame.
///
/// `dt == REFERENCE_FRAME_SEC` yields exactly `rate`.
#[inline]
pub fn ease_alpha(rate: f32, dt_sec: f32) -> f32 {
    if dt_sec <= 0.0 {
        return 0.0;
    }
    let frames = dt_sec / REFERENCE_FRAME_SEC;
    if frames == 1.0 {
        return rate;
    }
    1.0 - (1.0 - rate).powf(frames)
}

/// One easing step: `current + (target - current) * alpha`.
#[inline]
pub fn approach(current: f32, target: f32, alpha: f32) -> f32 {
    current + (target - current) * alpha
}

/// Depth weighting for parallax: items farther from the camera move less.
#[inline]
pub fn parallax_depth_factor(z: f32) -> f32 {
    ((z + PARALLAX_DEPTH_OFFSET) * PARALLAX_DEPTH_GAIN).max(0.0)
}

/// Ambient offset added to idle targets: breathing plus depth-weighted parallax.
pub fn ambient_offset(target_z: f32, phase: f32, time_sec: f32, parallax: &ParallaxInput) -> Vec3 {
    let breath = (time_sec * BREATH_FREQUENCY + phase).sin() * BREATH_AMPLITUDE;
    let p = parallax.offset() * parallax_depth_factor(target_z);
    Vec3::new(breath + p.x, breath + p.y, 0.0)
}

/// Orientation that turns an item's +Z normal toward the camera eye.
pub fn facing(eye: Vec3, position: Vec3) -> Quat {
    let dir = (eye - position).normalize_or_zero();
    if dir == Vec3::ZERO {
        Quat::IDENTITY
    } else {
        Quat::from_rotation_arc(Vec3::Z, dir)
    }
}

pub struct FrameInput<'a> {
    pub resolution: &'a Resolution,
    pub parallax: ParallaxInput,
    pub camera_eye: Vec3,
    pub time_sec: f32,
    pub dt_sec: f32,
}

#[derive(Clone, Debug, Default)]
pub struct MotionDriver {
    items: Vec<LiveTransform>,
}

impl MotionDriver {
    /// Start every item at rest on its initial target with a random phase.
    pub fn new<R: Rng + ?Sized>(initial: &Resolution, rng: &mut R) -> Self {
        let items = initial
            .targets
            .iter()
            .map(|t| LiveTransform::at_rest(t, rng.gen_range(0.0..std::f32::consts::TAU)))
            .collect();
        Self { items }
    }

    pub fn transforms(&self) -> &[LiveTransform] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&LiveTransform> {
        self.items.get(index)
    }

    pub fn positions(&self) -> Vec<Vec3> {
        self.items.iter().map(|t| t.position).collect()
    }

    pub fn step(&mut self, input: &FrameInput<'_>) {
        let scene_focused = input.resolution.scene_focused;
        let fast = ease_alpha(FOCUS_EASE_RATE, input.dt_sec);
        let slow = ease_alpha(AMBIENT_EASE_RATE, input.dt_sec);
        let fade = ease_alpha(OPACITY_EASE_RATE, input.dt_sec);
        let caption_fade = ease_alpha(CAPTION_EASE_RATE, input.dt_sec);

        for (live, target) in self.items.iter_mut().zip(&input.resolution.targets) {
            let focused = target.regime == Regime::Focused;
            let alpha = if focused { fast } else { slow };

            let mut goal = target.position;
            if !scene_focused {
                goal += ambient_offset(target.position.z, live.phase, input.time_sec, &input.parallax);
            }
            live.position = live.position.lerp(goal, alpha);
            live.scale = live.scale.lerp(target.scale, alpha);

            let rotation_goal = if focused {
                facing(input.camera_eye, live.position)
            } else {
                Quat::IDENTITY
            };
            live.rotation = live.rotation.slerp(rotation_goal, alpha).normalize();

            let opacity_goal = if focused || !scene_focused {
                OPACITY_FULL
            } else {
                OPACITY_DIMMED
            };
            live.opacity = approach(live.opacity, opacity_goal, fade);
            let caption_goal = if focused { 1.0 } else { 0.0 };
            live.caption_opacity = approach(live.caption_opacity, caption_goal, caption_fade);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_frame_reproduces_rate() {
        assert_eq!(ease_alpha(0.1, REFERENCE_FRAME_SEC), 0.1);
        assert_eq!(ease_alpha(0.25, 0.0), 0.0);
        // Two reference frames at once equal two single steps
        let two = ease_alpha(0.1, 2.0 * REFERENCE_FRAME_SEC);
        assert!((two - (1.0 - 0.9 * 0.9)).abs() < 1e-5);
    }

    #[test]
    fn farther_items_parallax_less() {
        assert!(parallax_depth_factor(-4.0) < parallax_depth_factor(4.0));
        assert_eq!(parallax_depth_factor(-20.0), 0.0);
    }

    #[test]
    fn facing_points_normal_at_eye() {
        let eye = Vec3::new(0.0, 0.0, 15.0);
        let q = facing(eye, Vec3::new(3.0, 0.0, 0.0));
        let normal = q * Vec3::Z;
        let expected = (eye - Vec3::new(3.0, 0.0, 0.0)).normalize();
        assert!((normal - expected).length() < 1e-5);
        assert_eq!(facing(eye, eye), Quat::IDENTITY);
    }
}
