//! Target resolution: where every item should be, given the focus state.
//!
//! Resolution is a pure function of its inputs apart from the peer radius
//! jitter, which is drawn from the caller's random source. A fresh target set
//! is returned on every call and nothing is mutated.

use crate::constants::{
    FOCUS_FALLBACK_SCALE, PEER_ARC_DEPTH, PEER_ARC_HEIGHT_DIVISOR, PEER_ARC_SPAN, PEER_JITTER,
    PLANE_HEIGHT,
};
use crate::viewport::{Viewport, ViewportProfile};
use glam::Vec3;
use rand::Rng;

/// Which arrangement an item's target belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Regime {
    /// The single enlarged, camera-facing item.
    Focused,
    /// A non-focused item while another one is focused.
    Peer,
    /// Nothing is focused; the item rests on its scatter point.
    Idle,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Target {
    pub position: Vec3,
    pub scale: Vec3,
    pub regime: Regime,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Resolution {
    pub targets: Vec<Target>,
    pub scene_focused: bool,
}

impl Resolution {
    pub fn focused_count(&self) -> usize {
        self.targets
            .iter()
            .filter(|t| t.regime == Regime::Focused)
            .count()
    }
}

pub struct ResolveInput<'a> {
    pub focused: Option<usize>,
    pub layout: &'a [Vec3],
    pub viewport: Viewport,
    /// Aspect ratio of the focused item, if known.
    pub focused_aspect: Option<f32>,
    pub camera_eye: Vec3,
}

impl ResolveInput<'_> {
    fn profile(&self) -> &'static ViewportProfile {
        self.viewport.profile()
    }
}

/// Uniform scale that makes an item fill `profile.focus_fill` of the visible
/// frame at `depth` units in front of the camera.
pub fn focus_scale(viewport: &Viewport, item_aspect: Option<f32>, depth: f32) -> f32 {
    let Some(aspect) = item_aspect.filter(|a| a.is_finite() && *a > 0.0) else {
        return FOCUS_FALLBACK_SCALE;
    };
    if depth <= 0.0 || viewport.aspect <= 0.0 {
        return FOCUS_FALLBACK_SCALE;
    }
    let fill = viewport.profile().focus_fill;
    let visible_h = 2.0 * (viewport.fovy_radians * 0.5).tan() * depth;
    let visible_w = visible_h * viewport.aspect;
    let scale = if aspect > viewport.aspect {
        // Relatively wider than the frame: width is the constraint
        fill * visible_w / (PLANE_HEIGHT * aspect)
    } else {
        fill * visible_h / PLANE_HEIGHT
    };
    if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        FOCUS_FALLBACK_SCALE
    }
}

/// Angle of the `k`-th of `m` peers along the shallow arc.
#[inline]
pub fn peer_angle(k: usize, m: usize) -> f32 {
    if m <= 1 {
        return 0.0;
    }
    (k as f32 / (m - 1) as f32 - 0.5) * PEER_ARC_SPAN
}

/// Peer position for a given arc angle and (already jittered) radius.
#[inline]
pub fn peer_position(angle: f32, radius: f32, rearrange_z: f32) -> Vec3 {
    Vec3::new(
        angle.sin() * radius,
        angle.cos() * radius / PEER_ARC_HEIGHT_DIVISOR,
        rearrange_z + angle.cos() * PEER_ARC_DEPTH,
    )
}

pub fn resolve_targets<R: Rng + ?Sized>(input: &ResolveInput<'_>, rng: &mut R) -> Resolution {
    let n = input.layout.len();
    let focused = input.focused.filter(|&i| i < n);
    let profile = input.profile();

    let Some(focused) = focused else {
        let idle_scale = Vec3::splat(profile.master_scale);
        return Resolution {
            targets: input
                .layout
                .iter()
                .map(|&position| Target {
                    position,
                    scale: idle_scale,
                    regime: Regime::Idle,
                })
                .collect(),
            scene_focused: false,
        };
    };

    let depth = input.camera_eye.z - profile.focused_position.z;
    let focused_scale = focus_scale(&input.viewport, input.focused_aspect, depth);
    let peer_count = n - 1;
    let peer_scale = Vec3::splat(profile.peer_scale);

    let targets = (0..n)
        .map(|i| {
            if i == focused {
                return Target {
                    position: profile.focused_position,
                    scale: Vec3::splat(focused_scale),
                    regime: Regime::Focused,
                };
            }
            let k = if i < focused { i } else { i - 1 };
            let angle = peer_angle(k, peer_count);
            let radius = profile.rearrange_radius + rng.gen_range(-PEER_JITTER..=PEER_JITTER);
            Target {
                position: peer_position(angle, radius, profile.rearrange_z),
                scale: peer_scale,
                regime: Regime::Peer,
            }
        })
        .collect();

    Resolution {
        targets,
        scene_focused: true,
    }
}
