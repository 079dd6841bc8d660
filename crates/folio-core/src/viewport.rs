//! Viewport classes and their constant tables.
//!
//! Every mobile/desktop magic number is gathered in one `ViewportProfile`
//! per class. The engine selects a profile from the external viewport signal
//! and never branches on the class anywhere else.

use crate::constants::{CAMERA_FOVY_DEG, MOBILE_BREAKPOINT_PX};
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewportClass {
    Mobile,
    Desktop,
}

impl ViewportClass {
    /// Classify a CSS pixel width against the mobile breakpoint.
    pub fn from_width(css_width: f32) -> Self {
        if css_width < MOBILE_BREAKPOINT_PX {
            ViewportClass::Mobile
        } else {
            ViewportClass::Desktop
        }
    }
}

/// Layout and focus constants for one viewport class.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportProfile {
    pub scatter_radius: f32,
    pub rearrange_radius: f32,
    pub rearrange_z: f32,
    /// Where the focused item settles. Mobile sits farther back and higher to
    /// leave room for the caption below it.
    pub focused_position: Vec3,
    /// Fraction of the visible frame the focused item should fill.
    pub focus_fill: f32,
    pub master_scale: f32,
    pub peer_scale: f32,
}

const DESKTOP: ViewportProfile = ViewportProfile {
    scatter_radius: 9.0,
    rearrange_radius: 9.0,
    rearrange_z: -2.0,
    focused_position: Vec3::new(0.0, 0.0, 8.0),
    focus_fill: 0.6,
    master_scale: 1.0,
    peer_scale: 0.75,
};

const MOBILE: ViewportProfile = ViewportProfile {
    scatter_radius: 6.0,
    rearrange_radius: 5.0,
    rearrange_z: -4.0,
    focused_position: Vec3::new(0.0, 1.2, 4.0),
    focus_fill: 0.8,
    master_scale: 0.6,
    peer_scale: 0.45,
};

impl ViewportProfile {
    pub fn for_class(class: ViewportClass) -> &'static ViewportProfile {
        match class {
            ViewportClass::Mobile => &MOBILE,
            ViewportClass::Desktop => &DESKTOP,
        }
    }
}

/// External viewport signal: breakpoint class plus projection parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub class: ViewportClass,
    pub fovy_radians: f32,
    /// Width over height of the drawing surface.
    pub aspect: f32,
}

impl Viewport {
    pub fn new(class: ViewportClass, fovy_radians: f32, aspect: f32) -> Self {
        Self {
            class,
            fovy_radians,
            aspect,
        }
    }

    /// Build from CSS pixel size using the default camera field of view.
    pub fn from_css_size(width: f32, height: f32) -> Self {
        let aspect = if height > 0.0 { width / height } else { 1.0 };
        Self::new(
            ViewportClass::from_width(width),
            CAMERA_FOVY_DEG.to_radians(),
            aspect,
        )
    }

    pub fn profile(&self) -> &'static ViewportProfile {
        ViewportProfile::for_class(self.class)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(
            ViewportClass::Desktop,
            CAMERA_FOVY_DEG.to_radians(),
            16.0 / 9.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_splits_classes() {
        assert_eq!(ViewportClass::from_width(375.0), ViewportClass::Mobile);
        assert_eq!(ViewportClass::from_width(767.9), ViewportClass::Mobile);
        assert_eq!(ViewportClass::from_width(768.0), ViewportClass::Desktop);
        assert_eq!(ViewportClass::from_width(1920.0), ViewportClass::Desktop);
    }

    #[test]
    fn mobile_focus_sits_farther_from_camera() {
        let m = ViewportProfile::for_class(ViewportClass::Mobile);
        let d = ViewportProfile::for_class(ViewportClass::Desktop);
        assert!(m.focused_position.z < d.focused_position.z);
        assert!(m.focus_fill > d.focus_fill);
        assert!(m.peer_scale < m.master_scale);
        assert!(d.peer_scale < d.master_scale);
    }

    #[test]
    fn zero_height_does_not_divide() {
        let v = Viewport::from_css_size(800.0, 0.0);
        assert!(v.aspect.is_finite());
        assert_eq!(v.class, ViewportClass::Desktop);
    }
}
