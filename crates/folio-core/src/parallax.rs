use crate::constants::{
    SCROLL_CLAMP, SCROLL_DECAY_PER_FRAME, SCROLL_PARALLAX_GAIN, SCROLL_SNAP_EPSILON, WHEEL_GAIN,
};
use glam::Vec2;

/// Combined pointer + decaying scroll signal driving idle parallax.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParallaxInput {
    /// Normalized pointer position, -1..1 on both axes, +y up.
    pub pointer: Vec2,
    pub scroll: Vec2,
}

impl ParallaxInput {
    /// Overwrite the pointer with a normalized position.
    pub fn set_pointer(&mut self, ndc: Vec2) {
        self.pointer = ndc.clamp(Vec2::NEG_ONE, Vec2::ONE);
    }

    /// Accumulate raw wheel deltas (pixels), clamped to bound the drift.
    pub fn add_wheel(&mut self, delta_x: f32, delta_y: f32) {
        let next = self.scroll + Vec2::new(delta_x, delta_y) * WHEEL_GAIN;
        self.scroll = next.clamp(Vec2::splat(-SCROLL_CLAMP), Vec2::splat(SCROLL_CLAMP));
    }

    /// Geometric decay of the scroll accumulator over `frames` reference
    /// frames, snapping tiny components to exactly zero.
    pub fn decay(&mut self, frames: f32) {
        self.scroll *= SCROLL_DECAY_PER_FRAME.powf(frames.max(0.0));
        if self.scroll.x.abs() < SCROLL_SNAP_EPSILON {
            self.scroll.x = 0.0;
        }
        if self.scroll.y.abs() < SCROLL_SNAP_EPSILON {
            self.scroll.y = 0.0;
        }
    }

    /// Screen-plane offset before depth weighting.
    #[inline]
    pub fn offset(&self) -> Vec2 {
        self.pointer + self.scroll * SCROLL_PARALLAX_GAIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_is_clamped_to_unit_square() {
        let mut p = ParallaxInput::default();
        p.set_pointer(Vec2::new(3.0, -2.0));
        assert_eq!(p.pointer, Vec2::new(1.0, -1.0));
    }

    #[test]
    fn decay_reaches_exact_zero() {
        let mut p = ParallaxInput::default();
        p.add_wheel(300.0, -120.0);
        let mut frames = 0;
        while p.scroll != Vec2::ZERO {
            let before = p.scroll.length();
            p.decay(1.0);
            assert!(p.scroll.length() < before);
            frames += 1;
            assert!(frames < 1000, "scroll never settled");
        }
        assert_eq!(p.scroll, Vec2::ZERO);
    }

    #[test]
    fn offset_combines_pointer_and_scroll() {
        let mut p = ParallaxInput::default();
        p.set_pointer(Vec2::new(0.5, 0.0));
        p.add_wheel(0.0, 100.0);
        let o = p.offset();
        assert!((o.x - 0.5).abs() < 1e-6);
        assert!((o.y - SCROLL_PARALLAX_GAIN).abs() < 1e-6);
    }
}
