use crate::constants::{LAYOUT_Y_SQUASH, SEED_BUMP_MIN, SEED_BUMP_SPAN};
use glam::Vec3;
use rand::Rng;

/// Golden angle in radians, `π(3 - √5)`.
pub const GOLDEN_ANGLE: f32 = 2.399_963_2;

/// Scalar rotating the scatter pattern. Only ever nudged forward.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutSeed(f32);

impl LayoutSeed {
    pub fn new(value: f32) -> Self {
        Self(value)
    }

    #[inline]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Advance by a small random step so consecutive rearranges always differ.
    pub fn bump<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.0 += SEED_BUMP_MIN + rng.gen::<f32>() * SEED_BUMP_SPAN;
    }
}

/// Fibonacci-sphere scatter: `n` evenly spread points rotated by `seed`,
/// squashed vertically and scaled by `radius`.
pub fn generate_layout(seed: LayoutSeed, n: usize, radius: f32) -> Vec<Vec3> {
    (0..n)
        .map(|i| {
            let y = if n > 1 {
                1.0 - (i as f32 / (n - 1) as f32) * 2.0
            } else {
                0.0
            };
            let radius_xz = (1.0 - y * y).max(0.0).sqrt();
            let theta = GOLDEN_ANGLE * i as f32 + seed.value();
            let x = theta.cos() * radius_xz;
            let z = theta.sin() * radius_xz;
            Vec3::new(x, y * LAYOUT_Y_SQUASH, z) * radius
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn golden_angle_matches_formula() {
        let expected = std::f32::consts::PI * (3.0 - 5.0_f32.sqrt());
        assert!((GOLDEN_ANGLE - expected).abs() < 1e-6);
    }

    #[test]
    fn empty_and_single_layouts() {
        assert!(generate_layout(LayoutSeed::default(), 0, 9.0).is_empty());
        let one = generate_layout(LayoutSeed::default(), 1, 9.0);
        assert_eq!(one.len(), 1);
        // y = 0, theta = 0: the lone point sits on the equator at +x
        assert!((one[0] - Vec3::new(9.0, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn poles_are_first_and_last() {
        let pts = generate_layout(LayoutSeed::default(), 5, 2.0);
        assert!((pts[0].y - 2.0 * LAYOUT_Y_SQUASH).abs() < 1e-5);
        assert!((pts[4].y + 2.0 * LAYOUT_Y_SQUASH).abs() < 1e-5);
    }

    #[test]
    fn bump_moves_seed_forward_within_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seed = LayoutSeed::new(1.0);
        for _ in 0..50 {
            let before = seed.value();
            seed.bump(&mut rng);
            let step = seed.value() - before;
            assert!(step >= SEED_BUMP_MIN && step <= SEED_BUMP_MIN + SEED_BUMP_SPAN);
        }
    }
}
