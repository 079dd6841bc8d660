use folio_core::{generate_layout, LayoutSeed, ViewportClass, ViewportProfile};
use std::f32::consts::TAU;

fn wrapped_gap(a: f32, b: f32) -> f32 {
    (a - b).rem_euclid(TAU)
}

fn same_angle(a: f32, b: f32) -> bool {
    let d = (a - b).rem_euclid(TAU);
    d < 1e-3 || TAU - d < 1e-3
}

#[test]
fn layout_has_n_finite_points_within_bound() {
    for class in [ViewportClass::Mobile, ViewportClass::Desktop] {
        let radius = ViewportProfile::for_class(class).scatter_radius;
        for seed in [0.0, 0.37, 12.5, 1000.0] {
            for n in 1..=40 {
                let pts = generate_layout(LayoutSeed::new(seed), n, radius);
                assert_eq!(pts.len(), n);
                for p in &pts {
                    assert!(p.is_finite(), "non-finite point for n={n} seed={seed}");
                    assert!(p.length() <= radius * 2f32.sqrt() + 1e-4);
                }
            }
        }
    }
}

#[test]
fn seed_rotates_pattern_without_reshuffling() {
    let n = 12;
    let a = generate_layout(LayoutSeed::new(0.0), n, 9.0);
    let b = generate_layout(LayoutSeed::new(1.7), n, 9.0);
    let angle = |p: &glam::Vec3| p.z.atan2(p.x);

    // Poles (first and last) have no horizontal extent; compare the rest
    for i in 1..n - 1 {
        assert!((a[i].y - b[i].y).abs() < 1e-5, "height changed for {i}");
        assert!((a[i].x.hypot(a[i].z) - b[i].x.hypot(b[i].z)).abs() < 1e-4);
        for j in 1..n - 1 {
            let gap_a = wrapped_gap(angle(&a[i]), angle(&a[j]));
            let gap_b = wrapped_gap(angle(&b[i]), angle(&b[j]));
            assert!(same_angle(gap_a, gap_b), "spacing changed for ({i}, {j})");
        }
    }
}

#[test]
fn seed_shifts_every_point_by_the_same_angle() {
    let n = 8;
    let shift = 0.9;
    let a = generate_layout(LayoutSeed::new(0.0), n, 9.0);
    let b = generate_layout(LayoutSeed::new(shift), n, 9.0);
    for i in 1..n - 1 {
        let da = a[i].z.atan2(a[i].x);
        let db = b[i].z.atan2(b[i].x);
        assert!(same_angle(db - da, shift), "point {i} not rotated by seed");
    }
}
