// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

const ORIGIN: Vec2 = Vec2::new(10.0, 20.0);
const SIZE: Vec2 = Vec2::new(200.0, 100.0);

#[test]
fn rect_corners_map_to_ndc_corners() {
    assert_eq!(client_to_ndc(ORIGIN, ORIGIN, SIZE), Vec2::new(-1.0, 1.0));
    assert_eq!(
        client_to_ndc(ORIGIN + SIZE, ORIGIN, SIZE),
        Vec2::new(1.0, -1.0)
    );
    assert_eq!(
        client_to_ndc(ORIGIN + SIZE * 0.5, ORIGIN, SIZE),
        Vec2::ZERO
    );
}

#[test]
fn y_axis_points_up() {
    let upper = client_to_ndc(Vec2::new(110.0, 30.0), ORIGIN, SIZE);
    let lower = client_to_ndc(Vec2::new(110.0, 110.0), ORIGIN, SIZE);
    assert!(upper.y > lower.y);
}

#[test]
fn pointer_outside_rect_is_clamped() {
    let far = client_to_ndc(Vec2::new(-500.0, 900.0), ORIGIN, SIZE);
    assert_eq!(far, Vec2::new(-1.0, -1.0));
}

#[test]
fn degenerate_rect_maps_to_centre() {
    assert_eq!(
        client_to_ndc(Vec2::new(5.0, 5.0), ORIGIN, Vec2::new(0.0, 100.0)),
        Vec2::ZERO
    );
}

#[test]
fn wheel_modes_convert_to_pixels() {
    assert_eq!(wheel_delta_px(3.0, 0, 800.0), 3.0);
    assert_eq!(wheel_delta_px(3.0, 1, 800.0), 3.0 * LINE_HEIGHT_PX);
    assert_eq!(wheel_delta_px(-1.0, 2, 800.0), -800.0);
}

#[test]
fn backing_size_scales_by_dpr_and_never_hits_zero() {
    assert_eq!(backing_size(400.0, 300.0, 2.0), (800, 600));
    assert_eq!(backing_size(0.0, 0.0, 2.0), (1, 1));
    assert_eq!(backing_size(100.5, 50.5, 1.0), (100, 50));
}
