#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

#[test]
fn default_is_identity() {
    let cam = Camera::default();
    let p = Point::new(12.0, -3.0);
    assert!(point_approx_eq(cam.screen_to_chart(p), p));
    assert!(point_approx_eq(cam.chart_to_screen(p), p));
}

#[test]
fn conversions_round_trip() {
    let cam = Camera { pan_x: 40.0, pan_y: -10.0, zoom: 1.75 };
    let p = Point::new(100.0, 250.0);
    assert!(point_approx_eq(cam.chart_to_screen(cam.screen_to_chart(p)), p));
}

#[test]
fn fit_scales_to_limiting_axis_and_centers() {
    let cam = Camera::fit(200.0, 100.0, 400.0, 400.0);
    assert_eq!(cam.zoom, 2.0);
    assert_eq!(cam.pan_x, 0.0);
    assert_eq!(cam.pan_y, 100.0);
    let bottom_right = cam.chart_to_screen(Point::new(200.0, 100.0));
    assert!(point_approx_eq(bottom_right, Point::new(400.0, 300.0)));
}

#[test]
fn fit_shrinks_when_viewport_is_small() {
    let cam = Camera::fit(800.0, 200.0, 400.0, 400.0);
    assert_eq!(cam.zoom, 0.5);
}

#[test]
fn fit_degenerate_sizes_fall_back_to_identity() {
    assert_eq!(Camera::fit(0.0, 100.0, 400.0, 400.0), Camera::default());
    assert_eq!(Camera::fit(100.0, 100.0, 0.0, 400.0), Camera::default());
    assert_eq!(Camera::fit(100.0, 100.0, 400.0, -1.0), Camera::default());
}
