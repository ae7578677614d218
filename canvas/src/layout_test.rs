#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn gradient_runs_corner_to_corner() {
    let layout = BannerLayout::new(400.0, 200.0);
    assert_eq!(layout.gradient_start, Point::new(0.0, 0.0));
    assert_eq!(layout.gradient_end, Point::new(400.0, 200.0));
}

#[test]
fn label_sits_above_center() {
    let layout = BannerLayout::new(400.0, 200.0);
    assert_eq!(layout.label, Point::new(200.0, 70.0));
}

#[test]
fn circle_sits_below_center() {
    let layout = BannerLayout::new(400.0, 200.0);
    assert_eq!(layout.circle_center, Point::new(200.0, 120.0));
    assert_eq!(layout.circle_radius, 30.0);
}

#[test]
fn bar_is_horizontally_centered() {
    let layout = BannerLayout::new(400.0, 200.0);
    assert_eq!(layout.bar, Rect { x: 160.0, y: 150.0, width: 80.0, height: 20.0 });
    assert_eq!(layout.bar.x + layout.bar.width / 2.0, 200.0);
}

#[test]
fn layout_tracks_surface_size() {
    let small = BannerLayout::new(100.0, 100.0);
    let large = BannerLayout::new(1000.0, 600.0);
    assert_eq!(small.label.x, 50.0);
    assert_eq!(large.label.x, 500.0);
    assert_eq!(large.bar.y, 350.0);
}

#[test]
fn zero_sized_surface_is_empty() {
    assert!(BannerLayout::new(0.0, 150.0).is_empty());
    assert!(BannerLayout::new(300.0, 0.0).is_empty());
    assert!(!BannerLayout::new(300.0, 150.0).is_empty());
}
