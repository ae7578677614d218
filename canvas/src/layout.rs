//! Banner geometry.
//!
//! Every position is a fixed offset from the surface center, so the whole
//! layout is a pure function of the surface size.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use crate::consts::{BAR_HEIGHT, BAR_OFFSET_Y, BAR_WIDTH, CIRCLE_OFFSET_Y, CIRCLE_RADIUS, LABEL_OFFSET_Y};

/// A point in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle, origin at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Positions of everything the banner draws.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BannerLayout {
    pub width: f64,
    pub height: f64,
    pub gradient_start: Point,
    pub gradient_end: Point,
    pub label: Point,
    pub circle_center: Point,
    pub circle_radius: f64,
    pub bar: Rect,
}

impl BannerLayout {
    /// Lay out the banner for a `width` × `height` surface.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        let center = Point::new(width / 2.0, height / 2.0);
        Self {
            width,
            height,
            gradient_start: Point::new(0.0, 0.0),
            gradient_end: Point::new(width, height),
            label: Point::new(center.x, center.y + LABEL_OFFSET_Y),
            circle_center: Point::new(center.x, center.y + CIRCLE_OFFSET_Y),
            circle_radius: CIRCLE_RADIUS,
            bar: Rect {
                x: center.x - BAR_WIDTH / 2.0,
                y: center.y + BAR_OFFSET_Y,
                width: BAR_WIDTH,
                height: BAR_HEIGHT,
            },
        }
    }

    /// True when the surface has no drawable area.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}
