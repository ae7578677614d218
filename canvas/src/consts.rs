//! Shared constants for the banner drawing.

// ── Palette ─────────────────────────────────────────────────────

/// Gradient start color (top-left corner).
pub const GRADIENT_FROM: &str = "#8b5cf6";

/// Gradient end color (bottom-right corner).
pub const GRADIENT_TO: &str = "#06b6d4";

pub const LABEL_COLOR: &str = "#ffffff";
pub const CIRCLE_COLOR: &str = "#f59e0b";
pub const BAR_COLOR: &str = "#ffffff";

// ── Label ───────────────────────────────────────────────────────

pub const LABEL_TEXT: &str = "Portfolio Canvas";
pub const LABEL_FONT: &str = "bold 24px Inter, sans-serif";

/// Vertical offset of the label from the surface center, in pixels.
pub const LABEL_OFFSET_Y: f64 = -30.0;

// ── Shapes ──────────────────────────────────────────────────────

pub const CIRCLE_OFFSET_Y: f64 = 20.0;
pub const CIRCLE_RADIUS: f64 = 30.0;

pub const BAR_WIDTH: f64 = 80.0;
pub const BAR_HEIGHT: f64 = 20.0;

/// Distance from the surface center to the bar's top edge.
pub const BAR_OFFSET_Y: f64 = 50.0;
