//! Rendering: draws the banner to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.

use std::f64::consts::PI;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::{BAR_COLOR, CIRCLE_COLOR, GRADIENT_FROM, GRADIENT_TO, LABEL_COLOR, LABEL_FONT, LABEL_TEXT};
use crate::layout::BannerLayout;

/// Draw the banner onto `canvas` at its current pixel size.
///
/// Returns `Ok(false)` without drawing when the element has no 2D context
/// or no drawable area.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw_on(canvas: &HtmlCanvasElement) -> Result<bool, JsValue> {
    let Some(ctx) = canvas.get_context("2d")? else {
        log::debug!("banner canvas has no 2d context; skipping");
        return Ok(false);
    };
    let ctx = ctx.dyn_into::<CanvasRenderingContext2d>().map_err(JsValue::from)?;

    let layout = BannerLayout::new(f64::from(canvas.width()), f64::from(canvas.height()));
    if layout.is_empty() {
        log::debug!("banner canvas has zero size; skipping");
        return Ok(false);
    }
    draw(&ctx, &layout)?;
    Ok(true)
}

/// Draw the full banner: background, label, circle, bar.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw(ctx: &CanvasRenderingContext2d, layout: &BannerLayout) -> Result<(), JsValue> {
    draw_background(ctx, layout)?;
    draw_label(ctx, layout)?;
    draw_circle(ctx, layout)?;

    ctx.set_fill_style_str(BAR_COLOR);
    ctx.fill_rect(layout.bar.x, layout.bar.y, layout.bar.width, layout.bar.height);
    Ok(())
}

fn draw_background(ctx: &CanvasRenderingContext2d, layout: &BannerLayout) -> Result<(), JsValue> {
    let gradient = ctx.create_linear_gradient(
        layout.gradient_start.x,
        layout.gradient_start.y,
        layout.gradient_end.x,
        layout.gradient_end.y,
    );
    gradient.add_color_stop(0.0, GRADIENT_FROM)?;
    gradient.add_color_stop(1.0, GRADIENT_TO)?;
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill_rect(0.0, 0.0, layout.width, layout.height);
    Ok(())
}

fn draw_label(ctx: &CanvasRenderingContext2d, layout: &BannerLayout) -> Result<(), JsValue> {
    ctx.set_fill_style_str(LABEL_COLOR);
    ctx.set_font(LABEL_FONT);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.fill_text(LABEL_TEXT, layout.label.x, layout.label.y)
}

fn draw_circle(ctx: &CanvasRenderingContext2d, layout: &BannerLayout) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(layout.circle_center.x, layout.circle_center.y, layout.circle_radius, 0.0, 2.0 * PI)?;
    ctx.set_fill_style_str(CIRCLE_COLOR);
    ctx.fill();
    Ok(())
}
