//! Rendering: draws the chart scene to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a read-only [`Scene`] and frame parameters and produces
//! pixels — it does not mutate any application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) hands the result to
//! the host.

use js_sys::Array;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::camera::Camera;
use crate::config::ChartConfig;
use crate::consts::{CROSS_MARK_COLOR, SELECTION_RING_COLOR, SELECTION_RING_WIDTH, SURFACE_FINDING_COLOR};
use crate::scene::{QuadrantView, Scene, ToothView};
use crate::style::legend;
use crate::tooth::{Arch, ToothId};

/// Hover wash drawn behind an interactive tooth.
const HOVER_FILL: &str = "rgba(37, 99, 235, 0.08)";

/// Caption and label text color.
const TEXT_COLOR: &str = "#374151";

/// Midline guide color.
const MIDLINE_COLOR: &str = "#D1D5DB";

/// Legend swatch side in chart units.
const SWATCH_SIZE: f64 = 10.0;

/// Per-frame drawing parameters that are not part of the scene.
pub struct Frame<'a> {
    pub config: &'a ChartConfig,
    pub camera: &'a Camera,
    pub hovered: Option<ToothId>,
    pub read_only: bool,
    /// Viewport width in CSS pixels.
    pub viewport_w: f64,
    /// Viewport height in CSS pixels.
    pub viewport_h: f64,
    /// Device pixel ratio.
    pub dpr: f64,
}

/// Draw the full chart: captions, teeth, selection and legend.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, scene: &Scene, frame: &Frame<'_>) -> Result<(), JsValue> {
    // Layer 1: clear and set up transforms.
    ctx.set_transform(frame.dpr, 0.0, 0.0, frame.dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, frame.viewport_w, frame.viewport_h);
    ctx.translate(frame.camera.pan_x, frame.camera.pan_y)?;
    ctx.scale(frame.camera.zoom, frame.camera.zoom)?;

    // Layer 2: captions and midline.
    draw_midline(ctx, frame.config)?;
    for quadrant in &scene.quadrants {
        draw_caption(ctx, quadrant)?;
    }

    // Layer 3: teeth, with the selected tooth last so its enlarged body sits on top.
    let interactive_hover = if frame.read_only { None } else { frame.hovered };
    for tooth in scene.teeth().filter(|t| !t.selected) {
        draw_tooth(ctx, tooth, frame.config.show_labels, interactive_hover == Some(tooth.id))?;
    }
    if let Some(tooth) = scene.selected() {
        draw_tooth(ctx, tooth, frame.config.show_labels, interactive_hover == Some(tooth.id))?;
    }

    // Layer 4: legend.
    if frame.config.show_legend {
        draw_legend(ctx, frame.config)?;
    }

    Ok(())
}

// =============================================================
// Chart furniture
// =============================================================

fn draw_midline(ctx: &CanvasRenderingContext2d, config: &ChartConfig) -> Result<(), JsValue> {
    let layout = &config.layout;
    let x = layout.midline_x();
    ctx.save();
    ctx.set_stroke_style_str(MIDLINE_COLOR);
    ctx.set_line_width(1.0);
    set_dash(ctx, &[2.0, 4.0])?;
    ctx.begin_path();
    ctx.move_to(x, layout.padding);
    ctx.line_to(x, layout.height() - layout.padding);
    ctx.stroke();
    ctx.restore();
    Ok(())
}

fn draw_caption(ctx: &CanvasRenderingContext2d, quadrant: &QuadrantView) -> Result<(), JsValue> {
    let c = quadrant.caption.center();
    ctx.set_fill_style_str(TEXT_COLOR);
    ctx.set_font("11px sans-serif");
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    let text = format!("{} · {}", quadrant.quadrant.digit(), quadrant.quadrant.caption());
    ctx.fill_text(&text, c.x, c.y)
}

// =============================================================
// Teeth
// =============================================================

fn draw_tooth(ctx: &CanvasRenderingContext2d, tooth: &ToothView, show_label: bool, hovered: bool) -> Result<(), JsValue> {
    let b = tooth.bounds;
    ctx.save();

    if (tooth.scale - 1.0).abs() > f64::EPSILON {
        let c = b.center();
        ctx.translate(c.x, c.y)?;
        ctx.scale(tooth.scale, tooth.scale)?;
        ctx.translate(-c.x, -c.y)?;
    }

    if hovered {
        ctx.set_fill_style_str(HOVER_FILL);
        ctx.fill_rect(b.x, b.y, b.width, b.height);
    }

    // Body: roots first, crown over them.
    ctx.set_fill_style_str(tooth.style.fill);
    ctx.set_stroke_style_str(tooth.style.stroke);
    ctx.set_line_width(1.5);
    set_dash(ctx, tooth.style.dash)?;
    for [a, tip, c] in &tooth.shape.roots {
        ctx.begin_path();
        ctx.move_to(a.x, a.y);
        ctx.line_to(tip.x, tip.y);
        ctx.line_to(c.x, c.y);
        ctx.close_path();
        ctx.fill();
        ctx.stroke();
    }
    let crown = tooth.shape.crown;
    ctx.fill_rect(crown.x, crown.y, crown.width, crown.height);
    ctx.stroke_rect(crown.x, crown.y, crown.width, crown.height);
    set_dash(ctx, &[])?;

    ctx.set_fill_style_str(SURFACE_FINDING_COLOR);
    for overlay in &tooth.overlays {
        let r = overlay.region;
        ctx.fill_rect(r.x, r.y, r.width, r.height);
    }

    if tooth.crossed {
        ctx.set_stroke_style_str(CROSS_MARK_COLOR);
        ctx.set_line_width(2.0);
        ctx.begin_path();
        ctx.move_to(b.x, b.y);
        ctx.line_to(b.right(), b.bottom());
        ctx.move_to(b.right(), b.y);
        ctx.line_to(b.x, b.bottom());
        ctx.stroke();
    }

    if tooth.selected {
        ctx.set_stroke_style_str(SELECTION_RING_COLOR);
        ctx.set_line_width(SELECTION_RING_WIDTH);
        let pad = SELECTION_RING_WIDTH;
        ctx.stroke_rect(b.x - pad, b.y - pad, b.width + pad * 2.0, b.height + pad * 2.0);
    }

    if show_label {
        draw_label(ctx, tooth)?;
    }

    ctx.restore();
    Ok(())
}

/// FDI code in the gap between the arches, next to the crown.
fn draw_label(ctx: &CanvasRenderingContext2d, tooth: &ToothView) -> Result<(), JsValue> {
    let b = tooth.bounds;
    let (y, baseline) = match tooth.arch {
        Arch::Upper => (b.bottom() + 4.0, "top"),
        Arch::Lower => (b.y - 4.0, "bottom"),
    };
    ctx.set_fill_style_str(if tooth.selected { SELECTION_RING_COLOR } else { TEXT_COLOR });
    ctx.set_font(if tooth.selected { "bold 11px sans-serif" } else { "11px sans-serif" });
    ctx.set_text_align("center");
    ctx.set_text_baseline(baseline);
    ctx.fill_text(&tooth.id.to_string(), b.center().x, y)
}

// =============================================================
// Legend
// =============================================================

fn draw_legend(ctx: &CanvasRenderingContext2d, config: &ChartConfig) -> Result<(), JsValue> {
    let layout = &config.layout;
    let entries = legend();
    let top = layout.height();
    let mid_y = top + config.legend_height * 0.5;
    let usable = layout.width() - layout.padding * 2.0;
    #[allow(clippy::cast_precision_loss)]
    let step = usable / entries.len().max(1) as f64;

    ctx.set_font("10px sans-serif");
    ctx.set_text_align("left");
    ctx.set_text_baseline("middle");
    ctx.set_line_width(1.0);
    for (i, entry) in entries.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let x = layout.padding + step * i as f64;
        ctx.set_fill_style_str(entry.swatch);
        ctx.fill_rect(x, mid_y - SWATCH_SIZE * 0.5, SWATCH_SIZE, SWATCH_SIZE);
        ctx.set_stroke_style_str(TEXT_COLOR);
        ctx.stroke_rect(x, mid_y - SWATCH_SIZE * 0.5, SWATCH_SIZE, SWATCH_SIZE);
        ctx.set_fill_style_str(TEXT_COLOR);
        ctx.fill_text(entry.label, x + SWATCH_SIZE + 4.0, mid_y)?;
    }
    Ok(())
}

// =============================================================
// Helpers
// =============================================================

fn set_dash(ctx: &CanvasRenderingContext2d, pattern: &[f64]) -> Result<(), JsValue> {
    let segments = Array::new();
    for seg in pattern {
        segments.push(&JsValue::from_f64(*seg));
    }
    ctx.set_line_dash(&segments)
}
