#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::geometry::Point;

/// Maps chart coordinates onto the canvas.
///
/// `pan_x` / `pan_y` are in CSS pixels.
/// `zoom` is a scale factor (1.0 = one chart unit per CSS pixel).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { pan_x: 0.0, pan_y: 0.0, zoom: 1.0 }
    }
}

impl Camera {
    /// Camera that fits a `content_w` x `content_h` area into the viewport,
    /// preserving aspect ratio and centering the slack.
    ///
    /// Degenerate sizes fall back to the identity camera.
    #[must_use]
    pub fn fit(content_w: f64, content_h: f64, viewport_w: f64, viewport_h: f64) -> Self {
        if content_w <= 0.0 || content_h <= 0.0 || viewport_w <= 0.0 || viewport_h <= 0.0 {
            return Self::default();
        }
        let zoom = (viewport_w / content_w).min(viewport_h / content_h);
        Self {
            pan_x: (viewport_w - content_w * zoom) * 0.5,
            pan_y: (viewport_h - content_h * zoom) * 0.5,
            zoom,
        }
    }

    /// Convert a screen-space point (CSS pixels) to chart coordinates.
    #[must_use]
    pub fn screen_to_chart(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.pan_x) / self.zoom,
            y: (screen.y - self.pan_y) / self.zoom,
        }
    }

    /// Convert a chart point to screen coordinates (CSS pixels).
    #[must_use]
    pub fn chart_to_screen(&self, chart: Point) -> Point {
        Point {
            x: chart.x * self.zoom + self.pan_x,
            y: chart.y * self.zoom + self.pan_y,
        }
    }
}
