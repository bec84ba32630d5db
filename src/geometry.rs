//! Chart geometry: points, rectangles, the cell layout, and tooth shapes.
//!
//! All coordinates are chart units with the origin at the top-left corner of
//! the chart. The upper arch sits above the lower arch; the patient's right
//! (quadrants 1 and 4) is drawn on the viewer's left, so every row mirrors
//! outward from a vertical midline.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

use crate::consts::{CROWN_HEIGHT_RATIO, EDGE_OVERLAY_RATIO, OCCLUSAL_OVERLAY_RATIO, TEETH_PER_QUADRANT};
use crate::doc::Surface;
use crate::tooth::{Arch, Quadrant, ToothId, ToothType};

/// A point in chart or screen space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
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

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Inclusive containment test.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.x && pt.x <= self.right() && pt.y >= self.y && pt.y <= self.bottom()
    }
}

/// Cell sizes and spacing of the chart, in chart units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartLayout {
    /// Width of one tooth cell.
    pub tooth_width: f64,
    /// Height of one tooth cell, crown plus roots.
    pub tooth_height: f64,
    /// Horizontal gap between neighboring teeth.
    pub tooth_gap: f64,
    /// Horizontal gap between the left and right halves.
    pub midline_gap: f64,
    /// Vertical gap between the upper and lower arch.
    pub arch_gap: f64,
    /// Outer margin around the chart.
    pub padding: f64,
    /// Height reserved above the upper row and below the lower row for captions.
    pub caption_height: f64,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            tooth_width: 36.0,
            tooth_height: 84.0,
            tooth_gap: 4.0,
            midline_gap: 20.0,
            arch_gap: 36.0,
            padding: 16.0,
            caption_height: 18.0,
        }
    }
}

impl ChartLayout {
    /// Width of one half row (eight teeth).
    #[must_use]
    pub fn half_width(&self) -> f64 {
        let n = f64::from(TEETH_PER_QUADRANT);
        n * self.tooth_width + (n - 1.0) * self.tooth_gap
    }

    /// Total chart width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.padding * 2.0 + self.half_width() * 2.0 + self.midline_gap
    }

    /// Total chart height, captions included.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.padding * 2.0 + self.caption_height * 2.0 + self.tooth_height * 2.0 + self.arch_gap
    }

    /// X coordinate of the vertical midline.
    #[must_use]
    pub fn midline_x(&self) -> f64 {
        self.padding + self.half_width() + self.midline_gap * 0.5
    }

    /// Top of the row for an arch.
    #[must_use]
    pub fn row_y(&self, arch: Arch) -> f64 {
        let upper = self.padding + self.caption_height;
        match arch {
            Arch::Upper => upper,
            Arch::Lower => upper + self.tooth_height + self.arch_gap,
        }
    }

    /// Left edge of the half row a quadrant occupies.
    #[must_use]
    pub fn half_x(&self, quadrant: Quadrant) -> f64 {
        if quadrant.is_patient_right() {
            self.padding
        } else {
            self.padding + self.half_width() + self.midline_gap
        }
    }

    /// Area for a quadrant's caption: above the upper row, below the lower one.
    #[must_use]
    pub fn caption_bounds(&self, quadrant: Quadrant) -> Rect {
        let y = match quadrant.arch() {
            Arch::Upper => self.padding,
            Arch::Lower => self.row_y(Arch::Lower) + self.tooth_height,
        };
        Rect::new(self.half_x(quadrant), y, self.half_width(), self.caption_height)
    }

    /// Cell occupied by a tooth.
    #[must_use]
    pub fn tooth_bounds(&self, id: ToothId) -> Rect {
        let quadrant = id.quadrant();
        // Columns run outward from the midline on each side.
        let column = if quadrant.is_patient_right() {
            TEETH_PER_QUADRANT - id.position()
        } else {
            id.position() - 1
        };
        let x = self.half_x(quadrant) + f64::from(column) * (self.tooth_width + self.tooth_gap);
        Rect::new(x, self.row_y(quadrant.arch()), self.tooth_width, self.tooth_height)
    }
}

/// Outline of one tooth: a crown and one triangle per root.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToothShape {
    pub crown: Rect,
    pub roots: Vec<[Point; 3]>,
}

/// Build the shape of a tooth inside its cell.
///
/// The crown sits on the occlusal plane (bottom of the cell on the upper
/// arch, top on the lower arch) and the roots extend away from it.
#[must_use]
pub fn tooth_shape(bounds: Rect, tooth_type: ToothType, arch: Arch) -> ToothShape {
    let crown_h = bounds.height * CROWN_HEIGHT_RATIO;
    let (crown, root_base_y, root_tip_y) = match arch {
        Arch::Upper => {
            let crown_y = bounds.bottom() - crown_h;
            (Rect::new(bounds.x, crown_y, bounds.width, crown_h), crown_y, bounds.y)
        }
        Arch::Lower => {
            let crown_y = bounds.y;
            (Rect::new(bounds.x, crown_y, bounds.width, crown_h), crown_y + crown_h, bounds.bottom())
        }
    };

    let count = tooth_type.root_count();
    // Single-rooted teeth taper to a narrower root.
    let inset = if count == 1 { bounds.width * 0.2 } else { bounds.width * 0.08 };
    let usable = bounds.width - inset * 2.0;
    #[allow(clippy::cast_precision_loss)]
    let slot = usable / count as f64;
    let roots = (0..count)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let left = bounds.x + inset + slot * i as f64;
            let right = left + slot;
            [
                Point::new(left, root_base_y),
                Point::new((left + right) * 0.5, root_tip_y),
                Point::new(right, root_base_y),
            ]
        })
        .collect();

    ToothShape { crown, roots }
}

/// Region of the crown that shows a surface finding.
///
/// Mesial faces the midline and distal faces away from it; vestibular is the
/// crown edge toward the roots, lingual the edge toward the occlusal plane;
/// occlusal is a square in the crown's center.
#[must_use]
pub fn surface_region(crown: Rect, surface: Surface, quadrant: Quadrant) -> Rect {
    let edge = crown.width * EDGE_OVERLAY_RATIO;
    let left_edge = Rect::new(crown.x, crown.y, edge, crown.height);
    let right_edge = Rect::new(crown.right() - edge, crown.y, edge, crown.height);
    let band = crown.height * EDGE_OVERLAY_RATIO;
    let top_band = Rect::new(crown.x, crown.y, crown.width, band);
    let bottom_band = Rect::new(crown.x, crown.bottom() - band, crown.width, band);
    let upper = quadrant.arch() == Arch::Upper;

    match surface {
        Surface::Mesial if quadrant.is_patient_right() => right_edge,
        Surface::Mesial => left_edge,
        Surface::Distal if quadrant.is_patient_right() => left_edge,
        Surface::Distal => right_edge,
        Surface::Vestibular if upper => top_band,
        Surface::Vestibular => bottom_band,
        Surface::Lingual if upper => bottom_band,
        Surface::Lingual => top_band,
        Surface::Occlusal => {
            let side = crown.width.min(crown.height) * OCCLUSAL_OVERLAY_RATIO;
            let c = crown.center();
            Rect::new(c.x - side * 0.5, c.y - side * 0.5, side, side)
        }
    }
}
