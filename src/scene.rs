//! Visual tree of the chart.
//!
//! `build_scene` is a total function from the record snapshot, the selection
//! and the layout to a `Scene`: four quadrants in chart order, eight teeth
//! each. Nothing in here can fail. A missing record renders as healthy, an
//! unknown condition has already been folded into healthy by `doc`, and a
//! selection that names no tooth highlights nothing.
//!
//! The renderer and the hit-tester both read the scene; neither looks at
//! records directly.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use serde::Serialize;

use crate::consts::SELECTED_SCALE;
use crate::doc::{ChartRecords, Condition, Surface, ToothRecord};
use crate::geometry::{ChartLayout, Rect, ToothShape, surface_region, tooth_shape};
use crate::style::{ConditionStyle, style_of};
use crate::tooth::{Arch, CHART_ORDER, Quadrant, ToothId, ToothType};

/// A surface finding drawn over the crown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurfaceOverlay {
    pub surface: Surface,
    pub region: Rect,
    /// Sub-condition text, e.g. `"deep"`.
    pub detail: Option<String>,
}

/// Everything needed to draw and hit-test one tooth.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToothView {
    pub id: ToothId,
    pub tooth_type: ToothType,
    pub arch: Arch,
    pub condition: Condition,
    pub style: ConditionStyle,
    /// The tooth's cell.
    pub bounds: Rect,
    pub shape: ToothShape,
    /// Extraction or missing: draw a cross over the body.
    pub crossed: bool,
    pub overlays: Vec<SurfaceOverlay>,
    pub selected: bool,
    /// Draw scale about the cell center.
    pub scale: f64,
}

/// One quadrant's teeth in chart order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuadrantView {
    pub quadrant: Quadrant,
    pub caption: Rect,
    pub teeth: Vec<ToothView>,
}

/// The full chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub quadrants: Vec<QuadrantView>,
    pub width: f64,
    pub height: f64,
}

impl Scene {
    /// All tooth views in chart order.
    pub fn teeth(&self) -> impl Iterator<Item = &ToothView> {
        self.quadrants.iter().flat_map(|q| q.teeth.iter())
    }

    #[must_use]
    pub fn tooth(&self, id: ToothId) -> Option<&ToothView> {
        self.teeth().find(|t| t.id == id)
    }

    /// The selected tooth, if the selection names one in the scene.
    #[must_use]
    pub fn selected(&self) -> Option<&ToothView> {
        self.teeth().find(|t| t.selected)
    }
}

/// Build the view of a single tooth.
#[must_use]
pub fn tooth_view(id: ToothId, records: &ChartRecords, selected: Option<ToothId>, layout: &ChartLayout) -> ToothView {
    let record = records.get(id);
    let condition = record.map_or(Condition::Healthy, ToothRecord::condition);
    let bounds = layout.tooth_bounds(id);
    let shape = tooth_shape(bounds, id.tooth_type(), id.arch());
    let overlays: Vec<SurfaceOverlay> = record
        .map(|r| {
            r.surfaces
                .iter()
                .map(|(surface, detail)| SurfaceOverlay {
                    surface: *surface,
                    region: surface_region(shape.crown, *surface, id.quadrant()),
                    detail: detail.clone(),
                })
                .collect()
        })
        .unwrap_or_default();
    let is_selected = selected == Some(id);

    ToothView {
        id,
        tooth_type: id.tooth_type(),
        arch: id.arch(),
        condition,
        style: style_of(condition),
        bounds,
        shape,
        crossed: condition.is_crossed(),
        overlays,
        selected: is_selected,
        scale: if is_selected { SELECTED_SCALE } else { 1.0 },
    }
}

/// Build the full chart scene.
#[must_use]
pub fn build_scene(records: &ChartRecords, selected: Option<ToothId>, layout: &ChartLayout) -> Scene {
    let quadrants = CHART_ORDER
        .iter()
        .map(|&quadrant| QuadrantView {
            quadrant,
            caption: layout.caption_bounds(quadrant),
            teeth: quadrant
                .teeth()
                .into_iter()
                .map(|id| tooth_view(id, records, selected, layout))
                .collect(),
        })
        .collect();

    Scene { quadrants, width: layout.width(), height: layout.height() }
}
