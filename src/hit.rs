#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::geometry::Point;
use crate::scene::Scene;
use crate::tooth::ToothId;

/// Which part of a tooth was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    Crown,
    Root,
}

/// Result of a hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub tooth: ToothId,
    pub part: HitPart,
}

/// Find the tooth whose cell contains `chart_pt`.
///
/// Cells never overlap, so at most one tooth matches. The enlarged drawing of
/// a selected tooth does not widen its hit area.
#[must_use]
pub fn hit_test(chart_pt: Point, scene: &Scene) -> Option<Hit> {
    scene.teeth().find(|t| t.bounds.contains(chart_pt)).map(|t| Hit {
        tooth: t.id,
        part: if t.shape.crown.contains(chart_pt) { HitPart::Crown } else { HitPart::Root },
    })
}
