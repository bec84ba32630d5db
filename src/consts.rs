//! Shared numeric constants for the odontogram crate.

// ── Dentition ───────────────────────────────────────────────────

/// Teeth per quadrant in the permanent dentition.
pub const TEETH_PER_QUADRANT: u8 = 8;

/// Total number of valid FDI tooth identifiers.
pub const TOOTH_COUNT: usize = 32;

// ── Selection ───────────────────────────────────────────────────

/// Scale factor applied to the selected tooth.
pub const SELECTED_SCALE: f64 = 1.1;

/// Width of the selection ring in chart units.
pub const SELECTION_RING_WIDTH: f64 = 2.5;

/// Color of the selection ring.
pub const SELECTION_RING_COLOR: &str = "#2563EB";

// ── Shapes ──────────────────────────────────────────────────────

/// Fraction of the cell height taken by the crown; the remainder holds the roots.
pub const CROWN_HEIGHT_RATIO: f64 = 0.45;

/// Thickness of edge surface overlays (mesial, distal, vestibular, lingual)
/// as a fraction of the crown width.
pub const EDGE_OVERLAY_RATIO: f64 = 0.22;

/// Side of the occlusal overlay as a fraction of the crown's shorter side.
pub const OCCLUSAL_OVERLAY_RATIO: f64 = 0.4;

/// Color used to draw surface findings.
pub const SURFACE_FINDING_COLOR: &str = "rgba(220, 38, 38, 0.75)";

/// Color of the crossing mark on extracted or missing teeth.
pub const CROSS_MARK_COLOR: &str = "#B91C1C";
