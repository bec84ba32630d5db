//! Condition styling and labels.
//!
//! Both tables are fixed, one entry per condition, and every lookup falls back
//! to the healthy entry on a miss. The legend swatch is stored alongside fill
//! and stroke rather than derived from them.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use serde::Serialize;

use crate::doc::{ALL_CONDITIONS, Condition};

/// How a tooth body is painted for a given condition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConditionStyle {
    /// Crown and root fill color.
    pub fill: &'static str,
    /// Outline color.
    pub stroke: &'static str,
    /// Legend swatch color.
    pub swatch: &'static str,
    /// Dash pattern for the outline; empty for a solid line.
    pub dash: &'static [f64],
}

const SOLID: &[f64] = &[];
const DASHED: &[f64] = &[4.0, 3.0];

const HEALTHY_STYLE: ConditionStyle = ConditionStyle { fill: "#FFFFFF", stroke: "#9CA3AF", swatch: "#E5E7EB", dash: SOLID };

/// Condition → style.
pub const CONDITION_STYLES: [(Condition, ConditionStyle); 9] = [
    (Condition::Healthy, HEALTHY_STYLE),
    (Condition::Caries, ConditionStyle { fill: "#FEE2E2", stroke: "#DC2626", swatch: "#EF4444", dash: SOLID }),
    (Condition::Extraction, ConditionStyle { fill: "#F3F4F6", stroke: "#6B7280", swatch: "#6B7280", dash: DASHED }),
    (Condition::Crown, ConditionStyle { fill: "#FEF3C7", stroke: "#D97706", swatch: "#F59E0B", dash: SOLID }),
    (Condition::Filling, ConditionStyle { fill: "#DBEAFE", stroke: "#2563EB", swatch: "#3B82F6", dash: SOLID }),
    (Condition::RootCanal, ConditionStyle { fill: "#EDE9FE", stroke: "#7C3AED", swatch: "#8B5CF6", dash: SOLID }),
    (Condition::Implant, ConditionStyle { fill: "#E2E8F0", stroke: "#334155", swatch: "#475569", dash: SOLID }),
    (Condition::Bridge, ConditionStyle { fill: "#CCFBF1", stroke: "#0D9488", swatch: "#14B8A6", dash: SOLID }),
    (Condition::Missing, ConditionStyle { fill: "#F9FAFB", stroke: "#D1D5DB", swatch: "#D1D5DB", dash: DASHED }),
];

/// Condition → display label.
pub const CONDITION_LABELS: [(Condition, &str); 9] = [
    (Condition::Healthy, "Healthy"),
    (Condition::Caries, "Caries"),
    (Condition::Extraction, "Extraction"),
    (Condition::Crown, "Crown"),
    (Condition::Filling, "Filling"),
    (Condition::RootCanal, "Root canal"),
    (Condition::Implant, "Implant"),
    (Condition::Bridge, "Bridge"),
    (Condition::Missing, "Missing"),
];

/// Style for a condition, or the healthy style if the table has no entry.
#[must_use]
pub fn style_of(condition: Condition) -> ConditionStyle {
    CONDITION_STYLES
        .iter()
        .find(|(c, _)| *c == condition)
        .map_or(HEALTHY_STYLE, |(_, style)| *style)
}

/// Style for a condition wire name; unknown names get the healthy style.
#[must_use]
pub fn style_for_name(name: &str) -> ConditionStyle {
    style_of(Condition::parse(name))
}

/// Display label for a condition, or the healthy label on a miss.
#[must_use]
pub fn label_of(condition: Condition) -> &'static str {
    CONDITION_LABELS
        .iter()
        .find(|(c, _)| *c == condition)
        .map_or("Healthy", |(_, label)| *label)
}

/// One legend row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub condition: Condition,
    pub label: &'static str,
    pub swatch: &'static str,
}

/// Legend rows for every condition, in legend order.
#[must_use]
pub fn legend() -> Vec<LegendEntry> {
    ALL_CONDITIONS
        .iter()
        .map(|&condition| LegendEntry { condition, label: label_of(condition), swatch: style_of(condition).swatch })
        .collect()
}
