//! Chart-wide aggregates and tooth descriptions for the host's side panels.

#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::doc::{ChartRecords, Condition};
use crate::style::label_of;
use crate::tooth::{ToothId, all_teeth};

/// Counts over all 32 teeth, absent records counted as healthy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChartSummary {
    /// Teeth per condition. Conditions with no teeth are omitted.
    pub counts: BTreeMap<Condition, usize>,
    /// Teeth with a planned treatment, in FDI order.
    pub treatment_plan: Vec<(ToothId, String)>,
    /// Surface findings across the chart.
    pub annotated_surfaces: usize,
}

impl ChartSummary {
    #[must_use]
    pub fn count(&self, condition: Condition) -> usize {
        self.counts.get(&condition).copied().unwrap_or(0)
    }
}

#[must_use]
pub fn summarize(records: &ChartRecords) -> ChartSummary {
    let mut summary = ChartSummary::default();
    let mut ids: Vec<ToothId> = all_teeth().collect();
    ids.sort_unstable();
    for id in ids {
        *summary.counts.entry(records.condition_of(id)).or_insert(0) += 1;
        let Some(record) = records.get(id) else {
            continue;
        };
        summary.annotated_surfaces += record.surfaces.len();
        if let Some(plan) = record.treatment_needed.as_deref().filter(|p| !p.trim().is_empty()) {
            summary.treatment_plan.push((id, plan.to_owned()));
        }
    }
    summary
}

/// One-line description, e.g. `"36 lower-left first molar: Caries (occlusal: deep)"`.
#[must_use]
pub fn describe(id: ToothId, records: &ChartRecords) -> String {
    let record = records.record_or_default(id);
    let mut out = format!(
        "{id} {} {}: {}",
        id.quadrant().caption().replace(' ', "-"),
        id.position_name(),
        label_of(record.condition())
    );
    if !record.surfaces.is_empty() {
        let parts: Vec<String> = record
            .surfaces
            .iter()
            .map(|(surface, detail)| match detail {
                Some(d) => format!("{}: {d}", surface.as_str()),
                None => surface.as_str().to_owned(),
            })
            .collect();
        out.push_str(&format!(" ({})", parts.join(", ")));
    }
    if let Some(ref plan) = record.treatment_needed {
        out.push_str(&format!("; planned: {plan}"));
    }
    out
}
