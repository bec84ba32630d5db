//! Document model: tooth records, conditions, surfaces, and the sparse store.
//!
//! Records arrive from the host as a JSON object keyed by FDI code
//! (`{"36": {"condition": "caries", "surfaces": {"occlusal": "deep"}}}`).
//! Ingestion is lenient and field by field: unknown conditions become
//! `healthy`, unknown surface keys and invalid tooth codes are dropped, and a
//! field of the wrong type is treated as absent without touching the rest of
//! the record. A tooth with no record is a healthy, unannotated tooth.
//!
//! The chart itself only reads from `ChartRecords`. `apply_partial` exists for
//! the owning context, which mutates records after a click and hands the
//! updated snapshot back.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::ChartError;
use crate::tooth::ToothId;

/// Clinical state of a whole tooth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    #[default]
    Healthy,
    Caries,
    Extraction,
    Crown,
    Filling,
    RootCanal,
    Implant,
    Bridge,
    Missing,
}

/// Every condition, in legend order.
pub const ALL_CONDITIONS: [Condition; 9] = [
    Condition::Healthy,
    Condition::Caries,
    Condition::Extraction,
    Condition::Crown,
    Condition::Filling,
    Condition::RootCanal,
    Condition::Implant,
    Condition::Bridge,
    Condition::Missing,
];

impl Condition {
    /// Wire name, e.g. `"root_canal"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Caries => "caries",
            Self::Extraction => "extraction",
            Self::Crown => "crown",
            Self::Filling => "filling",
            Self::RootCanal => "root_canal",
            Self::Implant => "implant",
            Self::Bridge => "bridge",
            Self::Missing => "missing",
        }
    }

    /// Resolve an exact wire name. Anything else resolves to `Healthy`.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match ALL_CONDITIONS.iter().find(|c| c.as_str() == name) {
            Some(condition) => *condition,
            None => {
                tracing::debug!(condition = name, "unknown tooth condition, treating as healthy");
                Self::Healthy
            }
        }
    }

    /// Whether the tooth is gone and gets a crossing mark.
    #[must_use]
    pub fn is_crossed(self) -> bool {
        matches!(self, Self::Extraction | Self::Missing)
    }
}

impl<'de> Deserialize<'de> for Condition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Ok(raw.as_str().map_or(Self::Healthy, Self::parse))
    }
}

/// A clinical tooth face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Surface {
    /// Face toward the midline.
    Mesial,
    /// Face away from the midline.
    Distal,
    /// Biting face.
    Occlusal,
    /// Face toward the lips or cheek.
    Vestibular,
    /// Face toward the tongue or palate.
    Lingual,
}

impl Surface {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mesial => "mesial",
            Self::Distal => "distal",
            Self::Occlusal => "occlusal",
            Self::Vestibular => "vestibular",
            Self::Lingual => "lingual",
        }
    }

    /// Resolve an exact surface key.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        [Self::Mesial, Self::Distal, Self::Occlusal, Self::Vestibular, Self::Lingual]
            .into_iter()
            .find(|s| s.as_str() == name)
    }
}

/// Surface findings: a present key marks a finding, the value is the
/// optional sub-condition.
pub type SurfaceMap = BTreeMap<Surface, Option<String>>;

/// Clinical record for one tooth.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToothRecord {
    /// Whole-tooth condition; absent means healthy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
    /// Per-surface findings.
    #[serde(default, deserialize_with = "deserialize_surfaces", skip_serializing_if = "BTreeMap::is_empty")]
    pub surfaces: SurfaceMap,
    /// Free-text clinical note.
    #[serde(default, deserialize_with = "deserialize_text", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Planned treatment, if any.
    #[serde(default, deserialize_with = "deserialize_text", skip_serializing_if = "Option::is_none")]
    pub treatment_needed: Option<String>,
}

impl ToothRecord {
    /// Record with just a condition.
    #[must_use]
    pub fn with_condition(condition: Condition) -> Self {
        Self { condition: Some(condition), ..Self::default() }
    }

    /// Effective condition, defaulting to healthy.
    #[must_use]
    pub fn condition(&self) -> Condition {
        self.condition.unwrap_or_default()
    }

    #[must_use]
    pub fn has_surface(&self, surface: Surface) -> bool {
        self.surfaces.contains_key(&surface)
    }
}

/// Lenient surface decoding: non-object input yields no findings and unknown
/// keys are skipped.
fn deserialize_surfaces<'de, D: Deserializer<'de>>(deserializer: D) -> Result<SurfaceMap, D::Error> {
    let raw = Value::deserialize(deserializer)?;
    let mut out = SurfaceMap::new();
    merge_surfaces(&mut out, &raw, false);
    Ok(out)
}

/// Lenient text decoding: anything but a string is treated as absent.
fn deserialize_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(text) => Ok(Some(text)),
        Value::Null => Ok(None),
        other => {
            tracing::debug!(value = %other, "ignoring non-text record field");
            Ok(None)
        }
    }
}

/// Merge surface findings from a JSON object into `target`.
///
/// String values become sub-conditions; other values mark presence. With
/// `null_deletes`, a `null` value removes the surface instead. Returns false
/// when `raw` is not an object.
fn merge_surfaces(target: &mut SurfaceMap, raw: &Value, null_deletes: bool) -> bool {
    let Some(entries) = raw.as_object() else {
        return false;
    };
    for (key, value) in entries {
        let Some(surface) = Surface::parse(key) else {
            tracing::debug!(surface = %key, "ignoring unknown tooth surface");
            continue;
        };
        if null_deletes && value.is_null() {
            target.remove(&surface);
        } else {
            target.insert(surface, value.as_str().map(str::to_owned));
        }
    }
    true
}

/// Sparse update for a tooth record. Only present fields are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartialToothRecord {
    /// New condition, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
    /// Surface keys to merge or remove (null values delete keys).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surfaces: Option<Value>,
    /// New note; an empty string clears it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// New planned treatment; an empty string clears it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treatment_needed: Option<String>,
}

fn parse_tooth_key(key: &str) -> Option<ToothId> {
    match key.trim().parse::<u8>() {
        Ok(code) => ToothId::new(code),
        Err(_) => None,
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() { None } else { Some(value.to_owned()) }
}

/// In-memory store of tooth records keyed by FDI identifier.
#[derive(Debug, Clone, Default)]
pub struct ChartRecords {
    records: HashMap<ToothId, ToothRecord>,
}

impl ChartRecords {
    /// Create an empty store (every tooth healthy).
    #[must_use]
    pub fn new() -> Self {
        Self { records: HashMap::new() }
    }

    /// Parse a JSON object keyed by FDI code.
    ///
    /// # Errors
    ///
    /// Returns `ChartError::Json` for malformed JSON and
    /// `ChartError::NotAnObject` when the top level is not an object.
    /// Individual bad entries are dropped, not reported.
    pub fn from_json_str(json: &str) -> Result<Self, ChartError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json_value(&value)
    }

    /// Build a store from an already-parsed JSON object keyed by FDI code.
    ///
    /// # Errors
    ///
    /// Returns `ChartError::NotAnObject` when `value` is not an object. An
    /// entry that is not itself an object is dropped; a bad field inside an
    /// entry only loses that field.
    pub fn from_json_value(value: &Value) -> Result<Self, ChartError> {
        let entries = value.as_object().ok_or(ChartError::NotAnObject)?;
        let mut store = Self::new();
        for (key, raw) in entries {
            let Some(id) = parse_tooth_key(key) else {
                tracing::warn!(key = %key, "dropping record with invalid tooth identifier");
                continue;
            };
            match ToothRecord::deserialize(raw) {
                Ok(record) => store.insert(id, record),
                Err(e) => tracing::warn!(tooth = %id, error = %e, "dropping non-object tooth record"),
            }
        }
        Ok(store)
    }

    /// Insert or replace the record for a tooth.
    pub fn insert(&mut self, id: ToothId, record: ToothRecord) {
        self.records.insert(id, record);
    }

    /// Remove a tooth's record, returning it if it was present.
    pub fn remove(&mut self, id: ToothId) -> Option<ToothRecord> {
        self.records.remove(&id)
    }

    #[must_use]
    pub fn get(&self, id: ToothId) -> Option<&ToothRecord> {
        self.records.get(&id)
    }

    /// The tooth's record, or a default healthy record when absent.
    #[must_use]
    pub fn record_or_default(&self, id: ToothId) -> ToothRecord {
        self.records.get(&id).cloned().unwrap_or_default()
    }

    /// Effective condition of a tooth.
    #[must_use]
    pub fn condition_of(&self, id: ToothId) -> Condition {
        self.records.get(&id).map_or(Condition::Healthy, ToothRecord::condition)
    }

    /// Apply a partial update, creating the record if the tooth had none.
    /// Returns false, leaving the record untouched, if `surfaces` is present
    /// but not an object.
    pub fn apply_partial(&mut self, id: ToothId, partial: &PartialToothRecord) -> bool {
        let mut record = self.record_or_default(id);
        if let Some(ref surfaces) = partial.surfaces {
            if !merge_surfaces(&mut record.surfaces, surfaces, true) {
                return false;
            }
        }
        if let Some(condition) = partial.condition {
            record.condition = Some(condition);
        }
        if let Some(ref notes) = partial.notes {
            record.notes = non_empty(notes);
        }
        if let Some(ref treatment) = partial.treatment_needed {
            record.treatment_needed = non_empty(treatment);
        }
        self.records.insert(id, record);
        true
    }

    /// Replace all records with a full snapshot.
    pub fn load_snapshot(&mut self, records: impl IntoIterator<Item = (ToothId, ToothRecord)>) {
        self.records.clear();
        self.records.extend(records);
    }

    /// Iterate over stored records in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (ToothId, &ToothRecord)> {
        self.records.iter().map(|(id, record)| (*id, record))
    }

    /// Serialize the store back to a JSON object keyed by FDI code.
    ///
    /// # Errors
    ///
    /// Returns `ChartError::Json` if a record fails to serialize.
    pub fn to_json_value(&self) -> Result<Value, ChartError> {
        let mut ids: Vec<ToothId> = self.records.keys().copied().collect();
        ids.sort_unstable();
        let mut out = serde_json::Map::new();
        for id in ids {
            if let Some(record) = self.records.get(&id) {
                out.insert(id.to_string(), serde_json::to_value(record)?);
            }
        }
        Ok(Value::Object(out))
    }

    /// Number of teeth with a stored record.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no tooth has a record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<(ToothId, ToothRecord)> for ChartRecords {
    fn from_iter<I: IntoIterator<Item = (ToothId, ToothRecord)>>(iter: I) -> Self {
        Self { records: iter.into_iter().collect() }
    }
}
