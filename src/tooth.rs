//! FDI tooth notation: identifiers, quadrants, arches and tooth types.
//!
//! A tooth identifier is `quadrant * 10 + position`, with the quadrant in
//! `1..=4` and the position in `1..=8` counted outward from the midline.
//! Only those 32 codes exist; `ToothId` cannot hold anything else.
//!
//! The chart order is fixed and mirrors outward from the central incisors:
//! upper-right 18→11, upper-left 21→28, lower-left 31→38, lower-right 48→41.

#[cfg(test)]
#[path = "tooth_test.rs"]
mod tooth_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::TEETH_PER_QUADRANT;
use crate::error::ChartError;

/// A valid FDI tooth identifier (11-18, 21-28, 31-38, 41-48).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct ToothId(u8);

impl ToothId {
    /// Build an identifier from its numeric code, or `None` if the code is
    /// not one of the 32 FDI permanent teeth.
    #[must_use]
    pub fn new(code: u8) -> Option<Self> {
        let quadrant = code / 10;
        let position = code % 10;
        if (1..=4).contains(&quadrant) && (1..=TEETH_PER_QUADRANT).contains(&position) {
            Some(Self(code))
        } else {
            None
        }
    }

    /// Identifier for a position within a quadrant.
    ///
    /// Positions outside `1..=8` yield `None`.
    #[must_use]
    pub fn from_parts(quadrant: Quadrant, position: u8) -> Option<Self> {
        Self::new(quadrant.digit() * 10 + position)
    }

    /// The numeric FDI code.
    #[must_use]
    pub fn code(self) -> u8 {
        self.0
    }

    /// The quadrant digit's quadrant.
    #[must_use]
    pub fn quadrant(self) -> Quadrant {
        match self.0 / 10 {
            1 => Quadrant::UpperRight,
            2 => Quadrant::UpperLeft,
            3 => Quadrant::LowerLeft,
            _ => Quadrant::LowerRight,
        }
    }

    /// Position within the quadrant, 1 (central incisor) to 8 (third molar).
    #[must_use]
    pub fn position(self) -> u8 {
        self.0 % 10
    }

    /// Upper or lower arch.
    #[must_use]
    pub fn arch(self) -> Arch {
        self.quadrant().arch()
    }

    /// Tooth type derived from the position digit.
    #[must_use]
    pub fn tooth_type(self) -> ToothType {
        type_of(self.position())
    }

    /// Anatomical name of the position, e.g. `"first molar"`.
    #[must_use]
    pub fn position_name(self) -> &'static str {
        match self.position() {
            1 => "central incisor",
            2 => "lateral incisor",
            3 => "canine",
            4 => "first premolar",
            5 => "second premolar",
            6 => "first molar",
            7 => "second molar",
            _ => "third molar",
        }
    }
}

impl fmt::Display for ToothId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for ToothId {
    type Error = ChartError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match u8::try_from(value) {
            Ok(code) => Self::new(code).ok_or(ChartError::InvalidToothId(value)),
            Err(_) => Err(ChartError::InvalidToothId(value)),
        }
    }
}

impl From<ToothId> for u8 {
    fn from(id: ToothId) -> Self {
        id.0
    }
}

/// One of the four quadrants of the permanent dentition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    /// Quadrant 1, the patient's upper right.
    UpperRight,
    /// Quadrant 2, the patient's upper left.
    UpperLeft,
    /// Quadrant 3, the patient's lower left.
    LowerLeft,
    /// Quadrant 4, the patient's lower right.
    LowerRight,
}

/// Quadrants in chart order.
pub const CHART_ORDER: [Quadrant; 4] = [
    Quadrant::UpperRight,
    Quadrant::UpperLeft,
    Quadrant::LowerLeft,
    Quadrant::LowerRight,
];

impl Quadrant {
    /// The FDI quadrant digit.
    #[must_use]
    pub fn digit(self) -> u8 {
        match self {
            Self::UpperRight => 1,
            Self::UpperLeft => 2,
            Self::LowerLeft => 3,
            Self::LowerRight => 4,
        }
    }

    #[must_use]
    pub fn arch(self) -> Arch {
        match self {
            Self::UpperRight | Self::UpperLeft => Arch::Upper,
            Self::LowerLeft | Self::LowerRight => Arch::Lower,
        }
    }

    /// Whether the quadrant sits on the patient's right side. On the chart the
    /// patient's right is drawn on the viewer's left, so the midline lies to
    /// the right of these teeth.
    #[must_use]
    pub fn is_patient_right(self) -> bool {
        matches!(self, Self::UpperRight | Self::LowerRight)
    }

    /// Human-readable caption.
    #[must_use]
    pub fn caption(self) -> &'static str {
        match self {
            Self::UpperRight => "upper right",
            Self::UpperLeft => "upper left",
            Self::LowerLeft => "lower left",
            Self::LowerRight => "lower right",
        }
    }

    /// The quadrant's eight teeth in chart order: descending (8→1) on the
    /// patient's right, ascending (1→8) on the patient's left.
    #[must_use]
    pub fn teeth(self) -> [ToothId; 8] {
        let base = self.digit() * 10;
        let mut out = [ToothId(base + 1); 8];
        for (i, slot) in out.iter_mut().enumerate() {
            // `i` is below 8, so the cast is lossless.
            #[allow(clippy::cast_possible_truncation)]
            let step = i as u8;
            let position = if self.is_patient_right() { TEETH_PER_QUADRANT - step } else { step + 1 };
            *slot = ToothId(base + position);
        }
        out
    }
}

/// Upper (maxillary) or lower (mandibular) arch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
    Upper,
    Lower,
}

/// Broad tooth shape class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToothType {
    Incisor,
    Canine,
    Premolar,
    Molar,
}

impl ToothType {
    /// Number of roots drawn for this type.
    #[must_use]
    pub fn root_count(self) -> usize {
        match self {
            Self::Incisor | Self::Canine => 1,
            Self::Premolar => 2,
            Self::Molar => 3,
        }
    }
}

/// Tooth type for a position digit: 1-2 incisor, 3 canine, 4-5 premolar,
/// everything above molar.
#[must_use]
pub fn type_of(position: u8) -> ToothType {
    match position % 10 {
        0..=2 => ToothType::Incisor,
        3 => ToothType::Canine,
        4 | 5 => ToothType::Premolar,
        _ => ToothType::Molar,
    }
}

/// All 32 teeth in chart order.
pub fn all_teeth() -> impl Iterator<Item = ToothId> {
    CHART_ORDER.into_iter().flat_map(Quadrant::teeth)
}
