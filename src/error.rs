//! Errors raised while ingesting chart data or configuration.
//!
//! Drawing never fails on data: every malformed record is defaulted. These
//! errors only surface when the host hands over input that cannot be parsed
//! at all.

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("invalid FDI tooth identifier: {0}")]
    InvalidToothId(i64),
    #[error("malformed chart json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected a json object keyed by tooth identifier")]
    NotAnObject,
}
