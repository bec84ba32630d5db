//! Chart configuration supplied by the host page as JSON.
//!
//! Every field has a default, so `{}` is a valid configuration and a host can
//! override a single value (`{"layout": {"tooth_width": 40}}`).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::error::ChartError;
use crate::geometry::ChartLayout;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub layout: ChartLayout,
    /// Draw the condition legend below the chart.
    pub show_legend: bool,
    /// Draw the FDI code next to each tooth.
    pub show_labels: bool,
    /// Height of the legend strip in chart units.
    pub legend_height: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self { layout: ChartLayout::default(), show_legend: true, show_labels: true, legend_height: 28.0 }
    }
}

impl ChartConfig {
    /// Parse a configuration object; missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ChartError::Json` when the text is not valid JSON or a field
    /// has the wrong type.
    pub fn from_json_str(json: &str) -> Result<Self, ChartError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Drawn area: the chart plus the legend strip when enabled.
    #[must_use]
    pub fn content_size(&self) -> (f64, f64) {
        let legend = if self.show_legend { self.legend_height } else { 0.0 };
        (self.layout.width(), self.layout.height() + legend)
    }
}
