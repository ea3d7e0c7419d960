//! Configuration options for the interactive chart.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::frustum::ThresholdMode;

/// Tunables for camera interaction, axis fitting and labelling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Whether the chart accepts mouse and key events.
    pub interactive: bool,

    /// Degrees of rotation per canvas-width of drag, divided by 20.
    pub rotate_gain: f64,

    /// Zoom factor for a drag across the full canvas height.
    pub drag_zoom_base: f64,

    /// Wheel notches needed to double (or halve) the zoom.
    pub zoom_notches_per_doubling: f64,

    /// Upper bound on steps taken by a single viewport-fit search.
    pub fit_max_iterations: usize,

    /// How clipping thresholds are derived from the axis box.
    pub threshold_mode: ThresholdMode,

    /// Font family for axis titles.
    pub label_font_family: String,

    /// Font size for axis titles, in points.
    pub label_font_size: u32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            interactive: true,
            rotate_gain: 10.0,
            drag_zoom_base: 4.0,
            zoom_notches_per_doubling: 10.0,
            fit_max_iterations: 200,
            threshold_mode: ThresholdMode::Shared,
            label_font_family: "Arial".to_string(),
            label_font_size: 14,
        }
    }
}

impl Options {
    /// Parses options from JSON. Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes options to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
