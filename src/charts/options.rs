use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Bar group width used by every column chart.
pub const COLUMN_GROUP_WIDTH: &str = "75%";

/// Legend line budget applied when a legend is shown.
pub const LEGEND_MAX_LINES: u32 = 3;

/// Legend placement understood by the charting engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    None,
    Top,
    Bottom,
    Right,
}

/// Legend block of the composed options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendOptions {
    pub position: LegendPosition,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub max_lines: Option<u32>,
}

/// Vertical-axis block of the composed options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VAxisOptions {
    pub min_value: f64,
}

/// Bar-sizing block of the composed options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarOptions {
    pub group_width: String,
}

/// Resolved display settings for one draw call.
///
/// Constructed fresh per render; never mutated afterwards. Serialized field
/// names are camelCase so the composed options match the options object a
/// JSON-driven charting engine consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub legend: Option<LegendOptions>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub v_axis: Option<VAxisOptions>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub bar: Option<BarOptions>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub is_stacked: Option<bool>,
}

impl ChartOptions {
    /// Pie options: the title plus the surface-derived background, nothing
    /// else.
    #[must_use]
    pub fn pie(title: impl Into<String>, background_color: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            background_color: Some(background_color.into()),
            legend: None,
            v_axis: None,
            bar: None,
            is_stacked: None,
        }
    }

    /// Column options, composed from a fixed base set: hidden legend,
    /// vertical axis pinned to 0, 75% group width, caller's stacking. When
    /// `show_legend` is set the legend moves to the top with a three-line
    /// budget.
    ///
    /// The axis minimum stays 0 regardless of data range; negative values
    /// never earn headroom below zero.
    #[must_use]
    pub fn column(title: impl Into<String>, show_legend: bool, stacked: bool) -> Self {
        let mut legend = LegendOptions {
            position: LegendPosition::None,
            max_lines: None,
        };
        if show_legend {
            legend.position = LegendPosition::Top;
            legend.max_lines = Some(LEGEND_MAX_LINES);
        }

        Self {
            title: title.into(),
            background_color: None,
            legend: Some(legend),
            v_axis: Some(VAxisOptions { min_value: 0.0 }),
            bar: Some(BarOptions {
                group_width: COLUMN_GROUP_WIDTH.to_owned(),
            }),
            is_stacked: Some(stacked),
        }
    }

    /// Serializes the composed options to pretty JSON for hosts that hand
    /// them to an engine or a debug log.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidOptions(format!("failed to serialize options: {e}")))
    }

    /// Deserializes options from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidOptions(format!("failed to parse options: {e}")))
    }
}
