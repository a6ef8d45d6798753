//! Supported chart types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Chart types the analysis service may pick from. Closed enumeration:
/// anything else is rejected at the response-validation boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartType {
    Bar,
    Line,
    Pie,
    Doughnut,
    PolarArea,
    Radar,
}

impl ChartType {
    /// All supported chart types, in prompt-enumeration order.
    pub const ALL: [ChartType; 6] = [
        ChartType::Bar,
        ChartType::Line,
        ChartType::Pie,
        ChartType::Doughnut,
        ChartType::PolarArea,
        ChartType::Radar,
    ];

    /// Wire spelling used in prompts and responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartType::Bar => "bar",
            ChartType::Line => "line",
            ChartType::Pie => "pie",
            ChartType::Doughnut => "doughnut",
            ChartType::PolarArea => "polarArea",
            ChartType::Radar => "radar",
        }
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            ChartType::Bar => "Bar Chart",
            ChartType::Line => "Line Chart",
            ChartType::Pie => "Pie Chart",
            ChartType::Doughnut => "Doughnut Chart",
            ChartType::PolarArea => "Polar Area Chart",
            ChartType::Radar => "Radar Chart",
        }
    }

    /// Whether the chart uses x/y axes.
    pub fn is_cartesian(&self) -> bool {
        matches!(self, ChartType::Bar | ChartType::Line)
    }

    /// Parse a wire spelling into a chart type.
    pub fn from_wire(value: &str) -> Option<ChartType> {
        Self::ALL.iter().copied().find(|t| t.as_str() == value)
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
