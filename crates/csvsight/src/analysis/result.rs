//! Typed representation of an accepted analysis reply.
//!
//! These structs are only ever produced by [`validate_response`]; the
//! rest of the system never touches the raw reply.
//!
//! [`validate_response`]: super::validate_response

use serde::{Deserialize, Serialize};

use crate::chart::ChartType;

/// A validated reply from the analysis service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Chosen chart type (member of the closed enumeration).
    #[serde(rename = "chartType")]
    pub chart_type: ChartType,

    /// Chart.js-shaped configuration.
    #[serde(rename = "chartConfig")]
    pub chart_config: ChartConfig,

    /// Executive summary of the data.
    pub summary: String,
}

/// Labels and datasets for the chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// One dataset within the chart configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,

    #[serde(rename = "backgroundColor", skip_serializing_if = "Option::is_none")]
    pub background_color: Option<ColorSpec>,

    #[serde(rename = "borderColor", skip_serializing_if = "Option::is_none")]
    pub border_color: Option<ColorSpec>,

    #[serde(rename = "borderWidth", skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
}

/// A color value on the wire: either one color or one per data point.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Single(String),
    Many(Vec<String>),
}
