//! Mock analysis provider for testing.

use crate::analysis::{AnalysisResult, ChartConfig, ColorSpec, Dataset};
use crate::chart::ChartType;
use crate::error::Result;

use super::provider::{AnalysisProvider, ProviderConfig};

/// Mock provider that returns a predictable result for testing and
/// offline CLI runs.
pub struct MockProvider {
    config: ProviderConfig,
}

impl MockProvider {
    /// Create a new mock provider.
    pub fn new() -> Self {
        Self {
            config: ProviderConfig::default(),
        }
    }

    /// Create with custom configuration.
    pub fn with_config(config: ProviderConfig) -> Self {
        Self { config }
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisProvider for MockProvider {
    fn analyze(&self, prompt: &str) -> Result<AnalysisResult> {
        // Scale the canned dataset to the preview size so callers can
        // assert on it
        let preview_lines = prompt
            .lines()
            .skip_while(|line| !line.starts_with("CSV Data:"))
            .skip(1)
            .take_while(|line| !line.is_empty())
            .count();
        let points = preview_lines.max(1).min(5);

        Ok(AnalysisResult {
            chart_type: ChartType::Bar,
            chart_config: ChartConfig {
                labels: (1..=points).map(|i| format!("Label {}", i)).collect(),
                datasets: vec![Dataset {
                    label: "Mock Dataset".to_string(),
                    data: (1..=points).map(|i| (i * 10) as f64).collect(),
                    background_color: Some(ColorSpec::Many(vec![
                        "#6b7280".to_string(),
                        "#9ca3af".to_string(),
                        "#d1d5db".to_string(),
                    ])),
                    border_color: Some(ColorSpec::Single("#4b5563".to_string())),
                    border_width: Some(1.0),
                }],
            },
            summary: "Mock analysis: the data shows a steady upward trend across the \
                      previewed rows, with no notable outliers."
                .to_string(),
        })
    }

    fn config(&self) -> &ProviderConfig {
        &self.config
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_result_is_valid_shape() {
        let provider = MockProvider::new();
        let result = provider.analyze("CSV Data:\na,b\n1,2\n").unwrap();

        assert_eq!(result.chart_type, ChartType::Bar);
        assert!(!result.chart_config.labels.is_empty());
        assert_eq!(
            result.chart_config.labels.len(),
            result.chart_config.datasets[0].data.len()
        );
        assert!(!result.summary.is_empty());
    }

    #[test]
    fn test_mock_is_deterministic() {
        let provider = MockProvider::new();
        let a = provider.analyze("CSV Data:\nx\n1\n").unwrap();
        let b = provider.analyze("CSV Data:\nx\n1\n").unwrap();
        assert_eq!(a.summary, b.summary);
        assert_eq!(a.chart_config.labels, b.chart_config.labels);
    }
}
