//! CLI command implementations.

pub mod analyze;
pub mod serve;

use std::sync::Arc;

use csvsight::{AnalysisProvider, AnthropicProvider, MockProvider, ProviderConfig};

/// Build the configured analysis provider.
pub fn build_provider(
    mock_llm: bool,
    model: Option<String>,
) -> Result<Arc<dyn AnalysisProvider>, Box<dyn std::error::Error>> {
    let mut config = ProviderConfig::default();
    if let Some(model) = model {
        config.model = model;
    }

    if mock_llm {
        Ok(Arc::new(MockProvider::with_config(config)))
    } else {
        Ok(Arc::new(AnthropicProvider::with_config(
            std::env::var("ANTHROPIC_API_KEY")
                .map_err(|_| "ANTHROPIC_API_KEY environment variable not set (or use --mock-llm)")?,
            config,
        )?))
    }
}
