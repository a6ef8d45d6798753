//! Analysis service providers.
//!
//! A provider takes the built prompt and returns a validated
//! [`AnalysisResult`]. The real provider talks to the Anthropic API;
//! the mock returns canned results for tests and offline runs.
//!
//! [`AnalysisResult`]: crate::analysis::AnalysisResult

mod anthropic;
mod mock;
mod provider;

pub use anthropic::AnthropicProvider;
pub use mock::MockProvider;
pub use provider::{AnalysisProvider, ProviderConfig};
