//! Analysis provider trait and configuration.

use crate::analysis::AnalysisResult;
use crate::error::Result;

/// Configuration for analysis providers.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Model to use.
    pub model: String,

    /// Maximum tokens in the reply.
    pub max_tokens: usize,

    /// Temperature for generation (0.0-1.0).
    pub temperature: f64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            model: "claude-haiku-4-5-20251001".to_string(),
            max_tokens: 4096,
            temperature: 0.3,
        }
    }
}

/// Trait for analysis providers.
///
/// Implementations must be thread-safe (Send + Sync) so a single
/// provider can serve concurrent requests. One call produces at most
/// one reply; no retries happen at this layer.
pub trait AnalysisProvider: Send + Sync {
    /// Run the analysis prompt and return a validated result.
    ///
    /// The implementation is responsible for routing the raw reply
    /// through [`validate_response`] before returning it; callers
    /// never see an unvalidated result.
    ///
    /// [`validate_response`]: crate::analysis::validate_response
    fn analyze(&self, prompt: &str) -> Result<AnalysisResult>;

    /// Get the configuration for this provider.
    fn config(&self) -> &ProviderConfig;

    /// Get the name of this provider (for logging/debugging).
    fn name(&self) -> &str;
}
