//! Main Csvsight struct and public API.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisResult;
use crate::error::{CsvsightError, Result};
use crate::input::{parse, AdmissibilityVerdict, ParsedTable, UploadLimits, UploadMetadata};
use crate::llm::AnalysisProvider;
use crate::prompt::{build_prompt, PromptConfig};

/// Configuration for the analysis pipeline.
#[derive(Debug, Clone, Default)]
pub struct CsvsightConfig {
    /// Upload admissibility limits.
    pub limits: UploadLimits,
    /// Prompt construction caps.
    pub prompt: PromptConfig,
}

/// Result of analyzing an upload: source metadata plus the validated
/// service reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Metadata about the ingested upload.
    pub metadata: UploadMetadata,
    /// The validated analysis result.
    pub result: AnalysisResult,
}

/// The analysis pipeline: admissibility check, tokenize, build prompt,
/// call the provider, validate the reply.
pub struct Csvsight {
    config: CsvsightConfig,
    provider: Option<Arc<dyn AnalysisProvider>>,
}

impl Csvsight {
    /// Create a new pipeline with default configuration.
    pub fn new() -> Self {
        Self::with_config(CsvsightConfig::default())
    }

    /// Create a pipeline with custom configuration.
    pub fn with_config(config: CsvsightConfig) -> Self {
        Self {
            config,
            provider: None,
        }
    }

    /// Attach an analysis provider.
    pub fn with_provider(mut self, provider: impl AnalysisProvider + 'static) -> Self {
        self.provider = Some(Arc::new(provider));
        self
    }

    /// Attach an already-shared analysis provider.
    pub fn with_shared_provider(mut self, provider: Arc<dyn AnalysisProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// The configured limits.
    pub fn limits(&self) -> &UploadLimits {
        &self.config.limits
    }

    /// Run the admissibility check on a candidate upload descriptor.
    pub fn check_upload(
        &self,
        name: &str,
        declared_media_type: &str,
        size_bytes: u64,
    ) -> AdmissibilityVerdict {
        self.config.limits.check(name, declared_media_type, size_bytes)
    }

    /// Tokenize CSV text into a table.
    pub fn parse_text(&self, text: &str) -> ParsedTable {
        parse(text)
    }

    /// Build the analysis prompt for a table.
    pub fn prompt_for(&self, table: &ParsedTable, file_name: &str) -> String {
        build_prompt(table, file_name, &self.config.prompt)
    }

    /// Analyze CSV text end to end: parse, reject empty input, build
    /// the prompt, and call the provider. Returns only the validated
    /// result; the parsed table and prompt are discarded afterwards.
    pub fn analyze_text(&self, csv_text: &str, file_name: &str) -> Result<AnalysisResult> {
        let table = parse(csv_text);

        if table.headers.is_empty() {
            return Err(CsvsightError::EmptyData(
                "CSV file appears to be empty".to_string(),
            ));
        }

        let prompt = build_prompt(&table, file_name, &self.config.prompt);
        self.provider()?.analyze(&prompt)
    }

    /// Analyze a CSV file on disk: admissibility check against the
    /// real size and name, then the text pipeline, plus metadata for
    /// the report.
    pub fn analyze_file(&self, path: impl AsRef<Path>) -> Result<AnalysisReport> {
        let path = path.as_ref();

        let bytes = std::fs::read(path).map_err(|e| CsvsightError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let file_name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let verdict = self
            .config
            .limits
            .check(&file_name, "", bytes.len() as u64);
        if let Some(error) = verdict.error {
            return Err(CsvsightError::InvalidUpload(error));
        }

        let text = String::from_utf8_lossy(&bytes);
        let table = parse(&text);

        if table.headers.is_empty() {
            return Err(CsvsightError::EmptyData(
                "CSV file appears to be empty".to_string(),
            ));
        }

        let metadata = UploadMetadata::new(file_name.clone(), &bytes, &table);
        let prompt = build_prompt(&table, &file_name, &self.config.prompt);
        let result = self.provider()?.analyze(&prompt)?;

        Ok(AnalysisReport { metadata, result })
    }

    fn provider(&self) -> Result<&Arc<dyn AnalysisProvider>> {
        self.provider.as_ref().ok_or_else(|| {
            CsvsightError::Config("No analysis provider configured".to_string())
        })
    }
}

impl Default for Csvsight {
    fn default() -> Self {
        Self::new()
    }
}
