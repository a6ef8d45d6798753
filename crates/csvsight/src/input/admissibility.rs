//! Pre-flight validation of a candidate upload.
//!
//! These checks run before any parsing and are advisory only: the HTTP
//! boundary re-applies equivalent size and extension checks on its own,
//! since a client-side verdict cannot be trusted as the sole gate.

use serde::{Deserialize, Serialize};

/// Media types accepted alongside a `.csv` extension. Browsers disagree
/// on what they declare for CSV files, hence the Excel and plain-text
/// entries.
const ALLOWED_MEDIA_TYPES: &[&str] = &["text/csv", "application/vnd.ms-excel", "text/plain"];

/// Limits applied to a candidate upload.
#[derive(Debug, Clone)]
pub struct UploadLimits {
    /// Maximum file size in bytes, inclusive.
    pub max_size_bytes: u64,
    /// Allow-listed declared media types.
    pub allowed_media_types: Vec<String>,
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self {
            max_size_bytes: 3 * 1024 * 1024,
            allowed_media_types: ALLOWED_MEDIA_TYPES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl UploadLimits {
    /// Check a candidate upload. Rules are evaluated in order and the
    /// first failure wins:
    ///
    /// 1. `name` must end with `.csv`, case-insensitively.
    /// 2. A non-empty `declared_media_type` must be allow-listed. The
    ///    verdict deliberately reuses the extension message here so the
    ///    caller cannot distinguish the two failure modes.
    /// 3. `size_bytes` must not exceed the limit (inclusive).
    pub fn check(
        &self,
        name: &str,
        declared_media_type: &str,
        size_bytes: u64,
    ) -> AdmissibilityVerdict {
        if !name.to_lowercase().ends_with(".csv") {
            return AdmissibilityVerdict::reject("Please upload a CSV file.");
        }

        if !declared_media_type.is_empty()
            && !self
                .allowed_media_types
                .iter()
                .any(|t| t == declared_media_type)
        {
            return AdmissibilityVerdict::reject("Please upload a CSV file.");
        }

        if size_bytes > self.max_size_bytes {
            return AdmissibilityVerdict::reject("File must be 3MB or less.");
        }

        AdmissibilityVerdict::accept()
    }
}

/// Outcome of an admissibility check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdmissibilityVerdict {
    /// Whether the candidate passed every rule.
    pub valid: bool,
    /// Human-readable reason for rejection, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AdmissibilityVerdict {
    fn accept() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    fn reject(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(message.into()),
        }
    }
}
