//! Metadata about an ingested upload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::ParsedTable;

/// Metadata recorded for an analyzed upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadMetadata {
    /// Original file name (unsanitized; sanitization applies only to
    /// the prompt text).
    pub file_name: String,
    /// SHA-256 hash of the raw bytes.
    pub hash: String,
    /// Size of the raw input in bytes.
    pub size_bytes: u64,
    /// Number of data rows (excluding header).
    pub row_count: usize,
    /// Number of header columns.
    pub column_count: usize,
    /// When the analysis was performed.
    pub analyzed_at: DateTime<Utc>,
}

impl UploadMetadata {
    /// Build metadata from the raw bytes and the table parsed from them.
    pub fn new(file_name: impl Into<String>, bytes: &[u8], table: &ParsedTable) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        let hash = format!("sha256:{:x}", hasher.finalize());

        Self {
            file_name: file_name.into(),
            hash,
            size_bytes: bytes.len() as u64,
            row_count: table.row_count(),
            column_count: table.column_count(),
            analyzed_at: Utc::now(),
        }
    }
}
