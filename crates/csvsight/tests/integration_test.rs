//! Integration tests for the csvsight pipeline.

use std::io::Write;
use tempfile::NamedTempFile;

use csvsight::{
    ChartType, Csvsight, CsvsightError, MockProvider, PromptConfig, CsvsightConfig, UploadLimits,
};

/// Helper to create a temporary file with given content.
fn create_test_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".csv").expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

// =============================================================================
// End-to-End Pipeline Tests
// =============================================================================

#[test]
fn test_analyze_text_end_to_end() {
    let csvsight = Csvsight::new().with_provider(MockProvider::new());
    let result = csvsight
        .analyze_text("region,sales\nNorth,100\nSouth,80", "sales.csv")
        .expect("Analysis failed");

    assert_eq!(result.chart_type, ChartType::Bar);
    assert!(!result.chart_config.datasets.is_empty());
    assert!(!result.summary.is_empty());
}

#[test]
fn test_analyze_empty_text_rejected() {
    let csvsight = Csvsight::new().with_provider(MockProvider::new());
    let err = csvsight.analyze_text("", "empty.csv").unwrap_err();

    assert!(matches!(err, CsvsightError::EmptyData(_)));
    assert!(err.to_string().contains("CSV file appears to be empty"));
}

#[test]
fn test_analyze_without_provider_fails() {
    let csvsight = Csvsight::new();
    let err = csvsight.analyze_text("a,b\n1,2", "x.csv").unwrap_err();
    assert!(matches!(err, CsvsightError::Config(_)));
}

#[test]
fn test_analyze_file_produces_metadata() {
    let file = create_test_file("id,name\n1,Alice\n2,Bob\n3,Carol\n");
    let csvsight = Csvsight::new().with_provider(MockProvider::new());

    let report = csvsight.analyze_file(file.path()).expect("Analysis failed");

    assert_eq!(report.metadata.row_count, 3);
    assert_eq!(report.metadata.column_count, 2);
    assert!(report.metadata.hash.starts_with("sha256:"));
    assert!(report.metadata.file_name.ends_with(".csv"));
}

#[test]
fn test_analyze_file_wrong_extension_rejected() {
    let mut file = NamedTempFile::with_suffix(".txt").expect("Failed to create temp file");
    file.write_all(b"a,b\n1,2\n").expect("Failed to write");

    let csvsight = Csvsight::new().with_provider(MockProvider::new());
    let err = csvsight.analyze_file(file.path()).unwrap_err();

    assert!(matches!(err, CsvsightError::InvalidUpload(_)));
    assert!(err.to_string().contains("Please upload a CSV file."));
}

#[test]
fn test_analyze_file_over_size_limit_rejected() {
    let file = create_test_file("a,b\n1,2\n3,4\n");

    let config = CsvsightConfig {
        limits: UploadLimits {
            max_size_bytes: 4,
            ..UploadLimits::default()
        },
        prompt: PromptConfig::default(),
    };
    let csvsight = Csvsight::with_config(config).with_provider(MockProvider::new());

    let err = csvsight.analyze_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("File must be 3MB or less."));
}

#[test]
fn test_analyze_file_missing_path() {
    let csvsight = Csvsight::new().with_provider(MockProvider::new());
    let err = csvsight.analyze_file("/nonexistent/data.csv").unwrap_err();
    assert!(matches!(err, CsvsightError::Io { .. }));
}

// =============================================================================
// Prompt/Table Interaction Tests
// =============================================================================

#[test]
fn test_prompt_preview_truncates_but_table_does_not() {
    let mut text = String::from("id\n");
    for i in 0..120 {
        text.push_str(&format!("{}\n", i));
    }

    let csvsight = Csvsight::new();
    let table = csvsight.parse_text(&text);
    assert_eq!(table.row_count(), 120);

    let prompt = csvsight.prompt_for(&table, "big.csv");
    assert!(prompt.contains("120 total rows"));
    assert!(prompt.contains("first 50 rows"));
    // The table the caller holds is untouched by prompt truncation
    assert_eq!(table.row_count(), 120);
}

#[test]
fn test_quoted_data_flows_into_prompt_unescaped() {
    let csvsight = Csvsight::new();
    let table = csvsight.parse_text("Name,Addr\nAlice,\"123 Main St, Apt 4\"");
    let prompt = csvsight.prompt_for(&table, "addr.csv");

    // The decoded field is embedded as-is, comma included
    assert!(prompt.contains("Alice,123 Main St, Apt 4"));
}

#[test]
fn test_check_upload_delegates_to_limits() {
    let csvsight = Csvsight::new();
    assert!(csvsight.check_upload("data.CSV", "text/csv", 0).valid);
    assert!(!csvsight.check_upload("data.csv.exe", "text/csv", 0).valid);
}
