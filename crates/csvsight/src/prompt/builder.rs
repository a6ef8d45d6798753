//! Builds the bounded analysis prompt from a parsed table.

use crate::input::ParsedTable;

use super::sanitize::sanitize_file_name;

/// Caps applied when serializing a table into the prompt.
#[derive(Debug, Clone)]
pub struct PromptConfig {
    /// Maximum data rows embedded in the preview.
    pub max_preview_rows: usize,
    /// Maximum length of the sanitized file name, in characters.
    pub max_file_name_len: usize,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            max_preview_rows: 50,
            max_file_name_len: 100,
        }
    }
}

/// Build the analysis prompt for a parsed table.
///
/// Pure function of its inputs and the config caps. The preview embeds
/// at most `max_preview_rows` rows; the table itself is never mutated,
/// and the full CSV text sent to the HTTP boundary is unaffected by
/// this truncation.
pub fn build_prompt(table: &ParsedTable, file_name: &str, config: &PromptConfig) -> String {
    let file_name = sanitize_file_name(file_name, config.max_file_name_len);

    let total_rows = table.rows.len();
    let preview_rows = table.rows.iter().take(config.max_preview_rows);

    let mut preview_lines = vec![table.headers.join(",")];
    preview_lines.extend(preview_rows.map(|row| row.join(",")));
    let csv_preview = preview_lines.join("\n");

    let truncation_note = if total_rows > config.max_preview_rows {
        format!(
            "\n\nNote: This CSV contains {} total rows. Only the first {} rows are shown above.",
            total_rows, config.max_preview_rows
        )
    } else {
        String::new()
    };

    format!(
        r##"You are a data analyst. Analyze the following CSV data from a file named "{file_name}" and provide:

1. The most appropriate chart type from: bar, line, pie, doughnut, polarArea, radar
2. A Chart.js chart configuration with labels and datasets
3. An executive summary of the data (2-3 paragraphs)

CSV Data:
{csv_preview}{truncation_note}

Respond with valid JSON in this exact format (no markdown code blocks):
{{
  "chartType": "bar",
  "chartConfig": {{
    "labels": ["Label1", "Label2"],
    "datasets": [
      {{
        "label": "Dataset Name",
        "data": [10, 20],
        "backgroundColor": ["#6b7280", "#9ca3af", "#d1d5db"],
        "borderColor": ["#4b5563", "#6b7280", "#9ca3af"],
        "borderWidth": 1
      }}
    ]
  }},
  "summary": "Executive summary here..."
}}

Requirements for the chart configuration:
- Use a muted, professional color palette (grays, slate blues, muted teals)
- Ensure tooltips will work by providing properly structured data
- For pie/doughnut charts, use an array of colors matching the number of data points
- Choose the chart type that best represents the data relationships
- The summary should highlight key trends, outliers, and actionable insights"##
    )
}
