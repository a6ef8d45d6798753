//! Quote-aware CSV tokenizer.
//!
//! Two-pass scanner for the supported dialect: comma-delimited,
//! double-quote-escaped, CRLF or LF line endings. Fields may contain
//! embedded delimiters and newlines inside quoted spans. Rows are kept
//! ragged; no padding or truncation against the header width.

use serde::{Deserialize, Serialize};

/// Parsed tabular data: a header row plus ordered data rows.
///
/// Rows are not required to match the header column count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedTable {
    /// Column headers (first non-blank line of the input).
    pub headers: Vec<String>,
    /// Data rows in original order.
    pub rows: Vec<Vec<String>>,
}

impl ParsedTable {
    /// Number of header columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Number of data rows (excluding the header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// True when the input produced no lines at all.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }
}

/// Scanner state shared by both passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteState {
    Unquoted,
    Quoted,
}

impl QuoteState {
    fn toggle(self) -> Self {
        match self {
            QuoteState::Unquoted => QuoteState::Quoted,
            QuoteState::Quoted => QuoteState::Unquoted,
        }
    }
}

/// Parse CSV text into headers and rows.
///
/// The first non-blank line becomes the header row; every subsequent
/// line becomes one data row. Empty input yields an empty table.
pub fn parse(text: &str) -> ParsedTable {
    let lines = split_lines(text);

    if lines.is_empty() {
        return ParsedTable {
            headers: Vec::new(),
            rows: Vec::new(),
        };
    }

    let headers = split_fields(&lines[0]);
    let rows = lines[1..].iter().map(|line| split_fields(line)).collect();

    ParsedTable { headers, rows }
}

/// First pass: split raw text into logical lines.
///
/// A line break (`\n`, or `\r` optionally followed by `\n`) terminates a
/// line only outside a quoted span, so fields may contain literal
/// newlines. Whitespace-only lines are dropped wherever they occur.
fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut state = QuoteState::Unquoted;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                state = state.toggle();
                current.push(ch);
            }
            '\n' | '\r' if state == QuoteState::Unquoted => {
                if ch == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                if !current.trim().is_empty() {
                    lines.push(std::mem::take(&mut current));
                } else {
                    current.clear();
                }
            }
            _ => current.push(ch),
        }
    }

    // Trailing line without a terminating break
    if !current.trim().is_empty() {
        lines.push(current);
    }

    lines
}

/// Second pass: split a logical line into fields.
///
/// Inside a quoted span a doubled `""` decodes to one literal quote and
/// does not close the span. Field values are trimmed of surrounding
/// whitespace before being stored.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut state = QuoteState::Unquoted;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match state {
            QuoteState::Quoted => match ch {
                '"' if chars.peek() == Some(&'"') => {
                    current.push('"');
                    chars.next();
                }
                '"' => state = QuoteState::Unquoted,
                _ => current.push(ch),
            },
            QuoteState::Unquoted => match ch {
                '"' => state = QuoteState::Quoted,
                ',' => {
                    fields.push(current.trim().to_string());
                    current.clear();
                }
                _ => current.push(ch),
            },
        }
    }

    fields.push(current.trim().to_string());
    fields
}
