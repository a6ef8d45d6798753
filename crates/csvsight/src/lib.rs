//! Csvsight: CSV ingestion and prompt-construction pipeline for chart
//! analysis.
//!
//! Csvsight turns a user-supplied CSV document into a normalized table
//! and builds a bounded, injection-resistant natural-language request
//! to an external analysis service, then validates the shape of the
//! service's reply before anything else trusts it.
//!
//! # Pipeline
//!
//! raw bytes → admissibility check → text → tokenizer → table →
//! prompt builder → bounded prompt → provider → validated result
//!
//! # Example
//!
//! ```no_run
//! use csvsight::{Csvsight, MockProvider};
//!
//! let csvsight = Csvsight::new().with_provider(MockProvider::new());
//! let result = csvsight
//!     .analyze_text("region,sales\nNorth,100\nSouth,80", "sales.csv")
//!     .unwrap();
//!
//! println!("Chart: {}", result.chart_type.label());
//! println!("{}", result.summary);
//! ```

pub mod analysis;
pub mod chart;
pub mod error;
pub mod input;
pub mod llm;
pub mod prompt;

mod csvsight;

pub use crate::csvsight::{AnalysisReport, Csvsight, CsvsightConfig};
pub use analysis::{AnalysisResult, ChartConfig, ColorSpec, Dataset};
pub use chart::ChartType;
pub use error::{CsvsightError, Result};
pub use input::{parse, AdmissibilityVerdict, ParsedTable, UploadLimits, UploadMetadata};
pub use llm::{AnalysisProvider, AnthropicProvider, MockProvider, ProviderConfig};
pub use prompt::{build_prompt, sanitize_file_name, PromptConfig};
