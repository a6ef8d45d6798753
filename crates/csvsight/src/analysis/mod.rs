//! Typed analysis results and shape validation of service replies.

mod result;
mod validate;

pub use result::{AnalysisResult, ChartConfig, ColorSpec, Dataset};
pub use validate::validate_response;
