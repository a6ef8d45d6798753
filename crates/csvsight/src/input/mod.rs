//! Upload admissibility checks and CSV tokenization.

mod admissibility;
mod source;
mod tokenizer;

pub use admissibility::{AdmissibilityVerdict, UploadLimits};
pub use source::UploadMetadata;
pub use tokenizer::{parse, ParsedTable};
