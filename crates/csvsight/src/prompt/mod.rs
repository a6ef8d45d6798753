//! Prompt construction for the analysis service.

mod builder;
mod sanitize;

pub use builder::{build_prompt, PromptConfig};
pub use sanitize::sanitize_file_name;
