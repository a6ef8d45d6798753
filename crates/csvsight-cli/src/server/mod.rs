//! HTTP boundary for the analysis pipeline.
//!
//! Re-validates every request independently of any client-side checks:
//! the admissibility verdict a browser computed is advisory only.

mod app;
mod error;
mod handlers;
mod state;

pub use app::{create_router, run_server};
pub use state::AppState;
