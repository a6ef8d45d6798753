//! Request handlers.

mod analyze;

pub use analyze::analyze;
