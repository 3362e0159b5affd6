//! Command-line argument parsing and handling.

pub mod coverage;
pub mod definition;
pub mod language;
pub mod render;
pub mod translate;
pub mod utils;

// Re-export commonly used items
pub use definition::{Args, process_args};
pub use utils::determine_log_level;
