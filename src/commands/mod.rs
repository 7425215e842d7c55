//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and runs the operation against a card source.

pub mod browse;
pub mod completions;
pub mod config;
pub mod list;
pub mod search;

// Re-export execute functions for convenience
pub use browse::execute as browse;
pub use completions::execute as completions;
pub use config::execute as config;
pub use list::execute as list;
pub use search::execute as search;
