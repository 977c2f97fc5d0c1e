//! Utility modules for the debugger front-end.

pub mod formatting;

// Re-export commonly used functions
pub use formatting::{format_location, format_memory_mb, get_current_memory_mb};
