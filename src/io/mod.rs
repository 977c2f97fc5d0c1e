//! I/O modules for session loading.

pub mod async_loader;

// Re-export commonly used types
pub use async_loader::{AsyncLoader, LoadResult};
