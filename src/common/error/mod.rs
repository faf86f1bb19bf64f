//! Error handling for slide composition and serialization.

// Submodule declarations
mod types;

// Re-exports
pub use types::{Error, Result};
