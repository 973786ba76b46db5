// Public modules
pub mod config;
pub mod error;
pub mod generate;
pub mod report;
pub mod source;
pub mod tags;

// Internal modules - not part of public API
pub(crate) mod templates;

// Re-export common types for convenience
pub use error::{Error, Result};
