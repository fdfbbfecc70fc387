// Public modules
pub mod error;
pub mod renamer;
pub mod scan;

// Re-export common types for convenience
pub use error::{Error, Result};
pub use renamer::{FileOutcome, FileReport, RunReport, SkipReason};
