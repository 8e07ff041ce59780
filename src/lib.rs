//! Commit message normalization filter
//!
//! Rewrites the subject line of a commit message into conventional-commit
//! form (shorthand expansion, lowercase, type prefix, length cap) and leaves
//! the body untouched. Meant to run from a git commit hook.
pub mod config;
pub mod error;
pub mod normalization;
pub mod style;
pub mod types;

// Re-export commonly used types
pub use config::TidyConfig;
pub use error::{Result, TidyError};
pub use normalization::{RewriteOutcome, rewrite_message, rewrite_subject};
pub use types::{Args, CommitMessage, CommitType};
