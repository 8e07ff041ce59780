use thiserror::Error;

#[derive(Debug, Error)]
pub enum TidyError {
   #[error("IO error: {0}")]
   IoError(#[from] std::io::Error),

   #[error("Commit message is not valid UTF-8")]
   InvalidUtf8(#[from] std::string::FromUtf8Error),

   #[error("Failed to load config {path}: {reason}")]
   ConfigError { path: String, reason: String },

   #[error("Invalid commit type: {0}")]
   InvalidCommitType(String),

   #[error("Subject is not normalized: '{original}' (expected '{rewritten}')")]
   NonCompliant { original: String, rewritten: String, problems: Vec<String> },
}

pub type Result<T> = std::result::Result<T, TidyError>;
