use std::{fmt, path::PathBuf};

use clap::Parser;

use crate::error::{Result, TidyError};

/// Commit type token accepted in front of the subject colon
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CommitType(String);

impl CommitType {
   /// Built-in type tokens, in the order they are checked
   pub const DEFAULT_TYPES: &'static [&'static str] = &[
      "feat", "fix", "docs", "style", "refactor", "test", "chore", "perf", "ci", "build", "revert",
   ];

   /// Create new `CommitType` with validation
   ///
   /// Tokens are matched after the subject is lowercased, so only lowercase
   /// ASCII letters, digits, `-` and `_` are accepted.
   pub fn new(s: impl Into<String>) -> Result<Self> {
      let s = s.into();

      if s.is_empty() {
         return Err(TidyError::InvalidCommitType("commit type cannot be empty".to_string()));
      }

      if !s
         .chars()
         .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
      {
         return Err(TidyError::InvalidCommitType(format!(
            "'{s}' must contain only lowercase letters, digits, '-' or '_'"
         )));
      }

      Ok(Self(s))
   }

   /// Constructor for the built-in tokens
   pub(crate) fn new_unchecked(s: impl Into<String>) -> Self {
      Self(s.into())
   }

   /// All built-in commit types
   pub fn defaults() -> Vec<Self> {
      Self::DEFAULT_TYPES
         .iter()
         .map(|ty| Self::new_unchecked(*ty))
         .collect()
   }

   /// Returns inner string slice
   pub fn as_str(&self) -> &str {
      &self.0
   }

   /// Whether `subject` begins with this token immediately followed by `:`
   pub fn prefixes(&self, subject: &str) -> bool {
      subject
         .strip_prefix(self.as_str())
         .is_some_and(|rest| rest.starts_with(':'))
   }
}

impl fmt::Display for CommitType {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      write!(f, "{}", self.0)
   }
}

impl fmt::Debug for CommitType {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.debug_tuple("CommitType").field(&self.0).finish()
   }
}

/// Commit message split into its subject line and everything after it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
   /// First line, stripped of surrounding whitespace
   pub subject: String,
   /// Text after the first line terminator, verbatim
   pub rest:    String,
}

impl CommitMessage {
   /// Split raw hook input at the first `\n`
   pub fn parse(input: &str) -> Self {
      let (first, rest) = input.split_once('\n').unwrap_or((input, ""));
      Self { subject: first.trim().to_string(), rest: rest.to_string() }
   }

   /// Render back into the form the hook expects: subject, newline, rest
   pub fn render(&self) -> String {
      format!("{}\n{}", self.subject, self.rest)
   }
}

// CLI Args
#[derive(Parser, Debug, Default)]
#[command(
   author,
   version,
   about = "Normalize a commit message subject to conventional-commit style",
   long_about = "Reads a commit message on stdin (or from FILE), rewrites its first line \
                 and prints the result. Intended to run from a git commit hook."
)]
pub struct Args {
   /// Commit message file to rewrite in place (as passed to the commit-msg
   /// hook). Reads stdin and writes stdout when omitted.
   pub file: Option<PathBuf>,

   /// Path to a TOML config file overriding the built-in rules
   #[arg(long)]
   pub config: Option<PathBuf>,

   /// Only check the subject; exit non-zero if it would be rewritten
   #[arg(long)]
   pub check: bool,

   /// Report applied rewrites on stderr
   #[arg(long, short = 'v')]
   pub verbose: bool,
}
