/// Subject-line normalization for commit messages
use crate::{
   config::TidyConfig,
   types::{CommitMessage, CommitType},
};

/// Result of rewriting a subject, with the steps that fired
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOutcome {
   pub subject:      String,
   /// Shorthand phrase that was expanded, if any
   pub shorthand:    Option<String>,
   pub lowercased:   bool,
   pub prefix_added: bool,
   pub truncated:    bool,
}

impl RewriteOutcome {
   /// Human-readable list of applied steps, in pipeline order
   pub fn steps(&self, config: &TidyConfig) -> Vec<String> {
      let mut steps = Vec::new();
      if let Some(ref phrase) = self.shorthand {
         steps.push(format!("expanded shorthand '{phrase}'"));
      }
      if self.lowercased {
         steps.push("lowercased subject".to_string());
      }
      if self.prefix_added {
         steps.push(format!("added '{}: ' prefix", config.default_type));
      }
      if self.truncated {
         steps.push(format!("truncated to {} characters", config.max_subject_len));
      }
      if self.shorthand.is_some() && !config.shorthand_marker.is_empty() {
         steps.push("appended shorthand marker".to_string());
      }
      steps
   }
}

/// Whether `subject` starts with an accepted `type:` prefix
pub fn has_type_prefix(subject: &str, types: &[CommitType]) -> bool {
   types.iter().any(|ty| ty.prefixes(subject))
}

/// Prepend the default type when no accepted prefix is present
///
/// Returns whether the prefix was added.
pub fn enforce_type_prefix(subject: &mut String, config: &TidyConfig) -> bool {
   if has_type_prefix(subject, &config.types) {
      return false;
   }
   subject.insert_str(0, &format!("{}: ", config.default_type));
   true
}

/// Byte offset of the `n`th character, or the string length
fn char_boundary(s: &str, n: usize) -> usize {
   s.char_indices().nth(n).map_or(s.len(), |(idx, _)| idx)
}

/// Cut `subject` to at most `max_len` characters at a word boundary
///
/// Returns `None` when the subject already fits. Otherwise the cut falls on
/// the last whitespace inside the first `max_len` characters, or exactly at
/// `max_len` when there is none (or it is the first character). Trailing
/// whitespace is dropped before `ellipsis` is appended.
pub fn truncate_subject(subject: &str, max_len: usize, ellipsis: &str) -> Option<String> {
   if subject.chars().count() <= max_len {
      return None;
   }

   let head = &subject[..char_boundary(subject, max_len)];
   let cut = match head.char_indices().rev().find(|(_, c)| c.is_whitespace()) {
      Some((idx, _)) if idx > 0 => &subject[..idx],
      _ => head,
   };

   Some(format!("{}{ellipsis}", cut.trim_end()))
}

/// Run the full subject pipeline:
/// shorthand -> lowercase -> type prefix -> length cap -> marker
pub fn rewrite_subject(subject: &str, config: &TidyConfig) -> RewriteOutcome {
   let subject = subject.trim();

   let (expanded, shorthand) = match config.shorthand(subject) {
      Some(expansion) => (expansion, Some(subject.to_string())),
      None => (subject, None),
   };

   let mut line = expanded.to_lowercase();
   let lowercased = line != expanded;

   let prefix_added = enforce_type_prefix(&mut line, config);

   let truncated = match truncate_subject(&line, config.max_subject_len, &config.ellipsis) {
      Some(cut) => {
         line = cut;
         true
      },
      None => false,
   };

   if shorthand.is_some() {
      line.push_str(&config.shorthand_marker);
   }

   RewriteOutcome { subject: line, shorthand, lowercased, prefix_added, truncated }
}

/// Rewrite the subject of `msg`, leaving the rest untouched
pub fn rewrite_message(
   msg: &CommitMessage,
   config: &TidyConfig,
) -> (CommitMessage, RewriteOutcome) {
   let outcome = rewrite_subject(&msg.subject, config);
   let rewritten = CommitMessage { subject: outcome.subject.clone(), rest: msg.rest.clone() };
   (rewritten, outcome)
}
