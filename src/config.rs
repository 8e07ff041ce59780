use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{
   error::{Result, TidyError},
   types::CommitType,
};

/// Rules applied to a commit subject
///
/// `Default` holds the built-in rules; a config file only overlays them.
#[derive(Debug, Clone)]
pub struct TidyConfig {
   /// Subject length (in characters) above which it is truncated
   pub max_subject_len: usize,

   /// Appended to a truncated subject
   pub ellipsis: String,

   /// Appended when the subject was expanded from a shorthand
   pub shorthand_marker: String,

   /// Type prepended to subjects without an accepted prefix
   pub default_type: CommitType,

   /// Accepted commit types, checked in order
   pub types: Vec<CommitType>,

   /// Exact-match subject -> replacement message
   pub shorthands: IndexMap<String, String>,
}

/// Built-in shorthand table
pub const DEFAULT_SHORTHANDS: &[(&str, &str)] = &[
   ("lbratui", "feat: initial project setup"),
   ("ldownloads", "feat: add download features"),
   ("lupdate", "feat: update project files"),
   ("ladd", "feat: add project files"),
   ("ladd cli", "feat: add cli functionality"),
   ("lswitch to gemini", "feat: integrate gemini ai"),
   ("lorganize cli modular", "refactor: modularize cli"),
   ("lfix server syntax", "fix: correct server syntax"),
   ("ladd unit and e2e tests", "test: add unit and e2e tests"),
   ("lsimplify app to single page, remove foo", "refactor: simplify to single page app"),
];

pub fn default_shorthands() -> IndexMap<String, String> {
   DEFAULT_SHORTHANDS
      .iter()
      .map(|(phrase, expansion)| ((*phrase).to_string(), (*expansion).to_string()))
      .collect()
}

impl Default for TidyConfig {
   fn default() -> Self {
      Self {
         max_subject_len:  40,
         ellipsis:         "...".to_string(),
         shorthand_marker: " \u{1F33F}".to_string(),
         default_type:     CommitType::new_unchecked("feat"),
         types:            CommitType::defaults(),
         shorthands:       default_shorthands(),
      }
   }
}

/// On-disk layout; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
   max_subject_len:    Option<usize>,
   ellipsis:           Option<String>,
   shorthand_marker:   Option<String>,
   default_type:       Option<String>,
   types:              Option<Vec<String>>,
   /// Drop the built-in shorthand table before applying `shorthands`
   replace_shorthands: bool,
   shorthands:         IndexMap<String, String>,
}

impl TidyConfig {
   /// Load config from specific file, overlaying the built-in rules
   pub fn from_file(path: &Path) -> Result<Self> {
      let contents = std::fs::read_to_string(path).map_err(|e| TidyError::ConfigError {
         path:   path.display().to_string(),
         reason: e.to_string(),
      })?;

      Self::from_toml(&contents).map_err(|e| match e {
         TidyError::ConfigError { reason, .. } => {
            TidyError::ConfigError { path: path.display().to_string(), reason }
         },
         other => other,
      })
   }

   /// Parse config from TOML text, overlaying the built-in rules
   pub fn from_toml(contents: &str) -> Result<Self> {
      let file: ConfigFile = toml::from_str(contents).map_err(|e| TidyError::ConfigError {
         path:   "<inline>".to_string(),
         reason: e.to_string(),
      })?;

      let mut config = Self::default();
      if let Some(max_subject_len) = file.max_subject_len {
         config.max_subject_len = max_subject_len;
      }
      if let Some(ellipsis) = file.ellipsis {
         config.ellipsis = ellipsis;
      }
      if let Some(marker) = file.shorthand_marker {
         config.shorthand_marker = marker;
      }
      if let Some(default_type) = file.default_type {
         config.default_type = CommitType::new(default_type)?;
      }
      if let Some(types) = file.types {
         config.types = types
            .into_iter()
            .map(CommitType::new)
            .collect::<Result<Vec<_>>>()?;
      }
      if file.replace_shorthands {
         config.shorthands.clear();
      }
      // Same phrase replaces the built-in entry in place
      config.shorthands.extend(file.shorthands);

      config.validate()?;
      Ok(config)
   }

   /// Check cross-field consistency
   pub fn validate(&self) -> Result<()> {
      if self.max_subject_len == 0 {
         return Err(TidyError::ConfigError {
            path:   "<inline>".to_string(),
            reason: "max_subject_len must be greater than 0".to_string(),
         });
      }

      if self.types.is_empty() {
         return Err(TidyError::InvalidCommitType("no commit types configured".to_string()));
      }

      if !self.types.contains(&self.default_type) {
         return Err(TidyError::InvalidCommitType(format!(
            "default type '{}' is not one of: {}",
            self.default_type,
            self
               .types
               .iter()
               .map(CommitType::as_str)
               .collect::<Vec<_>>()
               .join(", ")
         )));
      }

      Ok(())
   }

   /// Expansion for an exact shorthand match
   pub fn shorthand(&self, subject: &str) -> Option<&str> {
      self.shorthands.get(subject).map(String::as_str)
   }
}

#[cfg(test)]
mod tests {
   use std::io::Write;

   use super::*;

   #[test]
   fn test_default_config_values() {
      let config = TidyConfig::default();
      assert_eq!(config.max_subject_len, 40);
      assert_eq!(config.ellipsis, "...");
      assert_eq!(config.shorthand_marker, " 🌿");
      assert_eq!(config.default_type.as_str(), "feat");
      assert_eq!(config.types.len(), 11);
      assert_eq!(config.shorthands.len(), 10);
      assert!(config.validate().is_ok());
   }

   #[test]
   fn test_shorthand_lookup_is_exact() {
      let config = TidyConfig::default();
      assert_eq!(config.shorthand("ladd"), Some("feat: add project files"));
      assert_eq!(config.shorthand("ladd cli"), Some("feat: add cli functionality"));
      assert_eq!(config.shorthand("LADD"), None);
      assert_eq!(config.shorthand("ladd cl"), None);
      assert_eq!(config.shorthand(" ladd"), None);
   }

   #[test]
   fn test_empty_toml_matches_default() {
      let config = TidyConfig::from_toml("").unwrap();
      let default = TidyConfig::default();
      assert_eq!(config.max_subject_len, default.max_subject_len);
      assert_eq!(config.shorthands, default.shorthands);
      assert_eq!(config.types, default.types);
   }

   #[test]
   fn test_toml_overrides_scalars() {
      let config = TidyConfig::from_toml(
         r#"
max_subject_len = 72
ellipsis = "…"
shorthand_marker = ""
"#,
      )
      .unwrap();
      assert_eq!(config.max_subject_len, 72);
      assert_eq!(config.ellipsis, "…");
      assert_eq!(config.shorthand_marker, "");
   }

   #[test]
   fn test_toml_shorthands_merge_over_builtin() {
      let config = TidyConfig::from_toml(
         r#"
[shorthands]
"ladd" = "feat: add files"
"wip" = "chore: work in progress"
"#,
      )
      .unwrap();
      assert_eq!(config.shorthands.len(), 11);
      assert_eq!(config.shorthand("ladd"), Some("feat: add files"));
      assert_eq!(config.shorthand("wip"), Some("chore: work in progress"));
      assert_eq!(config.shorthand("lbratui"), Some("feat: initial project setup"));
      // Replaced key keeps its original position
      assert_eq!(config.shorthands.get_index_of("ladd"), Some(3));
   }

   #[test]
   fn test_toml_replace_shorthands() {
      let config = TidyConfig::from_toml(
         r#"
replace_shorthands = true

[shorthands]
"wip" = "chore: work in progress"
"#,
      )
      .unwrap();
      assert_eq!(config.shorthands.len(), 1);
      assert_eq!(config.shorthand("lbratui"), None);
   }

   #[test]
   fn test_toml_custom_types() {
      let config = TidyConfig::from_toml(
         r#"
types = ["feat", "fix", "wip"]
default_type = "wip"
"#,
      )
      .unwrap();
      assert_eq!(config.types.len(), 3);
      assert_eq!(config.default_type.as_str(), "wip");
   }

   #[test]
   fn test_toml_default_type_must_be_listed() {
      let err = TidyConfig::from_toml(r#"types = ["fix"]"#).unwrap_err();
      assert!(matches!(err, TidyError::InvalidCommitType(_)), "got {err:?}");
   }

   #[test]
   fn test_toml_rejects_empty_types() {
      let err = TidyConfig::from_toml("types = []").unwrap_err();
      assert!(matches!(err, TidyError::InvalidCommitType(_)), "got {err:?}");
   }

   #[test]
   fn test_toml_rejects_invalid_type_token() {
      let err = TidyConfig::from_toml(r#"types = ["Feat"]"#).unwrap_err();
      assert!(matches!(err, TidyError::InvalidCommitType(_)), "got {err:?}");

      let err = TidyConfig::from_toml(r#"default_type = "my type""#).unwrap_err();
      assert!(matches!(err, TidyError::InvalidCommitType(_)), "got {err:?}");
   }

   #[test]
   fn test_from_file_invalid_type_token() {
      let mut file = tempfile::NamedTempFile::new().unwrap();
      writeln!(file, "types = [\"feat\", \"\"]").unwrap();
      assert!(matches!(
         TidyConfig::from_file(file.path()),
         Err(TidyError::InvalidCommitType(_))
      ));
   }

   #[test]
   fn test_toml_rejects_zero_length() {
      let err = TidyConfig::from_toml("max_subject_len = 0").unwrap_err();
      assert!(matches!(err, TidyError::ConfigError { .. }), "got {err:?}");
   }

   #[test]
   fn test_toml_rejects_unknown_keys() {
      let err = TidyConfig::from_toml("max_len = 50").unwrap_err();
      assert!(matches!(err, TidyError::ConfigError { .. }), "got {err:?}");
   }

   #[test]
   fn test_from_file_reports_path() {
      let mut file = tempfile::NamedTempFile::new().unwrap();
      writeln!(file, "max_subject_len = \"long\"").unwrap();

      match TidyConfig::from_file(file.path()).unwrap_err() {
         TidyError::ConfigError { path, .. } => {
            assert_eq!(path, file.path().display().to_string());
         },
         other => panic!("unexpected error: {other:?}"),
      }
   }

   #[test]
   fn test_from_file_missing() {
      let dir = tempfile::tempdir().unwrap();
      let missing = dir.path().join("commit-tidy.toml");
      assert!(matches!(TidyConfig::from_file(&missing), Err(TidyError::ConfigError { .. })));
   }

   #[test]
   fn test_from_file_loads() {
      let mut file = tempfile::NamedTempFile::new().unwrap();
      writeln!(file, "max_subject_len = 50").unwrap();
      let config = TidyConfig::from_file(file.path()).unwrap();
      assert_eq!(config.max_subject_len, 50);
   }
}
