//! Generator settings
//!
//! Optional knobs for generated projects, read from an `mvpgen.toml` that sits
//! alongside the context file or is passed explicitly with `--config`.
//!
//! ```toml
//! ai_model = "gpt-4o"
//! next_version = "14.2.5"
//! repository_owner = "acme"
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name looked up next to the context file.
pub const SETTINGS_FILE_NAME: &str = "mvpgen.toml";

/// Settings applied while generating a project. Every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Model id the AI-tool handler calls, also written to `.env.example`
    pub ai_model: String,
    /// Next.js version pinned in `package.json`
    pub next_version: String,
    /// GitHub owner used in the `git clone` setup step
    pub repository_owner: String,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        GeneratorSettings {
            ai_model: "gpt-4o-mini".to_string(),
            next_version: "14.2.5".to_string(),
            repository_owner: "your-username".to_string(),
        }
    }
}

impl GeneratorSettings {
    /// Every value lands on one line of a generated file, so line breaks are rejected.
    pub fn check_single_line(&self) -> anyhow::Result<()> {
        let fields = [
            ("ai_model", &self.ai_model),
            ("next_version", &self.next_version),
            ("repository_owner", &self.repository_owner),
        ];
        for (key, value) in fields {
            if value.contains(['\n', '\r', '\u{2028}', '\u{2029}']) {
                anyhow::bail!("`{key}` must not contain line breaks");
            }
        }
        Ok(())
    }
}

/// Load settings from a TOML file
///
/// Returns `Ok(None)` when the file does not exist, and an error naming the
/// path when it exists but cannot be read or parsed.
pub fn load_settings(path: &Path) -> anyhow::Result<Option<GeneratorSettings>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read generator settings: {}", path.display()))?;
    let settings: GeneratorSettings = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse generator settings: {}", path.display()))?;
    settings
        .check_single_line()
        .with_context(|| format!("Invalid generator settings: {}", path.display()))?;

    Ok(Some(settings))
}

/// Settings file next to the context file, if one exists.
pub fn auto_detect_settings_path(context_path: &Path) -> Option<PathBuf> {
    let path = context_path.parent()?.join(SETTINGS_FILE_NAME);
    path.exists().then_some(path)
}

/// Resolve the settings path
///
/// Priority:
/// 1. Explicitly provided path (via CLI), when it exists
/// 2. `mvpgen.toml` alongside the context file
/// 3. None (defaults apply)
pub fn resolve_settings_path(explicit: Option<&Path>, context_path: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }
    auto_detect_settings_path(context_path)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use std::fs;

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_settings(&dir.path().join("nope.toml")).unwrap().is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        fs::write(&path, "ai_model = \"gpt-4o\"\n").unwrap();
        let settings = load_settings(&path).unwrap().unwrap();
        assert_eq!(settings.ai_model, "gpt-4o");
        assert_eq!(settings.next_version, "14.2.5");
        assert_eq!(settings.repository_owner, "your-username");
    }

    #[test]
    fn test_invalid_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "ai_model = [").unwrap();
        let err = load_settings(&path).unwrap_err();
        assert!(format!("{err}").contains("broken.toml"));
    }

    #[test]
    fn test_resolve_prefers_explicit_then_sibling() {
        let dir = tempfile::tempdir().unwrap();
        let context = dir.path().join("context.json");
        assert_eq!(resolve_settings_path(None, &context), None);

        let sibling = dir.path().join(SETTINGS_FILE_NAME);
        fs::write(&sibling, "").unwrap();
        assert_eq!(resolve_settings_path(None, &context), Some(sibling.clone()));

        let explicit = dir.path().join("custom.toml");
        assert_eq!(
            resolve_settings_path(Some(&explicit), &context),
            Some(sibling)
        );
        fs::write(&explicit, "").unwrap();
        assert_eq!(
            resolve_settings_path(Some(&explicit), &context),
            Some(explicit.clone())
        );
    }

    #[test]
    fn test_line_breaks_in_values_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        fs::write(&path, "ai_model = \"gpt-4o\\nINJECTED=1\"\n").unwrap();
        let err = load_settings(&path).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("ai_model"));
        assert!(message.contains(SETTINGS_FILE_NAME));
    }
}
