//! Content bundle: the phrase list and flag table loaded once at startup.
//!
//! The bundle is a JSON document:
//!
//! ```text
//! {
//!   "phrases": [
//!     { "language": "es", "main": "...", "en": "...", "zh-cn": "...", "ru": "..." }
//!   ],
//!   "flags": { "es": "flags/es.png", "en": "flags/en.png", ... }
//! }
//! ```
//!
//! Missing text fields load as empty strings; a panel with no text finishes
//! its reveal immediately.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::panel::{CHINESE_CODE, Panel};

/// The one failure the player recognizes: the content could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Failed to read content from {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse content from {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("No phrases found in {}", .path.display())]
    NoPhrases { path: PathBuf },
}

/// A single phrase with its four per-panel texts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Phrase {
    /// Language code of the main text (e.g. `es`, `fr`, `zh-tw`).
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub main: String,
    #[serde(default)]
    pub en: String,
    #[serde(default, rename = "zh-cn")]
    pub zh_cn: String,
    #[serde(default)]
    pub ru: String,
}

impl Phrase {
    /// Text shown in the given panel.
    pub fn text_for(&self, panel: Panel) -> &str {
        match panel {
            Panel::Main => &self.main,
            Panel::English => &self.en,
            Panel::Chinese => &self.zh_cn,
            Panel::Russian => &self.ru,
        }
    }

    /// Language code used to tokenize the given panel's text.
    pub fn language_for(&self, panel: Panel) -> &str {
        panel.fixed_language().unwrap_or(&self.language)
    }
}

/// Language code → flag icon reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct FlagTable(HashMap<String, String>);

impl FlagTable {
    /// Returns the icon for a language code.
    ///
    /// Exact matches win. Any other Chinese variant (`zh`, `zh-tw`, ...) falls
    /// back to the `zh-cn` entry. Everything else without an entry has no icon.
    /// An empty entry counts as missing.
    pub fn resolve(&self, language: &str) -> Option<&str> {
        if let Some(icon) = self.get(language) {
            return Some(icon);
        }
        if language.starts_with("zh") {
            return self.get(CHINESE_CODE);
        }
        None
    }

    fn get(&self, language: &str) -> Option<&str> {
        self.0
            .get(language)
            .map(String::as_str)
            .filter(|icon| !icon.is_empty())
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FlagTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Ordered phrases plus the flag table. Read-only after loading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContentBundle {
    pub phrases: Vec<Phrase>,
    #[serde(default)]
    pub flags: FlagTable,
}

impl ContentBundle {
    /// Loads and validates a bundle from a JSON file.
    ///
    /// # Errors
    /// Returns [`ContentError`] if the file is missing, malformed, or has no phrases.
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let contents = fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let bundle = Self::from_json(&contents).map_err(|source| ContentError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if bundle.phrases.is_empty() {
            return Err(ContentError::NoPhrases {
                path: path.to_path_buf(),
            });
        }
        tracing::info!(
            path = %path.display(),
            phrases = bundle.phrases.len(),
            flags = bundle.flags.len(),
            "content loaded"
        );
        Ok(bundle)
    }

    /// Parses a bundle from a JSON string without validation.
    ///
    /// # Errors
    /// Returns the parser error for malformed documents.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Distinct main-panel language codes in first-seen order.
    pub fn languages(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for phrase in &self.phrases {
            if !seen.contains(&phrase.language.as_str()) {
                seen.push(&phrase.language);
            }
        }
        seen
    }

    /// Phrase languages that resolve to no flag icon, even after fallback.
    pub fn missing_flags(&self) -> Vec<&str> {
        self.languages()
            .into_iter()
            .filter(|code| self.flags.resolve(code).is_none())
            .collect()
    }
}
