//! Language specs, the built-in catalogue and list normalisation.

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// A language as the user sees it (`long`) and as the API expects it (`short`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LanguageSpec {
    pub short: String,
    pub long: String,
}

impl LanguageSpec {
    pub fn new(short: impl Into<String>, long: impl Into<String>) -> Self {
        Self {
            short: short.into(),
            long: long.into(),
        }
    }

    /// Rejects entries with a blank code or display name.
    pub fn validate(&self) -> Result<()> {
        if self.short.trim().is_empty() {
            bail!("Language '{}' has an empty short code", self.long);
        }
        if self.long.trim().is_empty() {
            bail!("Language '{}' has an empty display name", self.short);
        }
        Ok(())
    }
}

impl fmt::Display for LanguageSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.long, self.short)
    }
}

/// Parses `short:Long`, e.g. `fr:French`.
impl FromStr for LanguageSpec {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let Some((short, long)) = s.split_once(':') else {
            bail!("Invalid language '{s}': expected the form short:Long (e.g. fr:French)");
        };

        let spec = Self::new(short.trim(), long.trim());
        spec.validate()?;
        Ok(spec)
    }
}

/// Languages offered by `phrase configure`, as (code, name).
pub const LANGUAGE_CATALOGUE: &[(&str, &str)] = &[
    ("ar", "Arabic"),
    ("bg", "Bulgarian"),
    ("cs", "Czech"),
    ("da", "Danish"),
    ("de", "German"),
    ("el", "Greek"),
    ("en", "English"),
    ("eo", "Esperanto"),
    ("es", "Spanish"),
    ("fi", "Finnish"),
    ("fr", "French"),
    ("he", "Hebrew"),
    ("hi", "Hindi"),
    ("hu", "Hungarian"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("la", "Latin"),
    ("nl", "Dutch"),
    ("no", "Norwegian"),
    ("pl", "Polish"),
    ("pt", "Portuguese"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("sv", "Swedish"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("zh", "Chinese"),
];

/// Looks up a display name for `code` in the catalogue.
pub fn catalogue_name(code: &str) -> Option<&'static str> {
    LANGUAGE_CATALOGUE
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

/// Languages used when neither the CLI nor the config file names any.
pub fn default_languages() -> Vec<LanguageSpec> {
    ["en", "de", "fr", "es"]
        .into_iter()
        .filter_map(|code| catalogue_name(code).map(|name| LanguageSpec::new(code, name)))
        .collect()
}

/// Keeps the first entry for each short code.
///
/// Returns the surviving list and the codes that were dropped.
pub fn dedupe_languages(languages: &[LanguageSpec]) -> (Vec<LanguageSpec>, Vec<String>) {
    let mut seen = HashSet::new();
    let mut kept = Vec::with_capacity(languages.len());
    let mut dropped = Vec::new();

    for lang in languages {
        if seen.insert(lang.short.as_str()) {
            kept.push(lang.clone());
        } else {
            dropped.push(lang.short.clone());
        }
    }

    (kept, dropped)
}
