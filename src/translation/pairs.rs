use std::fmt;

use super::language::{LanguageSpec, dedupe_languages};

/// An ordered (source, target) combination; direction matters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TranslationPair {
    pub source: LanguageSpec,
    pub target: LanguageSpec,
}

impl TranslationPair {
    pub const fn new(source: LanguageSpec, target: LanguageSpec) -> Self {
        Self { source, target }
    }

    /// Picker label, e.g. `English -> French`.
    pub fn label(&self) -> String {
        format!("{} -> {}", self.source.long, self.target.long)
    }
}

impl fmt::Display for TranslationPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.source.short, self.target.short)
    }
}

/// Every ordered pair of distinct languages.
///
/// Sources follow configuration order and, for each source, targets do too.
/// Repeated short codes are collapsed first, so `n` distinct languages give
/// exactly `n * (n - 1)` pairs and fewer than two give none.
pub fn list_pairs(languages: &[LanguageSpec]) -> Vec<TranslationPair> {
    let (languages, _) = dedupe_languages(languages);

    languages
        .iter()
        .enumerate()
        .flat_map(|(i, source)| {
            languages
                .iter()
                .enumerate()
                .filter(move |(j, _)| *j != i)
                .map(move |(_, target)| TranslationPair::new(source.clone(), target.clone()))
        })
        .collect()
}
