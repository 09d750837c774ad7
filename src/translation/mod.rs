mod client;
mod language;
mod pairs;
mod response;

pub use client::{DEFAULT_ENDPOINT, GlosbeClient, LookupError};
pub use language::{
    LANGUAGE_CATALOGUE, LanguageSpec, catalogue_name, dedupe_languages, default_languages,
};
pub use pairs::{TranslationPair, list_pairs};
pub use response::{TranslateResponse, parse_candidates};

/// A source of candidate translations for a phrase.
#[allow(async_fn_in_trait)]
pub trait Translate {
    async fn translate(
        &self,
        pair: &TranslationPair,
        phrase: &str,
    ) -> Result<Vec<String>, LookupError>;
}
