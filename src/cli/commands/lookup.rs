//! One-shot lookup without prompts.

use anyhow::{Result, bail};

use crate::config::{ResolveOptions, load_resolved_config};
use crate::translation::{GlosbeClient, LanguageSpec, TranslationPair, catalogue_name};
use crate::ui::Style;
use crate::wizard::NO_TRANSLATIONS_MESSAGE;

pub struct LookupOptions {
    pub resolve: ResolveOptions,
    pub from: String,
    pub to: String,
    pub phrase: String,
}

/// Prints every candidate on its own line and returns the exit code.
pub async fn run_lookup(options: LookupOptions) -> Result<i32> {
    let config = load_resolved_config(&options.resolve)?;

    let pair = TranslationPair::new(
        language_for(&options.from, &config.languages)?,
        language_for(&options.to, &config.languages)?,
    );
    if pair.source.short == pair.target.short {
        bail!("Source and target language are both '{}'", pair.source.short);
    }

    let client = GlosbeClient::new(&config.endpoint)?;

    match client.lookup(&pair, &options.phrase).await {
        Ok(candidates) if candidates.is_empty() => {
            crate::warn!("{}", Style::warning(NO_TRANSLATIONS_MESSAGE));
            Ok(exitcode::DATAERR)
        }
        Ok(candidates) => {
            for candidate in &candidates {
                println!("{candidate}");
            }
            Ok(exitcode::OK)
        }
        Err(e) => {
            crate::warn!(
                "{} Translation service unavailable: {e}",
                Style::error("Error:")
            );
            Ok(exitcode::UNAVAILABLE)
        }
    }
}

/// Resolves a code to a configured language, then the catalogue.
fn language_for(code: &str, configured: &[LanguageSpec]) -> Result<LanguageSpec> {
    let code = code.trim();
    if code.is_empty() {
        bail!("Language code must not be empty");
    }

    Ok(configured
        .iter()
        .find(|lang| lang.short == code)
        .cloned()
        .unwrap_or_else(|| {
            LanguageSpec::new(code, catalogue_name(code).unwrap_or(code))
        }))
}
