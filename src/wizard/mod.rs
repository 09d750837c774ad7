//! The three-step lookup wizard.
//!
//! pick language pair → type phrase → pick translation → insert.
//!
//! Each run owns its session; nothing carries over between runs except the
//! read-only language list handed in at construction.

mod document;
mod host;

pub use document::{Selection, splice};
pub use host::{Host, InsertTarget, TerminalHost, insert_into_file};

use anyhow::Result;
use tracing::debug;

use crate::translation::{LanguageSpec, Translate, TranslationPair, list_pairs};

pub const PAIR_PICKER_TITLE: &str = "Translate:";
pub const PHRASE_PROMPT: &str = "Enter a word:";
pub const TRANSLATION_PICKER_TITLE: &str = "Insert:";
pub const NO_TRANSLATIONS_MESSAGE: &str = "Found no translations!";
pub const NO_PAIRS_MESSAGE: &str = "Configure at least two languages to pick a translation pair.";

/// How a wizard run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Inserted(String),
    Cancelled,
    NoLanguagePairs,
    NoTranslations,
    /// The service could not be reached or answered garbage.
    Unavailable(String),
}

impl Outcome {
    /// Process exit code for this outcome.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Inserted(_) | Self::Cancelled => exitcode::OK,
            Self::NoLanguagePairs => exitcode::CONFIG,
            Self::NoTranslations => exitcode::DATAERR,
            Self::Unavailable(_) => exitcode::UNAVAILABLE,
        }
    }
}

/// State carried from the lookup to the final pick.
#[derive(Debug)]
struct WizardSession {
    pair: TranslationPair,
    phrase: String,
    candidates: Vec<String>,
}

#[derive(Debug)]
enum Step {
    AwaitingPair,
    AwaitingPhrase(TranslationPair),
    AwaitingTranslationChoice(WizardSession),
    Done(Outcome),
    Cancelled,
}

/// Drives one lookup against a `Host` and a `Translate` backend.
pub struct Wizard<'a, H, T> {
    languages: &'a [LanguageSpec],
    host: &'a mut H,
    translator: &'a T,
}

impl<'a, H: Host, T: Translate> Wizard<'a, H, T> {
    pub const fn new(languages: &'a [LanguageSpec], host: &'a mut H, translator: &'a T) -> Self {
        Self {
            languages,
            host,
            translator,
        }
    }

    pub fn list_pairs(&self) -> Vec<TranslationPair> {
        list_pairs(self.languages)
    }

    pub async fn run(mut self) -> Result<Outcome> {
        let pairs = self.list_pairs();
        if pairs.is_empty() {
            self.host.status_message(NO_PAIRS_MESSAGE);
            return Ok(Outcome::NoLanguagePairs);
        }

        let mut step = Step::AwaitingPair;
        loop {
            debug!(?step, "wizard step");
            step = match step {
                Step::AwaitingPair => self.present_pair_picker(&pairs)?,
                Step::AwaitingPhrase(pair) => match self.prompt_phrase()? {
                    Some(phrase) => self.translate(pair, phrase).await,
                    None => Step::Cancelled,
                },
                Step::AwaitingTranslationChoice(session) => {
                    self.present_translation_picker(session)?
                }
                Step::Done(outcome) => return Ok(outcome),
                Step::Cancelled => return Ok(Outcome::Cancelled),
            };
        }
    }

    fn present_pair_picker(&mut self, pairs: &[TranslationPair]) -> Result<Step> {
        let labels: Vec<String> = pairs.iter().map(TranslationPair::label).collect();
        let chosen = self.host.pick(PAIR_PICKER_TITLE, &labels)?;

        Ok(chosen
            .and_then(|index| pairs.get(index))
            .map_or(Step::Cancelled, |pair| Step::AwaitingPhrase(pair.clone())))
    }

    fn prompt_phrase(&mut self) -> Result<Option<String>> {
        self.host.prompt(PHRASE_PROMPT)
    }

    async fn translate(&mut self, pair: TranslationPair, phrase: String) -> Step {
        match self.translator.translate(&pair, &phrase).await {
            Ok(candidates) if candidates.is_empty() => {
                self.host.status_message(NO_TRANSLATIONS_MESSAGE);
                Step::Done(Outcome::NoTranslations)
            }
            Ok(candidates) => Step::AwaitingTranslationChoice(WizardSession {
                pair,
                phrase,
                candidates,
            }),
            Err(e) => {
                let reason = e.to_string();
                self.host
                    .status_message(&format!("Translation service unavailable: {reason}"));
                Step::Done(Outcome::Unavailable(reason))
            }
        }
    }

    fn present_translation_picker(&mut self, session: WizardSession) -> Result<Step> {
        let chosen = self
            .host
            .pick(TRANSLATION_PICKER_TITLE, &session.candidates)?;

        let Some(text) = chosen.and_then(|index| session.candidates.into_iter().nth(index)) else {
            return Ok(Step::Cancelled);
        };

        debug!(pair = %session.pair, phrase = %session.phrase, %text, "inserting translation");
        self.host.insert(&text)?;
        Ok(Step::Done(Outcome::Inserted(text)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::translation::{LookupError, parse_candidates};
    use reqwest::StatusCode;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Plays back canned answers and records what the wizard asked for.
    #[derive(Default)]
    struct ScriptedHost {
        picks: VecDeque<Option<usize>>,
        prompts: VecDeque<Option<String>>,
        shown: Vec<(String, Vec<String>)>,
        inserted: Vec<String>,
        statuses: Vec<String>,
    }

    impl ScriptedHost {
        fn new(picks: &[Option<usize>], prompts: &[Option<&str>]) -> Self {
            Self {
                picks: picks.iter().copied().collect(),
                prompts: prompts.iter().map(|p| p.map(str::to_string)).collect(),
                ..Self::default()
            }
        }
    }

    impl Host for ScriptedHost {
        fn pick(&mut self, title: &str, items: &[String]) -> Result<Option<usize>> {
            self.shown.push((title.to_string(), items.to_vec()));
            Ok(self.picks.pop_front().flatten())
        }

        fn prompt(&mut self, _message: &str) -> Result<Option<String>> {
            Ok(self.prompts.pop_front().flatten())
        }

        fn insert(&mut self, text: &str) -> Result<()> {
            self.inserted.push(text.to_string());
            Ok(())
        }

        fn status_message(&mut self, message: &str) {
            self.statuses.push(message.to_string());
        }
    }

    /// Answers every lookup with the same response body, or a 502 when there
    /// is no body.
    struct FakeTranslator {
        body: Option<&'static str>,
        calls: RefCell<Vec<(String, String)>>,
    }

    impl FakeTranslator {
        fn with_body(body: &'static str) -> Self {
            Self {
                body: Some(body),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                body: None,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl Translate for FakeTranslator {
        async fn translate(
            &self,
            pair: &TranslationPair,
            phrase: &str,
        ) -> Result<Vec<String>, LookupError> {
            self.calls
                .borrow_mut()
                .push((pair.to_string(), phrase.to_string()));
            match self.body {
                Some(body) => Ok(parse_candidates(body)?),
                None => Err(LookupError::Status(StatusCode::BAD_GATEWAY)),
            }
        }
    }

    const TWO_HITS: &str = r#"{"result":"ok","tuc":[{"phrase":{"text":"bonjour"}},{"meaning":{"text":"x"}},{"phrase":{"text":"salut"}}]}"#;

    fn languages() -> Vec<LanguageSpec> {
        vec![
            LanguageSpec::new("en", "English"),
            LanguageSpec::new("fr", "French"),
        ]
    }

    #[tokio::test]
    async fn test_full_run_inserts_chosen_translation() {
        let langs = languages();
        let translator = FakeTranslator::with_body(TWO_HITS);
        let mut host = ScriptedHost::new(&[Some(0), Some(1)], &[Some("hello")]);

        let outcome = Wizard::new(&langs, &mut host, &translator).run().await.unwrap();

        assert_eq!(outcome, Outcome::Inserted("salut".to_string()));
        assert_eq!(host.inserted, ["salut"]);
        assert_eq!(
            translator.calls.borrow().as_slice(),
            [("en->fr".to_string(), "hello".to_string())]
        );
        assert_eq!(host.shown[0].1, ["English -> French", "French -> English"]);
        assert_eq!(host.shown[1].1, ["bonjour", "salut"]);
        assert!(host.statuses.is_empty());
    }

    #[tokio::test]
    async fn test_second_pair_is_used_for_lookup() {
        let langs = languages();
        let translator = FakeTranslator::with_body(TWO_HITS);
        let mut host = ScriptedHost::new(&[Some(1), Some(0)], &[Some("bonjour")]);

        Wizard::new(&langs, &mut host, &translator).run().await.unwrap();

        assert_eq!(translator.calls.borrow()[0].0, "fr->en");
    }

    #[tokio::test]
    async fn test_cancel_at_pair_picker() {
        let langs = languages();
        let translator = FakeTranslator::with_body(TWO_HITS);
        let mut host = ScriptedHost::new(&[None], &[]);

        let outcome = Wizard::new(&langs, &mut host, &translator).run().await.unwrap();

        assert_eq!(outcome, Outcome::Cancelled);
        assert!(host.inserted.is_empty());
        assert!(host.statuses.is_empty());
        assert!(translator.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_cancel_at_phrase_prompt() {
        let langs = languages();
        let translator = FakeTranslator::with_body(TWO_HITS);
        let mut host = ScriptedHost::new(&[Some(0)], &[None]);

        let outcome = Wizard::new(&langs, &mut host, &translator).run().await.unwrap();

        assert_eq!(outcome, Outcome::Cancelled);
        assert!(host.inserted.is_empty());
        assert!(translator.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_cancel_at_translation_picker() {
        let langs = languages();
        let translator = FakeTranslator::with_body(TWO_HITS);
        let mut host = ScriptedHost::new(&[Some(0), None], &[Some("hello")]);

        let outcome = Wizard::new(&langs, &mut host, &translator).run().await.unwrap();

        assert_eq!(outcome, Outcome::Cancelled);
        assert!(host.inserted.is_empty());
        assert!(host.statuses.is_empty());
    }

    #[tokio::test]
    async fn test_out_of_range_pick_counts_as_cancel() {
        let langs = languages();
        let translator = FakeTranslator::with_body(TWO_HITS);
        let mut host = ScriptedHost::new(&[Some(0), Some(7)], &[Some("hello")]);

        let outcome = Wizard::new(&langs, &mut host, &translator).run().await.unwrap();

        assert_eq!(outcome, Outcome::Cancelled);
        assert!(host.inserted.is_empty());
    }

    #[tokio::test]
    async fn test_empty_phrase_is_forwarded() {
        let langs = languages();
        let translator = FakeTranslator::with_body(TWO_HITS);
        let mut host = ScriptedHost::new(&[Some(0), Some(0)], &[Some("")]);

        Wizard::new(&langs, &mut host, &translator).run().await.unwrap();

        assert_eq!(translator.calls.borrow()[0].1, "");
    }

    #[tokio::test]
    async fn test_empty_result_reports_no_translations() {
        let langs = languages();
        let translator = FakeTranslator::with_body(r#"{"result":"ok","tuc":[]}"#);
        let mut host = ScriptedHost::new(&[Some(0)], &[Some("xyzzy")]);

        let outcome = Wizard::new(&langs, &mut host, &translator).run().await.unwrap();

        assert_eq!(outcome, Outcome::NoTranslations);
        assert_eq!(host.statuses, [NO_TRANSLATIONS_MESSAGE]);
        assert_eq!(host.shown.len(), 1);
        assert!(host.inserted.is_empty());
    }

    #[tokio::test]
    async fn test_error_result_reports_no_translations() {
        let langs = languages();
        let translator = FakeTranslator::with_body(r#"{"result":"error"}"#);
        let mut host = ScriptedHost::new(&[Some(0)], &[Some("hello")]);

        let outcome = Wizard::new(&langs, &mut host, &translator).run().await.unwrap();

        assert_eq!(outcome, Outcome::NoTranslations);
        assert_eq!(host.statuses, [NO_TRANSLATIONS_MESSAGE]);
    }

    #[tokio::test]
    async fn test_service_failure_is_reported_separately() {
        let langs = languages();
        let translator = FakeTranslator::failing();
        let mut host = ScriptedHost::new(&[Some(0)], &[Some("hello")]);

        let outcome = Wizard::new(&langs, &mut host, &translator).run().await.unwrap();

        assert!(matches!(outcome, Outcome::Unavailable(ref reason) if reason.contains("502")));
        assert_eq!(host.statuses.len(), 1);
        assert!(host.statuses[0].starts_with("Translation service unavailable"));
        assert_ne!(host.statuses[0], NO_TRANSLATIONS_MESSAGE);
        assert!(host.inserted.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_body_is_unavailable() {
        let langs = languages();
        let translator = FakeTranslator::with_body("<html>oops</html>");
        let mut host = ScriptedHost::new(&[Some(0)], &[Some("hello")]);

        let outcome = Wizard::new(&langs, &mut host, &translator).run().await.unwrap();

        assert!(matches!(outcome, Outcome::Unavailable(_)));
    }

    #[tokio::test]
    async fn test_single_language_shows_no_picker() {
        let langs = vec![LanguageSpec::new("en", "English")];
        let translator = FakeTranslator::with_body(TWO_HITS);
        let mut host = ScriptedHost::new(&[Some(0)], &[Some("hello")]);

        let outcome = Wizard::new(&langs, &mut host, &translator).run().await.unwrap();

        assert_eq!(outcome, Outcome::NoLanguagePairs);
        assert!(host.shown.is_empty());
        assert_eq!(host.statuses, [NO_PAIRS_MESSAGE]);
    }

    #[tokio::test]
    async fn test_runs_do_not_share_sessions() {
        let langs = languages();
        let translator = FakeTranslator::with_body(TWO_HITS);

        let mut first = ScriptedHost::new(&[Some(0), Some(0)], &[Some("hello")]);
        Wizard::new(&langs, &mut first, &translator).run().await.unwrap();

        // The second run is cancelled before any lookup; it must not reuse
        // the first run's candidates.
        let mut second = ScriptedHost::new(&[Some(0)], &[None]);
        let outcome = Wizard::new(&langs, &mut second, &translator).run().await.unwrap();

        assert_eq!(first.inserted, ["bonjour"]);
        assert_eq!(outcome, Outcome::Cancelled);
        assert!(second.inserted.is_empty());
        assert_eq!(second.shown.len(), 1);
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(Outcome::Cancelled.exit_code(), exitcode::OK);
        assert_eq!(Outcome::Inserted("x".into()).exit_code(), exitcode::OK);
        assert_eq!(Outcome::NoTranslations.exit_code(), exitcode::DATAERR);
        assert_eq!(
            Outcome::Unavailable("down".into()).exit_code(),
            exitcode::UNAVAILABLE
        );
        assert_eq!(Outcome::NoLanguagePairs.exit_code(), exitcode::CONFIG);
    }
}
