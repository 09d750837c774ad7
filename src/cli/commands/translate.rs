use anyhow::{Context, Result, bail};
use std::fs;
use std::path::PathBuf;

use crate::config::{ResolveOptions, load_resolved_config};
use crate::translation::{GlosbeClient, LookupError, Translate, TranslationPair};
use crate::ui::Spinner;
use crate::wizard::{InsertTarget, Outcome, Selection, TerminalHost, Wizard};

pub struct TranslateOptions {
    pub resolve: ResolveOptions,
    pub into: Option<PathBuf>,
    pub at: Option<Selection>,
}

/// Runs the interactive wizard on the terminal.
pub async fn run_translate(options: TranslateOptions) -> Result<Outcome> {
    let config = load_resolved_config(&options.resolve)?;
    let target = insert_target(options.into, options.at)?;

    let client = GlosbeClient::new(&config.endpoint)?;
    let translator = WithSpinner { inner: &client };
    let mut host = TerminalHost::new(target);

    Wizard::new(&config.languages, &mut host, &translator)
        .run()
        .await
}

fn insert_target(into: Option<PathBuf>, at: Option<Selection>) -> Result<InsertTarget> {
    let Some(path) = into else {
        return Ok(InsertTarget::Stdout);
    };

    // Checked up front so a typo does not cost the user a lookup.
    if !path.is_file() {
        bail!("Cannot insert into '{}': no such file", path.display());
    }
    if let Some(selection) = at {
        let document = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        selection
            .check(&document)
            .with_context(|| format!("Cannot insert into '{}'", path.display()))?;
    }

    Ok(InsertTarget::File {
        path,
        selection: at,
    })
}

/// Shows a spinner while the wrapped backend works.
struct WithSpinner<'a, T> {
    inner: &'a T,
}

impl<T: Translate> Translate for WithSpinner<'_, T> {
    async fn translate(
        &self,
        pair: &TranslationPair,
        phrase: &str,
    ) -> Result<Vec<String>, LookupError> {
        let spinner = Spinner::new("Looking up translations...");
        let result = self.inner.translate(pair, phrase).await;
        spinner.stop();
        result
    }
}
