//! Configure command handler for choosing the language list.

use anyhow::{Result, bail};
use inquire::MultiSelect;

use crate::config::ConfigManager;
use crate::translation::{LANGUAGE_CATALOGUE, LanguageSpec, default_languages};
use crate::ui::{Style, handle_prompt_cancellation};

const PAGE_SIZE: usize = 15;

/// Runs the configure command: pick languages from the catalogue and save.
pub fn run_configure() -> Result<()> {
    handle_prompt_cancellation(run_configure_inner)
}

fn run_configure_inner() -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut config = manager.load_or_default()?;

    let current = if config.langs.is_empty() {
        default_languages()
    } else {
        config.langs.clone()
    };

    print_current_languages(&current);

    let options = language_options(&current);
    let preselected: Vec<usize> = options
        .iter()
        .enumerate()
        .filter(|(_, option)| current.iter().any(|lang| lang.short == option.short))
        .map(|(index, _)| index)
        .collect();

    let selected = MultiSelect::new("Languages to offer:", options)
        .with_default(&preselected)
        .with_page_size(PAGE_SIZE)
        .with_help_message("Space to toggle, type to filter, Enter to save")
        .prompt()?;

    if selected.len() < 2 {
        bail!("Select at least two languages to form a translation pair.");
    }

    config.langs = order_selection(&current, selected);
    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display())
    );

    Ok(())
}

fn print_current_languages(current: &[LanguageSpec]) {
    println!("{}", Style::header("Current languages"));
    for lang in current {
        println!("  {:5} {}", Style::code(&lang.short), Style::value(&lang.long));
    }
    println!();
}

/// The catalogue, with configured display names taking precedence, followed
/// by configured languages the catalogue does not know.
fn language_options(current: &[LanguageSpec]) -> Vec<LanguageSpec> {
    let mut options: Vec<LanguageSpec> = LANGUAGE_CATALOGUE
        .iter()
        .map(|(code, name)| {
            current
                .iter()
                .find(|lang| lang.short == *code)
                .cloned()
                .unwrap_or_else(|| LanguageSpec::new(*code, *name))
        })
        .collect();

    for lang in current {
        if !options.iter().any(|option| option.short == lang.short) {
            options.push(lang.clone());
        }
    }

    options
}

/// Keeps previously configured languages in their old order, then appends
/// newly selected ones.
fn order_selection(current: &[LanguageSpec], selected: Vec<LanguageSpec>) -> Vec<LanguageSpec> {
    let (mut kept, added): (Vec<_>, Vec<_>) = selected
        .into_iter()
        .partition(|lang| current.iter().any(|c| c.short == lang.short));

    kept.sort_by_key(|lang| current.iter().position(|c| c.short == lang.short));
    kept.extend(added);
    kept
}
