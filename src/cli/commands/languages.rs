use anyhow::Result;

use crate::config::{ResolveOptions, load_resolved_config};
use crate::translation::list_pairs;
use crate::ui::Style;
use crate::wizard::NO_PAIRS_MESSAGE;

/// Prints the resolved language list to stdout.
pub fn print_languages(options: &ResolveOptions) -> Result<()> {
    let config = load_resolved_config(options)?;

    println!("{}", Style::header("Configured languages"));
    for lang in &config.languages {
        println!("  {:5} {}", Style::code(&lang.short), Style::value(&lang.long));
    }

    Ok(())
}

/// Prints every translation pair, numbered in picker order.
pub fn print_pairs(options: &ResolveOptions) -> Result<()> {
    let config = load_resolved_config(options)?;
    let pairs = list_pairs(&config.languages);

    if pairs.is_empty() {
        println!("{NO_PAIRS_MESSAGE}");
        return Ok(());
    }

    println!(
        "{} {}",
        Style::header("Translation pairs"),
        Style::secondary(format!("({})", pair_count(config.languages.len())))
    );
    for (index, pair) in pairs.iter().enumerate() {
        println!(
            "  {:>3}  {}  {}",
            index + 1,
            pair.label(),
            Style::hint(format!("({pair})"))
        );
    }

    Ok(())
}

/// Number of pairs a list of `n` distinct languages yields.
pub const fn pair_count(n: usize) -> usize {
    n.saturating_mul(n.saturating_sub(1))
}
