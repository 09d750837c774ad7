//! Where `phrase` writes what.
//!
//! The chosen translation is the only thing printed to stdout, so an editor
//! running `:r !phrase` reads back exactly the inserted text. Prompts, the
//! lookup spinner, status lines and warnings all go to stderr. `--quiet`
//! silences status lines and the spinner; warnings always print.

use std::sync::OnceLock;

static SETTINGS: OnceLock<OutputConfig> = OnceLock::new();

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputConfig {
    pub quiet: bool,
    pub no_color: bool,
}

impl OutputConfig {
    /// `--no-color` or a non-empty `NO_COLOR` (<https://no-color.org>) turns
    /// colours off.
    pub fn from_flags(quiet: bool, no_color: bool) -> Self {
        Self {
            quiet,
            no_color: no_color || no_color_requested(),
        }
    }
}

fn no_color_requested() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty())
}

/// Fixes the settings for the rest of the process. Later calls are ignored.
pub fn init(config: OutputConfig) {
    let _ = SETTINGS.set(config);
}

fn settings() -> &'static OutputConfig {
    SETTINGS.get_or_init(|| OutputConfig::from_flags(false, false))
}

pub fn is_quiet() -> bool {
    settings().quiet
}

pub fn is_no_color() -> bool {
    settings().no_color
}

/// Status line on stderr, dropped under `--quiet`.
#[macro_export]
macro_rules! status {
    ($($arg:tt)*) => {
        if !$crate::output::is_quiet() {
            eprintln!($($arg)*);
        }
    };
}

/// Warning on stderr, printed even under `--quiet`.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        eprintln!($($arg)*);
    };
}
