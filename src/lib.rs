//! # phrase - Glosbe phrase lookup for the terminal
//!
//! `phrase` walks you through a short interactive lookup: pick a language
//! pair, type a word or phrase, then pick one of the translations Glosbe
//! returns. The chosen translation is printed to stdout or spliced into a file.
//!
//! ## Quick Start
//!
//! ```bash
//! # Interactive lookup, result printed to stdout
//! phrase
//!
//! # Insert the result into a file at byte offset 120
//! phrase --into notes.md --at 120
//!
//! # One-shot lookup without prompts
//! phrase lookup --from en --to fr "good morning"
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/phrase/config.toml`:
//!
//! ```toml
//! [phrase]
//! endpoint = "https://glosbe.com/gapi/translate"
//!
//! [[langs]]
//! short = "en"
//! long = "English"
//!
//! [[langs]]
//! short = "de"
//! long = "German"
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and language list resolution.
pub mod config;

/// File system utilities.
pub mod fs;

/// Diagnostic tracing setup.
pub mod logging;

/// Global output configuration (quiet mode, colors, stderr routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Glosbe client, language pairs and response parsing.
pub mod translation;

/// Terminal UI components (spinner, colors, prompt cancellation).
pub mod ui;

/// The three-step lookup wizard and its host seam.
pub mod wizard;
