use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::translation::LanguageSpec;
use crate::wizard::Selection;

#[derive(Parser, Debug)]
#[command(name = "phrase")]
#[command(about = "Look up a phrase on Glosbe and insert the chosen translation")]
#[command(version)]
pub struct Args {
    /// Insert the chosen translation into FILE instead of printing it
    #[arg(long, value_name = "FILE")]
    pub into: Option<PathBuf>,

    /// Byte offset (N) or range (N..M) in FILE to insert at [default: end of file]
    #[arg(long, value_name = "SELECTION", requires = "into")]
    pub at: Option<Selection>,

    /// Language as short:Long, e.g. fr:French (repeatable, replaces configured languages)
    #[arg(short = 'l', long = "lang", value_name = "SHORT:LONG", global = true)]
    pub langs: Vec<LanguageSpec>,

    /// Translate endpoint URL
    #[arg(short = 'e', long, global = true)]
    pub endpoint: Option<String>,

    /// Suppress non-essential output
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print debug diagnostics to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Look up a phrase without prompts and print every translation
    Lookup {
        /// Source language code
        #[arg(short = 'f', long)]
        from: String,

        /// Target language code
        #[arg(short = 't', long)]
        to: String,

        /// Word or phrase to translate
        phrase: String,
    },
    /// List configured languages
    Languages,
    /// List every translation pair in picker order
    Pairs,
    /// Choose the configured languages interactively
    Configure,
}
