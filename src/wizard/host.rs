use anyhow::{Context, Result};
use inquire::{Select, Text};
use std::fs;
use std::path::{Path, PathBuf};

use super::document::{Selection, splice};
use crate::fs::atomic_write;
use crate::status;
use crate::ui::{Style, skippable};

const PAGE_SIZE: usize = 12;

/// UI primitives the wizard drives.
pub trait Host {
    /// Modal single-select list. `None` means nothing was chosen.
    fn pick(&mut self, title: &str, items: &[String]) -> Result<Option<usize>>;

    /// Single-line text input. `None` means the prompt was dismissed.
    fn prompt(&mut self, message: &str) -> Result<Option<String>>;

    /// Inserts literal text at the current cursor or selection.
    fn insert(&mut self, text: &str) -> Result<()>;

    /// Shows a short user-visible status line.
    fn status_message(&mut self, message: &str);
}

/// Where the chosen translation ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertTarget {
    Stdout,
    /// Splice into a file; without a selection the text is appended.
    File {
        path: PathBuf,
        selection: Option<Selection>,
    },
}

/// `Host` backed by inquire prompts on the terminal.
pub struct TerminalHost {
    target: InsertTarget,
}

impl TerminalHost {
    pub const fn new(target: InsertTarget) -> Self {
        Self { target }
    }
}

impl Host for TerminalHost {
    fn pick(&mut self, title: &str, items: &[String]) -> Result<Option<usize>> {
        let answer = Select::new(title, items.to_vec())
            .with_page_size(PAGE_SIZE)
            .raw_prompt();
        Ok(skippable(answer)?.map(|option| option.index))
    }

    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        skippable(Text::new(message).prompt())
    }

    fn insert(&mut self, text: &str) -> Result<()> {
        match &self.target {
            InsertTarget::Stdout => {
                println!("{text}");
                Ok(())
            }
            InsertTarget::File { path, selection } => {
                let at = insert_into_file(path, *selection, text)?;
                status!(
                    "{} Inserted at {} in {}",
                    Style::success("✓"),
                    at,
                    Style::secondary(path.display())
                );
                Ok(())
            }
        }
    }

    fn status_message(&mut self, message: &str) {
        crate::warn!("{}", Style::warning(message));
    }
}

/// Splices `text` into the file at `selection` (end of file when `None`).
///
/// Returns the selection that was replaced.
pub fn insert_into_file(path: &Path, selection: Option<Selection>, text: &str) -> Result<Selection> {
    let document = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let selection = selection.unwrap_or_else(|| Selection::cursor(document.len()));
    let updated = splice(&document, selection, text)?;
    atomic_write(path, &updated)?;

    Ok(selection)
}
