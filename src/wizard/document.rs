//! Byte-range selections and text splicing for file insertion.

use anyhow::{Context, Result, bail};
use std::fmt;
use std::str::FromStr;

/// A byte range in a document. An empty range is a plain cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub const fn cursor(at: usize) -> Self {
        Self { start: at, end: at }
    }

    pub fn range(start: usize, end: usize) -> Result<Self> {
        if start > end {
            bail!("Invalid selection {start}..{end}: start is after end");
        }
        Ok(Self { start, end })
    }

    pub const fn is_cursor(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_cursor() {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}..{}", self.start, self.end)
        }
    }
}

/// Parses `N` (cursor) or `N..M` (range).
impl FromStr for Selection {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let parse_offset = |part: &str| {
            part.trim()
                .parse::<usize>()
                .with_context(|| format!("Invalid selection '{s}': expected N or N..M"))
        };

        match s.split_once("..") {
            Some((start, end)) => Self::range(parse_offset(start)?, parse_offset(end)?),
            None => Ok(Self::cursor(parse_offset(s)?)),
        }
    }
}

impl Selection {
    /// Fails unless the selection is ordered, inside `document` and on
    /// character boundaries.
    pub fn check(self, document: &str) -> Result<()> {
        let len = document.len();
        if self.start > self.end {
            bail!("Invalid selection {}..{}: start is after end", self.start, self.end);
        }
        if self.end > len {
            bail!("Selection {self} is outside the document ({len} bytes)");
        }
        if !document.is_char_boundary(self.start) || !document.is_char_boundary(self.end) {
            bail!("Selection {self} does not fall on a character boundary");
        }
        Ok(())
    }
}

/// Replaces `selection` in `document` with `text`.
pub fn splice(document: &str, selection: Selection, text: &str) -> Result<String> {
    selection.check(document)?;

    let len = document.len();
    let mut spliced =
        String::with_capacity(len - (selection.end - selection.start) + text.len());
    spliced.push_str(&document[..selection.start]);
    spliced.push_str(text);
    spliced.push_str(&document[selection.end..]);
    Ok(spliced)
}
