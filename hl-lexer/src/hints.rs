//! Autocomplete
//!
//!     The text typed so far on the line (up to the caret, trimmed) is matched as a substring
//!     against every vocabulary entry. The result carries the replacement span so the editor can
//!     splice the chosen entry over what was typed. Columns are character columns.

use crate::vocabulary::Vocabulary;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hints {
    pub list: Vec<String>,
    /// First column to replace.
    pub from: usize,
    /// Column after the last one to replace; the caret.
    pub to: usize,
}

impl Hints {
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

/// Candidates for the caret at `column` (in characters) on `line`.
pub fn complete(vocabulary: &Vocabulary, line: &str, column: usize) -> Hints {
    let typed: String = line.chars().take(column).collect();
    let to = typed.chars().count();
    let needle = typed.trim();
    let list = vocabulary
        .iter()
        .filter(|word| word.contains(needle))
        .map(str::to_string)
        .collect();
    Hints {
        list,
        from: to.saturating_sub(needle.chars().count()),
        to,
    }
}
