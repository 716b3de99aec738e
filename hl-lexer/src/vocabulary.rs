//! Vocabulary
//!
//!     The list of known keywords (`if`, `while`, `return`) and invocation names
//!     (`io.file.load`, `data.read`) used to classify bare names and to drive autocomplete. It
//!     is read-only once built and handed to the [`Lexer`](crate::Lexer) at construction. An
//!     empty vocabulary is valid: nothing classifies as a keyword and autocomplete finds nothing.
//!
//!     Vocabulary files are either a JSON array of strings (`.json`) or plain text with one
//!     entry per line, where blank lines and lines starting with `#` are skipped.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("failed to read vocabulary file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON vocabulary in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Ordered, de-duplicated set of known names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<String>,
    index: HashSet<String>,
}

impl Vocabulary {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut vocabulary = Self::empty();
        vocabulary.extend(words);
        vocabulary
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses a JSON array of strings.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let words: Vec<String> = serde_json::from_str(text)?;
        Ok(Self::new(words))
    }

    /// One entry per line; blank lines and `#` comments are skipped.
    pub fn from_lines(text: &str) -> Self {
        Self::new(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    /// Loads a vocabulary file, picking the format from the extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, VocabularyError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| VocabularyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json(&text).map_err(|source| VocabularyError::Json {
                path: path.to_path_buf(),
                source,
            })
        } else {
            Ok(Self::from_lines(&text))
        }
    }

    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for word in words {
            let word = word.into();
            if self.index.insert(word.clone()) {
                self.words.push(word);
            }
        }
    }

    /// Appends the entries of `other` that are not already present.
    pub fn merge(&mut self, other: &Vocabulary) {
        self.extend(other.iter());
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_new_deduplicates_and_keeps_order() {
        let vocabulary = Vocabulary::new(["if", "while", "if", "io.file.load"]);
        assert_eq!(
            vocabulary.iter().collect::<Vec<_>>(),
            vec!["if", "while", "io.file.load"]
        );
        assert!(vocabulary.contains("while"));
        assert!(!vocabulary.contains("for-each"));
    }

    #[test]
    fn test_from_lines_skips_comments() {
        let vocabulary = Vocabulary::from_lines("# slots\nif\n\n  data.read  \n");
        assert_eq!(vocabulary.iter().collect::<Vec<_>>(), vec!["if", "data.read"]);
    }

    #[test]
    fn test_from_json() {
        let vocabulary = Vocabulary::from_json(r#"["if", "foo.bar"]"#).unwrap();
        assert_eq!(vocabulary.len(), 2);
        assert!(Vocabulary::from_json("{}").is_err());
    }

    #[test]
    fn test_load_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let json = dir.path().join("words.json");
        fs::File::create(&json)
            .unwrap()
            .write_all(br#"["io.file.load"]"#)
            .unwrap();
        let text = dir.path().join("words.txt");
        fs::write(&text, "while\nreturn\n").unwrap();

        let mut vocabulary = Vocabulary::load(&json).unwrap();
        vocabulary.merge(&Vocabulary::load(&text).unwrap());
        assert_eq!(
            vocabulary.iter().collect::<Vec<_>>(),
            vec!["io.file.load", "while", "return"]
        );
    }

    #[test]
    fn test_load_reports_path() {
        let err = Vocabulary::load("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, VocabularyError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.txt"));
    }
}
