//! Shared configuration loader for the Hyperlambda tooling.
//!
//! `defaults/hl.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`HlConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use hl_lexer::{Hints, Lexer, Vocabulary, VocabularyError};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const DEFAULT_TOML: &str = include_str!("../defaults/hl.default.toml");

/// Top-level configuration consumed by the Hyperlambda applications.
#[derive(Debug, Clone, Deserialize)]
pub struct HlConfig {
    pub vocabulary: VocabularyConfig,
    pub lexer: LexerConfig,
    pub completion: CompletionConfig,
}

/// Where the known keywords and invocation names come from.
#[derive(Debug, Clone, Deserialize)]
pub struct VocabularyConfig {
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Extra vocabulary files, merged after the inline keywords.
    #[serde(default)]
    pub files: Vec<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LexerConfig {
    pub expression_type: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompletionConfig {
    pub enabled: bool,
    pub max_items: usize,
}

impl CompletionConfig {
    /// Drops candidates past `max_items`, or all of them when completion is off.
    pub fn limit(&self, mut hints: Hints) -> Hints {
        if !self.enabled {
            hints.list.clear();
        } else {
            hints.list.truncate(self.max_items);
        }
        hints
    }
}

impl HlConfig {
    /// Builds the vocabulary from the inline keywords and every configured file.
    pub fn vocabulary(&self) -> Result<Vocabulary, VocabularyError> {
        let mut vocabulary = Vocabulary::new(self.vocabulary.keywords.iter().cloned());
        for path in &self.vocabulary.files {
            vocabulary.merge(&Vocabulary::load(path)?);
        }
        Ok(vocabulary)
    }

    /// A lexer configured with this vocabulary and expression type.
    pub fn lexer(&self) -> Result<Lexer, VocabularyError> {
        Ok(Lexer::new(Arc::new(self.vocabulary()?))
            .with_expression_type(self.lexer.expression_type.clone()))
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<HlConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<HlConfig, ConfigError> {
    Loader::new().build()
}
