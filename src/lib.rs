//! # hyperlambda
//!
//! Editor tooling for the Hyperlambda format.
//!
//! This crate re-exports the highlighting lexer so most users need a single dependency, and the
//! configuration loader under [`config`]. The language server and the `hl` command-line tool
//! live in their own crates (`hl-lsp`, `hl-cli`).
//!
//! Workspace Layout
//!
//!     hl-lexer      Resumable line tokenizer, styles, vocabulary, autocomplete, line cache
//!     hl-config     Built-in defaults layered with user TOML files
//!     hl-lsp        tower-lsp server: semantic tokens, completion, diagnostics
//!     hl-cli        `hl tokens`, `hl check`, `hl complete`

pub use hl_config as config;
pub use hl_lexer::*;
