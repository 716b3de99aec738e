//! Language Server Protocol (LSP) implementation for Hyperlambda
//!
//!     Serves the highlighting lexer to any LSP-capable editor, so that the same token styles,
//!     completion candidates and error reporting are available outside the browser editor.
//!
//! Feature Set
//!
//!     1. Semantic Tokens (textDocument/semanticTokens/full):
//!         - One token per styled span; the legend is the lexer's style tags
//!         - Separators, indentation and unclassified names are left unstyled
//!
//!     2. Completion (textDocument/completion):
//!         - Vocabulary entries containing the text typed before the caret
//!         - Triggered on `.` so dotted invocations complete segment by segment
//!
//!     3. Diagnostics (textDocument/publishDiagnostics):
//!         - The first lexical error of the document, from its token to the end of the line
//!         - Cleared when the error is fixed or the document is closed
//!
//! Architecture
//!
//!     Server Layer:
//!         - Implements the tower-lsp LanguageServer trait
//!         - Keeps one incremental Highlighter per open document, so a full-text sync only
//!           re-lexes the lines the edit can affect
//!         - Thin; tests assert the feature layer is called and its results converted
//!
//!     Feature Layer:
//!         - Stateless functions over a Highlighter
//!         - Converts lexer columns (bytes, characters) into UTF-16 wire columns
//!
//! Usage
//!
//!     $ hl-lsp [--config hl.toml]
//!     Starts the language server on stdin/stdout. Logging goes to stderr and is controlled by
//!     the HL_LOG environment variable (e.g. HL_LOG=debug).

pub mod features;
pub mod server;

pub use server::HlLanguageServer;
