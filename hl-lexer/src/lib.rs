//! # hl-lexer
//!
//! Syntax-highlighting lexer for the Hyperlambda format.
//!
//! Hyperlambda is line oriented and indentation sensitive. Every line declares one node,
//! `name[:type[:value]]`, indented by multiples of three spaces under its parent. Strings and
//! comments may span several physical lines.
//!
//! File Layout
//!
//!     stream        The per-line cursor the tokenizer reads from
//!     style         Style tags handed back to the editor theme
//!     state         LexerState, Mode and ErrorKind
//!     vocabulary    Known keywords and invocation names
//!     tokenizer     The state machine itself, one routine per mode
//!     mode          LanguageMode, the host editor contract
//!     hints         Autocomplete candidates
//!     highlight     Whole-document tokenization and the incremental line cache
//!
//! Incremental Contract
//!
//!     Editors re-tokenize only the lines that changed, resuming from the state saved after the
//!     line above. The tokenizer therefore never looks outside the state it is handed: any line
//!     can be lexed in isolation given the exit state of the previous one, and the result is the
//!     same as lexing the whole document in one pass.
//!
//! Errors
//!
//!     There are no `Result`s in the tokenizer. A structural violation moves the state into
//!     `Mode::Error`, which is terminal: every later token of the document is styled `error`.

pub mod highlight;
pub mod hints;
pub mod mode;
pub mod state;
pub mod stream;
pub mod style;
pub mod tokenizer;
pub mod vocabulary;

pub use highlight::{
    diagnose, highlight_document, render_spans, split_lines, tokenize_line, Highlighter,
    LexDiagnostic, LineTokens, Span,
};
pub use hints::{complete, Hints};
pub use mode::LanguageMode;
pub use state::{ErrorKind, LexerState, Mode, INDENT_WIDTH};
pub use stream::StringStream;
pub use style::{Style, STYLES};
pub use tokenizer::{Lexer, DEFAULT_EXPRESSION_TYPE, MODE_NAME};
pub use vocabulary::{Vocabulary, VocabularyError};
