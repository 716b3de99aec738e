//! Tokenizer state
//!
//!     `LexerState` is the only thing carried from one line to the next. The editor stores a copy
//!     after every line and hands it back when it needs to re-lex from that point, so it is a
//!     plain value: `Clone`, comparable, and free of references.
//!
//!     Multi-line strings and comments zero `indent` while they are open, keeping the outer value
//!     in `old_indent` until they close. Entering and leaving a block goes through
//!     [`LexerState::enter_block`] and [`LexerState::leave_block`] so the two stay paired.

use serde::Serialize;
use std::fmt;

/// Spaces per nesting level.
pub const INDENT_WIDTH: usize = 3;

/// The structural violation that sent the lexer into its error mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    /// Leading spaces are not a multiple of three.
    Indentation,
    /// The first content line of the document is indented.
    FirstLineIndented,
    /// A line is indented more than one level deeper than the line above.
    IndentationJump,
    /// A single-line string runs into the end of the line.
    UnterminatedString,
    /// Something other than whitespace or `:` follows a single-line string.
    TrailingAfterString,
    /// Something illegal follows the close of a multi-line string.
    TrailingAfterMultilineString,
    /// A block comment closes before the end of its line.
    TrailingAfterComment,
}

impl ErrorKind {
    pub fn describe(self) -> &'static str {
        match self {
            ErrorKind::Indentation => "indentation must be a multiple of 3 spaces",
            ErrorKind::FirstLineIndented => "the first node of a document cannot be indented",
            ErrorKind::IndentationJump => "indentation increased by more than one level",
            ErrorKind::UnterminatedString => "unterminated string",
            ErrorKind::TrailingAfterString => "unexpected content after string",
            ErrorKind::TrailingAfterMultilineString => {
                "unexpected content after multi-line string"
            }
            ErrorKind::TrailingAfterComment => "a block comment must close at the end of its line",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Lexer modes. Each one has exactly one tokenizer routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// At a node name, or at the start of a line.
    Name,
    /// After a `:` separator: a type, a value or an expression.
    Value,
    /// Inside `/* ... */`.
    MultilineComment,
    /// Inside `@"..."` used as a node name.
    MultilineStringName,
    /// Inside `@"..."` used as a value.
    MultilineStringValue,
    /// Terminal. Everything from here on is an error.
    Error(ErrorKind),
}

impl Mode {
    pub fn is_error(self) -> bool {
        matches!(self, Mode::Error(_))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Name => "name",
            Mode::Value => "value",
            Mode::MultilineComment => "multiline-comment",
            Mode::MultilineStringName => "multiline-string-name",
            Mode::MultilineStringValue => "multiline-string-value",
            Mode::Error(_) => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LexerState {
    pub mode: Mode,
    /// Indentation column of the current line.
    pub indent: usize,
    /// Indentation column of the last validated line.
    pub previous_indent: usize,
    /// True until the first content line has been seen.
    pub no_content: bool,
    /// `indent` saved while a multi-line block is open.
    pub old_indent: usize,
    /// The last type segment was the expression type, so the next value is an expression.
    pub pending_expression: bool,
}

impl LexerState {
    pub fn new() -> Self {
        Self {
            mode: Mode::Name,
            indent: 0,
            previous_indent: 0,
            no_content: true,
            old_indent: 0,
            pending_expression: false,
        }
    }

    pub fn is_error(&self) -> bool {
        self.mode.is_error()
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self.mode {
            Mode::Error(kind) => Some(kind),
            _ => None,
        }
    }

    /// Enters a multi-line string or comment.
    pub(crate) fn enter_block(&mut self, mode: Mode) {
        self.old_indent = self.indent;
        self.indent = 0;
        self.mode = mode;
    }

    /// Leaves a multi-line block, restoring the indentation saved by `enter_block`.
    pub(crate) fn leave_block(&mut self) {
        self.indent = self.old_indent;
        self.old_indent = 0;
        self.mode = Mode::Name;
    }
}

impl Default for LexerState {
    fn default() -> Self {
        Self::new()
    }
}
