//! Tokenizer
//!
//!     The state machine that turns one line at a time into styled tokens. Each call to
//!     [`Lexer::token`] consumes at least one character from the stream, returns the style of
//!     what it consumed, and updates the state in place for the next call. Dispatch is an
//!     exhaustive `match` over [`Mode`], one routine per mode.
//!
//! Modes
//!
//!     Name                 Validates indentation at the start of a line, then reads one of:
//!                          `"..."` string name, `@"` multi-line string name, `//` line comment,
//!                          `/*` block comment, a `:` separator, or a bare name up to `:`.
//!     Value                Reads a `:` separator, an expression (when the previous type was the
//!                          expression type), a string, a multi-line string, a type (a run
//!                          followed by `:`) or a literal value (a run reaching the line end).
//!     MultilineComment     Whole lines until one ends with `*/`. See [comments].
//!     MultilineString*     Characters until an odd run of quotes. See [strings].
//!     Error                The rest of the line, forever.
//!
//!     A node line such as `foo:int:42` comes out as `foo` (name), `:`, `int` (type), `:`,
//!     `42` (value). Separators and unclassified names carry no style.

mod comments;
mod indentation;
mod strings;

use crate::hints::{self, Hints};
use crate::mode::LanguageMode;
use crate::state::{ErrorKind, LexerState, Mode};
use crate::stream::StringStream;
use crate::style::Style;
use crate::vocabulary::Vocabulary;
use std::sync::Arc;

/// Type tag whose value is an expression, as in `.name:x:@.arguments/*`.
pub const DEFAULT_EXPRESSION_TYPE: &str = "x";

/// Name the mode and its hint provider are registered under.
pub const MODE_NAME: &str = "hyperlambda";

/// Where a string literal sits in its node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    Name,
    Value,
}

#[derive(Debug, Clone)]
pub struct Lexer {
    vocabulary: Arc<Vocabulary>,
    expression_type: String,
}

impl Lexer {
    pub fn new(vocabulary: Arc<Vocabulary>) -> Self {
        Self {
            vocabulary,
            expression_type: DEFAULT_EXPRESSION_TYPE.to_string(),
        }
    }

    /// A lexer with no known keywords.
    pub fn without_vocabulary() -> Self {
        Self::new(Arc::new(Vocabulary::empty()))
    }

    pub fn with_expression_type(mut self, marker: impl Into<String>) -> Self {
        self.expression_type = marker.into();
        self
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn expression_type(&self) -> &str {
        &self.expression_type
    }

    pub fn start_state(&self) -> LexerState {
        LexerState::new()
    }

    /// Reads one token from `stream` and returns its style.
    ///
    /// `state` is updated in place. The stream must not be at the end of the line; empty lines
    /// go through [`Lexer::blank_line`] instead.
    pub fn token(&self, stream: &mut StringStream<'_>, state: &mut LexerState) -> Option<Style> {
        stream.begin_token();
        match state.mode {
            Mode::Name => self.name_token(stream, state),
            Mode::Value => self.value_token(stream, state),
            Mode::MultilineComment => comments::continue_block(stream, state),
            Mode::MultilineStringName => strings::multiline(stream, state, Position::Name),
            Mode::MultilineStringValue => strings::multiline(stream, state, Position::Value),
            Mode::Error(_) => {
                stream.skip_to_end();
                Some(Style::Error)
            }
        }
    }

    /// Empty lines carry nothing that changes the state.
    pub fn blank_line(&self, _state: &mut LexerState) {}

    /// Column the editor should indent a new line to.
    pub fn indent(&self, state: &LexerState, _text_after: &str) -> usize {
        state.indent
    }

    /// Autocomplete candidates from this lexer's vocabulary.
    pub fn hints(&self, line: &str, column: usize) -> Hints {
        hints::complete(&self.vocabulary, line, column)
    }

    fn name_token(&self, stream: &mut StringStream<'_>, state: &mut LexerState) -> Option<Style> {
        if stream.sol() {
            if stream.line().trim().is_empty() {
                stream.skip_to_end();
                return None;
            }
            let spaces = stream.leading_spaces();
            if let Err(kind) = indentation::validate(spaces, state) {
                return fail(stream, state, kind);
            }
            if spaces > 0 {
                stream.eat_while(|c| c == ' ');
                return None;
            }
        }

        match (stream.peek(), stream.peek_nth(1)) {
            (Some(':'), _) => separator(stream, state),
            (Some('"'), _) => strings::single_line(stream, state),
            (Some('@'), Some('"')) => {
                stream.next();
                stream.next();
                state.enter_block(Mode::MultilineStringName);
                strings::multiline(stream, state, Position::Name)
            }
            (Some('/'), Some('/')) => {
                stream.skip_to_end();
                Some(Style::Comment)
            }
            (Some('/'), Some('*')) => comments::open_block(stream, state),
            _ => {
                stream.eat_while(|c| c != ':');
                self.classify(stream.current().trim_end())
            }
        }
    }

    fn value_token(&self, stream: &mut StringStream<'_>, state: &mut LexerState) -> Option<Style> {
        if stream.peek() == Some(':') {
            return separator(stream, state);
        }

        if state.pending_expression {
            state.pending_expression = false;
            state.mode = Mode::Name;
            stream.skip_to_end();
            return Some(Style::Expression);
        }

        match (stream.peek(), stream.peek_nth(1)) {
            (Some('"'), _) => strings::single_line(stream, state),
            (Some('@'), Some('"')) => {
                stream.next();
                stream.next();
                state.enter_block(Mode::MultilineStringValue);
                strings::multiline(stream, state, Position::Value)
            }
            _ => {
                stream.eat_while(|c| c != ':');
                if stream.peek() == Some(':') {
                    state.pending_expression = stream.current().trim() == self.expression_type;
                    Some(Style::Type)
                } else {
                    state.mode = Mode::Name;
                    Some(Style::Value)
                }
            }
        }
    }

    fn classify(&self, name: &str) -> Option<Style> {
        if self.vocabulary.contains(name) {
            return Some(if name.contains('.') {
                Style::Invocation
            } else {
                Style::Keyword
            });
        }
        match name.chars().next() {
            Some('_') => Some(Style::Variable),
            Some('.') => Some(Style::LambdaBlock),
            _ => None,
        }
    }
}

impl LanguageMode for Lexer {
    type State = LexerState;

    fn name(&self) -> &'static str {
        MODE_NAME
    }

    fn start_state(&self) -> LexerState {
        Lexer::start_state(self)
    }

    fn token(&self, stream: &mut StringStream<'_>, state: &mut LexerState) -> Option<Style> {
        Lexer::token(self, stream, state)
    }

    fn blank_line(&self, state: &mut LexerState) {
        Lexer::blank_line(self, state)
    }

    fn indent(&self, state: &LexerState, text_after: &str) -> usize {
        Lexer::indent(self, state, text_after)
    }
}

/// Consumes a `:` and moves on to the value. A separator ending the line closes the node.
fn separator(stream: &mut StringStream<'_>, state: &mut LexerState) -> Option<Style> {
    stream.next();
    if stream.eol() {
        state.mode = Mode::Name;
        state.pending_expression = false;
    } else {
        state.mode = Mode::Value;
    }
    None
}

/// Switches to the terminal error mode and styles the rest of the line as an error.
fn fail(stream: &mut StringStream<'_>, state: &mut LexerState, kind: ErrorKind) -> Option<Style> {
    tracing::trace!(?kind, column = stream.column(), "lexer entered error mode");
    state.mode = Mode::Error(kind);
    stream.skip_to_end();
    Some(Style::Error)
}
