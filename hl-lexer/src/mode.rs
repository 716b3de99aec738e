//! Host editor contract
//!
//!     Line-by-line editors drive a language mode through four entry points: create a start
//!     state, read one token at a time from a line cursor, notify empty lines, and ask for the
//!     indentation of a new line. [`Lexer`](crate::Lexer) is the Hyperlambda implementation;
//!     [`Highlighter`](crate::Highlighter) and [`tokenize_line`](crate::tokenize_line) work with
//!     any implementation.

use crate::stream::StringStream;
use crate::style::Style;

pub trait LanguageMode {
    /// Per-line state. Copies of it are stored by the editor, so it must be a plain value.
    type State: Clone + PartialEq;

    /// Name the mode is registered under.
    fn name(&self) -> &'static str;

    fn start_state(&self) -> Self::State;

    /// Consumes at least one character of `stream` and returns the style of what was consumed.
    fn token(&self, stream: &mut StringStream<'_>, state: &mut Self::State) -> Option<Style>;

    /// Called instead of `token` for lines with no characters.
    fn blank_line(&self, _state: &mut Self::State) {}

    /// Column a new line following `state` should be indented to.
    fn indent(&self, state: &Self::State, text_after: &str) -> usize;
}
