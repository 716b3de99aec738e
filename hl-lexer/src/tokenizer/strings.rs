//! String literals
//!
//! Single-line strings
//!
//!     `"..."` with backslash escapes. After the closing quote only whitespace and the end of
//!     the line, or a `:` separator, may follow. Running into the end of the line before the
//!     closing quote is an error.
//!
//! Multi-line strings
//!
//!     `@"..."` may span any number of lines. A quote is escaped by doubling it, so a run of
//!     quotes of even length is content and a run of odd length closes the string. Once closed:
//!
//!         name position     end of line -> name mode, `:` -> value mode, else error
//!         value position    end of line -> name mode, else error

use super::{fail, Position};
use crate::state::{ErrorKind, LexerState, Mode};
use crate::stream::StringStream;
use crate::style::Style;

pub(super) fn single_line(stream: &mut StringStream<'_>, state: &mut LexerState) -> Option<Style> {
    stream.next();
    loop {
        match stream.next() {
            None => return fail(stream, state, ErrorKind::UnterminatedString),
            Some('\\') => {
                stream.next();
            }
            Some('"') => break,
            Some(_) => {}
        }
    }

    stream.eat_space();
    match stream.peek() {
        None => {
            state.mode = Mode::Name;
            Some(Style::String)
        }
        Some(':') => {
            state.mode = Mode::Value;
            Some(Style::String)
        }
        Some(_) => fail(stream, state, ErrorKind::TrailingAfterString),
    }
}

/// Scans the body of an open multi-line string on the current line.
///
/// The opening `@"` has already been consumed and the block entered.
pub(super) fn multiline(
    stream: &mut StringStream<'_>,
    state: &mut LexerState,
    position: Position,
) -> Option<Style> {
    loop {
        match stream.next() {
            None => return Some(Style::String),
            Some('"') => {
                let mut run = 1;
                while stream.eat('"') {
                    run += 1;
                }
                if run % 2 == 1 {
                    break;
                }
            }
            Some(_) => {}
        }
    }

    state.leave_block();
    match (position, stream.peek()) {
        (_, None) => Some(Style::String),
        (Position::Name, Some(':')) => {
            state.mode = Mode::Value;
            Some(Style::String)
        }
        _ => fail(stream, state, ErrorKind::TrailingAfterMultilineString),
    }
}
