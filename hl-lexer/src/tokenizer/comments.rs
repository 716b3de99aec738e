//! Block comments
//!
//!     `/* ... */` spans whole lines. Every line of the comment, the opening one included, is a
//!     single comment token. The comment closes on the line whose last two characters are `*/`,
//!     so `/*/` opens and closes on one line. A `*/` anywhere else on a line is an error: nothing,
//!     not even whitespace, may follow a closed comment on its line.

use super::fail;
use crate::state::{ErrorKind, LexerState, Mode};
use crate::stream::StringStream;
use crate::style::Style;

pub(super) fn open_block(stream: &mut StringStream<'_>, state: &mut LexerState) -> Option<Style> {
    stream.next();
    stream.next();
    state.enter_block(Mode::MultilineComment);
    close_on_line(stream, state)
}

pub(super) fn continue_block(
    stream: &mut StringStream<'_>,
    state: &mut LexerState,
) -> Option<Style> {
    close_on_line(stream, state)
}

// The token runs from the `/*` on the opening line and from column 0 on continuation lines.
fn close_on_line(stream: &mut StringStream<'_>, state: &mut LexerState) -> Option<Style> {
    stream.skip_to_end();
    let text = stream.current();
    if text.ends_with("*/") {
        state.leave_block();
        Some(Style::Comment)
    } else if text.contains("*/") {
        fail(stream, state, ErrorKind::TrailingAfterComment)
    } else {
        Some(Style::Comment)
    }
}
