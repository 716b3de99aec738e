//! Indentation rules, checked at the start of every content line in name mode.
//!
//!     1. Leading spaces must be a multiple of [`INDENT_WIDTH`].
//!     2. A line may be at most one level deeper than the last validated line. Dedenting by any
//!        number of levels is fine.
//!     3. The first content line of a document must not be indented.
//!
//!     Accepted lines become the new reference for rule 2.

use crate::state::{ErrorKind, LexerState, INDENT_WIDTH};

pub(super) fn validate(spaces: usize, state: &mut LexerState) -> Result<(), ErrorKind> {
    if spaces % INDENT_WIDTH != 0 {
        return Err(ErrorKind::Indentation);
    }
    if spaces.saturating_sub(state.previous_indent) > INDENT_WIDTH {
        return Err(ErrorKind::IndentationJump);
    }
    if spaces > 0 && state.no_content {
        return Err(ErrorKind::FirstLineIndented);
    }
    state.indent = spaces;
    state.previous_indent = spaces;
    state.no_content = false;
    Ok(())
}
