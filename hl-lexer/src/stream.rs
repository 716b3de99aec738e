//! Line cursor
//!
//!     The editor hands the tokenizer one physical line at a time. `StringStream` wraps that
//!     line with a read position (`pos`) and the start of the token being read (`start`), so a
//!     tokenizer routine can look ahead, consume, and finally report `current()` as the text of
//!     the token it produced.
//!
//!     Positions are byte offsets into the line. `column()` converts the token start into a
//!     character column for diagnostics.

/// Cursor over a single line of source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringStream<'a> {
    line: &'a str,
    start: usize,
    pos: usize,
}

impl<'a> StringStream<'a> {
    pub fn new(line: &'a str) -> Self {
        Self {
            line,
            start: 0,
            pos: 0,
        }
    }

    /// The whole line, independent of the cursor.
    pub fn line(&self) -> &'a str {
        self.line
    }

    /// True when nothing on the line has been consumed yet.
    pub fn sol(&self) -> bool {
        self.pos == 0
    }

    /// True when the whole line has been consumed.
    pub fn eol(&self) -> bool {
        self.pos >= self.line.len()
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Looks `n` characters past the cursor without consuming anything.
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// Consumes `expected` if it is the next character.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consumes characters while `predicate` holds. Returns whether anything was consumed.
    pub fn eat_while<F>(&mut self, mut predicate: F) -> bool
    where
        F: FnMut(char) -> bool,
    {
        let before = self.pos;
        while let Some(ch) = self.peek() {
            if !predicate(ch) {
                break;
            }
            self.pos += ch.len_utf8();
        }
        self.pos > before
    }

    pub fn eat_space(&mut self) -> bool {
        self.eat_while(char::is_whitespace)
    }

    pub fn skip_to_end(&mut self) {
        self.pos = self.line.len();
    }

    /// The unconsumed remainder of the line.
    pub fn rest(&self) -> &'a str {
        &self.line[self.pos..]
    }

    /// Text consumed since the last `begin_token`.
    pub fn current(&self) -> &'a str {
        &self.line[self.start..self.pos]
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Marks the cursor position as the start of the next token.
    pub fn begin_token(&mut self) {
        self.start = self.pos;
    }

    /// Character column of the current token start.
    pub fn column(&self) -> usize {
        self.line[..self.start].chars().count()
    }

    /// Number of space characters the line starts with.
    pub fn leading_spaces(&self) -> usize {
        self.line.len() - self.line.trim_start_matches(' ').len()
    }
}
