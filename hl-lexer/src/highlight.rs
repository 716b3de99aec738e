//! Document highlighting
//!
//!     Drives a [`LanguageMode`] over whole documents the way an editor does: line by line, one
//!     token at a time, threading the state from each line into the next.
//!
//!     [`Highlighter`] keeps the entry and exit state of every line. When the text changes it
//!     keeps the unchanged prefix, re-lexes from the first changed line, and stops as soon as a
//!     line it reaches is unchanged and is entered with the same state as before: from there on
//!     the cached results are still valid.
//!
//!     Span offsets are byte offsets into their line.

use crate::mode::LanguageMode;
use crate::state::ErrorKind;
use crate::stream::StringStream;
use crate::style::Style;
use crate::tokenizer::Lexer;
use serde::Serialize;
use std::fmt::Write as _;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub style: Option<Style>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineTokens {
    /// Zero-based line number.
    pub line: usize,
    pub spans: Vec<Span>,
}

/// Location of the first lexical error in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LexDiagnostic {
    /// Zero-based line.
    pub line: usize,
    /// Zero-based character column where the error token starts.
    pub column: usize,
    pub kind: ErrorKind,
}

/// Splits text into lines the way editors number them: on `\n`, dropping a trailing `\r`.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// Tokenizes one line, advancing `state` past it.
pub fn tokenize_line<M: LanguageMode>(mode: &M, line: &str, state: &mut M::State) -> Vec<Span> {
    if line.is_empty() {
        mode.blank_line(state);
        return Vec::new();
    }

    let mut stream = StringStream::new(line);
    let mut spans = Vec::new();
    while !stream.eol() {
        let before = stream.pos();
        let mut style = mode.token(&mut stream, state);
        if stream.pos() == before {
            tracing::warn!(mode = mode.name(), column = before, "mode failed to advance");
            stream.skip_to_end();
            style = None;
        }
        spans.push(Span {
            start: before,
            end: stream.pos(),
            style,
            text: line[before..stream.pos()].to_string(),
        });
    }
    spans
}

/// Tokenizes a whole document from a fresh start state.
pub fn highlight_document<M: LanguageMode>(mode: &M, text: &str) -> Vec<LineTokens> {
    let mut state = mode.start_state();
    split_lines(text)
        .into_iter()
        .enumerate()
        .map(|(line, content)| LineTokens {
            line,
            spans: tokenize_line(mode, content, &mut state),
        })
        .collect()
}

/// Renders spans as `style:"text"` pairs, `plain` standing for unstyled text.
pub fn render_spans(spans: &[Span]) -> String {
    let mut out = String::new();
    for (idx, span) in spans.iter().enumerate() {
        if idx > 0 {
            out.push(' ');
        }
        let style = span.style.map(Style::as_str).unwrap_or("plain");
        let _ = write!(out, "{}:{:?}", style, span.text);
    }
    out
}

#[derive(Debug, Clone)]
struct CachedLine<S> {
    text: String,
    entry: S,
    exit: S,
    spans: Vec<Span>,
}

/// Incremental per-line highlighting cache.
pub struct Highlighter<M: LanguageMode> {
    mode: M,
    lines: Vec<CachedLine<M::State>>,
}

impl<M: LanguageMode> Highlighter<M> {
    pub fn new(mode: M) -> Self {
        Self {
            mode,
            lines: Vec::new(),
        }
    }

    pub fn mode(&self) -> &M {
        &self.mode
    }

    /// Replaces the document text, re-lexing only what the change can affect.
    ///
    /// Returns the number of lines that were tokenized again.
    pub fn set_text(&mut self, text: &str) -> usize {
        let new_lines = split_lines(text);
        let same_length = new_lines.len() == self.lines.len();
        let first_changed = self
            .lines
            .iter()
            .zip(&new_lines)
            .position(|(cached, line)| cached.text != *line)
            .unwrap_or_else(|| self.lines.len().min(new_lines.len()));

        let mut old = std::mem::take(&mut self.lines);
        let mut tail = old.split_off(first_changed);
        self.lines = old;

        let mut state = self
            .lines
            .last()
            .map(|line| line.exit.clone())
            .unwrap_or_else(|| self.mode.start_state());

        let mut relexed = 0;
        for (index, text) in new_lines.iter().enumerate().skip(first_changed) {
            if same_length {
                let cached = &tail[index - first_changed];
                if index > first_changed && cached.text == *text && cached.entry == state {
                    self.lines.extend(tail.drain(index - first_changed..));
                    break;
                }
            }
            let entry = state.clone();
            let spans = tokenize_line(&self.mode, text, &mut state);
            self.lines.push(CachedLine {
                text: text.to_string(),
                entry,
                exit: state.clone(),
                spans,
            });
            relexed += 1;
        }

        tracing::debug!(
            lines = self.lines.len(),
            first_changed,
            relexed,
            "highlighter updated"
        );
        relexed
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn spans(&self, line: usize) -> Option<&[Span]> {
        self.lines.get(line).map(|cached| cached.spans.as_slice())
    }

    /// State the given line is entered with.
    pub fn state_before(&self, line: usize) -> Option<&M::State> {
        self.lines.get(line).map(|cached| &cached.entry)
    }

    /// State after the last line.
    pub fn final_state(&self) -> M::State {
        self.lines
            .last()
            .map(|cached| cached.exit.clone())
            .unwrap_or_else(|| self.mode.start_state())
    }

    pub fn line_text(&self, line: usize) -> Option<&str> {
        self.lines.get(line).map(|cached| cached.text.as_str())
    }

    pub fn lines(&self) -> Vec<LineTokens> {
        self.lines
            .iter()
            .enumerate()
            .map(|(line, cached)| LineTokens {
                line,
                spans: cached.spans.clone(),
            })
            .collect()
    }

    /// Indentation for a new line inserted after `line`.
    pub fn indent_after(&self, line: usize) -> usize {
        match self.lines.get(line) {
            Some(cached) => self.mode.indent(&cached.exit, ""),
            None => self.mode.indent(&self.final_state(), ""),
        }
    }
}

impl Highlighter<Lexer> {
    /// The first line that enters the error mode, with the column its error token starts at.
    pub fn first_error(&self) -> Option<LexDiagnostic> {
        let (line, cached) = self
            .lines
            .iter()
            .enumerate()
            .find(|(_, cached)| !cached.entry.is_error() && cached.exit.is_error())?;
        let kind = cached.exit.error_kind()?;
        let start = cached
            .spans
            .iter()
            .find(|span| span.style == Some(Style::Error))
            .map(|span| span.start)
            .unwrap_or(0);
        Some(LexDiagnostic {
            line,
            column: cached.text[..start].chars().count(),
            kind,
        })
    }
}

/// Lexes `text` and reports its first lexical error, if any.
pub fn diagnose(lexer: &Lexer, text: &str) -> Option<LexDiagnostic> {
    let mut highlighter = Highlighter::new(lexer.clone());
    highlighter.set_text(text);
    highlighter.first_error()
}
