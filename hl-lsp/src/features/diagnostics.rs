use crate::features::positions::{char_to_utf16, utf16_len};
use hl_lexer::{Highlighter, Lexer};
use tower_lsp::lsp_types::{Diagnostic, DiagnosticSeverity, NumberOrString, Position, Range};

pub const DIAGNOSTIC_SOURCE: &str = "hyperlambda";

/// The first lexical error, reported from the error token to the end of its line.
///
/// Errors are terminal in the lexer, so everything after the first one is noise and at most one
/// diagnostic is produced.
pub fn collect_diagnostics(highlighter: &Highlighter<Lexer>) -> Vec<Diagnostic> {
    let Some(error) = highlighter.first_error() else {
        return Vec::new();
    };
    let text = highlighter.line_text(error.line).unwrap_or_default();
    let line = error.line as u32;
    let code = serde_json::to_value(error.kind)
        .ok()
        .and_then(|value| value.as_str().map(str::to_string));

    vec![Diagnostic {
        range: Range {
            start: Position::new(line, char_to_utf16(text, error.column)),
            end: Position::new(line, utf16_len(text)),
        },
        severity: Some(DiagnosticSeverity::ERROR),
        code: code.map(NumberOrString::String),
        source: Some(DIAGNOSTIC_SOURCE.to_string()),
        message: error.kind.to_string(),
        ..Diagnostic::default()
    }]
}
