//! CLI output formats
//!
//! Each format renders the tokenized document differently: `simple` prints one line per source
//! line with `style:"text"` pairs, `json` dumps the spans.

use crate::error::CliError;
use hl_lexer::{highlight_document, render_spans, Lexer, LexDiagnostic};
use std::path::Path;

/// All available token output formats
pub const AVAILABLE_FORMATS: &[&str] = &["simple", "json"];

/// Tokenize `source` and render it in the named format
pub fn render_tokens(lexer: &Lexer, source: &str, format: &str) -> Result<String, CliError> {
    let lines = highlight_document(lexer, source);
    match format {
        "simple" => Ok(lines
            .iter()
            .map(|line| format!("{}: {}", line.line, render_spans(&line.spans)))
            .collect::<Vec<_>>()
            .join("\n")),
        "json" => Ok(serde_json::to_string_pretty(&lines)?),
        other => Err(CliError::UnknownFormat {
            format: other.to_string(),
            available: AVAILABLE_FORMATS.join(", "),
        }),
    }
}

/// `path:line:column: message`, one-based like compiler output
pub fn format_diagnostic(path: &Path, diagnostic: &LexDiagnostic) -> String {
    format!(
        "{}:{}:{}: {}",
        path.display(),
        diagnostic.line + 1,
        diagnostic.column + 1,
        diagnostic.kind
    )
}
