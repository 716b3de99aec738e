//! Style tags
//!
//!     The strings returned by [`Style::as_str`] are what editor themes select on, so they are
//!     part of the public contract and must not change. Names that are neither known keywords nor
//!     variables, along with indentation and `:` separators, carry no style at all (`None`).

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Style {
    Comment,
    String,
    /// A vocabulary entry without a `.`, e.g. `if`.
    Keyword,
    /// A name starting with `_`.
    Variable,
    /// A dotted vocabulary entry, e.g. `io.file.load`.
    Invocation,
    /// The type segment of `name:type:value`.
    Type,
    /// The value following an expression-typed segment.
    Expression,
    Error,
    /// A name starting with `.`.
    LambdaBlock,
    /// An untyped or literal value.
    Value,
}

impl Style {
    pub fn as_str(self) -> &'static str {
        match self {
            Style::Comment => "comment",
            Style::String => "string",
            Style::Keyword => "keyword",
            Style::Variable => "variable",
            Style::Invocation => "invocation",
            Style::Type => "type",
            Style::Expression => "expression",
            Style::Error => "error",
            Style::LambdaBlock => "lambda-block",
            Style::Value => "value",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every style, in a stable order suitable for legends.
pub const STYLES: &[Style] = &[
    Style::Comment,
    Style::String,
    Style::Keyword,
    Style::Variable,
    Style::Invocation,
    Style::Type,
    Style::Expression,
    Style::Error,
    Style::LambdaBlock,
    Style::Value,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_names_match_theme_names() {
        for style in STYLES {
            let json = serde_json::to_string(style).unwrap();
            assert_eq!(json, format!("\"{}\"", style.as_str()));
        }
    }

    #[test]
    fn test_lambda_block_name() {
        assert_eq!(Style::LambdaBlock.to_string(), "lambda-block");
    }
}
