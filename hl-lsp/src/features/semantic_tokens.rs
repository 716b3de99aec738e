use crate::features::positions::{byte_to_utf16, utf16_len};
use hl_lexer::{Highlighter, Lexer, Style, STYLES};

/// Token types advertised in the semantic tokens legend, in [`STYLES`] order.
///
/// The names are the lexer's own style tags, so editor themes key on `keyword`, `invocation`,
/// `lambda-block` and so on exactly as the browser mode does.
pub fn token_types() -> Vec<&'static str> {
    STYLES.iter().map(|style| style.as_str()).collect()
}

/// One styled span, in LSP coordinates (UTF-16 columns).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HlSemanticToken {
    pub line: u32,
    pub start: u32,
    pub length: u32,
    pub style: Style,
}

impl HlSemanticToken {
    pub fn type_index(&self) -> u32 {
        STYLES
            .iter()
            .position(|style| *style == self.style)
            .unwrap_or(0) as u32
    }
}

/// Styled spans of every cached line. Unstyled spans (separators, indentation, unknown names)
/// produce no token.
pub fn collect_semantic_tokens(highlighter: &Highlighter<Lexer>) -> Vec<HlSemanticToken> {
    let mut tokens = Vec::new();
    for line in 0..highlighter.line_count() {
        let (Some(text), Some(spans)) = (highlighter.line_text(line), highlighter.spans(line))
        else {
            continue;
        };
        for span in spans {
            let Some(style) = span.style else {
                continue;
            };
            tokens.push(HlSemanticToken {
                line: line as u32,
                start: byte_to_utf16(text, span.start),
                length: utf16_len(&span.text),
                style,
            });
        }
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::test_support::{highlighter_for, sample_highlighter};

    fn styled(tokens: &[HlSemanticToken], style: Style) -> Vec<(u32, u32, u32)> {
        tokens
            .iter()
            .filter(|token| token.style == style)
            .map(|token| (token.line, token.start, token.length))
            .collect()
    }

    #[test]
    fn legend_uses_style_names() {
        let types = token_types();
        assert_eq!(types.len(), STYLES.len());
        assert!(types.contains(&"lambda-block"));
        assert!(types.contains(&"invocation"));
    }

    #[test]
    fn collects_sample_tokens() {
        let tokens = collect_semantic_tokens(&sample_highlighter());
        assert_eq!(styled(&tokens, Style::Comment), vec![(0, 0, 15)]);
        assert_eq!(styled(&tokens, Style::Keyword), vec![(4, 0, 2), (5, 3, 2), (6, 6, 9)]);
        assert_eq!(styled(&tokens, Style::Invocation), vec![(3, 0, 12), (9, 6, 8)]);
        assert_eq!(styled(&tokens, Style::Variable), vec![(10, 0, 4)]);
        assert_eq!(styled(&tokens, Style::Expression).len(), 2);
        assert!(styled(&tokens, Style::Error).is_empty());
    }

    #[test]
    fn skips_unstyled_spans() {
        let tokens = collect_semantic_tokens(&highlighter_for("foo:bar"));
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].style, Style::Value);
        assert_eq!((tokens[0].start, tokens[0].length), (4, 3));
    }

    #[test]
    fn multiline_string_yields_one_token_per_line() {
        let tokens = collect_semantic_tokens(&highlighter_for(".text:@\"one\ntwo\"\n_x"));
        assert_eq!(styled(&tokens, Style::String), vec![(0, 6, 5), (1, 0, 4)]);
    }

    #[test]
    fn columns_count_utf16_units() {
        let tokens = collect_semantic_tokens(&highlighter_for("\"😀\":x:@.foo"));
        assert_eq!(styled(&tokens, Style::String), vec![(0, 0, 4)]);
        assert_eq!(styled(&tokens, Style::Type), vec![(0, 5, 1)]);
    }

    #[test]
    fn empty_document_has_no_tokens() {
        assert!(collect_semantic_tokens(&highlighter_for("")).is_empty());
    }
}
