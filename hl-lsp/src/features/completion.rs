use hl_config::CompletionConfig;
use hl_lexer::{Hints, Lexer};

/// A completion candidate with the character range it replaces on its line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HlCompletion {
    pub label: String,
    /// Invocations (dotted names) versus plain keywords.
    pub is_invocation: bool,
    pub from: usize,
    pub to: usize,
}

/// Candidates for the caret at character `column` of `line`.
pub fn complete_line(
    lexer: &Lexer,
    settings: &CompletionConfig,
    line: &str,
    column: usize,
) -> Vec<HlCompletion> {
    let Hints { list, from, to } = settings.limit(lexer.hints(line, column));
    list.into_iter()
        .map(|label| HlCompletion {
            is_invocation: label.contains('.'),
            label,
            from,
            to,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::test_support::sample_lexer;

    fn settings() -> CompletionConfig {
        hl_config::load_defaults()
            .expect("defaults to load")
            .completion
    }

    #[test]
    fn completes_dotted_prefix() {
        let items = complete_line(&sample_lexer(), &settings(), "   io.fi", 8);
        let labels: Vec<_> = items.iter().map(|item| item.label.as_str()).collect();
        assert_eq!(labels, vec!["io.file.load", "io.file.save"]);
        assert!(items.iter().all(|item| item.is_invocation));
        assert!(items.iter().all(|item| (item.from, item.to) == (3, 8)));
    }

    #[test]
    fn keywords_are_not_invocations() {
        let items = complete_line(&sample_lexer(), &settings(), "i", 1);
        let keyword = items.iter().find(|item| item.label == "if").unwrap();
        assert!(!keyword.is_invocation);
    }

    #[test]
    fn honours_limits() {
        let mut settings = settings();
        settings.max_items = 1;
        assert_eq!(complete_line(&sample_lexer(), &settings, "io.", 3).len(), 1);

        settings.enabled = false;
        assert!(complete_line(&sample_lexer(), &settings, "io.", 3).is_empty());
    }

    #[test]
    fn unknown_text_has_no_candidates() {
        assert!(complete_line(&sample_lexer(), &settings(), "zzz", 3).is_empty());
    }
}
