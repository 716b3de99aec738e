//! Tokenization tests for complete Hyperlambda documents
//!
//! The sample files live in samples/ at the workspace root. Each test renders the
//! document as `line: style:"text" ...` and compares it with an inline snapshot, so a change in
//! how any token is classified shows up as a readable diff.

use hl_lexer::{
    diagnose, highlight_document, render_spans, ErrorKind, Highlighter, Lexer, Style, Vocabulary,
};
use std::sync::Arc;

const TOUR: &str = include_str!("../../samples/tour.hl");
const CRUD_READ: &str = include_str!("../../samples/crud-read.hl");
const BROKEN: &str = include_str!("../../samples/broken.hl");
const VOCABULARY: &str = include_str!("../../samples/vocabulary.txt");

fn lexer() -> Lexer {
    Lexer::new(Arc::new(Vocabulary::from_lines(VOCABULARY)))
}

fn render(text: &str) -> String {
    highlight_document(&lexer(), text)
        .iter()
        .filter(|line| !line.spans.is_empty())
        .map(|line| format!("{}: {}", line.line, render_spans(&line.spans)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_tour_document() {
    insta::assert_snapshot!(render(TOUR), @r#"
    0: comment:"// Reads a file and logs it"
    1: lambda-block:".arguments"
    2: plain:"   " plain:"filename" plain:":" type:"string" plain:":" value:"/misc/data.txt"
    3: invocation:"io.file.load" plain:":" type:"x" plain:":" expression:"@.arguments/*/filename"
    4: keyword:"if"
    5: plain:"   " keyword:"eq"
    6: plain:"      " keyword:"get-value" plain:":" type:"x" plain:":" expression:"@io.file.load"
    7: plain:"      " lambda-block:"." plain:":"
    8: plain:"   " lambda-block:".lambda"
    9: plain:"      " invocation:"log.info" plain:":" string:"\"empty file\""
    10: comment:"/* block"
    11: comment:"   comment */"
    12: lambda-block:".text" plain:":" string:"@\"multi"
    13: string:"line \"\"quoted\"\" text\""
    14: variable:"_tmp" plain:":" type:"int" plain:":" value:"5"
    "#);
}

#[test]
fn test_crud_template_is_valid() {
    let lines = highlight_document(&lexer(), CRUD_READ);
    let errors: Vec<_> = lines
        .iter()
        .filter(|line| line.spans.iter().any(|s| s.style == Some(Style::Error)))
        .map(|line| line.line)
        .collect();
    assert!(errors.is_empty(), "unexpected errors on lines {:?}", errors);
    assert_eq!(diagnose(&lexer(), CRUD_READ), None);
}

#[test]
fn test_crud_template_comment_header() {
    let lines = highlight_document(&lexer(), CRUD_READ);
    for line in &lines[0..4] {
        assert_eq!(line.spans.len(), 1);
        assert_eq!(line.spans[0].style, Some(Style::Comment));
    }
    assert_eq!(
        render_spans(&lines[4].spans),
        r#"lambda-block:".arguments""#
    );
}

#[test]
fn test_broken_document_is_error_from_the_offending_line() {
    insta::assert_snapshot!(render(BROKEN), @r#"
    0: lambda-block:".arguments"
    1: plain:"   " plain:"name" plain:":" value:"string"
    2: plain:"      " plain:"valid" plain:":" type:"int" plain:":" value:"1"
    3: error:"  misaligned"
    4: error:".lambda"
    5: error:"   log.info:still broken"
    "#);

    let diagnostic = diagnose(&lexer(), BROKEN).unwrap();
    assert_eq!((diagnostic.line, diagnostic.column), (3, 0));
    assert_eq!(diagnostic.kind, ErrorKind::Indentation);
}

#[test]
fn test_fixing_the_offending_line_clears_the_error() {
    let mut highlighter = Highlighter::new(lexer());
    highlighter.set_text(BROKEN);
    assert!(highlighter.first_error().is_some());

    let fixed = BROKEN.replace("  misaligned", "   aligned");
    highlighter.set_text(&fixed);
    assert_eq!(highlighter.first_error(), None);
    assert_eq!(highlighter.lines(), highlight_document(&lexer(), &fixed));
}

#[test]
fn test_indent_hook_on_sample() {
    let mut highlighter = Highlighter::new(lexer());
    highlighter.set_text(CRUD_READ);
    // `         id` under `columns`
    assert_eq!(highlighter.indent_after(22), 9);
    assert_eq!(highlighter.indent_after(21), 6);
}
