use hl_lexer::{Highlighter, Lexer, Vocabulary};
use std::sync::Arc;

pub(crate) const SAMPLE: &str = r#"// Loads a file
.arguments
   filename:string:/misc/data.txt
io.file.load:x:@.arguments/*/filename
if
   eq
      get-value:x:@io.file.load
      .:
   .lambda
      log.info:"empty file"
_tmp:int:5"#;

pub(crate) fn sample_lexer() -> Lexer {
    Lexer::new(Arc::new(Vocabulary::new([
        "if",
        "eq",
        "get-value",
        "io.file.load",
        "io.file.save",
        "log.info",
    ])))
}

pub(crate) fn sample_highlighter() -> Highlighter<Lexer> {
    highlighter_for(SAMPLE)
}

pub(crate) fn highlighter_for(text: &str) -> Highlighter<Lexer> {
    let mut highlighter = Highlighter::new(sample_lexer());
    highlighter.set_text(text);
    highlighter
}
