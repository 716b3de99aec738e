//! Column conversions between the lexer and the wire.
//!
//! The lexer works in byte offsets (spans) and character columns (diagnostics, completion);
//! LSP positions count UTF-16 code units.

pub fn utf16_len(text: &str) -> u32 {
    text.chars().map(|ch| ch.len_utf16() as u32).sum()
}

/// UTF-16 column of the byte offset `byte` in `line`.
pub fn byte_to_utf16(line: &str, byte: usize) -> u32 {
    utf16_len(&line[..byte.min(line.len())])
}

/// UTF-16 column of the character column `column` in `line`.
pub fn char_to_utf16(line: &str, column: usize) -> u32 {
    line.chars().take(column).map(|ch| ch.len_utf16() as u32).sum()
}

/// Character column for a UTF-16 column, clamped to the end of the line.
pub fn utf16_to_char(line: &str, column: u32) -> usize {
    let mut units = 0u32;
    for (idx, ch) in line.chars().enumerate() {
        if units >= column {
            return idx;
        }
        units += ch.len_utf16() as u32;
    }
    line.chars().count()
}
