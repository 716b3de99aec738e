pub mod completion;
pub mod diagnostics;
pub mod positions;
pub mod semantic_tokens;

#[cfg(test)]
pub(crate) mod test_support;
