//! Tokenizer
//!
//! Splits configuration text on runs of whitespace. There is no quoting,
//! comment or escape syntax; punctuation is only recognized by the grammar
//! when it stands alone or, for `;`, is fused to the end of a value.

/// A whitespace-delimited word and the line it appears on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    /// 1-based
    pub line: usize,
}

/// Split source text into tokens. Never fails.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    source
        .lines()
        .enumerate()
        .flat_map(|(idx, line)| {
            line.split_whitespace()
                .map(move |text| Token { text, line: idx + 1 })
        })
        .collect()
}
