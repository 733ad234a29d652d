//! Tokenizer — splits raw text into word tokens using Unicode word boundaries (UAX #29).

use unicode_segmentation::UnicodeSegmentation;

/// A single word extracted from source text.
///
/// `position` and `offset` describe where the word sat in the input; the
/// normalizer discards both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    /// Ordinal of the token within the emitted sequence.
    pub position: usize,
    /// Byte offset of the (trimmed) token within the source string.
    pub offset: usize,
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Splits `text` into word tokens.
///
/// Whitespace and punctuation segments are dropped. Word-internal apostrophes
/// and periods stay attached (`don't`, `node.js`), so both sides of a
/// comparison are split the same way.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();

    for (start, word) in text.unicode_word_indices() {
        let trimmed = word.trim_start_matches(|c: char| !c.is_alphanumeric());
        let lead = word.len() - trimmed.len();
        let trimmed = trimmed.trim_end_matches(|c: char| !c.is_alphanumeric());
        if trimmed.is_empty() {
            continue;
        }

        tokens.push(Token {
            text: trimmed.to_string(),
            position: tokens.len(),
            offset: start + lead,
        });
    }

    tokens
}
