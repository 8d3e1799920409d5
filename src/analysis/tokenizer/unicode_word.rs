//! Unicode word tokenizer implementation.
//!
//! This module provides a tokenizer that splits text using Unicode word boundary
//! rules (UAX #29). Whitespace and punctuation segments are dropped. UAX #29 puts
//! a boundary around every Han ideograph, so Chinese text comes out as one
//! [`TokenType::Cjk`] token per character with byte-contiguous offsets, which is
//! the shape the jieba filter stitches back together.
//!
//! # Examples
//!
//! ```
//! use sarissa_jieba::analysis::tokenizer::Tokenizer;
//! use sarissa_jieba::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
//!
//! let tokenizer = UnicodeWordTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello, world! 你好").unwrap().collect();
//!
//! assert_eq!(tokens[0].text, "Hello");
//! assert_eq!(tokens[1].text, "world");
//! assert_eq!(tokens[2].text, "你");
//! assert_eq!(tokens[3].text, "好");
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{Token, TokenStream, TokenType};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A tokenizer that splits text on Unicode word boundaries.
///
/// Emitted tokens carry their real byte offsets and dense 1-based positions.
#[derive(Clone, Debug, Default)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    /// Create a new Unicode word tokenizer.
    pub fn new() -> Self {
        UnicodeWordTokenizer
    }

    /// Detect token type based on character content.
    ///
    /// - All Han script → Cjk
    /// - All numeric → Num
    /// - All Hiragana → Hiragana
    /// - All Katakana → Katakana
    /// - Contains Hangul → Hangul
    /// - Contains CJK ideographs → Cjk
    /// - ASCII alphanumeric → Alphanum
    /// - All punctuation → Punctuation
    /// - Otherwise → Other
    pub fn detect_token_type(word: &str) -> TokenType {
        if word.is_empty() {
            return TokenType::Other;
        }

        // Ideographic numbers such as 〇 are numeric too, but belong to CJK runs.
        if word.chars().all(is_han) {
            return TokenType::Cjk;
        }

        if word.chars().all(|c| c.is_numeric()) {
            return TokenType::Num;
        }

        if word.chars().all(|c| matches!(c, '\u{3040}'..='\u{309F}')) {
            return TokenType::Hiragana;
        }

        if word.chars().all(|c| matches!(c, '\u{30A0}'..='\u{30FF}')) {
            return TokenType::Katakana;
        }

        if word
            .chars()
            .any(|c| matches!(c, '\u{AC00}'..='\u{D7AF}' | '\u{1100}'..='\u{11FF}'))
        {
            return TokenType::Hangul;
        }

        if word.chars().any(is_han) {
            return TokenType::Cjk;
        }

        if word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return TokenType::Alphanum;
        }

        if word.chars().all(|c| c.is_ascii_punctuation()) {
            return TokenType::Punctuation;
        }

        TokenType::Other
    }
}

/// Characters of the Unicode `Han` script.
fn is_han(c: char) -> bool {
    matches!(c,
        '\u{2E80}'..='\u{2E99}' |   // CJK Radicals Supplement
        '\u{2E9B}'..='\u{2EF3}' |
        '\u{2F00}'..='\u{2FD5}' |   // Kangxi Radicals
        '\u{3005}' |                // 々
        '\u{3007}' |                // 〇
        '\u{3021}'..='\u{3029}' |   // Hangzhou numerals
        '\u{3038}'..='\u{303B}' |
        '\u{3400}'..='\u{4DBF}' |   // CJK Extension A
        '\u{4E00}'..='\u{9FFF}' |   // CJK Unified Ideographs
        '\u{F900}'..='\u{FAFF}' |   // CJK Compatibility Ideographs
        '\u{16FE2}'..='\u{16FE3}' |
        '\u{16FF0}'..='\u{16FF1}' |
        '\u{20000}'..='\u{2A6DF}' | // CJK Extension B
        '\u{2A700}'..='\u{2EE5F}' | // CJK Extensions C to F, I
        '\u{2F800}'..='\u{2FA1F}' | // CJK Compatibility Ideographs Supplement
        '\u{30000}'..='\u{323AF}'   // CJK Extensions G, H
    )
}

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = text
            .split_word_bound_indices()
            .filter(|(_, word)| word.chars().any(|c| c.is_alphanumeric()))
            .enumerate()
            .map(|(i, (start_offset, word))| {
                Token::with_offsets(word, i + 1, start_offset, start_offset + word.len())
                    .with_token_type(Self::detect_token_type(word))
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}
