//! Token types and utilities for text analysis.
//!
//! This module defines the data structures that flow through the analysis
//! pipeline: a tokenizer produces [`Token`]s, filters consume and re-emit them.
//!
//! # Core Types
//!
//! - [`Token`] - A single token with text, byte offsets, position and type
//! - [`TokenType`] - Classification of token content (alphanumeric, CJK, etc.)
//! - [`TokenStream`] - Type alias for boxed iterator of tokens
//!
//! # Offsets and positions
//!
//! `start_offset` / `end_offset` are byte offsets into the original text
//! (half-open). Positions assigned by [`JiebaFilter`] are 1-based and dense:
//! the n-th emitted token has position `n`.
//!
//! [`JiebaFilter`]: crate::analysis::token_filter::jieba::JiebaFilter
//!
//! # Examples
//!
//! ```
//! use sarissa_jieba::analysis::token::{Token, TokenType};
//!
//! let token = Token::with_offsets("世界", 1, 7, 13).with_token_type(TokenType::Cjk);
//! assert_eq!(token.text, "世界");
//! assert_eq!(token.start_offset, 7);
//! assert_eq!(token.end_offset, 13);
//! assert!(token.is_cjk());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single unit of text after tokenization.
///
/// # Fields
///
/// - `text` - The token's text content
/// - `position` - Position in the token stream
/// - `start_offset` / `end_offset` - Byte offsets in original text
/// - `token_type` - Script/category classification
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the token stream
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,

    /// The category of this token
    pub token_type: TokenType,
}

/// Token type classification for different kinds of tokens.
///
/// [`TokenType::Cjk`] marks tokens belonging to a script that needs
/// dictionary-based word segmentation; the jieba filter re-segments runs of
/// these and leaves every other type untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    /// Alphanumeric text (English, Latin scripts)
    Alphanum,
    /// Numeric values
    Num,
    /// CJK ideographs
    Cjk,
    /// Katakana characters (Japanese)
    Katakana,
    /// Hiragana characters (Japanese)
    Hiragana,
    /// Hangul characters (Korean)
    Hangul,
    /// Punctuation marks
    Punctuation,
    /// Other/unknown token types
    #[default]
    Other,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
            token_type: TokenType::Other,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
            token_type: TokenType::Other,
        }
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Set the token type.
    pub fn with_token_type(mut self, token_type: TokenType) -> Self {
        self.token_type = token_type;
        self
    }

    /// Set the position.
    pub fn with_position(mut self, position: usize) -> Self {
        self.position = position;
        self
    }

    /// Whether this token belongs to the CJK script.
    pub fn is_cjk(&self) -> bool {
        self.token_type == TokenType::Cjk
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter())
    }
}
