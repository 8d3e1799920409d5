//! Tokenizer implementations for text analysis.
//!
//! Tokenizers split raw text into the token stream that filters such as
//! [`JiebaFilter`] post-process. They are script-agnostic: CJK text comes out
//! one ideograph per token and is re-segmented downstream.
//!
//! [`JiebaFilter`]: crate::analysis::token_filter::jieba::JiebaFilter
//!
//! # Examples
//!
//! ```
//! use sarissa_jieba::analysis::tokenizer::Tokenizer;
//! use sarissa_jieba::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
//!
//! let tokenizer = UnicodeWordTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("hello 世界").unwrap().collect();
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[0].text, "hello");
//! assert_eq!(tokens[1].text, "世");
//! assert_eq!(tokens[2].text, "界");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod unicode_word;
