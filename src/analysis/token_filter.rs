//! Token filter implementations for token transformation.
//!
//! Filters receive the token stream produced by a tokenizer and produce a new
//! stream.
//!
//! # Available Filters
//!
//! - [`jieba::JiebaFilter`] - Re-segments CJK runs with jieba and drops stop words
//!
//! # Filter Chaining
//!
//! ```text
//! Tokenizer → Jieba → Index
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
///
/// # Examples
///
/// Implementing a custom filter:
///
/// ```
/// use sarissa_jieba::analysis::token::{Token, TokenStream};
/// use sarissa_jieba::analysis::token_filter::Filter;
/// use sarissa_jieba::error::Result;
///
/// struct ReverseFilter;
///
/// impl Filter for ReverseFilter {
///     fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
///         let reversed: Vec<Token> = tokens
///             .map(|mut t| {
///                 t.text = t.text.chars().rev().collect();
///                 t
///             })
///             .collect();
///         Ok(Box::new(reversed.into_iter()))
///     }
///
///     fn name(&self) -> &'static str {
///         "reverse"
///     }
/// }
/// ```
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod jieba;
