//! Analyzers combine a tokenizer with a chain of token filters.
//!
//! - [`pipeline::PipelineAnalyzer`] - Any tokenizer followed by any filters
//! - [`chinese::ChineseAnalyzer`] - Unicode word tokenizer followed by jieba

use crate::analysis::token::TokenStream;
use crate::error::Result;

pub mod chinese;
pub mod pipeline;

/// Trait for analyzers that turn raw text into a token stream.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    ///
    /// This runs the complete analysis pipeline, including tokenization and
    /// all configured filters.
    ///
    /// # Examples
    ///
    /// ```
    /// use sarissa_jieba::analysis::analyzer::Analyzer;
    /// use sarissa_jieba::analysis::analyzer::chinese::ChineseAnalyzer;
    ///
    /// let analyzer = ChineseAnalyzer::new().unwrap();
    /// let tokens: Vec<_> = analyzer.analyze("hello  世界").unwrap().collect();
    /// assert_eq!(tokens[1].text, "世界");
    /// ```
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &str;
}
