//! Chinese language analyzer.
//!
//! # Pipeline
//!
//! 1. Unicode word tokenizer (one token per ideograph)
//! 2. Jieba filter (re-segmentation and stop word removal)
//!
//! # Examples
//!
//! ```
//! use sarissa_jieba::analysis::analyzer::Analyzer;
//! use sarissa_jieba::analysis::analyzer::chinese::ChineseAnalyzer;
//!
//! let analyzer = ChineseAnalyzer::new().unwrap();
//! let tokens: Vec<_> = analyzer.analyze("科学院").unwrap().collect();
//! let terms: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(terms, vec!["科学", "学院", "科学院"]);
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::jieba::JiebaFilter;
use crate::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
use crate::config::JiebaFilterConfig;
use crate::error::Result;

/// Analyzer for Chinese and mixed Chinese/Latin text.
#[derive(Clone, Debug)]
pub struct ChineseAnalyzer {
    inner: PipelineAnalyzer,
}

impl ChineseAnalyzer {
    /// Create an analyzer with the default filter options.
    pub fn new() -> Result<Self> {
        Self::with_config(&JiebaFilterConfig::default())
    }

    /// Create an analyzer with the given filter options.
    pub fn with_config(config: &JiebaFilterConfig) -> Result<Self> {
        Ok(Self::with_filter(JiebaFilter::from_config(config)?))
    }

    /// Create an analyzer around an existing jieba filter.
    pub fn with_filter(filter: JiebaFilter) -> Self {
        let inner = PipelineAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()))
            .add_filter(Arc::new(filter))
            .with_name("chinese");
        ChineseAnalyzer { inner }
    }
}

impl Analyzer for ChineseAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &str {
        "chinese"
    }
}
