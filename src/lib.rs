//! # sarissa-jieba
//!
//! Chinese word segmentation for the Sarissa analysis pipeline, built on jieba.
//!
//! ## Features
//!
//! - Token filter that stitches per-character CJK tokens back together and
//!   re-segments them with jieba, keeping byte offsets and dense positions
//! - Stop word removal from the segmenter's stop word list
//! - Process-wide segmenter cache, one instance per dictionary directory
//! - Hot reload of dictionaries without blocking in-flight analysis for longer
//!   than a pointer swap
//!
//! ## Example
//!
//! ```
//! use sarissa_jieba::analysis::analyzer::Analyzer;
//! use sarissa_jieba::analysis::analyzer::chinese::ChineseAnalyzer;
//!
//! let analyzer = ChineseAnalyzer::new().unwrap();
//! let terms: Vec<String> = analyzer
//!     .analyze("hello  世界")
//!     .unwrap()
//!     .map(|token| token.text)
//!     .collect();
//! assert_eq!(terms, vec!["hello", "世界"]);
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;

pub mod prelude {
    pub use crate::analysis::analyzer::Analyzer;
    pub use crate::analysis::analyzer::chinese::ChineseAnalyzer;
    pub use crate::analysis::segmenter::registry::{SegmenterEntry, SegmenterRegistry};
    pub use crate::analysis::segmenter::{SegmentMode, Segmenter};
    pub use crate::analysis::token::{Token, TokenStream, TokenType};
    pub use crate::analysis::token_filter::Filter;
    pub use crate::analysis::token_filter::jieba::JiebaFilter;
    pub use crate::analysis::tokenizer::Tokenizer;
    pub use crate::config::JiebaFilterConfig;
    pub use crate::error::{JiebaError, Result};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
