//! Text analysis module for sarissa-jieba.
//!
//! This module provides the tokenization and filtering pipeline used to index
//! and query Chinese text: a generic tokenizer splits text into tokens, and
//! the jieba filter re-segments the CJK runs with a shared, reloadable
//! segmenter.

pub mod analyzer;
pub mod registry;
pub mod segmenter;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
