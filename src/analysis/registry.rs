//! Named token filter constructors.
//!
//! A host that builds analysis chains from configuration looks filters up by
//! name and hands them their option map.
//!
//! # Examples
//!
//! ```
//! use serde_json::{Map, Value};
//! use sarissa_jieba::analysis::registry::FilterRegistry;
//! use sarissa_jieba::config::JIEBA_FILTER_NAME;
//!
//! let registry = FilterRegistry::with_defaults();
//! let mut options = Map::new();
//! options.insert("jieba_search_mode".to_string(), Value::Bool(false));
//!
//! let filter = registry.build(JIEBA_FILTER_NAME, &options).unwrap();
//! assert_eq!(filter.name(), "jieba");
//! ```

use std::sync::Arc;

use ahash::AHashMap;
use serde_json::{Map, Value};

use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::jieba::JiebaFilter;
use crate::config::{JIEBA_FILTER_NAME, JiebaFilterConfig};
use crate::error::{JiebaError, Result};

/// Builds a filter from its option map.
pub type FilterConstructor = fn(&Map<String, Value>) -> Result<Arc<dyn Filter>>;

/// Table of filter constructors keyed by name.
#[derive(Clone, Debug, Default)]
pub struct FilterRegistry {
    constructors: AHashMap<String, FilterConstructor>,
}

impl FilterRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the filters of this crate registered.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(JIEBA_FILTER_NAME, jieba_filter_constructor);
        registry
    }

    /// Register `constructor` under `name`, replacing any previous one.
    pub fn register<S: Into<String>>(&mut self, name: S, constructor: FilterConstructor) {
        self.constructors.insert(name.into(), constructor);
    }

    /// Build the filter registered under `name`.
    pub fn build(&self, name: &str, options: &Map<String, Value>) -> Result<Arc<dyn Filter>> {
        let constructor = self
            .constructors
            .get(name)
            .ok_or_else(|| JiebaError::config(format!("Unknown token filter '{name}'")))?;
        constructor(options)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Constructor registered as [`JIEBA_FILTER_NAME`].
pub fn jieba_filter_constructor(options: &Map<String, Value>) -> Result<Arc<dyn Filter>> {
    let config = JiebaFilterConfig::from_options(options)?;
    Ok(Arc::new(JiebaFilter::from_config(&config)?))
}
