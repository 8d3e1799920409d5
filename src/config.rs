//! Options of the jieba token filter.
//!
//! Hosts configure the filter either with a typed [`JiebaFilterConfig`]
//! (deserializable with serde) or with a loosely typed option map, as analysis
//! definitions in JSON usually arrive. Both recognize the same keys:
//!
//! | key                 | type   | default                      |
//! |---------------------|--------|------------------------------|
//! | `jieba_dict_dir`    | string | `JIEBA_DICT_DIR` or built-in |
//! | `jieba_search_mode` | bool   | `true`                       |
//! | `jieba_use_hmm`     | bool   | `true`                       |

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::analysis::segmenter::SegmentMode;
use crate::error::{JiebaError, Result};

/// Name under which the jieba filter is registered.
pub const JIEBA_FILTER_NAME: &str = "filter_jieba";

pub const DICT_DIR_OPTION: &str = "jieba_dict_dir";
pub const SEARCH_MODE_OPTION: &str = "jieba_search_mode";
pub const USE_HMM_OPTION: &str = "jieba_use_hmm";

/// Configuration of a [`JiebaFilter`](crate::analysis::token_filter::jieba::JiebaFilter).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JiebaFilterConfig {
    /// Dictionary directory; `None` or empty falls back to `JIEBA_DICT_DIR`,
    /// then to the built-in dictionaries.
    #[serde(rename = "jieba_dict_dir", default)]
    pub dict_dir: Option<String>,

    /// Segment in search mode rather than precise mode.
    #[serde(rename = "jieba_search_mode", default = "default_true")]
    pub search_mode: bool,

    /// Let the HMM guess words missing from the dictionary.
    #[serde(rename = "jieba_use_hmm", default = "default_true")]
    pub use_hmm: bool,
}

fn default_true() -> bool {
    true
}

impl Default for JiebaFilterConfig {
    fn default() -> Self {
        JiebaFilterConfig {
            dict_dir: None,
            search_mode: true,
            use_hmm: true,
        }
    }
}

impl JiebaFilterConfig {
    /// Parse an option map, rejecting values of the wrong type.
    ///
    /// Unknown keys are ignored.
    pub fn from_options(options: &Map<String, Value>) -> Result<Self> {
        let mut config = JiebaFilterConfig::default();

        if let Some(value) = options.get(DICT_DIR_OPTION) {
            let dict_dir = value.as_str().ok_or_else(|| {
                JiebaError::config(format!("'{DICT_DIR_OPTION}' must be a string"))
            })?;
            config.dict_dir = Some(dict_dir.to_string());
        }

        if let Some(value) = options.get(SEARCH_MODE_OPTION) {
            config.search_mode = value.as_bool().ok_or_else(|| {
                JiebaError::config(format!("'{SEARCH_MODE_OPTION}' must be a bool"))
            })?;
        }

        if let Some(value) = options.get(USE_HMM_OPTION) {
            config.use_hmm = value.as_bool().ok_or_else(|| {
                JiebaError::config(format!("'{USE_HMM_OPTION}' must be a bool"))
            })?;
        }

        Ok(config)
    }

    /// The segmentation mode selected by `search_mode`.
    pub fn mode(&self) -> SegmentMode {
        SegmentMode::from_search_flag(self.search_mode)
    }
}
