//! Word segmentation engines.
//!
//! A [`Segmenter`] splits a run of CJK text into dictionary words and tells
//! stop words apart. Loading one is expensive (several dictionary files are
//! read from disk), so loaded instances live in the process-wide
//! [`SegmenterRegistry`] and are shared by every filter configured with the
//! same dictionary directory.
//!
//! [`SegmenterRegistry`]: registry::SegmenterRegistry

use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub mod jieba;
pub mod registry;
pub mod stop_words;

/// Environment variable supplying the default dictionary directory.
pub const DICT_DIR_ENV: &str = "JIEBA_DICT_DIR";

/// Segmentation mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentMode {
    /// Cut the text into the most likely sequence of words.
    #[default]
    Precise,
    /// Like `Precise`, but long words are additionally emitted as their
    /// shorter dictionary sub-words, favoring recall.
    Search,
}

impl SegmentMode {
    /// `Search` when `search_mode` is set, `Precise` otherwise.
    pub fn from_search_flag(search_mode: bool) -> Self {
        if search_mode {
            SegmentMode::Search
        } else {
            SegmentMode::Precise
        }
    }
}

/// One word produced by a segmenter.
///
/// `start` and `end` are byte offsets relative to the text passed to
/// [`Segmenter::tokenize`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub word: String,
    pub start: usize,
    pub end: usize,
}

impl Segment {
    pub fn new<S: Into<String>>(word: S, start: usize, end: usize) -> Self {
        Segment {
            word: word.into(),
            start,
            end,
        }
    }
}

/// A loaded word segmentation engine.
///
/// Instances are shared between threads for reading. Dropping an instance
/// releases everything it holds.
pub trait Segmenter: Send + Sync {
    /// Split `text` into words, in the order the engine produces them.
    fn tokenize(&self, text: &str, mode: SegmentMode, hmm: bool) -> Result<Vec<Segment>>;

    /// Whether `word` is on this engine's stop word list.
    fn is_stop_word(&self, word: &str) -> bool;

    /// Get the name of this segmenter (for debugging and logging).
    fn name(&self) -> &'static str;
}

/// Builds new [`Segmenter`] instances.
pub trait SegmenterLoader: Send + Sync {
    /// Load a fresh instance from `dict_dir`, or from the built-in
    /// dictionaries when `dict_dir` is `None`.
    fn load(&self, dict_dir: Option<&Path>) -> Result<Box<dyn Segmenter>>;
}

/// The well-known dictionary files inside a dictionary directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DictPaths {
    pub dict: PathBuf,
    pub hmm_model: PathBuf,
    pub user_dict: PathBuf,
    pub idf: PathBuf,
    pub stop_words: PathBuf,
}

impl DictPaths {
    pub const DICT_FILE: &'static str = "jieba.dict.utf8";
    pub const HMM_MODEL_FILE: &'static str = "hmm_model.utf8";
    pub const USER_DICT_FILE: &'static str = "user.dict.utf8";
    pub const IDF_FILE: &'static str = "idf.utf8";
    pub const STOP_WORDS_FILE: &'static str = "stop_words.utf8";

    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        DictPaths {
            dict: dir.join(Self::DICT_FILE),
            hmm_model: dir.join(Self::HMM_MODEL_FILE),
            user_dict: dir.join(Self::USER_DICT_FILE),
            idf: dir.join(Self::IDF_FILE),
            stop_words: dir.join(Self::STOP_WORDS_FILE),
        }
    }
}

/// Resolve the registry key for a dictionary directory.
///
/// A non-empty `dict_dir` is used as is. Otherwise [`DICT_DIR_ENV`] is
/// consulted, and when that is unset too the empty key selects the built-in
/// dictionaries.
pub fn resolve_config_key(dict_dir: Option<&str>) -> String {
    resolve_config_key_with(dict_dir, |name| env::var(name).ok())
}

/// Like [`resolve_config_key`] with a custom environment lookup.
pub fn resolve_config_key_with<F>(dict_dir: Option<&str>, lookup: F) -> String
where
    F: FnOnce(&str) -> Option<String>,
{
    match dict_dir {
        Some(dir) if !dir.is_empty() => dir.to_string(),
        _ => lookup(DICT_DIR_ENV).unwrap_or_default(),
    }
}
