//! Segmenter backed by [`jieba_rs`].
//!
//! # Examples
//!
//! ```
//! use sarissa_jieba::analysis::segmenter::{SegmentMode, Segmenter};
//! use sarissa_jieba::analysis::segmenter::jieba::JiebaSegmenter;
//!
//! let segmenter = JiebaSegmenter::new();
//! let words: Vec<_> = segmenter
//!     .tokenize("科学院", SegmentMode::Search, true)
//!     .unwrap()
//!     .into_iter()
//!     .map(|s| s.word)
//!     .collect();
//! assert_eq!(words, vec!["科学", "学院", "科学院"]);
//! ```

use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use ahash::AHashSet;
use jieba_rs::{Jieba, TokenizeMode};

use crate::analysis::segmenter::stop_words::{DEFAULT_CHINESE_STOP_WORDS_SET, load_stop_words};
use crate::analysis::segmenter::{DictPaths, Segment, SegmentMode, Segmenter, SegmenterLoader};
use crate::error::{JiebaError, Result};

/// A jieba instance together with its stop word list.
pub struct JiebaSegmenter {
    inner: Jieba,
    stop_words: AHashSet<String>,
}

impl JiebaSegmenter {
    /// Create a segmenter with the embedded dictionary and the built-in stop words.
    pub fn new() -> Self {
        JiebaSegmenter {
            inner: Jieba::new(),
            stop_words: DEFAULT_CHINESE_STOP_WORDS_SET.clone(),
        }
    }

    /// Load a segmenter from the dictionary files of a directory.
    ///
    /// jieba-rs carries its own HMM model and has no use for an IDF table
    /// during segmentation, so those two files are only checked for
    /// readability.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let paths = DictPaths::from_dir(dir);

        let mut dict = open(&paths.dict)?;
        let mut inner = Jieba::with_dict(&mut dict).map_err(|e| {
            JiebaError::segmenter(format!(
                "Failed to load dictionary '{}': {}",
                paths.dict.display(),
                e
            ))
        })?;

        open(&paths.hmm_model)?;

        let mut user_dict = open(&paths.user_dict)?;
        inner.load_dict(&mut user_dict).map_err(|e| {
            JiebaError::segmenter(format!(
                "Failed to load user dictionary '{}': {}",
                paths.user_dict.display(),
                e
            ))
        })?;

        open(&paths.idf)?;

        let stop_words = load_stop_words(&paths.stop_words)?;

        Ok(JiebaSegmenter { inner, stop_words })
    }

    /// Number of stop words known to this segmenter.
    pub fn stop_word_count(&self) -> usize {
        self.stop_words.len()
    }
}

impl Default for JiebaSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for JiebaSegmenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JiebaSegmenter")
            .field("stop_words", &self.stop_words.len())
            .finish_non_exhaustive()
    }
}

fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|e| {
        JiebaError::segmenter(format!("Failed to open '{}': {}", path.display(), e))
    })?;
    Ok(BufReader::new(file))
}

impl Segmenter for JiebaSegmenter {
    fn tokenize(&self, text: &str, mode: SegmentMode, hmm: bool) -> Result<Vec<Segment>> {
        let mode = match mode {
            SegmentMode::Precise => TokenizeMode::Default,
            SegmentMode::Search => TokenizeMode::Search,
        };

        // jieba reports character offsets; map them to byte offsets.
        let byte_offsets: Vec<usize> = text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
            .collect();
        let to_byte = |char_offset: usize| {
            byte_offsets.get(char_offset).copied().ok_or_else(|| {
                JiebaError::analysis(format!(
                    "Character offset {} out of range for text of {} characters",
                    char_offset,
                    byte_offsets.len() - 1
                ))
            })
        };

        self.inner
            .tokenize(text, mode, hmm)
            .into_iter()
            .map(|token| Ok(Segment::new(token.word, to_byte(token.start)?, to_byte(token.end)?)))
            .collect()
    }

    fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    fn name(&self) -> &'static str {
        "jieba"
    }
}

/// The default [`SegmenterLoader`], producing [`JiebaSegmenter`]s.
#[derive(Clone, Copy, Debug, Default)]
pub struct JiebaLoader;

impl SegmenterLoader for JiebaLoader {
    fn load(&self, dict_dir: Option<&Path>) -> Result<Box<dyn Segmenter>> {
        match dict_dir {
            Some(dir) => Ok(Box::new(JiebaSegmenter::from_dir(dir)?)),
            None => Ok(Box::new(JiebaSegmenter::new())),
        }
    }
}
