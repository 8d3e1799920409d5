//! Stop word lists for Chinese segmentation.
//!
//! The built-in list is used when a segmenter is loaded without a dictionary
//! directory. Loading from a directory reads `stop_words.utf8` instead, one
//! word per line.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use ahash::AHashSet;

use crate::error::{JiebaError, Result};

/// Default Chinese stop words: particles, pronouns, conjunctions and the
/// full-width punctuation jieba emits as standalone words.
const DEFAULT_CHINESE_STOP_WORDS: &[&str] = &[
    "的", "地", "得", "了", "着", "过", "之", "与", "及", "和", "或", "而", "且", "并", "把",
    "被", "让", "给", "对", "于", "从", "向", "在", "为", "以", "其", "此", "这", "那", "这个",
    "那个", "这些", "那些", "这里", "那里", "我", "你", "您", "他", "她", "它", "我们", "你们",
    "他们", "她们", "它们", "咱们", "是", "也", "都", "就", "还", "又", "吗", "呢", "吧", "啊",
    "呀", "哦", "嗯", "哈", "么", "等", "等等", "之一", "一些", "一个", "一种", "没有", "什么",
    "怎么", "如何", "因为", "所以", "但是", "但", "然而", "如果", "虽然", "可以", "已经",
    "并且", "或者", "而且", "以及", "即", "则", "由", "由于", "关于", "对于", "至于", "并非",
    "，", "。", "、", "！", "？", "；", "：", "“", "”", "‘", "’", "（", "）", "《", "》", "…",
];

/// Default Chinese stop words as a set.
pub static DEFAULT_CHINESE_STOP_WORDS_SET: LazyLock<AHashSet<String>> = LazyLock::new(|| {
    DEFAULT_CHINESE_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// Read a stop word file: one word per line, surrounding whitespace trimmed,
/// blank lines ignored.
pub fn load_stop_words<P: AsRef<Path>>(path: P) -> Result<AHashSet<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        JiebaError::segmenter(format!(
            "Failed to read stop words '{}': {}",
            path.display(),
            e
        ))
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
