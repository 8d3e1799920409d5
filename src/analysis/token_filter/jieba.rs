//! Chinese word segmentation filter.
//!
//! Generic tokenizers emit Chinese text one ideograph per token. This filter
//! stitches byte-contiguous runs of [`TokenType::Cjk`] tokens back into the
//! original text, re-segments each run with jieba, drops stop words, and
//! splices the words back into the stream. Every other token passes through
//! unchanged. Output positions are renumbered `1..=n`.
//!
//! # Examples
//!
//! ```
//! use sarissa_jieba::analysis::token_filter::Filter;
//! use sarissa_jieba::analysis::token_filter::jieba::JiebaFilter;
//! use sarissa_jieba::analysis::tokenizer::Tokenizer;
//! use sarissa_jieba::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
//!
//! let tokenizer = UnicodeWordTokenizer::new();
//! let filter = JiebaFilter::new(None, true, true).unwrap();
//!
//! let tokens: Vec<_> = filter
//!     .filter(tokenizer.tokenize("hello  世界").unwrap())
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[1].text, "世界");
//! assert_eq!((tokens[1].start_offset, tokens[1].end_offset), (7, 13));
//! assert_eq!(tokens[1].position, 2);
//! ```

use std::sync::Arc;

use crate::analysis::segmenter::registry::{SegmenterEntry, SegmenterRegistry};
use crate::analysis::segmenter::{SegmentMode, Segmenter};
use crate::analysis::token::{Token, TokenStream, TokenType};
use crate::analysis::token_filter::Filter;
use crate::config::JiebaFilterConfig;
use crate::error::Result;

/// Re-segments CJK runs of a token stream with jieba.
#[derive(Clone, Debug)]
pub struct JiebaFilter {
    entry: Arc<SegmenterEntry>,
    mode: SegmentMode,
    use_hmm: bool,
}

impl JiebaFilter {
    /// Create a filter using the global registry's segmenter for `dict_dir`.
    ///
    /// Loads the segmenter if this is the first use of the directory.
    pub fn new(dict_dir: Option<&str>, search_mode: bool, use_hmm: bool) -> Result<Self> {
        let entry = SegmenterRegistry::global().acquire(dict_dir)?;
        Ok(Self::with_entry(
            entry,
            SegmentMode::from_search_flag(search_mode),
            use_hmm,
        ))
    }

    /// Create a filter from parsed options.
    pub fn from_config(config: &JiebaFilterConfig) -> Result<Self> {
        Self::new(config.dict_dir.as_deref(), config.search_mode, config.use_hmm)
    }

    /// Create a filter on an existing registry entry.
    pub fn with_entry(entry: Arc<SegmenterEntry>, mode: SegmentMode, use_hmm: bool) -> Self {
        JiebaFilter {
            entry,
            mode,
            use_hmm,
        }
    }

    /// The registry entry this filter segments with.
    pub fn entry(&self) -> &Arc<SegmenterEntry> {
        &self.entry
    }

    pub fn mode(&self) -> SegmentMode {
        self.mode
    }

    pub fn use_hmm(&self) -> bool {
        self.use_hmm
    }

    /// Run the filter over a slice of tokens.
    ///
    /// The segmenter is borrowed once for the whole call.
    pub fn filter_tokens(&self, input: &[Token]) -> Result<Vec<Token>> {
        let segmenter = self.entry.borrow();
        let mut output = Vec::with_capacity(input.len());

        // [start, end] indexes a byte-contiguous run of CJK tokens in `input`.
        let mut run: Option<(usize, usize)> = None;

        for (i, token) in input.iter().enumerate() {
            if let Some((start, end)) = run
                && token.is_cjk()
                && token.start_offset == input[end].end_offset
            {
                run = Some((start, i));
                continue;
            }

            if let Some((start, end)) = run.take() {
                self.segment_run(&*segmenter, &input[start..=end], &mut output)?;
            }

            if token.is_cjk() {
                run = Some((i, i));
            } else {
                push_token(&mut output, token.clone());
            }
        }

        if let Some((start, end)) = run {
            self.segment_run(&*segmenter, &input[start..=end], &mut output)?;
        }

        Ok(output)
    }

    /// Re-segment one run and append its non-stop words to `output`.
    ///
    /// Segment offsets are added to the run's start offset as reported; they
    /// are not checked against the run's extent.
    fn segment_run(
        &self,
        segmenter: &dyn Segmenter,
        run: &[Token],
        output: &mut Vec<Token>,
    ) -> Result<()> {
        let base = run[0].start_offset;
        let text: String = run.iter().map(|token| token.text.as_str()).collect();

        for segment in segmenter.tokenize(&text, self.mode, self.use_hmm)? {
            if segmenter.is_stop_word(&segment.word) {
                continue;
            }
            push_token(
                output,
                Token::with_offsets(segment.word, 0, base + segment.start, base + segment.end)
                    .with_token_type(TokenType::Cjk),
            );
        }

        Ok(())
    }
}

fn push_token(output: &mut Vec<Token>, token: Token) {
    let position = output.len() + 1;
    output.push(token.with_position(position));
}

impl Filter for JiebaFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let input: Vec<Token> = tokens.collect();
        let output = self.filter_tokens(&input)?;
        Ok(Box::new(output.into_iter()))
    }

    fn name(&self) -> &'static str {
        "jieba"
    }
}
