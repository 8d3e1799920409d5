//! Command implementations for the sarissa-jieba CLI.

use std::fs;
use std::time::Instant;

use anyhow::Context;
use rayon::prelude::*;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::chinese::ChineseAnalyzer;
use crate::analysis::segmenter::registry::SegmenterRegistry;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::JiebaFilterConfig;
use crate::error::{JiebaError, Result};

/// Execute a CLI command.
pub fn execute_command(args: SarissaJiebaArgs) -> Result<()> {
    match &args.command {
        Command::Analyze(analyze_args) => analyze(analyze_args, &args),
        Command::Info(info_args) => show_info(info_args, &args),
    }
}

/// Analyze a text, or every line of a file in parallel.
fn analyze(args: &AnalyzeArgs, cli_args: &SarissaJiebaArgs) -> Result<()> {
    let config = JiebaFilterConfig {
        dict_dir: args.dict_dir.clone(),
        search_mode: !args.precise,
        use_hmm: !args.no_hmm,
    };
    let analyzer = ChineseAnalyzer::with_config(&config)?;

    let texts = input_texts(args)?;

    let start = Instant::now();
    let results = analyze_texts(&analyzer, &texts)?;
    let duration_ms = start.elapsed().as_millis() as u64;

    log::info!("Analyzed {} text(s) in {}ms", results.len(), duration_ms);

    output_result(
        "Analysis results:",
        &AnalyzeOutput {
            results,
            duration_ms,
        },
        cli_args,
    )
}

/// The texts to analyze: TEXT, or the non-blank lines of `--input`.
fn input_texts(args: &AnalyzeArgs) -> Result<Vec<String>> {
    match (&args.input, &args.text) {
        (Some(path), _) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file '{}'", path.display()))?;
            Ok(content
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(str::to_string)
                .collect())
        }
        (None, Some(text)) => Ok(vec![text.clone()]),
        (None, None) => Err(JiebaError::invalid_argument(
            "Nothing to analyze: pass TEXT or --input FILE",
        )),
    }
}

/// Analyze texts in parallel, keeping input order.
pub fn analyze_texts<A: Analyzer>(analyzer: &A, texts: &[String]) -> Result<Vec<AnalysisResult>> {
    texts
        .par_iter()
        .map(|text| {
            Ok(AnalysisResult {
                text: text.clone(),
                tokens: analyzer.analyze(text)?.collect(),
            })
        })
        .collect()
}

/// Load (and optionally reload) a segmenter, then report its metadata.
fn show_info(args: &InfoArgs, cli_args: &SarissaJiebaArgs) -> Result<()> {
    let registry = SegmenterRegistry::global();
    let entry = registry.acquire(args.dict_dir.as_deref())?;

    for _ in 0..args.reload {
        registry.reload(&entry)?;
        let info = entry.load_info();
        log::info!(
            "Reloaded at {} in {:?}",
            info.loaded_at.to_rfc3339(),
            info.load_duration
        );
    }

    let info = entry.load_info();
    let result = SegmenterInfo {
        config_key: entry.config_key().to_string(),
        dict_dir: entry.dict_dir().map(|dir| dir.display().to_string()),
        loaded_at: info.loaded_at.to_rfc3339(),
        load_duration_ms: info.load_duration.as_secs_f64() * 1000.0,
        reloads: entry.reload_count(),
    };

    output_result("Segmenter:", &result, cli_args)
}
