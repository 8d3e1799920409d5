//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::cli::args::{OutputFormat, SarissaJiebaArgs};
use crate::error::Result;

/// Tokens produced for one input text.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub text: String,
    pub tokens: Vec<Token>,
}

/// Result structure for the analyze command.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeOutput {
    pub results: Vec<AnalysisResult>,
    pub duration_ms: u64,
}

/// Result structure for the info command.
#[derive(Debug, Serialize, Deserialize)]
pub struct SegmenterInfo {
    pub config_key: String,
    pub dict_dir: Option<String>,
    pub loaded_at: String,
    pub load_duration_ms: f64,
    pub reloads: u64,
}

/// Results that know how to print themselves for humans.
pub trait HumanOutput {
    fn print_human(&self);
}

impl HumanOutput for AnalyzeOutput {
    fn print_human(&self) {
        for result in &self.results {
            println!("{}", result.text);
            for token in &result.tokens {
                println!(
                    "  {:>4}  {}  [{}..{})  {:?}",
                    token.position, token.text, token.start_offset, token.end_offset, token.token_type
                );
            }
        }
    }
}

impl HumanOutput for SegmenterInfo {
    fn print_human(&self) {
        let key = if self.config_key.is_empty() {
            "(built-in)"
        } else {
            &self.config_key
        };
        println!("Dictionary: {key}");
        println!("Loaded at: {}", self.loaded_at);
        println!("Load duration: {:.2}ms", self.load_duration_ms);
        println!("Reloads: {}", self.reloads);
    }
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &SarissaJiebaArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!("{message}");
                println!();
            }
            result.print_human();
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &SarissaJiebaArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}
