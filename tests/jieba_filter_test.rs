use std::sync::Arc;

use sarissa_jieba::analysis::analyzer::Analyzer;
use sarissa_jieba::analysis::analyzer::chinese::ChineseAnalyzer;
use sarissa_jieba::analysis::analyzer::pipeline::PipelineAnalyzer;
use sarissa_jieba::analysis::registry::FilterRegistry;
use sarissa_jieba::analysis::token::{Token, TokenType};
use sarissa_jieba::analysis::token_filter::Filter;
use sarissa_jieba::analysis::token_filter::jieba::JiebaFilter;
use sarissa_jieba::analysis::tokenizer::Tokenizer;
use sarissa_jieba::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
use sarissa_jieba::config::{JIEBA_FILTER_NAME, JiebaFilterConfig};
use sarissa_jieba::error::Result;
use serde_json::{Map, Value};

fn analyze(text: &str) -> Result<Vec<Token>> {
    let analyzer = ChineseAnalyzer::new()?;
    Ok(analyzer.analyze(text)?.collect())
}

fn terms(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

#[test]
fn joins_adjacent_characters_into_words() -> Result<()> {
    let tokens = analyze("hello  世界")?;
    assert_eq!(terms(&tokens), vec!["hello", "世界"]);

    assert_eq!(tokens[0].position, 1);
    assert_eq!(tokens[1].position, 2);
    assert_eq!((tokens[1].start_offset, tokens[1].end_offset), (7, 13));
    assert_eq!(tokens[1].token_type, TokenType::Cjk);
    Ok(())
}

#[test]
fn whitespace_keeps_characters_apart() -> Result<()> {
    let tokens = analyze("hello  世 界")?;
    assert_eq!(terms(&tokens), vec!["hello", "世", "界"]);
    assert_eq!((tokens[2].start_offset, tokens[2].end_offset), (11, 14));
    Ok(())
}

#[test]
fn drops_stop_words_and_renumbers() -> Result<()> {
    let tokens = analyze("我爱吃的水果包括西瓜, 橙子等等")?;
    assert_eq!(
        terms(&tokens),
        vec!["爱", "吃", "水果", "包括", "西瓜", "橙子"]
    );

    let positions: Vec<usize> = tokens.iter().map(|t| t.position).collect();
    assert_eq!(positions, vec![1, 2, 3, 4, 5, 6]);
    Ok(())
}

#[test]
fn search_mode_emits_sub_words_before_the_word() -> Result<()> {
    let tokens = analyze("吃苦耐劳")?;
    assert_eq!(terms(&tokens), vec!["吃苦", "耐劳", "吃苦耐劳"]);
    assert_eq!((tokens[1].start_offset, tokens[1].end_offset), (6, 12));
    assert_eq!((tokens[2].start_offset, tokens[2].end_offset), (0, 12));

    let tokens = analyze("科学院")?;
    assert_eq!(terms(&tokens), vec!["科学", "学院", "科学院"]);
    Ok(())
}

#[test]
fn precise_mode_keeps_whole_words() -> Result<()> {
    let config = JiebaFilterConfig {
        search_mode: false,
        ..JiebaFilterConfig::default()
    };
    let analyzer = ChineseAnalyzer::with_config(&config)?;

    let tokens: Vec<Token> = analyzer.analyze("科学院")?.collect();
    assert_eq!(terms(&tokens), vec!["科学院"]);
    Ok(())
}

#[test]
fn offsets_point_back_into_the_source() -> Result<()> {
    let text = "我们在北京大学学习 Rust";
    for token in analyze(text)? {
        assert_eq!(&text[token.start_offset..token.end_offset], token.text);
    }
    Ok(())
}

#[test]
fn filter_built_by_name_matches_direct_construction() -> Result<()> {
    let registry = FilterRegistry::with_defaults();
    let mut options = Map::new();
    options.insert("jieba_search_mode".to_string(), Value::Bool(true));
    options.insert("jieba_use_hmm".to_string(), Value::Bool(true));

    let by_name = registry.build(JIEBA_FILTER_NAME, &options)?;
    let direct = JiebaFilter::new(None, true, true)?;

    let tokenizer = UnicodeWordTokenizer::new();
    let input: Vec<Token> = tokenizer.tokenize("科学院")?.collect();

    let a: Vec<Token> = by_name.filter(Box::new(input.clone().into_iter()))?.collect();
    let b = direct.filter_tokens(&input)?;
    assert_eq!(a, b);
    Ok(())
}

#[test]
fn pipeline_with_jieba_filter() -> Result<()> {
    let analyzer = PipelineAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()))
        .add_filter(Arc::new(JiebaFilter::new(None, false, true)?));

    let tokens: Vec<Token> = analyzer.analyze("hello  世界")?.collect();
    assert_eq!(terms(&tokens), vec!["hello", "世界"]);
    Ok(())
}
