//! Grammar text loading and the top-down engine that produces parse trees.

pub mod parse;
pub mod rules;


pub use parse::{GrammarEngine, ParseOutcome, TopDownParser};
pub use rules::{Grammar, Item, Rule};

use crate::Result;
use anyhow::Context;
use std::fs;

pub const START_SYMBOL: &str = "START";

/// Grammar shipped with the crate.
pub const SPECTRAL_GRAMMAR: &str = include_str!("../../data/spectral.grammar");

pub fn default_parser() -> Result<TopDownParser> {
    let grammar = Grammar::from_text(SPECTRAL_GRAMMAR, START_SYMBOL)
        .context("load embedded spectral grammar")?;
    Ok(TopDownParser::new(grammar))
}

pub fn parser_from_file(path: &str) -> Result<TopDownParser> {
    let text = fs::read_to_string(path).with_context(|| format!("read grammar file {}", path))?;
    let grammar = Grammar::from_text(&text, START_SYMBOL)
        .with_context(|| format!("load grammar file {}", path))?;
    Ok(TopDownParser::new(grammar))
}
