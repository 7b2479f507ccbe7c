use crate::Result;
use crate::classifier::Classifier;
use crate::grammar::{TopDownParser, default_parser, parser_from_file};
use crate::reference::{LookupTree, default_lookup, lookup_from_file};
use clap::Args;

/// Where the grammar and reference table come from, and how large the parse
/// cache may grow. Unset paths fall back to the copies embedded in the crate.
#[derive(Debug, Clone, Default, Args)]
pub struct Config {
    /// Grammar file.
    #[arg(long)]
    pub grammar: Option<String>,

    /// Reference table (CSV).
    #[arg(long)]
    pub reference: Option<String>,

    /// Stop caching new inputs after this many entries.
    #[arg(long)]
    pub cache_limit: Option<usize>,
}

impl Config {
    pub fn load_parser(&self) -> Result<TopDownParser> {
        match &self.grammar {
            Some(path) => parser_from_file(path),
            None => default_parser(),
        }
    }

    pub fn load_lookup(&self) -> Result<LookupTree> {
        match &self.reference {
            Some(path) => lookup_from_file(path),
            None => default_lookup(),
        }
    }

    pub fn build_classifier(&self) -> Result<Classifier> {
        Ok(Classifier::new(self.load_parser()?, self.load_lookup()?).with_cache_limit(self.cache_limit))
    }
}
