//! Reference table of physical properties and the point lookup over it.

pub mod lookup;
pub mod parse;
pub mod row;


pub use lookup::LookupTree;
pub use parse::{parse_reference_file, parse_reference_text};
pub use row::{Colour, Properties, ReferenceRow};

use crate::Result;
use anyhow::Context;

/// Reference table shipped with the crate.
pub const REFERENCE_TABLE: &str = include_str!("../../data/reference.csv");

pub fn default_lookup() -> Result<LookupTree> {
    let rows = parse_reference_text(REFERENCE_TABLE, "data/reference.csv")
        .context("load embedded reference table")?;
    Ok(LookupTree::new(&rows))
}

pub fn lookup_from_file(path: &str) -> Result<LookupTree> {
    Ok(LookupTree::new(&parse_reference_file(path)?))
}
