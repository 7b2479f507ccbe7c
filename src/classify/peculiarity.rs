use crate::classify::tables::{ELEMENTS, GLOBAL_SUFFIXES, SuffixTable, element_description};
use crate::error::{DecodeError, DecodeResult};
use crate::model::{PeculiarityDetail, PeculiaritySet};
use crate::tree::Tree;

/// Decode suffix tokens against one table; `None` when there are no tokens.
pub fn suffix_set(
    tokens: &[String],
    table: &SuffixTable,
    table_name: &'static str,
    separator: &str,
) -> DecodeResult<Option<PeculiaritySet>> {
    if tokens.is_empty() {
        return Ok(None);
    }

    let mut set = PeculiaritySet {
        text: tokens.join(separator),
        ..PeculiaritySet::default()
    };
    for token in tokens {
        let def = table
            .get(token.as_str())
            .ok_or_else(|| DecodeError::UnknownSuffix {
                table: table_name,
                token: token.clone(),
            })?;
        set.flags.names.insert(def.flag);
        set.details.push(PeculiarityDetail {
            text: token.clone(),
            description: def.description.to_string(),
        });
    }
    Ok(Some(set))
}

/// Suffixes and element traces attached to the whole classification.
///
/// Suffix details come first, then elements, each group in encounter order;
/// the text joins every token with a single space.
pub fn peculiarities(tree: &Tree) -> DecodeResult<Option<PeculiaritySet>> {
    let suffixes: Vec<String> = tree.find("SUFFIX").iter().map(Tree::collect_text).collect();
    let elements: Vec<String> = tree.find("ELEMENT").iter().map(Tree::collect_text).collect();

    if suffixes.is_empty() && elements.is_empty() {
        return Ok(None);
    }

    let mut set = suffix_set(&suffixes, &GLOBAL_SUFFIXES, "global", " ")?.unwrap_or_default();
    for symbol in &elements {
        let def = ELEMENTS
            .get(symbol.as_str())
            .ok_or_else(|| DecodeError::UnknownElement(symbol.clone()))?;
        set.flags.elements.insert(def.flag);
        set.details.push(PeculiarityDetail {
            text: symbol.clone(),
            description: element_description(def),
        });
    }

    set.text = suffixes
        .iter()
        .chain(&elements)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");
    Ok(Some(set))
}
