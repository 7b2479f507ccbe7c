use crate::classify::peculiarity::suffix_set;
use crate::classify::tables::{LUMINOSITY_DESCRIPTIONS, LUMINOSITY_PREFIXES, LUMINOSITY_SUFFIXES};
use crate::error::{DecodeError, DecodeResult};
use crate::model::{Luminosity, LuminosityDetail, LuminosityKind};
use crate::tree::Tree;

pub fn luminosity(code: &str) -> Luminosity {
    Luminosity {
        luminosity_class: code.to_string(),
        description: LUMINOSITY_DESCRIPTIONS.get(code).copied(),
    }
}

pub fn luminosity_detail(tree: &Tree) -> DecodeResult<Option<LuminosityDetail>> {
    // Prefix form carries exactly one translated class and nothing else.
    let prefix = tree.find_optional("LUMINOSITY_PREFIX")?;
    if !prefix.is_empty() {
        let text = prefix.collect_text();
        let code = LUMINOSITY_PREFIXES
            .get(text.as_str())
            .ok_or_else(|| DecodeError::UnknownPrefix(text.clone()))?;
        return Ok(Some(LuminosityDetail {
            text,
            kind: LuminosityKind::Prefix(luminosity(code)),
            peculiarities: None,
        }));
    }

    let body = tree.find_optional("LUMINOSITIES_BODY")?;
    if body.is_empty() {
        return Ok(None);
    }

    let values: Vec<Luminosity> = tree
        .find("LUMINOSITY")
        .iter()
        .map(|t| luminosity(&t.collect_text()))
        .collect();
    let found = values.len();

    let kind = if !tree.find_optional("LUMINOSITY_RANGE")?.is_empty() {
        match <[Luminosity; 2]>::try_from(values) {
            Ok([from, to]) => LuminosityKind::Range { from, to },
            Err(_) => {
                return Err(DecodeError::UnexpectedCount {
                    what: "luminosities in a range",
                    expected: "2",
                    found,
                });
            }
        }
    } else if !tree.find_optional("LUMINOSITY_CHOICE")?.is_empty() {
        if found < 2 {
            return Err(DecodeError::UnexpectedCount {
                what: "luminosities in a choice",
                expected: "at least 2",
                found,
            });
        }
        LuminosityKind::Choice(values)
    } else {
        match <[Luminosity; 1]>::try_from(values) {
            Ok([value]) => LuminosityKind::Value(value),
            Err(_) => {
                return Err(DecodeError::UnexpectedCount {
                    what: "luminosities",
                    expected: "1",
                    found,
                });
            }
        }
    };

    let suffixes: Vec<String> = tree
        .find("LUMINOSITIES_SUFFIX")
        .iter()
        .map(Tree::collect_text)
        .collect();

    Ok(Some(LuminosityDetail {
        text: body.collect_text(),
        kind,
        peculiarities: suffix_set(&suffixes, &LUMINOSITY_SUFFIXES, "luminosity", "")?,
    }))
}
