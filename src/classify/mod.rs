//! Turn a pruned parse tree into a [`SpectralClassification`].
//!
//! The tree is inspected for one of the special class families first
//! (S-type, white dwarf, carbon star); anything else must carry at least
//! one ordinary `CLASS`.

pub mod carbon;
pub mod luminosity;
pub mod ordinary;
pub mod peculiarity;
pub mod stype;
pub mod tables;
pub mod white_dwarf;


use crate::error::{DecodeError, DecodeResult};
use crate::model::SpectralClassification;
use crate::tree::{Node, Tree};

pub fn transform(root: &Node) -> DecodeResult<SpectralClassification> {
    let tree = Tree::new(root);

    let s_type = tree.find_optional("S_TYPE")?;
    let dwarf = tree.find_optional("WHITE_DWARF")?;
    let carbon = tree.find_optional("CARBON_STAR")?;

    let (class, luminosity, peculiarities) = if !s_type.is_empty() {
        (
            stype::class_detail(&s_type)?,
            None,
            peculiarity::peculiarities(&tree)?,
        )
    } else if !dwarf.is_empty() {
        (
            white_dwarf::class_detail(&dwarf)?,
            None,
            white_dwarf::peculiarities(&tree)?,
        )
    } else if !carbon.is_empty() {
        (carbon::class_detail(&carbon), None, None)
    } else if !tree.find("CLASS").is_empty() {
        (
            ordinary::class_detail(&tree)?,
            luminosity::luminosity_detail(&tree)?,
            peculiarity::peculiarities(&tree)?,
        )
    } else {
        return Err(DecodeError::MissingClass);
    };

    let spectrum = tree.find_optional("SPECTRUM")?;
    let text = if spectrum.is_empty() {
        class.text.clone()
    } else {
        spectrum.collect_text()
    };

    Ok(SpectralClassification {
        text,
        class,
        luminosity,
        peculiarities,
        data: None,
    })
}

/// Decimal leaf text such as `5`, `2.5` or `10`.
pub(crate) fn number(t: &Tree) -> DecodeResult<f64> {
    let text = t.collect_text();
    text.parse().map_err(|_| DecodeError::InvalidNumber(text))
}
