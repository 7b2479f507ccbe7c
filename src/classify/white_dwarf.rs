use crate::classify::number;
use crate::classify::peculiarity::suffix_set;
use crate::classify::tables::WHITE_DWARF_SUFFIXES;
use crate::error::DecodeResult;
use crate::model::{ClassDetail, ClassKind, PeculiaritySet, WhiteDwarfClass};
use crate::tree::Tree;

pub fn class_detail(dwarf: &Tree) -> DecodeResult<ClassDetail> {
    let dwarf_type = dwarf.find_optional("WHITE_DWARF_TYPE")?;
    let temperature = dwarf.find_optional("WHITE_DWARF_TEMPERATURE")?;

    let class = WhiteDwarfClass::new(
        (!dwarf_type.is_empty()).then(|| dwarf_type.collect_text()),
        if temperature.is_empty() {
            None
        } else {
            Some(number(&temperature)?)
        },
    );

    Ok(ClassDetail {
        text: format!(
            "{}{}{}",
            class.letter,
            dwarf_type.collect_text(),
            temperature.collect_text()
        ),
        kind: ClassKind::WhiteDwarf(class),
        peculiarities: None,
    })
}

/// `P`, `E`, `H`, `V` and `PEC` codes, text concatenated without separators.
pub fn peculiarities(tree: &Tree) -> DecodeResult<Option<PeculiaritySet>> {
    let codes: Vec<String> = tree
        .find("WHITE_DWARF_PECULIARITY")
        .iter()
        .map(Tree::collect_text)
        .collect();
    suffix_set(&codes, &WHITE_DWARF_SUFFIXES, "white dwarf", "")
}
