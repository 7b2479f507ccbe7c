//! Fixed lookup tables for luminosity codes, suffixes and element traces.

use once_cell::sync::Lazy;
use std::collections::HashMap;

const LUMINOSITY_DESCRIPTION_ENTRIES: &[(&str, &str)] = &[
    ("0", "Hypergiant"),
    ("Ia+", "Hypergiant"),
    ("Ia", "Luminous Supergiant"),
    ("Iab", "Intermediate size Luminous Supergiant"),
    ("Ib", "Less Luminous Supergiant"),
    ("I", "Supergiant"),
    ("II", "Bright Giant"),
    ("IIa", "Luminous Bright Giant"),
    ("IIb", "Less Luminous Bright Giant"),
    ("III", "Giant"),
    ("IIIa", "Luminous Giant"),
    ("IIIb", "Less Luminous Giant"),
    ("IV", "Sub-Giant"),
    ("IVa", "Luminous Sub-Giant"),
    ("IVb", "Less Luminous Sub-Giant"),
    ("V", "Dwarf (Main Sequence)"),
    ("Va", "Luminous Dwarf (Main Sequence)"),
    ("Vb", "Less Luminous Dwarf (Main Sequence)"),
    ("VI", "Sub-Dwarf"),
    ("VIa", "Luminous Sub-Dwarf"),
    ("VIb", "Less Luminous Sub-Dwarf"),
    ("VII", "White-Dwarf"),
    ("VIIa", "Luminous White-Dwarf"),
    ("VIIb", "Less Luminous White-Dwarf"),
];

pub static LUMINOSITY_DESCRIPTIONS: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| LUMINOSITY_DESCRIPTION_ENTRIES.iter().copied().collect());

/// Prefix notation (`sdG5`) to luminosity-class code.
pub static LUMINOSITY_PREFIXES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [("sd", "VI"), ("d", "V"), ("sg", "I"), ("g", "III")]
        .into_iter()
        .collect()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixDefinition {
    pub flag: &'static str,
    pub description: &'static str,
}

enum SuffixEntry {
    Defined(SuffixDefinition),
    /// Shares the definition of another token in the same table.
    Alias(&'static str),
}

const fn defined(flag: &'static str, description: &'static str) -> SuffixEntry {
    SuffixEntry::Defined(SuffixDefinition { flag, description })
}

const GLOBAL_SUFFIX_ENTRIES: &[(&str, SuffixEntry)] = &[
    ("...", defined("undescribed", "Undescribed peculiarities")),
    ("comp", defined("compositeSpectrum", "Composite spectrum")),
    ("e", defined("emissionLines", "Emission lines")),
    ("eq", defined("emissionLinesPCygni", "Emission lines with P Cygni profile")),
    ("f", defined("n3He2Emission", "N III and He II emission")),
    ("(f)", defined("n3WeakHe2Emission", "N III and weak/missing He II emission")),
    ("((f))", defined("he2WeakN3Emission", "He II and weak N III emission")),
    ("He wk", defined("weakHeliumLines", "Weak Helium lines")),
    ("m", defined("enhancedMetalFeatures", "Enhanced metal features")),
    ("n", defined("broadAbsorptionDueToSpinning", "Broad absorption due to spinning")),
    ("nn", defined("veryBroadAbsorptionFeatures", "Very broad absorption features")),
    ("p", defined("unspecifiedPeculiarity", "Unspecified peculiarity")),
    ("s", defined("narrowAbsorptionLines", "Narrow absorption lines")),
    ("sh", defined("shellStarFeatures", "Shell star features")),
    ("v", defined("variableSpectralFeature", "Variable spectral feature")),
    ("var", SuffixEntry::Alias("v")),
    ("w", defined("weakLines", "Weak lines")),
    ("wl", SuffixEntry::Alias("w")),
    ("wk", SuffixEntry::Alias("w")),
];

const CLASS_SUFFIX_ENTRIES: &[(&str, SuffixEntry)] =
    &[(":", defined("uncertain", "Uncertain spectral class"))];

const LUMINOSITY_SUFFIX_ENTRIES: &[(&str, SuffixEntry)] =
    &[(":", defined("uncertain", "Uncertain luminosity"))];

const WHITE_DWARF_SUFFIX_ENTRIES: &[(&str, SuffixEntry)] = &[
    ("P", defined("magneticPolarized", "Magnetic white dwarf with detectable polarization")),
    ("E", defined("emissionLines", "Emission lines present")),
    ("H", defined("magneticUnpolarized", "Magnetic white dwarf without detectable polarization")),
    ("V", defined("variable", "Variable")),
    ("PEC", defined("peculiarities", "Peculiarities exist")),
];

pub type SuffixTable = HashMap<&'static str, SuffixDefinition>;

pub static GLOBAL_SUFFIXES: Lazy<SuffixTable> = Lazy::new(|| resolve(GLOBAL_SUFFIX_ENTRIES));
pub static CLASS_SUFFIXES: Lazy<SuffixTable> = Lazy::new(|| resolve(CLASS_SUFFIX_ENTRIES));
pub static LUMINOSITY_SUFFIXES: Lazy<SuffixTable> =
    Lazy::new(|| resolve(LUMINOSITY_SUFFIX_ENTRIES));
pub static WHITE_DWARF_SUFFIXES: Lazy<SuffixTable> =
    Lazy::new(|| resolve(WHITE_DWARF_SUFFIX_ENTRIES));

/// Follow alias chains so every token maps straight to a definition.
/// Tokens whose chain never reaches a definition are left out.
fn resolve(entries: &[(&'static str, SuffixEntry)]) -> SuffixTable {
    let by_token: HashMap<&str, &SuffixEntry> = entries.iter().map(|(t, e)| (*t, e)).collect();

    let mut out = SuffixTable::new();
    for (token, entry) in entries {
        let mut current = entry;
        // Bounded by the table size so a cycle cannot spin forever.
        for _ in 0..=entries.len() {
            match current {
                SuffixEntry::Defined(def) => {
                    out.insert(*token, *def);
                    break;
                }
                SuffixEntry::Alias(target) => match by_token.get(target) {
                    Some(next) => current = *next,
                    None => break,
                },
            }
        }
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementDefinition {
    pub flag: &'static str,
    pub name: &'static str,
}

pub static ELEMENTS: Lazy<HashMap<&'static str, ElementDefinition>> = Lazy::new(|| {
    [
        ("Sr", "strontium", "Strontium"),
        ("He", "helium", "Helium"),
        ("Eu", "europium", "Europium"),
        ("Si", "silicon", "Silicon"),
        ("Hg", "mercury", "Mercury"),
        ("Mn", "manganese", "Manganese"),
        ("Cr", "chromium", "Chromium"),
        ("Fe", "iron", "Iron"),
        ("K", "potassium", "Potassium"),
    ]
    .into_iter()
    .map(|(symbol, flag, name)| (symbol, ElementDefinition { flag, name }))
    .collect()
});

pub fn element_description(def: &ElementDefinition) -> String {
    format!("Abnormally strong spectral lines of {}", def.name)
}
