//! Classification model: the typed result of decoding one notation string.
//!
//! Everything serializes to the JSON shape the CLI prints:
//! `{"text": ..., "class": {"text": ..., "value"|"range"|...: ...}, ...}`.

pub mod peculiarity;

pub use peculiarity::{Flags, PeculiarityDetail, PeculiaritySet};

use crate::reference::Properties;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpectralClassification {
    /// Raw text consumed by the class and luminosity portion.
    pub text: String,
    pub class: ClassDetail,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub luminosity: Option<LuminosityDetail>,
    /// Suffixes that apply to the whole classification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peculiarities: Option<PeculiaritySet>,
    /// Averaged reference properties, only when augmentation was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<PropertySet>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDetail {
    pub text: String,
    #[serde(flatten)]
    pub kind: ClassKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peculiarities: Option<PeculiaritySet>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ClassKind {
    Value(ClassValue),
    /// `A5-9` is stored with the first letter copied onto `to`.
    Range { from: ClassValue, to: ClassValue },
    Choice { first: ClassValue, second: ClassValue },
    /// Composite spectrum, both sides fully specified.
    Combination { first: ClassValue, second: ClassValue },
    #[serde(rename = "value")]
    SType(STypeClass),
    #[serde(rename = "value")]
    WhiteDwarf(WhiteDwarfClass),
    #[serde(rename = "value")]
    CarbonStar(CarbonStarClass),
}

impl ClassKind {
    /// Letter the class is filed under in the reference table.
    pub fn letter(&self) -> String {
        match self {
            ClassKind::Value(v) => v.letter.clone(),
            ClassKind::Range { from, .. } => from.letter.clone(),
            ClassKind::Choice { first, .. } | ClassKind::Combination { first, .. } => {
                first.letter.clone()
            }
            ClassKind::SType(s) => s.letter.clone(),
            ClassKind::WhiteDwarf(w) => w.letter.clone(),
            ClassKind::CarbonStar(c) => c.literal.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassValue {
    pub letter: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<f64>,
}

impl ClassValue {
    pub fn new(letter: impl Into<String>, number: Option<f64>) -> Self {
        Self {
            letter: letter.into(),
            number,
        }
    }
}

/// S-type star: base number 0-10 and at most one abundance extension.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct STypeClass {
    /// Always `S`.
    pub letter: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u8>,
    #[serde(flatten)]
    pub extension: Option<STypeExtension>,
}

impl STypeClass {
    pub fn new(number: Option<u8>, extension: Option<STypeExtension>) -> Self {
        Self {
            letter: "S".to_string(),
            number,
            extension,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum STypeExtension {
    /// `S5,3`: 1-9
    ZrOTiORatio(u8),
    /// `S5/10`: 1-10
    CORatio(u8),
    /// `S5*2`: 1-5
    ZrOStrength(u8),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WhiteDwarfClass {
    /// Always `D`.
    pub letter: String,
    /// Concatenated subtype letters, e.g. `AB`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dwarf_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dwarf_temperature: Option<f64>,
}

impl WhiteDwarfClass {
    pub fn new(dwarf_type: Option<String>, dwarf_temperature: Option<f64>) -> Self {
        Self {
            letter: "D".to_string(),
            dwarf_type,
            dwarf_temperature,
        }
    }
}

/// The whole literal, e.g. `C-Hd`, stands in for the letter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarbonStarClass {
    #[serde(rename = "letter")]
    pub literal: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LuminosityDetail {
    pub text: String,
    #[serde(flatten)]
    pub kind: LuminosityKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peculiarities: Option<PeculiaritySet>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LuminosityKind {
    /// `sdG5` style prefix, already translated to a luminosity class.
    #[serde(rename = "value")]
    Prefix(Luminosity),
    Value(Luminosity),
    Range { from: Luminosity, to: Luminosity },
    Choice(Vec<Luminosity>),
}

impl LuminosityKind {
    /// Luminosity-class codes in source order.
    pub fn codes(&self) -> Vec<&str> {
        match self {
            LuminosityKind::Prefix(l) | LuminosityKind::Value(l) => vec![l.luminosity_class.as_str()],
            LuminosityKind::Range { from, to } => {
                vec![from.luminosity_class.as_str(), to.luminosity_class.as_str()]
            }
            LuminosityKind::Choice(values) => {
                values.iter().map(|l| l.luminosity_class.as_str()).collect()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Luminosity {
    pub luminosity_class: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

/// Averaged reference properties. `Empty` serializes as `{}` and means no
/// candidate had reference coverage.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertySet {
    Averaged(Properties),
    Empty {},
}

impl PropertySet {
    pub fn is_empty(&self) -> bool {
        matches!(self, PropertySet::Empty {})
    }
}
