//! Resolve a classification to one averaged set of reference properties.

#[cfg(test)]
mod merge_test;

use crate::model::{ClassKind, LuminosityDetail, PropertySet, SpectralClassification};
use crate::reference::{Colour, LookupTree, Properties};

const SIGNIFICANT_DIGITS: i32 = 4;

/// Average the reference rows for every class candidate crossed with every
/// luminosity code. No matching row at all gives the empty set.
pub fn merge(classification: &SpectralClassification, lookup: &LookupTree) -> PropertySet {
    let classes = class_candidates(&classification.class.kind);
    let codes = luminosity_codes(classification.luminosity.as_ref());

    let mut rows = Vec::new();
    for (letter, number) in &classes {
        for code in &codes {
            if let Some(row) = lookup.lookup(letter, *number, code) {
                rows.push(row);
            }
        }
    }

    match average(&rows) {
        Some(props) => PropertySet::Averaged(props),
        None => PropertySet::Empty {},
    }
}

/// Concrete `(letter, number)` points a class stands for.
pub fn class_candidates(kind: &ClassKind) -> Vec<(String, Option<f64>)> {
    match kind {
        ClassKind::Value(v) => vec![(v.letter.clone(), v.number)],
        ClassKind::Range { from: a, to: b }
        | ClassKind::Choice {
            first: a,
            second: b,
        }
        | ClassKind::Combination {
            first: a,
            second: b,
        } => vec![(a.letter.clone(), a.number), (b.letter.clone(), b.number)],
        ClassKind::SType(s) => vec![(s.letter.clone(), s.number.map(f64::from))],
        ClassKind::WhiteDwarf(w) => vec![(
            format!("{}{}", w.letter, w.dwarf_type.as_deref().unwrap_or("")),
            w.dwarf_temperature,
        )],
        ClassKind::CarbonStar(c) => vec![(c.literal.clone(), None)],
    }
}

/// Luminosity codes to look up; a single empty code when there is none.
pub fn luminosity_codes(luminosity: Option<&LuminosityDetail>) -> Vec<String> {
    match luminosity {
        Some(l) => l.kind.codes().into_iter().map(str::to_string).collect(),
        None => vec![String::new()],
    }
}

/// Field-wise mean. Scalars keep four significant figures; colour channels
/// round to whole numbers.
pub fn average(rows: &[&Properties]) -> Option<Properties> {
    if rows.is_empty() {
        return None;
    }

    let mean = |field: fn(&Properties) -> f64| {
        rows.iter().map(|p| field(p)).sum::<f64>() / rows.len() as f64
    };
    let scalar = |field: fn(&Properties) -> f64| round_significant(mean(field), SIGNIFICANT_DIGITS);
    let channel = |field: fn(&Properties) -> f64| mean(field).round();

    Some(Properties {
        mass: scalar(|p| p.mass),
        luminosity_relative: scalar(|p| p.luminosity_relative),
        radius_relative: scalar(|p| p.radius_relative),
        temperature: scalar(|p| p.temperature),
        colour_index_bv: scalar(|p| p.colour_index_bv),
        absolute_magnitude: scalar(|p| p.absolute_magnitude),
        bolometric_correction: scalar(|p| p.bolometric_correction),
        bolometric_magnitude: scalar(|p| p.bolometric_magnitude),
        colour: Colour {
            r: channel(|p| p.colour.r),
            g: channel(|p| p.colour.g),
            b: channel(|p| p.colour.b),
        },
    })
}

pub fn round_significant(x: f64, digits: i32) -> f64 {
    if x == 0.0 || !x.is_finite() {
        return x;
    }
    let shift = digits - 1 - x.abs().log10().floor() as i32;
    if shift >= 0 {
        let scale = 10f64.powi(shift);
        (x * scale).round() / scale
    } else {
        let scale = 10f64.powi(-shift);
        (x / scale).round() * scale
    }
}
