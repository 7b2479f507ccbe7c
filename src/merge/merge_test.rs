use pretty_assertions::assert_eq;

use crate::classify::transform;
use crate::grammar::{GrammarEngine, default_parser};
use crate::merge::{class_candidates, luminosity_codes, merge, round_significant};
use crate::model::{ClassKind, ClassValue, PropertySet, STypeClass, WhiteDwarfClass};
use crate::reference::{Colour, Properties, default_lookup};

fn data(text: &str) -> PropertySet {
    let outcome = default_parser().unwrap().parse(text).unwrap();
    assert_eq!(outcome.remainder, "");
    let classification = transform(&outcome.tree.prune().unwrap()).unwrap();
    merge(&classification, &default_lookup().unwrap())
}

#[allow(clippy::too_many_arguments)]
fn props(
    mass: f64,
    luminosity_relative: f64,
    radius_relative: f64,
    temperature: f64,
    colour_index_bv: f64,
    absolute_magnitude: f64,
    bolometric_correction: f64,
    bolometric_magnitude: f64,
    (r, g, b): (f64, f64, f64),
) -> PropertySet {
    PropertySet::Averaged(Properties {
        mass,
        luminosity_relative,
        radius_relative,
        temperature,
        colour_index_bv,
        absolute_magnitude,
        bolometric_correction,
        bolometric_magnitude,
        colour: Colour { r, g, b },
    })
}

// ============================================================================
// Rounding
// ============================================================================

#[test]
fn rounds_to_four_significant_figures() {
    assert_eq!(round_significant(0.0, 4), 0.0);
    assert_eq!(round_significant(1385.0, 4), 1385.0);
    assert_eq!(round_significant(12345.0, 4), 12350.0);
    assert_eq!(round_significant(850.93, 4), 850.9);
    assert_eq!(round_significant(-0.23456, 4), -0.2346);
    assert_eq!(round_significant(0.05000000000000001, 4), 0.05);
}

// ============================================================================
// Candidates
// ============================================================================

#[test]
fn candidates_for_each_class_shape() {
    let a3 = ClassValue::new("A", Some(3.0));
    let a7 = ClassValue::new("A", Some(7.0));
    assert_eq!(
        class_candidates(&ClassKind::Range {
            from: a3.clone(),
            to: a7.clone(),
        }),
        vec![("A".to_string(), Some(3.0)), ("A".to_string(), Some(7.0))]
    );
    assert_eq!(
        class_candidates(&ClassKind::WhiteDwarf(WhiteDwarfClass::new(
            Some("A".to_string()),
            None,
        ))),
        vec![("DA".to_string(), None)]
    );
    assert_eq!(
        class_candidates(&ClassKind::SType(STypeClass::new(Some(5), None))),
        vec![("S".to_string(), Some(5.0))]
    );
    assert_eq!(luminosity_codes(None), vec![String::new()]);
}

// ============================================================================
// Averages
// ============================================================================

#[test]
fn letter_only_uses_defaults() {
    assert_eq!(
        data("A"),
        props(7.2, 1290.0, 16.5, 8650.0, 0.05, -2.8, -0.23, -3.03, (194.0, 210.0, 255.0))
    );
}

#[test]
fn class_range_averages_both_endpoints() {
    assert_eq!(
        data("A3-A7"),
        props(
            7.65,
            1385.0,
            16.95,
            8650.0,
            0.05,
            -2.85,
            -0.235,
            -3.085,
            (194.0, 210.0, 255.0)
        )
    );
}

#[test]
fn choice_and_combination_average_alike() {
    let expected = props(7.6, 1315.0, 17.5, 8400.0, 0.1, -2.8, -0.21, -3.01, (196.0, 212.0, 255.0));
    assert_eq!(data("A3/A9"), expected);
    assert_eq!(data("A3+A9"), expected);
}

#[test]
fn luminosity_range_and_choice() {
    assert_eq!(
        data("A3II-IV"),
        props(6.2, 850.9, 9.675, 9150.0, -0.04, -1.0, -0.3, -1.3, (190.0, 206.0, 255.0))
    );
    assert_eq!(
        data("A3II/III"),
        props(7.15, 873.5, 10.27, 9150.0, -0.04, -1.4, -0.3, -1.7, (190.0, 205.0, 255.0))
    );
}

#[test]
fn missing_endpoint_is_skipped() {
    // A3.5 has no row, so only A3 contributes.
    assert_eq!(data("A3/3.5"), data("A3"));
}

#[test]
fn no_coverage_is_an_empty_set() {
    assert_eq!(data("A3.5"), PropertySet::Empty {});
    assert!(data("C-R").is_empty());
}

#[test]
fn white_dwarf_subtype_has_no_luminosity() {
    assert!(!data("DA").is_empty());
    assert!(!data("DB3").is_empty());
}
