use pretty_assertions::assert_eq;
use serde_json::json;
use spectral_notation::model::{ClassKind, ClassValue, LuminosityKind};
use spectral_notation::{Classifier, SpectralClassification};
use std::sync::Arc;

fn classifier() -> Classifier {
    Classifier::embedded().unwrap()
}

fn decode(text: &str) -> Arc<SpectralClassification> {
    classifier()
        .decode(text, false)
        .unwrap()
        .unwrap_or_else(|| panic!("{} should parse", text))
}

fn rejects(text: &str) -> bool {
    classifier().decode(text, false).unwrap().is_none()
}

// ============================================================================
// Classes
// ============================================================================

#[test]
fn every_class_letter_decodes_without_number() {
    for letter in ["O", "B", "A", "F", "G", "K", "M", "L", "T", "Y", "C", "WN", "WC"] {
        let c = decode(letter);
        assert_eq!(
            c.class.kind,
            ClassKind::Value(ClassValue::new(letter, None)),
            "{}",
            letter
        );
    }
}

#[test]
fn invalid_letters_are_unparseable() {
    for text in ["X", "Q", "E", "", "g5", "G5VIII", "C-Rvar"] {
        assert!(rejects(text), "{:?} should be rejected", text);
    }
}

#[test]
fn numbers_and_fractions() {
    assert_eq!(
        decode("G2.5").class.kind,
        ClassKind::Value(ClassValue::new("G", Some(2.5)))
    );
    assert_eq!(
        decode("M0").class.kind,
        ClassKind::Value(ClassValue::new("M", Some(0.0)))
    );
}

#[test]
fn short_forms_match_spelled_out_forms() {
    for (short, long) in [("A3-4", "A3-A4"), ("A3/4", "A3/A4"), ("A5-9", "A5-A9")] {
        assert_eq!(decode(short).class.kind, decode(long).class.kind, "{}", short);
    }
}

// ============================================================================
// Luminosity
// ============================================================================

#[test]
fn every_luminosity_class_has_a_description() {
    let codes = [
        "0", "Ia+", "Ia", "Iab", "Ib", "I", "II", "IIa", "IIb", "III", "IIIa", "IIIb", "IV",
        "IVa", "IVb", "V", "Va", "Vb", "VI", "VIa", "VIb", "VII", "VIIa", "VIIb",
    ];
    for code in codes {
        let c = decode(&format!("G5{}", code));
        let lum = c.luminosity.as_ref().unwrap();
        match &lum.kind {
            LuminosityKind::Value(l) => {
                assert_eq!(l.luminosity_class, code);
                assert!(l.description.is_some(), "{}", code);
            }
            other => panic!("{}: unexpected {:?}", code, other),
        }
    }
}

#[test]
fn range_carries_descriptions() {
    let c = decode("G5II-III");
    let value = serde_json::to_value(&*c).unwrap();
    assert_eq!(
        value["luminosity"]["range"],
        json!({
            "from": {"luminosityClass": "II", "description": "Bright Giant"},
            "to": {"luminosityClass": "III", "description": "Giant"},
        })
    );
    assert_eq!(value["class"]["value"], json!({"letter": "G", "number": 5.0}));
}

#[test]
fn prefixes_translate() {
    for (text, code) in [("sdG5", "VI"), ("dG5", "V"), ("sgG5", "I"), ("gG5", "III")] {
        let c = decode(text);
        assert_eq!(c.luminosity.as_ref().unwrap().kind.codes(), vec![code], "{}", text);
    }
    let value = serde_json::to_value(&*decode("sdG5")).unwrap();
    assert_eq!(
        value["luminosity"],
        json!({"text": "sd", "value": {"luminosityClass": "VI", "description": "Sub-Dwarf"}})
    );
}

// ============================================================================
// Peculiarities
// ============================================================================

#[test]
fn multiple_peculiarities_serialize_flags_and_details() {
    let value = serde_json::to_value(&*decode("G He wk pvarHe (Sr)...")).unwrap();
    let pec = &value["peculiarities"];

    assert_eq!(pec["text"], json!("He wk p var ... He Sr"));
    assert_eq!(
        pec["flags"],
        json!({
            "weakHeliumLines": true,
            "unspecifiedPeculiarity": true,
            "variableSpectralFeature": true,
            "undescribed": true,
            "elements": {"helium": true, "strontium": true},
        })
    );
    let texts: Vec<&str> = pec["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["text"].as_str().unwrap())
        .collect();
    assert_eq!(texts, vec!["He wk", "p", "var", "...", "He", "Sr"]);
}

#[test]
fn single_suffixes() {
    for (text, flag) in [
        ("B2e", "emissionLines"),
        ("O7f", "n3He2Emission"),
        ("O7(f)", "n3WeakHe2Emission"),
        ("O7((f))", "he2WeakN3Emission"),
        ("A0nn", "veryBroadAbsorptionFeatures"),
        ("B8sh", "shellStarFeatures"),
        ("K0wl", "weakLines"),
        ("M3comp", "compositeSpectrum"),
        ("A2m", "enhancedMetalFeatures"),
    ] {
        let c = decode(text);
        let pec = c.peculiarities.as_ref().unwrap();
        assert!(pec.flags.contains(flag), "{} lacks {}", text, flag);
    }
}

// ============================================================================
// Special families
// ============================================================================

#[test]
fn s_types() {
    let cases = [
        ("S", json!({"letter": "S"})),
        ("S5", json!({"letter": "S", "number": 5})),
        ("S10", json!({"letter": "S", "number": 10})),
        ("S5,3", json!({"letter": "S", "number": 5, "zrOTiORatio": 3})),
        ("S5/10", json!({"letter": "S", "number": 5, "cORatio": 10})),
        ("S5*2", json!({"letter": "S", "number": 5, "zrOStrength": 2})),
    ];
    for (text, expected) in cases {
        let value = serde_json::to_value(&*decode(text)).unwrap();
        assert_eq!(value["class"]["value"], expected, "{}", text);
    }
    assert!(rejects("S11"));
    assert!(rejects("S5,0"));
    assert!(rejects("S5*6"));
}

#[test]
fn white_dwarfs() {
    let value = serde_json::to_value(&*decode("DA2PEC")).unwrap();
    assert_eq!(value["text"], json!("DA2"));
    assert_eq!(
        value["class"]["value"],
        json!({"letter": "D", "dwarfType": "A", "dwarfTemperature": 2.0})
    );
    assert_eq!(value["peculiarities"]["text"], json!("PEC"));

    let value = serde_json::to_value(&*decode("D")).unwrap();
    assert_eq!(value["class"], json!({"text": "D", "value": {"letter": "D"}}));
}

#[test]
fn carbon_stars() {
    for literal in ["C-R", "C-N", "C-J", "C-H", "C-Hd"] {
        let value = serde_json::to_value(&*decode(literal)).unwrap();
        assert_eq!(value["class"]["value"], json!({"letter": literal}));
    }
}

#[test]
fn special_families_file_under_their_letter() {
    for (text, letter) in [("S5,3", "S"), ("DA2", "D"), ("C-N", "C-N"), ("G5", "G")] {
        assert_eq!(decode(text).class.kind.letter(), letter, "{}", text);
    }
}

#[test]
fn long_suffix_run_decodes() {
    let text = format!("G{}", "n".repeat(40));
    let pec = decode(&text).peculiarities.clone().unwrap();
    assert_eq!(pec.text, vec!["nn"; 20].join(" "));
    assert!(pec.flags.contains("veryBroadAbsorptionFeatures"));
}

// ============================================================================
// Augmentation
// ============================================================================

#[test]
fn augmented_range_is_averaged_and_rounded() {
    let c = classifier().decode("A3-A7", true).unwrap().unwrap();
    let value = serde_json::to_value(&*c).unwrap();
    assert_eq!(
        value["data"],
        json!({
            "mass": 7.65,
            "luminosityRelative": 1385.0,
            "radiusRelative": 16.95,
            "temperature": 8650.0,
            "colourIndexBv": 0.05,
            "absoluteMagnitude": -2.85,
            "bolometricCorrection": -0.235,
            "bolometricMagnitude": -3.085,
            "colour": {"r": 194.0, "g": 210.0, "b": 255.0},
        })
    );
}

#[test]
fn augmented_without_coverage_is_an_empty_object() {
    let c = classifier().decode("A3.5", true).unwrap().unwrap();
    assert_eq!(serde_json::to_value(&*c).unwrap()["data"], json!({}));
}

#[test]
fn plain_decode_has_no_data_field() {
    let value = serde_json::to_value(&*decode("A3")).unwrap();
    assert!(value.get("data").is_none());
}

#[test]
fn decoding_is_idempotent() {
    let classifier = classifier();
    let first = classifier.decode("K5III", true).unwrap();
    let second = classifier.decode("K5III", true).unwrap();
    assert_eq!(first, second);
    assert_eq!(classifier.cache_len(), 1);
}
