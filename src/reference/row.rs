use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Colour {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Physical properties of one (letter, number, luminosity) point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Properties {
    pub mass: f64,
    pub luminosity_relative: f64,
    pub radius_relative: f64,
    pub temperature: f64,
    pub colour_index_bv: f64,
    pub absolute_magnitude: f64,
    pub bolometric_correction: f64,
    pub bolometric_magnitude: f64,
    pub colour: Colour,
}

/// A single row from the reference table.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceRow {
    pub letter: String,
    pub number: f64,
    /// Empty for white dwarfs.
    pub luminosity_class: String,
    pub properties: Properties,
}

impl ReferenceRow {
    /// Discrete form of `number` used as the lookup key (`5`, `2.5`).
    pub fn number_key(&self) -> String {
        number_key(self.number)
    }
}

pub fn number_key(number: f64) -> String {
    number.to_string()
}
