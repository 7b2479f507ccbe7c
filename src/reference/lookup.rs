use crate::reference::row::{Properties, ReferenceRow, number_key};
use std::collections::BTreeMap;

const DEFAULT_NUMBER: &str = "5";
const DEFAULT_LUMINOSITY: &str = "II";

/// letter -> number -> luminosity class -> properties.
///
/// Built once from the reference rows and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LookupTree {
    index: BTreeMap<String, BTreeMap<String, BTreeMap<String, Properties>>>,
}

impl LookupTree {
    pub fn new(rows: &[ReferenceRow]) -> Self {
        let mut index: BTreeMap<String, BTreeMap<String, BTreeMap<String, Properties>>> =
            BTreeMap::new();
        for row in rows {
            index
                .entry(row.letter.clone())
                .or_default()
                .entry(row.number_key())
                .or_default()
                .insert(row.luminosity_class.clone(), row.properties);
        }
        Self { index }
    }

    /// Point lookup with defaults: a missing number means `5`; an empty
    /// luminosity means `II`, or nothing for two-letter white-dwarf codes
    /// such as `DA`. `None` is "no info".
    pub fn lookup(&self, letter: &str, number: Option<f64>, luminosity: &str) -> Option<&Properties> {
        let number = number.map_or_else(|| DEFAULT_NUMBER.to_string(), number_key);
        let luminosity = if luminosity.is_empty() {
            default_luminosity(letter)
        } else {
            luminosity
        };

        self.index
            .get(letter)?
            .get(&number)?
            .get(luminosity)
    }

    /// Number of stored (letter, number, luminosity) points.
    pub fn len(&self) -> usize {
        self.index
            .values()
            .flat_map(BTreeMap::values)
            .map(BTreeMap::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn default_luminosity(letter: &str) -> &'static str {
    if letter.chars().count() == 2 && letter.starts_with('D') {
        ""
    } else {
        DEFAULT_LUMINOSITY
    }
}
