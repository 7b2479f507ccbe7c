use crate::Result;
use crate::reference::row::{Colour, Properties, ReferenceRow};
use anyhow::{Context, bail};
use std::collections::HashSet;
use std::fs;

const COLUMNS: usize = 14;

/// Parse a reference table file into rows.
///
/// Expected columns (comma-separated):
/// letter, number, luminosityClass, mass, luminosityRelative, radiusRelative,
/// temperature, colourIndexBv, absoluteMagnitude, bolometricCorrection,
/// bolometricMagnitude, r, g, b
///
/// Example:
/// G,2,V,1.0,1.0,1.0,5800,0.65,4.8,-0.07,4.73,255,240,229
pub fn parse_reference_file(path: &str) -> Result<Vec<ReferenceRow>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read reference file {}", path))?;
    parse_reference_text(&text, path)
}

/// `origin` names the source in error messages.
pub fn parse_reference_text(text: &str, origin: &str) -> Result<Vec<ReferenceRow>> {
    let mut out = Vec::new();
    let mut seen = HashSet::new();

    for (lineno, line) in text.lines().enumerate() {
        let lno = lineno + 1;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() != COLUMNS {
            bail!(
                "reference parse error at {}:{}: expected {} columns, found {}: {:?}",
                origin,
                lno,
                COLUMNS,
                fields.len(),
                line
            );
        }

        let letter = fields[0];
        if letter.is_empty() {
            bail!("reference parse error at {}:{}: empty letter", origin, lno);
        }

        let mut values = [0.0; COLUMNS - 3];
        for (i, field) in fields[3..].iter().enumerate() {
            values[i] = field.parse().with_context(|| {
                format!("bad {} at {}:{}: {:?}", COLUMN_NAMES[i], origin, lno, field)
            })?;
        }
        let number: f64 = fields[1]
            .parse()
            .with_context(|| format!("bad number at {}:{}: {:?}", origin, lno, fields[1]))?;

        let row = ReferenceRow {
            letter: letter.to_string(),
            number,
            luminosity_class: fields[2].to_string(),
            properties: Properties {
                mass: values[0],
                luminosity_relative: values[1],
                radius_relative: values[2],
                temperature: values[3],
                colour_index_bv: values[4],
                absolute_magnitude: values[5],
                bolometric_correction: values[6],
                bolometric_magnitude: values[7],
                colour: Colour {
                    r: values[8],
                    g: values[9],
                    b: values[10],
                },
            },
        };

        let key = (row.letter.clone(), row.number_key(), row.luminosity_class.clone());
        if !seen.insert(key) {
            bail!(
                "duplicate reference entry at {}:{}: {} {} {:?}",
                origin,
                lno,
                row.letter,
                row.number_key(),
                row.luminosity_class
            );
        }
        out.push(row);
    }

    Ok(out)
}

const COLUMN_NAMES: [&str; COLUMNS - 3] = [
    "mass",
    "luminosityRelative",
    "radiusRelative",
    "temperature",
    "colourIndexBv",
    "absoluteMagnitude",
    "bolometricCorrection",
    "bolometricMagnitude",
    "r",
    "g",
    "b",
];
