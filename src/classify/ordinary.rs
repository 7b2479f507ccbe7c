//! Ordinary MK classes: single values, ranges, choices and combinations.

use crate::classify::number;
use crate::classify::peculiarity::suffix_set;
use crate::classify::tables::CLASS_SUFFIXES;
use crate::error::{DecodeError, DecodeResult};
use crate::model::{ClassDetail, ClassKind, ClassValue};
use crate::tree::Tree;

pub fn class_detail(tree: &Tree) -> DecodeResult<ClassDetail> {
    let classes = tree
        .find("CLASS")
        .iter()
        .map(class_value)
        .collect::<DecodeResult<Vec<_>>>()?;
    let text = tree.find_only("CLASSES_BODY")?.collect_text();

    let range = tree.find_optional("CLASS_RANGE")?;
    let choice = tree.find_optional("CLASS_CHOICE")?;
    let combination = tree.find_optional("CLASS_COMBINATION")?;

    let kind = if !range.is_empty() {
        let (from, to) = endpoints("CLASS_RANGE", &range, classes)?;
        ClassKind::Range { from, to }
    } else if !choice.is_empty() {
        let (first, second) = endpoints("CLASS_CHOICE", &choice, classes)?;
        ClassKind::Choice { first, second }
    } else if !combination.is_empty() {
        let found = classes.len();
        match <[ClassValue; 2]>::try_from(classes) {
            Ok([first, second]) => ClassKind::Combination { first, second },
            Err(_) => {
                return Err(DecodeError::UnexpectedCount {
                    what: "classes in a combination",
                    expected: "2",
                    found,
                });
            }
        }
    } else {
        let found = classes.len();
        match <[ClassValue; 1]>::try_from(classes) {
            Ok([value]) => ClassKind::Value(value),
            Err(_) => {
                return Err(DecodeError::UnexpectedCount {
                    what: "classes",
                    expected: "1",
                    found,
                });
            }
        }
    };

    let suffixes: Vec<String> = tree
        .find("CLASSES_SUFFIX")
        .iter()
        .map(Tree::collect_text)
        .collect();

    Ok(ClassDetail {
        text,
        kind,
        peculiarities: suffix_set(&suffixes, &CLASS_SUFFIXES, "class", "")?,
    })
}

fn class_value(class: &Tree) -> DecodeResult<ClassValue> {
    let mut value = ClassValue::new(String::new(), None);
    class.on_only_value("CLASS_LETTER", |t| -> DecodeResult<()> {
        value.letter = t.collect_text();
        Ok(())
    })?;
    class.on_optional_value("CLASS_NUMBER", |t| -> DecodeResult<()> {
        value.number = Some(number(&t)?);
        Ok(())
    })?;
    Ok(value)
}

/// Both endpoints of a range or choice node `[CLASS, delimiter, CLASS | CLASS_NUMBER]`.
///
/// With a single extracted class (`A3-4`) the second endpoint takes the first
/// endpoint's letter and the trailing number.
fn endpoints(
    name: &'static str,
    marker: &Tree,
    classes: Vec<ClassValue>,
) -> DecodeResult<(ClassValue, ClassValue)> {
    let children = marker.children()?;
    if children.len() != 3 {
        return Err(DecodeError::MalformedNode {
            name,
            detail: format!("expected 3 children, found {}", children.len()),
        });
    }

    let found = classes.len();
    match <[ClassValue; 2]>::try_from(classes) {
        Ok([first, second]) => Ok((first, second)),
        Err(classes) => match <[ClassValue; 1]>::try_from(classes) {
            Ok([first]) => {
                let trailing = marker.child(2)?.find_only("CLASS_NUMBER")?;
                let second = ClassValue::new(first.letter.clone(), Some(number(&trailing)?));
                Ok((first, second))
            }
            Err(_) => Err(DecodeError::UnexpectedCount {
                what: "classes",
                expected: "1 or 2",
                found,
            }),
        },
    }
}
