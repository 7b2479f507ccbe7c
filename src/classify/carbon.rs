use crate::model::{CarbonStarClass, ClassDetail, ClassKind};
use crate::tree::Tree;

pub fn class_detail(carbon: &Tree) -> ClassDetail {
    let literal = carbon.collect_text();
    ClassDetail {
        text: literal.clone(),
        kind: ClassKind::CarbonStar(CarbonStarClass { literal }),
        peculiarities: None,
    }
}
