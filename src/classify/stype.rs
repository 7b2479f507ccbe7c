use crate::error::{DecodeError, DecodeResult};
use crate::model::{ClassDetail, ClassKind, STypeClass, STypeExtension};
use crate::tree::Tree;

const EXTENSIONS: [(&str, fn(u8) -> STypeExtension); 3] = [
    ("ZRO_TIO_RATIO", STypeExtension::ZrOTiORatio),
    ("C_O_RATIO", STypeExtension::CORatio),
    ("ZRO_STRENGTH", STypeExtension::ZrOStrength),
];

pub fn class_detail(s_type: &Tree) -> DecodeResult<ClassDetail> {
    let mut class = STypeClass::new(None, None);
    s_type.on_optional_value("S_TYPE_NUMBER", |t| -> DecodeResult<()> {
        class.number = Some(small_number(&t)?);
        Ok(())
    })?;

    let mut found = 0;
    for (symbol, build) in EXTENSIONS {
        let value = s_type.find_optional(symbol)?;
        if value.is_empty() {
            continue;
        }
        found += 1;
        class.extension = Some(build(small_number(&value)?));
    }
    if found > 1 {
        return Err(DecodeError::UnexpectedCount {
            what: "S-type extensions",
            expected: "at most 1",
            found,
        });
    }

    Ok(ClassDetail {
        text: s_type.collect_text(),
        kind: ClassKind::SType(class),
        peculiarities: None,
    })
}

fn small_number(t: &Tree) -> DecodeResult<u8> {
    let text = t.collect_text();
    text.parse().map_err(|_| DecodeError::InvalidNumber(text))
}
