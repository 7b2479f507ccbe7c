use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PeculiaritySet {
    pub text: String,
    pub flags: Flags,
    /// In encounter order.
    pub details: Vec<PeculiarityDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeculiarityDetail {
    pub text: String,
    pub description: String,
}

/// Flag names plus the nested `elements` group.
///
/// Serializes as `{"flagName": true, ..., "elements": {"iron": true}}`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Flags {
    pub names: BTreeSet<&'static str>,
    pub elements: BTreeSet<&'static str>,
}

impl Flags {
    pub fn contains(&self, flag: &str) -> bool {
        self.names.contains(flag)
    }

    pub fn has_element(&self, element: &str) -> bool {
        self.elements.contains(element)
    }
}

impl Serialize for Flags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct Elements<'a>(&'a BTreeSet<&'static str>);

        impl Serialize for Elements<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(self.0.len()))?;
                for name in self.0 {
                    map.serialize_entry(name, &true)?;
                }
                map.end()
            }
        }

        let extra = usize::from(!self.elements.is_empty());
        let mut map = serializer.serialize_map(Some(self.names.len() + extra))?;
        for name in &self.names {
            map.serialize_entry(name, &true)?;
        }
        if !self.elements.is_empty() {
            map.serialize_entry("elements", &Elements(&self.elements))?;
        }
        map.end()
    }
}
