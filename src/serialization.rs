use crate::ast::{IniDocument, IniSection};
use indexmap::IndexMap;
use serde::Serialize;

/// A plain-data view of a document: sections map to objects of key/value
/// strings. Comments and overwritten values are left out.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Object(IndexMap<String, Value>),
}

/// Builds `{ "global": {...}, "sections": { name: {...} } }`.
///
/// The global section lives in its own slot so that no section name, not
/// even the empty one from a `[ ]` header, can shadow it.
pub(crate) fn to_value(document: &IniDocument) -> Value {
    let sections = document
        .sections()
        .map(|section| (section.name().to_string(), section_to_value(section)))
        .collect();

    let mut map = IndexMap::new();
    map.insert("global".to_string(), section_to_value(document.global()));
    map.insert("sections".to_string(), Value::Object(sections));
    Value::Object(map)
}

fn section_to_value(section: &IniSection) -> Value {
    Value::Object(
        section
            .entries()
            .map(|entry| (entry.key().to_string(), Value::String(entry.value().to_string())))
            .collect(),
    )
}
