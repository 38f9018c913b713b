//! Field values held by draft and saved records.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{ids::RecordId, tags::TagSet};

/// Discriminant of a [`FieldValue`], used when reporting kind mismatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Number,
    Tags,
    Numbers,
    Lines,
    Group,
    List,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ValueKind::Text => "text",
            ValueKind::Number => "number",
            ValueKind::Tags => "tag set",
            ValueKind::Numbers => "number list",
            ValueKind::Lines => "text list",
            ValueKind::Group => "group",
            ValueKind::List => "entry list",
        };
        f.write_str(label)
    }
}

/// A single value in a record's field tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldValue {
    /// Free text or a single-select choice.
    Text(String),
    Number(f64),
    /// Multi-select field, edited by toggling.
    Tags(TagSet),
    /// Ordered numbers such as competitor prices.
    Numbers(Vec<f64>),
    /// Ordered free-text lines such as recommendations or hashtags.
    Lines(Vec<String>),
    /// Named sub-fields (`demographics.age_groups`).
    Group(Fields),
    /// Nested sub-records addressed by position.
    List(Vec<Entry>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            FieldValue::Text(_) => ValueKind::Text,
            FieldValue::Number(_) => ValueKind::Number,
            FieldValue::Tags(_) => ValueKind::Tags,
            FieldValue::Numbers(_) => ValueKind::Numbers,
            FieldValue::Lines(_) => ValueKind::Lines,
            FieldValue::Group(_) => ValueKind::Group,
            FieldValue::List(_) => ValueKind::List,
        }
    }

    /// Returns `true` for values a required-field check treats as missing.
    ///
    /// Numbers are never blank; text is blank when it only holds whitespace.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(value) => value.trim().is_empty(),
            FieldValue::Number(_) => false,
            FieldValue::Tags(tags) => tags.is_empty(),
            FieldValue::Numbers(values) => values.is_empty(),
            FieldValue::Lines(lines) => lines.iter().all(|line| line.trim().is_empty()),
            FieldValue::Group(fields) => fields.values().all(FieldValue::is_blank),
            FieldValue::List(entries) => entries.is_empty(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<TagSet> for FieldValue {
    fn from(value: TagSet) -> Self {
        FieldValue::Tags(value)
    }
}

impl From<Vec<f64>> for FieldValue {
    fn from(value: Vec<f64>) -> Self {
        FieldValue::Numbers(value)
    }
}

/// Named field tree. Dotted keys (`costs.rent`) walk nested groups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fields(BTreeMap<String, FieldValue>);

impl Fields {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut FieldValue> {
        self.0.get_mut(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) -> Option<FieldValue> {
        self.0.insert(name.into(), value)
    }

    pub fn values(&self) -> impl Iterator<Item = &FieldValue> {
        self.0.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Resolves a dotted key through nested groups.
    pub fn lookup(&self, key: &str) -> Option<&FieldValue> {
        let mut segments = key.split('.');
        let mut current = self.0.get(segments.next()?)?;
        for segment in segments {
            match current {
                FieldValue::Group(inner) => current = inner.0.get(segment)?,
                _ => return None,
            }
        }
        Some(current)
    }

    pub fn lookup_mut(&mut self, key: &str) -> Option<&mut FieldValue> {
        let mut segments = key.split('.');
        let mut current = self.0.get_mut(segments.next()?)?;
        for segment in segments {
            match current {
                FieldValue::Group(inner) => current = inner.0.get_mut(segment)?,
                _ => return None,
            }
        }
        Some(current)
    }

    /// Writes `value` at a dotted key, creating intermediate groups.
    ///
    /// A non-group value sitting where a group is needed gets replaced.
    pub fn assign(&mut self, key: &str, value: FieldValue) {
        match key.split_once('.') {
            None => {
                self.0.insert(key.to_string(), value);
            }
            Some((head, rest)) => {
                let slot = self
                    .0
                    .entry(head.to_string())
                    .or_insert_with(|| FieldValue::Group(Fields::new()));
                if !matches!(slot, FieldValue::Group(_)) {
                    *slot = FieldValue::Group(Fields::new());
                }
                if let FieldValue::Group(inner) = slot {
                    inner.assign(rest, value);
                }
            }
        }
    }
}

/// Nested sub-record inside a list field (an ingredient, a competitor, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: RecordId,
    pub fields: Fields,
}

impl Entry {
    pub fn new(fields: Fields) -> Self {
        Self {
            id: RecordId::new(),
            fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_creates_groups_and_lookup_walks_them() {
        let mut fields = Fields::new();
        fields.assign("costs.rent", FieldValue::Number(2500.0));
        fields.assign("costs.utilities", FieldValue::Number(300.0));
        fields.assign("name", FieldValue::text("Downtown"));

        assert_eq!(fields.lookup("costs.rent"), Some(&FieldValue::Number(2500.0)));
        assert_eq!(fields.lookup("name"), Some(&FieldValue::text("Downtown")));
        assert!(fields.lookup("costs.renovation").is_none());
        assert!(fields.lookup("name.inner").is_none());
        assert_eq!(fields.get("costs").map(FieldValue::kind), Some(ValueKind::Group));
    }

    #[test]
    fn blank_detection_trims_text() {
        assert!(FieldValue::text("   ").is_blank());
        assert!(!FieldValue::text(" Bistro ").is_blank());
        assert!(!FieldValue::Number(0.0).is_blank());
        assert!(FieldValue::Tags(TagSet::new()).is_blank());
    }

    #[test]
    fn field_values_serialize_with_kind_tags() {
        let mut fields = Fields::new();
        fields.assign("serving_size", FieldValue::Number(2.0));
        let json = serde_json::to_string(&fields).expect("serialize fields");
        assert_eq!(json, r#"{"serving_size":{"number":2.0}}"#);
    }
}
