//! Draft and saved records plus the shared read accessors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    ids::RecordId,
    tags::TagSet,
    value::{Entry, FieldValue, Fields},
};

/// A tool record: the draft under construction or a saved collection item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub created_at: DateTime<Utc>,
    pub fields: Fields,
}

impl Record {
    pub fn new(fields: Fields) -> Self {
        Self {
            id: RecordId::new(),
            created_at: Utc::now(),
            fields,
        }
    }
}

/// Lenient, dotted-key readers over a field tree.
///
/// Missing values and kind mismatches read as the empty value of the requested
/// kind, mirroring how the dashboard treats untouched controls.
pub trait FieldAccess {
    fn fields(&self) -> &Fields;

    fn value(&self, key: &str) -> Option<&FieldValue> {
        self.fields().lookup(key)
    }

    fn text(&self, key: &str) -> &str {
        match self.value(key) {
            Some(FieldValue::Text(value)) => value.as_str(),
            _ => "",
        }
    }

    fn number(&self, key: &str) -> f64 {
        match self.value(key) {
            Some(FieldValue::Number(value)) => *value,
            _ => 0.0,
        }
    }

    fn tags(&self, key: &str) -> Option<&TagSet> {
        match self.value(key) {
            Some(FieldValue::Tags(tags)) => Some(tags),
            _ => None,
        }
    }

    fn tag_count(&self, key: &str) -> usize {
        self.tags(key).map_or(0, TagSet::len)
    }

    fn numbers(&self, key: &str) -> &[f64] {
        match self.value(key) {
            Some(FieldValue::Numbers(values)) => values.as_slice(),
            _ => &[],
        }
    }

    fn lines(&self, key: &str) -> &[String] {
        match self.value(key) {
            Some(FieldValue::Lines(lines)) => lines.as_slice(),
            _ => &[],
        }
    }

    fn entries(&self, key: &str) -> &[Entry] {
        match self.value(key) {
            Some(FieldValue::List(entries)) => entries.as_slice(),
            _ => &[],
        }
    }
}

impl FieldAccess for Fields {
    fn fields(&self) -> &Fields {
        self
    }
}

impl FieldAccess for Entry {
    fn fields(&self) -> &Fields {
        &self.fields
    }
}

impl FieldAccess for Record {
    fn fields(&self) -> &Fields {
        &self.fields
    }
}
