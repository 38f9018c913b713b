//! Multi-select tag sets.

use serde::{Deserialize, Serialize};

/// Insertion-ordered set of string tags backing a multi-select field.
///
/// Order is display-significant: a newly selected tag is appended at the end.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet(Vec<String>);

impl TagSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Removes `tag` when present, appends it otherwise.
    ///
    /// Returns `true` when the tag is selected after the call.
    pub fn toggle(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        if let Some(position) = self.0.iter().position(|existing| *existing == tag) {
            self.0.remove(position);
            false
        } else {
            self.0.push(tag);
            true
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|existing| existing == tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = TagSet::new();
        for tag in iter {
            let tag = tag.into();
            if !set.contains(&tag) {
                set.0.push(tag);
            }
        }
        set
    }
}
