//! Addresses for fields inside a record's field tree.
//!
//! Paths use dots between field names and brackets for list positions:
//! `costs.rent`, `ingredients[0].unit_cost`, `categories[1].items[2].price`.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Key(String),
    Index(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<Segment>,
}

impl FieldPath {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn ends_with_key(&self) -> bool {
        matches!(self.segments.last(), Some(Segment::Key(_)))
    }

    /// Dotted key runs between list positions, used to find the field
    /// descriptor independent of the addressed entries.
    ///
    /// `categories[0].items[2].price` yields `["categories", "items", "price"]`.
    pub fn key_chunks(&self) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut current: Vec<&str> = Vec::new();
        for segment in &self.segments {
            match segment {
                Segment::Key(key) => current.push(key),
                Segment::Index(_) => {
                    chunks.push(current.join("."));
                    current.clear();
                }
            }
        }
        if !current.is_empty() {
            chunks.push(current.join("."));
        }
        chunks
    }
}

fn invalid(raw: &str, reason: &str) -> CoreError {
    CoreError::InvalidPath {
        path: raw.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_part(part: &str, raw: &str, segments: &mut Vec<Segment>) -> Result<(), CoreError> {
    let (name, mut rest) = match part.find('[') {
        Some(position) => part.split_at(position),
        None => (part, ""),
    };
    if name.is_empty() {
        return Err(invalid(raw, "empty field name"));
    }
    if !name
        .chars()
        .all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
    {
        return Err(invalid(raw, "field names may only contain letters, digits and `_`"));
    }
    segments.push(Segment::Key(name.to_string()));

    while !rest.is_empty() {
        let inner = rest
            .strip_prefix('[')
            .ok_or_else(|| invalid(raw, "unexpected characters after index"))?;
        let close = inner
            .find(']')
            .ok_or_else(|| invalid(raw, "unterminated index"))?;
        let index = inner[..close]
            .parse::<usize>()
            .map_err(|_| invalid(raw, "index must be a non-negative integer"))?;
        segments.push(Segment::Index(index));
        rest = &inner[close + 1..];
    }
    Ok(())
}

impl FromStr for FieldPath {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(invalid(raw, "path is empty"));
        }
        let mut segments = Vec::new();
        for part in trimmed.split('.') {
            parse_part(part, raw, &mut segments)?;
        }
        Ok(Self { segments })
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Key(key) if position == 0 => write!(f, "{key}")?,
                Segment::Key(key) => write!(f, ".{key}")?,
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}
