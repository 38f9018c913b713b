//! In-progress record edited by a wizard.

use mise_domain::{Entry, FieldValue, Fields, Record, RecordId, ValueKind};

use crate::path::{FieldPath, Segment};
use crate::CoreError;

#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    record: Record,
}

fn not_found(path: &FieldPath) -> CoreError {
    CoreError::UnknownField(path.to_string())
}

fn wrong_kind(path: &FieldPath, expected: ValueKind, found: &FieldValue) -> CoreError {
    CoreError::FieldKind {
        path: path.to_string(),
        expected,
        found: found.kind(),
    }
}

fn out_of_range(path: &FieldPath, index: usize, len: usize) -> CoreError {
    CoreError::IndexOutOfRange {
        path: path.to_string(),
        index,
        len,
    }
}

fn check_terminal(path: &FieldPath) -> Result<(), CoreError> {
    if path.ends_with_key() {
        Ok(())
    } else {
        Err(CoreError::InvalidPath {
            path: path.to_string(),
            reason: "path must end with a field name".into(),
        })
    }
}

fn resolve<'a>(fields: &'a Fields, path: &FieldPath) -> Result<&'a FieldValue, CoreError> {
    check_terminal(path)?;
    let segments = path.segments();
    let mut container = fields;
    let mut position = 0;
    loop {
        let Segment::Key(key) = &segments[position] else {
            return Err(not_found(path));
        };
        let value = container.get(key).ok_or_else(|| not_found(path))?;
        position += 1;
        match (segments.get(position), value) {
            (None, value) => return Ok(value),
            (Some(Segment::Key(_)), FieldValue::Group(inner)) => container = inner,
            (Some(Segment::Index(index)), FieldValue::List(entries)) => {
                let entry = entries
                    .get(*index)
                    .ok_or_else(|| out_of_range(path, *index, entries.len()))?;
                position += 1;
                container = &entry.fields;
            }
            (Some(Segment::Index(_)), other) => {
                return Err(wrong_kind(path, ValueKind::List, other))
            }
            (Some(Segment::Key(_)), _) => return Err(not_found(path)),
        }
    }
}

fn resolve_mut<'a>(
    fields: &'a mut Fields,
    path: &FieldPath,
) -> Result<&'a mut FieldValue, CoreError> {
    check_terminal(path)?;
    let segments = path.segments();
    let mut container = fields;
    let mut position = 0;
    loop {
        let Segment::Key(key) = &segments[position] else {
            return Err(not_found(path));
        };
        let value = container.get_mut(key).ok_or_else(|| not_found(path))?;
        position += 1;
        match (segments.get(position), value) {
            (None, value) => return Ok(value),
            (Some(Segment::Key(_)), FieldValue::Group(inner)) => container = inner,
            (Some(Segment::Index(index)), FieldValue::List(entries)) => {
                let len = entries.len();
                let entry = entries
                    .get_mut(*index)
                    .ok_or_else(|| out_of_range(path, *index, len))?;
                position += 1;
                container = &mut entry.fields;
            }
            (Some(Segment::Index(_)), other) => {
                return Err(wrong_kind(path, ValueKind::List, other))
            }
            (Some(Segment::Key(_)), _) => return Err(not_found(path)),
        }
    }
}

impl Draft {
    pub fn new(fields: Fields) -> Self {
        Self {
            record: Record::new(fields),
        }
    }

    pub fn id(&self) -> RecordId {
        self.record.id
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    pub fn fields(&self) -> &Fields {
        &self.record.fields
    }

    pub fn into_record(self) -> Record {
        self.record
    }

    pub fn get(&self, path: &FieldPath) -> Result<&FieldValue, CoreError> {
        resolve(&self.record.fields, path)
    }

    fn slot(&mut self, path: &FieldPath) -> Result<&mut FieldValue, CoreError> {
        resolve_mut(&mut self.record.fields, path)
    }

    /// Overwrites a text, number, number-list or line-list value.
    ///
    /// Tag sets, groups and entry lists have dedicated operations.
    pub fn set_field(&mut self, path: &FieldPath, value: FieldValue) -> Result<(), CoreError> {
        let slot = self.slot(path)?;
        match slot.kind() {
            kind @ (ValueKind::Tags | ValueKind::Group | ValueKind::List) => {
                Err(CoreError::NotScalar {
                    path: path.to_string(),
                    kind,
                })
            }
            kind if kind != value.kind() => Err(wrong_kind(path, kind, &value)),
            _ => {
                *slot = value;
                Ok(())
            }
        }
    }

    /// Adds `tag` when absent, removes it when present. Returns whether the
    /// tag is selected afterwards.
    pub fn toggle_tag(&mut self, path: &FieldPath, tag: &str) -> Result<bool, CoreError> {
        match self.slot(path)? {
            FieldValue::Tags(tags) => Ok(tags.toggle(tag)),
            other => Err(wrong_kind(path, ValueKind::Tags, other)),
        }
    }

    fn entries_mut(&mut self, path: &FieldPath) -> Result<&mut Vec<Entry>, CoreError> {
        match self.slot(path)? {
            FieldValue::List(entries) => Ok(entries),
            other => Err(wrong_kind(path, ValueKind::List, other)),
        }
    }

    /// Appends a sub-record built from `template` and returns its position.
    pub fn add_entry(&mut self, path: &FieldPath, template: Fields) -> Result<usize, CoreError> {
        let entries = self.entries_mut(path)?;
        entries.push(Entry::new(template));
        Ok(entries.len() - 1)
    }

    pub fn remove_entry(&mut self, path: &FieldPath, index: usize) -> Result<Entry, CoreError> {
        let entries = self.entries_mut(path)?;
        if index >= entries.len() {
            return Err(out_of_range(path, index, entries.len()));
        }
        Ok(entries.remove(index))
    }

    fn numbers_mut(&mut self, path: &FieldPath) -> Result<&mut Vec<f64>, CoreError> {
        match self.slot(path)? {
            FieldValue::Numbers(values) => Ok(values),
            other => Err(wrong_kind(path, ValueKind::Numbers, other)),
        }
    }

    pub fn push_number(&mut self, path: &FieldPath, value: f64) -> Result<usize, CoreError> {
        let values = self.numbers_mut(path)?;
        values.push(value);
        Ok(values.len() - 1)
    }

    pub fn set_number(
        &mut self,
        path: &FieldPath,
        index: usize,
        value: f64,
    ) -> Result<(), CoreError> {
        let values = self.numbers_mut(path)?;
        let len = values.len();
        let slot = values
            .get_mut(index)
            .ok_or_else(|| out_of_range(path, index, len))?;
        *slot = value;
        Ok(())
    }

    pub fn remove_number(&mut self, path: &FieldPath, index: usize) -> Result<f64, CoreError> {
        let values = self.numbers_mut(path)?;
        if index >= values.len() {
            return Err(out_of_range(path, index, values.len()));
        }
        Ok(values.remove(index))
    }

    fn lines_mut(&mut self, path: &FieldPath) -> Result<&mut Vec<String>, CoreError> {
        match self.slot(path)? {
            FieldValue::Lines(lines) => Ok(lines),
            other => Err(wrong_kind(path, ValueKind::Lines, other)),
        }
    }

    pub fn push_line(&mut self, path: &FieldPath, line: String) -> Result<usize, CoreError> {
        let lines = self.lines_mut(path)?;
        lines.push(line);
        Ok(lines.len() - 1)
    }

    pub fn set_line(
        &mut self,
        path: &FieldPath,
        index: usize,
        line: String,
    ) -> Result<(), CoreError> {
        let lines = self.lines_mut(path)?;
        let len = lines.len();
        let slot = lines
            .get_mut(index)
            .ok_or_else(|| out_of_range(path, index, len))?;
        *slot = line;
        Ok(())
    }

    pub fn remove_line(&mut self, path: &FieldPath, index: usize) -> Result<String, CoreError> {
        let lines = self.lines_mut(path)?;
        if index >= lines.len() {
            return Err(out_of_range(path, index, lines.len()));
        }
        Ok(lines.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mise_domain::{FieldAccess, TagSet};

    fn path(raw: &str) -> FieldPath {
        raw.parse().unwrap()
    }

    fn draft() -> Draft {
        let mut fields = Fields::new();
        fields.assign("name", FieldValue::text(""));
        fields.assign("costs.rent", FieldValue::Number(0.0));
        fields.assign("gaps", FieldValue::Tags(TagSet::new()));
        fields.assign("ingredients", FieldValue::List(Vec::new()));
        fields.assign("prices", FieldValue::Numbers(Vec::new()));
        Draft::new(fields)
    }

    fn ingredient() -> Fields {
        let mut fields = Fields::new();
        fields.assign("name", FieldValue::text(""));
        fields.assign("unit_cost", FieldValue::Number(0.0));
        fields
    }

    #[test]
    fn set_field_checks_kind() {
        let mut draft = draft();
        draft.set_field(&path("costs.rent"), FieldValue::Number(2500.0)).unwrap();
        assert_eq!(draft.record().number("costs.rent"), 2500.0);

        let err = draft.set_field(&path("costs.rent"), "cheap".into()).unwrap_err();
        assert!(matches!(err, CoreError::FieldKind { expected: ValueKind::Number, .. }));

        let err = draft.set_field(&path("gaps"), "Late Night".into()).unwrap_err();
        assert!(matches!(err, CoreError::NotScalar { .. }));

        let err = draft.set_field(&path("nope"), "x".into()).unwrap_err();
        assert_eq!(err, CoreError::UnknownField("nope".into()));
    }

    #[test]
    fn list_entries_are_addressed_by_index() {
        let mut draft = draft();
        assert_eq!(draft.add_entry(&path("ingredients"), ingredient()).unwrap(), 0);
        assert_eq!(draft.add_entry(&path("ingredients"), ingredient()).unwrap(), 1);
        draft
            .set_field(&path("ingredients[1].unit_cost"), FieldValue::Number(2.5))
            .unwrap();

        let entries = draft.record().entries("ingredients");
        assert_ne!(entries[0].id, entries[1].id);
        assert_eq!(entries[1].number("unit_cost"), 2.5);

        let err = draft
            .set_field(&path("ingredients[5].unit_cost"), FieldValue::Number(1.0))
            .unwrap_err();
        assert!(matches!(err, CoreError::IndexOutOfRange { index: 5, len: 2, .. }));

        let removed = draft.remove_entry(&path("ingredients"), 0).unwrap();
        assert_eq!(removed.number("unit_cost"), 0.0);
        assert_eq!(draft.record().entries("ingredients").len(), 1);
        assert!(draft.remove_entry(&path("ingredients"), 3).is_err());
    }

    #[test]
    fn paths_must_end_on_a_field() {
        let mut draft = draft();
        draft.add_entry(&path("ingredients"), ingredient()).unwrap();
        let err = draft
            .set_field(&path("ingredients[0]"), "x".into())
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidPath { .. }));
    }

    #[test]
    fn number_lists_grow_and_shrink() {
        let mut draft = draft();
        draft.push_number(&path("prices"), 8.0).unwrap();
        draft.push_number(&path("prices"), 0.0).unwrap();
        draft.set_number(&path("prices"), 1, 10.0).unwrap();
        assert_eq!(draft.record().numbers("prices"), &[8.0, 10.0]);
        assert_eq!(draft.remove_number(&path("prices"), 0).unwrap(), 8.0);
        assert!(matches!(
            draft.push_line(&path("prices"), "x".into()),
            Err(CoreError::FieldKind { .. })
        ));
    }
}
