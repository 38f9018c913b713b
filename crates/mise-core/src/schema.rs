//! Declarative description of the wizard tools.
//!
//! A [`ToolSchema`] lists the steps of one tool, the fields each step edits,
//! the fields computed at save time, and the messages shown around a save.
//! The wizard engine is generic over these descriptors.

use chrono::{NaiveDate, NaiveTime};
use mise_domain::{FieldAccess, FieldValue, Fields, Record};

use crate::path::FieldPath;
use crate::tools::ToolKind;
use crate::CoreError;

/// Supported data kinds for tool fields.
#[derive(Debug, Clone)]
pub enum FieldKind {
    Text,
    Number,
    /// Calendar date, stored as `YYYY-MM-DD` text.
    Date,
    /// Wall-clock time, stored as `HH:MM` text.
    Time,
    /// Single selection stored as text.
    Choice(&'static [&'static str]),
    /// Multi-select tag set. An empty option list accepts any tag.
    MultiSelect(&'static [&'static str]),
    Numbers,
    Lines,
    /// Repeating sub-record with its own item fields.
    List(Vec<FieldDescriptor>),
}

/// Declarative description of a single field.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    /// Dotted key relative to the containing record or list entry.
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Computed at save time; never edited directly.
    pub derived: bool,
    pub help: Option<&'static str>,
    pub default: Option<FieldValue>,
}

impl FieldDescriptor {
    pub fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            label,
            kind,
            required: false,
            derived: false,
            help: None,
            default: None,
        }
    }

    pub fn text(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::Text)
    }

    pub fn number(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::Number)
    }

    pub fn date(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::Date)
    }

    pub fn time(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::Time)
    }

    pub fn choice(
        key: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self::new(key, label, FieldKind::Choice(options))
    }

    pub fn multi(
        key: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self::new(key, label, FieldKind::MultiSelect(options))
    }

    pub fn numbers(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::Numbers)
    }

    pub fn lines(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::Lines)
    }

    pub fn list(key: &'static str, label: &'static str, items: Vec<FieldDescriptor>) -> Self {
        Self::new(key, label, FieldKind::List(items))
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn derived(mut self) -> Self {
        self.derived = true;
        self
    }

    pub fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }

    pub fn with_default(mut self, value: impl Into<FieldValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Value a fresh draft holds for this field.
    pub fn initial_value(&self) -> FieldValue {
        if let Some(default) = &self.default {
            return default.clone();
        }
        match &self.kind {
            FieldKind::Text | FieldKind::Date | FieldKind::Time | FieldKind::Choice(_) => {
                FieldValue::Text(String::new())
            }
            FieldKind::Number => FieldValue::Number(0.0),
            FieldKind::MultiSelect(_) => FieldValue::Tags(Default::default()),
            FieldKind::Numbers => FieldValue::Numbers(Vec::new()),
            FieldKind::Lines => FieldValue::Lines(Vec::new()),
            FieldKind::List(_) => FieldValue::List(Vec::new()),
        }
    }

    /// Default fields of a new entry for list fields.
    pub fn item_template(&self) -> Option<Fields> {
        match &self.kind {
            FieldKind::List(items) => Some(build_fields(items.iter())),
            _ => None,
        }
    }

    pub fn item_fields(&self) -> &[FieldDescriptor] {
        match &self.kind {
            FieldKind::List(items) => items,
            _ => &[],
        }
    }

    /// Checks a scalar value against the field kind and returns the value to
    /// store. Choices are canonicalised to the declared option spelling.
    pub fn accept(&self, path: &str, value: FieldValue) -> Result<FieldValue, CoreError> {
        let invalid = |reason: String| CoreError::InvalidValue {
            path: path.to_string(),
            reason,
        };
        match (&self.kind, value) {
            (FieldKind::Choice(options), FieldValue::Text(raw)) => {
                let normalized = raw.trim().to_lowercase();
                if normalized.is_empty() {
                    return Ok(FieldValue::Text(String::new()));
                }
                options
                    .iter()
                    .find(|candidate| candidate.to_lowercase() == normalized)
                    .map(|candidate| FieldValue::text(*candidate))
                    .ok_or_else(|| invalid(format!("must be one of: {}", options.join(", "))))
            }
            (FieldKind::Date, FieldValue::Text(raw)) => {
                if raw.trim().is_empty() {
                    return Ok(FieldValue::Text(String::new()));
                }
                NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                    .map(|date| FieldValue::Text(date.to_string()))
                    .map_err(|_| invalid("use YYYY-MM-DD format".into()))
            }
            (FieldKind::Time, FieldValue::Text(raw)) => {
                if raw.trim().is_empty() {
                    return Ok(FieldValue::Text(String::new()));
                }
                NaiveTime::parse_from_str(raw.trim(), "%H:%M")
                    .map(|time| FieldValue::Text(time.format("%H:%M").to_string()))
                    .map_err(|_| invalid("use 24-hour HH:MM format".into()))
            }
            (_, value) => Ok(value),
        }
    }

    /// Rejects tags outside the declared option list.
    pub fn accept_tag(&self, path: &str, tag: &str) -> Result<(), CoreError> {
        match &self.kind {
            FieldKind::MultiSelect(options) if !options.is_empty() && !options.contains(&tag) => {
                Err(CoreError::InvalidValue {
                    path: path.to_string(),
                    reason: format!("`{tag}` is not one of: {}", options.join(", ")),
                })
            }
            _ => Ok(()),
        }
    }
}

fn build_fields<'a>(descriptors: impl Iterator<Item = &'a FieldDescriptor>) -> Fields {
    let mut fields = Fields::new();
    for descriptor in descriptors {
        fields.assign(descriptor.key, descriptor.initial_value());
    }
    fields
}

/// One page of a wizard.
#[derive(Debug, Clone)]
pub struct StepDescriptor {
    pub title: &'static str,
    pub description: &'static str,
    pub fields: Vec<FieldDescriptor>,
}

impl StepDescriptor {
    pub fn new(
        title: &'static str,
        description: &'static str,
        fields: Vec<FieldDescriptor>,
    ) -> Self {
        Self {
            title,
            description,
            fields,
        }
    }
}

/// Complete description of one wizard tool.
#[derive(Debug)]
pub struct ToolSchema {
    pub kind: ToolKind,
    pub title: &'static str,
    /// Noun used in logs, e.g. `recipe`.
    pub subject: &'static str,
    /// Field whose text names a saved record in follow-up tasks.
    pub title_field: &'static str,
    pub steps: Vec<StepDescriptor>,
    /// Fields populated by `derive` at save time.
    pub derived: Vec<FieldDescriptor>,
    pub missing_message: &'static str,
    pub success_message: &'static str,
    /// Follow-up task text; `{}` is replaced by the title field.
    pub task_template: &'static str,
    pub derive: fn(&mut Fields),
}

impl ToolSchema {
    /// Editable fields of every step followed by the derived fields.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.steps
            .iter()
            .flat_map(|step| step.fields.iter())
            .chain(self.derived.iter())
    }

    pub fn initial_fields(&self) -> Fields {
        build_fields(self.fields())
    }

    pub fn required_fields(&self) -> Vec<&'static str> {
        self.fields()
            .filter(|descriptor| descriptor.required)
            .map(|descriptor| descriptor.key)
            .collect()
    }

    /// Required fields that are absent or blank in `fields`. Text is trimmed
    /// first, so a whitespace-only name counts as missing.
    pub fn missing_fields(&self, fields: &Fields) -> Vec<String> {
        self.required_fields()
            .into_iter()
            .filter(|key| fields.lookup(key).map_or(true, FieldValue::is_blank))
            .map(str::to_string)
            .collect()
    }

    /// Finds the descriptor addressed by `path`, descending into list items.
    pub fn descriptor_for(&self, path: &FieldPath) -> Option<&FieldDescriptor> {
        let chunks = path.key_chunks();
        let (first, rest) = chunks.split_first()?;
        let mut current = self.fields().find(|descriptor| descriptor.key == first.as_str())?;
        for chunk in rest {
            current = current
                .item_fields()
                .iter()
                .find(|descriptor| descriptor.key == chunk.as_str())?;
        }
        Some(current)
    }

    pub fn follow_up(&self, record: &Record) -> String {
        self.task_template
            .replace("{}", record.text(self.title_field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FieldDescriptor {
        FieldDescriptor::list(
            "ingredients",
            "Ingredients",
            vec![
                FieldDescriptor::text("name", "Name"),
                FieldDescriptor::choice("unit", "Unit", &["g", "kg"]),
                FieldDescriptor::number("quantity", "Quantity").with_default(1.0),
            ],
        )
    }

    #[test]
    fn item_template_uses_declared_defaults() {
        let template = sample().item_template().unwrap();
        assert_eq!(template.text("name"), "");
        assert_eq!(template.number("quantity"), 1.0);
        assert!(FieldDescriptor::text("x", "X").item_template().is_none());
    }

    #[test]
    fn choices_are_canonicalised() {
        let unit = FieldDescriptor::choice("unit", "Unit", &["g", "kg"]);
        assert_eq!(unit.accept("unit", "KG".into()).unwrap(), FieldValue::text("kg"));
        assert_eq!(unit.accept("unit", "".into()).unwrap(), FieldValue::text(""));
        assert!(matches!(
            unit.accept("unit", "lb".into()),
            Err(CoreError::InvalidValue { .. })
        ));
    }

    #[test]
    fn dates_and_times_are_checked() {
        let date = FieldDescriptor::date("start_date", "Start");
        assert!(date.accept("start_date", "2024-02-30".into()).is_err());
        assert_eq!(
            date.accept("start_date", " 2024-02-29 ".into()).unwrap(),
            FieldValue::text("2024-02-29")
        );
        let time = FieldDescriptor::time("time", "Time");
        assert_eq!(time.accept("time", "09:30".into()).unwrap(), FieldValue::text("09:30"));
        assert!(time.accept("time", "9.30pm".into()).is_err());
    }

    #[test]
    fn open_multi_select_accepts_any_tag() {
        let open = FieldDescriptor::multi("secondary", "Secondary", &[]);
        assert!(open.accept_tag("secondary", "Anything").is_ok());
        let closed = FieldDescriptor::multi("days", "Days", &["Mon"]);
        assert!(closed.accept_tag("days", "Tue").is_err());
    }
}
