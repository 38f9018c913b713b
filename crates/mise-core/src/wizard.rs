//! Multi-step wizard session for one tool.
//!
//! A [`Wizard`] owns the draft being edited, the 1-based step index, the
//! append-only collection of saved records and the notices raised by saves.
//! The active step only decides which fields the UI shows; every field of the
//! draft stays editable regardless of the step.

use mise_domain::{FieldValue, Notice, Record, RecordId, ValueKind};
use tracing::{debug, info, warn};

use crate::collection::Collection;
use crate::draft::Draft;
use crate::path::FieldPath;
use crate::schema::{FieldDescriptor, StepDescriptor, ToolSchema};
use crate::tools::ToolKind;
use crate::{CoreError, ValidationError};

/// Outcome of a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReceipt {
    pub id: RecordId,
    /// Position of the record in the collection.
    pub index: usize,
    /// Follow-up task text for the saved record.
    pub follow_up: String,
}

#[derive(Debug)]
pub struct Wizard {
    schema: &'static ToolSchema,
    step: usize,
    draft: Draft,
    saved: Collection,
    notices: Vec<Notice>,
}

impl Wizard {
    pub fn new(schema: &'static ToolSchema) -> Self {
        Self {
            schema,
            step: 1,
            draft: Draft::new(schema.initial_fields()),
            saved: Collection::new(),
            notices: Vec::new(),
        }
    }

    pub fn for_tool(kind: ToolKind) -> Self {
        Self::new(kind.schema())
    }

    pub fn kind(&self) -> ToolKind {
        self.schema.kind
    }

    pub fn schema(&self) -> &'static ToolSchema {
        self.schema
    }

    pub fn current_step(&self) -> usize {
        self.step
    }

    pub fn step_count(&self) -> usize {
        self.schema.steps.len()
    }

    pub fn active_step(&self) -> Option<&StepDescriptor> {
        self.schema.steps.get(self.step - 1)
    }

    pub fn is_first_step(&self) -> bool {
        self.step == 1
    }

    pub fn is_last_step(&self) -> bool {
        self.step >= self.step_count()
    }

    pub fn progress_percent(&self) -> f64 {
        self.step as f64 / self.step_count() as f64 * 100.0
    }

    /// Advances one step. Returns `false` on the last step.
    pub fn go_next(&mut self) -> bool {
        if self.is_last_step() {
            return false;
        }
        self.step += 1;
        debug!(tool = %self.schema.kind, step = self.step, "wizard advanced");
        true
    }

    /// Goes back one step. Returns `false` on the first step.
    pub fn go_previous(&mut self) -> bool {
        if self.is_first_step() {
            return false;
        }
        self.step -= 1;
        debug!(tool = %self.schema.kind, step = self.step, "wizard went back");
        true
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn value(&self, path: &str) -> Result<&FieldValue, CoreError> {
        self.draft.get(&path.parse()?)
    }

    fn editable(&self, raw: &str) -> Result<(FieldPath, &'static FieldDescriptor), CoreError> {
        let path: FieldPath = raw.parse()?;
        let descriptor = self
            .schema
            .descriptor_for(&path)
            .ok_or_else(|| CoreError::UnknownField(path.to_string()))?;
        if descriptor.derived {
            return Err(CoreError::ReadOnlyField(path.to_string()));
        }
        Ok((path, descriptor))
    }

    pub fn set_field(&mut self, path: &str, value: impl Into<FieldValue>) -> Result<(), CoreError> {
        let (path, descriptor) = self.editable(path)?;
        let value = descriptor.accept(&path.to_string(), value.into())?;
        self.draft.set_field(&path, value)?;
        debug!(tool = %self.schema.kind, field = %path, "field updated");
        Ok(())
    }

    /// Returns whether `tag` is selected after the toggle.
    pub fn toggle_tag(&mut self, path: &str, tag: &str) -> Result<bool, CoreError> {
        let (path, descriptor) = self.editable(path)?;
        descriptor.accept_tag(&path.to_string(), tag)?;
        let selected = self.draft.toggle_tag(&path, tag)?;
        debug!(tool = %self.schema.kind, field = %path, tag, selected, "tag toggled");
        Ok(selected)
    }

    /// Appends an entry holding the list's item defaults; returns its index.
    pub fn add_entry(&mut self, path: &str) -> Result<usize, CoreError> {
        let (path, descriptor) = self.editable(path)?;
        let template = descriptor.item_template().ok_or_else(|| CoreError::FieldKind {
            path: path.to_string(),
            expected: ValueKind::List,
            found: descriptor.initial_value().kind(),
        })?;
        let index = self.draft.add_entry(&path, template)?;
        debug!(tool = %self.schema.kind, field = %path, index, "entry added");
        Ok(index)
    }

    pub fn remove_entry(&mut self, path: &str, index: usize) -> Result<(), CoreError> {
        let (path, _) = self.editable(path)?;
        self.draft.remove_entry(&path, index)?;
        debug!(tool = %self.schema.kind, field = %path, index, "entry removed");
        Ok(())
    }

    pub fn push_number(&mut self, path: &str, value: f64) -> Result<usize, CoreError> {
        let (path, _) = self.editable(path)?;
        self.draft.push_number(&path, value)
    }

    pub fn set_number(&mut self, path: &str, index: usize, value: f64) -> Result<(), CoreError> {
        let (path, _) = self.editable(path)?;
        self.draft.set_number(&path, index, value)
    }

    pub fn remove_number(&mut self, path: &str, index: usize) -> Result<f64, CoreError> {
        let (path, _) = self.editable(path)?;
        self.draft.remove_number(&path, index)
    }

    pub fn push_line(&mut self, path: &str, line: impl Into<String>) -> Result<usize, CoreError> {
        let (path, _) = self.editable(path)?;
        self.draft.push_line(&path, line.into())
    }

    pub fn set_line(
        &mut self,
        path: &str,
        index: usize,
        line: impl Into<String>,
    ) -> Result<(), CoreError> {
        let (path, _) = self.editable(path)?;
        self.draft.set_line(&path, index, line.into())
    }

    pub fn remove_line(&mut self, path: &str, index: usize) -> Result<String, CoreError> {
        let (path, _) = self.editable(path)?;
        self.draft.remove_line(&path, index)
    }

    /// Copy of the draft with every derived field computed. The draft itself
    /// is left untouched.
    pub fn compute_derived(&self) -> Record {
        let mut record = self.draft.record().clone();
        (self.schema.derive)(&mut record.fields);
        record
    }

    /// Required-field gate applied by [`Wizard::save`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing = self.schema.missing_fields(self.draft.fields());
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(missing, self.schema.missing_message))
        }
    }

    /// Saves the draft into the collection.
    ///
    /// On failure an error notice is queued and nothing else changes. On
    /// success the derived record is appended, a success notice is queued,
    /// and the wizard restarts on step 1 with a fresh draft.
    pub fn save(&mut self) -> Result<SaveReceipt, ValidationError> {
        if let Err(err) = self.validate() {
            warn!(
                tool = %self.schema.kind,
                missing = ?err.missing,
                "{} not saved",
                self.schema.subject
            );
            self.notices.push(Notice::error(err.message.clone()));
            return Err(err);
        }

        let record = self.compute_derived();
        let id = record.id;
        let follow_up = self.schema.follow_up(&record);
        let index = self.saved.append(record);
        self.notices.push(Notice::success(self.schema.success_message));

        self.draft = Draft::new(self.schema.initial_fields());
        self.step = 1;
        info!(tool = %self.schema.kind, record = %id, index, "{} saved", self.schema.subject);

        Ok(SaveReceipt {
            id,
            index,
            follow_up,
        })
    }

    pub fn collection(&self) -> &Collection {
        &self.saved
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}
