//! Follow-up tasks created by successful saves.

use mise_domain::{RecordId, Task};
use tracing::debug;

use crate::CoreError;

#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, text: impl Into<String>) -> RecordId {
        let task = Task::new(text);
        let id = task.id;
        debug!(task = %id, text = %task.text, "task added");
        self.tasks.push(task);
        id
    }

    /// Flips completion and returns the new state.
    pub fn toggle(&mut self, id: RecordId) -> Result<bool, CoreError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(CoreError::TaskNotFound(id))?;
        Ok(task.toggle())
    }

    pub fn remove(&mut self, id: RecordId) -> Result<Task, CoreError> {
        let position = self
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(CoreError::TaskNotFound(id))?;
        Ok(self.tasks.remove(position))
    }

    pub fn get(&self, id: RecordId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn pending(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|task| !task.completed)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
