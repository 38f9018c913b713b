//! Application context threaded from the UI root.

use std::collections::BTreeMap;

use mise_config::{PreferenceBackend, PreferenceStore, Preferences};
use mise_core::{tools_for_stage, SaveReceipt, TaskList, ToolKind, Wizard};
use mise_domain::{BusinessStage, RecordId, Task};
use mise_storage_json::JsonFileBackend;
use tracing::{debug, info};

use crate::{utils, AppError};

/// Owns the preference store, the follow-up tasks and every mounted tool.
///
/// A mounted tool keeps its draft and saved records until it is closed or
/// dropped by a stage change; nothing outlives the context except the
/// preferences.
pub struct AppContext {
    preferences: PreferenceStore,
    tasks: TaskList,
    mounted: BTreeMap<ToolKind, Wizard>,
}

impl AppContext {
    pub fn new(preferences: PreferenceStore) -> Self {
        Self {
            preferences,
            tasks: TaskList::new(),
            mounted: BTreeMap::new(),
        }
    }

    pub fn with_backend(backend: impl PreferenceBackend + 'static) -> Result<Self, AppError> {
        Ok(Self::new(PreferenceStore::open(backend)?))
    }

    /// Context persisting preferences under [`utils::app_data_dir`].
    pub fn open_default() -> Result<Self, AppError> {
        let backend = JsonFileBackend::with_base_dir(utils::app_data_dir())?;
        info!(path = %backend.path().display(), "opening preferences");
        Self::with_backend(backend)
    }

    pub fn preferences(&self) -> &Preferences {
        self.preferences.preferences()
    }

    pub fn stage(&self) -> BusinessStage {
        self.preferences.business_stage()
    }

    pub fn available_tools(&self) -> &'static [ToolKind] {
        tools_for_stage(self.stage())
    }

    /// Mounts `kind` with a fresh wizard unless it is already mounted.
    pub fn open_tool(&mut self, kind: ToolKind) -> &mut Wizard {
        self.mounted.entry(kind).or_insert_with(|| {
            debug!(tool = %kind, "tool mounted");
            Wizard::for_tool(kind)
        })
    }

    /// Unmounts `kind`, discarding its draft and saved records. Returns
    /// whether it was mounted.
    pub fn close_tool(&mut self, kind: ToolKind) -> bool {
        let closed = self.mounted.remove(&kind).is_some();
        if closed {
            debug!(tool = %kind, "tool unmounted");
        }
        closed
    }

    pub fn is_open(&self, kind: ToolKind) -> bool {
        self.mounted.contains_key(&kind)
    }

    pub fn open_tools(&self) -> impl Iterator<Item = ToolKind> + '_ {
        self.mounted.keys().copied()
    }

    pub fn tool(&self, kind: ToolKind) -> Result<&Wizard, AppError> {
        self.mounted.get(&kind).ok_or(AppError::ToolNotOpen(kind))
    }

    pub fn tool_mut(&mut self, kind: ToolKind) -> Result<&mut Wizard, AppError> {
        self.mounted.get_mut(&kind).ok_or(AppError::ToolNotOpen(kind))
    }

    /// Saves the tool's draft and queues its follow-up task.
    pub fn save_tool(&mut self, kind: ToolKind) -> Result<SaveReceipt, AppError> {
        let receipt = self.tool_mut(kind)?.save()?;
        self.tasks.add(receipt.follow_up.clone());
        Ok(receipt)
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn tasks_mut(&mut self) -> &mut TaskList {
        &mut self.tasks
    }

    /// Flips a follow-up task and returns whether it is now completed.
    pub fn toggle_task(&mut self, id: RecordId) -> Result<bool, AppError> {
        Ok(self.tasks.toggle(id)?)
    }

    pub fn remove_task(&mut self, id: RecordId) -> Result<Task, AppError> {
        Ok(self.tasks.remove(id)?)
    }

    /// Persists the stage and unmounts tools the new stage does not offer.
    ///
    /// The store keeps the new stage in memory even when the write fails, so
    /// tools are unmounted before the write error is returned.
    pub fn set_stage(&mut self, stage: BusinessStage) -> Result<(), AppError> {
        let persisted = self.preferences.set_business_stage(stage);
        self.unmount_unavailable();
        Ok(persisted?)
    }

    fn unmount_unavailable(&mut self) {
        let stage = self.stage();
        let available = tools_for_stage(stage);
        self.mounted.retain(|kind, _| {
            let keep = available.contains(kind);
            if !keep {
                debug!(tool = %kind, %stage, "tool unmounted by stage change");
            }
            keep
        });
    }

    pub fn set_show_ai_agents(&mut self, show: bool) -> Result<(), AppError> {
        Ok(self.preferences.set_show_ai_agents(show)?)
    }

    /// Flips dark mode and returns the new value.
    pub fn toggle_dark_mode(&mut self) -> Result<bool, AppError> {
        Ok(self.preferences.toggle_dark_mode()?)
    }

    /// Picks up preference writes made through another store.
    pub fn reload_preferences(&mut self) -> Result<(), AppError> {
        self.preferences.reload()?;
        self.unmount_unavailable();
        Ok(())
    }
}
