use mise_domain::BusinessStage;
use tracing::{debug, info, warn};

use crate::{ConfigError, PersistedState, PreferenceBackend, Preferences};

/// Key the preference envelope is stored under.
pub const STORAGE_KEY: &str = "app-storage";

/// In-memory preferences mirrored to a [`PreferenceBackend`].
///
/// Mutators update memory first and then write the whole envelope, so the
/// last write wins. A failed write leaves the in-memory value changed and
/// returns the error.
pub struct PreferenceStore {
    backend: Box<dyn PreferenceBackend>,
    preferences: Preferences,
}

impl PreferenceStore {
    pub fn open(backend: impl PreferenceBackend + 'static) -> Result<Self, ConfigError> {
        let backend: Box<dyn PreferenceBackend> = Box::new(backend);
        let preferences = load(backend.as_ref())?;
        Ok(Self {
            backend,
            preferences,
        })
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn business_stage(&self) -> BusinessStage {
        self.preferences.business_stage
    }

    pub fn show_ai_agents(&self) -> bool {
        self.preferences.show_ai_agents
    }

    pub fn is_dark_mode(&self) -> bool {
        self.preferences.is_dark_mode
    }

    pub fn set_business_stage(&mut self, stage: BusinessStage) -> Result<(), ConfigError> {
        self.preferences.business_stage = stage;
        info!(stage = %stage, "business stage changed");
        self.persist()
    }

    pub fn set_show_ai_agents(&mut self, show: bool) -> Result<(), ConfigError> {
        self.preferences.show_ai_agents = show;
        info!(show, "AI agent visibility changed");
        self.persist()
    }

    /// Flips dark mode and returns the new value.
    pub fn toggle_dark_mode(&mut self) -> Result<bool, ConfigError> {
        self.preferences.is_dark_mode = !self.preferences.is_dark_mode;
        info!(dark = self.preferences.is_dark_mode, "theme toggled");
        self.persist()?;
        Ok(self.preferences.is_dark_mode)
    }

    /// Re-reads the envelope, picking up writes made by another store.
    pub fn reload(&mut self) -> Result<(), ConfigError> {
        self.preferences = load(self.backend.as_ref())?;
        Ok(())
    }

    /// Removes the persisted envelope and restores defaults.
    pub fn reset(&mut self) -> Result<(), ConfigError> {
        self.backend.remove(STORAGE_KEY)?;
        self.preferences = Preferences::default();
        info!("preferences reset");
        Ok(())
    }

    fn persist(&self) -> Result<(), ConfigError> {
        let envelope = PersistedState::new(self.preferences.clone());
        let json =
            serde_json::to_string(&envelope).map_err(|err| ConfigError::Serde(err.to_string()))?;
        self.backend.write(STORAGE_KEY, &json)
    }
}

fn load(backend: &dyn PreferenceBackend) -> Result<Preferences, ConfigError> {
    let Some(raw) = backend.read(STORAGE_KEY)? else {
        debug!("no stored preferences, using defaults");
        return Ok(Preferences::default());
    };
    match serde_json::from_str::<PersistedState>(&raw) {
        Ok(envelope) => Ok(envelope.state),
        Err(err) => {
            warn!(error = %err, "stored preferences are unreadable, using defaults");
            Ok(Preferences::default())
        }
    }
}
