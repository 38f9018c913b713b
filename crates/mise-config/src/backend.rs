//! Key-value storage the preference store persists through.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::ConfigError;

/// String key-value storage, the shape of browser local storage.
pub trait PreferenceBackend: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>, ConfigError>;
    fn write(&self, key: &str, value: &str) -> Result<(), ConfigError>;
    fn remove(&self, key: &str) -> Result<(), ConfigError>;
}

impl<B: PreferenceBackend + ?Sized> PreferenceBackend for Arc<B> {
    fn read(&self, key: &str) -> Result<Option<String>, ConfigError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), ConfigError> {
        (**self).write(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), ConfigError> {
        (**self).remove(key)
    }
}

/// Process-local backend; contents are lost on drop.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> Result<MutexGuard<'_, HashMap<String, String>>, ConfigError> {
        self.entries
            .lock()
            .map_err(|_| ConfigError::Backend("memory backend lock poisoned".into()))
    }
}

impl PreferenceBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, ConfigError> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), ConfigError> {
        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), ConfigError> {
        self.entries()?.remove(key);
        Ok(())
    }
}
