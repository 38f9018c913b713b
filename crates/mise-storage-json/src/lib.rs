//! mise-storage-json
//!
//! File-backed [`PreferenceBackend`]: every key lives in one JSON object on
//! disk, rewritten atomically through a temporary sibling file.

use std::{
    collections::BTreeMap,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
    sync::Mutex,
};

use mise_config::{ConfigError, PreferenceBackend};
use tracing::{debug, warn};

pub const PREFERENCES_FILE: &str = "preferences.json";
const TMP_SUFFIX: &str = "tmp";

type Entries = BTreeMap<String, String>;

#[derive(Debug)]
pub struct JsonFileBackend {
    path: PathBuf,
    // Serialises read-modify-write cycles within the process.
    guard: Mutex<()>,
}

impl JsonFileBackend {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            guard: Mutex::new(()),
        }
    }

    /// Backend writing `preferences.json` inside `base`, created if missing.
    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        fs::create_dir_all(&base)?;
        Ok(Self::new(base.join(PREFERENCES_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Entries, ConfigError> {
        if !self.path.exists() {
            return Ok(Entries::new());
        }
        let data = fs::read_to_string(&self.path)?;
        match serde_json::from_str(&data) {
            Ok(entries) => Ok(entries),
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "preferences file is unreadable, starting empty");
                Ok(Entries::new())
            }
        }
    }

    fn store(&self, entries: &Entries) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(entries)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), keys = entries.len(), "preferences written");
        Ok(())
    }

    fn update(&self, apply: impl FnOnce(&mut Entries)) -> Result<(), ConfigError> {
        let _lock = self
            .guard
            .lock()
            .map_err(|_| ConfigError::Backend("preferences file lock poisoned".into()))?;
        let mut entries = self.load()?;
        apply(&mut entries);
        self.store(&entries)
    }
}

impl PreferenceBackend for JsonFileBackend {
    fn read(&self, key: &str) -> Result<Option<String>, ConfigError> {
        Ok(self.load()?.remove(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), ConfigError> {
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<(), ConfigError> {
        self.update(|entries| {
            entries.remove(key);
        })
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
