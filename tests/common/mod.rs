use std::sync::Mutex;

use mise::AppContext;
use mise_storage_json::JsonFileBackend;
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a unique data directory for one test.
pub fn test_dir() -> std::path::PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// Context whose preferences live in `base/preferences.json`.
pub fn context_in(base: &std::path::Path) -> AppContext {
    let backend = JsonFileBackend::with_base_dir(base.to_path_buf()).expect("json backend");
    AppContext::with_backend(backend).expect("open context")
}

/// Context backed by a fresh temporary directory.
#[allow(dead_code)]
pub fn setup_context() -> AppContext {
    context_in(&test_dir())
}
