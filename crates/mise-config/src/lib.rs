//! mise-config
//!
//! Global user preferences (business stage, AI agent visibility, dark mode)
//! and the key-value backend abstraction they persist through.

pub mod backend;
pub mod error;
pub mod model;
pub mod store;

pub use backend::{MemoryBackend, PreferenceBackend};
pub use error::ConfigError;
pub use model::{PersistedState, Preferences};
pub use store::{PreferenceStore, STORAGE_KEY};
