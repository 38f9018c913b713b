//! mise: restaurant planning dashboard.
//!
//! Ties the wizard tools, the follow-up task list and the persisted global
//! preferences together behind [`AppContext`].

pub mod app;
pub mod errors;
pub mod utils;

use std::sync::Once;

pub use app::AppContext;
pub use errors::AppError;
pub use mise_config::{PreferenceBackend, PreferenceStore, Preferences};
pub use mise_core::{tools_for_stage, SaveReceipt, TaskList, ToolKind, Wizard};
pub use mise_domain::{BusinessStage, FieldAccess, FieldValue, Notice, NoticeLevel, Record};

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("mise tracing initialized.");
    });
}
