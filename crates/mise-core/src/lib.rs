//! mise-core
//!
//! Wizard engine, tool schemas and derived-metric heuristics for mise.
//! Depends on mise-domain. No terminal I/O, no persistence.

pub mod collection;
pub mod draft;
pub mod error;
pub mod metrics;
pub mod path;
pub mod schema;
pub mod tasks;
pub mod tools;
pub mod wizard;

pub use collection::Collection;
pub use draft::Draft;
pub use error::{CoreError, ValidationError};
pub use path::{FieldPath, Segment};
pub use schema::{FieldDescriptor, FieldKind, StepDescriptor, ToolSchema};
pub use tasks::TaskList;
pub use tools::{tools_for_stage, ToolKind};
pub use wizard::{SaveReceipt, Wizard};

#[cfg(test)]
mod tests;
