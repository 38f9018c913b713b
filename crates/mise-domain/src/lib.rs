//! mise-domain
//!
//! Pure data types shared by the wizard tools (records, tag sets, field values),
//! the business stage catalogue, follow-up tasks and user notices.
//! No I/O, no persistence, no engine logic.

pub mod ids;
pub mod notice;
pub mod record;
pub mod stage;
pub mod tags;
pub mod task;
pub mod value;

pub use ids::*;
pub use notice::*;
pub use record::*;
pub use stage::*;
pub use tags::*;
pub use task::*;
pub use value::*;
