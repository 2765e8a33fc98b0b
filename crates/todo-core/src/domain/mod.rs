//! Domain model (Task, TaskId, errors).

pub mod errors;
pub mod task;

pub use self::errors::TodoError;
pub use self::task::{Task, TaskId};
