//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod duration;
pub mod entities;
pub mod errors;

pub use duration::{Estimation, parse_minutes};
pub use entities::{MAX_TASK_NAME_LEN, Task, TaskName};
pub use errors::DomainError;
