//! Application use cases. Orchestrate domain logic via ports.

pub mod estimator_service;
pub mod task_queue;

pub use estimator_service::{EstimatorService, PREAMBLE};
pub use task_queue::{BREAK_MINUTES, TaskQueue};
