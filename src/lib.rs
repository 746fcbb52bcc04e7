//! task-timer: queue tasks and let an LLM estimate their duration, hexagonal layout.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
