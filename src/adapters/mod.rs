//! Infrastructure adapters. Implement outbound ports and the terminal UI.
//!
//! HTTP AI client, mock, terminal. Map errors to DomainError.

pub mod ai;
pub mod ui;
