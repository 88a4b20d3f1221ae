//! Adapter implementations for task ports.
//!
//! - [`memory`]: in-process repository used by tests and local runs
//! - [`postgres`]: Diesel-backed repository
//! - [`http`]: axum transport mapping HTTP requests onto the task service

pub mod http;
pub mod memory;
pub mod postgres;
