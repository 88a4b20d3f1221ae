//! Taskmaster: task-management record store exposed over HTTP.
//!
//! This crate validates task requests, applies the task lifecycle rules,
//! persists records through a repository port, and maps outcomes onto HTTP
//! responses.
//!
//! # Architecture
//!
//! Taskmaster follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, HTTP)
//!
//! # Modules
//!
//! - [`task`]: Task domain, validation, service, and adapters
//! - [`config`]: Environment-driven server configuration
//! - [`observability`]: Structured logging setup

pub mod config;
pub mod observability;
pub mod task;
