//! Archer Client - dashboard API client utilities
//!
//! A read-through response cache with a rolling error log in front of the
//! dashboard HTTP API, and a filter store that renders query strings.

pub mod api;
pub mod cache;
pub mod clock;
pub mod config;
pub mod error;
pub mod filters;
pub mod models;
pub mod tasks;

pub use api::{ApiClient, HttpTransport, Transport};
pub use config::Config;
pub use error::{ApiError, Result};
pub use filters::{FieldMapping, FilterStore, ListQuery};
pub use tasks::spawn_prune_task;
