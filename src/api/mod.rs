//! API Module
//!
//! Client side of the dashboard HTTP API.
//!
//! # Pieces
//! - [`Transport`] - the raw GET/PATCH seam, with [`HttpTransport`] on reqwest
//! - [`ApiClient`] - read-through response cache, loading flag, error summary
//! - [`OutcomeLog`] - rolling window of request outcomes

pub mod client;
pub mod outcomes;
pub mod transport;

pub use client::ApiClient;
pub use outcomes::{OutcomeLog, OutcomeRecord, DEFAULT_WINDOW_SECS};
pub use transport::{HttpTransport, Transport};
