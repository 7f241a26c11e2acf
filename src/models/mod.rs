//! Request and response models for the dashboard API
//!
//! Typed forms of the listing parameters and of the bodies the client
//! reads or produces.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::GridParams;
pub use responses::{ApiStatus, ErrorBody};
