//! Background Tasks Module
//!
//! # Tasks
//! - Error window prune: drops outcomes older than the error window

mod prune;

pub use prune::spawn_prune_task;
