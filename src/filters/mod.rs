//! Filters Module
//!
//! Named filter selections and the query strings built from them.

mod encode;
mod query;
mod store;


pub use encode::{encode_component, normalize_value};
pub use query::ListQuery;
pub use store::{FieldMapping, FilterStore, DEFAULT_FIELDS};
