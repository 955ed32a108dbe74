//! Data models
//!
//! Persisted as camelCase JSON, matching the layout the campaign pages
//! originally wrote to browser storage.

pub mod activity;
pub mod global_data;
pub mod ledger;
pub mod product;
pub mod serde_helpers;

// Re-exports
pub use activity::*;
pub use global_data::*;
pub use ledger::*;
pub use product::*;
