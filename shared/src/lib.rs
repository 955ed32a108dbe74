//! Shared types for the campaign workspace
//!
//! Persisted schema (activities, products, ledger, orders) and small
//! id/time utilities used by the store.

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
