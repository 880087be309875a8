//! Todo API: a small CRUD service over a single Todo collection.
//!
//! - `db`: record store abstraction and its SQLite implementation
//! - `api`: axum router, handlers and error rendering

pub mod api;
pub mod db;
mod serde_utils;
