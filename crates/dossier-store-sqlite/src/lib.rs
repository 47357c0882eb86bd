//! SQLite backend for the dossier record store.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated
//! thread without blocking the async runtime. The single connection handle
//! doubles as the single-writer queue: every operation is serialized through
//! it, so concurrent requests can never interleave partial writes.

mod encode;
mod schema;
mod store;

pub use store::SqliteStore;
