//! Core types and trait definitions for the dossier record store.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

// The `RecordStore` trait declares its methods as `impl Future + Send`
// returns so backend impls can use plain `async fn` (stabilised in 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod contact;
pub mod error;
pub mod finding;
pub mod search;
pub mod stats;
pub mod store;
pub mod subject;
pub mod watchlist;

pub use error::{Error, Result};
