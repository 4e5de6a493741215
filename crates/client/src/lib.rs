//! Donezo dashboard client.
//!
//! Talks to the dashboard REST backend, keeps the signed-in session in
//! durable key/value storage, and owns the mutable per-page state (latest
//! snapshot, local project list) that the pure projections in
//! [`donezo_core`] render from.

pub mod api;
pub mod config;
pub mod fetcher;
pub mod page;
pub mod session;
pub mod storage;
pub mod tracker;
