//! Donezo dashboard domain: snapshot types and the pure projections the
//! dashboard renders from them.
//!
//! Nothing in this crate performs I/O; callers pass data in and get derived
//! views back.

pub mod analytics;
pub mod error;
pub mod format;
pub mod navigation;
pub mod progress;
pub mod projects;
pub mod search;
pub mod team;
pub mod types;
pub mod view;
pub mod weekly;
