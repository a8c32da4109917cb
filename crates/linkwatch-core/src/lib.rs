//! Linkwatch Core Library
//!
//! Tracking of reported negative posts: URL canonicalization, duplicate
//! detection, audited deletion and the link store client.

pub mod canonical;
pub mod config;
pub mod dashboard;
pub mod dedup;
pub mod delete;
pub mod error;
pub mod format;
pub mod logging;
pub mod model;
pub mod sources;
pub mod state;
pub mod store;
pub mod workflow;
