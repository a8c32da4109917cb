//! CLI commands for linkwatch

pub mod add;
pub mod dedup;
pub mod delete;
pub mod dispatch;
pub mod duplicates;
pub mod list;
pub mod normalize;
pub mod sources;
pub mod update;
