pub mod support;

mod add;
mod config;
mod dedup;
mod delete;
mod list;
mod logging;
mod normalize;
