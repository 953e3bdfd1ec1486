pub mod config;
pub mod plan;
pub mod preset;
pub mod task;
