pub mod config;
pub mod mood;
pub mod schedule;
pub mod task;
