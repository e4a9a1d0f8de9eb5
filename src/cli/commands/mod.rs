//! CLI command implementations

pub mod utils;

pub mod completions;
pub mod config;
pub mod demo;
pub mod parts;
pub mod remove;
pub mod robot;
