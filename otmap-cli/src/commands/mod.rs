//! CLI subcommand implementations.

pub mod common;
pub mod houses;
pub mod info;
pub mod render;
pub mod towns;
