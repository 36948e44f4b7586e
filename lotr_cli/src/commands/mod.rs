//! CLI subcommand implementations.

pub mod movies;
pub mod quotes;
