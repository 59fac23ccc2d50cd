//! CLI subcommand implementations.

pub mod search;
