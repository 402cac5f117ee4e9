//! CLI subcommands

pub mod merge;
