//! CLI subcommand implementations for the Lexiscope binary.

pub mod lookup_cmd;
pub mod output;
