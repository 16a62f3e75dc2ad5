//! CLI subcommand implementations for the atlas binary.

pub mod generate_cmd;
pub mod parse_cmd;
