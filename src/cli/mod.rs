//! CLI argument parsing for dq-rules.

mod args;

pub use args::{parse_args, CliConfig, VERSION};
