//! CLI argument parsing and configuration.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration from CLI arguments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    pub options_path: Option<PathBuf>,
    pub model: Option<String>,
    pub endpoint: Option<String>,
    /// `Some(None)` means the user disabled the timeout with `--timeout 0`
    pub timeout: Option<Option<Duration>>,
    pub log_dir: Option<PathBuf>,
}

/// What the command line asked for
#[derive(Debug, PartialEq, Eq)]
pub enum CliCommand {
    Run(CliConfig),
    Help,
    Version,
}

/// Print usage information
pub fn print_usage() {
    eprintln!("dq-rules - Compose data quality prompts and generate rules with a language model");
    eprintln!();
    eprintln!("Usage: dq-rules [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --options <FILE>     JSON file with application/operation/domain/department lists");
    eprintln!("  --model <NAME>       Model name (default: $DQ_RULES_MODEL or gemini-2.5-flash)");
    eprintln!("  --endpoint <URL>     Generative Language API base URL");
    eprintln!("  --timeout <SECS>     Request timeout in seconds, 0 disables it (default: 60)");
    eprintln!("  --log-dir <DIR>      Directory for log files");
    eprintln!("  -h, --help           Show this help message");
    eprintln!("  -V, --version        Show version");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  GEMINI_API_KEY       API key for the model (falls back to API_KEY)");
    eprintln!("  RUST_LOG             Log filter (default: info,dq_rules=debug)");
}

/// Parse CLI arguments, handling --help and --version by exiting
pub fn parse_args() -> Result<CliConfig, ConfigError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match parse_args_from(&args) {
        Ok(CliCommand::Run(config)) => Ok(config),
        Ok(CliCommand::Help) => {
            print_usage();
            std::process::exit(0);
        }
        Ok(CliCommand::Version) => {
            println!("dq-rules {}", VERSION);
            std::process::exit(0);
        }
        Err(err) => {
            print_usage();
            Err(err)
        }
    }
}

/// Parse arguments (without the program name)
pub fn parse_args_from(args: &[String]) -> Result<CliCommand, ConfigError> {
    let mut config = CliConfig::default();

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "-h" | "--help" => return Ok(CliCommand::Help),
            "-V" | "--version" => return Ok(CliCommand::Version),
            "--options" => config.options_path = Some(PathBuf::from(value_for(args, i, arg)?)),
            "--model" => config.model = Some(value_for(args, i, arg)?.to_string()),
            "--endpoint" => config.endpoint = Some(value_for(args, i, arg)?.to_string()),
            "--log-dir" => config.log_dir = Some(PathBuf::from(value_for(args, i, arg)?)),
            "--timeout" => {
                let raw = value_for(args, i, arg)?;
                let secs: u64 = raw.parse().map_err(|_| {
                    ConfigError::InvalidArgument(format!("Invalid timeout value: {}", raw))
                })?;
                config.timeout = Some((secs > 0).then(|| Duration::from_secs(secs)));
            }
            _ => {
                return Err(ConfigError::InvalidArgument(format!(
                    "Unknown argument: {}",
                    arg
                )));
            }
        }
        // Every option above takes exactly one value
        i += 2;
    }

    Ok(CliCommand::Run(config))
}

fn value_for<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, ConfigError> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| ConfigError::InvalidArgument(format!("Missing value for {}", flag)))
}
