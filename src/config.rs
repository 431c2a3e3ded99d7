//! Runtime configuration: model settings and option-list loading.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, warn};

use crate::cli::CliConfig;
use crate::error::ConfigError;
use crate::generation::{DEFAULT_ENDPOINT, DEFAULT_MODEL};
use crate::models::OptionSets;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

const OPTIONS_FILE: &str = "options.json";
const APP_DIR: &str = "dq-rules";

/// Settings for the generation boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSettings {
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
    /// `None` waits forever
    pub request_timeout: Option<Duration>,
}

impl ModelSettings {
    /// Resolve from CLI flags first, then the environment, then defaults.
    pub fn resolve(cli: &CliConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| env(key).filter(|v| !v.trim().is_empty());
        Self {
            api_key: non_empty("GEMINI_API_KEY").or_else(|| non_empty("API_KEY")),
            model: cli
                .model
                .clone()
                .or_else(|| non_empty("DQ_RULES_MODEL"))
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            endpoint: cli
                .endpoint
                .clone()
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            request_timeout: cli.timeout.unwrap_or(Some(DEFAULT_TIMEOUT)),
        }
    }
}

/// Where the option lists came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionSource {
    Explicit(PathBuf),
    Local(PathBuf),
    Global(PathBuf),
    Embedded,
}

impl OptionSource {
    fn path(&self) -> Option<&Path> {
        match self {
            OptionSource::Explicit(p) | OptionSource::Local(p) | OptionSource::Global(p) => Some(p),
            OptionSource::Embedded => None,
        }
    }
}

impl fmt::Display for OptionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.path() {
            Some(path) => write!(f, "{}", path.display()),
            None => f.write_str("embedded defaults"),
        }
    }
}

/// Fully resolved configuration for one run
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub model: ModelSettings,
    pub options: OptionSets,
    pub options_source: OptionSource,
}

impl AppConfig {
    pub fn load(cli: &CliConfig) -> Result<Self, ConfigError> {
        let model = ModelSettings::resolve(cli, |key| std::env::var(key).ok());
        let (options, options_source) =
            load_option_sets(cli.options_path.as_deref(), &default_option_candidates())?;
        Ok(Self {
            model,
            options,
            options_source,
        })
    }
}

/// Search locations for an options file, in priority order:
/// 1. ./dq-rules/options.json (local project customization)
/// 2. <config dir>/dq-rules/options.json (global user config)
pub fn default_option_candidates() -> Vec<OptionSource> {
    let mut candidates = vec![OptionSource::Local(
        PathBuf::from(APP_DIR).join(OPTIONS_FILE),
    )];
    if let Some(config_dir) = dirs::config_dir() {
        candidates.push(OptionSource::Global(
            config_dir.join(APP_DIR).join(OPTIONS_FILE),
        ));
    }
    candidates
}

/// Load option lists. An explicit path must load; discovered files that fail
/// to parse are skipped; embedded defaults are the last resort.
pub fn load_option_sets(
    explicit: Option<&Path>,
    candidates: &[OptionSource],
) -> Result<(OptionSets, OptionSource), ConfigError> {
    if let Some(path) = explicit {
        let options = read_options_file(path)?;
        return Ok((options, OptionSource::Explicit(path.to_path_buf())));
    }

    for candidate in candidates {
        let Some(path) = candidate.path() else {
            continue;
        };
        if !path.exists() {
            continue;
        }
        match read_options_file(path) {
            Ok(options) => {
                debug!(source = %candidate, "loaded option lists");
                return Ok((options, candidate.clone()));
            }
            Err(err) => warn!(error = %err, "skipping unreadable options file"),
        }
    }

    Ok((OptionSets::embedded(), OptionSource::Embedded))
}

fn read_options_file(path: &Path) -> Result<OptionSets, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
