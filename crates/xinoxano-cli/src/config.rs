//! CLI configuration
//!
//! Settings come from command-line flags, then environment variables
//! (handled by clap), then a TOML file, then built-in defaults.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use xinoxano_core::{PathQuery, DEFAULT_MAX_PATHS};

use crate::output::OutputFormat;
use crate::Cli;

/// Lexicon read when nothing else is configured
pub const DEFAULT_LEXICON: &str = "sinonims.txt";

/// Config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "xinoxano.toml";

/// Config file under the user config directory
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("xinoxano").join("config.toml"))
}

/// Contents of a configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub lexicon: Option<PathBuf>,
    pub max_paths: Option<usize>,
    pub visit_budget: Option<usize>,
    pub format: Option<OutputFormat>,
}

impl FileConfig {
    /// Load the explicit file, or the first implicit one that exists
    ///
    /// An explicit path must exist; missing implicit files give the
    /// empty configuration.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            return Self::read(path);
        }

        let candidates = std::iter::once(PathBuf::from(CONFIG_FILE_NAME)).chain(user_config_path());
        for path in candidates {
            if path.is_file() {
                return Self::read(&path);
            }
        }

        Ok(Self::default())
    }

    fn read(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }
}

/// Effective settings for one invocation
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub lexicon: PathBuf,
    pub max_paths: usize,
    pub visit_budget: Option<usize>,
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lexicon: PathBuf::from(DEFAULT_LEXICON),
            max_paths: DEFAULT_MAX_PATHS,
            visit_budget: None,
            format: OutputFormat::Text,
        }
    }
}

impl Settings {
    pub fn resolve(cli: &Cli, file: FileConfig) -> Self {
        let defaults = Self::default();
        Self {
            lexicon: cli.lexicon.clone().or(file.lexicon).unwrap_or(defaults.lexicon),
            max_paths: cli.max_paths.or(file.max_paths).unwrap_or(defaults.max_paths),
            visit_budget: cli.visit_budget.or(file.visit_budget),
            format: cli.format.or(file.format).unwrap_or(defaults.format),
        }
    }

    pub fn query(&self, source: &str, target: &str, n_intermediate: usize) -> PathQuery {
        PathQuery::new(source, target)
            .with_intermediate(n_intermediate)
            .with_max_paths(self.max_paths)
            .with_visit_budget(self.visit_budget)
    }
}
