use std::path::PathBuf;

use glake_parser::position::RangeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("config: {0}")]
    Config(#[from] glake_config::ConfigError),
    #[error("reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("reading stdin: {0}")]
    Stdin(#[source] std::io::Error),
    #[error(transparent)]
    Range(#[from] RangeError),
    #[error("json output: {0}")]
    Json(#[from] serde_json::Error),
    #[error("yaml output: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid --var {0:?}, expected NAME=VALUE")]
    InvalidVar(String),
}
