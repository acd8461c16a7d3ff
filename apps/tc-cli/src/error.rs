use std::path::PathBuf;
use tc_chem::{ChemError, UnitError};
use tc_combustion::CombustionError;
use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Combustion(#[from] CombustionError),

    #[error(transparent)]
    Chem(#[from] ChemError),

    #[error("{what}: {source}")]
    Unit {
        what: &'static str,
        #[source]
        source: UnitError,
    },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid case file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("a fuel composition or --heating-value is required")]
    MissingFuel,
}
