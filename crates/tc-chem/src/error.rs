//! Chemical state provider errors.

use tc_core::TcError;
use thiserror::Error;

/// Result type for chemical state operations.
pub type ChemResult<T> = Result<T, ChemError>;

/// Errors that can occur while resolving mechanisms or manipulating a gas state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChemError {
    /// Mechanism reference could not be turned into a usable mechanism.
    #[error("Failed to resolve mechanism '{reference}': {message}")]
    MechanismResolution { reference: String, message: String },

    /// Species name not defined by the mechanism.
    #[error("Unknown species '{name}'")]
    UnknownSpecies { name: String },

    /// Empty, negative, non-finite or all-zero composition.
    #[error("Invalid composition: {what}")]
    InvalidComposition { what: &'static str },

    /// Non-physical values (negative temperature, pressure, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Fuel/oxidizer pair has no defined stoichiometric ratio.
    #[error("Stoichiometry undefined: {what}")]
    Stoichiometry { what: &'static str },
}

impl ChemError {
    pub(crate) fn resolution(reference: &str, message: impl Into<String>) -> Self {
        ChemError::MechanismResolution {
            reference: reference.to_string(),
            message: message.into(),
        }
    }
}

impl From<TcError> for ChemError {
    fn from(err: TcError) -> Self {
        match err {
            TcError::NonFinite { what, .. } => ChemError::NonPhysical { what },
            TcError::InvalidArg { what } => ChemError::InvalidArg { what },
            TcError::DivisionByZero { what } => ChemError::NonPhysical { what },
        }
    }
}
