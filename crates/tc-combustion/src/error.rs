//! Heating-value calculation errors.

use tc_chem::ChemError;
use tc_core::TcError;
use thiserror::Error;

/// Result type for combustion calculations.
pub type CombustionResult<T> = Result<T, CombustionError>;

/// Errors raised by the combustion calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CombustionError {
    /// Unknown or malformed mechanism reference.
    #[error("Failed to resolve mechanism '{reference}': {message}")]
    MechanismResolution { reference: String, message: String },

    /// The requested quantity is undefined for these inputs.
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Empty or all-zero composition.
    #[error("Invalid composition: {what}")]
    InvalidComposition { what: &'static str },

    /// Any other failure reported by the chemical state.
    #[error("Chemical state error: {0}")]
    Provider(ChemError),
}

/// Inputs for which a heating value or power has no finite answer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Fuel cannot be burned with oxygen (inert, or itself an oxidizer).
    #[error("'{fuel}' is not combustible: {reason}")]
    NonCombustible { fuel: String, reason: &'static str },

    /// Heating value would divide by a zero fuel mass fraction.
    #[error("fuel '{fuel}' has zero mass fraction in the stoichiometric mixture")]
    ZeroFuelMassFraction { fuel: String },

    #[error("non-finite {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}

impl From<ChemError> for CombustionError {
    fn from(err: ChemError) -> Self {
        match err {
            ChemError::MechanismResolution { reference, message } => {
                CombustionError::MechanismResolution { reference, message }
            }
            ChemError::InvalidComposition { what } => CombustionError::InvalidComposition { what },
            other => CombustionError::Provider(other),
        }
    }
}

impl From<TcError> for CombustionError {
    fn from(err: TcError) -> Self {
        match err {
            TcError::NonFinite { what, value } => DomainError::NonFinite { what, value }.into(),
            TcError::DivisionByZero { what } => DomainError::NonFinite {
                what,
                value: f64::INFINITY,
            }
            .into(),
            TcError::InvalidArg { what } => {
                CombustionError::Provider(ChemError::InvalidArg { what })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_errors_keep_reference() {
        let err: CombustionError = ChemError::MechanismResolution {
            reference: "x.yaml".into(),
            message: "no such file".into(),
        }
        .into();
        assert!(matches!(
            err,
            CombustionError::MechanismResolution { ref reference, .. } if reference == "x.yaml"
        ));
        assert!(err.to_string().contains("x.yaml"));
    }

    #[test]
    fn composition_errors_are_lifted() {
        let err: CombustionError = ChemError::InvalidComposition { what: "empty" }.into();
        assert_eq!(err, CombustionError::InvalidComposition { what: "empty" });
    }

    #[test]
    fn other_provider_errors_are_wrapped() {
        let err: CombustionError = ChemError::UnknownSpecies { name: "XYZ".into() }.into();
        assert!(matches!(err, CombustionError::Provider(_)));
    }

    #[test]
    fn domain_error_display() {
        let err: CombustionError = DomainError::NonCombustible {
            fuel: "N2:1".into(),
            reason: "fuel has no oxygen demand",
        }
        .into();
        let msg = err.to_string();
        assert!(msg.starts_with("Domain error"));
        assert!(msg.contains("N2"));
    }
}
