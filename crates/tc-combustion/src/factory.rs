//! State factory: mechanism reference + overrides → ready-to-use gas state.

use crate::error::CombustionResult;
use std::sync::Arc;
use tc_chem::{ChemicalState, IdealGasState, Mechanism, StateOverrides};

/// Resolve `mechanism` and return a state at its defaults, with any supplied
/// temperature, pressure and composition applied together.
///
/// Resolution failures surface as `CombustionError::MechanismResolution`;
/// no partially built state is returned. The caller owns the state
/// exclusively.
pub fn build_state(mechanism: &str, overrides: &StateOverrides) -> CombustionResult<IdealGasState> {
    let mech = Mechanism::resolve(mechanism)?;
    build_state_from(mech, overrides)
}

/// Same as [`build_state`] for an already resolved mechanism.
pub fn build_state_from(
    mechanism: Arc<Mechanism>,
    overrides: &StateOverrides,
) -> CombustionResult<IdealGasState> {
    let mut gas = IdealGasState::new(mechanism);
    gas.set_state(overrides)?;
    Ok(gas)
}
