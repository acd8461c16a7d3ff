//! The chemical state interface used by the combustion core.

use crate::composition::Composition;
use crate::error::ChemResult;
use crate::state::StateOverrides;
use tc_core::units::{Density, Pressure, SpecEnthalpy, Temperature};

/// A single gas-phase state over a reaction mechanism.
///
/// The state is a mutable cursor: operations that change temperature,
/// pressure or composition do so in place. Implementations are not expected
/// to be shared between threads while being mutated; give each concurrent
/// task its own state.
pub trait ChemicalState {
    /// Name of the mechanism backing this state (for debugging/logging).
    fn mechanism_name(&self) -> &str;

    fn temperature(&self) -> Temperature;

    fn pressure(&self) -> Pressure;

    /// Current composition as normalized mole fractions.
    fn composition(&self) -> Composition;

    /// Apply a partial update of temperature, pressure and composition.
    ///
    /// Unset fields keep their current value. Either every supplied field is
    /// applied or, on error, the state is left untouched.
    fn set_state(&mut self, update: &StateOverrides) -> ChemResult<()>;

    /// Fraction of all atoms in the mixture that belong to `element`.
    ///
    /// Returns 0.0 for an element the mechanism does not declare.
    fn elemental_mole_fraction(&self, element: &str) -> f64;

    /// Replace the composition with a fuel/oxidizer mixture at equivalence
    /// ratio `phi`, keeping temperature and pressure.
    ///
    /// Returns the mass fraction of the fuel stream in the new mixture. This
    /// differs from summing species mass fractions when fuel and oxidizer
    /// share a species (e.g. a fuel carrying some O2).
    fn set_equivalence_ratio(
        &mut self,
        phi: f64,
        fuel: &Composition,
        oxidizer: &Composition,
    ) -> ChemResult<f64>;

    /// Mass-specific enthalpy [J/kg].
    fn enthalpy_mass(&self) -> SpecEnthalpy;

    /// Mass fraction of one species; errors for a species the mechanism lacks.
    fn mass_fraction(&self, species: &str) -> ChemResult<f64>;

    /// Mass fractions of all species present, in mechanism order.
    fn mass_fractions(&self) -> Vec<(String, f64)>;

    /// Mass density [kg/m³].
    fn density_mass(&self) -> Density;
}
