//! A fuel mixture bound to a mechanism, with its heating value computed once.

use crate::error::{CombustionError, CombustionResult};
use crate::factory::build_state_from;
use crate::heating_value::{DEFAULT_HEATING_VALUE_TEMPERATURE_K, mixture_heating_value_of};
use crate::power::power_supply;
use std::sync::Arc;
use tc_chem::{ChemicalState, Composition, Mechanism, StateOverrides};
use tc_core::units::{
    Density, HeatingValue, MassRate, Power, Temperature,
    constants::{normal_pressure, normal_temperature},
    k,
};
use tracing::info;

/// Fuel mixture with a cached lower heating value.
///
/// ```
/// use tc_combustion::FuelMixture;
/// use tc_core::units::kgph;
///
/// let fuel = FuelMixture::builder()
///     .mechanism("methane-air")
///     .composition("CH4:0.95, C2H6:0.05".parse().unwrap())
///     .build()
///     .unwrap();
/// assert!(fuel.heating_value() > 49.0);
/// let _power = fuel.power_supply(kgph(10.0)).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct FuelMixture {
    mechanism: Arc<Mechanism>,
    composition: Composition,
    temperature: Temperature,
    heating_value: HeatingValue,
}

#[derive(Debug, Clone, Default)]
pub struct FuelMixtureBuilder {
    mechanism: Option<String>,
    composition: Option<Composition>,
    temperature: Option<Temperature>,
}

impl FuelMixtureBuilder {
    pub fn mechanism(mut self, reference: impl Into<String>) -> Self {
        self.mechanism = Some(reference.into());
        self
    }

    pub fn composition(mut self, composition: Composition) -> Self {
        self.composition = Some(composition);
        self
    }

    /// Heating-value temperature; 273.15 K when not set.
    pub fn temperature(mut self, temperature: Temperature) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Resolve the mechanism and compute the heating value.
    pub fn build(self) -> CombustionResult<FuelMixture> {
        let reference = self.mechanism.ok_or(CombustionError::MechanismResolution {
            reference: String::new(),
            message: "no mechanism given".into(),
        })?;
        let composition = self.composition.ok_or(CombustionError::InvalidComposition {
            what: "no composition given",
        })?;
        let temperature = self
            .temperature
            .unwrap_or_else(|| k(DEFAULT_HEATING_VALUE_TEMPERATURE_K));

        let mechanism = Mechanism::resolve(&reference)?;
        let gas = build_state_from(
            Arc::clone(&mechanism),
            &StateOverrides::new().with_composition(composition.clone()),
        )?;
        let heating_value = mixture_heating_value_of(&gas, temperature)?;
        info!(
            mechanism = mechanism.name(),
            fuel = %composition,
            lhv_mj_per_kg = heating_value,
            "fuel mixture ready"
        );

        Ok(FuelMixture {
            mechanism,
            composition,
            temperature,
            heating_value,
        })
    }
}

impl FuelMixture {
    pub fn builder() -> FuelMixtureBuilder {
        FuelMixtureBuilder::default()
    }

    /// Lower heating value [MJ/kg].
    pub fn heating_value(&self) -> HeatingValue {
        self.heating_value
    }

    pub fn composition(&self) -> &Composition {
        &self.composition
    }

    /// Temperature the heating value was evaluated at.
    pub fn temperature(&self) -> Temperature {
        self.temperature
    }

    pub fn mechanism_name(&self) -> &str {
        self.mechanism.name()
    }

    pub fn power_supply(&self, mass_flow: MassRate) -> CombustionResult<Power> {
        power_supply(self.heating_value, mass_flow)
    }

    /// Density of this fuel; overrides may set temperature and pressure.
    /// A composition in `overrides` is ignored.
    pub fn density(&self, overrides: &StateOverrides) -> CombustionResult<Density> {
        let mut overrides = overrides.clone();
        overrides.composition = Some(self.composition.clone());
        let gas = build_state_from(Arc::clone(&self.mechanism), &overrides)?;
        Ok(gas.density_mass())
    }

    /// Density at 273.15 K and 101325 Pa.
    pub fn density_normal(&self) -> CombustionResult<Density> {
        self.density(
            &StateOverrides::new()
                .with_temperature(normal_temperature())
                .with_pressure(normal_pressure()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heating_value::mixture_heating_value;
    use tc_core::units::{kgps, pa};

    fn methane() -> FuelMixture {
        FuelMixture::builder()
            .mechanism("methane-air")
            .composition(Composition::pure("CH4"))
            .build()
            .unwrap()
    }

    #[test]
    fn caches_the_mixture_heating_value() {
        let fuel = methane();
        let direct = mixture_heating_value(
            "methane-air",
            &Composition::pure("CH4"),
            k(DEFAULT_HEATING_VALUE_TEMPERATURE_K),
        )
        .unwrap();
        assert_eq!(fuel.heating_value(), direct);
        assert_eq!(fuel.temperature().value, 273.15);
        assert_eq!(fuel.mechanism_name(), "methane-air");
    }

    #[test]
    fn power_uses_cached_value() {
        let fuel = methane();
        let p = fuel.power_supply(kgps(1.0)).unwrap();
        assert!((p.value - fuel.heating_value() * 1e6).abs() < 1e-6);
    }

    #[test]
    fn density_keeps_fuel_composition() {
        let fuel = methane();
        let overrides = StateOverrides::new()
            .with_pressure(pa(202_650.0))
            .with_composition(Composition::pure("N2"));
        let rho = fuel.density(&overrides).unwrap();
        let rho_n = fuel.density_normal().unwrap();
        // default 300 K vs normal 273.15 K, double pressure
        let expected = rho_n.value * 2.0 * 273.15 / 300.0;
        assert!((rho.value - expected).abs() < 1e-9);
    }

    #[test]
    fn missing_inputs_are_reported() {
        let err = FuelMixture::builder()
            .composition(Composition::pure("CH4"))
            .build()
            .unwrap_err();
        assert!(matches!(err, CombustionError::MechanismResolution { .. }));

        let err = FuelMixture::builder()
            .mechanism("methane-air")
            .build()
            .unwrap_err();
        assert!(matches!(err, CombustionError::InvalidComposition { .. }));
    }
}
