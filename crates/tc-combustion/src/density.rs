//! Mixture density at given or normal conditions.

use crate::error::CombustionResult;
use crate::factory::build_state;
use tc_chem::{ChemicalState, Composition, StateOverrides};
use tc_core::units::{
    Density,
    constants::{normal_pressure, normal_temperature},
};

/// Density of `mechanism`'s state with `overrides` applied.
pub fn density(mechanism: &str, overrides: &StateOverrides) -> CombustionResult<Density> {
    let gas = build_state(mechanism, overrides)?;
    Ok(gas.density_mass())
}

/// Density at normal conditions (273.15 K, 101325 Pa).
///
/// Without a composition the mechanism's default composition is used.
pub fn density_normal(
    mechanism: &str,
    composition: Option<Composition>,
) -> CombustionResult<Density> {
    let mut overrides = StateOverrides::new()
        .with_temperature(normal_temperature())
        .with_pressure(normal_pressure());
    overrides.composition = composition;
    density(mechanism, &overrides)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tc_core::units::{k, pa};
    use uom::si::mass_density::kilogram_per_cubic_meter;

    #[test]
    fn nitrogen_at_normal_conditions() {
        let rho = density_normal("methane-air", None).unwrap();
        assert!((rho.get::<kilogram_per_cubic_meter>() - 1.2499).abs() < 1e-3);
    }

    #[test]
    fn methane_at_normal_conditions() {
        let rho = density_normal("methane-air", Some(Composition::pure("CH4"))).unwrap();
        // 16.043 kg/kmol * 101325 / (8314.46 * 273.15)
        assert!((rho.get::<kilogram_per_cubic_meter>() - 0.7158).abs() < 1e-3);
    }

    #[test]
    fn scales_with_pressure_over_temperature() {
        let base = density("methane-air", &StateOverrides::new()).unwrap();
        let doubled = density(
            "methane-air",
            &StateOverrides::new()
                .with_temperature(k(300.0))
                .with_pressure(pa(2.0 * 101_325.0)),
        )
        .unwrap();
        assert!((doubled.value / base.value - 2.0).abs() < 1e-12);
    }
}
