//! Lower heating values by the enthalpy-difference method.
//!
//! A fuel is mixed stoichiometrically with pure O2 at 1 atm and the
//! requested temperature, then swapped for its complete-combustion
//! products at the same temperature and pressure. The enthalpy released per
//! kilogram of fuel is the lower heating value, since product water stays
//! in the gas phase.

use crate::error::{CombustionError, CombustionResult, DomainError};
use crate::factory::build_state;
use crate::products::complete_combustion_products;
use tc_chem::{ChemError, ChemicalState, Composition, StateOverrides};
use tc_core::numeric::{checked_div, ensure_finite};
use tc_core::units::{HeatingValue, Temperature, constants::one_atm};
use tc_core::TcError;
use tracing::{debug, trace};

/// Default evaluation temperature for heating values [K].
pub const DEFAULT_HEATING_VALUE_TEMPERATURE_K: f64 = 273.15;

const J_PER_KG_TO_MJ_PER_KG: f64 = 1e-6;

/// Lower heating value of `fuel` [MJ/kg] at `temperature`.
///
/// Works directly on `gas`, which is left holding the combustion products at
/// `temperature` and 1 atm. Pass a clone when the caller's state must
/// survive.
pub fn species_lower_heating_value<S: ChemicalState + ?Sized>(
    gas: &mut S,
    fuel: &Composition,
    temperature: Temperature,
) -> CombustionResult<HeatingValue> {
    gas.set_state(
        &StateOverrides::new()
            .with_temperature(temperature)
            .with_pressure(one_atm()),
    )?;
    let y_fuel = gas
        .set_equivalence_ratio(1.0, fuel, &Composition::pure("O2"))
        .map_err(|err| match err {
            ChemError::Stoichiometry { what } => DomainError::NonCombustible {
                fuel: fuel.to_string(),
                reason: what,
            }
            .into(),
            other => CombustionError::from(other),
        })?;

    let h1 = gas.enthalpy_mass();
    trace!(fuel = %fuel, h1, y_fuel, "reactants at stoichiometry");

    let products = complete_combustion_products(&*gas).to_composition()?;
    gas.set_state(&StateOverrides::new().with_composition(products))?;
    let h2 = gas.enthalpy_mass();
    trace!(fuel = %fuel, h2, "complete-combustion products");

    let per_kg_fuel = checked_div(h2 - h1, y_fuel, "enthalpy change per kg fuel").map_err(
        |err| match err {
            TcError::DivisionByZero { .. } => CombustionError::from(
                DomainError::ZeroFuelMassFraction {
                    fuel: fuel.to_string(),
                },
            ),
            other => other.into(),
        },
    )?;
    let lhv = ensure_finite(-J_PER_KG_TO_MJ_PER_KG * per_kg_fuel, "lower heating value")?;
    debug!(
        mechanism = gas.mechanism_name(),
        fuel = %fuel,
        temperature_k = temperature.value,
        lhv_mj_per_kg = lhv,
        "species heating value"
    );
    Ok(lhv)
}

/// Mass-weighted lower heating value [MJ/kg] of `composition`.
///
/// Builds a state from `mechanism` with the composition applied and
/// delegates to [`mixture_heating_value_of`].
pub fn mixture_heating_value(
    mechanism: &str,
    composition: &Composition,
    temperature: Temperature,
) -> CombustionResult<HeatingValue> {
    let gas = build_state(
        mechanism,
        &StateOverrides::new()
            .with_temperature(temperature)
            .with_pressure(one_atm())
            .with_composition(composition.clone()),
    )?;
    mixture_heating_value_of(&gas, temperature)
}

/// Mass-weighted lower heating value [MJ/kg] of the state's current mixture.
///
/// Each present species is evaluated on its own clone of `gas`, so `gas`
/// itself is not modified. Species that cannot burn (N2, CO2, H2O, O2, ...)
/// contribute nothing; a mixture with no combustible species at all is a
/// domain error.
pub fn mixture_heating_value_of<S: ChemicalState + Clone>(
    gas: &S,
    temperature: Temperature,
) -> CombustionResult<HeatingValue> {
    let mass_fractions = gas.mass_fractions();
    if mass_fractions.is_empty() {
        return Err(CombustionError::InvalidComposition {
            what: "mixture has no species",
        });
    }

    let mut total = 0.0;
    let mut first_domain_error = None;
    let mut any_combustible = false;

    for (species, y) in &mass_fractions {
        let mut scratch = gas.clone();
        match species_lower_heating_value(&mut scratch, &Composition::pure(species), temperature) {
            Ok(lhv) => {
                any_combustible = true;
                total += y * lhv;
            }
            Err(CombustionError::Domain(err @ DomainError::NonCombustible { .. })) => {
                debug!(species = %species, mass_fraction = y, %err, "skipping non-combustible species");
                first_domain_error.get_or_insert(err);
            }
            Err(other) => return Err(other),
        }
    }

    match (any_combustible, first_domain_error) {
        (false, Some(err)) => Err(err.into()),
        _ => Ok(ensure_finite(total, "mixture heating value")?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tc_chem::IdealGasState;
    use tc_core::units::{constants::normal_temperature, k};

    fn lhv(species: &str) -> CombustionResult<f64> {
        let mut gas = build_state("methane-air", &StateOverrides::new())?;
        species_lower_heating_value(&mut gas, &Composition::pure(species), normal_temperature())
    }

    #[test]
    fn methane_is_about_fifty() {
        let v = lhv("CH4").unwrap();
        assert!((v - 50.0).abs() < 1.0, "CH4 LHV = {v}");
    }

    #[test]
    fn known_fuels() {
        let cases = [("H2", 119.8), ("CO", 10.1), ("C2H6", 47.5), ("C3H8", 46.4)];
        for (species, expected) in cases {
            let v = lhv(species).unwrap();
            assert!(
                (v - expected).abs() / expected < 0.01,
                "{species}: {v} vs {expected}"
            );
        }
    }

    #[test]
    fn inert_and_oxidized_species_are_domain_errors() {
        for species in ["N2", "AR", "CO2", "H2O", "O2"] {
            let err = lhv(species).unwrap_err();
            assert!(
                matches!(err, CombustionError::Domain(DomainError::NonCombustible { .. })),
                "{species}: {err:?}"
            );
        }
    }

    #[test]
    fn unknown_species_is_provider_error() {
        assert!(matches!(lhv("XYZ"), Err(CombustionError::Provider(_))));
    }

    #[test]
    fn leaves_state_at_products() {
        let mut gas = build_state("methane-air", &StateOverrides::new()).unwrap();
        species_lower_heating_value(&mut gas, &Composition::pure("CH4"), k(300.0)).unwrap();
        assert_eq!(gas.temperature().value, 300.0);
        let comp = gas.composition();
        assert!((comp.mole_fraction("CO2") - 1.0 / 3.0).abs() < 1e-12);
        assert!((comp.mole_fraction("H2O") - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn pure_mixture_matches_species_value() {
        let species = lhv("CH4").unwrap();
        let mixture =
            mixture_heating_value("methane-air", &Composition::pure("CH4"), normal_temperature())
                .unwrap();
        assert!((mixture - species).abs() <= 1e-9 * species.abs());
    }

    #[test]
    fn inert_diluent_scales_by_mass_fraction() {
        let comp: Composition = "CH4:0.5, N2:0.5".parse().unwrap();
        let gas = build_state(
            "methane-air",
            &StateOverrides::new().with_composition(comp),
        )
        .unwrap();
        let y_ch4 = gas.mass_fraction("CH4").unwrap();
        let mixture = mixture_heating_value_of(&gas, normal_temperature()).unwrap();
        let pure = lhv("CH4").unwrap();
        assert!((mixture - y_ch4 * pure).abs() < 1e-9 * pure);
        // the caller's state is untouched
        assert!((gas.composition().mole_fraction("N2") - 0.5).abs() < 1e-12);
    }

    #[test]
    fn fuel_carrying_oxygen_counts_only_the_fuel_stream() {
        let fuel: Composition = "CH4:0.9, O2:0.1".parse().unwrap();
        let mut gas = build_state("methane-air", &StateOverrides::new()).unwrap();
        let blended = species_lower_heating_value(&mut gas, &fuel, normal_temperature()).unwrap();

        let seeded = build_state(
            "methane-air",
            &StateOverrides::new().with_composition(fuel.clone()),
        )
        .unwrap();
        let expected = seeded.mass_fraction("CH4").unwrap() * lhv("CH4").unwrap();
        assert!((blended - expected).abs() < 1e-8 * expected, "{blended} vs {expected}");

        let mixture = mixture_heating_value("methane-air", &fuel, normal_temperature()).unwrap();
        assert!((blended - mixture).abs() < 1e-8 * mixture);
    }

    /// Ideal gas whose enthalpy is undefined whenever H2 is present.
    #[derive(Clone)]
    struct BrokenHydrogen(IdealGasState);

    impl ChemicalState for BrokenHydrogen {
        fn mechanism_name(&self) -> &str {
            self.0.mechanism_name()
        }
        fn temperature(&self) -> Temperature {
            self.0.temperature()
        }
        fn pressure(&self) -> tc_core::units::Pressure {
            self.0.pressure()
        }
        fn composition(&self) -> Composition {
            self.0.composition()
        }
        fn set_state(&mut self, update: &StateOverrides) -> tc_chem::ChemResult<()> {
            self.0.set_state(update)
        }
        fn elemental_mole_fraction(&self, element: &str) -> f64 {
            self.0.elemental_mole_fraction(element)
        }
        fn set_equivalence_ratio(
            &mut self,
            phi: f64,
            fuel: &Composition,
            oxidizer: &Composition,
        ) -> tc_chem::ChemResult<f64> {
            self.0.set_equivalence_ratio(phi, fuel, oxidizer)
        }
        fn enthalpy_mass(&self) -> f64 {
            if self.0.mole_fraction("H2") > 0.0 {
                f64::NAN
            } else {
                self.0.enthalpy_mass()
            }
        }
        fn mass_fraction(&self, species: &str) -> tc_chem::ChemResult<f64> {
            self.0.mass_fraction(species)
        }
        fn mass_fractions(&self) -> Vec<(String, f64)> {
            self.0.mass_fractions()
        }
        fn density_mass(&self) -> tc_core::units::Density {
            self.0.density_mass()
        }
    }

    #[test]
    fn non_finite_species_value_is_not_skipped() {
        let gas = BrokenHydrogen(
            build_state(
                "methane-air",
                &StateOverrides::new().with_composition("CH4:0.5, H2:0.5".parse().unwrap()),
            )
            .unwrap(),
        );
        let err = mixture_heating_value_of(&gas, normal_temperature()).unwrap_err();
        assert!(
            matches!(err, CombustionError::Domain(DomainError::NonFinite { .. })),
            "{err:?}"
        );

        // the same wrapper still works when no hydrogen is involved
        let methane = BrokenHydrogen(
            build_state(
                "methane-air",
                &StateOverrides::new().with_composition("CH4:0.5, N2:0.5".parse().unwrap()),
            )
            .unwrap(),
        );
        assert!(mixture_heating_value_of(&methane, normal_temperature()).is_ok());
    }

    #[test]
    fn fully_inert_mixture_is_a_domain_error() {
        let err = mixture_heating_value(
            "methane-air",
            &"N2:0.79, AR:0.21".parse().unwrap(),
            normal_temperature(),
        )
        .unwrap_err();
        assert!(matches!(err, CombustionError::Domain(_)));
    }
}
