//! Ideal-gas mixture state backed by NASA7 species thermo.

use crate::composition::Composition;
use crate::error::{ChemError, ChemResult};
use crate::mechanism::Mechanism;
use crate::model::ChemicalState;
use crate::state::StateOverrides;
use std::sync::Arc;
use tc_core::units::constants::R_UNIVERSAL;
use tc_core::units::{Density, Pressure, SpecEnthalpy, Temperature, k, kg_m3, pa};

/// Oxygen-demand weights (moles of O2 per atom) for complete combustion.
const O2_PER_C: f64 = 1.0;
const O2_PER_H: f64 = 0.25;
const O2_PER_O: f64 = -0.5;

/// Ideal-gas mixture over a shared mechanism.
///
/// Cloning is cheap: the mechanism is reference-counted and only the
/// temperature, pressure and mole-fraction vector are copied.
#[derive(Debug, Clone)]
pub struct IdealGasState {
    mechanism: Arc<Mechanism>,
    /// Temperature [K]
    t: f64,
    /// Pressure [Pa]
    p: f64,
    /// Normalized mole fractions, indexed like `mechanism.species()`.
    x: Vec<f64>,
}

impl IdealGasState {
    /// Create a state at the mechanism's default temperature, pressure and
    /// composition.
    pub fn new(mechanism: Arc<Mechanism>) -> Self {
        let default = mechanism.default_state();
        let mut x = vec![0.0; mechanism.n_species()];
        // Mechanism resolution guarantees default species exist.
        for (name, frac) in default.composition.iter() {
            if let Some(idx) = mechanism.species_index(name) {
                x[idx] = frac;
            }
        }
        Self {
            t: default.temperature_k,
            p: default.pressure_pa,
            x,
            mechanism,
        }
    }

    /// Mean molar mass [kg/kmol].
    pub fn mean_molar_mass(&self) -> f64 {
        self.molar_mass_of(&self.x)
    }

    fn molar_mass_of(&self, x: &[f64]) -> f64 {
        self.mechanism
            .species()
            .iter()
            .zip(x)
            .map(|(s, x)| x * s.molar_mass)
            .sum()
    }

    /// Mole fraction of one species (0.0 if absent or unknown).
    pub fn mole_fraction(&self, species: &str) -> f64 {
        self.mechanism
            .species_index(species)
            .map(|idx| self.x[idx])
            .unwrap_or(0.0)
    }

    /// Map a composition onto the mechanism's species vector.
    fn mole_fraction_vector(&self, comp: &Composition) -> ChemResult<Vec<f64>> {
        let mut x = vec![0.0; self.mechanism.n_species()];
        for (name, frac) in comp.iter() {
            let idx = self
                .mechanism
                .species_index(name)
                .ok_or_else(|| ChemError::UnknownSpecies {
                    name: name.to_string(),
                })?;
            x[idx] += frac;
        }
        Ok(x)
    }

    /// Net moles of O2 needed to burn one mole of mixture `x` completely
    /// (negative when the mixture carries surplus oxygen).
    fn oxygen_demand(&self, x: &[f64]) -> f64 {
        let weights: Vec<(usize, f64)> = [("C", O2_PER_C), ("H", O2_PER_H), ("O", O2_PER_O)]
            .iter()
            .filter_map(|(symbol, w)| self.mechanism.element_index(symbol).map(|idx| (idx, *w)))
            .collect();

        self.mechanism
            .species()
            .iter()
            .zip(x)
            .map(|(s, xk)| {
                xk * weights
                    .iter()
                    .map(|(idx, w)| w * s.atom_count(*idx))
                    .sum::<f64>()
            })
            .sum()
    }
}

fn validate_temperature(t: Temperature) -> ChemResult<f64> {
    let t = t.value;
    if !t.is_finite() || t <= 0.0 {
        return Err(ChemError::NonPhysical {
            what: "temperature must be positive and finite",
        });
    }
    Ok(t)
}

fn validate_pressure(p: Pressure) -> ChemResult<f64> {
    let p = p.value;
    if !p.is_finite() || p <= 0.0 {
        return Err(ChemError::NonPhysical {
            what: "pressure must be positive and finite",
        });
    }
    Ok(p)
}

fn normalize(x: &mut [f64]) -> ChemResult<()> {
    let sum: f64 = x.iter().sum();
    if !sum.is_finite() || sum <= 0.0 {
        return Err(ChemError::InvalidComposition {
            what: "mole fractions sum to zero or non-finite",
        });
    }
    x.iter_mut().for_each(|v| *v /= sum);
    Ok(())
}

impl ChemicalState for IdealGasState {
    fn mechanism_name(&self) -> &str {
        self.mechanism.name()
    }

    fn temperature(&self) -> Temperature {
        k(self.t)
    }

    fn pressure(&self) -> Pressure {
        pa(self.p)
    }

    fn composition(&self) -> Composition {
        let items: Vec<(String, f64)> = self
            .mechanism
            .species()
            .iter()
            .zip(&self.x)
            .filter(|(_, x)| **x > 0.0)
            .map(|(s, x)| (s.name.clone(), *x))
            .collect();
        // The vector is kept normalized with at least one positive entry.
        Composition::new_mole_fractions(items)
            .unwrap_or_else(|_| Composition::pure(self.mechanism.species()[0].name.clone()))
    }

    fn set_state(&mut self, update: &StateOverrides) -> ChemResult<()> {
        // Validate everything before touching the state.
        let t = update.temperature.map(validate_temperature).transpose()?;
        let p = update.pressure.map(validate_pressure).transpose()?;
        let x = match &update.composition {
            Some(comp) => {
                let mut x = self.mole_fraction_vector(comp)?;
                normalize(&mut x)?;
                Some(x)
            }
            None => None,
        };

        if let Some(t) = t {
            self.t = t;
        }
        if let Some(p) = p {
            self.p = p;
        }
        if let Some(x) = x {
            self.x = x;
        }
        Ok(())
    }

    fn elemental_mole_fraction(&self, element: &str) -> f64 {
        let Some(idx) = self.mechanism.element_index(element) else {
            return 0.0;
        };
        let (atoms, total) = self
            .mechanism
            .species()
            .iter()
            .zip(&self.x)
            .fold((0.0, 0.0), |(atoms, total), (s, x)| {
                (atoms + x * s.atom_count(idx), total + x * s.total_atoms())
            });
        if total > 0.0 { atoms / total } else { 0.0 }
    }

    fn set_equivalence_ratio(
        &mut self,
        phi: f64,
        fuel: &Composition,
        oxidizer: &Composition,
    ) -> ChemResult<f64> {
        if !phi.is_finite() || phi < 0.0 {
            return Err(ChemError::InvalidArg {
                what: "equivalence ratio must be non-negative and finite",
            });
        }

        let mut x_fuel = self.mole_fraction_vector(fuel)?;
        let mut x_ox = self.mole_fraction_vector(oxidizer)?;
        normalize(&mut x_fuel)?;
        normalize(&mut x_ox)?;

        let demand_fuel = self.oxygen_demand(&x_fuel);
        let demand_ox = self.oxygen_demand(&x_ox);
        if demand_fuel <= 1e-12 {
            return Err(ChemError::Stoichiometry {
                what: "fuel has no oxygen demand",
            });
        }
        if demand_ox >= -1e-12 {
            return Err(ChemError::Stoichiometry {
                what: "oxidizer supplies no oxygen",
            });
        }

        // Moles of oxidizer per mole of fuel at stoichiometry.
        let ox_per_fuel = demand_fuel / -demand_ox;
        let mut x: Vec<f64> = x_fuel
            .iter()
            .zip(&x_ox)
            .map(|(f, o)| phi * f + ox_per_fuel * o)
            .collect();
        normalize(&mut x)?;

        let fuel_mass = phi * self.molar_mass_of(&x_fuel);
        let fuel_stream = fuel_mass / (fuel_mass + ox_per_fuel * self.molar_mass_of(&x_ox));
        self.x = x;
        Ok(fuel_stream)
    }

    fn enthalpy_mass(&self) -> SpecEnthalpy {
        let t = self.t;
        let h_molar: f64 = self
            .mechanism
            .species()
            .iter()
            .zip(&self.x)
            .filter(|(_, x)| **x > 0.0)
            .map(|(s, x)| x * s.thermo.h_rt(t))
            .sum::<f64>()
            * R_UNIVERSAL
            * t;
        h_molar / self.mean_molar_mass()
    }

    fn mass_fraction(&self, species: &str) -> ChemResult<f64> {
        let idx = self
            .mechanism
            .species_index(species)
            .ok_or_else(|| ChemError::UnknownSpecies {
                name: species.to_string(),
            })?;
        Ok(self.x[idx] * self.mechanism.species()[idx].molar_mass / self.mean_molar_mass())
    }

    fn mass_fractions(&self) -> Vec<(String, f64)> {
        let mean = self.mean_molar_mass();
        self.mechanism
            .species()
            .iter()
            .zip(&self.x)
            .filter(|(_, x)| **x > 0.0)
            .map(|(s, x)| (s.name.clone(), x * s.molar_mass / mean))
            .collect()
    }

    fn density_mass(&self) -> Density {
        kg_m3(self.p * self.mean_molar_mass() / (R_UNIVERSAL * self.t))
    }
}
