//! tc-combustion: heating values and fuel power from gas composition.
//!
//! Pipeline:
//! - `factory`: build a chemical state from a mechanism reference plus overrides
//! - `products`: complete-combustion products (CO2, H2O, N2) of a state's elements
//! - `heating_value`: species lower heating value (enthalpy-difference method)
//!   and the mass-weighted mixture heating value
//! - `power`: fuel power supply from heating value and mass flow
//! - `density`: density at given or normal conditions
//! - `mixture`: `FuelMixture`, a builder-made mixture with its heating value cached
//!
//! The calculations only see gases through `tc_chem::ChemicalState`.
//!
//! # Example
//!
//! ```
//! use tc_chem::Composition;
//! use tc_combustion::{mixture_heating_value, power_supply};
//! use tc_core::units::{constants::normal_temperature, kgph};
//! use uom::si::power::kilowatt;
//!
//! let fuel: Composition = "CH4:0.95, C2H6:0.05".parse().unwrap();
//! let hv = mixture_heating_value("methane-air", &fuel, normal_temperature()).unwrap();
//! let power = power_supply(hv, kgph(100.0)).unwrap();
//! assert!(power.get::<kilowatt>() > 1_300.0);
//! ```

pub mod density;
pub mod error;
pub mod factory;
pub mod heating_value;
pub mod mixture;
pub mod power;
pub mod products;

// Re-exports for ergonomics
pub use density::{density, density_normal};
pub use error::{CombustionError, CombustionResult, DomainError};
pub use factory::{build_state, build_state_from};
pub use heating_value::{
    DEFAULT_HEATING_VALUE_TEMPERATURE_K, mixture_heating_value, mixture_heating_value_of,
    species_lower_heating_value,
};
pub use mixture::{FuelMixture, FuelMixtureBuilder};
pub use power::{fuel_power_supply, power_supply};
pub use products::{CombustionProducts, complete_combustion_products};
