//! tc-chem: gas-phase chemical state provider for thermochem.
//!
//! Provides:
//! - Reaction-mechanism resolution (built-in sets and Cantera-style YAML files)
//! - Element and species definitions with NASA7 thermodynamics
//! - Composition handling (pure species and mixtures)
//! - The `ChemicalState` trait: the narrow interface the combustion core relies on
//! - `IdealGasState`, an ideal-gas implementation of that trait
//!
//! # Architecture
//!
//! Higher layers only talk to a gas through `ChemicalState`. A state is a
//! mutable cursor (temperature, pressure, composition) over an immutable,
//! shared `Mechanism`; cloning a state is cheap and yields an independent
//! cursor.
//!
//! # Example
//!
//! ```
//! use tc_chem::{ChemicalState, Composition, IdealGasState, Mechanism, StateOverrides};
//! use tc_core::units::{k, pa};
//!
//! let mech = Mechanism::resolve("methane-air").unwrap();
//! let mut gas = IdealGasState::new(mech);
//! gas.set_state(
//!     &StateOverrides::new()
//!         .with_temperature(k(300.0))
//!         .with_pressure(pa(101_325.0))
//!         .with_composition(Composition::pure("CH4")),
//! )
//! .unwrap();
//! assert!(gas.density_mass().value > 0.6);
//! ```

pub mod composition;
pub mod element;
pub mod error;
pub mod ideal_gas;
pub mod mechanism;
pub mod model;
pub mod species;
pub mod state;
pub mod thermo;
pub mod units;

// Re-exports for ergonomics
pub use composition::Composition;
pub use element::Element;
pub use error::{ChemError, ChemResult};
pub use ideal_gas::IdealGasState;
pub use mechanism::{BUILTIN_MECHANISMS, DefaultState, Mechanism};
pub use model::ChemicalState;
pub use species::SpeciesDef;
pub use state::StateOverrides;
pub use thermo::Nasa7;
pub use units::{Quantity, UnitError, parse_quantity};
