//! Partial state updates.

use crate::composition::Composition;
use tc_core::units::{Pressure, Temperature};

/// Optional temperature, pressure and composition for a state update.
///
/// A `None` field keeps the state's current value, so an update only touches
/// what it names. All supplied fields are applied together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateOverrides {
    pub temperature: Option<Temperature>,
    pub pressure: Option<Pressure>,
    pub composition: Option<Composition>,
}

impl StateOverrides {
    /// An update that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_temperature(mut self, t: Temperature) -> Self {
        self.temperature = Some(t);
        self
    }

    pub fn with_pressure(mut self, p: Pressure) -> Self {
        self.pressure = Some(p);
        self
    }

    pub fn with_composition(mut self, comp: Composition) -> Self {
        self.composition = Some(comp);
        self
    }
}
