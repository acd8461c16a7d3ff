//! Fuel power supply.

use crate::error::{CombustionResult, DomainError};
use crate::heating_value::mixture_heating_value;
use tc_chem::Composition;
use tc_core::units::{HeatingValue, MassRate, Power, Temperature, w};

const MJ_TO_J: f64 = 1e6;

/// Power released by burning `mass_flow` of fuel with heating value `hv`
/// [MJ/kg].
///
/// P = ṁ · Hv. The result is returned as a uom power (read it with
/// `get::<kilowatt>()` for kW).
pub fn power_supply(hv: HeatingValue, mass_flow: MassRate) -> CombustionResult<Power> {
    if !hv.is_finite() {
        return Err(DomainError::NonFinite {
            what: "heating value",
            value: hv,
        }
        .into());
    }
    let kg_per_s = mass_flow.value;
    if !kg_per_s.is_finite() {
        return Err(DomainError::NonFinite {
            what: "mass flow",
            value: kg_per_s,
        }
        .into());
    }
    Ok(w(kg_per_s * hv * MJ_TO_J))
}

/// Heating value of `fuel` at `temperature` combined with `mass_flow`.
pub fn fuel_power_supply(
    mechanism: &str,
    mass_flow: MassRate,
    fuel: &Composition,
    temperature: Temperature,
) -> CombustionResult<Power> {
    let hv = mixture_heating_value(mechanism, fuel, temperature)?;
    power_supply(hv, mass_flow)
}
