// tc-core/src/units.rs

use uom::si::f64::{
    MassDensity as UomMassDensity, MassRate as UomMassRate, Power as UomPower,
    Pressure as UomPressure, ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type Density = UomMassDensity;
pub type MassRate = UomMassRate;
pub type Power = UomPower;
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;

/// Mass-specific enthalpy [J/kg].
///
/// Not part of uom's standard set, so we use f64 with clear documentation.
pub type SpecEnthalpy = f64;

/// Heating value [MJ/kg].
pub type HeatingValue = f64;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn kgps(v: f64) -> MassRate {
    use uom::si::mass_rate::kilogram_per_second;
    MassRate::new::<kilogram_per_second>(v)
}

/// Mass flow rate given in kg/h.
#[inline]
pub fn kgph(v: f64) -> MassRate {
    kgps(v / constants::SECONDS_PER_HOUR)
}

#[inline]
pub fn kg_m3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn w(v: f64) -> Power {
    use uom::si::power::watt;
    Power::new::<watt>(v)
}

pub mod constants {
    use super::*;

    /// Standard atmosphere [Pa].
    pub const ONE_ATM_PA: f64 = 101_325.0;
    /// Normal temperature [K].
    pub const NORMAL_TEMPERATURE_K: f64 = 273.15;
    /// Normal pressure [Pa].
    pub const NORMAL_PRESSURE_PA: f64 = 101_325.0;
    /// Universal gas constant [J/(kmol·K)].
    pub const R_UNIVERSAL: f64 = 8_314.462_618;
    pub const SECONDS_PER_HOUR: f64 = 3_600.0;

    #[inline]
    pub fn one_atm() -> Pressure {
        pa(ONE_ATM_PA)
    }

    #[inline]
    pub fn normal_temperature() -> Temperature {
        k(NORMAL_TEMPERATURE_K)
    }

    #[inline]
    pub fn normal_pressure() -> Pressure {
        pa(NORMAL_PRESSURE_PA)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uom::si::mass_rate::kilogram_per_second;

    #[test]
    fn constructors_smoke() {
        let _p = pa(101_325.0);
        let _t = k(300.0);
        let _mdot = kgps(1.2);
        let _rho = kg_m3(1.2);
        let _q = w(1.0e3);
        let _atm = constants::one_atm();
    }

    #[test]
    fn kgph_converts_to_si() {
        let mdot = kgph(3_600.0);
        assert!((mdot.get::<kilogram_per_second>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn normal_conditions() {
        assert_eq!(constants::normal_temperature().value, 273.15);
        assert_eq!(constants::normal_pressure().value, 101_325.0);
    }
}
