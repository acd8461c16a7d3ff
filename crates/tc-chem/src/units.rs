//! Unit-tagged numeric text parsing.
//!
//! Mechanism files and command-line inputs carry values such as `"1 atm"`,
//! `"25 C"` or `"100 kg/h"`. `parse_quantity` turns such text into the
//! canonical SI value for the requested quantity. A bare number is taken to
//! already be in canonical units.

use std::fmt;
use thiserror::Error;

/// Dimension/quantity family for a numeric input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    /// Temperature (canonical: Kelvin)
    Temperature,
    /// Absolute pressure (canonical: Pa)
    Pressure,
    /// Specific energy, e.g. heating value (canonical: J/kg)
    SpecificEnergy,
    /// Mass flow rate (canonical: kg/s)
    MassFlow,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temperature => write!(f, "Temperature"),
            Self::Pressure => write!(f, "Absolute Pressure"),
            Self::SpecificEnergy => write!(f, "Specific Energy"),
            Self::MassFlow => write!(f, "Mass Flow Rate"),
        }
    }
}

/// Error in unit parsing or conversion.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitError {
    /// Input text did not parse to a number + optional unit
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Unit not recognized for this quantity
    #[error("Unknown unit '{unit}' for {quantity}")]
    UnknownUnit { unit: String, quantity: Quantity },
    /// Unit not allowed for this quantity (e.g., plain "psi" requires "psia" or "psig")
    #[error("Ambiguous unit '{unit}': {reason}")]
    AmbiguousUnit { unit: String, reason: &'static str },
    /// Value out of physical range (e.g., negative absolute temperature)
    #[error("Value {value} out of range: {reason}")]
    OutOfRange { value: f64, reason: &'static str },
}

/// Parse a quantity value from text, returning the canonical SI value.
///
/// # Arguments
///
/// - `raw_text`: input such as `"70F"`, `"1 atm"`, `"100 kg/h"`, `"50 MJ/kg"`
/// - `quantity`: dimension/quantity family for validation
pub fn parse_quantity(raw_text: &str, quantity: Quantity) -> Result<f64, UnitError> {
    let trimmed = raw_text.trim();

    match quantity {
        Quantity::Temperature => parse_temperature(trimmed),
        Quantity::Pressure => parse_pressure(trimmed),
        Quantity::SpecificEnergy => parse_specific_energy(trimmed),
        Quantity::MassFlow => parse_mass_flow(trimmed),
    }
}

fn unknown(unit: &str, quantity: Quantity) -> UnitError {
    UnitError::UnknownUnit {
        unit: unit.to_string(),
        quantity,
    }
}

/// Parse temperature in various units, return Kelvin.
fn parse_temperature(input: &str) -> Result<f64, UnitError> {
    let (value, unit) = split_value_and_unit(input)?;

    let kelvin = match unit.to_lowercase().as_str() {
        // Default to Kelvin if no unit specified
        "" | "k" | "kelvin" => value,
        "c" | "°c" | "celsius" => value + 273.15,
        "f" | "°f" | "fahrenheit" => (value + 459.67) * 5.0 / 9.0,
        "r" | "°r" | "rankine" => value * 5.0 / 9.0,
        _ => return Err(unknown(&unit, Quantity::Temperature)),
    };

    if kelvin <= 0.0 {
        return Err(UnitError::OutOfRange {
            value: kelvin,
            reason: "Absolute temperature must be > 0 K",
        });
    }

    Ok(kelvin)
}

/// Parse absolute pressure in various units, return Pa.
fn parse_pressure(input: &str) -> Result<f64, UnitError> {
    let (value, unit) = split_value_and_unit(input)?;

    let pa = match unit.to_lowercase().as_str() {
        "" | "pa" | "pascal" => value,
        "kpa" => value * 1e3,
        "mpa" => value * 1e6,
        "bar" => value * 1e5,
        "mbar" | "millibar" => value * 100.0,
        "atm" => value * 101_325.0,
        "torr" => value * 133.322,
        "psia" => value * 6_894.76,
        "psig" => (value + 14.696) * 6_894.76,
        "barg" => (value + 1.01325) * 1e5,
        "psi" => {
            return Err(UnitError::AmbiguousUnit {
                unit: "psi".to_string(),
                reason: "Use 'psia' (absolute) or 'psig' (gauge)",
            });
        }
        _ => return Err(unknown(&unit, Quantity::Pressure)),
    };

    if pa <= 0.0 {
        return Err(UnitError::OutOfRange {
            value: pa,
            reason: "Absolute pressure must be > 0 Pa",
        });
    }

    Ok(pa)
}

/// Parse specific energy, return J/kg.
fn parse_specific_energy(input: &str) -> Result<f64, UnitError> {
    let (value, unit) = split_value_and_unit(input)?;

    let j_kg = match unit.to_lowercase().as_str() {
        "" | "j/kg" => value,
        "kj/kg" => value * 1e3,
        "mj/kg" => value * 1e6,
        "btu/lbm" | "btu/lb" => value * 2_326.0,
        "kwh/kg" => value * 3.6e6,
        _ => return Err(unknown(&unit, Quantity::SpecificEnergy)),
    };

    Ok(j_kg)
}

/// Parse mass flow rate, return kg/s.
fn parse_mass_flow(input: &str) -> Result<f64, UnitError> {
    let (value, unit) = split_value_and_unit(input)?;

    let kg_s = match unit.to_lowercase().as_str() {
        "" | "kg/s" => value,
        "kg/min" => value / 60.0,
        "kg/h" | "kg/hr" => value / 3_600.0,
        "g/s" => value / 1e3,
        "t/h" => value * 1e3 / 3_600.0,
        "lbm/s" => value * 0.453_592,
        "lbm/h" | "lbm/hr" => value * 0.453_592 / 3_600.0,
        _ => return Err(unknown(&unit, Quantity::MassFlow)),
    };

    if kg_s < 0.0 {
        return Err(UnitError::OutOfRange {
            value: kg_s,
            reason: "Mass flow rate cannot be negative",
        });
    }

    Ok(kg_s)
}

/// Split a value+unit string into (numeric_value, unit_string).
///
/// Examples:
/// - "70F" -> (70.0, "F")
/// - "1 atm" -> (1.0, "atm")
/// - "300" -> (300.0, "")
fn split_value_and_unit(input: &str) -> Result<(f64, String), UnitError> {
    let trimmed = input.trim();

    // Find where the numeric part ends. An 'e'/'E' only continues the number
    // when it is followed by a digit or sign (exponent), so "1e5 Pa" parses
    // while "2 bar" does not swallow letters.
    let bytes = trimmed.as_bytes();
    let mut split_idx = trimmed.len();
    for (i, c) in trimmed.char_indices() {
        let numeric = c.is_ascii_digit() || c == '.' || c == '-' || c == '+';
        let exponent = (c == 'e' || c == 'E')
            && i > 0
            && bytes
                .get(i + 1)
                .is_some_and(|n| n.is_ascii_digit() || *n == b'-' || *n == b'+');
        if !numeric && !exponent {
            split_idx = i;
            break;
        }
    }

    let (num_part, unit_part) = trimmed.split_at(split_idx);
    let num_part = num_part.trim();
    let unit_part = unit_part.trim();

    let value: f64 = num_part.parse().map_err(|_| {
        UnitError::ParseError(format!("Could not parse numeric value from '{}'", input))
    })?;

    Ok((value, unit_part.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_kelvin() {
        assert_eq!(parse_temperature("300 K").unwrap(), 300.0);
        assert_eq!(parse_temperature("300K").unwrap(), 300.0);
        assert_eq!(parse_temperature("273.15").unwrap(), 273.15);
    }

    #[test]
    fn parse_celsius() {
        let c0 = parse_temperature("0C").unwrap();
        assert!((c0 - 273.15).abs() < 0.01);
    }

    #[test]
    fn reject_negative_temperature() {
        assert!(matches!(
            parse_temperature("-300C"),
            Err(UnitError::OutOfRange { .. })
        ));
    }

    #[test]
    fn parse_pressure_absolute() {
        assert_eq!(parse_pressure("101325 Pa").unwrap(), 101_325.0);
        assert_eq!(parse_pressure("1 atm").unwrap(), 101_325.0);
        assert_eq!(parse_pressure("1 bar").unwrap(), 1e5);
        assert_eq!(parse_pressure("1e5").unwrap(), 1e5);
    }

    #[test]
    fn reject_plain_psi() {
        assert!(matches!(
            parse_pressure("14.7 psi"),
            Err(UnitError::AmbiguousUnit { unit, .. }) if unit == "psi"
        ));
    }

    #[test]
    fn unknown_unit_names_quantity() {
        let err = parse_quantity("3 furlongs", Quantity::Pressure).unwrap_err();
        assert_eq!(err.to_string(), "Unknown unit 'furlongs' for Absolute Pressure");
    }

    #[test]
    fn parse_mass_flow_per_hour() {
        let kg_s = parse_mass_flow("100 kg/h").unwrap();
        assert!((kg_s - 100.0 / 3_600.0).abs() < 1e-15);
        assert!(parse_mass_flow("-1 kg/s").is_err());
    }

    #[test]
    fn parse_heating_value() {
        assert_eq!(parse_specific_energy("50 MJ/kg").unwrap(), 50e6);
        assert_eq!(parse_specific_energy("50000 kJ/kg").unwrap(), 50e6);
    }

    #[test]
    fn garbage_is_a_parse_error() {
        assert!(matches!(
            parse_quantity("atm", Quantity::Pressure),
            Err(UnitError::ParseError(_))
        ));
    }
}
