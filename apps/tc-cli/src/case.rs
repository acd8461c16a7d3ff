//! YAML case files: named fuel cases evaluated in one run.
//!
//! ```yaml
//! mechanism: methane-air
//! temperature: 0 C
//! cases:
//!   - name: pipeline gas
//!     fuel: "CH4:0.95, C2H6:0.05"
//!     mass_flow: 100 kg/h
//!   - name: hydrogen
//!     fuel: H2
//!     temperature: 25 C
//! ```

use crate::error::{CliError, CliResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tc_chem::{Composition, Quantity, parse_quantity};
use tc_combustion::{DEFAULT_HEATING_VALUE_TEMPERATURE_K, FuelMixture};
use tc_core::units::{k, kgps};
use tracing::info;
use uom::si::{mass_density::kilogram_per_cubic_meter, power::watt};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CaseFile {
    #[serde(default = "default_mechanism")]
    pub mechanism: String,
    /// Default heating-value temperature for cases that do not set one.
    #[serde(default)]
    pub temperature: Option<String>,
    pub cases: Vec<CaseDef>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CaseDef {
    pub name: String,
    pub fuel: Composition,
    #[serde(default)]
    pub mechanism: Option<String>,
    #[serde(default)]
    pub temperature: Option<String>,
    #[serde(default)]
    pub mass_flow: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CaseResult {
    pub name: String,
    pub mechanism: String,
    pub fuel: String,
    pub temperature_k: f64,
    pub heating_value_mj_per_kg: f64,
    pub density_normal_kg_m3: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mass_flow_kg_s: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_w: Option<f64>,
}

fn default_mechanism() -> String {
    "methane-air".to_string()
}

pub fn load_case_file(path: &Path) -> CliResult<CaseFile> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_yaml::from_str(&text)?)
}

pub fn parse(text: &str, quantity: Quantity, what: &'static str) -> CliResult<f64> {
    parse_quantity(text, quantity).map_err(|source| CliError::Unit { what, source })
}

impl CaseFile {
    /// Evaluate every case in file order; the first failure aborts the run.
    pub fn evaluate(&self) -> CliResult<Vec<CaseResult>> {
        self.cases.iter().map(|case| self.evaluate_case(case)).collect()
    }

    fn evaluate_case(&self, case: &CaseDef) -> CliResult<CaseResult> {
        let mechanism = case.mechanism.as_deref().unwrap_or(&self.mechanism);
        let temperature_k = match case.temperature.as_deref().or(self.temperature.as_deref()) {
            Some(text) => parse(text, Quantity::Temperature, "temperature")?,
            None => DEFAULT_HEATING_VALUE_TEMPERATURE_K,
        };
        let mass_flow_kg_s = case
            .mass_flow
            .as_deref()
            .map(|text| parse(text, Quantity::MassFlow, "mass flow"))
            .transpose()?;

        let fuel = FuelMixture::builder()
            .mechanism(mechanism)
            .composition(case.fuel.clone())
            .temperature(k(temperature_k))
            .build()?;
        let power_w = mass_flow_kg_s
            .map(|m| fuel.power_supply(kgps(m)))
            .transpose()?
            .map(|p| p.get::<watt>());
        let density_normal_kg_m3 = fuel.density_normal()?.get::<kilogram_per_cubic_meter>();

        info!(case = %case.name, lhv_mj_per_kg = fuel.heating_value(), "case evaluated");
        Ok(CaseResult {
            name: case.name.clone(),
            mechanism: fuel.mechanism_name().to_string(),
            fuel: case.fuel.to_string(),
            temperature_k,
            heating_value_mj_per_kg: fuel.heating_value(),
            density_normal_kg_m3,
            mass_flow_kg_s,
            power_w,
        })
    }
}
