mod case;
mod error;

use case::{load_case_file, parse};
use clap::{Parser, Subcommand, ValueEnum};
use error::{CliError, CliResult};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tc_chem::{BUILTIN_MECHANISMS, Composition, Mechanism, Quantity, StateOverrides};
use tc_combustion::{
    DEFAULT_HEATING_VALUE_TEMPERATURE_K, FuelMixture, build_state, complete_combustion_products,
    density, density_normal, power_supply,
};
use tc_core::units::{
    constants::{NORMAL_PRESSURE_PA, NORMAL_TEMPERATURE_K},
    k, kgps, pa,
};
use tracing_subscriber::EnvFilter;
use uom::si::{
    mass_density::kilogram_per_cubic_meter,
    power::{kilowatt, watt},
};

#[derive(Parser)]
#[command(name = "tc-cli")]
#[command(about = "Thermochem CLI - fuel heating values, power and density", long_about = None)]
struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = Format::Text)]
    format: Format,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Lower heating value of a species or mixture
    Lhv {
        /// Fuel composition, e.g. "CH4" or "CH4:0.95, C2H6:0.05"
        fuel: String,
        /// Mechanism name or YAML file
        #[arg(long, default_value = "methane-air")]
        mechanism: String,
        /// Heating-value temperature, e.g. "0 C" (default 273.15 K)
        #[arg(long)]
        temperature: Option<String>,
    },
    /// Fuel power supply for a mass flow
    Power {
        /// Fuel composition (optional when --heating-value is given)
        #[arg(required_unless_present = "heating_value")]
        fuel: Option<String>,
        /// Fuel mass flow, e.g. "100 kg/h"
        #[arg(long)]
        mass_flow: String,
        /// Use this heating value (e.g. "50 MJ/kg") instead of computing one
        #[arg(long)]
        heating_value: Option<String>,
        #[arg(long, default_value = "methane-air")]
        mechanism: String,
        #[arg(long)]
        temperature: Option<String>,
    },
    /// Complete-combustion products of a composition
    Products {
        composition: String,
        #[arg(long, default_value = "methane-air")]
        mechanism: String,
    },
    /// Mixture density
    Density {
        /// Composition (mechanism default when omitted)
        composition: Option<String>,
        #[arg(long, default_value = "methane-air")]
        mechanism: String,
        /// Temperature, e.g. "25 C"
        #[arg(long, conflicts_with = "normal")]
        temperature: Option<String>,
        /// Pressure, e.g. "1 atm"
        #[arg(long, conflicts_with = "normal")]
        pressure: Option<String>,
        /// Use normal conditions (273.15 K, 101325 Pa)
        #[arg(long)]
        normal: bool,
    },
    /// Evaluate a YAML case file
    Case {
        /// Path to the case YAML file
        path: PathBuf,
    },
    /// List built-in mechanisms, or the contents of one
    Mechanism {
        /// Mechanism name or YAML file
        name: Option<String>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let format = cli.format;
    match cli.command {
        Commands::Lhv {
            fuel,
            mechanism,
            temperature,
        } => cmd_lhv(format, &fuel, &mechanism, temperature.as_deref()),
        Commands::Power {
            fuel,
            mass_flow,
            heating_value,
            mechanism,
            temperature,
        } => cmd_power(
            format,
            fuel.as_deref(),
            &mass_flow,
            heating_value.as_deref(),
            &mechanism,
            temperature.as_deref(),
        ),
        Commands::Products {
            composition,
            mechanism,
        } => cmd_products(format, &composition, &mechanism),
        Commands::Density {
            composition,
            mechanism,
            temperature,
            pressure,
            normal,
        } => cmd_density(
            format,
            composition.as_deref(),
            &mechanism,
            temperature.as_deref(),
            pressure.as_deref(),
            normal,
        ),
        Commands::Case { path } => cmd_case(format, &path),
        Commands::Mechanism { name } => cmd_mechanism(format, name.as_deref()),
    }
}

/// Print `value` as pretty JSON, or `text` otherwise.
fn emit<T: Serialize>(format: Format, value: &T, text: impl FnOnce() -> String) -> CliResult<()> {
    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(value)?),
        Format::Text => println!("{}", text()),
    }
    Ok(())
}

fn fuel_mixture(
    fuel: &str,
    mechanism: &str,
    temperature: Option<&str>,
) -> CliResult<FuelMixture> {
    let composition: Composition = fuel.parse()?;
    let temperature_k = match temperature {
        Some(text) => parse(text, Quantity::Temperature, "temperature")?,
        None => DEFAULT_HEATING_VALUE_TEMPERATURE_K,
    };
    Ok(FuelMixture::builder()
        .mechanism(mechanism)
        .composition(composition)
        .temperature(k(temperature_k))
        .build()?)
}

#[derive(Serialize)]
struct HeatingValueReport {
    fuel: String,
    mechanism: String,
    temperature_k: f64,
    heating_value_mj_per_kg: f64,
}

fn cmd_lhv(format: Format, fuel: &str, mechanism: &str, temperature: Option<&str>) -> CliResult<()> {
    let mixture = fuel_mixture(fuel, mechanism, temperature)?;
    let report = HeatingValueReport {
        fuel: mixture.composition().to_string(),
        mechanism: mixture.mechanism_name().to_string(),
        temperature_k: mixture.temperature().value,
        heating_value_mj_per_kg: mixture.heating_value(),
    };
    emit(format, &report, || {
        format!(
            "LHV of {} at {:.2} K: {:.4} MJ/kg",
            report.fuel, report.temperature_k, report.heating_value_mj_per_kg
        )
    })
}

#[derive(Serialize)]
struct PowerReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    fuel: Option<String>,
    heating_value_mj_per_kg: f64,
    mass_flow_kg_s: f64,
    power_w: f64,
    power_kw: f64,
}

fn cmd_power(
    format: Format,
    fuel: Option<&str>,
    mass_flow: &str,
    heating_value: Option<&str>,
    mechanism: &str,
    temperature: Option<&str>,
) -> CliResult<()> {
    let mass_flow_kg_s = parse(mass_flow, Quantity::MassFlow, "mass flow")?;
    let (hv, fuel) = match (heating_value, fuel) {
        (Some(text), fuel) => (
            parse(text, Quantity::SpecificEnergy, "heating value")? / 1e6,
            fuel.map(str::to_string),
        ),
        (None, Some(fuel)) => {
            let mixture = fuel_mixture(fuel, mechanism, temperature)?;
            (mixture.heating_value(), Some(mixture.composition().to_string()))
        }
        (None, None) => return Err(CliError::MissingFuel),
    };
    let power = power_supply(hv, kgps(mass_flow_kg_s))?;
    let report = PowerReport {
        fuel,
        heating_value_mj_per_kg: hv,
        mass_flow_kg_s,
        power_w: power.get::<watt>(),
        power_kw: power.get::<kilowatt>(),
    };
    emit(format, &report, || {
        format!(
            "Power of {} at {:.6} kg/s ({:.4} MJ/kg): {:.1} W ({:.3} kW)",
            report.fuel.as_deref().unwrap_or("fuel"),
            report.mass_flow_kg_s,
            report.heating_value_mj_per_kg,
            report.power_w,
            report.power_kw
        )
    })
}

fn cmd_products(format: Format, composition: &str, mechanism: &str) -> CliResult<()> {
    let gas = build_state(
        mechanism,
        &StateOverrides::new().with_composition(composition.parse()?),
    )?;
    let products = complete_combustion_products(&gas);
    emit(format, &products, || {
        products
            .iter()
            .map(|(species, x)| format!("{species:>4}: {x:.6}"))
            .collect::<Vec<_>>()
            .join("\n")
    })
}

#[derive(Serialize)]
struct DensityReport {
    composition: Option<String>,
    temperature_k: Option<f64>,
    pressure_pa: Option<f64>,
    density_kg_m3: f64,
}

fn cmd_density(
    format: Format,
    composition: Option<&str>,
    mechanism: &str,
    temperature: Option<&str>,
    pressure: Option<&str>,
    normal: bool,
) -> CliResult<()> {
    let composition: Option<Composition> = composition.map(str::parse::<Composition>).transpose()?;
    let label = composition.as_ref().map(Composition::to_string);

    let (rho, temperature_k, pressure_pa) = if normal {
        (
            density_normal(mechanism, composition)?,
            Some(NORMAL_TEMPERATURE_K),
            Some(NORMAL_PRESSURE_PA),
        )
    } else {
        let temperature_k = temperature
            .map(|t| parse(t, Quantity::Temperature, "temperature"))
            .transpose()?;
        let pressure_pa = pressure
            .map(|p| parse(p, Quantity::Pressure, "pressure"))
            .transpose()?;
        let overrides = StateOverrides {
            temperature: temperature_k.map(k),
            pressure: pressure_pa.map(pa),
            composition,
        };
        (density(mechanism, &overrides)?, temperature_k, pressure_pa)
    };

    let report = DensityReport {
        composition: label,
        temperature_k,
        pressure_pa,
        density_kg_m3: rho.get::<kilogram_per_cubic_meter>(),
    };
    emit(format, &report, || {
        format!("Density: {:.5} kg/m³", report.density_kg_m3)
    })
}

fn cmd_case(format: Format, path: &std::path::Path) -> CliResult<()> {
    let results = load_case_file(path)?.evaluate()?;
    emit(format, &results, || {
        results
            .iter()
            .map(|r| {
                let mut line = format!(
                    "{}: LHV {:.4} MJ/kg at {:.2} K, rho_n {:.5} kg/m³",
                    r.name, r.heating_value_mj_per_kg, r.temperature_k, r.density_normal_kg_m3
                );
                if let Some(p) = r.power_w {
                    line.push_str(&format!(", power {:.3} kW", p / 1e3));
                }
                line
            })
            .collect::<Vec<_>>()
            .join("\n")
    })
}

#[derive(Serialize)]
struct SpeciesReport {
    name: String,
    molar_mass: f64,
}

#[derive(Serialize)]
struct MechanismReport {
    name: String,
    elements: Vec<String>,
    species: Vec<SpeciesReport>,
    default_composition: String,
}

fn cmd_mechanism(format: Format, name: Option<&str>) -> CliResult<()> {
    let Some(name) = name else {
        let names: Vec<&str> = BUILTIN_MECHANISMS.iter().map(|(n, _)| *n).collect();
        return emit(format, &names, || names.join("\n"));
    };

    let mech = Mechanism::resolve(name)?;
    let report = MechanismReport {
        name: mech.name().to_string(),
        elements: mech.elements().iter().map(|e| e.symbol.clone()).collect(),
        species: mech
            .species()
            .iter()
            .map(|s| SpeciesReport {
                name: s.name.clone(),
                molar_mass: s.molar_mass,
            })
            .collect(),
        default_composition: mech.default_state().composition.to_string(),
    };
    emit(format, &report, || {
        let mut out = format!(
            "Mechanism: {}\nElements: {}\nDefault composition: {}\nSpecies:",
            report.name,
            report.elements.join(", "),
            report.default_composition
        );
        for s in &report.species {
            out.push_str(&format!("\n  {:<6} {:>9.4} kg/kmol", s.name, s.molar_mass));
        }
        out
    })
}
