//! Mechanism resolution: element table, species thermo and default state.
//!
//! A mechanism reference is either the name of a built-in mechanism or a
//! path to a Cantera-style YAML file. Only the thermodynamic part of the
//! file is read (`phases`, `species`); reactions are ignored.

use crate::composition::Composition;
use crate::element::Element;
use crate::error::{ChemError, ChemResult};
use crate::species::SpeciesDef;
use crate::thermo::Nasa7;
use crate::units::{Quantity, parse_quantity};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use tc_core::units::constants::ONE_ATM_PA;

/// Built-in mechanisms as (name, YAML source).
pub const BUILTIN_MECHANISMS: [(&str, &str); 1] =
    [("methane-air", include_str!("../data/methane-air.yaml"))];

/// State a freshly resolved mechanism starts in.
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultState {
    /// Temperature [K]
    pub temperature_k: f64,
    /// Pressure [Pa]
    pub pressure_pa: f64,
    pub composition: Composition,
}

/// An immutable, resolved reaction mechanism.
#[derive(Debug, Clone, PartialEq)]
pub struct Mechanism {
    name: String,
    elements: Vec<Element>,
    species: Vec<SpeciesDef>,
    default_state: DefaultState,
}

impl Mechanism {
    /// Resolve a mechanism reference.
    ///
    /// Built-in names are tried first (a trailing `.yaml` is accepted), then
    /// the reference is read as a YAML file path.
    pub fn resolve(reference: &str) -> ChemResult<Arc<Self>> {
        let trimmed = reference.trim();
        let builtin_name = trimmed.strip_suffix(".yaml").unwrap_or(trimmed);
        if let Some((name, source)) = BUILTIN_MECHANISMS
            .iter()
            .find(|(name, _)| *name == builtin_name)
        {
            return Self::from_yaml_str(name, source).map(Arc::new);
        }

        let path = Path::new(trimmed);
        if !path.is_file() {
            return Err(ChemError::resolution(
                reference,
                "not a built-in mechanism and no such file",
            ));
        }
        let source = std::fs::read_to_string(path)
            .map_err(|e| ChemError::resolution(reference, e.to_string()))?;
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(trimmed);
        Self::from_yaml_str(name, &source)
            .map_err(|e| match e {
                ChemError::MechanismResolution { message, .. } => {
                    ChemError::resolution(reference, message)
                }
                other => other,
            })
            .map(Arc::new)
    }

    /// Parse a mechanism from YAML text.
    ///
    /// Every failure is reported as `ChemError::MechanismResolution`.
    pub fn from_yaml_str(name: &str, source: &str) -> ChemResult<Self> {
        let file: MechanismFile =
            serde_yaml::from_str(source).map_err(|e| ChemError::resolution(name, e.to_string()))?;
        Self::from_file(name, file).map_err(|e| match e {
            ChemError::MechanismResolution { .. } => e,
            other => ChemError::resolution(name, other.to_string()),
        })
    }

    fn from_file(name: &str, file: MechanismFile) -> ChemResult<Self> {
        let phase = file
            .phases
            .into_iter()
            .next()
            .ok_or_else(|| ChemError::resolution(name, "no phase defined"))?;

        if let Some(model) = phase.thermo.as_deref() {
            if model != "ideal-gas" {
                return Err(ChemError::resolution(
                    name,
                    format!("unsupported phase thermo model '{model}'"),
                ));
            }
        }

        let mut elements = Vec::with_capacity(phase.elements.len());
        for symbol in &phase.elements {
            let element = Element::from_symbol(symbol)
                .ok_or_else(|| ChemError::resolution(name, format!("unknown element '{symbol}'")))?;
            if elements.iter().any(|e: &Element| e.symbol == element.symbol) {
                return Err(ChemError::resolution(
                    name,
                    format!("duplicate element '{symbol}'"),
                ));
            }
            elements.push(element);
        }

        let selected: Vec<&SpeciesFileDef> = match &phase.species {
            Some(names) => names
                .iter()
                .map(|wanted| {
                    file.species
                        .iter()
                        .find(|s| &s.name == wanted)
                        .ok_or_else(|| {
                            ChemError::resolution(
                                name,
                                format!("phase lists undefined species '{wanted}'"),
                            )
                        })
                })
                .collect::<ChemResult<_>>()?,
            None => file.species.iter().collect(),
        };
        if selected.is_empty() {
            return Err(ChemError::resolution(name, "phase has no species"));
        }

        let mut species: Vec<SpeciesDef> = Vec::with_capacity(selected.len());
        for def in selected {
            if species.iter().any(|s| s.name == def.name) {
                return Err(ChemError::resolution(
                    name,
                    format!("duplicate species '{}'", def.name),
                ));
            }
            let wrap = |e: ChemError| ChemError::resolution(name, format!("species '{}': {e}", def.name));
            if def.thermo.model != "NASA7" {
                return Err(wrap(ChemError::InvalidArg {
                    what: "only NASA7 thermo is supported",
                }));
            }
            let thermo = Nasa7::from_ranges(&def.thermo.temperature_ranges, &def.thermo.data)
                .map_err(wrap)?;
            let atoms: Vec<(String, f64)> = def
                .composition
                .iter()
                .map(|(s, n)| (s.clone(), *n))
                .collect();
            species.push(SpeciesDef::new(&def.name, &atoms, &elements, thermo).map_err(wrap)?);
        }

        let default_state = match phase.state {
            Some(state) => DefaultState {
                temperature_k: scalar(name, state.temperature, Quantity::Temperature, 300.0)?,
                pressure_pa: scalar(name, state.pressure, Quantity::Pressure, ONE_ATM_PA)?,
                composition: match state.composition {
                    Some(comp) => comp,
                    None => Composition::pure(species[0].name.clone()),
                },
            },
            None => DefaultState {
                temperature_k: 300.0,
                pressure_pa: ONE_ATM_PA,
                composition: Composition::pure(species[0].name.clone()),
            },
        };
        if let Some(unknown) = default_state
            .composition
            .species()
            .find(|s| !species.iter().any(|d| d.name == *s))
        {
            return Err(ChemError::resolution(
                name,
                format!("default state uses undefined species '{unknown}'"),
            ));
        }

        Ok(Self {
            name: name.to_string(),
            elements,
            species,
            default_state,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn species(&self) -> &[SpeciesDef] {
        &self.species
    }

    pub fn default_state(&self) -> &DefaultState {
        &self.default_state
    }

    pub fn n_species(&self) -> usize {
        self.species.len()
    }

    pub fn species_index(&self, name: &str) -> Option<usize> {
        self.species.iter().position(|s| s.name == name)
    }

    /// Index of an element symbol (case-insensitive), if declared.
    pub fn element_index(&self, symbol: &str) -> Option<usize> {
        self.elements
            .iter()
            .position(|e| e.symbol.eq_ignore_ascii_case(symbol))
    }
}

fn scalar(
    mechanism: &str,
    value: Option<ScalarDef>,
    quantity: Quantity,
    default: f64,
) -> ChemResult<f64> {
    let v = match value {
        None => return Ok(default),
        Some(ScalarDef::Number(v)) => v,
        Some(ScalarDef::Text(text)) => parse_quantity(&text, quantity)
            .map_err(|e| ChemError::resolution(mechanism, format!("default state: {e}")))?,
    };
    if !v.is_finite() || v <= 0.0 {
        return Err(ChemError::resolution(
            mechanism,
            format!("default state {quantity} must be positive and finite"),
        ));
    }
    Ok(v)
}

// --- YAML schema (Cantera subset) -------------------------------------------

#[derive(Debug, Deserialize)]
struct MechanismFile {
    phases: Vec<PhaseDef>,
    species: Vec<SpeciesFileDef>,
}

#[derive(Debug, Deserialize)]
struct PhaseDef {
    elements: Vec<String>,
    #[serde(default)]
    thermo: Option<String>,
    #[serde(default)]
    species: Option<Vec<String>>,
    #[serde(default)]
    state: Option<StateDef>,
}

#[derive(Debug, Deserialize)]
struct StateDef {
    #[serde(rename = "T", default)]
    temperature: Option<ScalarDef>,
    #[serde(rename = "P", default)]
    pressure: Option<ScalarDef>,
    #[serde(rename = "X", default)]
    composition: Option<Composition>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ScalarDef {
    Number(f64),
    Text(String),
}

#[derive(Debug, Deserialize)]
struct SpeciesFileDef {
    name: String,
    composition: BTreeMap<String, f64>,
    thermo: ThermoDef,
}

#[derive(Debug, Deserialize)]
struct ThermoDef {
    model: String,
    #[serde(rename = "temperature-ranges")]
    temperature_ranges: Vec<f64>,
    data: Vec<Vec<f64>>,
}
