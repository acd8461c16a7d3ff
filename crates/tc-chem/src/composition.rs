//! Gas composition (pure species or mixtures), keyed by species name.

use crate::error::{ChemError, ChemResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tc_core::numeric::{Tolerances, nearly_equal};

/// Gas composition defined by normalized mole fractions.
///
/// The composition is always normalized (mole fractions sum to 1.0). Species
/// names are not checked here; a `ChemicalState` rejects names its mechanism
/// does not define.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CompositionDef", into = "CompositionDef")]
pub struct Composition {
    /// Species and their mole fractions (always normalized to sum=1).
    items: Vec<(String, f64)>,
}

impl Composition {
    /// Create a pure-species composition.
    pub fn pure(species: impl Into<String>) -> Self {
        Self {
            items: vec![(species.into(), 1.0)],
        }
    }

    /// Create a composition from mole fractions.
    ///
    /// Validates that names are unique and non-empty, that all fractions are
    /// finite and non-negative with a positive sum, then normalizes to sum=1.
    pub fn new_mole_fractions(fractions: Vec<(String, f64)>) -> ChemResult<Self> {
        if fractions.is_empty() {
            return Err(ChemError::InvalidComposition {
                what: "empty composition",
            });
        }

        // Validate and compute sum
        let mut sum = 0.0;
        for (i, (name, frac)) in fractions.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(ChemError::InvalidComposition {
                    what: "empty species name",
                });
            }
            if fractions[..i].iter().any(|(other, _)| other == name) {
                return Err(ChemError::InvalidComposition {
                    what: "duplicate species",
                });
            }
            if !frac.is_finite() {
                return Err(ChemError::InvalidComposition {
                    what: "non-finite mole fraction",
                });
            }
            if *frac < 0.0 {
                return Err(ChemError::InvalidComposition {
                    what: "negative mole fraction",
                });
            }
            sum += frac;
        }

        if sum <= 0.0 || !sum.is_finite() {
            return Err(ChemError::InvalidComposition {
                what: "mole fractions sum to zero or non-finite",
            });
        }

        // Normalize
        let normalized: Vec<(String, f64)> = fractions
            .into_iter()
            .map(|(s, f)| (s, f / sum))
            .filter(|(_, f)| *f > 1e-15) // Drop negligible species
            .collect();

        if normalized.is_empty() {
            return Err(ChemError::InvalidComposition {
                what: "all mole fractions negligible",
            });
        }

        Ok(Self { items: normalized })
    }

    /// Get mole fraction of a species (0.0 if not present).
    pub fn mole_fraction(&self, species: &str) -> f64 {
        self.items
            .iter()
            .find(|(s, _)| s == species)
            .map(|(_, f)| *f)
            .unwrap_or(0.0)
    }

    /// Check if this is a pure-species composition.
    ///
    /// Returns `Some(name)` if exactly one species has fraction ≈1.0.
    pub fn is_pure(&self) -> Option<&str> {
        if let [(species, frac)] = self.items.as_slice() {
            let tol = Tolerances {
                abs: 1e-10,
                rel: 1e-10,
            };
            if nearly_equal(*frac, 1.0, tol) {
                return Some(species.as_str());
            }
        }
        None
    }

    /// Iterate over all species with non-zero mole fractions.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.items.iter().map(|(s, f)| (s.as_str(), *f))
    }

    /// Species names in insertion order.
    pub fn species(&self) -> impl Iterator<Item = &str> + '_ {
        self.items.iter().map(|(s, _)| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl fmt::Display for Composition {
    /// Cantera-style `"CH4:0.95, C2H6:0.05"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, frac)) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}:{frac}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Composition {
    type Err = ChemError;

    /// Parse `"CH4"` (pure) or `"CH4:0.95, C2H6:0.05"` (mixture).
    ///
    /// An entry without a `:value` counts as 1.0.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fractions = Vec::new();
        for entry in s.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (name, value) = match entry.split_once(':') {
                Some((name, value)) => {
                    let value: f64 =
                        value
                            .trim()
                            .parse()
                            .map_err(|_| ChemError::InvalidComposition {
                                what: "mole fraction is not a number",
                            })?;
                    (name.trim(), value)
                }
                None => (entry, 1.0),
            };
            fractions.push((name.to_string(), value));
        }
        Self::new_mole_fractions(fractions)
    }
}

/// Serialized form: either a composition string or a name → fraction map.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompositionDef {
    Text(String),
    Map(BTreeMap<String, f64>),
}

impl TryFrom<CompositionDef> for Composition {
    type Error = ChemError;

    fn try_from(def: CompositionDef) -> Result<Self, Self::Error> {
        match def {
            CompositionDef::Text(text) => text.parse(),
            CompositionDef::Map(map) => Self::new_mole_fractions(map.into_iter().collect()),
        }
    }
}

impl From<Composition> for CompositionDef {
    fn from(comp: Composition) -> Self {
        CompositionDef::Map(comp.items.into_iter().collect())
    }
}
