//! Species definitions resolved against a mechanism's element table.

use crate::element::Element;
use crate::error::{ChemError, ChemResult};
use crate::thermo::Nasa7;

/// A gas-phase species as defined by a mechanism.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesDef {
    pub name: String,
    /// Atom counts, indexed like the owning mechanism's element list.
    pub atoms: Vec<f64>,
    /// Molar mass [kg/kmol].
    pub molar_mass: f64,
    pub thermo: Nasa7,
}

impl SpeciesDef {
    /// Build a species from `(symbol, count)` pairs.
    ///
    /// Every symbol must appear in `elements`.
    pub fn new(
        name: impl Into<String>,
        composition: &[(String, f64)],
        elements: &[Element],
        thermo: Nasa7,
    ) -> ChemResult<Self> {
        let name = name.into();
        let mut atoms = vec![0.0; elements.len()];
        for (symbol, count) in composition {
            if !count.is_finite() || *count < 0.0 {
                return Err(ChemError::NonPhysical {
                    what: "atom count must be non-negative and finite",
                });
            }
            let idx = elements
                .iter()
                .position(|e| e.symbol.eq_ignore_ascii_case(symbol))
                .ok_or(ChemError::InvalidArg {
                    what: "species uses an element the phase does not declare",
                })?;
            atoms[idx] += count;
        }

        let molar_mass: f64 = atoms
            .iter()
            .zip(elements)
            .map(|(n, e)| n * e.atomic_weight)
            .sum();
        if molar_mass <= 0.0 {
            return Err(ChemError::NonPhysical {
                what: "species has no atoms",
            });
        }

        Ok(Self {
            name,
            atoms,
            molar_mass,
            thermo,
        })
    }

    /// Number of atoms of the element at `idx` in one molecule.
    pub fn atom_count(&self, idx: usize) -> f64 {
        self.atoms.get(idx).copied().unwrap_or(0.0)
    }

    /// Total number of atoms in one molecule.
    pub fn total_atoms(&self) -> f64 {
        self.atoms.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chon() -> Vec<Element> {
        ["C", "H", "O", "N"]
            .iter()
            .filter_map(|s| Element::from_symbol(s))
            .collect()
    }

    fn flat_thermo() -> Nasa7 {
        Nasa7::from_ranges(&[200.0, 3000.0], &[vec![3.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]]).unwrap()
    }

    #[test]
    fn methane_molar_mass() {
        let ch4 = SpeciesDef::new(
            "CH4",
            &[("C".into(), 1.0), ("H".into(), 4.0)],
            &chon(),
            flat_thermo(),
        )
        .unwrap();
        assert!((ch4.molar_mass - 16.043).abs() < 1e-9);
        assert_eq!(ch4.atom_count(0), 1.0);
        assert_eq!(ch4.atom_count(1), 4.0);
        assert_eq!(ch4.total_atoms(), 5.0);
    }

    #[test]
    fn reject_undeclared_element() {
        let result = SpeciesDef::new("AR", &[("Ar".into(), 1.0)], &chon(), flat_thermo());
        assert!(result.is_err());
    }

    #[test]
    fn reject_empty_composition() {
        let result = SpeciesDef::new("E", &[], &chon(), flat_thermo());
        assert!(result.is_err());
    }
}
