//! Complete combustion of C-H-O-N mixtures.

use crate::error::CombustionResult;
use serde::Serialize;
use tc_chem::{ChemicalState, Composition};

/// Complete-combustion products in mole-fraction units.
///
/// Not normalized: the values carry whatever scale the elemental mole
/// fractions had. Oxygen is implicit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CombustionProducts {
    #[serde(rename = "CO2")]
    pub co2: f64,
    #[serde(rename = "H2O")]
    pub h2o: f64,
    #[serde(rename = "N2")]
    pub n2: f64,
}

impl CombustionProducts {
    /// Products from elemental mole fractions of carbon, hydrogen and nitrogen.
    pub fn from_elemental(carbon: f64, hydrogen: f64, nitrogen: f64) -> Self {
        Self {
            co2: carbon,
            h2o: 0.5 * hydrogen,
            n2: 0.5 * nitrogen,
        }
    }

    /// `(species name, mole fraction)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> {
        [("CO2", self.co2), ("H2O", self.h2o), ("N2", self.n2)].into_iter()
    }

    /// Products as a composition; zero entries are dropped.
    ///
    /// Fails with `InvalidComposition` when every product is zero.
    pub fn to_composition(&self) -> CombustionResult<Composition> {
        let items = self.iter().map(|(s, x)| (s.to_string(), x)).collect();
        Ok(Composition::new_mole_fractions(items)?)
    }
}

/// Complete-combustion products of the state's current elemental content.
pub fn complete_combustion_products<S: ChemicalState + ?Sized>(gas: &S) -> CombustionProducts {
    CombustionProducts::from_elemental(
        gas.elemental_mole_fraction("C"),
        gas.elemental_mole_fraction("H"),
        gas.elemental_mole_fraction("N"),
    )
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::factory::build_state;
    use proptest::prelude::*;
    use tc_chem::StateOverrides;

    fn products_of(comp: Composition) -> CombustionProducts {
        let gas = build_state("methane-air", &StateOverrides::new().with_composition(comp)).unwrap();
        complete_combustion_products(&gas)
    }

    proptest! {
        #[test]
        fn linear_in_elemental_fractions(
            c in 0.0_f64..1.0,
            h in 0.0_f64..1.0,
            n in 0.0_f64..1.0,
            scale in 0.0_f64..10.0,
        ) {
            let base = CombustionProducts::from_elemental(c, h, n);
            let scaled = CombustionProducts::from_elemental(scale * c, scale * h, scale * n);
            prop_assert!((scaled.co2 - scale * base.co2).abs() <= 1e-12);
            prop_assert!((scaled.h2o - scale * base.h2o).abs() <= 1e-12);
            prop_assert!((scaled.n2 - scale * base.n2).abs() <= 1e-12);
        }

        #[test]
        fn argon_dilution_scales_products(x in 0.01_f64..1.0) {
            // x CH4 + (1 - x) Ar carries 4x + 1 atoms per mole against 5 for pure CH4
            let diluted = products_of(
                Composition::new_mole_fractions(vec![
                    ("CH4".to_string(), x),
                    ("AR".to_string(), 1.0 - x),
                ])
                .unwrap(),
            );
            let pure = products_of(Composition::pure("CH4"));
            let scale = 5.0 * x / (4.0 * x + 1.0);
            prop_assert!((diluted.co2 - scale * pure.co2).abs() <= 1e-12);
            prop_assert!((diluted.h2o - scale * pure.h2o).abs() <= 1e-12);
            prop_assert_eq!(diluted.n2, 0.0);
        }
    }
}
