//! NASA 7-coefficient polynomial thermodynamics.

use crate::error::{ChemError, ChemResult};

/// Two-range NASA7 fit for a single species.
///
/// `cp/R = a0 + a1 T + a2 T² + a3 T³ + a4 T⁴`, with `a5` and `a6` the
/// enthalpy and entropy integration constants.
#[derive(Debug, Clone, PartialEq)]
pub struct Nasa7 {
    pub temperature_min: f64,
    pub temperature_split: f64,
    pub temperature_max: f64,
    pub pieces: [[f64; 7]; 2],
}

impl Nasa7 {
    /// Build a fit from Cantera-style `temperature-ranges` and `data`.
    ///
    /// Accepts either one range (`[Tmin, Tmax]` with one coefficient set) or
    /// two ranges (`[Tmin, Tmid, Tmax]` with low and high coefficient sets).
    pub fn from_ranges(ranges: &[f64], data: &[Vec<f64>]) -> ChemResult<Self> {
        let piece = |coeffs: &Vec<f64>| -> ChemResult<[f64; 7]> {
            let piece: [f64; 7] =
                coeffs
                    .as_slice()
                    .try_into()
                    .map_err(|_| ChemError::InvalidArg {
                        what: "NASA7 data needs exactly 7 coefficients per range",
                    })?;
            if piece.iter().any(|c| !c.is_finite()) {
                return Err(ChemError::NonPhysical {
                    what: "non-finite NASA7 coefficient",
                });
            }
            Ok(piece)
        };

        let fit = match (ranges, data) {
            ([t_min, t_max], [only]) => {
                let only = piece(only)?;
                Self {
                    temperature_min: *t_min,
                    temperature_split: *t_max,
                    temperature_max: *t_max,
                    pieces: [only; 2],
                }
            }
            ([t_min, t_mid, t_max], [low, high]) => Self {
                temperature_min: *t_min,
                temperature_split: *t_mid,
                temperature_max: *t_max,
                pieces: [piece(low)?, piece(high)?],
            },
            _ => {
                return Err(ChemError::InvalidArg {
                    what: "NASA7 temperature ranges do not match coefficient sets",
                });
            }
        };

        if !(fit.temperature_min > 0.0
            && fit.temperature_min <= fit.temperature_split
            && fit.temperature_split <= fit.temperature_max)
        {
            return Err(ChemError::NonPhysical {
                what: "NASA7 temperature ranges must be positive and increasing",
            });
        }
        Ok(fit)
    }

    pub fn piece(&self, t: f64) -> &[f64; 7] {
        &self.pieces[if t <= self.temperature_split { 0 } else { 1 }]
    }

    /// Dimensionless enthalpy `h / (R T)`.
    pub fn h_rt(&self, t: f64) -> f64 {
        let a = self.piece(t);
        a[0] + t * (a[1] / 2.0 + t * (a[2] / 3.0 + t * (a[3] / 4.0 + t * a[4] / 5.0))) + a[5] / t
    }
}
