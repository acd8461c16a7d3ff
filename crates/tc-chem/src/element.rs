//! Chemical elements and standard atomic weights.

/// Standard atomic weights [kg/kmol] for the elements a gas-phase
/// C-H-O-N mechanism is expected to declare.
const ATOMIC_WEIGHTS: [(&str, f64); 9] = [
    ("H", 1.008),
    ("He", 4.002_602),
    ("C", 12.011),
    ("N", 14.007),
    ("O", 15.999),
    ("F", 18.998_403_163),
    ("S", 32.06),
    ("Cl", 35.45),
    ("Ar", 39.95),
];

/// An element declared by a mechanism.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub symbol: String,
    /// Atomic weight [kg/kmol].
    pub atomic_weight: f64,
}

impl Element {
    /// Create an element from its symbol, or `None` if the symbol is unknown.
    ///
    /// Symbols are matched case-insensitively (`"AR"` and `"Ar"` are the same).
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let (canonical, weight) = ATOMIC_WEIGHTS
            .iter()
            .find(|(s, _)| s.eq_ignore_ascii_case(symbol))?;
        Some(Self {
            symbol: (*canonical).to_string(),
            atomic_weight: *weight,
        })
    }
}
