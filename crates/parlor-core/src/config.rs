//! Rule engine configuration.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseLegalityError;

/// How much checking `legal_destinations` does beyond piece movement patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Legality {
    /// Movement patterns and occupancy only. A move may leave the mover's own
    /// king attacked, and castling does not look at attacked transit squares.
    #[default]
    Pseudo,
    /// Additionally reject any move that leaves the mover's king attacked,
    /// and any castle through or into an attacked square.
    Strict,
}

impl FromStr for Legality {
    type Err = ParseLegalityError;

    fn from_str(s: &str) -> Result<Legality, ParseLegalityError> {
        match s.to_ascii_lowercase().as_str() {
            "pseudo" => Ok(Legality::Pseudo),
            "strict" => Ok(Legality::Strict),
            _ => Err(ParseLegalityError {
                found: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Legality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Legality::Pseudo => f.write_str("pseudo"),
            Legality::Strict => f.write_str("strict"),
        }
    }
}

/// Knobs for move generation and application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RulesConfig {
    /// Legality filter applied to generated destinations.
    pub legality: Legality,
}

impl RulesConfig {
    /// Configuration with the strict legality filter enabled.
    pub const fn strict() -> RulesConfig {
        RulesConfig {
            legality: Legality::Strict,
        }
    }
}
