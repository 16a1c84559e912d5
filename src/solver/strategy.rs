//! Guess evaluation strategies
//!
//! Controls whether the minimax search re-evaluates codes that were already
//! played on the current path.

use crate::core::{Code, CodeSet};
use std::fmt;
use std::str::FromStr;

/// How the minimax search treats previously played guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Evaluation {
    /// Skip codes already played on the path and carry over the worst case of
    /// the code evaluated just before them (reference behaviour)
    #[default]
    Stale,
    /// Evaluate every code of the space at every node
    Fresh,
}

impl Evaluation {
    /// Whether `guess` gets a fresh worst-case evaluation
    #[inline]
    #[must_use]
    pub fn evaluates(self, guess: Code, guessed: &CodeSet) -> bool {
        match self {
            Self::Stale => !guessed.contains(guess),
            Self::Fresh => true,
        }
    }

    /// Strategy name as accepted on the command line
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Stale => "stale",
            Self::Fresh => "fresh",
        }
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Evaluation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "stale" | "cached" => Ok(Self::Stale),
            "fresh" | "recompute" => Ok(Self::Fresh),
            _ => Err(format!(
                "Unknown evaluation strategy '{s}' (expected 'stale' or 'fresh')"
            )),
        }
    }
}
