// src/simulation/config.rs

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

/// Difficulty tier. Decides which menu commands are offered; the core
/// operations are the same for every tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tier {
    /// Queue only. Command 2 inserts a fresh piece.
    Novice,
    /// Queue plus reserve.
    Adept,
    /// Adds the two swap commands.
    #[default]
    Master,
}

impl Tier {
    pub fn has_reserve(self) -> bool {
        !matches!(self, Tier::Novice)
    }

    pub fn has_swaps(self) -> bool {
        matches!(self, Tier::Master)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Novice => write!(f, "novice"),
            Tier::Adept => write!(f, "adept"),
            Tier::Master => write!(f, "master"),
        }
    }
}

#[derive(Debug, Error)]
#[error("unrecognized tier; supported are: novice, adept, master")]
pub struct TierFromStrError;

impl FromStr for Tier {
    type Err = TierFromStrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "novice" => Self::Novice,
            "adept" => Self::Adept,
            "master" => Self::Master,
            _ => return Err(TierFromStrError),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    pub tier: Tier,
    /// Fixed seed for a reproducible session; entropy otherwise.
    pub seed: Option<u64>,
    /// Where to export the command history as CSV when the session ends.
    pub history_path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tiers() {
        assert_eq!("novice".parse::<Tier>().unwrap(), Tier::Novice);
        assert_eq!("adept".parse::<Tier>().unwrap(), Tier::Adept);
        assert_eq!("master".parse::<Tier>().unwrap(), Tier::Master);
        assert!("expert".parse::<Tier>().is_err());
    }

    #[test]
    fn tier_capabilities() {
        assert!(!Tier::Novice.has_reserve());
        assert!(Tier::Adept.has_reserve());
        assert!(!Tier::Adept.has_swaps());
        assert!(Tier::Master.has_swaps());
        assert_eq!(SessionConfig::default().tier, Tier::Master);
    }
}
