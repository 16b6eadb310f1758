//! Core types shared across the simulator

use serde::{Deserialize, Serialize};
use std::fmt;

/// The independent poison sources the simulator tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoisonSource {
    /// Periodic skill cast that spreads its poison over a 7 tick window
    Skill,
    /// Weapon proc landing every 10 seconds
    Weapon,
    /// Periodic toxic effect with a configurable period
    Toxic,
}

impl PoisonSource {
    /// Get all sources in simulation order
    pub fn all() -> &'static [PoisonSource] {
        &[PoisonSource::Skill, PoisonSource::Weapon, PoisonSource::Toxic]
    }

    /// Position of this source in per-source arrays
    pub fn index(self) -> usize {
        match self {
            PoisonSource::Skill => 0,
            PoisonSource::Weapon => 1,
            PoisonSource::Toxic => 2,
        }
    }

    /// Whether the source is loaded with its full amount at tick 0
    ///
    /// The skill needs an application delay, so it always starts empty.
    pub fn starts_loaded(self) -> bool {
        !matches!(self, PoisonSource::Skill)
    }
}

impl fmt::Display for PoisonSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoisonSource::Skill => write!(f, "Skill"),
            PoisonSource::Weapon => write!(f, "Weapon"),
            PoisonSource::Toxic => write!(f, "Toxic"),
        }
    }
}
