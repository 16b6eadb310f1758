//! Prelude module for convenient imports
//!
//! ```rust
//! use poison_core::prelude::*;
//! ```

// Configuration
pub use crate::config::{SimulationConfig, SkillConfig, ToxicConfig, WeaponConfig};

// Simulation
pub use crate::dot::{simulate, PoisonSimulator, SeriesRow, SimulationResult, Summary, TimeSeries};

// Scenarios
pub use crate::config::{ConfigError, Scenario, ScenarioRegistry};

pub use crate::types::PoisonSource;
