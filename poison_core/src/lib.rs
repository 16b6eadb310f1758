//! poison_core - Poison damage-over-time accumulation simulator
//!
//! This library provides:
//! - SimulationConfig: Per-source parameters (skill, weapon, toxic)
//! - PoisonSimulator: Per-tick accumulation and decay of each source
//! - SimulationResult: Accumulation curves, instantaneous and held DoT
//! - ScenarioRegistry: Named parameter sets loaded from TOML
//!
//! # Quick Start
//!
//! ```rust
//! use poison_core::prelude::*;
//!
//! let config = SimulationConfig::disabled().with_weapon(WeaponConfig::new(19000.0));
//! let result = simulate(&config, 10);
//!
//! assert_eq!(result.weapon[0], 570000.0);
//! assert_eq!(result.held.len(), 11);
//! println!("Held DoT after 10s: {:.0}", result.final_held_dot);
//! ```

pub mod config;
pub mod dot;
pub mod prelude;
pub mod types;

// Core API - what most users need
pub use config::{SimulationConfig, SkillConfig, ToxicConfig, WeaponConfig};
pub use dot::{simulate, PoisonSimulator, SimulationResult, Summary, TimeSeries};
pub use types::PoisonSource;

// Configuration files
pub use config::{ConfigError, Scenario, ScenarioRegistry};
