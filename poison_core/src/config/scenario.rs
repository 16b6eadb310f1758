//! Named scenarios loaded from TOML files
//!
//! A scenario file pairs a parameter set with a horizon:
//!
//! ```toml
//! [scenario]
//! id = "weapon_only"
//! name = "Weapon proc alone"
//! horizon = 60
//!
//! [config.skill]
//! enabled = false
//!
//! [config.toxic]
//! enabled = false
//! ```

use super::constants::DEFAULT_HORIZON;
use super::{ConfigError, SimulationConfig};
use crate::dot::{simulate, SimulationResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Identification and horizon for a scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioHeader {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Simulation horizon in seconds
    #[serde(default = "default_horizon")]
    pub horizon: u32,
}

fn default_horizon() -> u32 {
    DEFAULT_HORIZON
}

/// A parameter set with a name and horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub scenario: ScenarioHeader,
    #[serde(default)]
    pub config: SimulationConfig,
}

impl Scenario {
    pub fn id(&self) -> &str {
        &self.scenario.id
    }

    /// Display name, falling back to the id
    pub fn display_name(&self) -> &str {
        self.scenario.name.as_deref().unwrap_or(&self.scenario.id)
    }

    pub fn horizon(&self) -> u32 {
        self.scenario.horizon
    }

    /// Parse a scenario from a TOML string
    pub fn parse(toml: &str) -> Result<Self, ConfigError> {
        let scenario: Scenario = super::parse_toml(toml)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Load a scenario from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let scenario: Scenario = super::load_toml(path)?;
        scenario.validate()?;
        Ok(scenario)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.scenario.id.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "scenario.id must not be empty".to_string(),
            ));
        }
        self.config.validate()
    }

    /// Run the scenario over its own horizon
    pub fn run(&self) -> SimulationResult {
        simulate(&self.config, self.scenario.horizon)
    }
}

/// Registry of scenarios, loaded from a directory of TOML files
#[derive(Debug, Default)]
pub struct ScenarioRegistry {
    scenarios: BTreeMap<String, Scenario>,
}

impl ScenarioRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Load all scenarios from a directory (recursively)
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let mut registry = Self::new();
        registry.load_dir(dir)?;
        tracing::debug!(dir = %dir.display(), count = registry.len(), "loaded scenarios");
        Ok(registry)
    }

    fn load_dir(&mut self, dir: &Path) -> Result<(), ConfigError> {
        if !dir.exists() {
            return Ok(());
        }

        let entries = std::fs::read_dir(dir).map_err(|e| ConfigError::Io {
            error: e,
            path: Some(dir.to_path_buf()),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| ConfigError::Io {
                error: e,
                path: Some(dir.to_path_buf()),
            })?;
            let path = entry.path();

            if path.is_dir() {
                self.load_dir(&path)?;
            } else if path.extension().is_some_and(|ext| ext == "toml") {
                let scenario = Scenario::load_from_path(&path)?;
                self.insert(scenario).map_err(|e| match e {
                    ConfigError::ValidationError(msg) => ConfigError::ValidationError(format!(
                        "{msg} (in '{}')",
                        path.display()
                    )),
                    other => other,
                })?;
            }
        }

        Ok(())
    }

    /// Add a scenario, rejecting duplicate ids
    pub fn insert(&mut self, scenario: Scenario) -> Result<(), ConfigError> {
        if self.scenarios.contains_key(scenario.id()) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate scenario id '{}'",
                scenario.id()
            )));
        }
        self.scenarios.insert(scenario.id().to_string(), scenario);
        Ok(())
    }

    /// Get a scenario by id
    pub fn get(&self, id: &str) -> Option<&Scenario> {
        self.scenarios.get(id)
    }

    /// Check if a scenario exists
    pub fn contains(&self, id: &str) -> bool {
        self.scenarios.contains_key(id)
    }

    /// Scenario ids in sorted order
    pub fn scenario_ids(&self) -> impl Iterator<Item = &str> {
        self.scenarios.keys().map(|s| s.as_str())
    }

    /// Scenarios in id order
    pub fn iter(&self) -> impl Iterator<Item = &Scenario> {
        self.scenarios.values()
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Run a scenario by id
    pub fn run(&self, id: &str) -> Result<SimulationResult, ConfigError> {
        let scenario = self
            .get(id)
            .ok_or_else(|| ConfigError::UnknownScenario(id.to_string()))?;
        Ok(scenario.run())
    }
}
