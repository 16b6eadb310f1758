//! Command-line arguments and how they resolve into a parameter set

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use poison_core::config::constants::DEFAULT_HORIZON;
use poison_core::{ScenarioRegistry, SimulationConfig};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "poison-sim", version, about = "Simulate stacked poison DoT and held DoT")]
pub struct Cli {
    /// Log filter directives, e.g. "info" or "poison_core=trace"
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run a simulation and print its summary
    Run(RunArgs),
    /// List the scenarios found in a directory
    Scenarios {
        #[arg(long, default_value = "config/scenarios")]
        scenarios: PathBuf,
    },
    /// Print the default parameter set as TOML
    Defaults,
}

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Parameter set in TOML
    #[arg(long, conflicts_with = "scenario")]
    pub config: Option<PathBuf>,

    /// Scenario id to load from the scenarios directory
    #[arg(long)]
    pub scenario: Option<String>,

    #[arg(long, default_value = "config/scenarios")]
    pub scenarios: PathBuf,

    /// Simulation horizon in seconds
    #[arg(long)]
    pub horizon: Option<u32>,

    #[arg(long)]
    pub no_skill: bool,
    #[arg(long)]
    pub no_weapon: bool,
    #[arg(long)]
    pub no_toxic: bool,

    #[arg(long)]
    pub skill_dot: Option<f64>,
    #[arg(long)]
    pub weapon_dot: Option<f64>,
    #[arg(long)]
    pub toxic_dot: Option<f64>,

    /// Seconds between skill casts (raised to 7 if lower)
    #[arg(long)]
    pub skill_period: Option<u32>,
    /// Seconds between toxic casts
    #[arg(long)]
    pub toxic_period: Option<u32>,

    /// Use the slower-decaying non-poison skill variant
    #[arg(long)]
    pub non_poison_skill: bool,

    /// Observed explosion damage for one full skill amount
    #[arg(long)]
    pub explosion_base: Option<f64>,

    /// Write every series to a CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Write the full result as JSON
    #[arg(long)]
    pub json: Option<PathBuf>,
}

impl RunArgs {
    /// Build the parameter set and horizon: scenario or file first, then flags
    pub fn resolve(&self) -> Result<(SimulationConfig, u32)> {
        let (mut config, mut horizon) = if let Some(id) = &self.scenario {
            let registry = ScenarioRegistry::load(&self.scenarios).with_context(|| {
                format!("failed to load scenarios from {}", self.scenarios.display())
            })?;
            let scenario = registry.get(id).with_context(|| {
                format!("unknown scenario '{id}' in {}", self.scenarios.display())
            })?;
            (scenario.config.clone(), scenario.horizon())
        } else if let Some(path) = &self.config {
            let config = SimulationConfig::load_from_path(path)
                .with_context(|| format!("failed to load config {}", path.display()))?;
            (config, DEFAULT_HORIZON)
        } else {
            (SimulationConfig::default(), DEFAULT_HORIZON)
        };

        self.apply_overrides(&mut config);
        if let Some(h) = self.horizon {
            horizon = h;
        }

        config.validate().context("invalid simulation parameters")?;
        Ok((config, horizon))
    }

    fn apply_overrides(&self, config: &mut SimulationConfig) {
        if self.no_skill {
            config.skill.enabled = false;
        }
        if self.no_weapon {
            config.weapon.enabled = false;
        }
        if self.no_toxic {
            config.toxic.enabled = false;
        }
        if let Some(dot) = self.skill_dot {
            config.skill.base_dot = dot;
        }
        if let Some(dot) = self.weapon_dot {
            config.weapon.base_dot = dot;
        }
        if let Some(dot) = self.toxic_dot {
            config.toxic.base_dot = dot;
        }
        if let Some(period) = self.skill_period {
            config.skill.cast_period = period;
        }
        if let Some(period) = self.toxic_period {
            config.toxic.cast_period = period;
        }
        if self.non_poison_skill {
            config.skill.is_poison_type = false;
        }
        if let Some(damage) = self.explosion_base {
            config.explosion_base_damage = damage;
        }
    }
}
