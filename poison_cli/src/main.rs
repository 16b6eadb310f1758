//! poison-sim - run the poison DoT simulator from the command line
//!
//! ```text
//! poison-sim run --horizon 180 --no-toxic --csv series.csv
//! poison-sim run --scenario weapon_only --scenarios config/scenarios
//! poison-sim scenarios
//! poison-sim defaults > params.toml
//! ```

mod args;
mod export;
mod report;

use anyhow::{Context, Result};
use args::{Cli, Command, RunArgs};
use clap::Parser;
use poison_core::{PoisonSimulator, ScenarioRegistry, SimulationConfig};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cli.log_level))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Run(run) => run_simulation(&run),
        Command::Scenarios { scenarios } => list_scenarios(&scenarios),
        Command::Defaults => {
            let text = SimulationConfig::default()
                .to_toml_string()
                .context("failed to serialize default parameters")?;
            print!("{text}");
            Ok(())
        }
    }
}

fn run_simulation(run: &RunArgs) -> Result<()> {
    let (config, horizon) = run.resolve()?;
    tracing::info!(horizon, "running simulation");

    let simulator = PoisonSimulator::new(config);
    let result = simulator.run(horizon);

    print!("{}", report::render_summary(simulator.config(), &result.summary()));

    if let Some(path) = &run.csv {
        export::write_csv_file(&result, path)?;
        tracing::info!(path = %path.display(), "wrote CSV");
    }
    if let Some(path) = &run.json {
        export::write_json_file(&result, path)?;
        tracing::info!(path = %path.display(), "wrote JSON");
    }

    Ok(())
}

fn list_scenarios(dir: &Path) -> Result<()> {
    let registry = ScenarioRegistry::load(dir)
        .with_context(|| format!("failed to load scenarios from {}", dir.display()))?;

    if registry.is_empty() {
        println!("No scenarios in {}", dir.display());
        return Ok(());
    }

    for scenario in registry.iter() {
        match &scenario.scenario.description {
            Some(description) => println!(
                "{:<20} {:>4} s  {} - {}",
                scenario.id(),
                scenario.horizon(),
                scenario.display_name(),
                description
            ),
            None => println!(
                "{:<20} {:>4} s  {}",
                scenario.id(),
                scenario.horizon(),
                scenario.display_name()
            ),
        }
    }
    Ok(())
}
