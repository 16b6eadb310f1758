//! Simulation output: time series and scalar finals

use crate::config::constants::dot_to_poison;
use crate::types::PoisonSource;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// One value per integer second, indexed `0..=horizon`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeSeries(Vec<f64>);

impl TimeSeries {
    pub fn new(values: Vec<f64>) -> Self {
        TimeSeries(values)
    }

    /// Value at the last tick, if any
    pub fn final_value(&self) -> Option<f64> {
        self.0.last().copied()
    }

    /// Largest value in the series (0 for an empty series)
    pub fn peak(&self) -> f64 {
        self.0.iter().copied().reduce(f64::max).unwrap_or(0.0)
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl Deref for TimeSeries {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for TimeSeries {
    fn from(values: Vec<f64>) -> Self {
        TimeSeries(values)
    }
}

/// Everything a single simulation run produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Accumulated skill poison
    pub skill: TimeSeries,
    /// Accumulated weapon poison
    pub weapon: TimeSeries,
    /// Accumulated toxic poison
    pub toxic: TimeSeries,
    /// Instantaneous DoT of all enabled sources
    pub dot: TimeSeries,
    /// DoT as captured at the most recent refresh tick
    pub held: TimeSeries,
    /// Ticks at which at least one enabled source applied
    pub refresh_ticks: Vec<u32>,
    pub final_held_dot: f64,
    /// `final_held_dot * 30`
    pub final_held_poison: f64,
    /// Calibrated burst damage, present only when a calibration sample was given
    pub explosion_damage: Option<f64>,
}

impl SimulationResult {
    /// Assemble a result, deriving the finals from the held series
    pub(crate) fn new(
        [skill, weapon, toxic]: [TimeSeries; 3],
        dot: TimeSeries,
        held: TimeSeries,
        refresh_ticks: Vec<u32>,
        explosion_factor: Option<f64>,
    ) -> Self {
        let final_held_dot = held.final_value().unwrap_or(0.0);
        let final_held_poison = dot_to_poison(final_held_dot);
        SimulationResult {
            skill,
            weapon,
            toxic,
            dot,
            held,
            refresh_ticks,
            final_held_dot,
            final_held_poison,
            explosion_damage: explosion_factor.map(|factor| final_held_poison * factor),
        }
    }

    /// Accumulation series for a source
    pub fn series(&self, source: PoisonSource) -> &TimeSeries {
        match source {
            PoisonSource::Skill => &self.skill,
            PoisonSource::Weapon => &self.weapon,
            PoisonSource::Toxic => &self.toxic,
        }
    }

    /// Last tick of the run (series length minus one)
    pub fn horizon(&self) -> u32 {
        self.dot.len().saturating_sub(1) as u32
    }

    /// Highest instantaneous DoT reached
    pub fn peak_dot(&self) -> f64 {
        self.dot.peak()
    }

    /// Per-tick rows, for tabular export
    pub fn rows(&self) -> impl Iterator<Item = SeriesRow> + '_ {
        (0..self.dot.len()).map(move |t| SeriesRow {
            tick: t as u32,
            skill: self.skill[t],
            weapon: self.weapon[t],
            toxic: self.toxic[t],
            dot: self.dot[t],
            held: self.held[t],
        })
    }

    pub fn summary(&self) -> Summary {
        Summary {
            horizon: self.horizon(),
            final_held_dot: self.final_held_dot,
            final_held_poison: self.final_held_poison,
            peak_dot: self.peak_dot(),
            refresh_count: self.refresh_ticks.len(),
            explosion_damage: self.explosion_damage,
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// One tick of every series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesRow {
    pub tick: u32,
    pub skill: f64,
    pub weapon: f64,
    pub toxic: f64,
    pub dot: f64,
    pub held: f64,
}

/// Scalar outcome of a run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub horizon: u32,
    pub final_held_dot: f64,
    pub final_held_poison: f64,
    pub peak_dot: f64,
    pub refresh_count: usize,
    pub explosion_damage: Option<f64>,
}
