//! Poison DoT simulation
//!
//! Three sources (skill, weapon, toxic) accumulate poison independently. Each
//! tick a source adds its application amount when it fires and loses a fixed
//! fraction of the amount it held at the start of its current cycle. The
//! instantaneous DoT is the total poison divided by 30, and the held DoT only
//! follows it on ticks where some source fires.

mod result;
pub mod source;
pub mod tick;

pub use result::{SeriesRow, SimulationResult, Summary, TimeSeries};
pub use source::SourceModel;
pub use tick::{accumulate, aggregate_dot, hold_dot};

use crate::config::constants::MIN_SKILL_PERIOD;
use crate::config::SimulationConfig;
use crate::types::PoisonSource;

/// A configured simulator, reusable across horizons
#[derive(Debug, Clone)]
pub struct PoisonSimulator {
    config: SimulationConfig,
    models: [SourceModel; 3],
}

impl PoisonSimulator {
    /// Resolve the per-source rules for a configuration
    ///
    /// Out-of-range periods are coerced rather than rejected: the skill
    /// period is raised to 7 and a zero toxic period becomes 1.
    pub fn new(config: SimulationConfig) -> Self {
        if config.skill.enabled && config.skill.cast_period < MIN_SKILL_PERIOD {
            tracing::warn!(
                configured = config.skill.cast_period,
                effective = MIN_SKILL_PERIOD,
                "skill cast period below minimum, clamping"
            );
        }
        if config.toxic.enabled && config.toxic.cast_period == 0 {
            tracing::warn!("toxic cast period of 0 treated as 1");
        }

        let models = SourceModel::from_config(&config);
        PoisonSimulator { config, models }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Descriptor for a source
    pub fn model(&self, source: PoisonSource) -> &SourceModel {
        &self.models[source.index()]
    }

    /// Simulate ticks `0..=horizon`
    pub fn run(&self, horizon: u32) -> SimulationResult {
        tracing::debug!(horizon, "starting poison simulation");

        let series = self.models.map(|model| accumulate(&model, horizon));
        let dot = aggregate_dot(&self.models, &series, horizon);
        let (held, refresh_ticks) = hold_dot(&self.models, &dot);

        let explosion_factor = self
            .config
            .has_explosion_calibration()
            .then(|| self.config.explosion_conversion_factor());

        let result = SimulationResult::new(series, dot, held, refresh_ticks, explosion_factor);
        tracing::debug!(
            final_held_dot = result.final_held_dot,
            final_held_poison = result.final_held_poison,
            refreshes = result.refresh_ticks.len(),
            "poison simulation finished"
        );
        result
    }
}

/// Simulate a configuration over `0..=horizon` seconds
pub fn simulate(config: &SimulationConfig, horizon: u32) -> SimulationResult {
    PoisonSimulator::new(config.clone()).run(horizon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SkillConfig, ToxicConfig, WeaponConfig};

    fn weapon_only() -> SimulationConfig {
        SimulationConfig::disabled().with_weapon(WeaponConfig::new(19000.0))
    }

    fn skill_only() -> SimulationConfig {
        SimulationConfig::disabled().with_skill(SkillConfig::new(18000.0, 12))
    }

    #[test]
    fn test_weapon_scenario() {
        let result = simulate(&weapon_only(), 10);

        assert_eq!(result.weapon.len(), 11);
        assert!((result.weapon[0] - 570000.0).abs() < 1e-9);
        assert!((result.weapon[10] - 955700.0).abs() < 1e-9);
        assert!(result.skill.iter().all(|&v| v == 0.0));
        assert!(result.toxic.iter().all(|&v| v == 0.0));

        // held stays at the t=0 value until the t=10 proc
        assert!((result.held[9] - 19000.0).abs() < 1e-9);
        assert!((result.final_held_dot - 955700.0 / 30.0).abs() < 1e-9);
        assert_eq!(result.refresh_ticks, vec![0, 10]);
    }

    #[test]
    fn test_all_disabled() {
        let result = simulate(&SimulationConfig::disabled(), 60);
        assert!(result.dot.iter().all(|&v| v == 0.0));
        assert!(result.held.iter().all(|&v| v == 0.0));
        assert_eq!(result.final_held_poison, 0.0);
        assert!(result.refresh_ticks.is_empty());
    }

    #[test]
    fn test_skill_scenario() {
        let result = simulate(&skill_only(), 20);

        assert_eq!(result.skill[0], 0.0);
        assert!((result.skill[1] - 540000.0 / 7.0).abs() < 1e-9);
        assert!((result.skill[1] - 77142.86).abs() < 0.01);
        // held at t=20 was captured at t=19, the last tick of the second window
        assert!((result.held[20] - result.dot[19]).abs() < f64::EPSILON);
        assert!((result.final_held_dot - 28505.714285714).abs() < 1e-6);
    }

    #[test]
    fn test_skill_held_starts_at_zero() {
        let result = simulate(&skill_only(), 3);
        assert_eq!(result.held[0], 0.0);
        assert_eq!(result.dot[0], 0.0);
    }

    #[test]
    fn test_disabled_source_ignores_amount() {
        let config = SimulationConfig::disabled().with_toxic(ToxicConfig {
            enabled: false,
            base_dot: 1.0e9,
            cast_period: 1,
        });
        let result = simulate(&config, 30);
        assert!(result.toxic.iter().all(|&v| v == 0.0));
        assert!(result.held.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_default_rotation() {
        let result = simulate(&SimulationConfig::default(), 120);
        assert_eq!(result.horizon(), 120);
        assert!((result.final_held_dot - 112171.68817370132).abs() < 1e-6);
        assert!((result.final_held_poison - result.final_held_dot * 30.0).abs() < 1e-9);
        assert!(result.explosion_damage.is_none());
    }

    #[test]
    fn test_zero_horizon() {
        let result = simulate(&SimulationConfig::default(), 0);
        assert_eq!(result.dot.len(), 1);
        assert_eq!(result.held.len(), 1);
        // weapon and toxic are pre-loaded: (570000 + 240000) / 30
        assert!((result.dot[0] - 27000.0).abs() < 1e-9);
        assert!((result.final_held_dot - 27000.0).abs() < 1e-9);
    }

    #[test]
    fn test_explosion_calibration() {
        let config = skill_only().with_explosion_base_damage(5000.0);
        let result = simulate(&config, 20);
        let expected = result.final_held_poison * 5000.0 / 540000.0;
        let explosion = result.explosion_damage.unwrap();
        assert!((explosion - expected).abs() < 1e-9);
    }

    #[test]
    fn test_explosion_with_zero_skill_amount() {
        let config = weapon_only()
            .with_skill(SkillConfig {
                enabled: false,
                base_dot: 0.0,
                ..SkillConfig::default()
            })
            .with_explosion_base_damage(5000.0);
        let result = simulate(&config, 10);
        assert_eq!(result.explosion_damage, Some(0.0));
    }

    #[test]
    fn test_simulator_reuse() {
        let simulator = PoisonSimulator::new(SimulationConfig::default());
        let short = simulator.run(30);
        let long = simulator.run(60);
        assert_eq!(&long.dot[..=30], &short.dot[..]);
        assert_eq!(simulator.model(PoisonSource::Skill).period, 12);
    }

    #[test]
    fn test_skill_period_coerced() {
        let config = skill_only().with_skill(SkillConfig::new(18000.0, 2));
        let simulator = PoisonSimulator::new(config);
        assert_eq!(simulator.model(PoisonSource::Skill).period, 7);
    }
}
