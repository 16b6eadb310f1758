//! Simulation parameter sets
//!
//! A `SimulationConfig` is the explicit, immutable input to a simulation run.
//! Every field has a default so partial TOML files fill in the rest.

use super::constants::{dot_to_poison, MIN_SKILL_PERIOD};
use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Full parameter set for one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Observed burst damage for a single skill amount, used to calibrate
    /// explosion damage. Zero means uncalibrated.
    #[serde(default)]
    pub explosion_base_damage: f64,
    #[serde(default)]
    pub skill: SkillConfig,
    #[serde(default)]
    pub weapon: WeaponConfig,
    #[serde(default)]
    pub toxic: ToxicConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            explosion_base_damage: 0.0,
            skill: SkillConfig::default(),
            weapon: WeaponConfig::default(),
            toxic: ToxicConfig::default(),
        }
    }
}

impl SimulationConfig {
    /// A configuration with every source switched off
    pub fn disabled() -> Self {
        SimulationConfig {
            skill: SkillConfig {
                enabled: false,
                ..SkillConfig::default()
            },
            weapon: WeaponConfig {
                enabled: false,
                ..WeaponConfig::default()
            },
            toxic: ToxicConfig {
                enabled: false,
                ..ToxicConfig::default()
            },
            explosion_base_damage: 0.0,
        }
    }

    /// Replace the skill section
    pub fn with_skill(mut self, skill: SkillConfig) -> Self {
        self.skill = skill;
        self
    }

    /// Replace the weapon section
    pub fn with_weapon(mut self, weapon: WeaponConfig) -> Self {
        self.weapon = weapon;
        self
    }

    /// Replace the toxic section
    pub fn with_toxic(mut self, toxic: ToxicConfig) -> Self {
        self.toxic = toxic;
        self
    }

    /// Set the explosion calibration damage
    pub fn with_explosion_base_damage(mut self, damage: f64) -> Self {
        self.explosion_base_damage = damage;
        self
    }

    /// Load a parameter set from a TOML file and validate it
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let config: SimulationConfig = super::load_toml(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a parameter set from a TOML string and validate it
    pub fn parse(toml: &str) -> Result<Self, ConfigError> {
        let config: SimulationConfig = super::parse_toml(toml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize back to TOML
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Check that every number is usable
    ///
    /// Base DoTs must be finite and non-negative and periods at least 1.
    /// The skill period is not rejected below its minimum; the simulator
    /// clamps it instead.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_base_dot("skill", self.skill.base_dot)?;
        check_base_dot("weapon", self.weapon.base_dot)?;
        check_base_dot("toxic", self.toxic.base_dot)?;
        check_period("skill", self.skill.cast_period)?;
        check_period("toxic", self.toxic.cast_period)?;

        if !self.explosion_base_damage.is_finite() {
            return Err(ConfigError::ValidationError(format!(
                "explosion_base_damage must be finite, got {}",
                self.explosion_base_damage
            )));
        }

        Ok(())
    }

    /// Total poison amount of one skill cast (`base_dot * 30`)
    pub fn skill_amount(&self) -> f64 {
        dot_to_poison(self.skill.base_dot)
    }

    /// Factor converting accumulated poison into explosion damage
    ///
    /// A single ground-truth sample: `explosion_base_damage` is the burst
    /// observed for one full skill amount. A zero skill amount gives zero.
    pub fn explosion_conversion_factor(&self) -> f64 {
        let skill_amount = self.skill_amount();
        if skill_amount == 0.0 {
            return 0.0;
        }
        self.explosion_base_damage / skill_amount
    }

    /// Whether an explosion calibration sample was supplied
    pub fn has_explosion_calibration(&self) -> bool {
        self.explosion_base_damage != 0.0
    }
}

fn check_base_dot(section: &str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::ValidationError(format!(
            "{section}.base_dot must be a finite non-negative number, got {value}"
        )));
    }
    Ok(())
}

fn check_period(section: &str, value: u32) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::ValidationError(format!(
            "{section}.cast_period must be at least 1 second"
        )));
    }
    Ok(())
}

/// The periodic skill whose poison is spread over a 7 tick window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// DoT the skill sustains on its own after one cast
    #[serde(default = "default_skill_dot")]
    pub base_dot: f64,
    /// Seconds between casts (clamped to at least 7)
    #[serde(default = "default_skill_period")]
    pub cast_period: u32,
    /// Poison-type variants decay twice as fast as the alternative
    #[serde(default = "default_enabled")]
    pub is_poison_type: bool,
}

impl Default for SkillConfig {
    fn default() -> Self {
        SkillConfig {
            enabled: true,
            base_dot: 18000.0,
            cast_period: 12,
            is_poison_type: true,
        }
    }
}

impl SkillConfig {
    /// Enabled poison-type skill with the given DoT and cast period
    pub fn new(base_dot: f64, cast_period: u32) -> Self {
        SkillConfig {
            enabled: true,
            base_dot,
            cast_period,
            is_poison_type: true,
        }
    }

    /// Mark the skill as the slower-decaying non-poison variant
    pub fn non_poison(mut self) -> Self {
        self.is_poison_type = false;
        self
    }

    /// Cast period after clamping to the minimum
    pub fn effective_period(&self) -> u32 {
        self.cast_period.max(MIN_SKILL_PERIOD)
    }
}

/// The weapon proc, landing every 10 seconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// DoT a single weapon hit sustains on its own
    #[serde(default = "default_weapon_dot")]
    pub base_dot: f64,
}

impl Default for WeaponConfig {
    fn default() -> Self {
        WeaponConfig {
            enabled: true,
            base_dot: 19000.0,
        }
    }
}

impl WeaponConfig {
    pub fn new(base_dot: f64) -> Self {
        WeaponConfig {
            enabled: true,
            base_dot,
        }
    }
}

/// The periodic toxic effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToxicConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// DoT a single toxic trigger sustains on its own
    #[serde(default = "default_toxic_dot")]
    pub base_dot: f64,
    /// Seconds between toxic casts
    #[serde(default = "default_toxic_period")]
    pub cast_period: u32,
}

impl Default for ToxicConfig {
    fn default() -> Self {
        ToxicConfig {
            enabled: true,
            base_dot: 8000.0,
            cast_period: 15,
        }
    }
}

impl ToxicConfig {
    pub fn new(base_dot: f64, cast_period: u32) -> Self {
        ToxicConfig {
            enabled: true,
            base_dot,
            cast_period,
        }
    }

    /// Cast period with zero coerced to 1
    pub fn effective_period(&self) -> u32 {
        self.cast_period.max(1)
    }
}

fn default_enabled() -> bool {
    true
}
fn default_skill_dot() -> f64 {
    18000.0
}
fn default_skill_period() -> u32 {
    12
}
fn default_weapon_dot() -> f64 {
    19000.0
}
fn default_toxic_dot() -> f64 {
    8000.0
}
fn default_toxic_period() -> u32 {
    15
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimulationConfig::default();
        assert!(config.skill.enabled && config.weapon.enabled && config.toxic.enabled);
        assert!((config.skill.base_dot - 18000.0).abs() < f64::EPSILON);
        assert!((config.weapon.base_dot - 19000.0).abs() < f64::EPSILON);
        assert!((config.toxic.base_dot - 8000.0).abs() < f64::EPSILON);
        assert_eq!(config.skill.cast_period, 12);
        assert_eq!(config.toxic.cast_period, 15);
        assert!(config.skill.is_poison_type);
        assert!(!config.has_explosion_calibration());
    }

    #[test]
    fn test_parse_partial() {
        let toml = r#"
explosion_base_damage = 5000

[skill]
base_dot = 20000
is_poison_type = false

[toxic]
enabled = false
"#;

        let config = SimulationConfig::parse(toml).unwrap();
        assert!((config.skill.base_dot - 20000.0).abs() < f64::EPSILON);
        assert!(!config.skill.is_poison_type);
        assert_eq!(config.skill.cast_period, 12);
        assert!(config.weapon.enabled);
        assert!(!config.toxic.enabled);
        assert!((config.explosion_base_damage - 5000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_empty_is_default() {
        let config = SimulationConfig::parse("").unwrap();
        assert_eq!(config, SimulationConfig::default());
    }

    #[test]
    fn test_rejects_zero_period() {
        let err = SimulationConfig::parse("[toxic]\ncast_period = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_rejects_negative_dot() {
        let config = SimulationConfig::default().with_weapon(WeaponConfig::new(-1.0));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_non_finite() {
        let config = SimulationConfig::default().with_skill(SkillConfig::new(f64::NAN, 12));
        assert!(config.validate().is_err());

        let config = SimulationConfig::default().with_explosion_base_damage(f64::INFINITY);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_short_skill_period_is_clamped_not_rejected() {
        let config = SimulationConfig::default().with_skill(SkillConfig::new(18000.0, 3));
        assert!(config.validate().is_ok());
        assert_eq!(config.skill.effective_period(), 7);
    }

    #[test]
    fn test_parse_error_has_no_path() {
        let err = SimulationConfig::parse("skill = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { path: None, .. }));
    }

    #[test]
    fn test_explosion_conversion_factor() {
        let config = SimulationConfig::default()
            .with_skill(SkillConfig::new(18000.0, 12))
            .with_explosion_base_damage(5000.0);
        let factor = config.explosion_conversion_factor();
        assert!((factor - 5000.0 / 540000.0).abs() < 1e-12);
        assert!((factor - 0.009259).abs() < 1e-6);
    }

    #[test]
    fn test_zero_skill_amount_gives_zero_factor() {
        let config = SimulationConfig::default()
            .with_skill(SkillConfig::new(0.0, 12))
            .with_explosion_base_damage(5000.0);
        assert_eq!(config.explosion_conversion_factor(), 0.0);
    }

    #[test]
    fn test_toml_round_trip_keeps_values() {
        let config = SimulationConfig::default()
            .with_toxic(ToxicConfig::new(9000.0, 20))
            .with_skill(SkillConfig::new(15000.0, 10).non_poison());
        let text = config.to_toml_string().unwrap();
        assert_eq!(SimulationConfig::parse(&text).unwrap(), config);
    }
}
