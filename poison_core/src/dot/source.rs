//! Per-source descriptors
//!
//! Each poison source differs only in when it applies, which earlier tick its
//! decay is measured against, its decay constant and its starting amount.
//! `SourceModel` captures those rules so the simulator can treat all three
//! sources uniformly.

use crate::config::constants::{
    dot_to_poison, NON_POISON_DECAY_CONSTANT, POISON_DECAY_CONSTANT, SKILL_APPLICATION_DELAY,
    SKILL_WINDOW_TICKS, WEAPON_PERIOD,
};
use crate::config::{SimulationConfig, SkillConfig, ToxicConfig, WeaponConfig};
use crate::types::PoisonSource;

/// Resolved simulation rules for one poison source
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceModel {
    pub source: PoisonSource,
    pub enabled: bool,
    /// Total poison of one application cycle (`base_dot * 30`)
    pub amount: f64,
    /// Application period in ticks, already clamped to its minimum
    pub period: u32,
    /// Divisor applied to the reference amount each tick
    pub decay_constant: f64,
}

impl SourceModel {
    /// Build the skill descriptor
    pub fn skill(config: &SkillConfig) -> Self {
        SourceModel {
            source: PoisonSource::Skill,
            enabled: config.enabled,
            amount: dot_to_poison(config.base_dot),
            period: config.effective_period(),
            decay_constant: if config.is_poison_type {
                POISON_DECAY_CONSTANT
            } else {
                NON_POISON_DECAY_CONSTANT
            },
        }
    }

    /// Build the weapon descriptor
    pub fn weapon(config: &WeaponConfig) -> Self {
        SourceModel {
            source: PoisonSource::Weapon,
            enabled: config.enabled,
            amount: dot_to_poison(config.base_dot),
            period: WEAPON_PERIOD,
            decay_constant: POISON_DECAY_CONSTANT,
        }
    }

    /// Build the toxic descriptor
    pub fn toxic(config: &ToxicConfig) -> Self {
        SourceModel {
            source: PoisonSource::Toxic,
            enabled: config.enabled,
            amount: dot_to_poison(config.base_dot),
            period: config.effective_period(),
            decay_constant: POISON_DECAY_CONSTANT,
        }
    }

    /// All three descriptors, indexed by `PoisonSource::index`
    pub fn from_config(config: &SimulationConfig) -> [SourceModel; 3] {
        [
            Self::skill(&config.skill),
            Self::weapon(&config.weapon),
            Self::toxic(&config.toxic),
        ]
    }

    /// Does a new application land at tick `t`?
    ///
    /// A disabled source never fires.
    pub fn applies(&self, t: u32) -> bool {
        if !self.enabled {
            return false;
        }
        match self.source {
            PoisonSource::Skill => {
                let phase = t % self.period;
                (SKILL_APPLICATION_DELAY..=SKILL_WINDOW_TICKS).contains(&phase)
            }
            PoisonSource::Weapon | PoisonSource::Toxic => t % self.period == 0,
        }
    }

    /// Start of the application cycle whose amount drives decay at `t`
    ///
    /// For the skill this is the end of the most recently completed damage
    /// window (0 before the first window closes). For the others it is the
    /// most recent cast tick. Not clamped; see [`SourceModel::lookup_tick`].
    pub fn reference_tick(&self, t: u32) -> u32 {
        match self.source {
            PoisonSource::Skill => {
                if t <= SKILL_WINDOW_TICKS {
                    0
                } else {
                    SKILL_WINDOW_TICKS
                        + self.period * ((t - SKILL_WINDOW_TICKS) / self.period)
                }
            }
            PoisonSource::Weapon | PoisonSource::Toxic => t - (t % self.period),
        }
    }

    /// Reference tick clamped into `[0, t-1]` so it indexes an earlier value
    pub fn lookup_tick(&self, t: u32) -> usize {
        self.reference_tick(t).min(t.saturating_sub(1)) as usize
    }

    /// Poison added on a tick where the source applies
    ///
    /// The skill spreads its amount evenly over the damage window; the other
    /// sources land their full amount at once.
    pub fn per_application_amount(&self) -> f64 {
        match self.source {
            PoisonSource::Skill => self.amount / SKILL_WINDOW_TICKS as f64,
            PoisonSource::Weapon | PoisonSource::Toxic => self.amount,
        }
    }

    /// Poison present at tick 0
    pub fn initial_amount(&self) -> f64 {
        if self.enabled && self.source.starts_loaded() {
            self.amount
        } else {
            0.0
        }
    }
}
