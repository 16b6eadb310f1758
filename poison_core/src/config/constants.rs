//! Fixed model constants
//!
//! These come from how the game integrates poison, not from user input, so
//! they are plain constants rather than tunables.

/// Number of 1-second ticks a held DoT is integrated over.
///
/// Converts a reported DoT into accumulated poison (`amount = dot * 30`) and
/// back (`dot = poison / 30`).
pub const ACCUMULATION_SCALE: f64 = 30.0;

/// Length of the skill damage window in ticks
pub const SKILL_WINDOW_TICKS: u32 = 7;

/// Delay between a skill cast and the first tick of its damage window
pub const SKILL_APPLICATION_DELAY: u32 = 1;

/// Shortest allowed skill cast period; shorter inputs are clamped up
pub const MIN_SKILL_PERIOD: u32 = 7;

/// Weapon procs land on every multiple of this many seconds
pub const WEAPON_PERIOD: u32 = 10;

/// Decay divisor for poison-type sources
pub const POISON_DECAY_CONSTANT: f64 = 30.0;

/// Decay divisor for a non-poison skill variant (decays half as fast)
pub const NON_POISON_DECAY_CONSTANT: f64 = 60.0;

/// Default simulation horizon in seconds
pub const DEFAULT_HORIZON: u32 = 120;

/// Convert a reported DoT into accumulated poison units
pub fn dot_to_poison(dot: f64) -> f64 {
    dot * ACCUMULATION_SCALE
}

/// Convert accumulated poison units into DoT
pub fn poison_to_dot(poison: f64) -> f64 {
    poison / ACCUMULATION_SCALE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_conversions() {
        assert!((dot_to_poison(19000.0) - 570000.0).abs() < f64::EPSILON);
        assert!((poison_to_dot(570000.0) - 19000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_window_fits_minimum_period() {
        assert_eq!(MIN_SKILL_PERIOD, SKILL_WINDOW_TICKS);
    }
}
