//! Human-readable summary of a run

use poison_core::{SimulationConfig, Summary};
use std::fmt::Write;

/// Round to a whole number and group digits with commas
pub fn format_thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}

/// Render the finals of a run as a small text block
pub fn render_summary(config: &SimulationConfig, summary: &Summary) -> String {
    let mut out = String::new();
    // writing to a String cannot fail
    let _ = writeln!(out, "Poison simulation ({} s)", summary.horizon);
    let _ = writeln!(
        out,
        "  Sources: skill {}, weapon {}, toxic {}",
        on_off(config.skill.enabled),
        on_off(config.weapon.enabled),
        on_off(config.toxic.enabled)
    );
    let _ = writeln!(out, "  Final held DoT:          {}", format_thousands(summary.final_held_dot));
    let _ = writeln!(
        out,
        "  Final held poison (x30): {}",
        format_thousands(summary.final_held_poison)
    );
    let _ = writeln!(out, "  Peak instant DoT:        {}", format_thousands(summary.peak_dot));
    let _ = writeln!(out, "  Refresh ticks:           {}", summary.refresh_count);
    if let Some(explosion) = summary.explosion_damage {
        let _ = writeln!(out, "  Explosion damage:        {}", format_thousands(explosion));
    }
    out
}
