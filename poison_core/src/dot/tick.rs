//! Per-tick accumulation and decay

use super::result::TimeSeries;
use super::source::SourceModel;
use crate::config::constants::poison_to_dot;

/// Accumulate one source's poison over `0..=horizon`
///
/// Each tick adds the per-application amount when the source fires and
/// subtracts `P[ref] / decay_constant`, where `ref` is the start of the
/// current application cycle clamped into `[0, t-1]`. Decay is therefore a
/// step approximation keyed to the cycle start rather than the previous tick.
pub fn accumulate(model: &SourceModel, horizon: u32) -> TimeSeries {
    let mut poison = vec![0.0; horizon as usize + 1];
    if !model.enabled {
        return TimeSeries::new(poison);
    }

    poison[0] = model.initial_amount();
    let per_application = model.per_application_amount();

    for t in 1..=horizon {
        let increment = if model.applies(t) { per_application } else { 0.0 };
        let decay = poison[model.lookup_tick(t)] / model.decay_constant;
        let idx = t as usize;
        poison[idx] = poison[idx - 1] + increment - decay;
    }

    TimeSeries::new(poison)
}

/// Instantaneous DoT: enabled sources' poison summed and scaled back down
pub fn aggregate_dot(models: &[SourceModel], series: &[TimeSeries], horizon: u32) -> TimeSeries {
    let values: Vec<f64> = (0..=horizon as usize)
        .map(|t| {
            models
                .iter()
                .zip(series)
                .filter(|(model, _)| model.enabled)
                .map(|(_, poison)| poison_to_dot(poison[t]))
                .sum::<f64>()
        })
        .collect();
    TimeSeries::new(values)
}

/// Held DoT: the instantaneous value captured at the latest refresh tick
///
/// Returns the held series along with the refresh ticks, i.e. every tick at
/// which at least one enabled source applies. `held[0]` is always `dot[0]`.
pub fn hold_dot(models: &[SourceModel], dot: &TimeSeries) -> (TimeSeries, Vec<u32>) {
    let mut held = Vec::with_capacity(dot.len());
    let mut refresh_ticks = Vec::new();
    let mut last = dot.first().copied().unwrap_or(0.0);

    for (t, &value) in dot.iter().enumerate() {
        let tick = t as u32;
        if models.iter().any(|model| model.applies(tick)) {
            tracing::trace!(tick, dot = value, "held DoT refreshed");
            last = value;
            refresh_ticks.push(tick);
        }
        held.push(last);
    }

    (TimeSeries::new(held), refresh_ticks)
}
