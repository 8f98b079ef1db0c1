//! Daily series generators.
//!
//! Both generators keep every value at two decimals and preserve the yearly
//! total to within 0.01 t.

use sf_core::{SimRng, round2};

/// Truncate to two decimals, never exceeding `x` for `x ≥ 0`.
#[inline]
fn floor2(x: f64) -> f64 {
    (x * 100.0).floor() / 100.0
}

/// Daily export figures summing to `yearly`.
///
/// Each day draws `U(0.9, 1.1) × remaining / days_left`, capped by what is
/// left; the final day takes the remainder.
pub fn daily_exports(yearly: f64, days: usize, rng: &mut SimRng) -> Vec<f64> {
    let mut out = Vec::with_capacity(days);
    let mut remaining = yearly.max(0.0);
    for i in 0..days {
        let avg = remaining / (days - i) as f64;
        let mut daily = round2(rng.uniform(0.9 * avg, 1.1 * avg));
        if daily > remaining {
            daily = floor2(remaining);
        }
        out.push(daily);
        remaining = (remaining - daily).max(0.0);
    }
    if let Some(last) = out.last_mut() {
        *last = round2(*last + remaining);
    }
    out
}

/// Partition `total` into train loads of `U(min_per_train, max_per_train)`
/// placed on uniformly random days.
///
/// The load that would overshoot is cut to close the partition exactly.
pub fn train_arrivals(
    total:         f64,
    days:          usize,
    min_per_train: f64,
    max_per_train: f64,
    rng:           &mut SimRng,
) -> Vec<f64> {
    let mut out = vec![0.0; days];
    if days == 0 {
        return out;
    }
    let mut remaining = round2(total.max(0.0));
    while remaining >= 0.01 {
        let day = rng.gen_range(0..days);
        let load = round2(rng.uniform(min_per_train, max_per_train)).max(0.01);
        let load = if load >= remaining { round2(remaining) } else { load };
        out[day] += load;
        remaining = round2(remaining - load);
    }
    for a in &mut out {
        *a = round2(*a);
    }
    out
}
