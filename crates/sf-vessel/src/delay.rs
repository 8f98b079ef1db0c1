//! Berthing delay formula.

use sf_core::{SimRng, round2};

pub const MAX_CRANES: u32 = 5;

/// Weights for `1..=MAX_CRANES` available cranes.
pub const CRANE_WEIGHTS: [f64; MAX_CRANES as usize] = [0.05, 0.15, 0.3, 0.3, 0.2];

/// Conditions at the port when a vessel arrives.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BerthContext {
    /// Steel storage utilisation, percent.
    pub utilization:   f64,
    pub weather:       u32,
    pub cranes:        u32,
    /// Historical average delay, hours.
    pub past_avg:      f64,
}

/// `delay = util/100·U(5,30) + weather·U(2,12) + (MAX_CRANES − cranes)·U(5,15)
///          + past_avg·U(0.1,0.5)`, clamped to `[min_hours, max_hours]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DelayModel {
    pub min_hours: f64,
    pub max_hours: f64,
}

impl Default for DelayModel {
    fn default() -> Self {
        Self { min_hours: 1.0, max_hours: 240.0 }
    }
}

impl DelayModel {
    /// Cranes drawn from [`CRANE_WEIGHTS`].
    pub fn sample_cranes(rng: &mut SimRng) -> u32 {
        rng.choose_weighted_index(&CRANE_WEIGHTS).map_or(MAX_CRANES, |i| i as u32 + 1)
    }

    /// Historical average delay, `U(10, 40)` hours, 2 dp.
    pub fn sample_past_avg(rng: &mut SimRng) -> f64 {
        round2(rng.uniform(10.0, 40.0))
    }

    /// Delay hours, 2 dp.
    pub fn delay_hours(&self, ctx: &BerthContext, rng: &mut SimRng) -> f64 {
        let congestion = ctx.utilization / 100.0 * rng.uniform(5.0, 30.0);
        let weather = f64::from(ctx.weather) * rng.uniform(2.0, 12.0);
        let cranes = f64::from(MAX_CRANES.saturating_sub(ctx.cranes)) * rng.uniform(5.0, 15.0);
        let history = ctx.past_avg * rng.uniform(0.1, 0.5);
        round2((congestion + weather + cranes + history).clamp(self.min_hours, self.max_hours))
    }
}
