//! The vessel delay stage.
//!
//! The window runs from `history_days` before the first port-log date to
//! the last port-log date.  Per day the draws are:
//!
//! 1. arrival Bernoulli (`arrival_probability`);
//! 2. port, ETA hour and minute, then one contract among those calling at
//!    that port (the day is skipped if there is none);
//! 3. fallback utilisation and weather, only when the port log has no row
//!    for that port-day;
//! 4. queue extra, cranes, past average, the four delay terms, laydays
//!    offsets.

use chrono::{Duration, NaiveDate, NaiveTime};
use rustc_hash::FxHashMap;
use serde::Deserialize;

use sf_core::calendar::hours;
use sf_core::{SimCalendar, SimRng, round2};
use sf_table::{PortLogRow, VesselContractRow, VesselDelayRow};

use crate::{BerthContext, DelayModel, VesselError, VesselResult};

#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct VesselParams {
    /// Days of history simulated before the first port-log date.
    pub history_days:        u32,
    pub arrival_probability: f64,
    /// Utilisation range used when the port log has no row, percent.
    pub fallback_utilization: (f64, f64),
    /// Inclusive weather range used when the port log has no row.
    pub fallback_weather:     (u32, u32),
}

impl Default for VesselParams {
    fn default() -> Self {
        Self {
            history_days:         365,
            arrival_probability:  0.4,
            fallback_utilization: (50.0, 80.0),
            fallback_weather:     (0, 2),
        }
    }
}

impl VesselParams {
    pub fn validate(&self) -> VesselResult<()> {
        if !(0.0..=1.0).contains(&self.arrival_probability) {
            return Err(VesselError::InvalidParams(format!(
                "arrival_probability must be in [0, 1], got {}",
                self.arrival_probability
            )));
        }
        let (lo, hi) = self.fallback_weather;
        if lo > hi {
            return Err(VesselError::InvalidParams(format!("fallback_weather ({lo}, {hi}) must be ordered")));
        }
        Ok(())
    }
}

/// Port log and contracts in, vessel delay history out.
#[derive(Clone, Debug, Default)]
pub struct VesselDelaySimulator {
    params: VesselParams,
    model:  DelayModel,
}

impl VesselDelaySimulator {
    pub fn new(params: VesselParams) -> VesselResult<Self> {
        params.validate()?;
        Ok(Self { params, model: DelayModel::default() })
    }

    pub fn params(&self) -> &VesselParams {
        &self.params
    }

    /// Simulation window for a port log, `None` if the log is empty.
    pub fn window(&self, port_log: &[PortLogRow]) -> Option<SimCalendar> {
        let first = port_log.iter().map(|r| r.date).min()?;
        let last = port_log.iter().map(|r| r.date).max()?;
        let start = first - Duration::days(i64::from(self.params.history_days));
        Some(SimCalendar::spanning(start, last))
    }

    pub fn run(
        &self,
        port_log:  &[PortLogRow],
        contracts: &[VesselContractRow],
        rng:       &mut SimRng,
    ) -> VesselResult<Vec<VesselDelayRow>> {
        let Some(calendar) = self.window(port_log) else {
            tracing::warn!("port log is empty; vessel delay history will be empty");
            return Ok(Vec::new());
        };

        let mut ports: Vec<&str> = port_log.iter().map(|r| r.port_name.as_str()).collect();
        ports.sort_unstable();
        ports.dedup();

        let context: FxHashMap<(NaiveDate, &str), &PortLogRow> =
            port_log.iter().map(|r| ((r.date, r.port_name.as_str()), r)).collect();

        let eligible: FxHashMap<&str, Vec<&VesselContractRow>> = ports
            .iter()
            .map(|&p| (p, contracts.iter().filter(|c| c.calls_at(p)).collect()))
            .collect();
        for (port, list) in &eligible {
            if list.is_empty() {
                tracing::debug!(port, "no vessel contract calls at port");
            }
        }

        tracing::info!(window = %calendar, ports = ports.len(), contracts = contracts.len(), "vessel stage started");

        let mut rows: Vec<VesselDelayRow> = Vec::new();
        let mut skipped = 0usize;
        for date in calendar.dates() {
            if !rng.gen_bool(self.params.arrival_probability) {
                continue;
            }
            let Some(&port) = rng.choose(&ports) else { continue };
            let hour: u32 = rng.gen_range(0..=23);
            let minute: u32 = rng.gen_range(0..=59);
            let eta = date.and_time(NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN));
            let candidates = eligible.get(port).map(Vec::as_slice).unwrap_or(&[]);
            let Some(&contract) = rng.choose(candidates) else {
                skipped += 1;
                continue;
            };

            let (utilization, weather) = match context.get(&(date, port)) {
                Some(row) => (row.steel_storage_utilization_percent, row.weather_delay_index),
                None => {
                    let (u_lo, u_hi) = self.params.fallback_utilization;
                    let (w_lo, w_hi) = self.params.fallback_weather;
                    (rng.uniform(u_lo, u_hi), rng.gen_range(w_lo..=w_hi))
                }
            };

            let same_day = rows.iter().filter(|r| r.eta_datetime.date() == date).count();
            let queue_length = same_day as u32 + rng.gen_range(0..=3u32);
            let cranes = DelayModel::sample_cranes(rng);
            let past_avg = DelayModel::sample_past_avg(rng);
            let ctx = BerthContext { utilization, weather, cranes, past_avg };
            let delay = self.model.delay_hours(&ctx, rng);

            let laydays_start = eta - Duration::days(rng.gen_range(1..=3));
            let laydays_end = eta + Duration::days(rng.gen_range(7..=10));

            rows.push(VesselDelayRow {
                vessel_name:              contract.vessel_id.clone(),
                port_name:                port.to_owned(),
                eta_datetime:             eta,
                actual_berth_time:        eta + hours(delay),
                parcel_size_tonnes:       contract.contract_quantity_tonnes,
                laydays_start,
                laydays_end,
                queue_length,
                weather_score:            weather,
                crane_availability:       cranes,
                past_delay_avg_hours:     past_avg,
                laydays_limit_hours:      contract.laydays_allowed_hours,
                delay_hours:              delay,
                demurrage_cost_inr:       round2(delay * contract.demurrage_rate_inr_hr),
                port_utilization_percent: round2(utilization),
            });
            tracing::trace!(%date, port, vessel = %contract.vessel_id, delay, "vessel arrival");
        }

        rows.sort_by(|a, b| (a.eta_datetime, &a.port_name).cmp(&(b.eta_datetime, &b.port_name)));
        if skipped > 0 {
            tracing::warn!(skipped, "arrival days skipped: no contract calls at the chosen port");
        }
        tracing::info!(arrivals = rows.len(), "vessel stage finished");
        Ok(rows)
    }
}
