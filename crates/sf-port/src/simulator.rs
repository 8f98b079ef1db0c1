//! The port flow stage.
//!
//! The window runs from the earliest trip departure date to the latest trip
//! arrival date.  Each day visits every network port in name order; per
//! port-day the draws are: policy injections and the steel shipment in the
//! order [`PortYard::step`] makes them, then the weather index.

use sf_core::{Material, SimCalendar, SimRng, round2};
use sf_network::Network;
use sf_table::{PortLogRow, TripRow};

use crate::{CeilingLedger, DayFlows, DayIndex, Movement, PortError, PortPolicy, PortResult, PortYard};

/// Weights of weather-delay indices `0..=5`.
pub const WEATHER_WEIGHTS: [f64; 6] = [0.4, 0.3, 0.15, 0.1, 0.04, 0.01];

/// Output of one port run.
#[derive(Debug)]
pub struct PortFlowRun {
    /// Ordered by date, then port name.
    pub rows:  Vec<PortLogRow>,
    /// Final state of each port, in name order.
    pub yards: Vec<PortYard>,
}

/// Replays the train log against port storage.
#[derive(Clone, Debug, Default)]
pub struct PortFlowSimulator {
    policy: PortPolicy,
}

fn movement(t: &TripRow) -> Movement {
    Movement { material: t.material, quantity: t.quantity_tonnes }
}

fn log_row(date: chrono::NaiveDate, port: &str, f: &DayFlows, weather: u32, policy: &PortPolicy) -> PortLogRow {
    let c = Material::Coal.index();
    let l = Material::Limestone.index();
    let s = Material::Steel.index();
    PortLogRow {
        date,
        port_name:                         port.to_owned(),
        coal_bod_storage_tonnes:           round2(f.bod[c]),
        limestone_bod_storage_tonnes:      round2(f.bod[l]),
        steel_bod_storage_tonnes:          round2(f.bod[s]),
        coal_arrived_tonnes:               round2(f.arrived[c]),
        limestone_arrived_tonnes:          round2(f.arrived[l]),
        coal_departed_tonnes:              round2(f.departed[c]),
        limestone_departed_tonnes:         round2(f.departed[l]),
        steel_arrived_tonnes:              round2(f.arrived[s]),
        steel_shipped_tonnes:              round2(f.departed[s]),
        coal_eod_storage_tonnes:           round2(f.eod[c]),
        limestone_eod_storage_tonnes:      round2(f.eod[l]),
        steel_eod_storage_tonnes:          round2(f.eod[s]),
        total_cargo_flow_today_tonnes:     round2(f.total_flow()),
        weather_delay_index:               weather,
        steel_storage_utilization_percent: round2(f.eod[s] / policy.steel.max_storage * 100.0),
    }
}

impl PortFlowSimulator {
    pub fn new(policy: PortPolicy) -> PortResult<Self> {
        policy.validate()?;
        Ok(Self { policy })
    }

    pub fn policy(&self) -> &PortPolicy {
        &self.policy
    }

    /// Yards for every network port, in name order, with ceilings from `trips`.
    pub fn yards(&self, network: &Network, trips: &[TripRow]) -> PortResult<Vec<PortYard>> {
        let ports = network.ports();
        if ports.is_empty() {
            return Err(PortError::NoPorts);
        }
        Ok(ports
            .into_iter()
            .map(|id| {
                let name = network.name(id);
                PortYard::new(name, CeilingLedger::from_trips(name, trips))
            })
            .collect())
    }

    pub fn run(&self, network: &Network, trips: &[TripRow], rng: &mut SimRng) -> PortResult<PortFlowRun> {
        let yards = self.yards(network, trips)?;
        self.run_with_yards(trips, yards, rng)
    }

    /// Run against explicit starting yards (name order is kept as given).
    pub fn run_with_yards(
        &self,
        trips:     &[TripRow],
        mut yards: Vec<PortYard>,
        rng:       &mut SimRng,
    ) -> PortResult<PortFlowRun> {
        let departures = DayIndex::build(trips, |t| t.departure_time.date());
        let arrivals = DayIndex::build(trips, |t| t.arrival_time.date());
        let (Some(first), Some(last)) = (departures.first_day(), arrivals.last_day()) else {
            tracing::warn!("train log is empty; port log will be empty");
            return Ok(PortFlowRun { rows: Vec::new(), yards });
        };
        let calendar = SimCalendar::spanning(first, last);
        tracing::info!(ports = yards.len(), trips = trips.len(), window = %calendar, "port stage started");

        let mut rows = Vec::with_capacity(calendar.days as usize * yards.len());
        for date in calendar.dates() {
            let last_day = date == last;
            for yard in &mut yards {
                let out: Vec<Movement> = departures
                    .on(date)
                    .iter()
                    .map(|&i| &trips[i])
                    .filter(|t| t.source == yard.name)
                    .map(movement)
                    .collect();
                let inn: Vec<Movement> = arrivals
                    .on(date)
                    .iter()
                    .map(|&i| &trips[i])
                    .filter(|t| t.destination == yard.name)
                    .map(movement)
                    .collect();

                let flows = yard.step(&out, &inn, last_day, &self.policy, rng);
                let weather = rng.choose_weighted_index(&WEATHER_WEIGHTS).unwrap_or(0) as u32;
                rows.push(log_row(date, &yard.name, &flows, weather, &self.policy));
            }
            tracing::debug!(%date, "port day simulated");
        }

        for yard in &yards {
            for material in Material::RAW {
                tracing::debug!(
                    port = %yard.name,
                    %material,
                    ceiling = yard.ledger().ceiling(material),
                    received = yard.ledger().received(material),
                    "port ceiling usage"
                );
            }
        }
        tracing::info!(rows = rows.len(), "port stage finished");
        Ok(PortFlowRun { rows, yards })
    }
}
