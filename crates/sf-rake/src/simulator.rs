//! The rake transport stage.
//!
//! Plant rows are processed by date, then by plant declaration order; within
//! a row Coal, Limestone, Steel.  Each positive quantity is split into train
//! loads and every load becomes one trip.
//!
//! Per trip the draws are, in order: endpoint choice, departure time (and
//! lead days for inbound), rake choice, trip times, trip costs.

use chrono::Duration;

use sf_core::calendar::random_time_in_day;
use sf_core::{Material, MaterialFlow, PlantId, SimRng};
use sf_network::{Network, PlantSpec};
use sf_table::{PlantLogRow, TripRow};

use crate::trip::split_quantity;
use crate::{
    RakePool, TransportError, TransportParams, TransportResult, Trip, TripCosts, TripTimes,
};

/// Output of one transport run.
#[derive(Debug)]
pub struct TransportRun {
    pub trips:    Vec<TripRow>,
    /// Trips whose departure was pushed back to the earliest free rake.
    pub deferred: usize,
    /// Final rake state.
    pub pool:     RakePool,
}

/// Converts the plant log into the train log.
#[derive(Clone, Debug, Default)]
pub struct RakeTransportSimulator {
    params: TransportParams,
}

/// Trip-id prefix: first three letters of the plant name, upper-cased.
fn trip_prefix(plant_name: &str) -> String {
    plant_name.chars().take(3).collect::<String>().to_uppercase()
}

impl RakeTransportSimulator {
    pub fn new(params: TransportParams) -> TransportResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &TransportParams {
        &self.params
    }

    /// Run with a fresh pool drawn from `rng`.
    pub fn run(
        &self,
        network: &Network,
        plant_rows: &[PlantLogRow],
        rng: &mut SimRng,
    ) -> TransportResult<TransportRun> {
        let pool = RakePool::new(self.params.pool_size, network, rng)?;
        self.run_with_pool(network, plant_rows, pool, rng)
    }

    /// Run against an explicit starting pool.
    pub fn run_with_pool(
        &self,
        network:    &Network,
        plant_rows: &[PlantLogRow],
        mut pool:   RakePool,
        rng:        &mut SimRng,
    ) -> TransportResult<TransportRun> {
        tracing::info!(plant_rows = plant_rows.len(), rakes = pool.len(), "transport stage started");

        let mut ordered: Vec<(PlantId, &PlantLogRow)> = plant_rows
            .iter()
            .map(|row| {
                network
                    .plant_by_name(&row.plant_name)
                    .map(|id| (id, row))
                    .ok_or_else(|| TransportError::UnknownPlant(row.plant_name.clone()))
            })
            .collect::<TransportResult<_>>()?;
        ordered.sort_by_key(|&(id, row)| (row.date, id));

        let mut counters = vec![0u32; network.plant_count()];
        let mut trips = Vec::new();
        let mut deferred = 0usize;

        for (plant_id, row) in ordered {
            let plant = network
                .plant(plant_id)
                .ok_or(sf_core::SfError::PlantNotFound(plant_id))?;
            let prefix = trip_prefix(&plant.name);

            for material in Material::ALL {
                let quantity = row.rail_quantity(material);
                if !(quantity > 0.0) {
                    continue;
                }
                let rates = self.params.rates(material);
                for load in split_quantity(quantity, rates.capacity, self.params.load_fraction, rng) {
                    let counter = &mut counters[plant_id.index()];
                    *counter += 1;
                    let trip_id = format!("{prefix}_{:04}", *counter);

                    let trip = self.plan_trip(network, plant, material, load, row, trip_id, &pool, rng)?;
                    if trip.deferred {
                        deferred += 1;
                        tracing::debug!(trip = %trip.trip_id, departure = %trip.departure, "departure deferred");
                    }
                    pool.dispatch(trip.rake, trip.destination, trip.arrival());
                    trips.push(trip.to_row(network));
                }
            }
        }

        if deferred > 0 {
            tracing::warn!(deferred, trips = trips.len(), "trips deferred for lack of a free rake");
        }
        tracing::info!(trips = trips.len(), deferred, "transport stage finished");
        Ok(TransportRun { trips, deferred, pool })
    }

    #[allow(clippy::too_many_arguments)]
    fn plan_trip(
        &self,
        network:  &Network,
        plant:    &PlantSpec,
        material: Material,
        load:     f64,
        row:      &PlantLogRow,
        trip_id:  String,
        pool:     &RakePool,
        rng:      &mut SimRng,
    ) -> TransportResult<Trip> {
        let routes = plant.routes(material);
        let (source, destination, distance_km, desired) = match material.flow() {
            MaterialFlow::Inbound => {
                let weights: Vec<f64> = routes
                    .iter()
                    .map(|r| network.kind(r.location).map_or(0.0, |k| k.source_weight()))
                    .collect();
                let route = rng
                    .choose_weighted_index(&weights)
                    .and_then(|i| routes.get(i))
                    .ok_or_else(|| TransportError::InvalidParams(format!(
                        "{} has no usable {material} source", plant.name
                    )))?;
                let (lo, hi) = self.params.inbound_lead_days;
                let at = random_time_in_day(row.date, rng);
                let lead: u32 = rng.gen_range(lo..=hi);
                let desired = at - Duration::days(i64::from(lead));
                (route.location, plant.location, route.distance_km, desired)
            }
            MaterialFlow::Outbound => {
                let route = rng.choose(routes).ok_or_else(|| {
                    TransportError::InvalidParams(format!("{} has no export port", plant.name))
                })?;
                let desired = random_time_in_day(row.date, rng);
                (plant.location, route.location, route.distance_km, desired)
            }
        };

        let assignment = pool.assign(source, desired, rng)?;
        let rates = self.params.rates(material);
        let times = TripTimes::sample(load, distance_km, rates, &self.params, rng);
        let via_port = network.is_port(source) || network.is_port(destination);
        let costs = TripCosts::sample(load, distance_km, rates, via_port, rng);

        Ok(Trip {
            trip_id,
            rake:               assignment.rake,
            rake_number:        pool.number(assignment.rake),
            material,
            source,
            destination,
            quantity:           load,
            distance_km,
            availability_index: assignment.availability_index,
            times,
            costs,
            departure:          assignment.departure,
            deferred:           assignment.deferred,
        })
    }
}
