//! Trips and their time and cost breakdowns.

use chrono::NaiveDateTime;

use sf_core::calendar::hours;
use sf_core::{LocationId, Material, RakeId, SimRng, round2};
use sf_network::Network;
use sf_table::TripRow;

use crate::{MaterialRates, TransportParams};

/// Split `quantity` into train loads of `U(lo, hi) × capacity`, the last load
/// taking what remains.  Loads are rounded to two decimals and the rounded
/// value is what gets subtracted, so the loads sum to `quantity` exactly at
/// two-decimal precision.
pub fn split_quantity(
    quantity:      f64,
    capacity:      f64,
    load_fraction: (f64, f64),
    rng:           &mut SimRng,
) -> Vec<f64> {
    let mut loads = Vec::new();
    let mut remaining = round2(quantity);
    while remaining > 0.0 {
        let load = round2((rng.uniform(load_fraction.0, load_fraction.1) * capacity).min(remaining));
        if load <= 0.0 {
            break;
        }
        loads.push(load);
        remaining = round2(remaining - load);
    }
    loads
}

// ── Time and cost ─────────────────────────────────────────────────────────────

/// Hours spent on one trip, unrounded.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TripTimes {
    pub base:      f64,
    pub loading:   f64,
    pub unloading: f64,
    pub delay:     f64,
}

impl TripTimes {
    /// Draws, in order: delay, loading jitter, unloading jitter.
    pub fn sample(
        quantity:    f64,
        distance_km: f64,
        rates:       &MaterialRates,
        params:      &TransportParams,
        rng:         &mut SimRng,
    ) -> Self {
        let base = distance_km / params.speed_kmph;
        let delay = rng.uniform(params.delay_hours.0, params.delay_hours.1);
        let loading = quantity * rates.loading_rate * rng.uniform(0.9, 1.1);
        let unloading = quantity * rates.unloading_rate * rng.uniform(0.9, 1.1);
        Self { base, loading, unloading, delay }
    }

    #[inline]
    pub fn total(&self) -> f64 {
        self.base + self.delay + self.loading + self.unloading
    }
}

/// Per-tonne and total trip cost in INR, unrounded.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TripCosts {
    pub freight_per_tonne:  f64,
    pub handling_per_tonne: f64,
    pub total:              f64,
}

impl TripCosts {
    /// Handling applies when either end of the trip is a port.
    pub fn sample(
        quantity:    f64,
        distance_km: f64,
        rates:       &MaterialRates,
        via_port:    bool,
        rng:         &mut SimRng,
    ) -> Self {
        let freight_per_tonne = rates.freight_rate * distance_km * rng.uniform(0.95, 1.05);
        let handling_per_tonne =
            if via_port { rates.handling_cost * rng.uniform(0.9, 1.1) } else { 0.0 };
        Self {
            freight_per_tonne,
            handling_per_tonne,
            total: (freight_per_tonne + handling_per_tonne) * quantity,
        }
    }
}

// ── Trip ──────────────────────────────────────────────────────────────────────

/// One rail movement.  Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct Trip {
    pub trip_id:            String,
    pub rake:               RakeId,
    pub rake_number:        u32,
    pub material:           Material,
    pub source:             LocationId,
    pub destination:        LocationId,
    pub quantity:           f64,
    pub distance_km:        f64,
    pub availability_index: f64,
    pub times:              TripTimes,
    pub costs:              TripCosts,
    pub departure:          NaiveDateTime,
    pub deferred:           bool,
}

impl Trip {
    /// Total trip time as recorded, two decimals.
    #[inline]
    pub fn total_hours(&self) -> f64 {
        round2(self.times.total())
    }

    /// `departure + total_hours`.  The rounded total is a whole number of
    /// 36-second steps, so the arrival lands on a whole second.
    #[inline]
    pub fn arrival(&self) -> NaiveDateTime {
        self.departure + hours(self.total_hours())
    }

    pub fn to_row(&self, network: &Network) -> TripRow {
        TripRow {
            trip_id:                 self.trip_id.clone(),
            rake_id:                 self.rake_number,
            material_flow:           self.material.flow(),
            material:                self.material,
            source:                  network.name(self.source).to_owned(),
            destination:             network.name(self.destination).to_owned(),
            quantity_tonnes:         round2(self.quantity),
            distance_km:             round2(self.distance_km),
            rake_availability_index: self.availability_index,
            base_time_h:             round2(self.times.base),
            loading_time_h:          round2(self.times.loading),
            unloading_time_h:        round2(self.times.unloading),
            delay_h:                 round2(self.times.delay),
            total_time_h:            self.total_hours(),
            departure_time:          self.departure,
            arrival_time:            self.arrival(),
            rail_freight_inr_tonne:  round2(self.costs.freight_per_tonne),
            port_handling_inr_tonne: round2(self.costs.handling_per_tonne),
            total_trip_cost_inr:     round2(self.costs.total),
        }
    }
}
