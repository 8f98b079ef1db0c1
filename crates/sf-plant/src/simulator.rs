//! The plant stock day loop.
//!
//! # Draw order
//!
//! For a fixed seed the output is reproducible.  Draws happen in this order:
//!
//! 1. initial coal and limestone stock, per plant;
//! 2. per plant: export series, coal arrivals, limestone arrivals;
//! 3. per day, per plant: coal consumption jitter, limestone consumption
//!    jitter, minimum-stock ratio.

use serde::Deserialize;

use sf_core::{SimCalendar, SimRng, TONNES_PER_MT, round2};
use sf_network::{Network, PlantSpec};
use sf_table::PlantLogRow;

use crate::series::{daily_exports, train_arrivals};
use crate::{AnnualTotals, PlantAllocation, PlantError, PlantResult, allocate};

/// Coal consumed per tonne of steel.
pub const COAL_PER_STEEL: f64 = 1.0;
/// Limestone consumed per tonne of steel.
pub const LIMESTONE_PER_STEEL: f64 = 0.43;

/// Tunable plant-stage parameters.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlantParams {
    /// Smallest raw-material train load, tonnes.
    pub min_per_train:    f64,
    /// Largest raw-material train load, tonnes.
    pub max_per_train:    f64,
    /// Stock capacity in days of average steel output.
    pub stock_cover_days: f64,
    /// Initial stock as a fraction of capacity.
    pub initial_stock:    (f64, f64),
    /// Per-day minimum stock target as a fraction of capacity.
    pub min_stock_ratio:  (f64, f64),
}

impl Default for PlantParams {
    fn default() -> Self {
        Self {
            min_per_train:    5_000.0,
            max_per_train:    10_000.0,
            stock_cover_days: 10.0,
            initial_stock:    (0.3, 0.7),
            min_stock_ratio:  (0.2, 0.3),
        }
    }
}

impl PlantParams {
    pub fn validate(&self) -> PlantResult<()> {
        if !(self.min_per_train > 0.0 && self.max_per_train >= self.min_per_train) {
            return Err(PlantError::InvalidParams(format!(
                "train load range [{}, {}] must be positive and ordered",
                self.min_per_train, self.max_per_train
            )));
        }
        if !(self.stock_cover_days > 0.0) {
            return Err(PlantError::InvalidParams(format!(
                "stock_cover_days must be positive, got {}",
                self.stock_cover_days
            )));
        }
        let (lo, hi) = self.min_stock_ratio;
        if !(0.0..=1.0).contains(&lo) || !(lo..=1.0).contains(&hi) {
            return Err(PlantError::InvalidParams(format!(
                "min_stock_ratio ({lo}, {hi}) must lie in [0, 1]"
            )));
        }
        Ok(())
    }
}

/// Mutable per-plant state during the day loop.
struct PlantState<'n> {
    spec:               &'n PlantSpec,
    max_coal:           f64,
    max_limestone:      f64,
    coal:               f64,
    limestone:          f64,
    exports:            Vec<f64>,
    coal_arrivals:      Vec<f64>,
    limestone_arrivals: Vec<f64>,
    cumulative_export:  f64,
}

/// Produces the plant stock log.
#[derive(Clone, Debug, Default)]
pub struct PlantStockSimulator {
    params: PlantParams,
}

impl PlantStockSimulator {
    pub fn new(params: PlantParams) -> PlantResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &PlantParams {
        &self.params
    }

    /// Stock capacities `(coal, limestone)` for a plant's allocation.
    pub fn stock_limits(&self, allocation: &PlantAllocation, days: u32) -> (f64, f64) {
        let avg_daily_steel = allocation.yearly_export / f64::from(days.max(1));
        let max_coal = avg_daily_steel * COAL_PER_STEEL * self.params.stock_cover_days;
        let max_limestone = avg_daily_steel * LIMESTONE_PER_STEEL * self.params.stock_cover_days;
        (max_coal, max_limestone)
    }

    /// Simulate every plant of `network` over `calendar`.
    ///
    /// Rows are ordered by date, then by plant declaration order.
    pub fn run(
        &self,
        network:  &Network,
        totals:   &AnnualTotals,
        calendar: SimCalendar,
        rng:      &mut SimRng,
    ) -> PlantResult<Vec<PlantLogRow>> {
        if calendar.is_empty() {
            return Err(PlantError::EmptyCalendar);
        }
        if network.plant_count() == 0 {
            return Err(PlantError::NoPlants);
        }
        let days = calendar.days as usize;
        let p = &self.params;

        let allocations = allocate(network, totals);
        tracing::info!(
            plants = allocations.len(),
            days,
            steel_t = totals.steel_tonnes(),
            "plant stage started"
        );

        let mut states: Vec<PlantState<'_>> = Vec::with_capacity(allocations.len());
        for alloc in &allocations {
            let spec = network
                .plant(alloc.plant)
                .ok_or(sf_core::SfError::PlantNotFound(alloc.plant))?;
            let (max_coal, max_limestone) = self.stock_limits(alloc, calendar.days);
            let coal = round2(rng.uniform(p.initial_stock.0, p.initial_stock.1) * max_coal);
            let limestone = round2(rng.uniform(p.initial_stock.0, p.initial_stock.1) * max_limestone);
            tracing::debug!(
                plant = %spec.name,
                yearly_export = alloc.yearly_export,
                yearly_coal = alloc.yearly_coal,
                yearly_limestone = alloc.yearly_limestone,
                "plant allocation"
            );
            states.push(PlantState {
                spec,
                max_coal,
                max_limestone,
                coal,
                limestone,
                exports: Vec::new(),
                coal_arrivals: Vec::new(),
                limestone_arrivals: Vec::new(),
                cumulative_export: 0.0,
            });
        }

        for (state, alloc) in states.iter_mut().zip(&allocations) {
            state.exports = daily_exports(alloc.yearly_export, days, rng);
            state.coal_arrivals =
                train_arrivals(alloc.yearly_coal, days, p.min_per_train, p.max_per_train, rng);
            state.limestone_arrivals =
                train_arrivals(alloc.yearly_limestone, days, p.min_per_train, p.max_per_train, rng);
        }

        let mut rows = Vec::with_capacity(days * states.len());
        for (day, date) in calendar.dates().enumerate() {
            for s in &mut states {
                let export = s.exports[day];
                s.cumulative_export += export;
                let yearly_capacity = s.spec.capacity_mtpa * TONNES_PER_MT;
                let cumulative_utilization = s.cumulative_export / yearly_capacity * 100.0;

                let coal_required = round2(export * COAL_PER_STEEL);
                let limestone_required = round2(export * LIMESTONE_PER_STEEL);
                let consumed_coal = round2(coal_required * rng.uniform(0.95, 1.05));
                let consumed_limestone = round2(limestone_required * rng.uniform(0.95, 1.05));

                let ratio = rng.uniform(p.min_stock_ratio.0, p.min_stock_ratio.1);
                let min_coal = s.max_coal * ratio;
                let min_limestone = s.max_limestone * ratio;

                let coal_bod = s.coal;
                let limestone_bod = s.limestone;
                let coal_arrived = s.coal_arrivals[day];
                let limestone_arrived = s.limestone_arrivals[day];
                s.coal = (coal_bod + coal_arrived - consumed_coal).clamp(min_coal, s.max_coal);
                s.limestone = (limestone_bod + limestone_arrived - consumed_limestone)
                    .clamp(min_limestone, s.max_limestone);

                let capacity = s.max_coal + s.max_limestone;
                let stock_utilization = if capacity > 0.0 {
                    (s.coal + s.limestone) / capacity * 100.0
                } else {
                    0.0
                };

                rows.push(PlantLogRow {
                    date,
                    plant_id:                                s.spec.code.clone(),
                    plant_name:                              s.spec.name.clone(),
                    max_operating_capacity_mtpa:             round2(s.spec.capacity_mtpa),
                    cumulative_capacity_utilization_percent: round2(cumulative_utilization),
                    stock_utilization_percent:               round2(stock_utilization),
                    min_stock_target_tonnes:                 round2(min_coal),
                    coal_bod_stock_tonnes:                   round2(coal_bod),
                    limestone_bod_stock_tonnes:              round2(limestone_bod),
                    coal_required_tonnes:                    coal_required,
                    limestone_required_tonnes:               limestone_required,
                    consumed_coal_tonnes:                    consumed_coal,
                    consumed_limestone_tonnes:               consumed_limestone,
                    coal_arrived_tonnes:                     coal_arrived,
                    limestone_arrived_tonnes:                limestone_arrived,
                    coal_eod_stock_tonnes:                   round2(s.coal),
                    limestone_eod_stock_tonnes:              round2(s.limestone),
                    steel_exported_tonnes:                   export,
                });
            }
            tracing::debug!(%date, "plant day simulated");
        }

        let exported: f64 = states.iter().map(|s| s.cumulative_export).sum();
        tracing::info!(rows = rows.len(), exported_t = round2(exported), "plant stage finished");
        Ok(rows)
    }
}
