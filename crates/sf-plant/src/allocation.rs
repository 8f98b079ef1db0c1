//! Yearly per-plant shares of the annual totals.
//!
//! Steel export is split in proportion to each plant's historical export and
//! capped at the plant's yearly capacity.  Coal and limestone then follow the
//! allocated steel share, so a capped plant also receives less raw material.

use sf_core::{PlantId, TONNES_PER_MT, round2};
use sf_network::Network;

use crate::AnnualTotals;

/// One plant's yearly figures, all in tonnes.
#[derive(Clone, Debug, PartialEq)]
pub struct PlantAllocation {
    pub plant:            PlantId,
    pub yearly_export:    f64,
    pub yearly_coal:      f64,
    pub yearly_limestone: f64,
}

/// Split `totals` across the network's plants.
pub fn allocate(network: &Network, totals: &AnnualTotals) -> Vec<PlantAllocation> {
    let plants = network.plants();
    let total_past: f64 = plants.iter().map(|p| p.past_export).sum();
    let equal = 1.0 / plants.len().max(1) as f64;

    let exports: Vec<f64> = plants
        .iter()
        .map(|p| {
            let share = if total_past > 0.0 { p.past_export / total_past } else { equal };
            let export = round2(totals.steel_tonnes() * share);
            let cap = p.capacity_mtpa * TONNES_PER_MT;
            if export > cap {
                tracing::warn!(
                    plant = %p.name,
                    allocated = export,
                    capacity = cap,
                    "steel export allocation exceeds yearly capacity; capped"
                );
                cap
            } else {
                export
            }
        })
        .collect();

    let total_export: f64 = exports.iter().sum();
    plants
        .iter()
        .zip(&exports)
        .map(|(p, &yearly_export)| {
            let share = if total_export > 0.0 {
                yearly_export / total_export
            } else if total_past > 0.0 {
                p.past_export / total_past
            } else {
                equal
            };
            PlantAllocation {
                plant:            p.id,
                yearly_export,
                yearly_coal:      round2(totals.coal_tonnes() * share),
                yearly_limestone: round2(totals.limestone_tonnes() * share),
            }
        })
        .collect()
}
