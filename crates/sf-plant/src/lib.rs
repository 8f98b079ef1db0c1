//! `sf-plant`: the first pipeline stage.
//!
//! Turns three annual figures (coal, limestone, steel in Mt) into a daily
//! stock log per plant:
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`totals`]      | `AnnualTotals`, lenient parsing with per-figure defaults  |
//! | [`allocation`]  | yearly export / raw-material shares per plant             |
//! | [`series`]      | daily export series and randomised train-arrival series   |
//! | [`simulator`]   | `PlantStockSimulator`, the day loop producing `PlantLogRow`s |
//!
//! Per plant and day:
//!
//! ```text
//! coal_required = export × 1.0          limestone_required = export × 0.43
//! consumed      = required × U(0.95, 1.05)
//! min_target    = max_stock × U(0.20, 0.30)
//! eod_stock     = clamp(bod_stock + arrived − consumed, min_target, max_stock)
//! ```

pub mod allocation;
pub mod error;
pub mod series;
pub mod simulator;
pub mod totals;

#[cfg(test)]
mod tests;

pub use allocation::{PlantAllocation, allocate};
pub use error::{PlantError, PlantResult};
pub use simulator::{PlantParams, PlantStockSimulator};
pub use totals::{AnnualTotals, TotalValue};
