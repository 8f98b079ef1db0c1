//! `sf-port`: port storage replayed against the train log.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`policy`]      | `PortPolicy`: per-material triggers, capacities, ranges   |
//! | [`ledger`]      | `CeilingLedger`: scheduled ceilings vs. policy receipts   |
//! | [`day_index`]   | `DayIndex`: trips bucketed by calendar date               |
//! | [`yard`]        | `PortYard`: one port's storage and its daily step         |
//! | [`simulator`]   | `PortFlowSimulator`: the day × port loop                  |
//! | [`tariff`]      | `PortTariffGenerator`: static handling/storage tariffs    |
//! | [`error`]       | `PortError`, `PortResult<T>`                               |
//!
//! # Conservation
//!
//! Storage never leaves `[0, max_storage]`: injections are capped by the
//! free room, departures by what is stored, and arrivals past capacity are
//! recorded as passing straight through.  Raw material received by a port
//! (rail arrivals plus the catch-up and threshold injections) is capped by
//! the ceiling: the total the train log schedules to leave that port.

pub mod day_index;
pub mod error;
pub mod ledger;
pub mod policy;
pub mod simulator;
pub mod tariff;
pub mod yard;

#[cfg(test)]
mod tests;

pub use day_index::DayIndex;
pub use error::{PortError, PortResult};
pub use ledger::CeilingLedger;
pub use policy::{MaterialPolicy, PortPolicy};
pub use simulator::{PortFlowRun, PortFlowSimulator, WEATHER_WEIGHTS};
pub use tariff::PortTariffGenerator;
pub use yard::{DayFlows, Movement, PortYard};
