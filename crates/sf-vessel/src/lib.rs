//! `sf-vessel`: ocean-side reference data and berthing delays.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`contract`]  | Port catalogues and `ContractGenerator`                      |
//! | [`delay`]     | `BerthContext`, `DelayModel`: the delay formula             |
//! | [`simulator`] | `VesselDelaySimulator`: port log + contracts in, history out|
//! | [`error`]     | `VesselError`, `VesselResult<T>`                             |
//!
//! The contract table is static: it does not depend on any earlier stage.
//! The delay history reads the port log for each port-day's steel
//! utilisation and weather index.

pub mod contract;
pub mod delay;
pub mod error;
pub mod simulator;

#[cfg(test)]
mod tests;

pub use contract::{ContractGenerator, ContractParams, USD_TO_INR};
pub use delay::{BerthContext, CRANE_WEIGHTS, DelayModel, MAX_CRANES};
pub use error::{VesselError, VesselResult};
pub use simulator::{VesselDelaySimulator, VesselParams};
