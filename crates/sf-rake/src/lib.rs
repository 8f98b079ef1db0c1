//! `sf-rake`: rail transport between plants, mines, and ports.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`params`]    | `TransportParams`, per-material `MaterialRates`               |
//! | [`state`]     | `RakeStatus`, derived from availability against an instant    |
//! | [`pool`]      | `RakePool`: SoA rake state + the assignment policy           |
//! | [`trip`]      | `Trip`, time and cost breakdowns, load splitting              |
//! | [`simulator`] | `RakeTransportSimulator`: plant log in, train log out        |
//! | [`error`]     | `TransportError`, `TransportResult<T>`                        |
//!
//! # Rake model
//!
//! A rake is created once with a random location and an availability instant
//! at the beginning of time.  Each trip assignment moves it exactly once:
//!
//! 1. [`RakePool::assign`] picks a rake for `(source, desired_departure)` and
//!    may defer the departure to the rake's availability instant.
//! 2. The trip's timing is computed from the (possibly deferred) departure.
//! 3. [`RakePool::dispatch`] sets `location = destination` and
//!    `available_at = arrival`.
//!
//! A rake is never assigned a departure earlier than its availability, so no
//! rake carries two overlapping trips.

pub mod error;
pub mod params;
pub mod pool;
pub mod simulator;
pub mod state;
pub mod trip;


pub use error::{TransportError, TransportResult};
pub use params::{MaterialRates, TransportParams};
pub use pool::{RakeAssignment, RakePool};
pub use simulator::{RakeTransportSimulator, TransportRun};
pub use state::RakeStatus;
pub use trip::{Trip, TripCosts, TripTimes, split_quantity};
