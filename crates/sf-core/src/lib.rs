//! `sf-core`: foundational types for the `steelflow` simulation.
//!
//! This crate is a dependency of every other `sf-*` crate.  It has no `sf-*`
//! dependencies and few external ones (`rand`, `chrono`, `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `LocationId`, `PlantId`, `RakeId`                     |
//! | [`calendar`]    | `SimCalendar`, hour/duration conversion, timestamps   |
//! | [`rng`]         | `SimRng` (explicitly seeded, one per stage)           |
//! | [`material`]    | `Material`, `MaterialFlow`                            |
//! | [`units`]       | tonnage constants and 2-decimal rounding              |
//! | [`error`]       | `SfError`, `SfResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types and the |
//! |         | [`calendar::datetime_format`] field adapter.               |

pub mod calendar;
pub mod error;
pub mod ids;
pub mod material;
pub mod rng;
pub mod units;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use calendar::SimCalendar;
pub use error::{SfError, SfResult};
pub use ids::{LocationId, PlantId, RakeId};
pub use material::{Material, MaterialFlow};
pub use rng::SimRng;
pub use units::{round2, TONNES_PER_MT};
