//! Row types of the six stage tables.
//!
//! | Row type              | Table           | File stem              | Producer    |
//! |-----------------------|-----------------|------------------------|-------------|
//! | [`PlantLogRow`]       | `plants`        | `plant_log`            | `plants`    |
//! | [`TripRow`]           | `trains`        | `train_log`            | `trains`    |
//! | [`PortLogRow`]        | `ports`         | `port_log`             | `ports`     |
//! | [`PortTariffRow`]     | `tariffs`       | `port_tariffs`         | `tariffs`   |
//! | [`VesselContractRow`] | `vessel_costs`  | `vessel_cost`          | `contracts` |
//! | [`VesselDelayRow`]    | `delay_history` | `vessel_delay_history` | `vessels`   |
//!
//! Quantities are stored already rounded to two decimals; the rows do no
//! arithmetic of their own.

mod plant;
mod port;
mod trip;
mod vessel;

pub use plant::PlantLogRow;
pub use port::{PortLogRow, PortTariffRow};
pub use trip::TripRow;
pub use vessel::{VesselContractRow, VesselDelayRow};
