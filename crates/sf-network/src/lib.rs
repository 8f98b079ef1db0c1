//! `sf-network`: the physical network the simulation moves material through.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`location`]  | `Location`, `LocationKind` (plant / mine / port)           |
//! | [`network`]   | `Network`, `PlantSpec`, `Route`: the immutable catalog    |
//! | [`builder`]   | `NetworkBuilder`, `PlantConfig`, `RouteConfig`             |
//! | [`catalog`]   | the built-in five-plant eastern-India catalog              |
//! | [`error`]     | `NetworkError`                                             |
//!
//! Every plant carries three route lists: coal sources, limestone sources,
//! and steel export ports, each with a rail distance in kilometres.

pub mod builder;
pub mod catalog;
pub mod error;
pub mod location;
pub mod network;

#[cfg(test)]
mod tests;

pub use builder::{NetworkBuilder, PlantConfig, RouteConfig};
pub use catalog::default_plants;
pub use error::{NetworkError, NetworkResult};
pub use location::{Location, LocationKind};
pub use network::{Network, PlantSpec, Route};
