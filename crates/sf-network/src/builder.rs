//! Network construction from plain configuration records.

use rustc_hash::FxHashMap;
use serde::Deserialize;

use sf_core::{LocationId, PlantId};

use crate::{Location, LocationKind, Network, NetworkError, NetworkResult, PlantSpec, Route};

/// A route as written in configuration.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct RouteConfig {
    pub name:        String,
    pub kind:        LocationKind,
    pub distance_km: f64,
}

impl RouteConfig {
    pub fn new(name: &str, kind: LocationKind, distance_km: f64) -> Self {
        Self { name: name.to_owned(), kind, distance_km }
    }
}

/// A plant as written in configuration (`[[plants]]` in the TOML file).
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct PlantConfig {
    pub id:                String,
    pub name:              String,
    pub capacity_mtpa:     f64,
    pub past_export:       f64,
    pub coal_sources:      Vec<RouteConfig>,
    pub limestone_sources: Vec<RouteConfig>,
    pub export_ports:      Vec<RouteConfig>,
}

/// Incrementally builds a [`Network`].
///
/// Locations are interned by name; declaring the same name twice with
/// different kinds is an error.
#[derive(Default)]
pub struct NetworkBuilder {
    locations: Vec<Location>,
    by_name:   FxHashMap<String, LocationId>,
    plants:    Vec<PlantSpec>,
}

impl NetworkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pre-populated with every plant in `configs`.
    pub fn from_configs(configs: &[PlantConfig]) -> NetworkResult<Self> {
        let mut builder = Self::new();
        for config in configs {
            builder.add_plant(config)?;
        }
        Ok(builder)
    }

    /// Intern a location, returning its ID.
    pub fn add_location(&mut self, name: &str, kind: LocationKind) -> NetworkResult<LocationId> {
        if let Some(&id) = self.by_name.get(name) {
            let existing = self.locations[id.index()].kind;
            if existing != kind {
                return Err(NetworkError::KindConflict {
                    name: name.to_owned(),
                    existing,
                    requested: kind,
                });
            }
            return Ok(id);
        }
        let id = LocationId::try_from(self.locations.len())
            .map_err(|_| NetworkError::TooManyLocations)?;
        self.locations.push(Location { name: name.to_owned(), kind });
        self.by_name.insert(name.to_owned(), id);
        Ok(id)
    }

    /// Add a plant together with all of its route endpoints.
    pub fn add_plant(&mut self, config: &PlantConfig) -> NetworkResult<&mut Self> {
        if self.plants.iter().any(|p| p.name == config.name || p.code == config.id) {
            return Err(NetworkError::DuplicatePlant(config.name.clone()));
        }
        if !(config.capacity_mtpa > 0.0) {
            return Err(NetworkError::InvalidPlant {
                plant:  config.name.clone(),
                reason: format!("capacity_mtpa must be positive, got {}", config.capacity_mtpa),
            });
        }
        if !(config.past_export >= 0.0) {
            return Err(NetworkError::InvalidPlant {
                plant:  config.name.clone(),
                reason: format!("past_export must be non-negative, got {}", config.past_export),
            });
        }
        for (routes, what) in [
            (&config.coal_sources, "coal sources"),
            (&config.limestone_sources, "limestone sources"),
            (&config.export_ports, "export ports"),
        ] {
            if routes.is_empty() {
                return Err(NetworkError::NoRoutes { plant: config.name.clone(), what });
            }
        }

        if let Some(r) = config.export_ports.iter().find(|r| r.kind != LocationKind::Port) {
            return Err(NetworkError::InvalidPlant {
                plant:  config.name.clone(),
                reason: format!("export route {:?} is a {}, not a port", r.name, r.kind),
            });
        }

        let id = PlantId::try_from(self.plants.len())
            .map_err(|_| NetworkError::TooManyLocations)?;
        let location = self.add_location(&config.name, LocationKind::Plant)?;
        let coal_sources      = self.intern_routes(&config.coal_sources)?;
        let limestone_sources = self.intern_routes(&config.limestone_sources)?;
        let export_ports      = self.intern_routes(&config.export_ports)?;

        self.plants.push(PlantSpec {
            id,
            code: config.id.clone(),
            name: config.name.clone(),
            location,
            capacity_mtpa: config.capacity_mtpa,
            past_export: config.past_export,
            coal_sources,
            limestone_sources,
            export_ports,
        });
        Ok(self)
    }

    fn intern_routes(&mut self, routes: &[RouteConfig]) -> NetworkResult<Vec<Route>> {
        routes
            .iter()
            .map(|r| {
                Ok(Route {
                    location:    self.add_location(&r.name, r.kind)?,
                    distance_km: r.distance_km,
                })
            })
            .collect()
    }

    pub fn build(self) -> Network {
        tracing::debug!(
            locations = self.locations.len(),
            plants = self.plants.len(),
            "network built"
        );
        Network {
            locations: self.locations,
            by_name:   self.by_name,
            plants:    self.plants,
        }
    }
}
