//! The immutable network catalog.
//!
//! # Data layout
//!
//! Locations live in one `Vec` indexed by `LocationId`, with an FxHash name
//! index for resolving names read back from stage tables.  Plants reference
//! locations by ID; every route is a `(LocationId, distance_km)` pair.
//!
//! Do not construct directly; use [`NetworkBuilder`][crate::NetworkBuilder].

use rustc_hash::FxHashMap;

use sf_core::{LocationId, Material, PlantId};

use crate::{Location, LocationKind};

/// One rail leg between a plant and another location.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Route {
    pub location:    LocationId,
    pub distance_km: f64,
}

/// A steel plant and its rail connections.
#[derive(Clone, Debug)]
pub struct PlantSpec {
    pub id:                PlantId,
    /// Public plant code (`P001`).
    pub code:              String,
    pub name:              String,
    /// The plant's own node in the location table.
    pub location:          LocationId,
    /// Nominal capacity in million tonnes per year.
    pub capacity_mtpa:     f64,
    /// Historical export volume; only its share of the total matters.
    pub past_export:       f64,
    pub coal_sources:      Vec<Route>,
    pub limestone_sources: Vec<Route>,
    pub export_ports:      Vec<Route>,
}

impl PlantSpec {
    /// Candidate routes for `material`: sources for raw materials, export
    /// ports for steel.
    pub fn routes(&self, material: Material) -> &[Route] {
        match material {
            Material::Coal      => &self.coal_sources,
            Material::Limestone => &self.limestone_sources,
            Material::Steel     => &self.export_ports,
        }
    }
}

/// Plants, mines, and ports with their rail routes.
#[derive(Clone, Debug)]
pub struct Network {
    pub(crate) locations: Vec<Location>,
    pub(crate) by_name:   FxHashMap<String, LocationId>,
    pub(crate) plants:    Vec<PlantSpec>,
}

impl Network {
    /// The built-in five-plant catalog.
    pub fn default_catalog() -> crate::NetworkResult<Self> {
        Ok(crate::NetworkBuilder::from_configs(&crate::default_plants())?.build())
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    pub fn plant_count(&self) -> usize {
        self.plants.len()
    }

    // ── Locations ─────────────────────────────────────────────────────────

    #[inline]
    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(id.index())
    }

    /// Name of `id`, or `""` for an unknown ID.
    #[inline]
    pub fn name(&self, id: LocationId) -> &str {
        self.location(id).map_or("", |l| l.name.as_str())
    }

    #[inline]
    pub fn kind(&self, id: LocationId) -> Option<LocationKind> {
        self.location(id).map(|l| l.kind)
    }

    #[inline]
    pub fn is_port(&self, id: LocationId) -> bool {
        self.kind(id) == Some(LocationKind::Port)
    }

    /// Resolve a location by exact name.
    pub fn lookup(&self, name: &str) -> Option<LocationId> {
        self.by_name.get(name).copied()
    }

    /// All location IDs in declaration order.
    pub fn location_ids(&self) -> impl Iterator<Item = LocationId> + '_ {
        (0..self.locations.len()).map(|i| LocationId(i as u16))
    }

    /// Port IDs ordered by port name.
    pub fn ports(&self) -> Vec<LocationId> {
        let mut ports: Vec<LocationId> =
            self.location_ids().filter(|&id| self.is_port(id)).collect();
        ports.sort_by(|&a, &b| self.name(a).cmp(self.name(b)));
        ports
    }

    // ── Plants ────────────────────────────────────────────────────────────

    pub fn plants(&self) -> &[PlantSpec] {
        &self.plants
    }

    #[inline]
    pub fn plant(&self, id: PlantId) -> Option<&PlantSpec> {
        self.plants.get(id.index())
    }

    /// Resolve a plant by its display name (as written in the plant log).
    pub fn plant_by_name(&self, name: &str) -> Option<PlantId> {
        self.plants
            .iter()
            .position(|p| p.name == name)
            .map(|i| PlantId(i as u16))
    }
}
