//! Location kinds and their role in source selection.

use serde::Deserialize;

/// What sort of place a location is.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    /// A steel plant: consumes raw material, produces steel.
    Plant,
    /// A mine or coalfield supplying raw material by rail.
    Mine,
    /// A sea port: handles imports, exports, and storage.
    Port,
}

impl LocationKind {
    /// Relative weight of a source of this kind when an inbound trip picks
    /// where to load.  Mines and plants are preferred over ports 0.7 : 0.3.
    #[inline]
    pub fn source_weight(self) -> f64 {
        match self {
            LocationKind::Port                       => 0.3,
            LocationKind::Mine | LocationKind::Plant => 0.7,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LocationKind::Plant => "plant",
            LocationKind::Mine  => "mine",
            LocationKind::Port  => "port",
        }
    }
}

impl std::fmt::Display for LocationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named node of the network.
#[derive(Clone, Debug, PartialEq)]
pub struct Location {
    pub name: String,
    pub kind: LocationKind,
}
