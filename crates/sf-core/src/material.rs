//! Material and flow-direction enums shared by every stage.

/// A bulk material moved through the supply chain.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Material {
    /// Raw material, consumed 1.0 t per tonne of steel.
    Coal,
    /// Raw material, consumed 0.43 t per tonne of steel.
    Limestone,
    /// Finished product, exported via ports.
    Steel,
}

impl Material {
    /// All materials in table/processing order.
    pub const ALL: [Material; 3] = [Material::Coal, Material::Limestone, Material::Steel];

    /// The raw materials replenished at plants and ports.
    pub const RAW: [Material; 2] = [Material::Coal, Material::Limestone];

    /// Direction of rail movement relative to the plant.
    #[inline]
    pub fn flow(self) -> MaterialFlow {
        match self {
            Material::Coal | Material::Limestone => MaterialFlow::Inbound,
            Material::Steel                      => MaterialFlow::Outbound,
        }
    }

    /// Position in [`Material::ALL`], for fixed-size per-material arrays.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Material::Coal      => 0,
            Material::Limestone => 1,
            Material::Steel     => 2,
        }
    }

    /// Label used in table cells.
    pub fn as_str(self) -> &'static str {
        match self {
            Material::Coal      => "Coal",
            Material::Limestone => "Limestone",
            Material::Steel     => "Steel",
        }
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Material {
    type Err = crate::SfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Coal"      => Ok(Material::Coal),
            "Limestone" => Ok(Material::Limestone),
            "Steel"     => Ok(Material::Steel),
            other => Err(crate::SfError::Parse(format!(
                "invalid material {other:?}: expected \"Coal\", \"Limestone\", or \"Steel\""
            ))),
        }
    }
}

/// Rail movement direction relative to the plant.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MaterialFlow {
    /// Raw material moving from a mine or port into a plant.
    Inbound,
    /// Steel moving from a plant to an export port.
    Outbound,
}

impl MaterialFlow {
    pub fn as_str(self) -> &'static str {
        match self {
            MaterialFlow::Inbound  => "Inbound",
            MaterialFlow::Outbound => "Outbound",
        }
    }
}

impl std::fmt::Display for MaterialFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
