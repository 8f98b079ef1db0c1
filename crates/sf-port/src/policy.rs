//! Threshold policies.
//!
//! For coal and limestone the range is the size of an injected replenishment;
//! for steel it is the size of a threshold shipment.

use serde::Deserialize;

use sf_core::Material;

use crate::{PortError, PortResult};

#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
pub struct MaterialPolicy {
    /// Coal/limestone: replenish below this.  Steel: ship at or above this.
    pub trigger:     f64,
    pub max_storage: f64,
    pub range:       (f64, f64),
}

impl MaterialPolicy {
    pub fn coal() -> Self {
        Self { trigger: 20_000.0, max_storage: 50_000.0, range: (25_000.0, 40_000.0) }
    }

    pub fn limestone() -> Self {
        Self { trigger: 20_000.0, max_storage: 40_000.0, range: (12_000.0, 35_000.0) }
    }

    pub fn steel() -> Self {
        Self { trigger: 25_000.0, max_storage: 50_000.0, range: (10_000.0, 20_000.0) }
    }
}

/// Policy applied identically at every port.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
pub struct PortPolicy {
    #[serde(default = "MaterialPolicy::coal")]
    pub coal:      MaterialPolicy,
    #[serde(default = "MaterialPolicy::limestone")]
    pub limestone: MaterialPolicy,
    #[serde(default = "MaterialPolicy::steel")]
    pub steel:     MaterialPolicy,
}

impl Default for PortPolicy {
    fn default() -> Self {
        Self {
            coal:      MaterialPolicy::coal(),
            limestone: MaterialPolicy::limestone(),
            steel:     MaterialPolicy::steel(),
        }
    }
}

impl PortPolicy {
    #[inline]
    pub fn get(&self, material: Material) -> &MaterialPolicy {
        match material {
            Material::Coal      => &self.coal,
            Material::Limestone => &self.limestone,
            Material::Steel     => &self.steel,
        }
    }

    pub fn validate(&self) -> PortResult<()> {
        for material in Material::ALL {
            let p = self.get(material);
            if !(p.max_storage > 0.0) {
                return Err(PortError::InvalidPolicy(format!(
                    "{material} max_storage must be positive, got {}",
                    p.max_storage
                )));
            }
            let (lo, hi) = p.range;
            if !(lo >= 0.0 && lo <= hi) {
                return Err(PortError::InvalidPolicy(format!(
                    "{material} range ({lo}, {hi}) must be non-negative and ordered"
                )));
            }
            if !(p.trigger >= 0.0) {
                return Err(PortError::InvalidPolicy(format!(
                    "{material} trigger must be non-negative, got {}",
                    p.trigger
                )));
            }
        }
        Ok(())
    }
}
