//! Transport parameters.
//!
//! Every value has a default; a `[transport]` table in the configuration file
//! overrides individual fields.

use serde::Deserialize;

use sf_core::Material;

use crate::{TransportError, TransportResult};

/// Rail figures for one material.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
pub struct MaterialRates {
    /// Train capacity, tonnes.
    pub capacity:       f64,
    /// Loading time, hours per tonne.
    pub loading_rate:   f64,
    /// Unloading time, hours per tonne.
    pub unloading_rate: f64,
    /// Freight, INR per tonne-km.
    pub freight_rate:   f64,
    /// Port handling, INR per tonne.
    pub handling_cost:  f64,
}

impl MaterialRates {
    pub fn coal() -> Self {
        Self {
            capacity:       10_000.0,
            loading_rate:   0.0006,
            unloading_rate: 0.0005,
            freight_rate:   4.5,
            handling_cost:  200.0,
        }
    }

    pub fn limestone() -> Self {
        Self {
            capacity:       8_000.0,
            loading_rate:   0.0005,
            unloading_rate: 0.0004,
            freight_rate:   3.5,
            handling_cost:  150.0,
        }
    }

    pub fn steel() -> Self {
        Self {
            capacity:       5_000.0,
            loading_rate:   0.0010,
            unloading_rate: 0.0008,
            freight_rate:   6.0,
            handling_cost:  300.0,
        }
    }
}

/// Tunable transport-stage parameters.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TransportParams {
    /// Number of rakes in the pool.
    pub pool_size:       usize,
    /// Average rail speed, km/h.
    pub speed_kmph:      f64,
    /// Trip size as a fraction of train capacity.
    pub load_fraction:   (f64, f64),
    /// Inbound trips depart this many whole days before the arrival day.
    pub inbound_lead_days: (u32, u32),
    /// Stochastic en-route delay, hours.
    pub delay_hours:     (f64, f64),
    pub coal:            MaterialRates,
    pub limestone:       MaterialRates,
    pub steel:           MaterialRates,
}

impl Default for TransportParams {
    fn default() -> Self {
        Self {
            pool_size:         50,
            speed_kmph:        40.0,
            load_fraction:     (0.8, 1.0),
            inbound_lead_days: (2, 5),
            delay_hours:       (1.0, 24.0),
            coal:              MaterialRates::coal(),
            limestone:         MaterialRates::limestone(),
            steel:             MaterialRates::steel(),
        }
    }
}

/// Largest pool with distinct six-digit rake numbers.
pub const MAX_POOL_SIZE: usize = 900_000;

impl TransportParams {
    pub fn rates(&self, material: Material) -> &MaterialRates {
        match material {
            Material::Coal      => &self.coal,
            Material::Limestone => &self.limestone,
            Material::Steel     => &self.steel,
        }
    }

    pub fn validate(&self) -> TransportResult<()> {
        let invalid = |msg: String| Err(TransportError::InvalidParams(msg));
        if self.pool_size == 0 || self.pool_size > MAX_POOL_SIZE {
            return invalid(format!("pool_size must be in 1..={MAX_POOL_SIZE}, got {}", self.pool_size));
        }
        if !(self.speed_kmph > 0.0) {
            return invalid(format!("speed_kmph must be positive, got {}", self.speed_kmph));
        }
        let (lo, hi) = self.load_fraction;
        if !(lo > 0.0 && lo <= hi && hi <= 1.0) {
            return invalid(format!("load_fraction ({lo}, {hi}) must satisfy 0 < lo <= hi <= 1"));
        }
        if self.inbound_lead_days.0 > self.inbound_lead_days.1 {
            return invalid(format!("inbound_lead_days {:?} is inverted", self.inbound_lead_days));
        }
        for material in Material::ALL {
            if !(self.rates(material).capacity > 0.0) {
                return invalid(format!("{material} train capacity must be positive"));
            }
        }
        Ok(())
    }
}
