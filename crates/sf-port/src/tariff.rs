//! Static port tariffs.
//!
//! Each port draws one base factor `U(0.9, 1.1)` that scales its handling
//! and storage costs for every material; throughput is drawn independently
//! and rounded to the nearest hundred tonnes.

use sf_core::{Material, SimRng, round2};
use sf_table::PortTariffRow;

/// INR per tonne.
fn handling_range(m: Material) -> (f64, f64) {
    match m {
        Material::Coal      => (200.0, 350.0),
        Material::Limestone => (150.0, 300.0),
        Material::Steel     => (250.0, 400.0),
    }
}

/// INR per tonne per day.
fn storage_range(m: Material) -> (f64, f64) {
    match m {
        Material::Coal      => (8.0, 12.0),
        Material::Limestone => (5.0, 8.0),
        Material::Steel     => (10.0, 15.0),
    }
}

/// Tonnes per day.
fn throughput_range(m: Material) -> (f64, f64) {
    match m {
        Material::Coal      => (20_000.0, 30_000.0),
        Material::Limestone => (15_000.0, 25_000.0),
        Material::Steel     => (10_000.0, 20_000.0),
    }
}

#[derive(Copy, Clone, Debug, Default)]
pub struct PortTariffGenerator;

impl PortTariffGenerator {
    /// One row per port and material, ports in the order given.
    pub fn generate<S: AsRef<str>>(&self, ports: &[S], rng: &mut SimRng) -> Vec<PortTariffRow> {
        let mut rows = Vec::with_capacity(ports.len() * Material::ALL.len());
        for port in ports {
            let factor = rng.uniform(0.9, 1.1);
            for material in Material::ALL {
                let (h_lo, h_hi) = handling_range(material);
                let (s_lo, s_hi) = storage_range(material);
                let (t_lo, t_hi) = throughput_range(material);
                let handling = round2(rng.uniform(h_lo, h_hi) * factor);
                let storage = round2(rng.uniform(s_lo, s_hi) * factor);
                let throughput = (rng.uniform(t_lo, t_hi) / 100.0).round() * 100.0;
                rows.push(PortTariffRow {
                    port_name:                  port.as_ref().to_owned(),
                    material,
                    handling_cost_inr_tonne:    handling,
                    storage_cost_inr_tonne_day: storage,
                    max_throughput_t_day:       throughput,
                });
            }
        }
        tracing::info!(rows = rows.len(), "port tariffs generated");
        rows
    }
}
