//! Vessel contracts.
//!
//! Steel is loaded at an Indian port and discharged abroad; coal and
//! limestone are loaded at an overseas source and discharged at an Indian
//! port.  Rates are drawn in USD and stored in INR.

use serde::Deserialize;

use sf_core::{Material, SimRng, round2};
use sf_table::VesselContractRow;

use crate::{VesselError, VesselResult};

pub const USD_TO_INR: f64 = 83.0;

pub const INDIAN_PORTS: &[&str] = &["Haldia Port", "Paradip Port", "Visakhapatnam Port"];

pub const COAL_SOURCE_PORTS: &[&str] = &[
    "Hay Point (AUS)",
    "Gladstone (AUS)",
    "Newcastle (AUS)",
    "Durban (SAF)",
    "Baltimore (USA)",
];

pub const LIMESTONE_SOURCE_PORTS: &[&str] = &["Port of Salalah (OMN)", "Jebel Ali (UAE)", "Vung Tau (VNM)"];

pub const STEEL_DESTINATION_PORTS: &[&str] = &["Jebel Ali (UAE)", "Singapore", "Hamburg (GER)", "Tokyo (JPN)"];

/// Allowed laytime choices, hours.
pub const LAYDAYS_HOURS: [f64; 3] = [72.0, 96.0, 120.0];

/// USD per tonne.
fn freight_range_usd(m: Material) -> (f64, f64) {
    match m {
        Material::Coal      => (20.0, 28.0),
        Material::Limestone => (15.0, 22.0),
        Material::Steel     => (35.0, 50.0),
    }
}

/// Tonnes per contract.
fn quantity_range(m: Material) -> (f64, f64) {
    match m {
        Material::Coal      => (30_000.0, 50_000.0),
        Material::Limestone => (25_000.0, 40_000.0),
        Material::Steel     => (15_000.0, 25_000.0),
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContractParams {
    pub vessels:              u32,
    /// Inclusive range of contracts per vessel.
    pub contracts_per_vessel: (u32, u32),
    /// USD per hour.
    pub demurrage_usd:        (f64, f64),
}

impl Default for ContractParams {
    fn default() -> Self {
        Self { vessels: 25, contracts_per_vessel: (3, 5), demurrage_usd: (800.0, 1500.0) }
    }
}

impl ContractParams {
    pub fn validate(&self) -> VesselResult<()> {
        let (lo, hi) = self.contracts_per_vessel;
        if lo == 0 || lo > hi {
            return Err(VesselError::InvalidParams(format!(
                "contracts_per_vessel ({lo}, {hi}) must be positive and ordered"
            )));
        }
        if self.vessels > 999 {
            return Err(VesselError::InvalidParams(format!(
                "at most 999 vessels are numbered, got {}",
                self.vessels
            )));
        }
        let (lo, hi) = self.demurrage_usd;
        if !(lo >= 0.0 && lo <= hi) {
            return Err(VesselError::InvalidParams(format!("demurrage_usd ({lo}, {hi}) must be ordered")));
        }
        Ok(())
    }
}

/// Generates the static vessel contract table.
#[derive(Clone, Debug, Default)]
pub struct ContractGenerator {
    params: ContractParams,
}

fn pick<'a>(ports: &[&'a str], rng: &mut SimRng) -> &'a str {
    rng.choose(ports).copied().unwrap_or_default()
}

impl ContractGenerator {
    pub fn new(params: ContractParams) -> VesselResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Vessels `V001..`, each with a uniform number of contracts.
    ///
    /// Per contract the draws are: material, load port, discharge port,
    /// freight, demurrage, quantity, laydays.
    pub fn generate(&self, rng: &mut SimRng) -> Vec<VesselContractRow> {
        let (lo, hi) = self.params.contracts_per_vessel;
        let mut rows = Vec::new();
        for v in 1..=self.params.vessels {
            let vessel_id = format!("V{v:03}");
            let contracts: u32 = rng.gen_range(lo..=hi);
            for _ in 0..contracts {
                let material = rng.choose(&Material::ALL).copied().unwrap_or(Material::Steel);
                let (load_port, discharge_port) = match material {
                    Material::Steel => (pick(INDIAN_PORTS, rng), pick(STEEL_DESTINATION_PORTS, rng)),
                    Material::Coal => (pick(COAL_SOURCE_PORTS, rng), pick(INDIAN_PORTS, rng)),
                    Material::Limestone => (pick(LIMESTONE_SOURCE_PORTS, rng), pick(INDIAN_PORTS, rng)),
                };
                let (f_lo, f_hi) = freight_range_usd(material);
                let freight = round2(rng.uniform(f_lo, f_hi) * USD_TO_INR);
                let (d_lo, d_hi) = self.params.demurrage_usd;
                let demurrage = round2(rng.uniform(d_lo, d_hi) * USD_TO_INR);
                let (q_lo, q_hi) = quantity_range(material);
                let quantity = (rng.uniform(q_lo, q_hi) / 100.0).round() * 100.0;
                let laydays = rng.choose(&LAYDAYS_HOURS).copied().unwrap_or(LAYDAYS_HOURS[0]);
                rows.push(VesselContractRow {
                    vessel_id:                vessel_id.clone(),
                    load_port:                load_port.to_owned(),
                    discharge_port:           discharge_port.to_owned(),
                    material,
                    ocean_freight_inr_tonne:  freight,
                    demurrage_rate_inr_hr:    demurrage,
                    contract_quantity_tonnes: quantity,
                    laydays_allowed_hours:    laydays,
                });
            }
        }
        tracing::info!(vessels = self.params.vessels, contracts = rows.len(), "vessel contracts generated");
        rows
    }
}
