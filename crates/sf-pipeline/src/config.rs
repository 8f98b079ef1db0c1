//! `steelflow.toml`.
//!
//! Every field is optional.  Sections map onto the parameter structs of the
//! stage crates:
//!
//! | Section        | Type                          |
//! |----------------|-------------------------------|
//! | `[totals]`     | [`TotalsConfig`] → `AnnualTotals` |
//! | `[plant]`      | `sf_plant::PlantParams`       |
//! | `[transport]`  | `sf_rake::TransportParams`    |
//! | `[port.*]`     | `sf_port::PortPolicy`         |
//! | `[contracts]`  | `sf_vessel::ContractParams`   |
//! | `[vessel]`     | `sf_vessel::VesselParams`     |
//! | `[backends]`   | [`BackendsConfig`]            |
//! | `[[plants]]`   | `sf_network::PlantConfig`     |

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;

use sf_core::SimCalendar;
use sf_network::{Network, NetworkBuilder, PlantConfig};
use sf_plant::{AnnualTotals, PlantParams, TotalValue};
use sf_port::PortPolicy;
use sf_rake::TransportParams;
use sf_vessel::{ContractParams, VesselParams};

use crate::{PipelineError, PipelineResult};

/// Annual figures in million tonnes, as numbers or strings.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TotalsConfig {
    pub coal:      Option<TotalValue>,
    pub limestone: Option<TotalValue>,
    pub steel:     Option<TotalValue>,
}

/// Extra output backends mirroring the CSV stage files.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BackendsConfig {
    pub sqlite:  bool,
    pub parquet: bool,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub seed:         u64,
    pub start_date:   NaiveDate,
    pub days:         u32,
    pub output_dir:   PathBuf,
    /// Days of vessel history before the first port-log date.  Takes
    /// precedence over `[vessel] history_days` when both are set.
    pub history_days: Option<u32>,
    pub totals:       TotalsConfig,
    pub plant:        PlantParams,
    pub transport:    TransportParams,
    pub port:         PortPolicy,
    pub contracts:    ContractParams,
    pub vessel:       VesselParams,
    pub backends:     BackendsConfig,
    /// Replaces the built-in plant catalog when present.
    pub plants:       Option<Vec<PlantConfig>>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            seed:         42,
            start_date:   NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or_default(),
            days:         365,
            output_dir:   PathBuf::from("synDatasets"),
            history_days: None,
            totals:       TotalsConfig::default(),
            plant:        PlantParams::default(),
            transport:    TransportParams::default(),
            port:         PortPolicy::default(),
            contracts:    ContractParams::default(),
            vessel:       VesselParams::default(),
            backends:     BackendsConfig::default(),
            plants:       None,
        }
    }
}

impl PipelineConfig {
    /// Parse TOML text.  `origin` names the source in errors.
    pub fn from_toml_str(text: &str, origin: &Path) -> PipelineResult<Self> {
        let config: Self = toml::from_str(text)
            .map_err(|source| PipelineError::ConfigParse { path: origin.to_owned(), source })?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> PipelineResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| PipelineError::ConfigIo { path: path.to_owned(), source })?;
        let config = Self::from_toml_str(&text, path)?;
        tracing::info!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    pub fn validate(&self) -> PipelineResult<()> {
        if self.days == 0 {
            return Err(PipelineError::Config("days must be at least 1".into()));
        }
        if self.plants.as_ref().is_some_and(Vec::is_empty) {
            return Err(PipelineError::Config("[[plants]] is present but empty".into()));
        }
        Ok(())
    }

    pub fn calendar(&self) -> SimCalendar {
        SimCalendar::new(self.start_date, self.days)
    }

    /// Resolved annual figures; unusable figures fall back with a warning.
    pub fn totals(&self) -> AnnualTotals {
        AnnualTotals::resolve(
            self.totals.coal.as_ref(),
            self.totals.limestone.as_ref(),
            self.totals.steel.as_ref(),
        )
    }

    /// Vessel parameters, with the top-level `history_days` applied if set.
    pub fn vessel_params(&self) -> VesselParams {
        match self.history_days {
            Some(days) => VesselParams { history_days: days, ..self.vessel },
            None => self.vessel,
        }
    }

    /// The configured plant network, or the built-in catalog.
    pub fn network(&self) -> PipelineResult<Network> {
        match &self.plants {
            Some(plants) => Ok(NetworkBuilder::from_configs(plants)?.build()),
            None => Ok(Network::default_catalog()?),
        }
    }
}
