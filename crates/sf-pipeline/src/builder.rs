//! Fluent builder for constructing a [`Pipeline`].

use std::path::PathBuf;

use sf_network::Network;
use sf_table::{CsvWriter, TableWriter};

use crate::{Pipeline, PipelineConfig, PipelineResult};

/// Fluent builder for [`Pipeline`].
///
/// # Optional inputs (have defaults)
///
/// | Method             | Default                                     |
/// |--------------------|---------------------------------------------|
/// | `.network(n)`      | `config.plants`, else the built-in catalog  |
/// | `.output_dir(p)`   | `config.output_dir`                         |
/// | `.seed(s)`         | `config.seed`                               |
///
/// Mirror backends are opened from `config.backends`; a backend enabled in
/// configuration but not compiled in is skipped with a warning.
pub struct PipelineBuilder {
    config:  PipelineConfig,
    network: Option<Network>,
}

impl PipelineBuilder {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config, network: None }
    }

    pub fn network(mut self, network: Network) -> Self {
        self.network = Some(network);
        self
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn build(self) -> PipelineResult<Pipeline> {
        self.config.validate()?;
        let network = match self.network {
            Some(n) => n,
            None => self.config.network()?,
        };
        let csv = CsvWriter::new(&self.config.output_dir)?;
        let mirrors = open_mirrors(&self.config)?;
        tracing::info!(
            plants = network.plant_count(),
            locations = network.location_count(),
            output = %self.config.output_dir.display(),
            seed = self.config.seed,
            mirrors = mirrors.len(),
            "pipeline ready"
        );
        Ok(Pipeline { config: self.config, network, csv, mirrors })
    }
}

#[allow(unused_mut)]
fn open_mirrors(config: &PipelineConfig) -> PipelineResult<Vec<Box<dyn TableWriter>>> {
    let mut mirrors: Vec<Box<dyn TableWriter>> = Vec::new();
    let dir = &config.output_dir;

    if config.backends.sqlite {
        #[cfg(feature = "sqlite")]
        mirrors.push(Box::new(sf_table::SqliteWriter::new(dir)?));
        #[cfg(not(feature = "sqlite"))]
        tracing::warn!(dir = %dir.display(), "sqlite backend requested but not compiled in; skipping");
    }
    if config.backends.parquet {
        #[cfg(feature = "parquet")]
        mirrors.push(Box::new(sf_table::ParquetWriter::new(dir)?));
        #[cfg(not(feature = "parquet"))]
        tracing::warn!(dir = %dir.display(), "parquet backend requested but not compiled in; skipping");
    }
    Ok(mirrors)
}
