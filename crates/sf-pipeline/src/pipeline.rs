//! The `Pipeline` struct and its stage loop.

use std::path::{Path, PathBuf};

use sf_network::Network;
use sf_plant::PlantStockSimulator;
use sf_port::{PortFlowSimulator, PortTariffGenerator};
use sf_predict::{
    ModelKind, SafePredictor, TrainPredictionRow, VesselPredictionRow, score_trains, score_vessels,
};
use sf_rake::RakeTransportSimulator;
use sf_table::{
    CsvWriter, PlantLogRow, PortLogRow, TableRow, TableWriter, TripRow, VesselContractRow,
    VesselDelayRow, read_table, write_rows,
};
use sf_vessel::{ContractGenerator, VesselDelaySimulator};

use crate::{PipelineConfig, PipelineResult, Stage, StageObserver};

/// Outcome of one stage.
#[derive(Clone, Debug, PartialEq)]
pub struct StageReport {
    pub stage: Stage,
    pub rows:  usize,
    /// The CSV stage file written.
    pub path:  PathBuf,
}

/// The stage runner.
///
/// Create via [`PipelineBuilder`][crate::PipelineBuilder].
pub struct Pipeline {
    pub(crate) config:  PipelineConfig,
    pub(crate) network: Network,
    pub(crate) csv:     CsvWriter,
    pub(crate) mirrors: Vec<Box<dyn TableWriter>>,
}

impl Pipeline {
    // ── Public API ────────────────────────────────────────────────────────

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn output_dir(&self) -> &Path {
        &self.config.output_dir
    }

    /// Run every stage in [`Stage::ALL`] order, then close the writers.
    pub fn run<O: StageObserver>(&mut self, observer: &mut O) -> PipelineResult<Vec<StageReport>> {
        let mut reports = Vec::with_capacity(Stage::ALL.len());
        for stage in Stage::ALL {
            reports.push(self.run_stage(stage, observer)?);
        }
        self.finish()?;
        observer.on_pipeline_end(&reports);
        Ok(reports)
    }

    /// Run one stage, reading its inputs from the output directory.
    pub fn run_stage<O: StageObserver>(&mut self, stage: Stage, observer: &mut O) -> PipelineResult<StageReport> {
        observer.on_stage_start(stage);
        let mut rng = stage.rng(self.config.seed);
        let report = match stage {
            Stage::Plants => {
                let sim = PlantStockSimulator::new(self.config.plant.clone())?;
                let rows = sim.run(&self.network, &self.config.totals(), self.config.calendar(), &mut rng)?;
                self.emit(stage, &rows)?
            }
            Stage::Trains => {
                let plants: Vec<PlantLogRow> = self.load()?;
                let sim = RakeTransportSimulator::new(self.config.transport.clone())?;
                let run = sim.run(&self.network, &plants, &mut rng)?;
                if run.deferred > 0 {
                    tracing::warn!(deferred = run.deferred, trips = run.trips.len(), "trips waited for a free rake");
                }
                self.emit(stage, &run.trips)?
            }
            Stage::Ports => {
                let trips: Vec<TripRow> = self.load()?;
                let sim = PortFlowSimulator::new(self.config.port)?;
                let run = sim.run(&self.network, &trips, &mut rng)?;
                self.emit(stage, &run.rows)?
            }
            Stage::Tariffs => {
                let ports: Vec<&str> = self.network.ports().into_iter().map(|id| self.network.name(id)).collect();
                let rows = PortTariffGenerator.generate(&ports, &mut rng);
                self.emit(stage, &rows)?
            }
            Stage::Contracts => {
                let rows = ContractGenerator::new(self.config.contracts)?.generate(&mut rng);
                self.emit(stage, &rows)?
            }
            Stage::Vessels => {
                let ports: Vec<PortLogRow> = self.load()?;
                let contracts: Vec<VesselContractRow> = self.load()?;
                let sim = VesselDelaySimulator::new(self.config.vessel_params())?;
                let rows = sim.run(&ports, &contracts, &mut rng)?;
                self.emit(stage, &rows)?
            }
        };
        observer.on_stage_end(&report);
        Ok(report)
    }

    /// Score the train log and write `train_predictions.csv`.
    ///
    /// `weights` is a linear model file; without one, or if it fails to
    /// load, every trip gets the rail fallback prediction.  Returns the
    /// scored rows and the file written.
    pub fn predict_trains(&mut self, weights: Option<&Path>) -> PipelineResult<(Vec<TrainPredictionRow>, PathBuf)> {
        let trips: Vec<TripRow> = self.load()?;
        let model = SafePredictor::load(ModelKind::Rail, weights);
        let rows = score_trains(&trips, &model);
        write_rows(&mut self.csv, &rows)?;
        self.csv.finish()?;
        Ok((rows, self.csv.path_for(&TrainPredictionRow::SCHEMA)))
    }

    /// Score the vessel delay history and write `vessel_predictions.csv`,
    /// with the port fallbacks when `weights` is absent or unusable.
    pub fn predict_vessels(&mut self, weights: Option<&Path>) -> PipelineResult<(Vec<VesselPredictionRow>, PathBuf)> {
        let history: Vec<VesselDelayRow> = self.load()?;
        let model = SafePredictor::load(ModelKind::Port, weights);
        let rows = score_vessels(&history, &model);
        write_rows(&mut self.csv, &rows)?;
        self.csv.finish()?;
        Ok((rows, self.csv.path_for(&VesselPredictionRow::SCHEMA)))
    }

    /// Flush and close every writer.  Idempotent.
    pub fn finish(&mut self) -> PipelineResult<()> {
        self.csv.finish()?;
        for mirror in &mut self.mirrors {
            mirror.finish()?;
        }
        Ok(())
    }

    // ── Internal helpers ──────────────────────────────────────────────────

    fn load<R: TableRow + serde::de::DeserializeOwned>(&self) -> PipelineResult<Vec<R>> {
        Ok(read_table::<R>(&self.csv.path_for(&R::SCHEMA))?)
    }

    fn emit<R: TableRow>(&mut self, stage: Stage, rows: &[R]) -> PipelineResult<StageReport> {
        write_rows(&mut self.csv, rows)?;
        for mirror in &mut self.mirrors {
            write_rows(mirror.as_mut(), rows)?;
        }
        Ok(StageReport { stage, rows: rows.len(), path: self.csv.path_for(&R::SCHEMA) })
    }
}
