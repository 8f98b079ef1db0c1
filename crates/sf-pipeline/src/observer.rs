//! Stage observer trait for progress reporting.

use std::time::Instant;

use crate::{Stage, StageReport};

/// Callbacks invoked by [`Pipeline::run`][crate::Pipeline::run] and
/// [`Pipeline::run_stage`][crate::Pipeline::run_stage].
///
/// All methods have default no-op implementations.
pub trait StageObserver {
    /// Called before a stage reads its inputs.
    fn on_stage_start(&mut self, _stage: Stage) {}

    /// Called after a stage's table has been written.
    fn on_stage_end(&mut self, _report: &StageReport) {}

    /// Called once after the last stage of a full run.
    fn on_pipeline_end(&mut self, _reports: &[StageReport]) {}
}

/// A [`StageObserver`] that does nothing.
pub struct NoopObserver;

impl StageObserver for NoopObserver {}

/// Logs stage boundaries with wall-clock timings.
#[derive(Default)]
pub struct TracingObserver {
    started: Option<Instant>,
    total:   Option<Instant>,
}

impl StageObserver for TracingObserver {
    fn on_stage_start(&mut self, stage: Stage) {
        let now = Instant::now();
        self.started = Some(now);
        self.total.get_or_insert(now);
        tracing::info!(%stage, "stage started");
    }

    fn on_stage_end(&mut self, report: &StageReport) {
        let elapsed_ms = self.started.map_or(0, |t| t.elapsed().as_millis());
        tracing::info!(
            stage = %report.stage,
            rows = report.rows,
            path = %report.path.display(),
            elapsed_ms,
            "stage finished"
        );
    }

    fn on_pipeline_end(&mut self, reports: &[StageReport]) {
        let elapsed_ms = self.total.map_or(0, |t| t.elapsed().as_millis());
        let rows: usize = reports.iter().map(|r| r.rows).sum();
        tracing::info!(stages = reports.len(), rows, elapsed_ms, "pipeline finished");
    }
}
