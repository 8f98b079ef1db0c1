//! Scoring whole tables.

use chrono::NaiveDateTime;

use sf_core::round2;
use sf_table::{Column, TableRow, TableSchema, TripRow, Value, VesselDelayRow};

use crate::{PortFeatureEncoder, RailFeatureEncoder, SafePredictor};

/// One scored trip of `train_predictions.csv`.
#[derive(Clone, Debug, PartialEq)]
pub struct TrainPredictionRow {
    pub trip_id:            String,
    pub predicted_delay_h:  f64,
    pub predicted_cost_inr: f64,
}

const COLUMNS: &[Column] = &[
    Column::text("trip_id"),
    Column::real("predicted_delay_h"),
    Column::real("predicted_cost_inr"),
];

impl TableRow for TrainPredictionRow {
    const SCHEMA: TableSchema = TableSchema {
        table:     "train_predictions",
        file_stem: "train_predictions",
        producer:  "predict-trains",
        columns:   COLUMNS,
    };

    fn values(&self) -> Vec<Value> {
        vec![
            self.trip_id.as_str().into(),
            self.predicted_delay_h.into(),
            self.predicted_cost_inr.into(),
        ]
    }
}

/// One prediction per trip, in train-log order.
pub fn score_trains(trips: &[TripRow], model: &SafePredictor) -> Vec<TrainPredictionRow> {
    let encoder = RailFeatureEncoder::fit(trips);
    let rows: Vec<TrainPredictionRow> = trips
        .iter()
        .map(|t| {
            let p = model.predict(&encoder.features(t));
            TrainPredictionRow {
                trip_id:            t.trip_id.clone(),
                predicted_delay_h:  round2(p.delay_hours),
                predicted_cost_inr: round2(p.cost),
            }
        })
        .collect();
    tracing::info!(trips = rows.len(), loaded = model.is_loaded(), "train log scored");
    rows
}

// ── Vessel calls ──────────────────────────────────────────────────────────────

/// One scored vessel call of `vessel_predictions.csv`.
#[derive(Clone, Debug, PartialEq)]
pub struct VesselPredictionRow {
    pub vessel_name:        String,
    pub port_name:          String,
    pub eta_datetime:       NaiveDateTime,
    pub predicted_delay_h:  f64,
    pub predicted_cost_inr: f64,
}

const VESSEL_COLUMNS: &[Column] = &[
    Column::text("vessel_name"),
    Column::text("port_name"),
    Column::datetime("eta_datetime"),
    Column::real("predicted_delay_h"),
    Column::real("predicted_cost_inr"),
];

impl TableRow for VesselPredictionRow {
    const SCHEMA: TableSchema = TableSchema {
        table:     "vessel_predictions",
        file_stem: "vessel_predictions",
        producer:  "predict-vessels",
        columns:   VESSEL_COLUMNS,
    };

    fn values(&self) -> Vec<Value> {
        vec![
            self.vessel_name.as_str().into(),
            self.port_name.as_str().into(),
            self.eta_datetime.into(),
            self.predicted_delay_h.into(),
            self.predicted_cost_inr.into(),
        ]
    }
}

/// One prediction per vessel call, in history order.  Record ids are
/// 1-based, as in the persisted table.
pub fn score_vessels(history: &[VesselDelayRow], model: &SafePredictor) -> Vec<VesselPredictionRow> {
    let encoder = PortFeatureEncoder::fit(history);
    let rows: Vec<VesselPredictionRow> = history
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let p = model.predict(&encoder.features(i + 1, r));
            VesselPredictionRow {
                vessel_name:        r.vessel_name.clone(),
                port_name:          r.port_name.clone(),
                eta_datetime:       r.eta_datetime,
                predicted_delay_h:  round2(p.delay_hours),
                predicted_cost_inr: round2(p.cost),
            }
        })
        .collect();
    tracing::info!(calls = rows.len(), loaded = model.is_loaded(), "vessel history scored");
    rows
}
