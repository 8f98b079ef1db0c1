use chrono::NaiveDateTime;
use serde::Deserialize;

use sf_core::calendar::datetime_format;
use sf_core::{Material, MaterialFlow};

use crate::schema::{Column, TableRow, TableSchema, Value};

/// One rail trip of the train log.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TripRow {
    pub trip_id:                 String,
    pub rake_id:                 u32,
    pub material_flow:           MaterialFlow,
    pub material:                Material,
    pub source:                  String,
    pub destination:             String,
    pub quantity_tonnes:         f64,
    pub distance_km:             f64,
    pub rake_availability_index: f64,
    pub base_time_h:             f64,
    pub loading_time_h:          f64,
    pub unloading_time_h:        f64,
    pub delay_h:                 f64,
    pub total_time_h:            f64,
    #[serde(with = "datetime_format")]
    pub departure_time:          NaiveDateTime,
    #[serde(with = "datetime_format")]
    pub arrival_time:            NaiveDateTime,
    pub rail_freight_inr_tonne:  f64,
    pub port_handling_inr_tonne: f64,
    pub total_trip_cost_inr:     f64,
}

const COLUMNS: &[Column] = &[
    Column::text("trip_id"),
    Column::integer("rake_id"),
    Column::text("material_flow"),
    Column::text("material"),
    Column::text("source"),
    Column::text("destination"),
    Column::real("quantity_tonnes"),
    Column::real("distance_km"),
    Column::real("rake_availability_index"),
    Column::real("base_time_h"),
    Column::real("loading_time_h"),
    Column::real("unloading_time_h"),
    Column::real("delay_h"),
    Column::real("total_time_h"),
    Column::datetime("departure_time"),
    Column::datetime("arrival_time"),
    Column::real("rail_freight_inr_tonne"),
    Column::real("port_handling_inr_tonne"),
    Column::real("total_trip_cost_inr"),
];

impl TableRow for TripRow {
    const SCHEMA: TableSchema = TableSchema {
        table:     "trains",
        file_stem: "train_log",
        producer:  "trains",
        columns:   COLUMNS,
    };

    fn values(&self) -> Vec<Value> {
        vec![
            self.trip_id.as_str().into(),
            self.rake_id.into(),
            self.material_flow.as_str().into(),
            self.material.as_str().into(),
            self.source.as_str().into(),
            self.destination.as_str().into(),
            self.quantity_tonnes.into(),
            self.distance_km.into(),
            self.rake_availability_index.into(),
            self.base_time_h.into(),
            self.loading_time_h.into(),
            self.unloading_time_h.into(),
            self.delay_h.into(),
            self.total_time_h.into(),
            self.departure_time.into(),
            self.arrival_time.into(),
            self.rail_freight_inr_tonne.into(),
            self.port_handling_inr_tonne.into(),
            self.total_trip_cost_inr.into(),
        ]
    }
}
