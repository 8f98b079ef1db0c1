use chrono::NaiveDate;
use serde::Deserialize;

use sf_core::Material;

use crate::schema::{Column, TableRow, TableSchema, Value};

// ── Port log ──────────────────────────────────────────────────────────────────

/// One port-day of the port flow log.
///
/// The last three fields are stage-file columns read by the vessel stage;
/// they are not persisted.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PortLogRow {
    pub date:                              NaiveDate,
    pub port_name:                         String,
    pub coal_bod_storage_tonnes:           f64,
    pub limestone_bod_storage_tonnes:      f64,
    pub steel_bod_storage_tonnes:          f64,
    pub coal_arrived_tonnes:               f64,
    pub limestone_arrived_tonnes:          f64,
    pub coal_departed_tonnes:              f64,
    pub limestone_departed_tonnes:         f64,
    pub steel_arrived_tonnes:              f64,
    pub steel_shipped_tonnes:              f64,
    pub coal_eod_storage_tonnes:           f64,
    pub limestone_eod_storage_tonnes:      f64,
    pub steel_eod_storage_tonnes:          f64,
    pub total_cargo_flow_today_tonnes:     f64,
    pub weather_delay_index:               u32,
    pub steel_storage_utilization_percent: f64,
}

impl PortLogRow {
    pub fn bod_storage(&self, material: Material) -> f64 {
        match material {
            Material::Coal      => self.coal_bod_storage_tonnes,
            Material::Limestone => self.limestone_bod_storage_tonnes,
            Material::Steel     => self.steel_bod_storage_tonnes,
        }
    }

    pub fn eod_storage(&self, material: Material) -> f64 {
        match material {
            Material::Coal      => self.coal_eod_storage_tonnes,
            Material::Limestone => self.limestone_eod_storage_tonnes,
            Material::Steel     => self.steel_eod_storage_tonnes,
        }
    }

    pub fn arrived(&self, material: Material) -> f64 {
        match material {
            Material::Coal      => self.coal_arrived_tonnes,
            Material::Limestone => self.limestone_arrived_tonnes,
            Material::Steel     => self.steel_arrived_tonnes,
        }
    }

    /// Departed tonnage; for steel this is the shipped column.
    pub fn departed(&self, material: Material) -> f64 {
        match material {
            Material::Coal      => self.coal_departed_tonnes,
            Material::Limestone => self.limestone_departed_tonnes,
            Material::Steel     => self.steel_shipped_tonnes,
        }
    }
}

const PORT_COLUMNS: &[Column] = &[
    Column::date("date"),
    Column::text("port_name"),
    Column::real("coal_bod_storage_tonnes"),
    Column::real("limestone_bod_storage_tonnes"),
    Column::real("steel_bod_storage_tonnes"),
    Column::real("coal_arrived_tonnes"),
    Column::real("limestone_arrived_tonnes"),
    Column::real("coal_departed_tonnes"),
    Column::real("limestone_departed_tonnes"),
    Column::real("steel_arrived_tonnes"),
    Column::real("steel_shipped_tonnes"),
    Column::real("coal_eod_storage_tonnes"),
    Column::real("limestone_eod_storage_tonnes"),
    Column::real("steel_eod_storage_tonnes"),
    Column::real("total_cargo_flow_today_tonnes").stage_only(),
    Column::integer("weather_delay_index").stage_only(),
    Column::real("steel_storage_utilization_percent").stage_only(),
];

impl TableRow for PortLogRow {
    const SCHEMA: TableSchema = TableSchema {
        table:     "ports",
        file_stem: "port_log",
        producer:  "ports",
        columns:   PORT_COLUMNS,
    };

    fn values(&self) -> Vec<Value> {
        vec![
            self.date.into(),
            self.port_name.as_str().into(),
            self.coal_bod_storage_tonnes.into(),
            self.limestone_bod_storage_tonnes.into(),
            self.steel_bod_storage_tonnes.into(),
            self.coal_arrived_tonnes.into(),
            self.limestone_arrived_tonnes.into(),
            self.coal_departed_tonnes.into(),
            self.limestone_departed_tonnes.into(),
            self.steel_arrived_tonnes.into(),
            self.steel_shipped_tonnes.into(),
            self.coal_eod_storage_tonnes.into(),
            self.limestone_eod_storage_tonnes.into(),
            self.steel_eod_storage_tonnes.into(),
            self.total_cargo_flow_today_tonnes.into(),
            self.weather_delay_index.into(),
            self.steel_storage_utilization_percent.into(),
        ]
    }
}

// ── Port tariffs ──────────────────────────────────────────────────────────────

/// Static handling and storage tariff for one port and material.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PortTariffRow {
    pub port_name:                  String,
    pub material:                   Material,
    pub handling_cost_inr_tonne:    f64,
    pub storage_cost_inr_tonne_day: f64,
    pub max_throughput_t_day:       f64,
}

const TARIFF_COLUMNS: &[Column] = &[
    Column::text("port_name"),
    Column::text("material"),
    Column::real("handling_cost_inr_tonne"),
    Column::real("storage_cost_inr_tonne_day"),
    Column::real("max_throughput_t_day"),
];

impl TableRow for PortTariffRow {
    const SCHEMA: TableSchema = TableSchema {
        table:     "tariffs",
        file_stem: "port_tariffs",
        producer:  "tariffs",
        columns:   TARIFF_COLUMNS,
    };

    fn values(&self) -> Vec<Value> {
        vec![
            self.port_name.as_str().into(),
            self.material.as_str().into(),
            self.handling_cost_inr_tonne.into(),
            self.storage_cost_inr_tonne_day.into(),
            self.max_throughput_t_day.into(),
        ]
    }
}
