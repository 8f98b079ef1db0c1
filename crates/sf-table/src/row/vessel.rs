use chrono::NaiveDateTime;
use serde::Deserialize;

use sf_core::Material;
use sf_core::calendar::datetime_format;

use crate::schema::{Column, TableRow, TableSchema, Value};

// ── Vessel contracts ──────────────────────────────────────────────────────────

/// One vessel contract: a vessel, a port pair, and its commercial terms.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct VesselContractRow {
    pub vessel_id:                String,
    pub load_port:                String,
    pub discharge_port:           String,
    pub material:                 Material,
    pub ocean_freight_inr_tonne:  f64,
    pub demurrage_rate_inr_hr:    f64,
    pub contract_quantity_tonnes: f64,
    pub laydays_allowed_hours:    f64,
}

impl VesselContractRow {
    /// `true` if the contract loads or discharges at `port`.
    pub fn calls_at(&self, port: &str) -> bool {
        self.load_port == port || self.discharge_port == port
    }
}

const CONTRACT_COLUMNS: &[Column] = &[
    Column::text("vessel_id"),
    Column::text("load_port"),
    Column::text("discharge_port"),
    Column::text("material"),
    Column::real("ocean_freight_inr_tonne"),
    Column::real("demurrage_rate_inr_hr"),
    Column::real("contract_quantity_tonnes"),
    Column::real("laydays_allowed_hours"),
];

impl TableRow for VesselContractRow {
    const SCHEMA: TableSchema = TableSchema {
        table:     "vessel_costs",
        file_stem: "vessel_cost",
        producer:  "contracts",
        columns:   CONTRACT_COLUMNS,
    };

    fn values(&self) -> Vec<Value> {
        vec![
            self.vessel_id.as_str().into(),
            self.load_port.as_str().into(),
            self.discharge_port.as_str().into(),
            self.material.as_str().into(),
            self.ocean_freight_inr_tonne.into(),
            self.demurrage_rate_inr_hr.into(),
            self.contract_quantity_tonnes.into(),
            self.laydays_allowed_hours.into(),
        ]
    }
}

// ── Vessel delay history ──────────────────────────────────────────────────────

/// One vessel arrival with its berthing delay and the context that produced it.
///
/// `port_utilization_percent` is a stage-file column only.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct VesselDelayRow {
    pub vessel_name:              String,
    pub port_name:                String,
    #[serde(with = "datetime_format")]
    pub eta_datetime:             NaiveDateTime,
    #[serde(with = "datetime_format")]
    pub actual_berth_time:        NaiveDateTime,
    pub parcel_size_tonnes:       f64,
    #[serde(with = "datetime_format")]
    pub laydays_start:            NaiveDateTime,
    #[serde(with = "datetime_format")]
    pub laydays_end:              NaiveDateTime,
    pub queue_length:             u32,
    pub weather_score:            u32,
    pub crane_availability:       u32,
    pub past_delay_avg_hours:     f64,
    pub laydays_limit_hours:      f64,
    pub delay_hours:              f64,
    pub demurrage_cost_inr:       f64,
    pub port_utilization_percent: f64,
}

const DELAY_COLUMNS: &[Column] = &[
    Column::text("vessel_name"),
    Column::text("port_name"),
    Column::datetime("eta_datetime"),
    Column::datetime("actual_berth_time"),
    Column::real("parcel_size_tonnes"),
    Column::datetime("laydays_start"),
    Column::datetime("laydays_end"),
    Column::integer("queue_length"),
    Column::integer("weather_score"),
    Column::integer("crane_availability"),
    Column::real("past_delay_avg_hours"),
    Column::real("laydays_limit_hours"),
    Column::real("delay_hours"),
    Column::real("demurrage_cost_inr"),
    Column::real("port_utilization_percent").stage_only(),
];

impl TableRow for VesselDelayRow {
    const SCHEMA: TableSchema = TableSchema {
        table:     "delay_history",
        file_stem: "vessel_delay_history",
        producer:  "vessels",
        columns:   DELAY_COLUMNS,
    };

    fn values(&self) -> Vec<Value> {
        vec![
            self.vessel_name.as_str().into(),
            self.port_name.as_str().into(),
            self.eta_datetime.into(),
            self.actual_berth_time.into(),
            self.parcel_size_tonnes.into(),
            self.laydays_start.into(),
            self.laydays_end.into(),
            self.queue_length.into(),
            self.weather_score.into(),
            self.crane_availability.into(),
            self.past_delay_avg_hours.into(),
            self.laydays_limit_hours.into(),
            self.delay_hours.into(),
            self.demurrage_cost_inr.into(),
            self.port_utilization_percent.into(),
        ]
    }
}
