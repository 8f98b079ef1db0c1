use chrono::NaiveDate;
use serde::Deserialize;

use sf_core::Material;

use crate::schema::{Column, TableRow, TableSchema, Value};

/// One plant-day of the plant stock log.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PlantLogRow {
    pub date:                                    NaiveDate,
    pub plant_id:                                String,
    pub plant_name:                              String,
    pub max_operating_capacity_mtpa:             f64,
    pub cumulative_capacity_utilization_percent: f64,
    pub stock_utilization_percent:               f64,
    pub min_stock_target_tonnes:                 f64,
    pub coal_bod_stock_tonnes:                   f64,
    pub limestone_bod_stock_tonnes:              f64,
    pub coal_required_tonnes:                    f64,
    pub limestone_required_tonnes:               f64,
    pub consumed_coal_tonnes:                    f64,
    pub consumed_limestone_tonnes:               f64,
    pub coal_arrived_tonnes:                     f64,
    pub limestone_arrived_tonnes:                f64,
    pub coal_eod_stock_tonnes:                   f64,
    pub limestone_eod_stock_tonnes:              f64,
    pub steel_exported_tonnes:                   f64,
}

impl PlantLogRow {
    /// Tonnage moved by rail for `material` on this day: arrivals for the raw
    /// materials, exports for steel.
    pub fn rail_quantity(&self, material: Material) -> f64 {
        match material {
            Material::Coal      => self.coal_arrived_tonnes,
            Material::Limestone => self.limestone_arrived_tonnes,
            Material::Steel     => self.steel_exported_tonnes,
        }
    }
}

const COLUMNS: &[Column] = &[
    Column::date("date"),
    Column::text("plant_id"),
    Column::text("plant_name"),
    Column::real("max_operating_capacity_mtpa"),
    Column::real("cumulative_capacity_utilization_percent"),
    Column::real("stock_utilization_percent"),
    Column::real("min_stock_target_tonnes"),
    Column::real("coal_bod_stock_tonnes"),
    Column::real("limestone_bod_stock_tonnes"),
    Column::real("coal_required_tonnes"),
    Column::real("limestone_required_tonnes"),
    Column::real("consumed_coal_tonnes"),
    Column::real("consumed_limestone_tonnes"),
    Column::real("coal_arrived_tonnes"),
    Column::real("limestone_arrived_tonnes"),
    Column::real("coal_eod_stock_tonnes"),
    Column::real("limestone_eod_stock_tonnes"),
    Column::real("steel_exported_tonnes"),
];

impl TableRow for PlantLogRow {
    const SCHEMA: TableSchema = TableSchema {
        table:     "plants",
        file_stem: "plant_log",
        producer:  "plants",
        columns:   COLUMNS,
    };

    fn values(&self) -> Vec<Value> {
        vec![
            self.date.into(),
            self.plant_id.as_str().into(),
            self.plant_name.as_str().into(),
            self.max_operating_capacity_mtpa.into(),
            self.cumulative_capacity_utilization_percent.into(),
            self.stock_utilization_percent.into(),
            self.min_stock_target_tonnes.into(),
            self.coal_bod_stock_tonnes.into(),
            self.limestone_bod_stock_tonnes.into(),
            self.coal_required_tonnes.into(),
            self.limestone_required_tonnes.into(),
            self.consumed_coal_tonnes.into(),
            self.consumed_limestone_tonnes.into(),
            self.coal_arrived_tonnes.into(),
            self.limestone_arrived_tonnes.into(),
            self.coal_eod_stock_tonnes.into(),
            self.limestone_eod_stock_tonnes.into(),
            self.steel_exported_tonnes.into(),
        ]
    }
}
