//! Feature vectors.
//!
//! Categorical columns are label-encoded over the table being scored, so
//! encoders are fitted on the whole table first.

use sf_core::calendar::epoch_secs;
use sf_table::{TripRow, VesselDelayRow};

use crate::LabelEncoder;

/// Port model inputs, in order.
pub const PORT_FEATURES: [&str; 10] = [
    "id",
    "parcel_size_tonnes",
    "queue_length",
    "weather_score",
    "crane_availability",
    "port_name_encoded",
    "vessel_name_encoded",
    "eta_datetime_sec",
    "laydays_start_sec",
    "laydays_end_sec",
];

/// Rail model inputs, in order.
pub const RAIL_FEATURES: [&str; 15] = [
    "quantity_tonnes",
    "distance_km",
    "rake_availability_index",
    "base_time_h",
    "loading_time_h",
    "unloading_time_h",
    "rail_freight_inr_tonne",
    "port_handling_inr_tonne",
    "departure_time_sec",
    "trip_id_encoded",
    "material_flow_encoded",
    "material_encoded",
    "source_encoded",
    "destination_encoded",
    "rake_id_encoded",
];

#[derive(Clone, Debug)]
pub struct RailFeatureEncoder {
    trip_id:       LabelEncoder,
    material_flow: LabelEncoder,
    material:      LabelEncoder,
    source:        LabelEncoder,
    destination:   LabelEncoder,
    rake_id:       LabelEncoder,
}

impl RailFeatureEncoder {
    pub fn fit(trips: &[TripRow]) -> Self {
        let rake_ids: Vec<String> = trips.iter().map(|t| t.rake_id.to_string()).collect();
        Self {
            trip_id:       LabelEncoder::fit(trips.iter().map(|t| t.trip_id.as_str())),
            material_flow: LabelEncoder::fit(trips.iter().map(|t| t.material_flow.as_str())),
            material:      LabelEncoder::fit(trips.iter().map(|t| t.material.as_str())),
            source:        LabelEncoder::fit(trips.iter().map(|t| t.source.as_str())),
            destination:   LabelEncoder::fit(trips.iter().map(|t| t.destination.as_str())),
            rake_id:       LabelEncoder::fit(rake_ids.iter().map(String::as_str)),
        }
    }

    pub fn features(&self, t: &TripRow) -> Vec<f32> {
        vec![
            t.quantity_tonnes as f32,
            t.distance_km as f32,
            t.rake_availability_index as f32,
            t.base_time_h as f32,
            t.loading_time_h as f32,
            t.unloading_time_h as f32,
            t.rail_freight_inr_tonne as f32,
            t.port_handling_inr_tonne as f32,
            epoch_secs(t.departure_time) as f32,
            self.trip_id.feature(&t.trip_id),
            self.material_flow.feature(t.material_flow.as_str()),
            self.material.feature(t.material.as_str()),
            self.source.feature(&t.source),
            self.destination.feature(&t.destination),
            self.rake_id.feature(&t.rake_id.to_string()),
        ]
    }
}

#[derive(Clone, Debug)]
pub struct PortFeatureEncoder {
    port_name:   LabelEncoder,
    vessel_name: LabelEncoder,
}

impl PortFeatureEncoder {
    pub fn fit(rows: &[VesselDelayRow]) -> Self {
        Self {
            port_name:   LabelEncoder::fit(rows.iter().map(|r| r.port_name.as_str())),
            vessel_name: LabelEncoder::fit(rows.iter().map(|r| r.vessel_name.as_str())),
        }
    }

    /// `id` is the row's 1-based record id.
    pub fn features(&self, id: usize, r: &VesselDelayRow) -> Vec<f32> {
        vec![
            id as f32,
            r.parcel_size_tonnes as f32,
            r.queue_length as f32,
            r.weather_score as f32,
            r.crane_availability as f32,
            self.port_name.feature(&r.port_name),
            self.vessel_name.feature(&r.vessel_name),
            epoch_secs(r.eta_datetime) as f32,
            epoch_secs(r.laydays_start) as f32,
            epoch_secs(r.laydays_end) as f32,
        ]
    }
}
