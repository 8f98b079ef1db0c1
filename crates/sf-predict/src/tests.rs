//! Unit tests for sf-predict.

use chrono::NaiveDate;

use sf_core::Material;
use sf_table::{TripRow, VesselDelayRow};

fn trip(id: &str, source: &str, dest: &str, material: Material, rake: u32) -> TripRow {
    let dep = NaiveDate::from_ymd_opt(2023, 1, 5).unwrap().and_hms_opt(6, 0, 0).unwrap();
    TripRow {
        trip_id:                 id.into(),
        rake_id:                 rake,
        material_flow:           material.flow(),
        material,
        source:                  source.into(),
        destination:             dest.into(),
        quantity_tonnes:         4000.0,
        distance_km:             650.0,
        rake_availability_index: 1.2,
        base_time_h:             16.25,
        loading_time_h:          4.0,
        unloading_time_h:        3.2,
        delay_h:                 5.0,
        total_time_h:            28.45,
        departure_time:          dep,
        arrival_time:            dep + chrono::Duration::hours(28),
        rail_freight_inr_tonne:  3900.0,
        port_handling_inr_tonne: 300.0,
        total_trip_cost_inr:     16_800_000.0,
    }
}

fn sample_trips() -> Vec<TripRow> {
    vec![
        trip("BHI_0002", "Bhilai Steel Plant", "Haldia Port", Material::Steel, 200_000),
        trip("BHI_0001", "Dalli Rajhara Mine", "Bhilai Steel Plant", Material::Coal, 100_000),
        trip("ROU_0001", "Paradip Port", "Rourkela Steel Plant", Material::Limestone, 100_000),
    ]
}

fn call(vessel: &str, port: &str, day: u32) -> VesselDelayRow {
    let eta = NaiveDate::from_ymd_opt(2022, 3, day).unwrap().and_hms_opt(14, 30, 0).unwrap();
    VesselDelayRow {
        vessel_name:              vessel.into(),
        port_name:                port.into(),
        eta_datetime:             eta,
        actual_berth_time:        eta + chrono::Duration::hours(20),
        parcel_size_tonnes:       60_000.0,
        laydays_start:            eta - chrono::Duration::days(2),
        laydays_end:              eta + chrono::Duration::days(8),
        queue_length:             2,
        weather_score:            1,
        crane_availability:       3,
        past_delay_avg_hours:     22.5,
        laydays_limit_hours:      96.0,
        delay_hours:              20.0,
        demurrage_cost_inr:       0.0,
        port_utilization_percent: 64.0,
    }
}

fn sample_calls() -> Vec<VesselDelayRow> {
    vec![
        call("V007", "Paradip Port", 3),
        call("V002", "Haldia Port", 4),
        call("V007", "Haldia Port", 6),
    ]
}

#[cfg(test)]
mod encode {
    use crate::LabelEncoder;

    #[test]
    fn codes_follow_sorted_order() {
        let enc = LabelEncoder::fit(["Steel", "Coal", "Limestone", "Coal"]);
        assert_eq!(enc.len(), 3);
        assert_eq!(enc.encode("Coal"), Some(0));
        assert_eq!(enc.encode("Limestone"), Some(1));
        assert_eq!(enc.encode("Steel"), Some(2));
        assert_eq!(enc.encode("Iron"), None);
        assert_eq!(enc.feature("Iron"), -1.0);
    }
}

#[cfg(test)]
mod features {
    use super::*;
    use crate::{PORT_FEATURES, PortFeatureEncoder, RAIL_FEATURES, RailFeatureEncoder};

    #[test]
    fn rail_vector_layout() {
        let trips = sample_trips();
        let enc = RailFeatureEncoder::fit(&trips);
        let f = enc.features(&trips[0]);
        assert_eq!(f.len(), RAIL_FEATURES.len());
        assert_eq!(f[0], 4000.0);
        assert_eq!(f[1], 650.0);
        // BHI_0002 sorts second among three trip ids.
        assert_eq!(f[9], 1.0);
        // Outbound sorts after Inbound.
        assert_eq!(f[10], 1.0);
        assert_eq!(f[11], 2.0);
        // 200000 sorts after 100000.
        assert_eq!(f[14], 1.0);
    }

    #[test]
    fn port_vector_has_ten_features() {
        assert_eq!(PORT_FEATURES.len(), 10);
        assert_eq!(PORT_FEATURES[0], "id");
        assert_eq!(PORT_FEATURES[9], "laydays_end_sec");
    }

    #[test]
    fn port_vector_layout() {
        let calls = sample_calls();
        let enc = PortFeatureEncoder::fit(&calls);
        let f = enc.features(3, &calls[2]);
        assert_eq!(f.len(), PORT_FEATURES.len());
        assert_eq!(f[0], 3.0);
        assert_eq!(f[1], 60_000.0);
        assert_eq!(f[2], 2.0);
        assert_eq!(f[4], 3.0);
        // Haldia sorts before Paradip, V007 after V002.
        assert_eq!(f[5], 0.0);
        assert_eq!(f[6], 1.0);
        assert!(f[8] < f[7] && f[7] < f[9]);
    }
}

#[cfg(test)]
mod linear {
    use std::path::Path;

    use crate::{LinearPredictor, PredictError, Predictor};

    #[test]
    fn weighted_sum_plus_bias() {
        let m = LinearPredictor::new([vec![1.0, 2.0], vec![0.5, 0.0]], [1.0, 10.0]).unwrap();
        let p = m.predict(&[3.0, 4.0]).unwrap();
        assert_eq!(p.delay_hours, 12.0);
        assert_eq!(p.cost, 11.5);
        assert_eq!(m.input_len(), Some(2));
    }

    #[test]
    fn wrong_feature_count_is_an_error() {
        let m = LinearPredictor::new([vec![1.0; 15], vec![1.0; 15]], [0.0, 0.0]).unwrap();
        let err = m.predict(&[1.0; 10]).unwrap_err();
        assert!(matches!(err, PredictError::FeatureLength { expected: 15, got: 10 }));
    }

    #[test]
    fn parses_json_weights() {
        let json = r#"{"weights": [[0.1, 0.2, 0.3], [1.0, 1.0, 1.0]], "bias": [2.0, 3.0]}"#;
        let m = LinearPredictor::from_json(json, Path::new("w.json")).unwrap();
        assert_eq!(m.input_len(), Some(3));
    }

    #[test]
    fn mismatched_rows_are_rejected() {
        let json = r#"{"weights": [[0.1, 0.2], [1.0]], "bias": [0.0, 0.0]}"#;
        let err = LinearPredictor::from_json(json, Path::new("w.json")).unwrap_err();
        assert!(matches!(err, PredictError::Shape(_)));
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = LinearPredictor::load(Path::new("/nonexistent/weights.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/weights.json"));
    }
}

#[cfg(test)]
mod safe {
    use std::io::Write;

    use crate::{LinearPredictor, ModelKind, Prediction, SafePredictor};

    #[test]
    fn unloaded_defaults() {
        assert_eq!(SafePredictor::unloaded(ModelKind::Port).predict(&[]), Prediction::new(10.0, 350.0));
        assert_eq!(SafePredictor::unloaded(ModelKind::Rail).predict(&[]), Prediction::new(8.0, 450.0));
    }

    #[test]
    fn runtime_failure_defaults() {
        let m = LinearPredictor::new([vec![1.0; 3], vec![1.0; 3]], [0.0, 0.0]).unwrap();
        let port = SafePredictor::new(ModelKind::Port, Some(Box::new(m.clone())));
        let rail = SafePredictor::new(ModelKind::Rail, Some(Box::new(m)));
        assert_eq!(port.predict(&[1.0; 5]), Prediction::new(12.0, 400.0));
        assert_eq!(rail.predict(&[1.0; 5]), Prediction::new(9.5, 500.0));
        assert_eq!(rail.predict(&[1.0; 3]), Prediction::new(3.0, 3.0));
    }

    #[test]
    fn load_failure_leaves_predictor_unloaded() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "not json").unwrap();
        let p = SafePredictor::load(ModelKind::Rail, Some(f.path()));
        assert!(!p.is_loaded());
        assert!(!SafePredictor::load(ModelKind::Port, None).is_loaded());
    }
}

#[cfg(test)]
mod score {
    use super::*;
    use crate::{LinearPredictor, ModelKind, SafePredictor, score_trains, score_vessels};

    #[test]
    fn one_prediction_per_trip_in_order() {
        let trips = sample_trips();
        let rows = score_trains(&trips, &SafePredictor::unloaded(ModelKind::Rail));
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].trip_id, "BHI_0002");
        assert!(rows.iter().all(|r| r.predicted_delay_h == 8.0 && r.predicted_cost_inr == 450.0));
    }

    #[test]
    fn loaded_model_scores_quantity() {
        let mut delay = vec![0.0; 15];
        delay[0] = 0.001;
        let model = LinearPredictor::new([delay, vec![0.0; 15]], [0.0, 100.0]).unwrap();
        let rows = score_trains(&sample_trips(), &SafePredictor::new(ModelKind::Rail, Some(Box::new(model))));
        assert!(rows.iter().all(|r| r.predicted_delay_h == 4.0 && r.predicted_cost_inr == 100.0));
    }

    #[test]
    fn one_vessel_prediction_per_call_with_port_fallback() {
        let calls = sample_calls();
        let rows = score_vessels(&calls, &SafePredictor::unloaded(ModelKind::Port));
        assert_eq!(rows.len(), calls.len());
        for (row, call) in rows.iter().zip(&calls) {
            assert_eq!(row.vessel_name, call.vessel_name);
            assert_eq!(row.port_name, call.port_name);
            assert_eq!(row.eta_datetime, call.eta_datetime);
            assert_eq!((row.predicted_delay_h, row.predicted_cost_inr), (10.0, 350.0));
        }
    }

    #[test]
    fn failing_port_model_gives_runtime_fallback() {
        // Built for the 15 rail features, so every 10-feature port vector fails.
        let model = LinearPredictor::new([vec![0.0; 15], vec![0.0; 15]], [0.0, 0.0]).unwrap();
        let rows = score_vessels(&sample_calls(), &SafePredictor::new(ModelKind::Port, Some(Box::new(model))));
        assert!(rows.iter().all(|r| r.predicted_delay_h == 12.0 && r.predicted_cost_inr == 400.0));
    }
}
