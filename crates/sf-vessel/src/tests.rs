//! Unit tests for sf-vessel.

use chrono::NaiveDate;

use sf_table::PortLogRow;

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 3, d).unwrap()
}

fn port_row(d: u32, port: &str, utilization: f64, weather: u32) -> PortLogRow {
    PortLogRow {
        date:                              date(d),
        port_name:                         port.into(),
        coal_bod_storage_tonnes:           0.0,
        limestone_bod_storage_tonnes:      0.0,
        steel_bod_storage_tonnes:          0.0,
        coal_arrived_tonnes:               0.0,
        limestone_arrived_tonnes:          0.0,
        coal_departed_tonnes:              0.0,
        limestone_departed_tonnes:         0.0,
        steel_arrived_tonnes:              0.0,
        steel_shipped_tonnes:              0.0,
        coal_eod_storage_tonnes:           0.0,
        limestone_eod_storage_tonnes:      0.0,
        steel_eod_storage_tonnes:          utilization * 500.0,
        total_cargo_flow_today_tonnes:     0.0,
        weather_delay_index:               weather,
        steel_storage_utilization_percent: utilization,
    }
}

#[cfg(test)]
mod contracts {
    use sf_core::{Material, SimRng};

    use crate::contract::{COAL_SOURCE_PORTS, INDIAN_PORTS, LAYDAYS_HOURS, LIMESTONE_SOURCE_PORTS, STEEL_DESTINATION_PORTS};
    use crate::{ContractGenerator, ContractParams, VesselError};

    #[test]
    fn vessels_and_contract_counts() {
        let rows = ContractGenerator::default().generate(&mut SimRng::new(1));
        for v in 1..=25 {
            let id = format!("V{v:03}");
            let n = rows.iter().filter(|r| r.vessel_id == id).count();
            assert!((3..=5).contains(&n), "{id} has {n} contracts");
        }
        assert_eq!(rows[0].vessel_id, "V001");
    }

    #[test]
    fn ports_follow_material_direction() {
        let rows = ContractGenerator::default().generate(&mut SimRng::new(2));
        for r in &rows {
            match r.material {
                Material::Steel => {
                    assert!(INDIAN_PORTS.contains(&r.load_port.as_str()));
                    assert!(STEEL_DESTINATION_PORTS.contains(&r.discharge_port.as_str()));
                }
                Material::Coal => {
                    assert!(COAL_SOURCE_PORTS.contains(&r.load_port.as_str()));
                    assert!(INDIAN_PORTS.contains(&r.discharge_port.as_str()));
                }
                Material::Limestone => {
                    assert!(LIMESTONE_SOURCE_PORTS.contains(&r.load_port.as_str()));
                    assert!(INDIAN_PORTS.contains(&r.discharge_port.as_str()));
                }
            }
        }
    }

    #[test]
    fn rates_are_in_inr_ranges() {
        let rows = ContractGenerator::default().generate(&mut SimRng::new(3));
        for r in &rows {
            assert!(r.demurrage_rate_inr_hr >= 800.0 * 83.0 && r.demurrage_rate_inr_hr <= 1500.0 * 83.0);
            let (lo, hi) = match r.material {
                Material::Coal      => (20.0, 28.0),
                Material::Limestone => (15.0, 22.0),
                Material::Steel     => (35.0, 50.0),
            };
            assert!(r.ocean_freight_inr_tonne >= lo * 83.0 && r.ocean_freight_inr_tonne <= hi * 83.0);
            assert_eq!(r.contract_quantity_tonnes % 100.0, 0.0);
            assert!(LAYDAYS_HOURS.contains(&r.laydays_allowed_hours));
        }
    }

    #[test]
    fn inverted_contract_range_is_rejected() {
        let params = ContractParams { contracts_per_vessel: (5, 3), ..ContractParams::default() };
        assert!(matches!(ContractGenerator::new(params), Err(VesselError::InvalidParams(_))));
    }
}

#[cfg(test)]
mod delay {
    use sf_core::SimRng;

    use crate::{BerthContext, DelayModel, MAX_CRANES};

    #[test]
    fn idle_port_hits_the_floor() {
        let ctx = BerthContext { utilization: 0.0, weather: 0, cranes: MAX_CRANES, past_avg: 0.0 };
        let mut rng = SimRng::new(1);
        assert_eq!(DelayModel::default().delay_hours(&ctx, &mut rng), 1.0);
    }

    #[test]
    fn delay_is_clamped() {
        let ctx = BerthContext { utilization: 100.0, weather: 50, cranes: 1, past_avg: 40.0 };
        let mut rng = SimRng::new(2);
        for _ in 0..100 {
            let d = DelayModel::default().delay_hours(&ctx, &mut rng);
            assert!((1.0..=240.0).contains(&d));
        }
        assert_eq!(DelayModel::default().delay_hours(&ctx, &mut rng), 240.0);
    }

    #[test]
    fn cranes_in_range() {
        let mut rng = SimRng::new(3);
        for _ in 0..200 {
            assert!((1..=MAX_CRANES).contains(&DelayModel::sample_cranes(&mut rng)));
        }
    }
}

#[cfg(test)]
mod simulator {
    use sf_core::SimRng;
    use sf_core::calendar::hours_between;

    use super::*;
    use crate::{ContractGenerator, VesselDelaySimulator, VesselParams};

    fn port_log(days: u32) -> Vec<PortLogRow> {
        let mut rows = Vec::new();
        for d in 1..=days {
            for (i, port) in ["Haldia Port", "Paradip Port", "Visakhapatnam Port"].iter().enumerate() {
                rows.push(port_row(d, port, 20.0 + i as f64 * 10.0, (d + i as u32) % 6));
            }
        }
        rows
    }

    fn no_history() -> VesselDelaySimulator {
        VesselDelaySimulator::new(VesselParams { history_days: 0, ..VesselParams::default() }).unwrap()
    }

    #[test]
    fn window_reaches_back_into_history() {
        let log = port_log(10);
        let cal = VesselDelaySimulator::default().window(&log).unwrap();
        assert_eq!(cal.start, date(1) - chrono::Duration::days(365));
        assert_eq!(cal.last(), Some(date(10)));
    }

    #[test]
    fn rows_are_consistent() {
        let log = port_log(30);
        let contracts = ContractGenerator::default().generate(&mut SimRng::new(7));
        let rows = VesselDelaySimulator::default().run(&log, &contracts, &mut SimRng::new(8)).unwrap();
        assert!(!rows.is_empty());
        for pair in rows.windows(2) {
            assert!((pair[0].eta_datetime, &pair[0].port_name) <= (pair[1].eta_datetime, &pair[1].port_name));
        }
        for r in &rows {
            assert!((1.0..=240.0).contains(&r.delay_hours));
            let berth = hours_between(r.eta_datetime, r.actual_berth_time);
            assert!((berth - r.delay_hours).abs() < 1e-9);
            assert!(contracts.iter().any(|c| c.vessel_id == r.vessel_name && c.calls_at(&r.port_name)));
            let lay_back = hours_between(r.laydays_start, r.eta_datetime) / 24.0;
            let lay_fwd = hours_between(r.eta_datetime, r.laydays_end) / 24.0;
            assert!((1.0..=3.0).contains(&lay_back));
            assert!((7.0..=10.0).contains(&lay_fwd));
            assert!((1..=5).contains(&r.crane_availability));
            assert!((10.0..=40.0).contains(&r.past_delay_avg_hours));
        }
    }

    #[test]
    fn port_context_comes_from_the_port_log() {
        let log = port_log(60);
        let contracts = ContractGenerator::default().generate(&mut SimRng::new(1));
        let rows = no_history().run(&log, &contracts, &mut SimRng::new(2)).unwrap();
        assert!(!rows.is_empty());
        for r in &rows {
            let src = log
                .iter()
                .find(|p| p.date == r.eta_datetime.date() && p.port_name == r.port_name)
                .unwrap();
            assert_eq!(r.port_utilization_percent, src.steel_storage_utilization_percent);
            assert_eq!(r.weather_score, src.weather_delay_index);
        }
    }

    #[test]
    fn history_days_use_fallback_context() {
        let log = port_log(1);
        let contracts = ContractGenerator::default().generate(&mut SimRng::new(1));
        let rows = VesselDelaySimulator::default().run(&log, &contracts, &mut SimRng::new(3)).unwrap();
        for r in rows.iter().filter(|r| r.eta_datetime.date() < date(1)) {
            assert!((50.0..=80.0).contains(&r.port_utilization_percent));
            assert!(r.weather_score <= 2);
        }
    }

    #[test]
    fn port_without_contracts_yields_nothing() {
        let log = vec![port_row(1, "Kolkata Port", 40.0, 1)];
        let contracts = ContractGenerator::default().generate(&mut SimRng::new(1));
        let rows = VesselDelaySimulator::default().run(&log, &contracts, &mut SimRng::new(4)).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn empty_port_log() {
        let rows = VesselDelaySimulator::default().run(&[], &[], &mut SimRng::new(1)).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn same_seed_same_history() {
        let log = port_log(20);
        let contracts = ContractGenerator::default().generate(&mut SimRng::new(9));
        let sim = VesselDelaySimulator::default();
        let a = sim.run(&log, &contracts, &mut SimRng::new(10)).unwrap();
        let b = sim.run(&log, &contracts, &mut SimRng::new(10)).unwrap();
        assert_eq!(a, b);
    }
}
