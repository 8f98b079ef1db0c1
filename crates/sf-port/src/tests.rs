//! Unit tests for sf-port.

use chrono::{NaiveDate, NaiveDateTime};

use sf_core::Material;
use sf_table::TripRow;

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, d).unwrap()
}

fn at(d: u32, h: u32) -> NaiveDateTime {
    date(d).and_hms_opt(h, 0, 0).unwrap()
}

fn trip(source: &str, dest: &str, material: Material, qty: f64, dep: NaiveDateTime, arr: NaiveDateTime) -> TripRow {
    TripRow {
        trip_id:                 format!("T_{source}_{dest}"),
        rake_id:                 100_001,
        material_flow:           material.flow(),
        material,
        source:                  source.into(),
        destination:             dest.into(),
        quantity_tonnes:         qty,
        distance_km:             500.0,
        rake_availability_index: 1.0,
        base_time_h:             12.5,
        loading_time_h:          2.0,
        unloading_time_h:        2.0,
        delay_h:                 1.0,
        total_time_h:            17.5,
        departure_time:          dep,
        arrival_time:            arr,
        rail_freight_inr_tonne:  1.5,
        port_handling_inr_tonne: 200.0,
        total_trip_cost_inr:     1.0,
    }
}

#[cfg(test)]
mod day_index {
    use super::*;
    use crate::DayIndex;

    #[test]
    fn buckets_keep_insertion_order() {
        let items = [date(3), date(1), date(3), date(2)];
        let idx = DayIndex::build(&items, |d| *d);
        assert_eq!(idx.on(date(3)), &[0, 2]);
        assert_eq!(idx.on(date(1)), &[1]);
        assert!(idx.on(date(9)).is_empty());
        assert_eq!(idx.first_day(), Some(date(1)));
        assert_eq!(idx.last_day(), Some(date(3)));
        assert_eq!(idx.len(), 4);
        assert_eq!(idx.day_count(), 3);
    }
}

#[cfg(test)]
mod ledger {
    use super::*;
    use crate::CeilingLedger;

    #[test]
    fn ceiling_sums_departures_from_the_port() {
        let trips = [
            trip("Haldia Port", "Bhilai", Material::Coal, 4000.0, at(1, 0), at(2, 0)),
            trip("Haldia Port", "Bhilai", Material::Coal, 3000.0, at(2, 0), at(3, 0)),
            trip("Paradip Port", "Bhilai", Material::Coal, 9000.0, at(1, 0), at(2, 0)),
            trip("Bhilai", "Haldia Port", Material::Steel, 5000.0, at(1, 0), at(2, 0)),
        ];
        let ledger = CeilingLedger::from_trips("Haldia Port", &trips);
        assert_eq!(ledger.ceiling(Material::Coal), 7000.0);
        assert_eq!(ledger.ceiling(Material::Limestone), 0.0);
        assert_eq!(ledger.ceiling(Material::Steel), 0.0);
        assert_eq!(ledger.allowance(Material::Coal), 7000.0);
    }

    #[test]
    fn rail_arrivals_use_up_the_allowance() {
        let mut ledger = CeilingLedger::new([10_000.0, 0.0, 0.0]);
        ledger.record_arrival(Material::Coal, 6000.0);
        assert_eq!(ledger.allowance(Material::Coal), 4000.0);
        ledger.record_arrival(Material::Coal, 6000.0);
        assert_eq!(ledger.received(Material::Coal), 12_000.0);
        assert_eq!(ledger.allowance(Material::Coal), 0.0);
    }
}

#[cfg(test)]
mod policy {
    use crate::{MaterialPolicy, PortError, PortPolicy};

    #[test]
    fn defaults() {
        let p = PortPolicy::default();
        assert_eq!(p.coal.trigger, 20_000.0);
        assert_eq!(p.limestone.max_storage, 40_000.0);
        assert_eq!(p.steel.range, (10_000.0, 20_000.0));
        assert!(p.validate().is_ok());
    }

    #[test]
    fn inverted_range_is_rejected() {
        let mut p = PortPolicy::default();
        p.coal = MaterialPolicy { range: (5.0, 1.0), ..MaterialPolicy::coal() };
        assert!(matches!(p.validate(), Err(PortError::InvalidPolicy(_))));
    }
}

#[cfg(test)]
mod yard {
    use sf_core::SimRng;

    use super::*;
    use crate::{CeilingLedger, Movement, PortPolicy, PortYard};

    fn mv(material: Material, quantity: f64) -> Movement {
        Movement { material, quantity }
    }

    #[test]
    fn replenishment_respects_capacity() {
        let policy = PortPolicy::default();
        let ledger = CeilingLedger::new([1.0e9, 1.0e9, 0.0]);
        let mut yard = PortYard::with_storage("Haldia Port", ledger, [15_000.0, 0.0, 0.0], &policy);
        let mut rng = SimRng::new(7);
        for _ in 0..50 {
            let f = yard.step(&[], &[], false, &policy, &mut rng);
            assert!(f.eod[0] <= 50_000.0 + 1e-9);
            assert!(f.eod[1] <= 40_000.0 + 1e-9);
        }
        assert!(yard.storage(Material::Coal) >= 20_000.0);
    }

    #[test]
    fn zero_ceiling_blocks_injection() {
        let policy = PortPolicy::default();
        let mut yard = PortYard::new("Kolkata Port", CeilingLedger::new([0.0; 3]));
        let mut rng = SimRng::new(1);
        let f = yard.step(&[mv(Material::Coal, 5000.0)], &[], false, &policy, &mut rng);
        assert_eq!(f.arrived, [0.0; 3]);
        assert_eq!(f.departed, [0.0; 3]);
        assert_eq!(yard.storage(Material::Coal), 0.0);
    }

    #[test]
    fn catch_up_injection_feeds_departure() {
        let policy = PortPolicy::default();
        let mut yard = PortYard::new("Paradip Port", CeilingLedger::new([8000.0, 0.0, 0.0]));
        let mut rng = SimRng::new(3);
        let f = yard.step(&[mv(Material::Coal, 8000.0)], &[], false, &policy, &mut rng);
        assert_eq!(f.arrived[0], 8000.0);
        assert_eq!(f.departed[0], 8000.0);
        assert_eq!(f.eod[0], 0.0);
        assert_eq!(yard.ledger().allowance(Material::Coal), 0.0);
    }

    #[test]
    fn overflow_passes_through() {
        let policy = PortPolicy::default();
        let mut yard = PortYard::with_storage("Haldia Port", CeilingLedger::default(), [0.0, 0.0, 45_000.0], &policy);
        let mut rng = SimRng::new(5);
        // Steel at 45 000 is above trigger so a shipment happens after the arrival.
        let f = yard.step(&[], &[mv(Material::Steel, 8000.0)], false, &policy, &mut rng);
        assert_eq!(f.arrived[2], 8000.0);
        assert!(f.departed[2] >= 3000.0);
        assert!(f.eod[2] >= 0.0 && f.eod[2] <= 50_000.0);
        let lhs = f.bod[2] + f.arrived[2] - f.departed[2];
        assert!((lhs - f.eod[2]).abs() < 1e-6);
    }

    #[test]
    fn last_day_ships_all_steel() {
        let policy = PortPolicy::default();
        let mut yard = PortYard::with_storage("Haldia Port", CeilingLedger::default(), [0.0, 0.0, 12_000.0], &policy);
        let mut rng = SimRng::new(9);
        let f = yard.step(&[], &[mv(Material::Steel, 1000.0)], true, &policy, &mut rng);
        assert_eq!(f.departed[2], 13_000.0);
        assert_eq!(f.eod[2], 0.0);
    }

    #[test]
    fn steel_below_trigger_waits() {
        let policy = PortPolicy::default();
        let mut yard = PortYard::with_storage("Haldia Port", CeilingLedger::default(), [0.0, 0.0, 24_000.0], &policy);
        let mut rng = SimRng::new(9);
        let f = yard.step(&[], &[], false, &policy, &mut rng);
        assert_eq!(f.departed[2], 0.0);
        assert_eq!(f.eod[2], 24_000.0);
    }
}

#[cfg(test)]
mod simulator {
    use sf_core::SimRng;
    use sf_network::Network;

    use super::*;
    use crate::{PortFlowSimulator, PortPolicy};

    fn sample_trips() -> Vec<TripRow> {
        let mut trips = Vec::new();
        for d in 1..=10 {
            trips.push(trip("Paradip Port", "Bhilai Steel Plant", Material::Coal, 4500.0, at(d, 3), at(d + 1, 1)));
            trips.push(trip("Haldia Port", "Durgapur Steel Plant", Material::Limestone, 3000.0, at(d, 6), at(d, 20)));
            trips.push(trip("Bhilai Steel Plant", "Visakhapatnam Port", Material::Steel, 7000.0, at(d, 8), at(d + 1, 4)));
        }
        trips
    }

    #[test]
    fn window_and_row_order() {
        let network = Network::default_catalog().unwrap();
        let trips = sample_trips();
        let run = PortFlowSimulator::default().run(&network, &trips, &mut SimRng::new(42)).unwrap();
        let ports = network.ports().len();
        // Departures start on day 1, arrivals end on day 11.
        assert_eq!(run.rows.len(), 11 * ports);
        assert_eq!(run.rows[0].date, date(1));
        assert_eq!(run.rows.last().unwrap().date, date(11));
        for pair in run.rows.windows(2) {
            let a = (&pair[0].date, &pair[0].port_name);
            let b = (&pair[1].date, &pair[1].port_name);
            assert!(a < b);
        }
    }

    #[test]
    fn storage_stays_in_bounds_and_ceilings_hold() {
        let network = Network::default_catalog().unwrap();
        let trips = sample_trips();
        let policy = PortPolicy::default();
        let run = PortFlowSimulator::default().run(&network, &trips, &mut SimRng::new(11)).unwrap();
        for row in &run.rows {
            for m in Material::ALL {
                let max = policy.get(m).max_storage;
                assert!(row.eod_storage(m) >= 0.0, "{row:?}");
                assert!(row.eod_storage(m) <= max + 0.01, "{row:?}");
            }
            assert!(row.weather_delay_index <= 5);
            assert!(row.steel_storage_utilization_percent <= 100.0);
        }
        for yard in &run.yards {
            for m in Material::RAW {
                assert!(yard.ledger().received(m) <= yard.ledger().ceiling(m) + 1e-6);
            }
        }
    }

    #[test]
    fn rail_arrivals_count_against_the_ceiling() {
        let network = Network::default_catalog().unwrap();
        let trips = [
            trip("Jharia Coal Mines", "Haldia Port", Material::Coal, 10_000.0, at(1, 0), at(1, 10)),
            trip("Haldia Port", "Bokaro Steel Plant", Material::Coal, 10_000.0, at(3, 0), at(3, 12)),
        ];
        let run = PortFlowSimulator::default().run(&network, &trips, &mut SimRng::new(42)).unwrap();
        let haldia: Vec<_> = run.rows.iter().filter(|r| r.port_name == "Haldia Port").collect();
        assert!(!haldia.is_empty());
        let arrived: f64 = haldia.iter().map(|r| r.coal_arrived_tonnes).sum();
        assert!((arrived - 10_000.0).abs() < 0.01, "arrived {arrived}");
        let departed: f64 = haldia.iter().map(|r| r.coal_departed_tonnes).sum();
        assert!((departed - 10_000.0).abs() < 0.01, "departed {departed}");
        let yard = run.yards.iter().find(|y| y.name == "Haldia Port").unwrap();
        assert!(yard.ledger().received(Material::Coal) <= yard.ledger().ceiling(Material::Coal) + 1e-6);
    }

    #[test]
    fn all_steel_leaves_on_the_last_day() {
        let network = Network::default_catalog().unwrap();
        let trips = sample_trips();
        let run = PortFlowSimulator::default().run(&network, &trips, &mut SimRng::new(2)).unwrap();
        for row in run.rows.iter().filter(|r| r.date == date(11)) {
            assert_eq!(row.steel_eod_storage_tonnes, 0.0);
        }
        let shipped: f64 = run
            .rows
            .iter()
            .filter(|r| r.port_name == "Visakhapatnam Port")
            .map(|r| r.steel_shipped_tonnes)
            .sum();
        assert!((shipped - 70_000.0).abs() < 0.1);
    }

    #[test]
    fn empty_train_log_gives_empty_port_log() {
        let network = Network::default_catalog().unwrap();
        let run = PortFlowSimulator::default().run(&network, &[], &mut SimRng::new(1)).unwrap();
        assert!(run.rows.is_empty());
    }

    #[test]
    fn same_seed_same_log() {
        let network = Network::default_catalog().unwrap();
        let trips = sample_trips();
        let sim = PortFlowSimulator::default();
        let a = sim.run(&network, &trips, &mut SimRng::new(5)).unwrap();
        let b = sim.run(&network, &trips, &mut SimRng::new(5)).unwrap();
        assert_eq!(a.rows, b.rows);
    }

    #[test]
    fn flow_column_is_arrivals_plus_departures() {
        let network = Network::default_catalog().unwrap();
        let trips = sample_trips();
        let run = PortFlowSimulator::default().run(&network, &trips, &mut SimRng::new(8)).unwrap();
        for r in &run.rows {
            let sum: f64 = Material::ALL.iter().map(|&m| r.arrived(m) + r.departed(m)).sum();
            assert!((sum - r.total_cargo_flow_today_tonnes).abs() < 0.05);
        }
    }
}

#[cfg(test)]
mod tariff {
    use sf_core::{Material, SimRng};

    use crate::PortTariffGenerator;

    #[test]
    fn one_row_per_port_material_in_range() {
        let ports = ["Haldia Port", "Paradip Port"];
        let rows = PortTariffGenerator.generate(&ports, &mut SimRng::new(4));
        assert_eq!(rows.len(), 6);
        for r in &rows {
            let (lo, hi) = match r.material {
                Material::Coal      => (180.0, 385.0),
                Material::Limestone => (135.0, 330.0),
                Material::Steel     => (225.0, 440.0),
            };
            assert!(r.handling_cost_inr_tonne >= lo && r.handling_cost_inr_tonne <= hi);
            assert_eq!(r.max_throughput_t_day % 100.0, 0.0);
        }
        assert_eq!(rows[0].port_name, "Haldia Port");
        assert_eq!(rows[3].port_name, "Paradip Port");
    }
}
