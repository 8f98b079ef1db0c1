//! Unit tests for sf-plant.

use chrono::NaiveDate;

use sf_core::SimCalendar;
use sf_network::{LocationKind, Network, NetworkBuilder, PlantConfig, RouteConfig};

fn year_2023() -> SimCalendar {
    SimCalendar::new(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(), 365)
}

fn single_plant(capacity_mtpa: f64) -> Network {
    let cfg = PlantConfig {
        id:                "P900".into(),
        name:              "Test Steel Plant".into(),
        capacity_mtpa,
        past_export:       1.0,
        coal_sources:      vec![RouteConfig::new("Test Mine", LocationKind::Mine, 40.0)],
        limestone_sources: vec![RouteConfig::new("Test Quarry", LocationKind::Mine, 20.0)],
        export_ports:      vec![RouteConfig::new("Test Port", LocationKind::Port, 300.0)],
    };
    NetworkBuilder::from_configs(&[cfg]).unwrap().build()
}

#[cfg(test)]
mod totals {
    use crate::{AnnualTotals, TotalValue};

    #[test]
    fn empty_figure_uses_its_default() {
        let t = AnnualTotals::parse("12", "", "7.5");
        assert_eq!(t, AnnualTotals { coal_mt: 12.0, limestone_mt: 4.0, steel_mt: 7.5 });
    }

    #[test]
    fn invalid_figure_resets_all() {
        assert_eq!(AnnualTotals::parse("12", "lots", "7"), AnnualTotals::default());
        assert_eq!(AnnualTotals::parse("-1", "4", "7"), AnnualTotals::default());
        assert_eq!(
            AnnualTotals::resolve(Some(&TotalValue::Number(f64::INFINITY)), None, None),
            AnnualTotals::default()
        );
    }

    #[test]
    fn absent_figures_default() {
        let steel = TotalValue::Number(3.0);
        let t = AnnualTotals::resolve(None, None, Some(&steel));
        assert_eq!(t.steel_tonnes(), 3_000_000.0);
        assert_eq!(t.coal_mt, 10.0);
    }
}

#[cfg(test)]
mod series {
    use sf_core::SimRng;

    use crate::series::{daily_exports, train_arrivals};

    #[test]
    fn exports_sum_to_yearly() {
        let mut rng = SimRng::new(11);
        for yearly in [1_000_000.0, 3_456_789.01, 0.0, 17.0] {
            let s = daily_exports(yearly, 365, &mut rng);
            assert_eq!(s.len(), 365);
            let sum: f64 = s.iter().sum();
            assert!((sum - yearly).abs() <= 0.01, "sum {sum} vs {yearly}");
            assert!(s.iter().all(|&d| d >= 0.0));
        }
    }

    #[test]
    fn arrivals_partition_total() {
        let mut rng = SimRng::new(5);
        let total = 2_000_123.45;
        let a = train_arrivals(total, 365, 5_000.0, 10_000.0, &mut rng);
        let sum: f64 = a.iter().sum();
        assert!((sum - total).abs() <= 0.01, "sum {sum}");
        // At least total / max loads were placed.
        assert!(a.iter().filter(|&&x| x > 0.0).count() >= 150);
    }

    #[test]
    fn arrivals_for_small_total() {
        let mut rng = SimRng::new(5);
        let a = train_arrivals(1_234.5, 10, 5_000.0, 10_000.0, &mut rng);
        assert_eq!(a.iter().filter(|&&x| x > 0.0).count(), 1);
        assert!((a.iter().sum::<f64>() - 1_234.5).abs() < 1e-9);
    }
}

#[cfg(test)]
mod simulator {
    use sf_core::{SimRng, round2};

    use super::*;
    use crate::{AnnualTotals, PlantError, PlantParams, PlantStockSimulator, allocate};

    #[test]
    fn one_plant_one_megatonne() {
        let network = single_plant(4.0);
        let totals = AnnualTotals { coal_mt: 1.0, limestone_mt: 0.43, steel_mt: 1.0 };
        let rows = PlantStockSimulator::default()
            .run(&network, &totals, year_2023(), &mut SimRng::new(42))
            .unwrap();
        assert_eq!(rows.len(), 365);
        let exported: f64 = rows.iter().map(|r| r.steel_exported_tonnes).sum();
        assert!((exported - 1_000_000.0).abs() <= 0.01, "exported {exported}");
        assert!(rows.iter().all(|r| r.steel_exported_tonnes >= 0.0));
        let arrived: f64 = rows.iter().map(|r| r.coal_arrived_tonnes).sum();
        assert!((arrived - 1_000_000.0).abs() <= 0.01);
    }

    #[test]
    fn stock_stays_within_targets() {
        let network = Network::default_catalog().unwrap();
        let totals = AnnualTotals::default();
        let sim = PlantStockSimulator::default();
        let rows = sim.run(&network, &totals, year_2023(), &mut SimRng::new(7)).unwrap();
        assert_eq!(rows.len(), 365 * 5);

        let allocations = allocate(&network, &totals);
        for row in &rows {
            let plant = network.plant_by_name(&row.plant_name).unwrap();
            let (max_coal, max_limestone) = sim.stock_limits(&allocations[plant.index()], 365);
            assert!(row.coal_eod_stock_tonnes >= row.min_stock_target_tonnes);
            assert!(row.coal_eod_stock_tonnes <= round2(max_coal));
            assert!(row.limestone_eod_stock_tonnes >= round2(max_limestone * 0.2));
            assert!(row.limestone_eod_stock_tonnes <= round2(max_limestone));
        }
    }

    #[test]
    fn rows_ordered_by_date_then_plant() {
        let network = Network::default_catalog().unwrap();
        let rows = PlantStockSimulator::default()
            .run(&network, &AnnualTotals::default(), SimCalendar::new(year_2023().start, 3), &mut SimRng::new(1))
            .unwrap();
        let codes: Vec<&str> = rows[..5].iter().map(|r| r.plant_id.as_str()).collect();
        assert_eq!(codes, ["P001", "P002", "P003", "P004", "P005"]);
        assert!(rows.windows(2).all(|w| w[0].date <= w[1].date));
    }

    #[test]
    fn cumulative_export_within_capacity() {
        // 20 Mt against a 4 Mt plant: the allocation is capped.
        let network = single_plant(4.0);
        let totals = AnnualTotals { coal_mt: 20.0, limestone_mt: 8.0, steel_mt: 20.0 };
        let rows = PlantStockSimulator::default()
            .run(&network, &totals, year_2023(), &mut SimRng::new(3))
            .unwrap();
        let last = rows.last().unwrap();
        assert!(last.cumulative_capacity_utilization_percent <= 100.0);
        let exported: f64 = rows.iter().map(|r| r.steel_exported_tonnes).sum();
        assert!(exported <= 4_000_000.0 + 0.01);
    }

    #[test]
    fn allocation_follows_past_export() {
        let network = Network::default_catalog().unwrap();
        let allocations = allocate(&network, &AnnualTotals::default());
        let total: f64 = allocations.iter().map(|a| a.yearly_export).sum();
        assert!((total - 6_000_000.0).abs() < 0.05);
        // Bhilai: 3.4 of 12.2 past export.
        assert!((allocations[0].yearly_export - 6_000_000.0 * 3.4 / 12.2).abs() < 0.01);
        let coal: f64 = allocations.iter().map(|a| a.yearly_coal).sum();
        assert!((coal - 10_000_000.0).abs() < 0.05);
    }

    #[test]
    fn same_seed_same_log() {
        let network = Network::default_catalog().unwrap();
        let sim = PlantStockSimulator::default();
        let a = sim.run(&network, &AnnualTotals::default(), year_2023(), &mut SimRng::new(9)).unwrap();
        let b = sim.run(&network, &AnnualTotals::default(), year_2023(), &mut SimRng::new(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_empty_calendar_and_bad_params() {
        let network = single_plant(1.0);
        let err = PlantStockSimulator::default()
            .run(&network, &AnnualTotals::default(), SimCalendar::new(year_2023().start, 0), &mut SimRng::new(1))
            .unwrap_err();
        assert!(matches!(err, PlantError::EmptyCalendar));

        let params = PlantParams { min_per_train: 0.0, ..PlantParams::default() };
        assert!(matches!(PlantStockSimulator::new(params), Err(PlantError::InvalidParams(_))));
    }
}
