//! Unit tests for sf-core primitives.

#[cfg(test)]
mod ids {
    use crate::{LocationId, PlantId, RakeId};

    #[test]
    fn index_roundtrip() {
        let id = RakeId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(RakeId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn narrow_id_rejects_overflow() {
        assert!(LocationId::try_from(70_000usize).is_err());
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(LocationId::INVALID.0, u16::MAX);
        assert_eq!(PlantId::INVALID.0, u16::MAX);
        assert_eq!(RakeId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(PlantId(3).to_string(), "PlantId(3)");
    }
}

#[cfg(test)]
mod calendar {
    use chrono::{NaiveDate, Timelike};

    use crate::calendar::{self, SimCalendar};
    use crate::SimRng;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn calendar_dates() {
        let cal = SimCalendar::new(d(2023, 1, 1), 365);
        assert_eq!(cal.date(0), d(2023, 1, 1));
        assert_eq!(cal.last(), Some(d(2023, 12, 31)));
        assert_eq!(cal.end(), d(2024, 1, 1));
        assert_eq!(cal.dates().count(), 365);
        assert!(cal.contains(d(2023, 6, 1)));
        assert!(!cal.contains(d(2024, 1, 1)));
    }

    #[test]
    fn spanning_is_inclusive() {
        let cal = SimCalendar::spanning(d(2023, 1, 1), d(2023, 1, 3));
        assert_eq!(cal.days, 3);
        assert!(SimCalendar::spanning(d(2023, 1, 3), d(2023, 1, 1)).is_empty());
    }

    #[test]
    fn two_decimal_hours_are_exact_seconds() {
        let eta = calendar::day_start(d(2023, 4, 2));
        let berth = eta + calendar::hours(12.37);
        assert_eq!((berth - eta).num_seconds(), 44_532); // 12.37 h × 3600
        assert!((calendar::hours_between(eta, berth) - 12.37).abs() < 1e-9);
    }

    #[test]
    fn random_time_stays_in_day() {
        let mut rng = SimRng::new(7);
        for _ in 0..500 {
            let t = calendar::random_time_in_day(d(2023, 3, 9), &mut rng);
            assert_eq!(t.date(), d(2023, 3, 9));
            assert!(t.hour() < 24);
        }
    }

    #[test]
    fn parse_accepts_iso_and_space_forms() {
        let a = calendar::parse_datetime("2023-01-05 06:07:08").unwrap();
        let b = calendar::parse_datetime("2023-01-05T06:07:08").unwrap();
        let c = calendar::parse_datetime("2023-01-05 06:07:08.250").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.with_nanosecond(0), c.with_nanosecond(0));
        assert!(calendar::parse_datetime("05/01/2023").is_err());
        assert!(calendar::parse_date("2023-13-01").is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a = r1.uniform(0.0, 1.0);
            let b = r2.uniform(0.0, 1.0);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn children_diverge_by_offset() {
        let mut root_a = SimRng::new(1);
        let mut root_b = SimRng::new(1);
        let mut c0 = root_a.child(0);
        let mut c1 = root_b.child(1);
        let a: u64 = c0.gen_range(0..u64::MAX);
        let b: u64 = c1.gen_range(0..u64::MAX);
        assert_ne!(a, b, "children with different offsets should diverge");
    }

    #[test]
    fn uniform_degenerate_range() {
        let mut rng = SimRng::new(0);
        assert_eq!(rng.uniform(5.0, 5.0), 5.0);
        assert_eq!(rng.uniform(9.0, 1.0), 9.0);
        for _ in 0..1000 {
            let v = rng.uniform(0.9, 1.1);
            assert!((0.9..1.1).contains(&v));
        }
    }

    #[test]
    fn weighted_index_respects_zero_weight() {
        let mut rng = SimRng::new(3);
        for _ in 0..200 {
            assert_eq!(rng.choose_weighted_index(&[0.0, 1.0, 0.0]), Some(1));
        }
        assert_eq!(rng.choose_weighted_index(&[]), None);
        assert_eq!(rng.choose_weighted_index(&[0.0, 0.0]), None);
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }
}

#[cfg(test)]
mod material {
    use crate::{Material, MaterialFlow, round2};

    #[test]
    fn flow_direction() {
        assert_eq!(Material::Coal.flow(), MaterialFlow::Inbound);
        assert_eq!(Material::Limestone.flow(), MaterialFlow::Inbound);
        assert_eq!(Material::Steel.flow(), MaterialFlow::Outbound);
    }

    #[test]
    fn parse_and_display() {
        for m in Material::ALL {
            assert_eq!(m.to_string().parse::<Material>().unwrap(), m);
            assert_eq!(Material::ALL[m.index()], m);
        }
        assert!("Iron".parse::<Material>().is_err());
    }

    #[test]
    fn rounding() {
        assert_eq!(round2(1.005_1), 1.01);
        assert_eq!(round2(-2.499), -2.5);
        assert_eq!(round2(10.0), 10.0);
    }
}
