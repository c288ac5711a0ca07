//! Unit tests for qs-core primitives.

#[cfg(test)]
mod ids {
    use crate::StageId;

    #[test]
    fn index_roundtrip() {
        let id = StageId(1);
        assert_eq!(id.index(), 1);
        assert_eq!(StageId::try_from(1usize).unwrap(), id);
        assert_eq!(StageId::DOWNSTREAM, id);
    }

    #[test]
    fn display() {
        assert_eq!(StageId(0).to_string(), "StageId(0)");
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimTime};

    #[test]
    fn time_arithmetic() {
        let t = SimTime(10.0);
        assert_eq!(t + 2.5, SimTime(12.5));
        assert_eq!(t.offset(1.0), SimTime(11.0));
        assert_eq!(SimTime(15.0) - SimTime(10.0), 5.0);
        assert_eq!(SimTime(15.0).since(SimTime(10.0)), 5.0);
    }

    #[test]
    fn total_ordering() {
        let mut times = vec![SimTime(3.0), SimTime(0.5), SimTime(2.0)];
        times.sort();
        assert_eq!(times, [SimTime(0.5), SimTime(2.0), SimTime(3.0)]);
        assert!(SimTime::ZERO < SimTime(f64::MIN_POSITIVE));
    }

    #[test]
    fn clock_advance_returns_elapsed() {
        let mut clock = SimClock::new();
        assert_eq!(clock.advance_to(SimTime(2.5)), 2.5);
        assert_eq!(clock.advance_to(SimTime(4.0)), 1.5);
        assert_eq!(clock.advance_to(SimTime(4.0)), 0.0);
        assert_eq!(clock.current, SimTime(4.0));
        assert_eq!(clock.elapsed(), 4.0);
    }

    #[test]
    fn display() {
        assert_eq!(SimTime(1.5).to_string(), "t=1.5000");
    }
}

#[cfg(test)]
mod rng {
    use rand::Rng;

    use crate::{DrawBudget, Lcg, LcgConfig, SimRng, UniformSource};

    #[test]
    fn minstd_reference_vector() {
        let mut lcg = Lcg::new(LcgConfig::MINSTD);
        let u = lcg.next_uniform();
        let expected = (16_807u64 * 12_345 % 2_147_483_647) as f64 / 2_147_483_647.0;
        assert_eq!(u, expected);
        assert!((u - 0.096_616_5).abs() < 1e-6, "got {u}");
        assert_eq!(lcg.state(), 207_482_415);
    }

    #[test]
    fn deterministic_same_seed() {
        let mut a = LcgConfig::MINSTD.build();
        let mut b = LcgConfig::MINSTD.build();
        for _ in 0..1_000 {
            assert_eq!(a.next_uniform(), b.next_uniform());
        }
    }

    #[test]
    fn different_seeds_differ() {
        let mut a = LcgConfig::MINSTD.build();
        let mut b = LcgConfig::MINSTD.with_seed(54_321).build();
        assert_ne!(a.next_uniform(), b.next_uniform());
    }

    #[test]
    fn seed_reduced_mod_m() {
        let cfg = LcgConfig { multiplier: 5, increment: 3, modulus: 16, seed: 35 };
        assert_eq!(Lcg::new(cfg).state(), 3);
    }

    #[test]
    fn state_stays_below_modulus() {
        let mut lcg = Lcg::new(LcgConfig { multiplier: 1_103_515_245, increment: 12_345, modulus: 1 << 31, seed: 7 });
        for _ in 0..10_000 {
            let u = lcg.next_uniform();
            assert!((0.0..1.0).contains(&u));
            assert!(lcg.state() < 1 << 31);
        }
    }

    #[test]
    fn large_parameters_do_not_overflow() {
        let mut lcg = Lcg::new(LcgConfig { multiplier: u64::MAX - 1, increment: u64::MAX - 2, modulus: u64::MAX, seed: u64::MAX - 3 });
        let u = lcg.next_uniform();
        assert!((0.0..1.0).contains(&u), "got {u}");
    }

    #[test]
    fn huge_modulus_stays_below_one() {
        // x / m rounds to exactly 1.0 in f64 without the clamp.
        let cfg = LcgConfig { multiplier: 1, increment: 0, modulus: u64::MAX, seed: u64::MAX - 1 };
        assert!(cfg.validate().is_ok());
        let mut lcg = Lcg::new(cfg);
        for _ in 0..3 {
            let u = lcg.next_uniform();
            assert_eq!(lcg.state(), u64::MAX - 1);
            assert!((0.0..1.0).contains(&u), "got {u}");
            let v = lcg.uniform(3.0, 5.0);
            assert!((3.0..5.0).contains(&v), "got {v}");
        }
    }

    #[test]
    fn uniform_in_bounds() {
        let mut lcg = LcgConfig::MINSTD.build();
        for _ in 0..1_000 {
            let v = lcg.uniform(3.0, 5.0);
            assert!((3.0..5.0).contains(&v), "got {v}");
        }
    }

    #[test]
    fn zero_modulus_rejected() {
        let cfg = LcgConfig { modulus: 0, ..LcgConfig::MINSTD };
        assert!(cfg.validate().is_err());
        assert!(LcgConfig::MINSTD.validate().is_ok());
    }

    #[test]
    fn lcg_drives_rand_api() {
        let mut lcg = LcgConfig::MINSTD.build();
        for _ in 0..100 {
            let v: u32 = lcg.gen_range(0..10);
            assert!(v < 10);
        }
    }

    #[test]
    fn sim_rng_inner_drives_rand_api() {
        let mut a = SimRng::new(9);
        let mut b = SimRng::new(9);
        let x: u32 = a.inner().gen_range(0..100);
        let y: u32 = b.inner().gen_range(0..100);
        assert_eq!(x, y);
        assert!(x < 100);
    }

    #[test]
    fn sim_rng_deterministic() {
        let mut a = SimRng::new(42);
        let mut b = SimRng::new(42);
        for _ in 0..100 {
            let u = a.next_uniform();
            assert_eq!(u, b.next_uniform());
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn budget_counts_past_limit() {
        let mut budget = DrawBudget::new(2);
        assert_eq!(budget.remaining(), 2);
        budget.consume();
        assert!(!budget.is_exhausted());
        budget.consume();
        assert!(budget.is_exhausted());
        budget.consume();
        assert_eq!(budget.used(), 3);
        assert_eq!(budget.remaining(), 0);
    }
}

#[cfg(test)]
mod config {
    use crate::{Interval, QsError, StageConfig};

    #[test]
    fn valid_stage() {
        let cfg = StageConfig::new(1, 5, (2.0, 5.0), (3.0, 5.0));
        assert!(cfg.validate().is_ok());
        assert!(cfg.has_external_arrivals());
    }

    #[test]
    fn downstream_stage_has_no_arrivals() {
        let cfg = StageConfig::new(2, 3, Interval::NONE, (3.0, 4.0));
        assert!(cfg.validate().is_ok());
        assert!(!cfg.has_external_arrivals());
    }

    #[test]
    fn zero_servers_rejected() {
        let cfg = StageConfig::new(0, 5, (2.0, 5.0), (3.0, 5.0));
        assert!(matches!(cfg.validate(), Err(QsError::InvalidConfiguration(_))));
    }

    #[test]
    fn capacity_below_servers_rejected() {
        let cfg = StageConfig::new(3, 2, (2.0, 5.0), (3.0, 5.0));
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn inverted_interval_rejected() {
        let cfg = StageConfig::new(1, 5, (5.0, 2.0), (3.0, 5.0));
        assert!(cfg.validate().is_err());
        let cfg = StageConfig::new(1, 5, (2.0, 5.0), (-1.0, 5.0));
        assert!(cfg.validate().is_err());
        let cfg = StageConfig::new(1, 5, (2.0, f64::INFINITY), (3.0, 5.0));
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn interval_sample() {
        let iv = Interval::new(3.0, 5.0);
        assert_eq!(iv.sample(0.0), 3.0);
        assert_eq!(iv.sample(0.5), 4.0);
    }

    #[test]
    fn interval_sample_excludes_max() {
        let below_one = 1.0 - f64::EPSILON / 2.0;
        let iv = Interval::new(3.0, 5.0);
        let v = iv.sample(below_one);
        assert!(v < 5.0 && v > 4.999_999, "got {v}");
        assert_eq!(Interval::new(2.0, 2.0).sample(below_one), 2.0);
    }
}
