//! Unit tests for cx-core primitives.

#[cfg(test)]
mod ids {
    use crate::VehicleId;

    #[test]
    fn index_roundtrip() {
        let id = VehicleId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(VehicleId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn display() {
        assert_eq!(VehicleId(7).to_string(), "VehicleId(7)");
    }
}

#[cfg(test)]
mod grid {
    use crate::{Axis, Cell, Direction};

    #[test]
    fn deltas_match_headings() {
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Right.delta(), (1, 0));
        assert_eq!(Direction::Left.delta(), (-1, 0));
    }

    #[test]
    fn one_vertical_two_horizontal() {
        let vertical = Direction::ALL.iter().filter(|d| d.axis() == Axis::Vertical).count();
        let horizontal = Direction::ALL.iter().filter(|d| d.axis() == Axis::Horizontal).count();
        assert_eq!(vertical, 1);
        assert_eq!(horizontal, 2);
    }

    #[test]
    fn step_can_leave_the_grid() {
        assert_eq!(Cell::new(0, 3).step(Direction::Left), (-1, 3));
        assert_eq!(Cell::new(14, 7).step(Direction::Right), (15, 7));
        assert_eq!(Cell::new(7, 0).step(Direction::Down), (7, 1));
    }

    #[test]
    fn display() {
        assert_eq!(Cell::new(3, 4).to_string(), "(3, 4)");
        assert_eq!(Direction::Left.to_string(), "left");
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, Tick};

    #[test]
    fn tick_arithmetic() {
        assert_eq!(Tick(10) + 5, Tick(15));
        assert_eq!(Tick(15) - Tick(10), 5u64);
    }

    #[test]
    fn boundaries() {
        assert!(Tick(10).is_boundary(10));
        assert!(Tick(20).is_boundary(10));
        assert!(!Tick(15).is_boundary(10));
        assert!(!Tick(10).is_boundary(0));
    }

    #[test]
    fn clock_advances_by_one() {
        let mut clock = SimClock::new();
        assert_eq!(clock.current_tick, Tick::ZERO);
        assert_eq!(clock.advance(), Tick(1));
        assert_eq!(clock.advance(), Tick(2));
        assert_eq!(clock.to_string(), "T2");
    }
}

#[cfg(test)]
mod config {
    use crate::{CoreError, MIN_GRID_DIMENSION, SimConfig};

    #[test]
    fn default_is_valid() {
        let c = SimConfig::default();
        assert_eq!((c.width, c.height, c.vehicle_count, c.signal_period), (15, 15, 10, 10));
        c.validate().unwrap();
    }

    #[test]
    fn minimum_grid_is_valid() {
        let c = SimConfig {
            width:  MIN_GRID_DIMENSION,
            height: MIN_GRID_DIMENSION,
            ..SimConfig::default()
        };
        c.validate().unwrap();
    }

    #[test]
    fn rejects_small_grid() {
        let c = SimConfig { width: 6, ..SimConfig::default() };
        assert!(matches!(c.validate(), Err(CoreError::Config(_))));
        let c = SimConfig { height: 2, ..SimConfig::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_zero_vehicles_and_period() {
        let c = SimConfig { vehicle_count: 0, ..SimConfig::default() };
        assert!(c.validate().is_err());
        let c = SimConfig { signal_period: 0, ..SimConfig::default() };
        let err = c.validate().unwrap_err();
        assert!(err.to_string().contains("signal_period"), "got {err}");
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimRng::new(99);
        let mut b = SimRng::new(99);
        for _ in 0..20 {
            assert_eq!(a.gen_range(0..1000u32), b.gen_range(0..1000u32));
        }
    }

    #[test]
    fn children_are_reproducible() {
        let mut a = SimRng::new(5);
        let mut b = SimRng::new(5);
        let mut ca = a.child(1);
        let mut cb = b.child(1);
        assert_eq!(ca.gen_range(0..u64::MAX), cb.gen_range(0..u64::MAX));
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = SimRng::new(0);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[3]), Some(&3));
    }
}
