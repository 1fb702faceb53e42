//! Unit tests for cx-lanes.

use cx_core::{Cell, SimRng};

use crate::{LaneError, LaneMap, LaneMapBuilder};

fn build(width: u32, height: u32, seed: u64) -> LaneMap {
    LaneMapBuilder::new(width, height)
        .build(&mut SimRng::new(seed))
        .unwrap()
}

// ── Builder validation ────────────────────────────────────────────────────────

#[cfg(test)]
mod validation {
    use super::*;

    #[test]
    fn rejects_grids_below_minimum() {
        let err = LaneMapBuilder::new(6, 15).build(&mut SimRng::new(0)).unwrap_err();
        assert!(matches!(err, LaneError::TooSmall { width: 6, height: 15, min: 7 }));
        assert!(LaneMapBuilder::new(15, 3).build(&mut SimRng::new(0)).is_err());
    }

    #[test]
    fn accepts_minimum_grid() {
        let map = build(7, 7, 1);
        assert_eq!((map.width(), map.height()), (7, 7));
    }
}

// ── Layout invariants ─────────────────────────────────────────────────────────

#[cfg(test)]
mod layout {
    use super::*;

    #[test]
    fn bands_are_three_wide_and_centred() {
        let map = build(15, 15, 3);
        assert_eq!(map.vertical_band(), 6..9);
        assert_eq!(map.horizontal_band(), 6..9);

        let map = build(16, 10, 3);
        assert_eq!(map.vertical_band(), 6..9);
        assert_eq!(map.horizontal_band(), 3..6);
    }

    #[test]
    fn intersection_box_always_drivable() {
        for (w, h) in [(7, 7), (8, 9), (15, 15), (16, 16), (21, 11), (40, 33)] {
            for seed in 0..25 {
                let map = build(w, h, seed);
                for x in map.vertical_band() {
                    for y in map.horizontal_band() {
                        assert!(map.is_drivable(x as i64, y as i64), "{w}x{h} seed {seed}: ({x},{y})");
                        assert!(map.in_intersection_box(Cell::new(x, y)));
                    }
                }
            }
        }
    }

    #[test]
    fn centre_box_of_odd_grid_is_drivable() {
        for seed in 0..25 {
            let map = build(15, 15, seed);
            let c = map.center();
            for dx in -1i64..=1 {
                for dy in -1i64..=1 {
                    assert!(map.is_drivable(c.x as i64 + dx, c.y as i64 + dy));
                }
            }
        }
    }

    #[test]
    fn vertical_band_drivable_in_every_row() {
        let map = build(15, 15, 11);
        for x in map.vertical_band() {
            for y in 0..map.height() {
                assert!(map.is_drivable(x as i64, y as i64));
            }
        }
    }

    #[test]
    fn divider_row_blocked_outside_vertical_band() {
        for seed in 0..25 {
            let map = build(15, 15, seed);
            let row = map.divider_row();
            assert!(map.horizontal_band().contains(&row));
            for x in 0..map.width() {
                let expected = map.vertical_band().contains(&x);
                assert_eq!(map.is_drivable(x as i64, row as i64), expected, "seed {seed} x {x}");
            }
        }
    }

    #[test]
    fn other_band_rows_span_full_width() {
        let map = build(15, 15, 8);
        for y in map.horizontal_band().filter(|&y| y != map.divider_row()) {
            for x in 0..map.width() {
                assert!(map.is_drivable(x as i64, y as i64));
            }
        }
    }

    #[test]
    fn off_road_cells_blocked() {
        let map = build(15, 15, 2);
        assert!(!map.is_drivable(0, 0));
        assert!(!map.is_drivable(14, 14));
        assert!(!map.is_drivable(3, 2));
    }

    #[test]
    fn drivable_count_matches_layout() {
        // 3 columns × 15 rows + 2 full rows × 12 remaining columns.
        let map = build(15, 15, 4);
        assert_eq!(map.drivable_count(), 3 * 15 + 2 * 12);
        assert_eq!(map.drivable_cells().count(), map.drivable_count());
        assert!(map.drivable_cells().all(|c| map.is_cell_drivable(c)));
    }

    #[test]
    fn same_seed_same_map() {
        assert_eq!(build(15, 15, 77), build(15, 15, 77));
    }
}

// ── Bounds helpers ────────────────────────────────────────────────────────────

#[cfg(test)]
mod bounds {
    use super::*;

    #[test]
    fn out_of_bounds_is_never_drivable() {
        let map = build(15, 15, 0);
        assert!(!map.contains(-1, 7));
        assert!(!map.contains(15, 7));
        assert!(!map.is_drivable(15, 7));
        assert!(!map.is_drivable(7, -1));
        assert!(!map.is_drivable(7, 15));
    }

    #[test]
    fn edges() {
        let map = build(15, 15, 0);
        assert!(map.on_edge(0, 5));
        assert!(map.on_edge(7, 14));
        assert!(map.on_edge(14, 0));
        assert!(!map.on_edge(7, 7));
        assert!(!map.on_edge(15, 7));
    }

    #[test]
    fn display_renders_one_line_per_row() {
        let map = build(9, 7, 5);
        let text = map.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert!(lines.iter().all(|l| l.len() == 9));
        assert_eq!(&lines[0][3..6], "###");
        assert_eq!(&lines[0][..3], "...");
    }
}
