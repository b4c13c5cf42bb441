// Integration tests for figure generation and the level tables.
// These tests are native-friendly and avoid wasm/browser APIs.

use std::collections::{BTreeSet, HashMap};

use matchstick_patterns::builders::{connected_squares_col, connected_squares_row, merge, square_grid};
use matchstick_patterns::dedup::{EdgeKey, dedup_sticks};
use matchstick_patterns::rng::ShuffleRng;
use matchstick_patterns::shapes::{house, regular_polygon, square, triangle};
use matchstick_patterns::{LevelSet, Matchstick};

fn edge_set(sticks: &[Matchstick]) -> BTreeSet<EdgeKey> {
    sticks.iter().map(EdgeKey::of).collect()
}

fn pattern_count(set: &LevelSet, level: usize, name: &str) -> usize {
    set.get_level(level)
        .patterns()
        .iter()
        .find(|p| p.name == name)
        .unwrap_or_else(|| panic!("no pattern '{}' in level {}", name, level))
        .total_matchsticks()
}

#[test]
fn every_pattern_count_is_its_stick_list_length() {
    let set = LevelSet::new();
    for level in set.iter() {
        for p in level.patterns() {
            assert_eq!(p.total_matchsticks(), p.matchsticks().len(), "{}", p.name);
            assert!(p.total_matchsticks() > 0, "'{}' is empty", p.name);
        }
    }
}

#[test]
fn out_of_range_level_is_first_level() {
    let set = LevelSet::new();
    assert_eq!(set.get_level(999), set.get_level(1));
    assert_eq!(set.get_level(999).number(), 1);
}

#[test]
fn known_answers() {
    let set = LevelSet::new();
    let expected: [(usize, &str, usize); 16] = [
        (1, "Row of L-shapes", 10),
        (1, "Staircase", 10),
        (2, "House Row", 24),
        (3, "Connected Squares", 19),
        (3, "Triangle Wave", 18),
        (3, "Square Grid", 17),
        (3, "Square Tower", 16),
        (4, "Connected Squares + Triangles", 26),
        (4, "Houses with Fence", 31),
        (5, "Castle Wall", 33),
        (5, "Diamond Grid", 48),
        (5, "The Grand Pattern", 48),
        (6, "Hexagon Chain", 26),
        (7, "Honeycomb", 27),
        (7, "Roof Terrace", 30),
        (7, "Staircase Tower", 23),
    ];
    for (level, name, count) in expected {
        assert_eq!(pattern_count(&set, level, name), count, "{}", name);
    }
}

#[test]
fn lattice_formulas() {
    assert_eq!(connected_squares_row(0.0, 30.0, 4).len(), 13);
    for n in 1..10 {
        assert_eq!(connected_squares_row(0.0, 0.0, n).len(), 3 * n + 1);
        assert_eq!(connected_squares_col(0.0, 0.0, n).len(), 3 * n + 1);
    }
    for (rows, cols) in [(1, 1), (2, 3), (4, 2), (5, 5)] {
        assert_eq!(square_grid(0.0, 0.0, cols, rows).len(), rows * (cols + 1) + cols * (rows + 1));
    }
}

#[test]
fn dedup_collapses_reversed_pair() {
    let out = dedup_sticks([Matchstick::new(0.0, 0.0, 10.0, 0.0), Matchstick::new(10.0, 0.0, 0.0, 0.0)]);
    assert_eq!(out, vec![Matchstick::new(0.0, 0.0, 10.0, 0.0)]);
}

#[test]
fn dedup_is_idempotent() {
    let raw: Vec<Matchstick> = (0..4)
        .flat_map(|i| [square(i as f64 * 30.0, 30.0), triangle(i as f64 * 30.0, 0.0)])
        .flatten()
        .collect();
    let once = dedup_sticks(raw.clone());
    let twice = dedup_sticks(once.clone());
    assert_eq!(once, twice);
    assert!(once.len() < raw.len());
}

#[test]
fn dedup_edge_set_ignores_input_order() {
    let mut raw: Vec<Matchstick> = (0..3)
        .flat_map(|i| house(i as f64 * 30.0, 0.0))
        .chain((0..6).map(|i| {
            let s = Matchstick::new(i as f64 * 30.0, 60.0, (i + 1) as f64 * 30.0, 60.0);
            if i % 2 == 0 { s.reversed() } else { s }
        }))
        .collect();
    let reference = edge_set(&dedup_sticks(raw.clone()));
    let mut rng = ShuffleRng::new(5);
    for _ in 0..10 {
        rng.shuffle(&mut raw);
        let out = dedup_sticks(raw.clone());
        assert_eq!(out.len(), reference.len());
        assert_eq!(edge_set(&out), reference);
    }
}

#[test]
fn regular_polygon_touches_each_vertex_twice() {
    for sides in 3..=10 {
        let poly = regular_polygon(0.0, 0.0, 30.0, sides);
        assert_eq!(poly.len(), sides);
        let mut degree: HashMap<(i64, i64), usize> = HashMap::new();
        for s in &poly {
            for (x, y) in [(s.x1, s.y1), (s.x2, s.y2)] {
                *degree.entry(((x * 1000.0).round() as i64, (y * 1000.0).round() as i64)).or_default() += 1;
            }
        }
        assert_eq!(degree.len(), sides);
        assert!(degree.values().all(|&d| d == 2));
    }
}

#[test]
fn merged_figures_keep_first_orientation() {
    let wall = connected_squares_row(0.0, 30.0, 2);
    let roofs = [triangle(0.0, 0.0), triangle(30.0, 0.0)];
    let merged = merge(std::iter::once(wall.clone()).chain(roofs));
    assert_eq!(merged.len(), 11);
    assert_eq!(&merged[..wall.len()], &wall[..]);
}
