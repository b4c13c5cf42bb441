//! Compound figures.
//!
//! Lattices (square rows, columns and grids, triangle rows, hexagon chains) emit every shared
//! line exactly once by construction. Irregular attachments, where primitives are simply
//! placed so that their edges touch, go through [`merge`] which runs the deduplicator.

use crate::dedup::dedup_sticks;
use crate::geometry::{G, Matchstick, m};
use crate::shapes::{regular_polygon, square, tri_down, triangle};

/// Horizontal distance between the centres of two neighbouring pointy-top hexagons.
pub fn hex_width() -> f64 {
    3f64.sqrt() * G
}

/// Concatenates parts in order and collapses edges shared between them.
pub fn merge<I>(parts: I) -> Vec<Matchstick>
where
    I: IntoIterator<Item = Vec<Matchstick>>,
{
    dedup_sticks(parts.into_iter().flatten())
}

/// `n` independent copies of a primitive, `spacing` apart, left to right.
pub fn row_of<F>(shape: F, ox: f64, oy: f64, n: usize, spacing: f64) -> Vec<Matchstick>
where
    F: Fn(f64, f64) -> Vec<Matchstick>,
{
    (0..n).flat_map(|i| shape(ox + i as f64 * spacing, oy)).collect()
}

/// `n` squares sharing vertical walls: `3n + 1` sticks.
pub fn connected_squares_row(ox: f64, oy: f64, n: usize) -> Vec<Matchstick> {
    let mut sticks = Vec::with_capacity(3 * n + 1);
    for i in 0..n {
        let x0 = ox + i as f64 * G;
        let x1 = ox + (i + 1) as f64 * G;
        sticks.push(m(x0, oy, x1, oy));
        sticks.push(m(x0, oy + G, x1, oy + G));
    }
    for i in 0..=n {
        let x = ox + i as f64 * G;
        sticks.push(m(x, oy, x, oy + G));
    }
    sticks
}

/// `n` squares stacked and sharing floors: `3n + 1` sticks.
pub fn connected_squares_col(ox: f64, oy: f64, n: usize) -> Vec<Matchstick> {
    let mut sticks = Vec::with_capacity(3 * n + 1);
    for i in 0..n {
        let y0 = oy + i as f64 * G;
        let y1 = oy + (i + 1) as f64 * G;
        sticks.push(m(ox, y0, ox, y1));
        sticks.push(m(ox + G, y0, ox + G, y1));
    }
    for i in 0..=n {
        let y = oy + i as f64 * G;
        sticks.push(m(ox, y, ox + G, y));
    }
    sticks
}

/// `n` triangles standing on one continuous base: `3n` sticks.
pub fn triangle_row(ox: f64, oy: f64, n: usize) -> Vec<Matchstick> {
    let mut sticks: Vec<Matchstick> = (0..n)
        .map(|i| m(ox + i as f64 * G, oy + G, ox + (i + 1) as f64 * G, oy + G))
        .collect();
    for i in 0..n {
        let x0 = ox + i as f64 * G;
        let apex = x0 + G * 0.5;
        sticks.push(m(x0, oy + G, apex, oy));
        sticks.push(m(apex, oy, x0 + G, oy + G));
    }
    sticks
}

/// `cols x rows` squares sharing every interior line: `rows*(cols+1) + cols*(rows+1)` sticks.
pub fn square_grid(ox: f64, oy: f64, cols: usize, rows: usize) -> Vec<Matchstick> {
    let mut sticks = Vec::with_capacity(rows * (cols + 1) + cols * (rows + 1));
    for r in 0..=rows {
        let y = oy + r as f64 * G;
        for c in 0..cols {
            sticks.push(m(ox + c as f64 * G, y, ox + (c + 1) as f64 * G, y));
        }
    }
    for r in 0..rows {
        let y0 = oy + r as f64 * G;
        let y1 = oy + (r + 1) as f64 * G;
        for c in 0..=cols {
            let x = ox + c as f64 * G;
            sticks.push(m(x, y0, x, y1));
        }
    }
    sticks
}

/// Pointy-top hexagons of side `G` sharing vertical walls: `5n + 1` sticks.
///
/// The cell origin is the top-left corner of the chain's bounding box.
pub fn hexagon_chain(ox: f64, oy: f64, n: usize) -> Vec<Matchstick> {
    let w = hex_width();
    let wall_x = |i: usize| ox + i as f64 * w;
    let (top, upper, lower, bottom) = (oy, oy + G * 0.5, oy + G * 1.5, oy + G * 2.0);
    let mut sticks = Vec::with_capacity(5 * n + 1);
    for i in 0..n {
        let (left, right) = (wall_x(i), wall_x(i + 1));
        let mid = left + w * 0.5;
        sticks.push(m(left, upper, mid, top));
        sticks.push(m(mid, top, right, upper));
        sticks.push(m(left, lower, mid, bottom));
        sticks.push(m(mid, bottom, right, lower));
    }
    for i in 0..=n {
        let x = wall_x(i);
        sticks.push(m(x, upper, x, lower));
    }
    sticks
}

/// Offset-row tiling of regular hexagons (odd rows shifted half a cell right).
///
/// Cells are merged around the origin and the result shifted afterwards, so shared walls
/// collapse the same way wherever the figure is placed.
pub fn honeycomb(ox: f64, oy: f64, rows: usize, cols: usize) -> Vec<Matchstick> {
    let w = hex_width();
    let cells = merge((0..rows).flat_map(|r| {
        let shift = if r % 2 == 1 { w * 0.5 } else { 0.0 };
        (0..cols).map(move |c| {
            let cx = w * 0.5 + c as f64 * w + shift;
            let cy = G + r as f64 * G * 1.5;
            regular_polygon(cx, cy, G, 6)
        })
    }));
    cells.iter().map(|s| s.translated(ox, oy)).collect()
}

/// Regular polygons of increasing side count, one cell apart.
pub fn polygon_parade(ox: f64, oy: f64, radius: f64, sides: &[usize]) -> Vec<Matchstick> {
    let step = radius * 2.0 + G / 3.0;
    sides
        .iter()
        .enumerate()
        .flat_map(|(i, &n)| regular_polygon(ox + radius + i as f64 * step, oy + radius, radius, n))
        .collect()
}

/// Triangle sitting on a square, sharing the square's top: 6 sticks.
pub fn roofed_square(ox: f64, oy: f64) -> Vec<Matchstick> {
    merge([triangle(ox, oy), square(ox, oy + G)])
}

/// A wall of `n` connected squares with a triangle on every cell. Wall top starts at `oy + G`.
pub fn roofed_wall(ox: f64, oy: f64, n: usize) -> Vec<Matchstick> {
    let roofs = (0..n).map(|i| triangle(ox + i as f64 * G, oy));
    merge(std::iter::once(connected_squares_row(ox, oy + G, n)).chain(roofs))
}

/// `n` upright triangles interleaved with `n - 1` inverted ones, sharing slopes: `4n - 1` sticks.
pub fn triangle_strip(ox: f64, oy: f64, n: usize) -> Vec<Matchstick> {
    merge((0..n).flat_map(|i| {
        let x = ox + i as f64 * G;
        let up = triangle(x, oy);
        let down = (i + 1 < n).then(|| tri_down(x + G * 0.5, oy));
        std::iter::once(up).chain(down)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dedup::{EdgeKey, distinct_edge_count};
    use crate::shapes::{house, stairs};
    use approx::assert_relative_eq;

    #[test]
    fn test_connected_squares_row_counts() {
        for n in 1..=8 {
            assert_eq!(connected_squares_row(0.0, 0.0, n).len(), 3 * n + 1);
            assert_eq!(connected_squares_col(0.0, 0.0, n).len(), 3 * n + 1);
        }
    }

    #[test]
    fn test_connected_squares_row_of_four() {
        let sticks = connected_squares_row(0.0, 30.0, 4);
        assert_eq!(sticks.len(), 13);
        let horizontal = sticks.iter().filter(|s| s.y1 == s.y2).count();
        let vertical = sticks.iter().filter(|s| s.x1 == s.x2).count();
        assert_eq!((horizontal, vertical), (8, 5));
        for s in &sticks {
            assert_relative_eq!(s.length(), G);
        }
        assert_eq!(distinct_edge_count(&sticks), 13);
    }

    #[test]
    fn test_square_grid_formula() {
        for rows in 1..=4 {
            for cols in 1..=4 {
                let sticks = square_grid(5.0, 5.0, cols, rows);
                assert_eq!(sticks.len(), rows * (cols + 1) + cols * (rows + 1));
                assert_eq!(distinct_edge_count(&sticks), sticks.len());
            }
        }
    }

    #[test]
    fn test_lattices_match_naive_merge() {
        let naive_row = merge((0..5).map(|i| square(i as f64 * G, 0.0)));
        assert_eq!(naive_row.len(), connected_squares_row(0.0, 0.0, 5).len());

        let naive_grid = merge((0..2).flat_map(|r| (0..3).map(move |c| square(c as f64 * G, r as f64 * G))));
        assert_eq!(naive_grid.len(), square_grid(0.0, 0.0, 3, 2).len());

        let naive_tris = merge((0..6).map(|i| triangle(i as f64 * G, 0.0)));
        assert_eq!(naive_tris.len(), triangle_row(0.0, 0.0, 6).len());
    }

    #[test]
    fn test_hexagon_chain_matches_honeycomb_row() {
        for n in 1..=5 {
            let chain = hexagon_chain(0.0, 0.0, n);
            assert_eq!(chain.len(), 5 * n + 1);
            let comb = honeycomb(0.0, 0.0, 1, n);
            assert_eq!(comb.len(), chain.len());
            let mut a: Vec<_> = chain.iter().map(EdgeKey::of).collect();
            let mut b: Vec<_> = comb.iter().map(EdgeKey::of).collect();
            a.sort();
            b.sort();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_honeycomb_counts() {
        assert_eq!(honeycomb(0.0, 0.0, 1, 1).len(), 6);
        assert_eq!(honeycomb(0.0, 0.0, 2, 2).len(), 19);
        assert_eq!(honeycomb(0.0, 0.0, 2, 3).len(), 27);
        assert_eq!(honeycomb(0.0, 0.0, 3, 3).len(), 38);
    }

    #[test]
    fn test_honeycomb_count_independent_of_origin() {
        for (ox, oy) in [(0.0, 0.0), (12.3, 7.7), (-5.55, 3.3335), (0.0005, 0.0015)] {
            let comb = honeycomb(ox, oy, 3, 3);
            assert_eq!(comb.len(), 38, "origin ({ox}, {oy})");
            assert_eq!(distinct_edge_count(&comb), 38, "origin ({ox}, {oy})");
        }
    }

    #[test]
    fn test_roofed_shapes() {
        let roofed = roofed_square(0.0, 0.0);
        assert_eq!(roofed.len(), 6);
        let mut a: Vec<_> = roofed.iter().map(EdgeKey::of).collect();
        let mut b: Vec<_> = house(0.0, 0.0).iter().map(EdgeKey::of).collect();
        a.sort();
        b.sort();
        assert_eq!(a, b);
        assert_eq!(roofed_wall(0.0, 0.0, 5).len(), 26);
        assert_eq!(roofed_wall(0.0, 0.0, 6).len(), 31);
    }

    #[test]
    fn test_triangle_strip() {
        assert_eq!(triangle_strip(0.0, 0.0, 1).len(), 3);
        assert_eq!(triangle_strip(0.0, 0.0, 4).len(), 15);
        assert_eq!(triangle_strip(0.0, 0.0, 5).len(), 19);
    }

    #[test]
    fn test_merge_stairs_against_tower() {
        let tower = merge([stairs(0.0, 0.0, 5), connected_squares_col(0.0, 0.0, 5)]);
        assert_eq!(tower.len(), 23);
    }

    #[test]
    fn test_row_of_and_parade() {
        assert_eq!(row_of(square, 0.0, 0.0, 5, 40.0).len(), 20);
        assert_eq!(polygon_parade(0.0, 0.0, 18.0, &[3, 4, 5, 6, 7, 8]).len(), 33);
    }
}
