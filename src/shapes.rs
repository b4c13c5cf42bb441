//! Primitive shapes.
//!
//! Every function takes the top-left origin of the shape's cell (or the centre for
//! [`regular_polygon`]) and returns a fixed number of sticks sized from [`G`]. None of them
//! can fail: degenerate parameters simply produce zero-length sticks.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::geometry::{G, Matchstick, Point, m};

// --- Open strokes -----------------------------------------------------------

/// 2 sticks.
pub fn l_shape(ox: f64, oy: f64) -> Vec<Matchstick> {
    vec![m(ox, oy, ox, oy + G), m(ox, oy + G, ox + G, oy + G)]
}

/// 2 sticks meeting at the bottom.
pub fn v_shape(ox: f64, oy: f64) -> Vec<Matchstick> {
    vec![
        m(ox, oy, ox + G * 0.5, oy + G * 0.7),
        m(ox + G, oy, ox + G * 0.5, oy + G * 0.7),
    ]
}

/// 4 half-sticks radiating from the cell centre.
pub fn plus(ox: f64, oy: f64) -> Vec<Matchstick> {
    let cx = ox + G / 2.0;
    let cy = oy + G / 2.0;
    let half = G / 2.0;
    vec![
        m(cx, cy - half, cx, cy),
        m(cx, cy, cx, cy + half),
        m(cx - half, cy, cx, cy),
        m(cx, cy, cx + half, cy),
    ]
}

/// Shaft plus two barbs pointing right: 3 sticks.
pub fn arrow_right(ox: f64, oy: f64) -> Vec<Matchstick> {
    vec![
        m(ox, oy + G * 0.5, ox + G * 0.65, oy + G * 0.5),
        m(ox + G, oy + G * 0.5, ox + G * 0.65, oy),
        m(ox + G, oy + G * 0.5, ox + G * 0.65, oy + G),
    ]
}

/// Descending staircase, one riser and one tread per step.
pub fn stairs(ox: f64, oy: f64, steps: usize) -> Vec<Matchstick> {
    let mut sticks = Vec::with_capacity(steps * 2);
    for i in 0..steps {
        let x = ox + i as f64 * G;
        let y = oy + i as f64 * G;
        sticks.push(m(x, y, x, y + G));
        sticks.push(m(x, y + G, x + G, y + G));
    }
    sticks
}

// --- Closed polygons --------------------------------------------------------

/// Apex up, base along `oy + G`.
pub fn triangle(ox: f64, oy: f64) -> Vec<Matchstick> {
    vec![
        m(ox, oy + G, ox + G * 0.5, oy),
        m(ox + G, oy + G, ox + G * 0.5, oy),
        m(ox, oy + G, ox + G, oy + G),
    ]
}

/// Apex down, base along `oy`.
pub fn tri_down(ox: f64, oy: f64) -> Vec<Matchstick> {
    vec![
        m(ox, oy, ox + G * 0.5, oy + G),
        m(ox + G, oy, ox + G * 0.5, oy + G),
        m(ox, oy, ox + G, oy),
    ]
}

pub fn square(ox: f64, oy: f64) -> Vec<Matchstick> {
    vec![
        m(ox, oy, ox + G, oy),
        m(ox + G, oy, ox + G, oy + G),
        m(ox + G, oy + G, ox, oy + G),
        m(ox, oy + G, ox, oy),
    ]
}

/// House-shaped pentagon fitted to one cell.
pub fn pentagon(ox: f64, oy: f64) -> Vec<Matchstick> {
    let cx = ox + G / 2.0;
    let mid_y = oy + G * 0.38;
    let bot_y = oy + G;
    vec![
        m(cx, oy, ox + G, mid_y),
        m(ox + G, mid_y, ox + G * 0.82, bot_y),
        m(ox + G * 0.82, bot_y, ox + G * 0.18, bot_y),
        m(ox + G * 0.18, bot_y, ox, mid_y),
        m(ox, mid_y, cx, oy),
    ]
}

/// Flat-topped hexagon fitted to one cell width.
pub fn hexagon(ox: f64, oy: f64) -> Vec<Matchstick> {
    let w = G;
    let h = G * 0.866;
    let q = w * 0.25;
    vec![
        m(ox + q, oy, ox + w - q, oy),
        m(ox + w - q, oy, ox + w, oy + h / 2.0),
        m(ox + w, oy + h / 2.0, ox + w - q, oy + h),
        m(ox + w - q, oy + h, ox + q, oy + h),
        m(ox + q, oy + h, ox, oy + h / 2.0),
        m(ox, oy + h / 2.0, ox + q, oy),
    ]
}

pub fn diamond(ox: f64, oy: f64) -> Vec<Matchstick> {
    let cx = ox + G / 2.0;
    let cy = oy + G / 2.0;
    vec![
        m(cx, oy, ox + G, cy),
        m(ox + G, cy, cx, oy + G),
        m(cx, oy + G, ox, cy),
        m(ox, cy, cx, oy),
    ]
}

/// Vertex `i` of a regular `sides`-gon; vertex 0 points straight up.
pub fn polygon_vertex(cx: f64, cy: f64, radius: f64, sides: usize, i: usize) -> Point {
    let theta = -FRAC_PI_2 + i as f64 * TAU / sides as f64;
    Point::new(cx + radius * theta.cos(), cy + radius * theta.sin())
}

/// Regular polygon centred on `(cx, cy)`: exactly `sides` sticks forming a closed loop.
pub fn regular_polygon(cx: f64, cy: f64, radius: f64, sides: usize) -> Vec<Matchstick> {
    (0..sides)
        .map(|i| {
            Matchstick::between(
                polygon_vertex(cx, cy, radius, sides, i),
                polygon_vertex(cx, cy, radius, sides, (i + 1) % sides),
            )
        })
        .collect()
}

// --- Silhouettes ------------------------------------------------------------

/// Triangle roof on a square body, sharing the roof base: 6 sticks.
pub fn house(ox: f64, oy: f64) -> Vec<Matchstick> {
    vec![
        m(ox, oy + G, ox + G * 0.5, oy),
        m(ox + G * 0.5, oy, ox + G, oy + G),
        m(ox + G, oy + G, ox + G, oy + G * 2.0),
        m(ox + G, oy + G * 2.0, ox, oy + G * 2.0),
        m(ox, oy + G * 2.0, ox, oy + G),
        m(ox, oy + G, ox + G, oy + G),
    ]
}

/// Two triangles meeting at a point: 6 sticks.
pub fn bow_tie(ox: f64, oy: f64) -> Vec<Matchstick> {
    let cx = ox + G;
    let cy = oy + G * 0.5;
    vec![
        m(ox, oy, cx, cy),
        m(ox, oy + G, cx, cy),
        m(ox, oy, ox, oy + G),
        m(cx, cy, ox + G * 2.0, oy),
        m(cx, cy, ox + G * 2.0, oy + G),
        m(ox + G * 2.0, oy, ox + G * 2.0, oy + G),
    ]
}

/// Triangle canopy on a trunk: 4 sticks.
pub fn tree(ox: f64, oy: f64) -> Vec<Matchstick> {
    vec![
        m(ox, oy + G, ox + G * 0.5, oy),
        m(ox + G * 0.5, oy, ox + G, oy + G),
        m(ox, oy + G, ox + G, oy + G),
        m(ox + G * 0.5, oy + G, ox + G * 0.5, oy + G * 1.6),
    ]
}

/// Two overlapping triangles: 6 sticks.
pub fn star_of_david(ox: f64, oy: f64) -> Vec<Matchstick> {
    let w = G * 1.2;
    let h = G;
    let cx = ox + w / 2.0;
    vec![
        m(ox, oy + h * 0.7, cx, oy),
        m(cx, oy, ox + w, oy + h * 0.7),
        m(ox + w, oy + h * 0.7, ox, oy + h * 0.7),
        m(ox, oy + h * 0.3, cx, oy + h),
        m(cx, oy + h, ox + w, oy + h * 0.3),
        m(ox + w, oy + h * 0.3, ox, oy + h * 0.3),
    ]
}

/// 8 sticks radiating from `(ox + G, oy + G)`.
pub fn windmill(ox: f64, oy: f64) -> Vec<Matchstick> {
    let cx = ox + G;
    let cy = oy + G;
    [
        (-0.3, -1.0),
        (0.3, -1.0),
        (1.0, -0.3),
        (1.0, 0.3),
        (0.3, 1.0),
        (-0.3, 1.0),
        (-1.0, 0.3),
        (-1.0, -0.3),
    ]
    .into_iter()
    .map(|(dx, dy)| m(cx, cy, cx + G * dx, cy + G * dy))
    .collect()
}

/// Base, two sides and a five-stroke zigzag: 9 sticks.
pub fn crown(ox: f64, oy: f64) -> Vec<Matchstick> {
    let w = G * 2.0;
    let low = oy + G * 0.4;
    let mut sticks = vec![
        m(ox, oy + G, ox + w, oy + G),
        m(ox, oy + G, ox, low),
        m(ox + w, oy + G, ox + w, low),
    ];
    let zigzag = [(0.0, low), (0.2, oy), (0.4, low), (0.5, oy), (0.6, low), (0.8, oy), (1.0, low)];
    sticks.extend(
        zigzag
            .windows(2)
            .map(|pair| m(ox + w * pair[0].0, pair[0].1, ox + w * pair[1].0, pair[1].1)),
    );
    sticks
}

/// `posts` uprights joined by two rails: `posts + 2 * (posts - 1)` sticks.
pub fn fence(ox: f64, oy: f64, posts: usize) -> Vec<Matchstick> {
    let spacing = G * 0.6;
    let rail_y1 = oy + G * 0.3;
    let rail_y2 = oy + G * 0.7;
    let mut sticks: Vec<Matchstick> = (0..posts)
        .map(|i| {
            let x = ox + i as f64 * spacing;
            m(x, oy, x, oy + G)
        })
        .collect();
    for i in 0..posts.saturating_sub(1) {
        let x0 = ox + i as f64 * spacing;
        let x1 = ox + (i + 1) as f64 * spacing;
        sticks.push(m(x0, rail_y1, x1, rail_y1));
        sticks.push(m(x0, rail_y2, x1, rail_y2));
    }
    sticks
}

/// Diamond body, V tail and an eye: 7 sticks.
pub fn fish(ox: f64, oy: f64) -> Vec<Matchstick> {
    let w = G * 1.5;
    let h = G;
    vec![
        m(ox + w * 0.3, oy, ox + w * 0.7, oy + h * 0.5),
        m(ox + w * 0.7, oy + h * 0.5, ox + w * 0.3, oy + h),
        m(ox + w * 0.3, oy + h, ox, oy + h * 0.5),
        m(ox, oy + h * 0.5, ox + w * 0.3, oy),
        m(ox + w * 0.7, oy + h * 0.5, ox + w, oy),
        m(ox + w * 0.7, oy + h * 0.5, ox + w, oy + h),
        m(ox + w * 0.1, oy + h * 0.4, ox + w * 0.1, oy + h * 0.6),
    ]
}

/// Hull, mast and sail: 6 sticks.
pub fn boat(ox: f64, oy: f64) -> Vec<Matchstick> {
    vec![
        m(ox + G * 0.3, oy + G, ox + G * 1.7, oy + G),
        m(ox + G * 0.3, oy + G, ox + G * 0.6, oy + G * 1.4),
        m(ox + G * 1.7, oy + G, ox + G * 1.4, oy + G * 1.4),
        m(ox + G * 0.6, oy + G * 1.4, ox + G * 1.4, oy + G * 1.4),
        m(ox + G, oy + G, ox + G, oy),
        m(ox + G, oy, ox + G * 1.6, oy + G),
    ]
}

/// Nose cone, three stacked body cells, two fins and an exhaust: 18 sticks.
pub fn rocket(ox: f64, oy: f64) -> Vec<Matchstick> {
    let mut sticks = vec![m(ox, oy + G, ox + G * 0.5, oy), m(ox + G * 0.5, oy, ox + G, oy + G)];
    for i in 0..3 {
        let sy = oy + G + i as f64 * G;
        sticks.push(m(ox, sy, ox, sy + G));
        sticks.push(m(ox + G, sy, ox + G, sy + G));
    }
    for i in 0..=3 {
        let y = oy + G + i as f64 * G;
        sticks.push(m(ox, y, ox + G, y));
    }
    let fin_y = oy + G * 3.0;
    sticks.extend([
        m(ox, fin_y, ox - G * 0.5, fin_y + G * 0.7),
        m(ox - G * 0.5, fin_y + G * 0.7, ox, fin_y + G),
        m(ox + G, fin_y, ox + G * 1.5, fin_y + G * 0.7),
        m(ox + G * 1.5, fin_y + G * 0.7, ox + G, fin_y + G),
    ]);
    let ex_y = oy + G * 4.0;
    sticks.extend([
        m(ox, ex_y, ox + G * 0.5, ex_y + G * 0.6),
        m(ox + G, ex_y, ox + G * 0.5, ex_y + G * 0.6),
    ]);
    sticks
}
