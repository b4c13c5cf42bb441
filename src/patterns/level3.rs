// Pattern Level 3 definition
// Connected lattices: neighbouring cells share their walls.
use super::{Level, Pattern};
use crate::builders::{connected_squares_col, connected_squares_row, row_of, square_grid, triangle_row};
use crate::geometry::G;
use crate::shapes::bow_tie;

pub fn level3() -> Level {
    Level::new(
        3,
        vec![
            Pattern::new(
                "Connected Squares",
                "Six squares sharing edges in a row. Shared walls count once!",
                connected_squares_row(0.0, 30.0, 6),
            ),
            Pattern::new("Triangle Wave", "Six triangles sharing a base line.", triangle_row(0.0, 25.0, 6)),
            Pattern::new(
                "Square Grid",
                "A 3x2 grid of squares sharing all edges.",
                square_grid(10.0, 20.0, 3, 2),
            ),
            Pattern::new(
                "Square Tower",
                "Five connected squares stacked in a column.",
                connected_squares_col(30.0, 0.0, 5),
            ),
            Pattern::new("Bow-Tie Row", "Three bow-tie shapes in a line.", row_of(bow_tie, 0.0, 30.0, 3, G * 2.5)),
        ],
    )
}
