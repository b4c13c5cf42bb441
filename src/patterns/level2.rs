// Pattern Level 2 definition
// Repetition of larger closed shapes.
use super::{Level, Pattern, SP};
use crate::builders::row_of;
use crate::shapes::{diamond, hexagon, house, pentagon, square};

pub fn level2() -> Level {
    Level::new(
        2,
        vec![
            Pattern::new("Square Line", "Five separate squares in a row.", row_of(square, 0.0, 30.0, 5, SP)),
            Pattern::new("Pentagon Parade", "Three pentagons side by side.", row_of(pentagon, 0.0, 25.0, 3, SP)),
            Pattern::new("Hexagon Row", "Three hexagons in a line.", row_of(hexagon, 0.0, 30.0, 3, SP)),
            Pattern::new("Diamond Chain", "Five diamonds in a row.", row_of(diamond, 0.0, 30.0, 5, SP)),
            Pattern::new("House Row", "Four houses side by side.", row_of(house, 0.0, 15.0, 4, SP)),
        ],
    )
}
