// Pattern Level 4 definition
// Repeating shapes with one non-repeating extra, plus a roofed wall whose roof bases sit on
// the wall top and are only counted once.
use super::{Level, Pattern, SP};
use crate::builders::{roofed_wall, row_of};
use crate::shapes::{crown, diamond, fence, hexagon, house, square, star_of_david, triangle};

pub fn level4() -> Level {
    Level::new(
        4,
        vec![
            Pattern::new(
                "Triangles with a Crown",
                "Five triangles in a row, with a crown shape at the end.",
                [row_of(triangle, 0.0, 30.0, 5, SP), crown(SP * 5.0 + 5.0, 25.0)].concat(),
            ),
            Pattern::new(
                "Squares and a Star",
                "Four squares in a row, followed by a Star of David.",
                [row_of(square, 0.0, 30.0, 4, SP), star_of_david(SP * 4.0 + 5.0, 30.0)].concat(),
            ),
            Pattern::new(
                "Houses with Fence",
                "Three houses in a row with a fence on the right.",
                [row_of(house, 0.0, 10.0, 3, SP), fence(SP * 3.0, 30.0, 5)].concat(),
            ),
            Pattern::new(
                "Connected Squares + Triangles",
                "Five connected squares with a triangle on top of each.",
                roofed_wall(0.0, 0.0, 5),
            )
            .with_hint("A roof's base is the same stick as the wall top."),
            Pattern::new(
                "Hexagons with a Diamond",
                "Four hexagons in a row, and a diamond at the end.",
                [row_of(hexagon, 0.0, 30.0, 4, SP), diamond(SP * 4.0 + 5.0, 32.0)].concat(),
            ),
        ],
    )
}
