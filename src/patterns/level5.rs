// Pattern Level 5 definition
// Larger compounds mixing lattices, silhouettes and extras.
use super::{Level, Pattern, SP};
use crate::builders::{connected_squares_row, merge, roofed_wall, row_of};
use crate::geometry::{G, Matchstick, m};
use crate::shapes::{boat, diamond, house, rocket, star_of_david, tree};

fn castle_wall() -> Vec<Matchstick> {
    let mut sticks = roofed_wall(0.0, G, 6);
    // Flag on the last battlement.
    let pole_x = G * 5.5;
    sticks.push(m(pole_x, G, pole_x, G * 0.2));
    sticks.push(m(pole_x, G * 0.2, G * 6.0, G * 0.6));
    sticks
}

fn diamond_grid() -> Vec<Matchstick> {
    (0..3).flat_map(|r| row_of(diamond, 0.0, r as f64 * SP, 4, SP)).collect()
}

fn grand_pattern() -> Vec<Matchstick> {
    let houses = (0..4).map(|i| house(i as f64 * G, G));
    merge(
        std::iter::once(connected_squares_row(0.0, G * 3.0, 4))
            .chain(houses)
            .chain(std::iter::once(rocket(G * 5.0, 0.0))),
    )
}

pub fn level5() -> Level {
    Level::new(
        5,
        vec![
            Pattern::new(
                "House Village",
                "Five houses in a row flanked by two trees.",
                [tree(0.0, 10.0), row_of(house, SP, 10.0, 5, SP), tree(SP * 6.0, 10.0)].concat(),
            ),
            Pattern::new(
                "Castle Wall",
                "A row of connected squares topped with triangles and a flag.",
                castle_wall(),
            ),
            Pattern::new(
                "Boat Fleet",
                "Four boats in a row with a star flag at the end.",
                [row_of(boat, 0.0, 15.0, 4, G * 2.2), star_of_david(G * 8.8 + 5.0, 20.0)].concat(),
            ),
            Pattern::new("Diamond Grid", "Three rows of four diamonds each. Count carefully!", diamond_grid()),
            Pattern::new(
                "The Grand Pattern",
                "Connected squares with houses on top and a rocket at the end.",
                grand_pattern(),
            )
            .with_hint("Neighbouring houses share a wall, and every house stands on the row below."),
        ],
    )
}
