// Pattern Level 7 definition
// Honeycombs and stacked silhouettes; most of these only count correctly after shared
// edges are collapsed.
use super::{Level, Pattern, SP};
use crate::builders::{connected_squares_col, honeycomb, merge, row_of, square_grid};
use crate::geometry::{G, Matchstick};
use crate::shapes::{rocket, stairs, tree, triangle};

fn roof_terrace() -> Vec<Matchstick> {
    let roofs = (0..4).map(|i| triangle(i as f64 * G, 0.0));
    merge(std::iter::once(square_grid(0.0, G, 4, 2)).chain(roofs))
}

fn launch_day() -> Vec<Matchstick> {
    [
        rocket(G * 0.5, 0.0),
        rocket(G * 3.0, 0.0),
        row_of(tree, G * 5.5, G * 3.4, 3, SP),
    ]
    .concat()
}

pub fn level7() -> Level {
    Level::new(
        7,
        vec![
            Pattern::new("Honeycomb", "Two staggered rows of three hexagons.", honeycomb(0.0, 0.0, 2, 3))
                .with_hint("Inner walls belong to two cells at once."),
            Pattern::new("Big Honeycomb", "Three staggered rows of three hexagons.", honeycomb(0.0, 0.0, 3, 3))
                .with_hint("Count the outline first, then the walls inside."),
            Pattern::new("Roof Terrace", "A 4x2 block of squares with a roof on every column.", roof_terrace())
                .with_hint("Each roof base is also the top of the wall."),
            Pattern::new(
                "Staircase Tower",
                "Five steps running down beside a tower of five squares.",
                merge([connected_squares_col(0.0, 0.0, 5), stairs(0.0, 0.0, 5)]),
            )
            .with_hint("The first steps lean on the tower."),
            Pattern::new("Launch Day", "Two rockets on the pad and three trees nearby.", launch_day()),
        ],
    )
}
