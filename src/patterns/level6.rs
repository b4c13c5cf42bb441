// Pattern Level 6 definition
// Regular polygons and chains whose neighbours share sticks.
use super::{Level, Pattern, SP};
use crate::builders::{hexagon_chain, polygon_parade, row_of, triangle_strip};
use crate::geometry::G;
use crate::shapes::{arrow_right, fish, windmill};

pub fn level6() -> Level {
    Level::new(
        6,
        vec![
            Pattern::new(
                "Polygon Parade",
                "A triangle, square, pentagon, hexagon, heptagon and octagon.",
                polygon_parade(0.0, 0.0, 18.0, &[3, 4, 5, 6, 7, 8]),
            )
            .with_hint("Each shape has as many sides as corners."),
            Pattern::new("Hexagon Chain", "Five hexagons holding hands.", hexagon_chain(0.0, 10.0, 5))
                .with_hint("Neighbouring cells share one wall."),
            Pattern::new(
                "Triangle Strip",
                "Five triangles pointing up, with upside-down ones filling the gaps.",
                triangle_strip(0.0, 20.0, 5),
            )
            .with_hint("Every slanted stick inside the strip belongs to two triangles."),
            Pattern::new(
                "Windmills and Arrows",
                "Two windmills followed by three arrows.",
                [windmill(0.0, 0.0), windmill(G * 2.5, 0.0), row_of(arrow_right, G * 5.5, 15.0, 3, SP)].concat(),
            ),
            Pattern::new("School of Fish", "Four fish swimming in a line.", row_of(fish, 0.0, 20.0, 4, G * 1.5 + 10.0)),
        ],
    )
}
