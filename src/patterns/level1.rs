// Pattern Level 1 definition
// Pure repetition of simple, separate shapes.
use super::{Level, Pattern, SP};
use crate::builders::row_of;
use crate::shapes::{l_shape, plus, stairs, triangle, v_shape};

pub fn level1() -> Level {
    Level::new(
        1,
        vec![
            Pattern::new(
                "Row of L-shapes",
                "Five identical L-shapes in a row.",
                row_of(l_shape, 0.0, 30.0, 5, SP),
            ),
            Pattern::new(
                "V-shape Parade",
                "Six V-shapes (chevrons) lined up.",
                row_of(v_shape, 0.0, 30.0, 6, SP),
            ),
            Pattern::new(
                "Triangle Row",
                "Four separate triangles in a line.",
                row_of(triangle, 0.0, 30.0, 4, SP),
            ),
            Pattern::new("Staircase", "A staircase of five steps going down.", stairs(10.0, 5.0, 5)),
            Pattern::new("Plus Signs", "Four plus (+) shapes in a row.", row_of(plus, 0.0, 30.0, 4, SP)),
        ],
    )
}
