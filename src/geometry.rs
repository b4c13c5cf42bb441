//! Matchstick geometry: points, sticks and the padded bounding box used for display.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Length of one matchstick in figure units.
pub const G: f64 = 30.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One matchstick. The head sits at `(x1, y1)`; direction matters for drawing only.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Matchstick {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Matchstick {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn between(head: Point, tail: Point) -> Self {
        Self::new(head.x, head.y, tail.x, tail.y)
    }

    pub fn head(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    pub fn tail(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    pub fn length(&self) -> f64 {
        (self.x2 - self.x1).hypot(self.y2 - self.y1)
    }

    pub fn reversed(&self) -> Self {
        Self::new(self.x2, self.y2, self.x1, self.y1)
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x1 + dx, self.y1 + dy, self.x2 + dx, self.y2 + dy)
    }
}

/// Shorthand used throughout the shape tables.
pub(crate) const fn m(x1: f64, y1: f64, x2: f64, y2: f64) -> Matchstick {
    Matchstick::new(x1, y1, x2, y2)
}

/// Bounding box over every endpoint, grown by a margin on all four sides.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ViewBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    /// Used when there is nothing to frame.
    pub const EMPTY: ViewBox = ViewBox { x: 0.0, y: 0.0, width: 100.0, height: 100.0 };

    pub fn of(sticks: &[Matchstick], padding: f64) -> Self {
        if sticks.is_empty() {
            return Self::EMPTY;
        }
        let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
        let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
        for s in sticks {
            min_x = min_x.min(s.x1).min(s.x2);
            min_y = min_y.min(s.y1).min(s.y2);
            max_x = max_x.max(s.x1).max(s.x2);
            max_y = max_y.max(s.y1).max(s.y2);
        }
        Self {
            x: min_x - padding,
            y: min_y - padding,
            width: max_x - min_x + padding * 2.0,
            height: max_y - min_y + padding * 2.0,
        }
    }

    /// `viewBox` attribute value.
    pub fn to_attr(&self) -> String {
        format!("{} {} {} {}", self.x, self.y, self.width, self.height)
    }
}
