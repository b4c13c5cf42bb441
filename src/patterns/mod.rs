//! Level tables.
//!
//! Each level lives in its own `levelN.rs` file and builds its patterns from the shape and
//! builder functions. The full table is assembled once into a [`LevelSet`], which owns every
//! pattern and never changes afterwards. A pattern's answer is always measured from its own
//! stick list.

use log::{debug, warn};
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::geometry::{G, Matchstick};

mod level1;
mod level2;
mod level3;
mod level4;
mod level5;
mod level6;
mod level7;

/// Gap between neighbouring stand-alone shapes in a row.
pub(crate) const SP: f64 = G + 10.0;

/// One puzzle: a named figure and the sticks it is drawn with.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub hint: Option<&'static str>,
    matchsticks: Vec<Matchstick>,
}

impl Pattern {
    pub fn new(name: &'static str, description: &'static str, matchsticks: Vec<Matchstick>) -> Self {
        Self { name, description, hint: None, matchsticks }
    }

    pub fn with_hint(mut self, hint: &'static str) -> Self {
        self.hint = Some(hint);
        self
    }

    pub fn matchsticks(&self) -> &[Matchstick] {
        &self.matchsticks
    }

    /// The correct answer.
    pub fn total_matchsticks(&self) -> usize {
        self.matchsticks.len()
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Level {
    number: usize,
    patterns: Vec<Pattern>,
}

impl Level {
    pub(crate) fn new(number: usize, patterns: Vec<Pattern>) -> Self {
        Self { number, patterns }
    }

    /// 1-based.
    pub fn number(&self) -> usize {
        self.number
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }
}

/// Every level of the game, in play order.
#[derive(Clone, Debug)]
pub struct LevelSet {
    levels: Vec<Level>,
}

impl Default for LevelSet {
    fn default() -> Self {
        Self::new()
    }
}

impl LevelSet {
    pub fn new() -> Self {
        let levels = vec![
            level1::level1(),
            level2::level2(),
            level3::level3(),
            level4::level4(),
            level5::level5(),
            level6::level6(),
            level7::level7(),
        ];
        debug!(
            "built {} levels, {} patterns",
            levels.len(),
            levels.iter().map(|l| l.patterns.len()).sum::<usize>()
        );
        Self { levels }
    }

    /// Level `number` (1-based). Unknown numbers fall back to the first level.
    pub fn get_level(&self, number: usize) -> &Level {
        match self.levels.iter().find(|l| l.number == number) {
            Some(level) => level,
            None => {
                warn!("level {number} does not exist, falling back to level 1");
                &self.levels[0]
            }
        }
    }

    pub fn max_level(&self) -> usize {
        self.levels.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Level> {
        self.levels.iter()
    }
}
