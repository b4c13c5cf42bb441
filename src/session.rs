//! Play session: which screen is showing, which patterns this level drew, the clock and the
//! running score.
//!
//! Flow: `Start` → [`GameSession::start`] → `Playing` → answer or timeout → `Result` →
//! next pattern / next level / replay → `Playing` again.

use log::{debug, info};
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::config::GameConfig;
use crate::error::GameError;
use crate::patterns::{LevelSet, Pattern};
use crate::rng::ShuffleRng;
use crate::scoring::points_for;
use crate::timer::Countdown;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Screen {
    Start,
    Playing,
    Result,
}

/// Outcome of one pattern, shown on the result screen.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RoundResult {
    pub correct: bool,
    /// `None` when the clock ran out before an answer.
    pub player_answer: Option<u32>,
    pub correct_answer: usize,
    pub points_earned: u32,
    pub total_score: u32,
    pub level: usize,
    pub time_left: u32,
    pub is_level_complete: bool,
    pub is_game_complete: bool,
}

/// Parses the answer box. Surrounding whitespace is ignored.
pub fn parse_answer(text: &str) -> Result<u32, GameError> {
    let trimmed = text.trim();
    if let Some(rest) = trimmed.strip_prefix('-') {
        if !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()) {
            return Err(GameError::NegativeAnswer);
        }
    }
    trimmed
        .parse::<u32>()
        .map_err(|_| GameError::InvalidAnswer(trimmed.to_owned()))
}

pub struct GameSession {
    levels: LevelSet,
    config: GameConfig,
    rng: ShuffleRng,
    screen: Screen,
    level: usize,
    score: u32,
    /// Indices into the current level's patterns, in play order.
    drawn: Vec<usize>,
    pattern_index: usize,
    submitted: bool,
    timer: Countdown,
    last_result: Option<RoundResult>,
}

impl GameSession {
    pub fn new(levels: LevelSet, config: GameConfig, seed: u64) -> Self {
        let timer = Countdown::new(config.timer_seconds);
        Self {
            levels,
            config,
            rng: ShuffleRng::new(seed),
            screen: Screen::Start,
            level: 1,
            score: 0,
            drawn: Vec::new(),
            pattern_index: 0,
            submitted: false,
            timer,
            last_result: None,
        }
    }

    /// Session seeded from the browser's entropy source.
    pub fn with_entropy(levels: LevelSet, config: GameConfig) -> Self {
        let mut session = Self::new(levels, config, 0);
        session.rng = ShuffleRng::from_entropy();
        session
    }

    /// Fresh game from level 1 with an empty score. Allowed from any screen.
    pub fn start(&mut self) {
        info!("new game");
        self.score = 0;
        self.begin_level(1);
    }

    /// Patterns drawn per level; a configured `0` still plays one.
    pub fn patterns_per_level(&self) -> usize {
        self.config.patterns_per_level.max(1)
    }

    fn begin_level(&mut self, level: usize) {
        let level = self.levels.get_level(level).number();
        let available = self.levels.get_level(level).patterns().len();
        let mut order: Vec<usize> = (0..available).collect();
        self.rng.shuffle(&mut order);
        let count = self.patterns_per_level();
        self.drawn = if available == 0 {
            Vec::new()
        } else {
            (0..count).map(|i| order[i % available]).collect()
        };
        debug!("level {level} drew patterns {:?}", self.drawn);

        self.level = level;
        self.pattern_index = 0;
        self.last_result = None;
        self.play_current();
    }

    fn play_current(&mut self) {
        self.submitted = false;
        self.screen = Screen::Playing;
        self.timer.reset(self.config.timer_seconds);
        self.timer.start();
    }

    fn require(&self, screen: Screen, action: &'static str) -> Result<(), GameError> {
        if self.screen == screen {
            Ok(())
        } else {
            Err(GameError::WrongScreen { action, screen: self.screen })
        }
    }

    /// Pattern currently on screen; `None` before the first game starts.
    pub fn current_pattern(&self) -> Option<&Pattern> {
        if self.screen == Screen::Start {
            return None;
        }
        let idx = *self.drawn.get(self.pattern_index)?;
        self.levels.get_level(self.level).patterns().get(idx)
    }

    fn finish_round(&mut self, player_answer: Option<u32>) -> &RoundResult {
        self.submitted = true;
        self.timer.stop();
        let correct_answer = self.current_pattern().map_or(0, Pattern::total_matchsticks);
        let correct = player_answer.is_some_and(|a| a as usize == correct_answer);
        let time_left = self.timer.time_left();
        let points_earned = points_for(correct, time_left, &self.config);
        self.score += points_earned;

        let is_level_complete = self.pattern_index + 1 >= self.patterns_per_level();
        let is_game_complete = is_level_complete && self.level >= self.levels.max_level();
        info!(
            "level {} pattern {}: answer {:?}, expected {}, +{} points",
            self.level,
            self.pattern_index + 1,
            player_answer,
            correct_answer,
            points_earned
        );
        self.screen = Screen::Result;
        self.last_result.insert(RoundResult {
            correct,
            player_answer,
            correct_answer,
            points_earned,
            total_score: self.score,
            level: self.level,
            time_left,
            is_level_complete,
            is_game_complete,
        })
    }

    /// Checks an answer against the pattern on screen.
    pub fn submit(&mut self, answer: u32) -> Result<&RoundResult, GameError> {
        if self.submitted {
            return Err(GameError::AlreadySubmitted);
        }
        self.require(Screen::Playing, "submit")?;
        Ok(self.finish_round(Some(answer)))
    }

    /// [`parse_answer`] followed by [`GameSession::submit`].
    pub fn submit_text(&mut self, text: &str) -> Result<&RoundResult, GameError> {
        let answer = parse_answer(text)?;
        self.submit(answer)
    }

    /// Feeds elapsed time to the clock. When it runs out on an unanswered pattern the round
    /// ends as a miss and its result is returned.
    pub fn advance(&mut self, elapsed_ms: f64) -> Option<&RoundResult> {
        if self.screen != Screen::Playing || self.submitted {
            return None;
        }
        if self.timer.advance(elapsed_ms) {
            debug!("time is up on level {} pattern {}", self.level, self.pattern_index + 1);
            return Some(self.finish_round(None));
        }
        None
    }

    /// Moves to the next pattern of the same level.
    pub fn next_pattern(&mut self) -> Result<(), GameError> {
        self.require(Screen::Result, "next pattern")?;
        if self.pattern_index + 1 >= self.patterns_per_level() {
            return Err(GameError::NoMorePatterns(self.level));
        }
        self.pattern_index += 1;
        self.play_current();
        Ok(())
    }

    /// Replays the current level with a fresh draw, or the whole game once it is complete.
    pub fn replay(&mut self) -> Result<(), GameError> {
        self.require(Screen::Result, "replay")?;
        if self.last_result.as_ref().is_some_and(|r| r.is_game_complete) {
            self.start();
        } else {
            self.begin_level(self.level);
        }
        Ok(())
    }

    /// Advances to the following level; the last level replays itself.
    pub fn next_level(&mut self) -> Result<(), GameError> {
        self.require(Screen::Result, "next level")?;
        if !self.last_result.as_ref().is_some_and(|r| r.is_level_complete) {
            return Err(GameError::LevelNotComplete(self.level));
        }
        let next = (self.level + 1).min(self.levels.max_level());
        self.begin_level(next);
        Ok(())
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Patterns already finished in this level.
    pub fn patterns_completed(&self) -> usize {
        self.pattern_index
    }

    pub fn timer(&self) -> &Countdown {
        &self.timer
    }

    pub fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn levels(&self) -> &LevelSet {
        &self.levels
    }
}
