//! Per-pattern countdown.
//!
//! The clock does not read time itself; the host feeds it elapsed milliseconds through
//! [`Countdown::advance`]. Only whole seconds are taken off the display value, so a frame
//! loop calling `advance` at 60 Hz still ticks once a second.

#[cfg(feature = "serde")]
use serde::Serialize;

const MS_PER_SECOND: f64 = 1_000.0;

/// How close the clock is to running out, for colouring the timer bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Urgency {
    Calm,
    Warning,
    Critical,
}

impl Urgency {
    pub fn color(self) -> &'static str {
        match self {
            Urgency::Calm => "#4ecca3",
            Urgency::Warning => "#ffc107",
            Urgency::Critical => "#e74c3c",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Countdown {
    total: u32,
    time_left: u32,
    running: bool,
    carry_ms: f64, // elapsed time not yet converted into a whole second
}

impl Countdown {
    pub fn new(seconds: u32) -> Self {
        Self { total: seconds, time_left: seconds, running: false, carry_ms: 0.0 }
    }

    pub fn start(&mut self) {
        if self.time_left > 0 {
            self.running = true;
        }
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Stops the clock and refills it.
    pub fn reset(&mut self, seconds: u32) {
        self.total = seconds;
        self.time_left = seconds;
        self.running = false;
        self.carry_ms = 0.0;
    }

    /// Feeds elapsed wall time. Returns `true` if this call made the clock hit zero.
    pub fn advance(&mut self, elapsed_ms: f64) -> bool {
        if !self.running || elapsed_ms <= 0.0 || !elapsed_ms.is_finite() {
            return false;
        }
        self.carry_ms += elapsed_ms;
        let whole = (self.carry_ms / MS_PER_SECOND).floor();
        if whole < 1.0 {
            return false;
        }
        self.carry_ms -= whole * MS_PER_SECOND;
        let whole = whole.min(u32::MAX as f64) as u32;
        self.time_left = self.time_left.saturating_sub(whole);
        if self.time_left == 0 {
            self.running = false;
            self.carry_ms = 0.0;
            return true;
        }
        false
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_expired(&self) -> bool {
        self.time_left == 0
    }

    /// Share of the clock remaining, `0.0..=1.0`.
    pub fn fraction_left(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.time_left as f64 / self.total as f64
        }
    }

    pub fn urgency(&self) -> Urgency {
        match self.time_left {
            t if t > 30 => Urgency::Calm,
            t if t > 10 => Urgency::Warning,
            _ => Urgency::Critical,
        }
    }
}
