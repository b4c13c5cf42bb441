//! Runtime game settings.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tunable numbers for a play session. `Default` gives the standard game.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct GameConfig {
    /// Seconds on the clock for each pattern.
    pub timer_seconds: u32,
    /// Patterns played before a level is complete.
    pub patterns_per_level: usize,
    /// Points for any correct answer.
    pub base_points: u32,
    /// Extra points for answering instantly, scaled down linearly with time used.
    pub speed_bonus: u32,
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Margin around the figure inside the SVG viewBox.
    pub padding: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            timer_seconds: 60,
            patterns_per_level: 3,
            base_points: 100,
            speed_bonus: 100,
            canvas_width: 500,
            canvas_height: 320,
            padding: 15.0,
        }
    }
}

/// Maps a level name from the host page to a filter; anything unrecognised means `info`.
pub fn parse_log_level(level: Option<&str>) -> log::LevelFilter {
    match level.map(str::trim) {
        Some("error") => log::LevelFilter::Error,
        Some("warn") => log::LevelFilter::Warn,
        Some("debug") => log::LevelFilter::Debug,
        Some("trace") => log::LevelFilter::Trace,
        Some("off") => log::LevelFilter::Off,
        _ => log::LevelFilter::Info,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.timer_seconds, 60);
        assert_eq!(cfg.patterns_per_level, 3);
    }

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level(Some("debug")), log::LevelFilter::Debug);
        assert_eq!(parse_log_level(Some(" warn ")), log::LevelFilter::Warn);
        assert_eq!(parse_log_level(None), log::LevelFilter::Info);
        assert_eq!(parse_log_level(Some("loud")), log::LevelFilter::Info);
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn test_partial_json_keeps_defaults() {
        let cfg: GameConfig = serde_json::from_str(r#"{"timer_seconds": 30}"#).unwrap();
        assert_eq!(cfg.timer_seconds, 30);
        assert_eq!(cfg.base_points, 100);
    }
}
