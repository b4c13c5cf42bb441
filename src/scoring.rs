use crate::config::GameConfig;

/// Points for one answer: nothing when wrong, otherwise the base plus a bonus proportional to
/// the time still on the clock.
pub fn points_for(correct: bool, time_left: u32, config: &GameConfig) -> u32 {
    if !correct {
        return 0;
    }
    let total = config.timer_seconds.max(1) as f64;
    let fraction = (time_left as f64 / total).clamp(0.0, 1.0);
    config.base_points + (fraction * config.speed_bonus as f64).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points() {
        let cfg = GameConfig::default();
        assert_eq!(points_for(false, 60, &cfg), 0);
        assert_eq!(points_for(true, 60, &cfg), 200);
        assert_eq!(points_for(true, 30, &cfg), 150);
        assert_eq!(points_for(true, 0, &cfg), 100);
        // 100 * 41/60 = 68.33
        assert_eq!(points_for(true, 41, &cfg), 168);
    }

    #[test]
    fn test_zero_length_timer() {
        let cfg = GameConfig { timer_seconds: 0, ..GameConfig::default() };
        assert_eq!(points_for(true, 0, &cfg), 100);
    }
}
