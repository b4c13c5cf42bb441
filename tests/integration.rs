// Integration tests (native) for the `matchstick-patterns` crate.
// These tests avoid wasm-specific functionality and exercise pure Rust logic so
// they can run under `cargo test` on the host.

use matchstick_patterns::render::render_svg;
use matchstick_patterns::{GameConfig, GameError, GameSession, LevelSet, MatchstickGame, Screen};

fn correct_answer(session: &GameSession) -> u32 {
    session.current_pattern().unwrap().total_matchsticks() as u32
}

// A full level played through the text entry path.
#[test]
fn play_level_one_by_text() {
    let mut session = GameSession::new(LevelSet::new(), GameConfig::default(), 2024);
    session.start();
    for i in 0..3 {
        let text = format!(" {} ", correct_answer(&session));
        let result = session.submit_text(&text).unwrap().clone();
        assert!(result.correct);
        assert_eq!(result.level, 1);
        if i < 2 {
            session.next_pattern().unwrap();
        } else {
            assert!(result.is_level_complete);
            assert!(!result.is_game_complete);
        }
    }
    assert_eq!(session.score(), 600);
}

#[test]
fn bad_text_leaves_round_open() {
    let mut session = GameSession::new(LevelSet::new(), GameConfig::default(), 1);
    session.start();
    assert_eq!(session.submit_text("-3").unwrap_err(), GameError::NegativeAnswer);
    assert!(matches!(session.submit_text("12 sticks"), Err(GameError::InvalidAnswer(_))));
    assert_eq!(session.screen(), Screen::Playing);
    assert!(session.timer().is_running());
}

#[test]
fn shorter_clock_from_config() {
    let config = GameConfig { timer_seconds: 10, ..GameConfig::default() };
    let mut session = GameSession::new(LevelSet::new(), config, 8);
    session.start();
    for _ in 0..9 {
        assert!(session.advance(1_000.0).is_none());
    }
    let result = session.advance(1_000.0).unwrap();
    assert_eq!(result.time_left, 0);
    assert!(!result.correct);
}

#[test]
fn same_seed_draws_same_patterns() {
    let names = |seed| {
        let mut s = GameSession::new(LevelSet::new(), GameConfig::default(), seed);
        s.start();
        let mut out = Vec::new();
        for i in 0..3 {
            out.push(s.current_pattern().unwrap().name);
            s.submit(0).unwrap();
            if i < 2 {
                s.next_pattern().unwrap();
            }
        }
        out
    };
    assert_eq!(names(77), names(77));
}

#[test]
fn rendered_svg_has_group_per_stick() {
    let set = LevelSet::new();
    let pattern = &set.get_level(3).patterns()[0];
    let cfg = GameConfig::default();
    let svg = render_svg(pattern.matchsticks(), cfg.canvas_width, cfg.canvas_height, cfg.padding);
    assert_eq!(svg.matches("<g filter").count(), pattern.total_matchsticks());
    assert!(svg.contains("width=\"500\" height=\"320\""));
}

#[test]
fn browser_game_object_runs_natively() {
    let mut game = MatchstickGame::new();
    assert_eq!(game.screen(), "start");
    assert!(game.pattern_name().is_none());
    game.start();
    assert_eq!(game.screen(), "playing");
    assert_eq!(game.level(), 1);
    assert_eq!(game.max_level(), 7);
    assert_eq!(game.patterns_per_level(), 3);
    assert_eq!(game.time_left(), 60);
    assert_eq!(game.timer_color(), "#4ecca3");
    assert!(game.pattern_name().is_some());
    assert!(game.current_svg().contains("<g filter"));
    assert!(!game.tick());
    assert!(matches!(game.submit("0"), Ok(false)));
    assert_eq!(game.screen(), "result");
}
