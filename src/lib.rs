//! Matchstick Patterns core crate.
//!
//! A figure built from matchsticks is shown, the player counts the sticks before the clock
//! runs out, and correct answers score more the faster they come in. Figure generation
//! (shapes, builders, shared-edge collapsing) and all gameplay state are plain Rust and run
//! natively; the `MatchstickGame` wrapper at the bottom is what the browser page drives.

use wasm_bindgen::prelude::*;

pub mod builders;
pub mod config;
pub mod dedup;
pub mod error;
pub mod geometry;
pub mod patterns;
pub mod render;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod shapes;
pub mod timer;

pub use config::GameConfig;
pub use error::GameError;
pub use geometry::{G, Matchstick, Point, ViewBox};
pub use patterns::{Level, LevelSet, Pattern};
pub use session::{GameSession, RoundResult, Screen};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // A second start (hot reload) finds the logger already installed; nothing to do then.
    if log::set_logger(&wasm_bindgen_console_logger::DEFAULT_LOGGER).is_ok() {
        log::set_max_level(log::LevelFilter::Info);
        log::info!("console logger ready");
    }
}

/// Sets the log filter: "error", "warn", "info", "debug", "trace" or "off".
#[wasm_bindgen]
pub fn update_log_level(level: Option<String>) {
    log::set_max_level(config::parse_log_level(level.as_deref()));
}

/// Milliseconds from a monotonic-enough clock.
#[cfg(target_arch = "wasm32")]
pub(crate) fn performance_now() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn performance_now() -> f64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs_f64() * 1_000.0)
        .unwrap_or(0.0)
}

// -----------------------------------------------------------------------------
// Browser-facing game object
// -----------------------------------------------------------------------------

/// One player's game. The page calls `tick()` from its animation frame loop and re-renders
/// after every call that changes the screen.
#[wasm_bindgen]
pub struct MatchstickGame {
    session: GameSession,
    last_tick_ms: Option<f64>,
}

#[wasm_bindgen]
impl MatchstickGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> MatchstickGame {
        MatchstickGame {
            session: GameSession::with_entropy(LevelSet::new(), GameConfig::default()),
            last_tick_ms: None,
        }
    }

    pub fn start(&mut self) {
        self.session.start();
        self.last_tick_ms = None;
    }

    /// Submits the answer box's raw text. Errors carry a message for the page to show.
    pub fn submit(&mut self, text: &str) -> Result<bool, JsValue> {
        let result = self.session.submit_text(text)?;
        Ok(result.correct)
    }

    /// Advances the clock to now. Returns `true` if the time just ran out.
    pub fn tick(&mut self) -> bool {
        let now = performance_now();
        let elapsed = self.last_tick_ms.map_or(0.0, |prev| now - prev);
        self.last_tick_ms = Some(now);
        self.session.advance(elapsed).is_some()
    }

    pub fn next_pattern(&mut self) -> Result<(), JsValue> {
        self.session.next_pattern()?;
        self.last_tick_ms = None;
        Ok(())
    }

    pub fn replay(&mut self) -> Result<(), JsValue> {
        self.session.replay()?;
        self.last_tick_ms = None;
        Ok(())
    }

    pub fn next_level(&mut self) -> Result<(), JsValue> {
        self.session.next_level()?;
        self.last_tick_ms = None;
        Ok(())
    }

    /// "start", "playing" or "result".
    pub fn screen(&self) -> String {
        match self.session.screen() {
            Screen::Start => "start",
            Screen::Playing => "playing",
            Screen::Result => "result",
        }
        .to_string()
    }

    pub fn level(&self) -> usize {
        self.session.level()
    }

    pub fn max_level(&self) -> usize {
        self.session.levels().max_level()
    }

    pub fn score(&self) -> u32 {
        self.session.score()
    }

    pub fn patterns_completed(&self) -> usize {
        self.session.patterns_completed()
    }

    pub fn patterns_per_level(&self) -> usize {
        self.session.patterns_per_level()
    }

    pub fn time_left(&self) -> u32 {
        self.session.timer().time_left()
    }

    /// Timer bar width in percent.
    pub fn timer_percent(&self) -> f64 {
        self.session.timer().fraction_left() * 100.0
    }

    pub fn timer_color(&self) -> String {
        self.session.timer().urgency().color().to_string()
    }

    pub fn pattern_name(&self) -> Option<String> {
        self.session.current_pattern().map(|p| p.name.to_string())
    }

    pub fn pattern_description(&self) -> Option<String> {
        self.session.current_pattern().map(|p| p.description.to_string())
    }

    pub fn pattern_hint(&self) -> Option<String> {
        self.session.current_pattern().and_then(|p| p.hint).map(str::to_string)
    }

    /// SVG markup for the pattern on screen (empty frame before the game starts).
    pub fn current_svg(&self) -> String {
        let cfg = self.session.config();
        let sticks = self.session.current_pattern().map(Pattern::matchsticks).unwrap_or_default();
        render::render_svg(sticks, cfg.canvas_width, cfg.canvas_height, cfg.padding)
    }

    /// Replaces the contents of the element with id `element_id` with the current figure.
    pub fn render_into(&self, element_id: &str) -> Result<(), JsValue> {
        let doc = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(GameError::NoDocument)?;
        let el = doc
            .get_element_by_id(element_id)
            .ok_or_else(|| GameError::ElementNotFound(element_id.to_string()))?;
        el.set_inner_html(&self.current_svg());
        Ok(())
    }
}

#[cfg(feature = "serde_json")]
#[wasm_bindgen]
impl MatchstickGame {
    /// The latest result as JSON, or `null` when there is none.
    pub fn last_result_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.session.last_result()).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Default for MatchstickGame {
    fn default() -> Self {
        Self::new()
    }
}
