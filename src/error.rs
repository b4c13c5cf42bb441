use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::session::Screen;

/// Everything a player action or the browser glue can trip over.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum GameError {
    #[error("'{0}' is not a number")]
    InvalidAnswer(String),

    #[error("answer cannot be negative")]
    NegativeAnswer,

    #[error("action '{action}' is not available on the {screen:?} screen")]
    WrongScreen { action: &'static str, screen: Screen },

    #[error("an answer was already submitted for this pattern")]
    AlreadySubmitted,

    #[error("level {0} has no patterns left; start the next level or replay")]
    NoMorePatterns(usize),

    #[error("level {0} is not complete yet")]
    LevelNotComplete(usize),

    #[error("no document available")]
    NoDocument,

    #[error("no element with id '{0}'")]
    ElementNotFound(String),
}

impl From<GameError> for JsValue {
    fn from(err: GameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
