use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::session::{Phase, QuizEventKind};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    #[error("level {0} is out of range (expected 1..={max})", max = crate::catalog::MAX_LEVEL)]
    OutOfRange(u32),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog is empty")]
    Empty,
    #[error("duplicate character '{0}' in catalog")]
    DuplicateGlyph(String),
    #[error("malformed catalog data: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("cannot {event:?} while {phase:?}")]
    InvalidTransition { event: QuizEventKind, phase: Phase },
    #[error("both pinyin and meaning are required")]
    EmptyAnswer,
    #[error("level {0} has no characters")]
    EmptyLevel(u32),
}

/// Failures of the external stroke widget. None of these are fatal; the
/// writing module degrades to a non-interactive state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetError {
    #[error("stroke widget is not available")]
    Unavailable,
    #[error("failed to load stroke data: {0}")]
    Load(String),
    #[error("stroke widget call failed: {0}")]
    Call(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Parse(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Level(#[from] LevelError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Widget(#[from] WidgetError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<Error> for JsValue {
    fn from(err: Error) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
