//! Hanzi Master core crate.
//!
//! Flashcard quiz (type the pinyin and meaning of a character) plus a
//! stroke-order writing mode driven by the HanziWriter widget. The grading,
//! session and writing logic are plain Rust and run under `cargo test` on the
//! host; the `ui` module wires them into the browser DOM.

use wasm_bindgen::prelude::*;

pub mod catalog;
pub mod config;
pub mod error;
pub mod grader;
pub mod session;
pub mod writing;

mod ui;

pub use catalog::{Catalog, CharacterRecord, Example, Level};
pub use config::{AppConfig, WriterConfig};
pub use error::Error;
pub use grader::{AnswerInput, Feedback, grade};
pub use session::{QuizEvent, RevealKind, Session, SessionStats};
pub use writing::{StrokeWidget, WidgetEvent, WidgetFactory, WritingPractice};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    log::info!("hanzi-master {} loaded", env!("CARGO_PKG_VERSION"));
}

// -----------------------------------------------------------------------------
// Entrypoints
// -----------------------------------------------------------------------------

/// Mounts the app into `document.body` with default settings.
#[wasm_bindgen]
pub fn start_app() -> Result<(), JsValue> {
    ui::start(AppConfig::default())
}

/// Same as [`start_app`] with a JSON [`AppConfig`] (camelCase keys, all optional).
#[wasm_bindgen]
pub fn start_app_with_config(config_json: &str) -> Result<(), JsValue> {
    let config = AppConfig::from_json(config_json).map_err(Error::from)?;
    ui::start(config)
}
