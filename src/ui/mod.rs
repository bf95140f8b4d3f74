//! Browser front end.
//!
//! The page skeleton is built once in [`start`]; listeners are attached at
//! build time and only ever touch the single `AppState` through [`with_app`],
//! which re-renders every view afterwards. Widget callbacks go through a
//! small queue so they never re-enter a handler that already holds the state.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::session::{QuizEvent, Session};
use crate::writing::{WidgetEvent, WritingPractice};

mod dom;
mod hanzi_writer;
mod header;
mod level_view;
mod quiz_view;
mod stats_view;
mod writing_view;

use hanzi_writer::HanziWriterFactory;

const ROOT_ID: &str = "hm-app";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum AppMode {
    Quiz,
    Writing,
}

pub(crate) struct AppState {
    config: AppConfig,
    mode: AppMode,
    session: Session<'static>,
    writing: Option<WritingPractice<'static, HanziWriterFactory>>,
    stats_open: bool,
    rng: SmallRng,
}

thread_local! {
    static APP: RefCell<Option<AppState>> = const { RefCell::new(None) };
    static PENDING_WIDGET_EVENTS: RefCell<VecDeque<(u64, WidgetEvent)>> =
        const { RefCell::new(VecDeque::new()) };
}

pub(crate) fn start(config: AppConfig) -> Result<(), JsValue> {
    let doc = dom::document()?;
    if doc.get_element_by_id(ROOT_ID).is_some() {
        log::warn!("app already mounted");
        return Ok(());
    }
    let body = doc.body().ok_or_else(|| JsValue::from_str("no body"))?;

    install_styles(&doc)?;
    let root = dom::create(&doc, "div", Some(ROOT_ID), "hm-app")?;
    let header = header::build(&doc)?;
    root.append_child(&header)?;
    let main = dom::create(&doc, "main", None, "hm-main")?;
    for view in [
        level_view::build(&doc)?,
        quiz_view::build(&doc)?,
        writing_view::build(&doc)?,
    ] {
        main.append_child(&view)?;
    }
    root.append_child(&main)?;
    let stats = stats_view::build(&doc)?;
    root.append_child(&stats)?;
    body.append_child(&root)?;

    quiz_view::wire_keyboard(&doc)?;

    let session = Session::new(Catalog::builtin()).with_level(config.initial_level);
    let app = AppState {
        config,
        mode: AppMode::Quiz,
        session,
        writing: None,
        stats_open: false,
        rng: SmallRng::from_entropy(),
    };
    APP.with(|cell| cell.replace(Some(app)));
    log::info!("app mounted ({} characters)", Catalog::builtin().len());
    with_app(|_| Ok(()));
    Ok(())
}

/// Runs a handler against the app state, then re-renders.
pub(super) fn with_app(f: impl FnOnce(&mut AppState) -> Result<(), JsValue>) {
    APP.with(|cell| {
        let Ok(mut guard) = cell.try_borrow_mut() else {
            log::warn!("ui event while state is busy; ignored");
            return;
        };
        let Some(app) = guard.as_mut() else { return };
        if let Err(err) = f(app).and_then(|()| render(app)) {
            log::error!("ui handler failed: {err:?}");
        }
    });
    drain_widget_events();
}

fn render(app: &AppState) -> Result<(), JsValue> {
    let doc = dom::document()?;
    header::render(&doc, app)?;
    level_view::render(&doc, app)?;
    quiz_view::render(&doc, app)?;
    writing_view::render(&doc, app)?;
    stats_view::render(&doc, app)?;
    Ok(())
}

/// Feeds an event to the quiz session. Rejected events are logged by the
/// session and leave it unchanged.
pub(super) fn dispatch_quiz(app: &mut AppState, event: QuizEvent) -> bool {
    let AppState { session, rng, .. } = app;
    session.dispatch(event, rng).is_ok()
}

/// Clears the answer form for a freshly drawn character and focuses it.
pub(super) fn begin_round(app: &AppState) -> Result<(), JsValue> {
    let doc = dom::document()?;
    quiz_view::clear_inputs(&doc)?;
    dom::focus_later(quiz_view::MEANING_ID, app.config.focus_delay_ms);
    Ok(())
}

pub(super) fn set_mode(app: &mut AppState, mode: AppMode) -> Result<(), JsValue> {
    if app.mode == mode {
        return Ok(());
    }
    log::info!("switching to {mode:?} mode");
    match mode {
        AppMode::Writing => {
            let doc = dom::document()?;
            let target = dom::by_id(&doc, writing_view::TARGET_ID)?;
            let factory = HanziWriterFactory::new(target, app.config.writer.clone());
            let mut practice = WritingPractice::new(
                app.session.catalog(),
                app.session.level(),
                factory,
                widget_sink(),
                app.config.writer.show_outline,
            );
            practice.mount();
            app.writing = Some(practice);
        }
        AppMode::Quiz => {
            if let Some(mut practice) = app.writing.take() {
                practice.unmount();
            }
        }
    }
    app.mode = mode;
    Ok(())
}

fn widget_sink() -> Rc<dyn Fn(u64, WidgetEvent)> {
    Rc::new(|generation, event| {
        PENDING_WIDGET_EVENTS.with(|q| q.borrow_mut().push_back((generation, event)));
        drain_widget_events();
    })
}

// If the state is borrowed the queue is left alone; `with_app` drains it once
// the running handler returns.
fn drain_widget_events() {
    APP.with(|cell| {
        let Ok(mut guard) = cell.try_borrow_mut() else { return };
        let Some(app) = guard.as_mut() else { return };
        let mut changed = false;
        while let Some((generation, event)) =
            PENDING_WIDGET_EVENTS.with(|q| q.borrow_mut().pop_front())
        {
            if let Some(practice) = app.writing.as_mut() {
                changed |= practice.on_widget_event(generation, event);
            }
        }
        if changed {
            if let Err(err) = render(app) {
                log::error!("render after widget event failed: {err:?}");
            }
        }
    });
}

const STYLES: &str = r#"
[hidden] { display: none !important; }
.hm-app { max-width: 56rem; margin: 0 auto; padding: 1.5rem 1rem; font-family: system-ui, sans-serif; color: #1f2937; }
body { background: #fffbf5; margin: 0; }
.hm-header { display: flex; flex-wrap: wrap; align-items: center; justify-content: space-between; gap: 1rem; margin-bottom: 2rem; }
.hm-brand { display: flex; align-items: center; gap: .75rem; }
.hm-title { font-size: 1.5rem; font-weight: 900; margin: 0; }
.hm-subtitle { font-size: .75rem; font-weight: 600; color: #6b7280; text-transform: uppercase; letter-spacing: .05em; }
.hm-modes { display: flex; gap: .25rem; padding: .25rem; background: #fff; border: 1px solid #e5e7eb; border-radius: .75rem; }
.hm-btn { cursor: pointer; border: 1px solid #e5e7eb; background: #fff; color: #374151; border-radius: .6rem; padding: .55rem 1rem; font-weight: 700; }
.hm-btn:hover { background: #f9fafb; }
.hm-btn-primary { background: #dc2626; border-color: #dc2626; color: #fff; }
.hm-btn-primary:hover { background: #b91c1c; }
.hm-btn-writing { background: #4f46e5; border-color: #4f46e5; color: #fff; }
.hm-active { background: #fef2f2; color: #dc2626; border-color: #fecaca; }
.hm-card { background: #fff; border: 1px solid #f3f4f6; border-radius: 1.5rem; box-shadow: 0 10px 30px rgba(0,0,0,.08); padding: 1.5rem; }
.hm-level-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(8rem, 1fr)); gap: 1rem; margin: 2rem 0; }
.hm-level-btn { cursor: pointer; border: none; color: #fff; border-radius: 1rem; padding: 1.5rem .5rem; display: flex; flex-direction: column; align-items: center; gap: .4rem; font-size: 1.4rem; }
.hm-level-btn small { font-size: .7rem; background: rgba(0,0,0,.2); padding: .2rem .5rem; border-radius: 999px; }
.hm-info { background: #eff6ff; border: 1px solid #dbeafe; border-radius: 1rem; padding: 1rem 1.5rem; color: #1e3a8a; font-size: .9rem; }
.hm-streak { text-align: center; margin-bottom: 1.5rem; }
.hm-streak span { background: #ffedd5; color: #c2410c; border: 1px solid #fed7aa; border-radius: 999px; padding: .35rem 1rem; font-weight: 700; }
.hm-char-card { background: linear-gradient(135deg, #dc2626, #ea580c); border-radius: 1.5rem; padding: 3rem 1rem; text-align: center; color: #fff; }
.hm-char { font-family: 'Noto Serif SC', 'SimSun', serif; font-size: 7rem; font-weight: 700; }
.hm-answer-pinyin { display: inline-block; font-size: 1.5rem; font-weight: 700; background: rgba(255,255,255,.2); border-radius: .75rem; padding: .4rem 1rem; }
.hm-answer-meaning { margin-top: .75rem; font-size: 1.2rem; }
.hm-example { background: #eef2ff; border: 1px solid #e0e7ff; border-radius: 1rem; padding: 1rem; margin-top: 1rem; }
.hm-example-zh { font-family: 'Noto Serif SC', serif; font-size: 1.2rem; font-weight: 700; }
.hm-form, .hm-feedback { margin-top: 1.5rem; display: flex; flex-direction: column; gap: 1rem; }
.hm-form label { font-size: .8rem; font-weight: 600; text-transform: uppercase; color: #374151; }
.hm-form input { width: 100%; box-sizing: border-box; padding: .75rem 1rem; font-size: 1.1rem; border: 2px solid #e5e7eb; border-radius: .75rem; }
.hm-row { display: flex; flex-wrap: wrap; gap: .5rem; }
.hm-ok { color: #15803d; }
.hm-bad { color: #b91c1c; }
.hm-modal { position: fixed; inset: 0; display: flex; align-items: center; justify-content: center; z-index: 50; }
.hm-backdrop { position: absolute; inset: 0; background: rgba(0,0,0,.4); }
.hm-modal-card { position: relative; background: #fff; border-radius: 1.5rem; padding: 1.5rem; width: 100%; max-width: 22rem; }
.hm-stat-grid { display: grid; grid-template-columns: 1fr 1fr; gap: .75rem; margin: 1rem 0; }
.hm-stat { background: #f9fafb; border-radius: .75rem; padding: .75rem; text-align: center; }
.hm-stat strong { display: block; font-size: 1.5rem; }
.hm-history { font-family: 'Noto Serif SC', serif; letter-spacing: .2rem; }
.hm-writing-levels { display: flex; gap: .5rem; overflow-x: auto; padding-bottom: 1rem; margin-bottom: 1.5rem; }
.hm-writing-layout { display: grid; grid-template-columns: 1fr 2fr; gap: 2rem; }
.hm-char-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: .75rem; }
.hm-char-btn { cursor: pointer; aspect-ratio: 1; display: flex; flex-direction: column; align-items: center; justify-content: center; border: 2px solid transparent; background: #f9fafb; border-radius: .75rem; }
.hm-char-btn span { font-family: 'Noto Serif SC', serif; font-size: 1.5rem; font-weight: 700; }
.hm-char-btn small { font-size: .65rem; opacity: .7; }
.hm-selected { border-color: #6366f1; background: #eef2ff; color: #4338ca; }
.hm-writer-frame { position: relative; background: #fff; border: 4px solid #e0e7ff; border-radius: 1.5rem; padding: .5rem; margin: 0 auto 1rem; width: fit-content; }
.hm-writer-target { width: 300px; height: 300px; cursor: crosshair; }
.hm-loading { position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; background: rgba(255,255,255,.8); }
.hm-status { text-align: center; margin: 1rem 0; }
.hm-status span { background: #312e81; color: #fff; border-radius: 999px; padding: .5rem 1rem; font-size: .9rem; }
"#;

fn install_styles(doc: &Document) -> Result<(), JsValue> {
    let style = dom::create(doc, "style", Some("hm-styles"), "")?;
    style.set_text_content(Some(STYLES));
    let head = doc.head().ok_or_else(|| JsValue::from_str("no head"))?;
    head.append_child(&style)?;
    Ok(())
}
