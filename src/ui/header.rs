// Header: back button, title with level subtitle, mode switch and quiz controls.
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use super::{AppMode, AppState, dom};
use crate::session::QuizEvent;

const BACK_ID: &str = "hm-back";
const SUBTITLE_ID: &str = "hm-subtitle";
const MODE_QUIZ_ID: &str = "hm-mode-quiz";
const MODE_WRITING_ID: &str = "hm-mode-writing";
const QUIZ_CONTROLS_ID: &str = "hm-quiz-controls";

pub(super) fn build(doc: &Document) -> Result<Element, JsValue> {
    let header = dom::create(doc, "header", None, "hm-header")?;

    let brand = dom::create(doc, "div", None, "hm-brand")?;
    let back = dom::button(doc, Some(BACK_ID), "hm-btn", "←")?;
    back.set_attribute("aria-label", "Volver al menú")?;
    dom::on_click(&back, |_| {
        super::with_app(|app| {
            app.stats_open = false;
            super::dispatch_quiz(app, QuizEvent::ReturnToMenu);
            Ok(())
        })
    })?;
    brand.append_child(&back)?;
    let titles = dom::create(doc, "div", None, "")?;
    let title = dom::create(doc, "h1", None, "hm-title")?;
    title.set_text_content(Some("Hanzi Master"));
    titles.append_child(&title)?;
    dom::append_new(doc, &titles, "div", Some(SUBTITLE_ID), "hm-subtitle")?;
    brand.append_child(&titles)?;
    header.append_child(&brand)?;

    let modes = dom::create(doc, "nav", None, "hm-modes")?;
    for (id, label, mode) in [
        (MODE_QUIZ_ID, "Vocabulario", AppMode::Quiz),
        (MODE_WRITING_ID, "Escritura", AppMode::Writing),
    ] {
        let b = dom::button(doc, Some(id), "hm-btn", label)?;
        dom::on_click(&b, move |_| super::with_app(|app| super::set_mode(app, mode)))?;
        modes.append_child(&b)?;
    }
    header.append_child(&modes)?;

    let controls = dom::create(doc, "div", Some(QUIZ_CONTROLS_ID), "hm-row")?;
    let stats = dom::button(doc, None, "hm-btn", "Stats")?;
    dom::on_click(&stats, |_| {
        super::with_app(|app| {
            app.stats_open = true;
            Ok(())
        })
    })?;
    controls.append_child(&stats)?;
    let reset = dom::button(doc, None, "hm-btn", "↻")?;
    reset.set_attribute("title", "Reiniciar Sesión")?;
    dom::on_click(&reset, |_| {
        super::with_app(|app| {
            if super::dispatch_quiz(app, QuizEvent::Reset) {
                super::begin_round(app)?;
            }
            Ok(())
        })
    })?;
    controls.append_child(&reset)?;
    header.append_child(&controls)?;

    Ok(header)
}

pub(super) fn render(doc: &Document, app: &AppState) -> Result<(), JsValue> {
    let in_quiz = app.mode == AppMode::Quiz && app.session.is_playing();
    dom::set_shown(doc, BACK_ID, in_quiz)?;
    dom::set_shown(doc, SUBTITLE_ID, in_quiz)?;
    dom::set_shown(doc, QUIZ_CONTROLS_ID, in_quiz)?;
    if in_quiz {
        let level = app.session.level();
        dom::set_text(
            doc,
            SUBTITLE_ID,
            &format!("Nivel {} · {} Caracteres", level.get(), level.char_count()),
        )?;
    }
    dom::set_class_if(&dom::by_id(doc, MODE_QUIZ_ID)?, "hm-active", app.mode == AppMode::Quiz)?;
    dom::set_class_if(
        &dom::by_id(doc, MODE_WRITING_ID)?,
        "hm-active",
        app.mode == AppMode::Writing,
    )?;
    Ok(())
}
