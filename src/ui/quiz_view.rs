// Quiz card: character, hints, answer form and feedback.
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use super::{AppMode, AppState, dom};
use crate::grader::AnswerInput;
use crate::session::{Phase, QuizEvent, RevealKind};

const ID: &str = "hm-quiz";
const STREAK_ID: &str = "hm-streak";
const CHAR_ID: &str = "hm-char";
const ANSWER_ID: &str = "hm-answer";
const ANSWER_PINYIN_ID: &str = "hm-answer-pinyin";
const ANSWER_MEANING_ID: &str = "hm-answer-meaning";
const EXAMPLE_ID: &str = "hm-example";
const EXAMPLE_ZH_ID: &str = "hm-example-zh";
const EXAMPLE_PY_ID: &str = "hm-example-py";
const EXAMPLE_ES_ID: &str = "hm-example-es";
const FORM_ID: &str = "hm-form";
pub(super) const MEANING_ID: &str = "hm-meaning";
const PINYIN_ID: &str = "hm-pinyin";
const REVEAL_PINYIN_ID: &str = "hm-reveal-pinyin";
const REVEAL_EXAMPLE_ID: &str = "hm-reveal-example";
const FEEDBACK_ID: &str = "hm-feedback";
const FEEDBACK_TITLE_ID: &str = "hm-feedback-title";
const FEEDBACK_DETAIL_ID: &str = "hm-feedback-detail";

pub(super) fn build(doc: &Document) -> Result<Element, JsValue> {
    let section = dom::create(doc, "section", Some(ID), "")?;

    let streak = dom::create(doc, "div", Some(STREAK_ID), "hm-streak")?;
    dom::append_new(doc, &streak, "span", None, "")?;
    section.append_child(&streak)?;

    let card = dom::create(doc, "div", None, "hm-char-card")?;
    dom::append_new(doc, &card, "div", Some(CHAR_ID), "hm-char")?;
    let answer = dom::create(doc, "div", Some(ANSWER_ID), "")?;
    dom::append_new(doc, &answer, "div", Some(ANSWER_PINYIN_ID), "hm-answer-pinyin")?;
    dom::append_new(doc, &answer, "div", Some(ANSWER_MEANING_ID), "hm-answer-meaning")?;
    card.append_child(&answer)?;
    section.append_child(&card)?;

    let example = dom::create(doc, "div", Some(EXAMPLE_ID), "hm-example")?;
    let label = dom::create(doc, "div", None, "hm-subtitle")?;
    label.set_text_content(Some("Ejemplo de uso"));
    example.append_child(&label)?;
    dom::append_new(doc, &example, "div", Some(EXAMPLE_ZH_ID), "hm-example-zh")?;
    dom::append_new(doc, &example, "div", Some(EXAMPLE_PY_ID), "")?;
    dom::append_new(doc, &example, "div", Some(EXAMPLE_ES_ID), "")?;
    section.append_child(&example)?;

    let form = build_form(doc)?;
    section.append_child(&form)?;
    let feedback = build_feedback(doc)?;
    section.append_child(&feedback)?;
    Ok(section)
}

fn build_form(doc: &Document) -> Result<Element, JsValue> {
    let form = dom::create(doc, "div", Some(FORM_ID), "hm-card hm-form")?;
    for (id, label, placeholder) in [
        (MEANING_ID, "Significado (Español)", "Ej. persona"),
        (PINYIN_ID, "Pinyin", "Ej. ren / rén"),
    ] {
        let field = dom::create(doc, "label", None, "")?;
        field.set_text_content(Some(label));
        let input = dom::create(doc, "input", Some(id), "")?;
        input.set_attribute("type", "text")?;
        input.set_attribute("placeholder", placeholder)?;
        input.set_attribute("autocomplete", "off")?;
        field.append_child(&input)?;
        form.append_child(&field)?;
    }

    let row = dom::create(doc, "div", None, "hm-row")?;
    let check = dom::button(doc, None, "hm-btn hm-btn-primary", "Comprobar")?;
    dom::on_click(&check, |_| super::with_app(submit_from_inputs))?;
    row.append_child(&check)?;

    let reveal = dom::button(doc, Some(REVEAL_PINYIN_ID), "hm-btn", "")?;
    dom::on_click(&reveal, |_| {
        super::with_app(|app| {
            super::dispatch_quiz(app, QuizEvent::ToggleReveal(RevealKind::Pinyin));
            Ok(())
        })
    })?;
    row.append_child(&reveal)?;

    let reveal_example = dom::button(doc, Some(REVEAL_EXAMPLE_ID), "hm-btn", "")?;
    dom::on_click(&reveal_example, |_| {
        super::with_app(|app| {
            super::dispatch_quiz(app, QuizEvent::ToggleReveal(RevealKind::Example));
            Ok(())
        })
    })?;
    row.append_child(&reveal_example)?;

    let skip = dom::button(doc, None, "hm-btn", "Saltar")?;
    dom::on_click(&skip, |_| {
        super::with_app(|app| {
            if super::dispatch_quiz(app, QuizEvent::Skip) {
                super::begin_round(app)?;
            }
            Ok(())
        })
    })?;
    row.append_child(&skip)?;
    form.append_child(&row)?;
    Ok(form)
}

fn build_feedback(doc: &Document) -> Result<Element, JsValue> {
    let panel = dom::create(doc, "div", Some(FEEDBACK_ID), "hm-card hm-feedback")?;
    dom::append_new(doc, &panel, "h3", Some(FEEDBACK_TITLE_ID), "")?;
    dom::append_new(doc, &panel, "p", Some(FEEDBACK_DETAIL_ID), "")?;
    let next = dom::button(doc, None, "hm-btn hm-btn-primary", "Siguiente")?;
    dom::on_click(&next, |_| super::with_app(next_round))?;
    panel.append_child(&next)?;
    Ok(panel)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EnterAction {
    Submit,
    Next,
    Ignore,
}

/// Enter submits an active round and advances an answered one, but only on
/// the quiz page with no modal on top.
fn enter_action(mode: AppMode, stats_open: bool, phase: Phase) -> EnterAction {
    if mode != AppMode::Quiz || stats_open {
        return EnterAction::Ignore;
    }
    match phase {
        Phase::Active => EnterAction::Submit,
        Phase::Answered => EnterAction::Next,
        Phase::Idle => EnterAction::Ignore,
    }
}

pub(super) fn wire_keyboard(doc: &Document) -> Result<(), JsValue> {
    dom::on_keydown(doc, |evt| {
        if evt.key() != "Enter" {
            return;
        }
        super::with_app(|app| {
            match enter_action(app.mode, app.stats_open, app.session.phase()) {
                EnterAction::Submit => submit_from_inputs(app),
                EnterAction::Next => next_round(app),
                EnterAction::Ignore => Ok(()),
            }
        })
    })
}

// Empty fields are ignored here rather than reported.
fn submit_from_inputs(app: &mut AppState) -> Result<(), JsValue> {
    let doc = dom::document()?;
    let input = AnswerInput::new(
        &dom::input_by_id(&doc, PINYIN_ID)?.value(),
        &dom::input_by_id(&doc, MEANING_ID)?.value(),
    );
    if input.is_complete() {
        super::dispatch_quiz(app, QuizEvent::Submit(input));
    }
    Ok(())
}

fn next_round(app: &mut AppState) -> Result<(), JsValue> {
    if super::dispatch_quiz(app, QuizEvent::Next) {
        super::begin_round(app)?;
    }
    Ok(())
}

pub(super) fn clear_inputs(doc: &Document) -> Result<(), JsValue> {
    dom::input_by_id(doc, MEANING_ID)?.set_value("");
    dom::input_by_id(doc, PINYIN_ID)?.set_value("");
    Ok(())
}

fn check_mark(ok: bool) -> &'static str {
    if ok { "✓" } else { "✗" }
}

pub(super) fn render(doc: &Document, app: &AppState) -> Result<(), JsValue> {
    let session = &app.session;
    let current = session.current_character();
    let shown = app.mode == AppMode::Quiz && current.is_some();
    dom::set_shown(doc, ID, shown)?;
    let Some(rec) = current else {
        return Ok(());
    };
    if !shown {
        return Ok(());
    }

    match session.streak_badge(app.config.streak_badge_threshold) {
        Some(n) => {
            dom::set_shown(doc, STREAK_ID, true)?;
            if let Some(span) = dom::by_id(doc, STREAK_ID)?.first_element_child() {
                span.set_text_content(Some(&format!("🔥 ¡Racha de {n}!")));
            }
        }
        None => dom::set_shown(doc, STREAK_ID, false)?,
    }

    dom::set_text(doc, CHAR_ID, &rec.glyph)?;
    dom::set_shown(doc, ANSWER_ID, session.answer_visible())?;
    dom::set_text(doc, ANSWER_PINYIN_ID, &rec.pinyin)?;
    dom::set_text(doc, ANSWER_MEANING_ID, &rec.meaning)?;

    dom::set_shown(doc, EXAMPLE_ID, session.example_visible())?;
    if let Some(ex) = &rec.example {
        dom::set_text(doc, EXAMPLE_ZH_ID, &ex.chinese)?;
        dom::set_text(doc, EXAMPLE_PY_ID, &ex.pinyin)?;
        dom::set_text(doc, EXAMPLE_ES_ID, &ex.meaning)?;
    }

    let answered = session.phase() == Phase::Answered;
    dom::set_shown(doc, FORM_ID, !answered)?;
    dom::set_shown(doc, FEEDBACK_ID, answered)?;
    let reveal = session.reveal();
    dom::set_text(
        doc,
        REVEAL_PINYIN_ID,
        if reveal.pinyin { "Ocultar pista" } else { "Ver pista" },
    )?;
    dom::set_shown(doc, REVEAL_EXAMPLE_ID, rec.example.is_some())?;
    dom::set_text(
        doc,
        REVEAL_EXAMPLE_ID,
        if reveal.example { "Ocultar ejemplo" } else { "Ver ejemplo" },
    )?;

    if let Some(fb) = session.feedback() {
        let title = dom::by_id(doc, FEEDBACK_TITLE_ID)?;
        title.set_text_content(Some(if fb.is_correct { "¡Correcto!" } else { "Incorrecto" }));
        dom::set_class_if(&title, "hm-ok", fb.is_correct)?;
        dom::set_class_if(&title, "hm-bad", !fb.is_correct)?;
        dom::set_text(
            doc,
            FEEDBACK_DETAIL_ID,
            &format!(
                "Significado {} · Pinyin {}",
                check_mark(fb.meaning_correct),
                check_mark(fb.pinyin_correct)
            ),
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_follows_round_phase() {
        assert_eq!(enter_action(AppMode::Quiz, false, Phase::Active), EnterAction::Submit);
        assert_eq!(enter_action(AppMode::Quiz, false, Phase::Answered), EnterAction::Next);
        assert_eq!(enter_action(AppMode::Quiz, false, Phase::Idle), EnterAction::Ignore);
    }

    #[test]
    fn enter_is_ignored_under_stats_modal_and_in_writing_mode() {
        for phase in [Phase::Active, Phase::Answered, Phase::Idle] {
            assert_eq!(enter_action(AppMode::Quiz, true, phase), EnterAction::Ignore);
            assert_eq!(enter_action(AppMode::Writing, false, phase), EnterAction::Ignore);
        }
    }
}
