// Level selector shown while no quiz level is running.
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use super::{AppMode, AppState, dom};
use crate::catalog::Level;
use crate::session::QuizEvent;

const ID: &str = "hm-levels";

// Progressive colour ramp, one per level.
const GRADIENTS: [&str; 10] = [
    "linear-gradient(135deg,#34d399,#059669)",
    "linear-gradient(135deg,#2dd4bf,#0d9488)",
    "linear-gradient(135deg,#06b6d4,#3b82f6)",
    "linear-gradient(135deg,#3b82f6,#6366f1)",
    "linear-gradient(135deg,#6366f1,#a855f7)",
    "linear-gradient(135deg,#a855f7,#c026d3)",
    "linear-gradient(135deg,#d946ef,#db2777)",
    "linear-gradient(135deg,#ec4899,#e11d48)",
    "linear-gradient(135deg,#f43f5e,#dc2626)",
    "linear-gradient(135deg,#dc2626,#ea580c)",
];

pub(super) fn build(doc: &Document) -> Result<Element, JsValue> {
    let section = dom::create(doc, "section", Some(ID), "hm-card")?;
    let heading = dom::create(doc, "h2", None, "hm-title")?;
    heading.set_text_content(Some("Selecciona tu Nivel"));
    section.append_child(&heading)?;
    let intro = dom::create(doc, "p", None, "")?;
    intro.set_text_content(Some(
        "Elige un nivel de dificultad para comenzar. Cada nivel desbloquea 10 nuevos caracteres de uso frecuente.",
    ));
    section.append_child(&intro)?;

    let grid = dom::create(doc, "div", None, "hm-level-grid")?;
    for (level, gradient) in Level::all().zip(GRADIENTS) {
        let b = dom::create(doc, "button", None, "hm-level-btn")?;
        b.set_attribute("type", "button")?;
        b.set_attribute("data-level", &level.get().to_string())?;
        b.set_attribute("style", &format!("background:{gradient}"))?;
        b.set_inner_html(&format!(
            "<strong>Nivel {}</strong><small>{} chars</small>",
            level.get(),
            level.char_count()
        ));
        grid.append_child(&b)?;
    }
    dom::on_click(&grid, |evt| {
        let Some(level) = dom::clicked_attr(&evt, "data-level")
            .and_then(|v| v.parse::<u32>().ok())
            .and_then(|n| Level::new(n).ok())
        else {
            return;
        };
        super::with_app(|app| {
            if super::dispatch_quiz(app, QuizEvent::StartLevel(level)) {
                super::begin_round(app)?;
            }
            Ok(())
        })
    })?;
    section.append_child(&grid)?;

    let info = dom::create(doc, "div", None, "hm-info")?;
    info.set_inner_html(
        "<strong>Cómo funcionan los niveles</strong><ul>\
         <li><strong>Nivel 1:</strong> Los 10 caracteres básicos esenciales.</li>\
         <li><strong>Nivel X:</strong> Incluye los caracteres de niveles anteriores + 10 nuevos.</li>\
         <li><strong>Nivel 10:</strong> Dominio de los 100 caracteres más frecuentes.</li></ul>",
    );
    section.append_child(&info)?;
    Ok(section)
}

pub(super) fn render(doc: &Document, app: &AppState) -> Result<(), JsValue> {
    dom::set_shown(doc, ID, app.mode == AppMode::Quiz && !app.session.is_playing())
}
