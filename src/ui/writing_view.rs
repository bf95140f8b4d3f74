// Writing practice page: level bar, character grid, widget frame and controls.
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use super::{AppMode, AppState, dom};
use crate::catalog::{CharacterRecord, Level};

const ID: &str = "hm-writing";
const LEVEL_BAR_ID: &str = "hm-writing-levels";
const GRID_ID: &str = "hm-char-grid";
const HEAD_PINYIN_ID: &str = "hm-writing-pinyin";
const HEAD_MEANING_ID: &str = "hm-writing-meaning";
pub(super) const TARGET_ID: &str = "hm-writer-target";
const LOADING_ID: &str = "hm-writer-loading";
const STATUS_ID: &str = "hm-writer-status";
const OUTLINE_ID: &str = "hm-writer-outline";
const EXAMPLE_ID: &str = "hm-writing-example";

pub(super) fn build(doc: &Document) -> Result<Element, JsValue> {
    let section = dom::create(doc, "section", Some(ID), "")?;

    let bar = dom::create(doc, "div", Some(LEVEL_BAR_ID), "hm-writing-levels")?;
    for level in Level::all() {
        let b = dom::button(doc, None, "hm-btn", &format!("Nivel {}", level.get()))?;
        b.set_attribute("data-wlevel", &level.get().to_string())?;
        bar.append_child(&b)?;
    }
    dom::on_click(&bar, |evt| {
        let Some(level) = dom::clicked_attr(&evt, "data-wlevel")
            .and_then(|v| v.parse::<u32>().ok())
            .and_then(|n| Level::new(n).ok())
        else {
            return;
        };
        super::with_app(|app| {
            if let Some(practice) = app.writing.as_mut() {
                practice.select_level(level);
            }
            Ok(())
        })
    })?;
    section.append_child(&bar)?;

    let layout = dom::create(doc, "div", None, "hm-writing-layout")?;
    let sidebar = dom::create(doc, "div", None, "hm-card")?;
    let caption = dom::create(doc, "h3", None, "")?;
    caption.set_text_content(Some("Selecciona un carácter"));
    sidebar.append_child(&caption)?;
    let grid = dom::create(doc, "div", Some(GRID_ID), "hm-char-grid")?;
    dom::on_click(&grid, |evt| {
        let Some(glyph) = dom::clicked_attr(&evt, "data-char") else {
            return;
        };
        super::with_app(|app| {
            if let Some(practice) = app.writing.as_mut() {
                practice.select_character(&glyph);
            }
            Ok(())
        })
    })?;
    sidebar.append_child(&grid)?;
    layout.append_child(&sidebar)?;
    let stage = build_stage(doc)?;
    layout.append_child(&stage)?;
    section.append_child(&layout)?;
    Ok(section)
}

fn build_stage(doc: &Document) -> Result<Element, JsValue> {
    let stage = dom::create(doc, "div", None, "")?;
    let head = dom::create(doc, "div", None, "hm-status")?;
    dom::append_new(doc, &head, "h2", Some(HEAD_PINYIN_ID), "hm-title")?;
    dom::append_new(doc, &head, "p", Some(HEAD_MEANING_ID), "")?;
    stage.append_child(&head)?;

    let frame = dom::create(doc, "div", None, "hm-writer-frame")?;
    dom::append_new(doc, &frame, "div", Some(TARGET_ID), "hm-writer-target")?;
    let loading = dom::create(doc, "div", Some(LOADING_ID), "hm-loading")?;
    loading.set_text_content(Some("…"));
    frame.append_child(&loading)?;
    stage.append_child(&frame)?;

    let status = dom::create(doc, "div", None, "hm-status")?;
    dom::append_new(doc, &status, "span", Some(STATUS_ID), "")?;
    stage.append_child(&status)?;

    let row = dom::create(doc, "div", None, "hm-row")?;
    let animate = dom::button(doc, None, "hm-btn", "Ver Trazos")?;
    dom::on_click(&animate, |_| {
        super::with_app(|app| {
            if let Some(practice) = app.writing.as_mut() {
                practice.animate();
            }
            Ok(())
        })
    })?;
    row.append_child(&animate)?;
    let quiz = dom::button(doc, None, "hm-btn hm-btn-writing", "Practicar (Dibujar)")?;
    dom::on_click(&quiz, |_| {
        super::with_app(|app| {
            if let Some(practice) = app.writing.as_mut() {
                practice.start_quiz();
            }
            Ok(())
        })
    })?;
    row.append_child(&quiz)?;
    let outline = dom::button(doc, Some(OUTLINE_ID), "hm-btn", "")?;
    dom::on_click(&outline, |_| {
        super::with_app(|app| {
            if let Some(practice) = app.writing.as_mut() {
                practice.toggle_outline();
            }
            Ok(())
        })
    })?;
    row.append_child(&outline)?;
    stage.append_child(&row)?;

    dom::append_new(doc, &stage, "div", Some(EXAMPLE_ID), "hm-example")?;
    Ok(stage)
}

fn grid_html(chars: &[CharacterRecord], selected: Option<&str>) -> String {
    chars
        .iter()
        .map(|rec| {
            let class = if selected == Some(rec.glyph.as_str()) {
                "hm-char-btn hm-selected"
            } else {
                "hm-char-btn"
            };
            let glyph = dom::escape_html(&rec.glyph);
            format!(
                "<button type=\"button\" class=\"{class}\" data-char=\"{glyph}\"><span>{glyph}</span><small>{}</small></button>",
                dom::escape_html(&rec.pinyin)
            )
        })
        .collect()
}

pub(super) fn render(doc: &Document, app: &AppState) -> Result<(), JsValue> {
    let practice = match (&app.writing, app.mode) {
        (Some(practice), AppMode::Writing) => practice,
        _ => return dom::set_shown(doc, ID, false),
    };
    dom::set_shown(doc, ID, true)?;

    let current_level = practice.level().get().to_string();
    let buttons = dom::by_id(doc, LEVEL_BAR_ID)?.children();
    for i in 0..buttons.length() {
        if let Some(b) = buttons.item(i) {
            let active = b.get_attribute("data-wlevel").as_deref() == Some(current_level.as_str());
            dom::set_class_if(&b, "hm-btn-writing", active)?;
        }
    }

    let selected = practice.selected();
    dom::by_id(doc, GRID_ID)?.set_inner_html(&grid_html(
        practice.level_characters(),
        selected.map(|r| r.glyph.as_str()),
    ));

    dom::set_text(doc, HEAD_PINYIN_ID, selected.map_or("", |r| r.pinyin.as_str()))?;
    dom::set_text(doc, HEAD_MEANING_ID, selected.map_or("", |r| r.meaning.as_str()))?;
    dom::set_shown(doc, LOADING_ID, practice.is_loading())?;
    dom::set_text(doc, STATUS_ID, practice.status())?;
    dom::set_text(
        doc,
        OUTLINE_ID,
        if practice.outline_visible() { "Ocultar guías" } else { "Mostrar guías" },
    )?;

    let example = dom::by_id(doc, EXAMPLE_ID)?;
    match selected.and_then(|r| r.example.as_ref()) {
        Some(ex) => {
            example.set_inner_html(&format!(
                "<div class=\"hm-subtitle\">Ejemplo</div><div class=\"hm-example-zh\">{}</div><div>{}</div><div><em>\"{}\"</em></div>",
                dom::escape_html(&ex.chinese),
                dom::escape_html(&ex.pinyin),
                dom::escape_html(&ex.meaning)
            ));
            example.remove_attribute("hidden")?;
        }
        None => example.set_attribute("hidden", "")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_marks_selection_and_escapes() {
        let chars = vec![
            CharacterRecord::new("人", "rén", "persona"),
            CharacterRecord::new("<", "x", "y"),
        ];
        let html = grid_html(&chars, Some("人"));
        assert!(html.contains("class=\"hm-char-btn hm-selected\" data-char=\"人\""));
        assert!(html.contains("data-char=\"&lt;\""));
        assert_eq!(html.matches("hm-selected").count(), 1);
    }
}
