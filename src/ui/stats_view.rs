// Read-only stats modal.
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use super::{AppMode, AppState, dom};
use crate::session::{HistoryItem, Outcome};

const ID: &str = "hm-stats";
const ACCURACY_ID: &str = "hm-stat-accuracy";
const SCORE_ID: &str = "hm-stat-score";
const STREAK_ID: &str = "hm-stat-streak";
const MAX_STREAK_ID: &str = "hm-stat-max";
const HISTORY_ID: &str = "hm-stat-history";

const HISTORY_SHOWN: usize = 12;

pub(super) fn build(doc: &Document) -> Result<Element, JsValue> {
    let modal = dom::create(doc, "div", Some(ID), "hm-modal")?;
    let backdrop = dom::create(doc, "div", None, "hm-backdrop")?;
    dom::on_click(&backdrop, |_| super::with_app(close))?;
    modal.append_child(&backdrop)?;

    let card = dom::create(doc, "div", None, "hm-modal-card")?;
    let title = dom::create(doc, "h2", None, "hm-title")?;
    title.set_text_content(Some("Estadísticas"));
    card.append_child(&title)?;

    let grid = dom::create(doc, "div", None, "hm-stat-grid")?;
    for (id, label) in [
        (ACCURACY_ID, "Precisión"),
        (SCORE_ID, "Aciertos"),
        (STREAK_ID, "Racha actual"),
        (MAX_STREAK_ID, "Mejor racha"),
    ] {
        let cell = dom::create(doc, "div", None, "hm-stat")?;
        dom::append_new(doc, &cell, "strong", Some(id), "")?;
        let caption = dom::create(doc, "span", None, "")?;
        caption.set_text_content(Some(label));
        cell.append_child(&caption)?;
        grid.append_child(&cell)?;
    }
    card.append_child(&grid)?;
    dom::append_new(doc, &card, "p", Some(HISTORY_ID), "hm-history")?;

    let close_btn = dom::button(doc, None, "hm-btn", "Cerrar")?;
    dom::on_click(&close_btn, |_| super::with_app(close))?;
    card.append_child(&close_btn)?;
    modal.append_child(&card)?;
    Ok(modal)
}

fn close(app: &mut AppState) -> Result<(), JsValue> {
    app.stats_open = false;
    Ok(())
}

/// Latest answers first: ✓ correct, ✗ wrong, → skipped.
fn history_line(history: &[HistoryItem]) -> String {
    history
        .iter()
        .rev()
        .take(HISTORY_SHOWN)
        .map(|item| {
            let mark = match item.outcome {
                Outcome::Correct => "✓",
                Outcome::Incorrect => "✗",
                Outcome::Skipped => "→",
            };
            format!("{}{mark}", item.glyph)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub(super) fn render(doc: &Document, app: &AppState) -> Result<(), JsValue> {
    let shown = app.stats_open && app.mode == AppMode::Quiz && app.session.is_playing();
    dom::set_shown(doc, ID, shown)?;
    if !shown {
        return Ok(());
    }
    let stats = app.session.stats();
    dom::set_text(doc, ACCURACY_ID, &format!("{}%", stats.accuracy_percent))?;
    dom::set_text(doc, SCORE_ID, &format!("{}/{}", stats.correct, stats.total))?;
    dom::set_text(doc, STREAK_ID, &stats.streak.to_string())?;
    dom::set_text(doc, MAX_STREAK_ID, &stats.max_streak.to_string())?;
    dom::set_text(doc, HISTORY_ID, &history_line(app.session.history()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_line_is_newest_first() {
        let items = vec![
            HistoryItem { glyph: "人".into(), outcome: Outcome::Correct },
            HistoryItem { glyph: "我".into(), outcome: Outcome::Skipped },
            HistoryItem { glyph: "你".into(), outcome: Outcome::Incorrect },
        ];
        assert_eq!(history_line(&items), "你✗ 我→ 人✓");
        assert_eq!(history_line(&[]), "");
    }
}
