// Small DOM helpers shared by the views.
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlInputElement, KeyboardEvent, MouseEvent, window};

pub(crate) fn document() -> Result<Document, JsValue> {
    window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))
}

pub(crate) fn create(
    doc: &Document,
    tag: &str,
    id: Option<&str>,
    class: &str,
) -> Result<Element, JsValue> {
    let el = doc.create_element(tag)?;
    if let Some(id) = id {
        el.set_id(id);
    }
    if !class.is_empty() {
        el.set_class_name(class);
    }
    Ok(el)
}

/// Creates an element and appends it to `parent`.
pub(crate) fn append_new(
    doc: &Document,
    parent: &Element,
    tag: &str,
    id: Option<&str>,
    class: &str,
) -> Result<Element, JsValue> {
    let el = create(doc, tag, id, class)?;
    parent.append_child(&el)?;
    Ok(el)
}

pub(crate) fn button(
    doc: &Document,
    id: Option<&str>,
    class: &str,
    label: &str,
) -> Result<Element, JsValue> {
    let b = create(doc, "button", id, class)?;
    b.set_attribute("type", "button")?;
    b.set_text_content(Some(label));
    Ok(b)
}

pub(crate) fn by_id(doc: &Document, id: &str) -> Result<Element, JsValue> {
    doc.get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))
}

pub(crate) fn input_by_id(doc: &Document, id: &str) -> Result<HtmlInputElement, JsValue> {
    by_id(doc, id)?.dyn_into::<HtmlInputElement>().map_err(JsValue::from)
}

pub(crate) fn set_text(doc: &Document, id: &str, text: &str) -> Result<(), JsValue> {
    by_id(doc, id)?.set_text_content(Some(text));
    Ok(())
}

/// Shows or hides via the `hidden` attribute (the app stylesheet makes it win
/// over class display rules).
pub(crate) fn set_shown(doc: &Document, id: &str, shown: bool) -> Result<(), JsValue> {
    let el = by_id(doc, id)?;
    if shown {
        el.remove_attribute("hidden")?;
    } else {
        el.set_attribute("hidden", "")?;
    }
    Ok(())
}

pub(crate) fn set_class_if(el: &Element, class: &str, on: bool) -> Result<(), JsValue> {
    if on {
        el.class_list().add_1(class)
    } else {
        el.class_list().remove_1(class)
    }
}

pub(crate) fn on_click(
    el: &Element,
    handler: impl FnMut(MouseEvent) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub(crate) fn on_keydown(
    doc: &Document,
    handler: impl FnMut(KeyboardEvent) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(KeyboardEvent)>);
    doc.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Reads `attr` from the clicked element or its nearest ancestor carrying it.
/// Used for delegated clicks on button grids.
pub(crate) fn clicked_attr(evt: &MouseEvent, attr: &str) -> Option<String> {
    let target = evt.target()?.dyn_into::<Element>().ok()?;
    let holder = target.closest(&format!("[{attr}]")).ok()??;
    holder.get_attribute(attr)
}

pub(crate) fn focus_later(id: &'static str, delay_ms: i32) {
    let Some(win) = window() else { return };
    let cb = Closure::once_into_js(move || {
        if let Ok(doc) = document() {
            if let Ok(input) = input_by_id(&doc, id) {
                let _ = input.focus();
            }
        }
    });
    if let Err(err) =
        win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms)
    {
        log::warn!("focus timer failed: {err:?}");
    }
}

pub(crate) fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html("<b>\"人\"</b> & 'x'"),
            "&lt;b&gt;&quot;人&quot;&lt;/b&gt; &amp; &#39;x&#39;"
        );
        assert_eq!(escape_html("你好"), "你好");
    }
}
