// Browser smoke test: mount the app and play one round through the DOM.
// Run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn doc() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn click(selector: &str) {
    doc()
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element for {selector}"))
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
}

fn hidden(id: &str) -> bool {
    doc().get_element_by_id(id).unwrap().has_attribute("hidden")
}

#[wasm_bindgen_test]
fn mounts_and_plays_a_round() {
    hanzi_master::start_app().unwrap();
    // second mount is a no-op
    hanzi_master::start_app().unwrap();
    assert_eq!(doc().query_selector_all("#hm-app").unwrap().length(), 1);
    assert_eq!(doc().query_selector_all("[data-level]").unwrap().length(), 10);

    assert!(!hidden("hm-levels"));
    assert!(hidden("hm-quiz"));

    click("[data-level=\"1\"]");
    assert!(hidden("hm-levels"));
    assert!(!hidden("hm-quiz"));
    assert!(!hidden("hm-form"));
    let glyph = doc().get_element_by_id("hm-char").unwrap().text_content().unwrap();
    assert_eq!(glyph.chars().count(), 1);

    // skip leaves the form up with a fresh character
    click("#hm-quiz .hm-row button:last-child");
    assert!(!hidden("hm-form"));

    click("#hm-back");
    assert!(!hidden("hm-levels"));
    assert!(hidden("hm-quiz"));
}
