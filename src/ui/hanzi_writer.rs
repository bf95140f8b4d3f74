// Binding to the global `HanziWriter` stroke widget loaded by the host page.
use js_sys::{Object, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::config::WriterConfig;
use crate::error::WidgetError;
use crate::writing::{StrokeWidget, WidgetEvent, WidgetEvents, WidgetFactory};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = HanziWriter)]
    type JsHanziWriter;

    #[wasm_bindgen(
        static_method_of = JsHanziWriter,
        js_class = "HanziWriter",
        js_name = create,
        catch
    )]
    fn create(
        target: &Element,
        character: &str,
        options: &JsValue,
    ) -> Result<JsHanziWriter, JsValue>;

    #[wasm_bindgen(method, js_name = animateCharacter, catch)]
    fn animate_character(this: &JsHanziWriter, options: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn quiz(this: &JsHanziWriter, options: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(method, js_name = showOutline)]
    fn show_outline(this: &JsHanziWriter);

    #[wasm_bindgen(method, js_name = hideOutline)]
    fn hide_outline(this: &JsHanziWriter);
}

type Callback = Closure<dyn FnMut(JsValue)>;

fn widget_available() -> bool {
    Reflect::has(&js_sys::global(), &JsValue::from_str("HanziWriter")).unwrap_or(false)
}

fn js_error_text(err: &JsValue) -> String {
    err.as_string()
        .or_else(|| err.dyn_ref::<js_sys::Error>().map(|e| String::from(e.message())))
        .unwrap_or_else(|| format!("{err:?}"))
}

fn set_callback(options: &JsValue, key: &str, cb: &JsValue) -> Result<(), WidgetError> {
    Reflect::set(options, &JsValue::from_str(key), cb)
        .map(|_| ())
        .map_err(|e| WidgetError::Call(js_error_text(&e)))
}

fn event_callback(events: &WidgetEvents, map: fn(&JsValue) -> WidgetEvent) -> Callback {
    let events = events.clone();
    Closure::wrap(Box::new(move |data: JsValue| events.emit(map(&data))) as Box<dyn FnMut(JsValue)>)
}

fn stroke_index(data: &JsValue) -> usize {
    Reflect::get(data, &JsValue::from_str("strokeNum"))
        .ok()
        .and_then(|v| v.as_f64())
        .map(|n| n.max(0.0) as usize)
        .unwrap_or(0)
}

/// Creates one `HanziWriter` per selected character inside a fixed container.
pub(crate) struct HanziWriterFactory {
    target: Element,
    options: WriterConfig,
}

impl HanziWriterFactory {
    pub(crate) fn new(target: Element, options: WriterConfig) -> Self {
        Self { target, options }
    }
}

impl WidgetFactory for HanziWriterFactory {
    type Widget = HanziWriterWidget;

    fn acquire(
        &mut self,
        glyph: &str,
        events: WidgetEvents,
    ) -> Result<HanziWriterWidget, WidgetError> {
        self.target.set_inner_html("");
        if !widget_available() {
            return Err(WidgetError::Unavailable);
        }
        let options = serde_wasm_bindgen::to_value(&self.options)
            .map_err(|e| WidgetError::Call(e.to_string()))?;
        // May fire after release; it then reports a stale generation.
        let load_events = events.clone();
        let on_load_error =
            Closure::once_into_js(move || load_events.emit(WidgetEvent::LoadFailed));
        set_callback(&options, "onLoadCharDataError", &on_load_error)?;

        let writer = JsHanziWriter::create(&self.target, glyph, &options)
            .map_err(|e| WidgetError::Load(js_error_text(&e)))?;
        log::debug!("HanziWriter created for '{glyph}' (gen {})", events.generation());
        Ok(HanziWriterWidget {
            writer,
            target: self.target.clone(),
            events,
            quiz_callbacks: Vec::new(),
        })
    }
}

pub(crate) struct HanziWriterWidget {
    writer: JsHanziWriter,
    target: Element,
    events: WidgetEvents,
    quiz_callbacks: Vec<Callback>,
}

impl StrokeWidget for HanziWriterWidget {
    fn animate(&mut self) -> Result<(), WidgetError> {
        let events = self.events.clone();
        let on_complete =
            Closure::once_into_js(move || events.emit(WidgetEvent::AnimationComplete));
        let options: JsValue = Object::new().into();
        set_callback(&options, "onComplete", &on_complete)?;
        self.writer
            .animate_character(&options)
            .map(|_| ())
            .map_err(|e| WidgetError::Call(js_error_text(&e)))
    }

    fn quiz(&mut self) -> Result<(), WidgetError> {
        let on_mistake = event_callback(&self.events, |_| WidgetEvent::StrokeMistake);
        let on_correct = event_callback(&self.events, |data| {
            WidgetEvent::CorrectStroke(stroke_index(data))
        });
        let on_complete = event_callback(&self.events, |_| WidgetEvent::QuizComplete);

        let options: JsValue = Object::new().into();
        set_callback(&options, "onMistake", on_mistake.as_ref())?;
        set_callback(&options, "onCorrectStroke", on_correct.as_ref())?;
        set_callback(&options, "onComplete", on_complete.as_ref())?;
        self.writer
            .quiz(&options)
            .map_err(|e| WidgetError::Call(js_error_text(&e)))?;
        // A new quiz replaces the previous one's handlers.
        self.quiz_callbacks = vec![on_mistake, on_correct, on_complete];
        Ok(())
    }

    fn show_outline(&mut self) {
        self.writer.show_outline();
    }

    fn hide_outline(&mut self) {
        self.writer.hide_outline();
    }
}

impl Drop for HanziWriterWidget {
    fn drop(&mut self) {
        self.target.set_inner_html("");
        // The JS writer may still hold these; late calls land as stale events.
        for cb in self.quiz_callbacks.drain(..) {
            cb.forget();
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    // Minimal stand-in that keeps the options it was given.
    const STUB_WRITER: &str = r#"
        globalThis.HanziWriter = {
            create(target, ch, options) {
                globalThis.hmCreateOptions = options;
                return {
                    animateCharacter() {},
                    quiz(o) { globalThis.hmQuizOptions = o; },
                    showOutline() {},
                    hideOutline() {},
                };
            },
        };
    "#;

    fn recorder(generation: u64) -> (WidgetEvents, Rc<RefCell<Vec<(u64, WidgetEvent)>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink_seen = Rc::clone(&seen);
        let sink: Rc<dyn Fn(u64, WidgetEvent)> =
            Rc::new(move |g, e| sink_seen.borrow_mut().push((g, e)));
        (WidgetEvents::new(generation, sink), seen)
    }

    fn factory() -> HanziWriterFactory {
        let doc = web_sys::window().unwrap().document().unwrap();
        let target = doc.create_element("div").unwrap();
        HanziWriterFactory::new(target, WriterConfig::default())
    }

    #[wasm_bindgen_test]
    fn load_error_after_release_reports_old_generation() {
        js_sys::eval(STUB_WRITER).unwrap();
        let (events, seen) = recorder(7);
        let widget = factory().acquire("人", events).unwrap();
        drop(widget);
        js_sys::eval("globalThis.hmCreateOptions.onLoadCharDataError({})").unwrap();
        assert_eq!(*seen.borrow(), vec![(7, WidgetEvent::LoadFailed)]);
    }

    #[wasm_bindgen_test]
    fn quiz_callbacks_survive_release() {
        js_sys::eval(STUB_WRITER).unwrap();
        let (events, seen) = recorder(3);
        let mut widget = factory().acquire("人", events).unwrap();
        widget.quiz().unwrap();
        drop(widget);
        js_sys::eval("globalThis.hmQuizOptions.onCorrectStroke({ strokeNum: 1 })").unwrap();
        js_sys::eval("globalThis.hmQuizOptions.onMistake({})").unwrap();
        assert_eq!(
            *seen.borrow(),
            vec![(3, WidgetEvent::CorrectStroke(1)), (3, WidgetEvent::StrokeMistake)]
        );
    }
}
