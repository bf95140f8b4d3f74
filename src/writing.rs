//! Stroke-order writing practice.
//!
//! Independent of the quiz session: it keeps its own level and selected
//! character and owns one external stroke widget at a time. Every change of
//! character or level drops the old widget before acquiring a new one, and
//! bumps a generation counter so late callbacks from the old widget are
//! ignored.

use std::fmt;
use std::rc::Rc;

use crate::catalog::{Catalog, CharacterRecord, Level};
use crate::error::WidgetError;

pub const MSG_IDLE: &str = "Observa la animación o intenta escribir.";
pub const MSG_ANIMATING: &str = "Observando orden de trazos...";
pub const MSG_YOUR_TURN: &str = "¡Tu turno! Dibuja el carácter.";
pub const MSG_MISTAKE: &str = "¡Ups! Trazo incorrecto. Intenta de nuevo.";
pub const MSG_COMPLETE: &str = "¡Excelente! Has completado el carácter. 🎉";
pub const MSG_LOAD_ERROR: &str = "Error cargando el carácter. Verifica tu conexión.";
pub const MSG_UNAVAILABLE: &str = "La práctica de escritura no está disponible en este navegador.";

pub fn correct_stroke_message(stroke_index: usize) -> String {
    format!("¡Bien! Trazo {} correcto.", stroke_index + 1)
}

/// Callbacks the external widget reports back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetEvent {
    AnimationComplete,
    LoadFailed,
    StrokeMistake,
    /// Zero-based stroke index.
    CorrectStroke(usize),
    QuizComplete,
}

/// Handle a widget uses to report events, tagged with the generation of the
/// instance it was created for.
#[derive(Clone)]
pub struct WidgetEvents {
    generation: u64,
    sink: Rc<dyn Fn(u64, WidgetEvent)>,
}

impl WidgetEvents {
    pub fn new(generation: u64, sink: Rc<dyn Fn(u64, WidgetEvent)>) -> Self {
        Self { generation, sink }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn emit(&self, event: WidgetEvent) {
        (self.sink)(self.generation, event)
    }
}

impl fmt::Debug for WidgetEvents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetEvents").field("generation", &self.generation).finish()
    }
}

/// Capability surface of a stroke widget bound to one glyph. Dropping the
/// widget releases it.
pub trait StrokeWidget {
    /// Replays stroke order; completion arrives as `WidgetEvent::AnimationComplete`.
    fn animate(&mut self) -> Result<(), WidgetError>;
    /// Enters drawing mode; per-stroke results arrive as widget events.
    fn quiz(&mut self) -> Result<(), WidgetError>;
    fn show_outline(&mut self);
    fn hide_outline(&mut self);
}

pub trait WidgetFactory {
    type Widget: StrokeWidget;

    fn acquire(&mut self, glyph: &str, events: WidgetEvents) -> Result<Self::Widget, WidgetError>;
}

pub enum WidgetSlot<W> {
    Empty,
    Ready(W),
    Unavailable,
    Failed(WidgetError),
}

impl<W> WidgetSlot<W> {
    pub fn is_ready(&self) -> bool {
        matches!(self, WidgetSlot::Ready(_))
    }
}

pub struct WritingPractice<'c, F: WidgetFactory> {
    catalog: &'c Catalog,
    level: Level,
    selected: Option<&'c CharacterRecord>,
    factory: F,
    sink: Rc<dyn Fn(u64, WidgetEvent)>,
    slot: WidgetSlot<F::Widget>,
    generation: u64,
    status: String,
    loading: bool,
    initial_outline: bool,
    outline_visible: bool,
}

impl<'c, F: WidgetFactory> WritingPractice<'c, F> {
    /// Creates the module without touching the widget; call [`Self::mount`]
    /// once the host container exists.
    pub fn new(
        catalog: &'c Catalog,
        level: Level,
        factory: F,
        sink: Rc<dyn Fn(u64, WidgetEvent)>,
        initial_outline: bool,
    ) -> Self {
        let selected = catalog
            .level_window(level)
            .first()
            .or_else(|| catalog.records().first());
        Self {
            catalog,
            level,
            selected,
            factory,
            sink,
            slot: WidgetSlot::Empty,
            generation: 0,
            status: MSG_IDLE.to_string(),
            loading: false,
            initial_outline,
            outline_visible: initial_outline,
        }
    }

    pub fn mount(&mut self) {
        self.reload();
    }

    /// Releases the current widget (if any) so the container can go away.
    pub fn unmount(&mut self) {
        self.release();
        self.loading = false;
    }

    pub fn select_level(&mut self, level: Level) {
        self.level = level;
        let window = self.catalog.level_window(level);
        let still_listed = self
            .selected
            .is_some_and(|sel| window.iter().any(|r| r.glyph == sel.glyph));
        if !still_listed {
            if let Some(first) = window.first() {
                self.selected = Some(first);
            }
        }
        log::debug!("writing level {}", level.get());
        self.reload();
    }

    /// Selects a character by glyph. Reselecting the current glyph acquires a
    /// fresh widget, which is the only way to retry after a failure.
    pub fn select_character(&mut self, glyph: &str) -> bool {
        match self.catalog.find(glyph) {
            Some(rec) => {
                self.selected = Some(rec);
                self.reload();
                true
            }
            None => {
                log::warn!("writing: unknown character '{glyph}'");
                false
            }
        }
    }

    fn release(&mut self) {
        self.generation += 1;
        self.slot = WidgetSlot::Empty;
    }

    fn reload(&mut self) {
        self.release();
        self.outline_visible = self.initial_outline;
        let Some(rec) = self.selected else {
            return;
        };
        let events = WidgetEvents::new(self.generation, Rc::clone(&self.sink));
        self.loading = true;
        self.slot = match self.factory.acquire(&rec.glyph, events) {
            Ok(mut widget) => {
                self.status = MSG_IDLE.to_string();
                if let Err(err) = widget.animate() {
                    log::warn!("writing: initial animation failed: {err}");
                }
                // Loading ends once the first animation is issued.
                self.loading = false;
                WidgetSlot::Ready(widget)
            }
            Err(WidgetError::Unavailable) => {
                log::warn!("writing: stroke widget unavailable");
                self.loading = false;
                self.status = MSG_UNAVAILABLE.to_string();
                WidgetSlot::Unavailable
            }
            Err(err) => {
                log::error!("Error loading stroke widget for '{}': {err}", rec.glyph);
                self.loading = false;
                self.status = MSG_LOAD_ERROR.to_string();
                WidgetSlot::Failed(err)
            }
        };
    }

    pub fn animate(&mut self) {
        if let WidgetSlot::Ready(widget) = &mut self.slot {
            self.status = MSG_ANIMATING.to_string();
            if let Err(err) = widget.animate() {
                log::warn!("writing: animate failed: {err}");
                self.status = MSG_LOAD_ERROR.to_string();
            }
        }
    }

    pub fn start_quiz(&mut self) {
        if let WidgetSlot::Ready(widget) = &mut self.slot {
            self.status = MSG_YOUR_TURN.to_string();
            if let Err(err) = widget.quiz() {
                log::warn!("writing: quiz failed: {err}");
                self.status = MSG_LOAD_ERROR.to_string();
            }
        }
    }

    pub fn show_outline(&mut self) {
        if let WidgetSlot::Ready(widget) = &mut self.slot {
            widget.show_outline();
            self.outline_visible = true;
        }
    }

    pub fn hide_outline(&mut self) {
        if let WidgetSlot::Ready(widget) = &mut self.slot {
            widget.hide_outline();
            self.outline_visible = false;
        }
    }

    pub fn toggle_outline(&mut self) {
        if self.outline_visible {
            self.hide_outline();
        } else {
            self.show_outline();
        }
    }

    /// Applies a widget callback. Returns false when the event came from a
    /// released widget and was dropped.
    pub fn on_widget_event(&mut self, generation: u64, event: WidgetEvent) -> bool {
        if generation != self.generation || !self.slot.is_ready() {
            log::debug!("writing: stale widget event {event:?} (gen {generation})");
            return false;
        }
        match event {
            WidgetEvent::AnimationComplete => self.loading = false,
            WidgetEvent::LoadFailed => {
                self.loading = false;
                self.status = MSG_LOAD_ERROR.to_string();
            }
            WidgetEvent::StrokeMistake => self.status = MSG_MISTAKE.to_string(),
            WidgetEvent::CorrectStroke(i) => self.status = correct_stroke_message(i),
            WidgetEvent::QuizComplete => self.status = MSG_COMPLETE.to_string(),
        }
        true
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn level_characters(&self) -> &'c [CharacterRecord] {
        self.catalog.level_window(self.level)
    }

    pub fn selected(&self) -> Option<&'c CharacterRecord> {
        self.selected
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn outline_visible(&self) -> bool {
        self.outline_visible
    }

    pub fn slot(&self) -> &WidgetSlot<F::Widget> {
        &self.slot
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Log {
        calls: Vec<String>,
        fail_next: Option<WidgetError>,
    }

    struct FakeWidget {
        glyph: String,
        log: Rc<RefCell<Log>>,
    }

    impl StrokeWidget for FakeWidget {
        fn animate(&mut self) -> Result<(), WidgetError> {
            self.log.borrow_mut().calls.push(format!("animate {}", self.glyph));
            Ok(())
        }
        fn quiz(&mut self) -> Result<(), WidgetError> {
            self.log.borrow_mut().calls.push(format!("quiz {}", self.glyph));
            Ok(())
        }
        fn show_outline(&mut self) {
            self.log.borrow_mut().calls.push("show".into());
        }
        fn hide_outline(&mut self) {
            self.log.borrow_mut().calls.push("hide".into());
        }
    }

    impl Drop for FakeWidget {
        fn drop(&mut self) {
            self.log.borrow_mut().calls.push(format!("release {}", self.glyph));
        }
    }

    struct FakeFactory(Rc<RefCell<Log>>);

    impl WidgetFactory for FakeFactory {
        type Widget = FakeWidget;
        fn acquire(
            &mut self,
            glyph: &str,
            _events: WidgetEvents,
        ) -> Result<FakeWidget, WidgetError> {
            if let Some(err) = self.0.borrow_mut().fail_next.take() {
                return Err(err);
            }
            self.0.borrow_mut().calls.push(format!("acquire {glyph}"));
            Ok(FakeWidget { glyph: glyph.to_string(), log: Rc::clone(&self.0) })
        }
    }

    fn catalog() -> Catalog {
        let records = (0..20)
            .map(|i| CharacterRecord::new(&format!("g{i}"), "p", "m"))
            .collect();
        Catalog::new(records).unwrap()
    }

    fn module(cat: &Catalog) -> (WritingPractice<'_, FakeFactory>, Rc<RefCell<Log>>) {
        let log = Rc::new(RefCell::new(Log::default()));
        let sink: Rc<dyn Fn(u64, WidgetEvent)> = Rc::new(|_, _| {});
        let wp = WritingPractice::new(cat, Level::FIRST, FakeFactory(Rc::clone(&log)), sink, true);
        (wp, log)
    }

    #[test]
    fn select_character_releases_before_acquiring() {
        let cat = catalog();
        let (mut wp, log) = module(&cat);
        wp.mount();
        assert!(wp.select_character("g3"));
        assert_eq!(
            log.borrow().calls,
            vec!["acquire g0", "animate g0", "release g0", "acquire g3", "animate g3"]
        );
        assert!(!wp.select_character("nope"));
        assert_eq!(wp.selected().unwrap().glyph, "g3");
    }

    #[test]
    fn level_change_moves_selection_into_window() {
        let cat = catalog();
        let (mut wp, log) = module(&cat);
        wp.mount();
        wp.select_level(Level::new(2).unwrap());
        assert_eq!(wp.selected().unwrap().glyph, "g10");
        assert_eq!(wp.level_characters().len(), 10);
        assert!(log.borrow().calls.contains(&"release g0".to_string()));
        assert_eq!(log.borrow().calls.last().unwrap(), "animate g10");
    }

    #[test]
    fn empty_window_keeps_selection_but_reacquires() {
        let cat = catalog();
        let (mut wp, log) = module(&cat);
        wp.mount();
        wp.select_level(Level::new(5).unwrap());
        assert_eq!(wp.selected().unwrap().glyph, "g0");
        assert!(wp.level_characters().is_empty());
        let acquires = log.borrow().calls.iter().filter(|c| c.starts_with("acquire")).count();
        assert_eq!(acquires, 2);
    }

    #[test]
    fn loading_clears_once_initial_animation_starts() {
        let cat = catalog();
        let (mut wp, log) = module(&cat);
        wp.mount();
        assert_eq!(log.borrow().calls.last().unwrap(), "animate g0");
        assert!(!wp.is_loading());
        wp.select_character("g4");
        assert!(!wp.is_loading());
        assert_eq!(wp.status(), MSG_IDLE);
    }

    #[test]
    fn stale_events_are_ignored() {
        let cat = catalog();
        let (mut wp, _log) = module(&cat);
        wp.mount();
        let old = wp.generation();
        wp.select_character("g1");
        assert!(!wp.on_widget_event(old, WidgetEvent::QuizComplete));
        assert_eq!(wp.status(), MSG_IDLE);
        assert!(wp.on_widget_event(wp.generation(), WidgetEvent::CorrectStroke(0)));
        assert_eq!(wp.status(), "¡Bien! Trazo 1 correcto.");
    }

    #[test]
    fn quiz_callbacks_update_status() {
        let cat = catalog();
        let (mut wp, _log) = module(&cat);
        wp.mount();
        let g = wp.generation();
        wp.on_widget_event(g, WidgetEvent::AnimationComplete);
        assert!(!wp.is_loading());
        wp.start_quiz();
        assert_eq!(wp.status(), MSG_YOUR_TURN);
        wp.on_widget_event(g, WidgetEvent::StrokeMistake);
        assert_eq!(wp.status(), MSG_MISTAKE);
        wp.on_widget_event(g, WidgetEvent::QuizComplete);
        assert_eq!(wp.status(), MSG_COMPLETE);
        wp.animate();
        assert_eq!(wp.status(), MSG_ANIMATING);
    }

    #[test]
    fn failure_degrades_and_reselect_retries() {
        let cat = catalog();
        let (mut wp, log) = module(&cat);
        log.borrow_mut().fail_next = Some(WidgetError::Load("404".into()));
        wp.mount();
        assert!(matches!(wp.slot(), WidgetSlot::Failed(WidgetError::Load(_))));
        assert_eq!(wp.status(), MSG_LOAD_ERROR);
        assert!(!wp.is_loading());
        wp.start_quiz();
        wp.toggle_outline();
        assert!(log.borrow().calls.is_empty());

        wp.select_character("g0");
        assert!(wp.slot().is_ready());
        assert_eq!(wp.status(), MSG_IDLE);
    }

    #[test]
    fn unavailable_widget_is_reported() {
        let cat = catalog();
        let (mut wp, log) = module(&cat);
        log.borrow_mut().fail_next = Some(WidgetError::Unavailable);
        wp.mount();
        assert!(matches!(wp.slot(), WidgetSlot::Unavailable));
        assert_eq!(wp.status(), MSG_UNAVAILABLE);
    }

    #[test]
    fn outline_visibility_is_tracked_locally() {
        let cat = catalog();
        let (mut wp, log) = module(&cat);
        wp.mount();
        assert!(wp.outline_visible());
        wp.toggle_outline();
        assert!(!wp.outline_visible());
        wp.toggle_outline();
        assert!(wp.outline_visible());
        wp.hide_outline();
        wp.select_character("g2");
        assert!(wp.outline_visible());
        let calls = log.borrow().calls.clone();
        assert_eq!(calls.iter().filter(|c| *c == "hide").count(), 2);
        assert_eq!(calls.iter().filter(|c| *c == "show").count(), 1);
    }

    #[test]
    fn unmount_releases_widget() {
        let cat = catalog();
        let (mut wp, log) = module(&cat);
        wp.mount();
        wp.unmount();
        assert!(matches!(wp.slot(), WidgetSlot::Empty));
        assert_eq!(log.borrow().calls.last().unwrap(), "release g0");
    }
}
