//! Quiz session state machine.
//!
//! `Session` is a plain value; every user action is a [`QuizEvent`] fed to
//! [`Session::dispatch`]. Phases run `Idle -> Active -> Answered -> Active`,
//! with `ReturnToMenu` going back to `Idle` from anywhere. Randomness is
//! injected so the machine stays deterministic under a seeded RNG.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, CharacterRecord, Level};
use crate::error::SessionError;
use crate::grader::{self, AnswerInput, Feedback};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Idle,
    Active,
    Answered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealKind {
    Pinyin,
    Example,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealFlags {
    pub pinyin: bool,
    pub example: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub correct: u32,
    pub total: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Correct,
    Incorrect,
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub glyph: String,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizEvent {
    StartLevel(Level),
    Submit(AnswerInput),
    Next,
    Skip,
    ToggleReveal(RevealKind),
    ReturnToMenu,
    /// Restart the running level: zero score and streak, draw a new character.
    Reset,
}

/// Payload-free tag of a [`QuizEvent`], used in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizEventKind {
    StartLevel,
    Submit,
    Next,
    Skip,
    ToggleReveal,
    ReturnToMenu,
    Reset,
}

impl QuizEvent {
    pub fn kind(&self) -> QuizEventKind {
        match self {
            QuizEvent::StartLevel(_) => QuizEventKind::StartLevel,
            QuizEvent::Submit(_) => QuizEventKind::Submit,
            QuizEvent::Next => QuizEventKind::Next,
            QuizEvent::Skip => QuizEventKind::Skip,
            QuizEvent::ToggleReveal(_) => QuizEventKind::ToggleReveal,
            QuizEvent::ReturnToMenu => QuizEventKind::ReturnToMenu,
            QuizEvent::Reset => QuizEventKind::Reset,
        }
    }
}

/// Read-only counters for the stats view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStats {
    pub correct: u32,
    pub total: u32,
    pub accuracy_percent: u32,
    pub streak: u32,
    pub max_streak: u32,
}

pub struct Session<'c> {
    catalog: &'c Catalog,
    level: Level,
    phase: Phase,
    current: Option<usize>, // index into the catalog
    score: Score,
    streak: u32,
    max_streak: u32,
    reveal: RevealFlags,
    feedback: Option<Feedback>,
    history: Vec<HistoryItem>,
}

impl<'c> Session<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            level: Level::FIRST,
            phase: Phase::Idle,
            current: None,
            score: Score::default(),
            streak: 0,
            max_streak: 0,
            reveal: RevealFlags::default(),
            feedback: None,
            history: Vec::new(),
        }
    }

    /// Preselects the level reported while idle (the writing mode seeds from it).
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn dispatch<R: Rng + ?Sized>(
        &mut self,
        event: QuizEvent,
        rng: &mut R,
    ) -> Result<(), SessionError> {
        let kind = event.kind();
        let result = match (self.phase, event) {
            (Phase::Idle, QuizEvent::StartLevel(level)) => self.start_level(level, rng),
            (Phase::Active, QuizEvent::Submit(input)) => self.submit(&input),
            (Phase::Answered, QuizEvent::Next) => self.load_character(rng),
            (Phase::Active, QuizEvent::Skip) => self.skip(rng),
            (Phase::Active | Phase::Answered, QuizEvent::ToggleReveal(which)) => {
                match which {
                    RevealKind::Pinyin => self.reveal.pinyin = !self.reveal.pinyin,
                    RevealKind::Example => self.reveal.example = !self.reveal.example,
                }
                Ok(())
            }
            (_, QuizEvent::ReturnToMenu) => {
                self.phase = Phase::Idle;
                self.current = None;
                self.reveal = RevealFlags::default();
                self.feedback = None;
                Ok(())
            }
            (Phase::Active | Phase::Answered, QuizEvent::Reset) => {
                self.score = Score::default();
                self.streak = 0;
                self.history.clear();
                self.load_character(rng)
            }
            (phase, _) => Err(SessionError::InvalidTransition { event: kind, phase }),
        };
        match &result {
            Ok(()) => log::debug!("quiz {:?} -> {:?}", kind, self.phase),
            Err(err) => log::warn!("quiz event rejected: {err}"),
        }
        result
    }

    fn start_level<R: Rng + ?Sized>(
        &mut self,
        level: Level,
        rng: &mut R,
    ) -> Result<(), SessionError> {
        if self.catalog.characters_for_level(level).is_empty() {
            return Err(SessionError::EmptyLevel(level.get()));
        }
        log::info!("starting level {}", level.get());
        self.level = level;
        self.score = Score::default();
        self.streak = 0;
        self.history.clear();
        self.load_character(rng)
    }

    fn submit(&mut self, input: &AnswerInput) -> Result<(), SessionError> {
        if !input.is_complete() {
            return Err(SessionError::EmptyAnswer);
        }
        let Some(target) = self.current_character() else {
            return Err(SessionError::InvalidTransition {
                event: QuizEventKind::Submit,
                phase: self.phase,
            });
        };
        let feedback = grader::grade(input, target);
        let glyph = target.glyph.clone();

        self.score.total += 1;
        if feedback.is_correct {
            self.score.correct += 1;
            self.streak += 1;
            self.max_streak = self.max_streak.max(self.streak);
        } else {
            self.streak = 0;
        }
        self.history.push(HistoryItem {
            glyph,
            outcome: if feedback.is_correct { Outcome::Correct } else { Outcome::Incorrect },
        });
        self.feedback = Some(feedback);
        self.phase = Phase::Answered;
        Ok(())
    }

    fn skip<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), SessionError> {
        self.score.total += 1;
        self.streak = 0;
        if let Some(rec) = self.current_character() {
            let glyph = rec.glyph.clone();
            self.history.push(HistoryItem { glyph, outcome: Outcome::Skipped });
        }
        self.load_character(rng)
    }

    /// Uniform pick with replacement; the same character may come up twice in a row.
    fn load_character<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), SessionError> {
        let len = self.catalog.characters_for_level(self.level).len();
        if len == 0 {
            return Err(SessionError::EmptyLevel(self.level.get()));
        }
        self.current = Some(rng.gen_range(0..len));
        self.feedback = None;
        self.reveal = RevealFlags::default();
        self.phase = Phase::Active;
        Ok(())
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase != Phase::Idle
    }

    pub fn current_character(&self) -> Option<&'c CharacterRecord> {
        let catalog: &'c Catalog = self.catalog;
        self.current.map(|i| &catalog.records()[i])
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn max_streak(&self) -> u32 {
        self.max_streak
    }

    pub fn reveal(&self) -> RevealFlags {
        self.reveal
    }

    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    pub fn history(&self) -> &[HistoryItem] {
        &self.history
    }

    /// Pinyin and meaning show once revealed or once the round is answered.
    pub fn answer_visible(&self) -> bool {
        self.current.is_some() && (self.reveal.pinyin || self.phase == Phase::Answered)
    }

    pub fn example_visible(&self) -> bool {
        let has_example = self
            .current_character()
            .is_some_and(|rec| rec.example.is_some());
        has_example && (self.reveal.example || self.phase == Phase::Answered)
    }

    pub fn streak_badge(&self, threshold: u32) -> Option<u32> {
        (self.is_playing() && self.streak >= threshold).then_some(self.streak)
    }

    pub fn stats(&self) -> SessionStats {
        let accuracy_percent = if self.score.total > 0 {
            (f64::from(self.score.correct) / f64::from(self.score.total) * 100.0).round() as u32
        } else {
            0
        };
        SessionStats {
            correct: self.score.correct,
            total: self.score.total,
            accuracy_percent,
            streak: self.streak,
            max_streak: self.max_streak,
        }
    }
}
