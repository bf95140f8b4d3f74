// Integration tests (native) for the `hanzi-master` crate.
// These drive the quiz session end to end against the bundled catalog with a
// seeded RNG; nothing here touches wasm/browser APIs.

use hanzi_master::session::{Outcome, Phase, Score};
use hanzi_master::{AnswerInput, Catalog, Level, QuizEvent, RevealKind, Session};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn correct_input(session: &Session<'_>) -> AnswerInput {
    let rec = session.current_character().expect("a character is loaded");
    AnswerInput::new(&rec.pinyin, &rec.meaning)
}

fn level(n: u32) -> Level {
    Level::new(n).unwrap()
}

#[test]
fn three_correct_then_skip() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut s = Session::new(Catalog::builtin());
    s.dispatch(QuizEvent::StartLevel(level(1)), &mut rng).unwrap();
    assert_eq!(s.catalog().characters_for_level(s.level()).len(), 10);

    for i in 0..3 {
        let input = correct_input(&s);
        s.dispatch(QuizEvent::Submit(input), &mut rng).unwrap();
        assert!(s.feedback().unwrap().is_correct);
        if i < 2 {
            s.dispatch(QuizEvent::Next, &mut rng).unwrap();
        }
    }
    assert_eq!(s.streak(), 3);
    assert_eq!(s.max_streak(), 3);
    assert_eq!(s.score(), Score { correct: 3, total: 3 });

    s.dispatch(QuizEvent::Next, &mut rng).unwrap();
    s.dispatch(QuizEvent::Skip, &mut rng).unwrap();
    assert_eq!(s.streak(), 0);
    assert_eq!(s.max_streak(), 3);
    assert_eq!(s.score(), Score { correct: 3, total: 4 });
    assert_eq!(s.phase(), Phase::Active);
    assert_eq!(s.history().last().unwrap().outcome, Outcome::Skipped);
}

#[test]
fn tone_free_answers_count_as_correct() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut s = Session::new(Catalog::builtin());
    s.dispatch(QuizEvent::StartLevel(level(10)), &mut rng).unwrap();
    for _ in 0..20 {
        let rec = s.current_character().unwrap();
        let plain = hanzi_master::grader::normalize(&rec.pinyin);
        let first_meaning = rec.meaning.split('/').next().unwrap().to_string();
        s.dispatch(QuizEvent::Submit(AnswerInput::new(&plain, &first_meaning)), &mut rng).unwrap();
        assert!(s.feedback().unwrap().is_correct, "{} / {}", rec.glyph, plain);
        s.dispatch(QuizEvent::Next, &mut rng).unwrap();
    }
    assert_eq!(s.streak(), 20);
}

#[test]
fn skip_never_credits() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut s = Session::new(Catalog::builtin());
    s.dispatch(QuizEvent::StartLevel(level(2)), &mut rng).unwrap();
    for n in 1..=5 {
        s.dispatch(QuizEvent::Skip, &mut rng).unwrap();
        assert_eq!(s.score(), Score { correct: 0, total: n });
        assert_eq!(s.streak(), 0);
    }
}

#[test]
fn max_streak_never_decreases() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut s = Session::new(Catalog::builtin());
    s.dispatch(QuizEvent::StartLevel(level(3)), &mut rng).unwrap();
    let mut last_max = 0;
    for i in 0..30 {
        let input = if i % 4 == 3 {
            AnswerInput::new("zzz", "zzz")
        } else {
            correct_input(&s)
        };
        s.dispatch(QuizEvent::Submit(input), &mut rng).unwrap();
        assert!(s.max_streak() >= last_max);
        assert!(s.max_streak() >= s.streak());
        last_max = s.max_streak();
        s.dispatch(QuizEvent::Next, &mut rng).unwrap();
    }
    assert_eq!(last_max, 3);
}

#[test]
fn menu_round_trip_resets_score_and_streak() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut s = Session::new(Catalog::builtin());
    s.dispatch(QuizEvent::StartLevel(level(4)), &mut rng).unwrap();
    let input = correct_input(&s);
    s.dispatch(QuizEvent::Submit(input), &mut rng).unwrap();
    s.dispatch(QuizEvent::ToggleReveal(RevealKind::Pinyin), &mut rng).unwrap();
    s.dispatch(QuizEvent::ReturnToMenu, &mut rng).unwrap();
    assert!(!s.is_playing());

    for k in [1, 6, 10] {
        s.dispatch(QuizEvent::StartLevel(level(k)), &mut rng).unwrap();
        assert_eq!(s.score(), Score::default());
        assert_eq!(s.streak(), 0);
        assert_eq!(s.level(), level(k));
        s.dispatch(QuizEvent::Skip, &mut rng).unwrap();
        s.dispatch(QuizEvent::ReturnToMenu, &mut rng).unwrap();
    }
}

#[test]
fn picks_stay_within_level_slice() {
    let mut rng = StdRng::seed_from_u64(99);
    let catalog = Catalog::builtin();
    let mut s = Session::new(catalog);
    s.dispatch(QuizEvent::StartLevel(level(2)), &mut rng).unwrap();
    let allowed = catalog.characters_for_level(level(2));
    for _ in 0..200 {
        let glyph = &s.current_character().unwrap().glyph;
        assert!(allowed.iter().any(|r| &r.glyph == glyph));
        s.dispatch(QuizEvent::Skip, &mut rng).unwrap();
    }
}
