//! Answer grading. Pure functions only, no session state.

use icu_normalizer::DecomposingNormalizerBorrowed;
use serde::{Deserialize, Serialize};

use crate::catalog::CharacterRecord;

/// Raw text the user typed into the answer form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerInput {
    pub pinyin: String,
    pub meaning: String,
}

impl AnswerInput {
    pub fn new(pinyin: &str, meaning: &str) -> Self {
        Self {
            pinyin: pinyin.to_string(),
            meaning: meaning.to_string(),
        }
    }

    /// Both fields must hold something other than whitespace.
    pub fn is_complete(&self) -> bool {
        !self.pinyin.trim().is_empty() && !self.meaning.trim().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub is_correct: bool,
    pub meaning_correct: bool,
    pub pinyin_correct: bool,
}

/// Lowercase, trim, decompose and drop combining marks (U+0300..=U+036F),
/// so `"Nǐ "` and `"ni"` compare equal.
pub fn normalize(s: &str) -> String {
    let lowered = s.trim().to_lowercase();
    let nfd = DecomposingNormalizerBorrowed::new_nfd();
    nfd.normalize(&lowered)
        .chars()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .collect()
}

/// Accepts containment in either direction against any `/` alternative.
/// A blank alternative (`"uno/"`) is contained in every input.
pub fn meaning_matches(input: &str, target_meaning: &str) -> bool {
    let input = normalize(input);
    target_meaning
        .split('/')
        .map(|alt| normalize(alt.trim()))
        .any(|alt| input.contains(alt.as_str()) || alt.contains(input.as_str()))
}

/// Exact match (case-insensitive) or match with tone marks stripped.
pub fn pinyin_matches(input: &str, target_pinyin: &str) -> bool {
    input.trim().to_lowercase() == target_pinyin.to_lowercase()
        || normalize(input) == normalize(target_pinyin)
}

pub fn grade(input: &AnswerInput, target: &CharacterRecord) -> Feedback {
    let meaning_correct = meaning_matches(&input.meaning, &target.meaning);
    let pinyin_correct = pinyin_matches(&input.pinyin, &target.pinyin);
    Feedback {
        is_correct: meaning_correct && pinyin_correct,
        meaning_correct,
        pinyin_correct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn rec(pinyin: &str, meaning: &str) -> CharacterRecord {
        CharacterRecord::new("字", pinyin, meaning)
    }

    #[test]
    fn normalize_strips_tones_and_case() {
        assert_eq!(normalize("  Nǐ "), "ni");
        assert_eq!(normalize("lǜ"), "lu");
        assert_eq!(normalize("Él"), "el");
        assert_eq!(normalize("día"), "dia");
    }

    #[test]
    fn pinyin_is_tone_insensitive() {
        assert!(pinyin_matches("ni", "nǐ"));
        assert!(pinyin_matches("nǐ", "nǐ"));
        assert!(pinyin_matches(" NI ", "nǐ"));
        assert!(!pinyin_matches("na", "nǐ"));
    }

    #[test]
    fn pinyin_keeps_spaces_significant() {
        assert!(!pinyin_matches("nihao", "nǐ hǎo"));
        assert!(pinyin_matches("ni hao", "nǐ hǎo"));
    }

    #[test]
    fn meaning_accepts_containment_both_ways() {
        let target = "person/human";
        assert!(meaning_matches("person", target));
        assert!(meaning_matches("pers", target));
        assert!(meaning_matches("a human being", target));
        assert!(meaning_matches("HUMAN", target));
        assert!(!meaning_matches("xyz", target));
    }

    #[test]
    fn meaning_ignores_accents() {
        assert!(meaning_matches("el", "él"));
        assert!(meaning_matches("partícula", "de/partícula posesiva"));
        assert!(meaning_matches("particula posesiva", "de/partícula posesiva"));
    }

    #[test]
    fn blank_alternative_matches_any_input() {
        assert!(meaning_matches("dos", "uno/"));
        assert!(meaning_matches("uno", "uno/"));
        assert!(!meaning_matches("dos", "uno"));
    }

    #[test]
    fn json_row_with_trailing_slash_accepts_any_meaning() {
        let json = r#"[{"char":"一","pinyin":"yī","meaning":"uno/"}]"#;
        let catalog = Catalog::from_json(json).unwrap();
        let fb = grade(&AnswerInput::new("yi", "dos"), &catalog.records()[0]);
        assert!(fb.meaning_correct);
        assert!(fb.is_correct);
    }

    #[test]
    fn both_checks_must_pass() {
        let target = rec("wǒ", "I/me");
        let fb = grade(&AnswerInput::new("wo", "you"), &target);
        assert_eq!(
            fb,
            Feedback {
                is_correct: false,
                meaning_correct: false,
                pinyin_correct: true
            }
        );
        let fb = grade(&AnswerInput::new("wo", "me"), &target);
        assert!(fb.is_correct);
    }

    #[test]
    fn grading_is_deterministic() {
        let target = rec("rén", "persona/gente");
        let input = AnswerInput::new("ren", "gente");
        assert_eq!(grade(&input, &target), grade(&input, &target));
    }

    #[test]
    fn completeness_trims_whitespace() {
        assert!(AnswerInput::new("ni", "tú").is_complete());
        assert!(!AnswerInput::new("  ", "tú").is_complete());
        assert!(!AnswerInput::new("ni", "").is_complete());
    }
}
