//! Answer normalization and checking

use crate::models::pitch::enharmonic_spelling;
use crate::quiz::question::QuizQuestion;
use crate::quiz::settings::QuizSettings;

/// Normalize typed input into the canonical note-name shape
///
/// Drops all whitespace, maps `♯`/`♭` to `#`/`b`, and case-folds to a
/// capital letter followed by lower-case accidentals: " c#" and "C #" both
/// become "C#", "DB" becomes "Db".
pub fn normalize_answer(input: &str) -> String {
    let folded: String = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '♯' => '#',
            '♭' => 'b',
            other => other,
        })
        .flat_map(char::to_lowercase)
        .collect();

    let mut chars = folded.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Names accepted for a question under the current settings
///
/// With both flats and sharps enabled the enharmonic spelling of each
/// accepted name is also accepted (F for E#, Db for C#).
pub fn accepted_answers(question: &QuizQuestion, settings: &QuizSettings) -> Vec<String> {
    let mut accepted: Vec<String> = question.accepted.iter().map(|name| normalize_answer(name)).collect();

    if settings.use_flats && settings.use_sharps {
        let extra: Vec<String> = accepted
            .iter()
            .filter_map(|name| enharmonic_spelling(name))
            .map(str::to_string)
            .collect();
        for name in extra {
            if !accepted.contains(&name) {
                accepted.push(name);
            }
        }
    }

    accepted
}

pub fn is_correct(answer: &str, question: &QuizQuestion, settings: &QuizSettings) -> bool {
    let answer = normalize_answer(answer);
    !answer.is_empty() && accepted_answers(question, settings).contains(&answer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::guitar::{FretPosition, GuitarString};

    fn question_at(string: i32, fret: i32, settings: &QuizSettings) -> QuizQuestion {
        let position = FretPosition::new(GuitarString::new(string).unwrap(), fret).unwrap();
        QuizQuestion::new(position, settings)
    }

    #[test]
    fn test_normalize_answer() {
        assert_eq!(normalize_answer(" c#"), "C#");
        assert_eq!(normalize_answer("C #"), "C#");
        assert_eq!(normalize_answer("DB"), "Db");
        assert_eq!(normalize_answer("e ♭"), "Eb");
        assert_eq!(normalize_answer("   "), "");
    }

    #[test]
    fn test_sharp_only_answers() {
        let settings = QuizSettings::default();
        // B string, fret 2 is C#
        let question = question_at(2, 2, &settings);
        assert!(is_correct(" c#", &question, &settings));
        assert!(is_correct("C #", &question, &settings));
        assert!(!is_correct("Db", &question, &settings));
        assert!(!is_correct("", &question, &settings));
    }

    #[test]
    fn test_both_spellings_accept_enharmonics() {
        let settings = QuizSettings {
            use_flats: true,
            use_sharps: true,
            ..QuizSettings::default()
        };
        let question = question_at(2, 2, &settings);
        assert!(is_correct("Db", &question, &settings));
        assert!(is_correct("c#", &question, &settings));

        // Low E string, fret 1 is F, which may also be spelled E#
        let question = question_at(6, 1, &settings);
        assert!(is_correct("f", &question, &settings));
        assert!(is_correct("E#", &question, &settings));
    }

    #[test]
    fn test_flat_only_answers() {
        let settings = QuizSettings {
            use_flats: true,
            use_sharps: false,
            ..QuizSettings::default()
        };
        let question = question_at(2, 2, &settings);
        assert!(is_correct("db", &question, &settings));
        assert!(!is_correct("C#", &question, &settings));
    }
}
