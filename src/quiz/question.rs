//! Quiz question generation

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::QuizError;
use crate::models::guitar::FretPosition;
use crate::models::pitch::pitch_class_names;
use crate::models::Pitch;
use crate::quiz::settings::QuizSettings;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub position: FretPosition,
    pub pitch: Pitch,
    /// Names accepted as a correct answer, already normalized
    pub accepted: Vec<String>,
}

impl QuizQuestion {
    pub fn new(position: FretPosition, settings: &QuizSettings) -> Self {
        let pitch = position.pitch();
        Self {
            position,
            pitch,
            accepted: pitch_class_names(pitch.midi(), settings.use_flats, settings.use_sharps),
        }
    }
}

/// Every question the settings allow, in neck order
pub fn build_pool(settings: &QuizSettings) -> Vec<QuizQuestion> {
    let mut pool = Vec::new();

    for string in settings.string_range.strings() {
        for fret in settings.min_fret..=settings.max_fret {
            let Ok(position) = FretPosition::new(string, fret as i32) else {
                continue;
            };
            if settings.naturals_only() && !position.pitch().is_natural() {
                continue;
            }
            pool.push(QuizQuestion::new(position, settings));
        }
    }

    pool
}

/// Draw `count` questions: the shuffled pool, reshuffled and repeated when
/// it is smaller than `count`
pub fn generate_questions<R: Rng + ?Sized>(
    settings: &QuizSettings,
    rng: &mut R,
    count: usize,
) -> Result<Vec<QuizQuestion>, QuizError> {
    settings.validate()?;

    let pool = build_pool(settings);
    if pool.is_empty() {
        return Err(QuizError::EmptyPool);
    }

    let mut questions = Vec::with_capacity(count);
    while questions.len() < count {
        let mut round = pool.clone();
        round.shuffle(rng);
        let needed = count - questions.len();
        questions.extend(round.into_iter().take(needed));
    }

    log::debug!("quiz: {} questions from a pool of {}", questions.len(), pool.len());
    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::settings::StringRange;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_pool_covers_range() {
        let settings = QuizSettings::default().with_fret_range("0-5").unwrap();
        let pool = build_pool(&settings);
        assert_eq!(pool.len(), 36);
        assert!(pool.iter().all(|q| q.position.fret <= 5));
    }

    #[test]
    fn test_naturals_only_pool() {
        let settings = QuizSettings {
            use_flats: false,
            use_sharps: false,
            ..QuizSettings::default()
        };
        let pool = build_pool(&settings);
        assert!(!pool.is_empty());
        assert!(pool.iter().all(|q| q.pitch.is_natural()));
    }

    #[test]
    fn test_generate_ten_questions() {
        let settings = QuizSettings {
            string_range: StringRange::Bass,
            ..QuizSettings::default()
        };
        let mut rng = StdRng::seed_from_u64(7);
        let questions = generate_questions(&settings, &mut rng, 10).unwrap();
        assert_eq!(questions.len(), 10);
        assert!(questions.iter().all(|q| q.position.string.number() >= 4));
    }

    #[test]
    fn test_small_pool_is_repeated() {
        let settings = QuizSettings {
            string_range: StringRange::Treble,
            ..QuizSettings::default()
        }
        .with_fret_range("0")
        .unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let questions = generate_questions(&settings, &mut rng, 10).unwrap();
        assert_eq!(questions.len(), 10);
        assert!(questions.iter().all(|q| q.position.fret == 0));
    }

    #[test]
    fn test_empty_pool() {
        let settings = QuizSettings {
            string_range: StringRange::Treble,
            use_flats: false,
            use_sharps: false,
            min_fret: 2,
            max_fret: 2,
        };
        // F#, C#, A: only the A remains
        let pool = build_pool(&settings);
        assert_eq!(pool.len(), 1);

        let settings = QuizSettings {
            string_range: StringRange::Bass,
            use_flats: false,
            use_sharps: false,
            min_fret: 6,
            max_fret: 6,
        };
        // G#, D#, A# on fret 6 of the bass strings
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(
            generate_questions(&settings, &mut rng, 10),
            Err(QuizError::EmptyPool)
        );
    }
}
