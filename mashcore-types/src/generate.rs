//! Mock score generation.
//!
//! The banded provenance pattern (A block, mixed, B block, mixed) stands in
//! for a real mashup-composition algorithm: intro from song A, transition,
//! verse from song B, outro blend. The hard problem of harmonically and
//! rhythmically aligning two real songs is replaced by uniform randomness.
//!
//! Randomness is an explicit LCG state passed by the caller, so tests can
//! supply fixed seeds and verify every structural invariant exactly.

use crate::catalog::Song;
use crate::score::{
    Measure, Note, NoteLength, NoteSource, Pitch, Provenance, Score, MEASURES_PER_SCORE,
};
use crate::{MeasureId, NoteId};

/// Minimum notes per measure.
pub const MIN_NOTES: usize = 3;
/// Maximum notes per measure.
pub const MAX_NOTES: usize = 6;

/// Why generation was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// The two inputs resolve to the same song.
    InvalidSelection,
}

impl std::fmt::Display for GenerateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateError::InvalidSelection => {
                write!(f, "song A and song B must be two different songs")
            }
        }
    }
}

impl std::error::Error for GenerateError {}

/// Advance the LCG state and return a float in [0, 1].
pub fn next_random(state: &mut u64) -> f32 {
    *state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
    (*state as f32) / (u64::MAX as f32)
}

/// Uniform index in [0, bound). Clamped so a draw of exactly 1.0 stays in range.
fn next_index(state: &mut u64, bound: usize) -> usize {
    ((next_random(state) * bound as f32) as usize).min(bound - 1)
}

/// Provenance band for a zero-based measure index:
/// 0–7 A, 8–15 mixed, 16–23 B, 24–31 mixed.
pub fn provenance_for_index(index: usize) -> Provenance {
    match index {
        0..=7 => Provenance::A,
        8..=15 => Provenance::Mixed,
        16..=23 => Provenance::B,
        _ => Provenance::Mixed,
    }
}

impl Score {
    /// Generate a 32-measure mock mashup of two catalog songs.
    ///
    /// Refuses identical inputs with [`GenerateError::InvalidSelection`];
    /// the input pane additionally disables Generate for such selections,
    /// so this is a second line of defense.
    pub fn generate(song_a: &Song, song_b: &Song, rng: &mut u64) -> Result<Score, GenerateError> {
        if song_a.id == song_b.id {
            return Err(GenerateError::InvalidSelection);
        }

        let mut measures = Vec::with_capacity(MEASURES_PER_SCORE);
        for i in 0..MEASURES_PER_SCORE {
            let source = provenance_for_index(i);
            let note_count = MIN_NOTES + next_index(rng, MAX_NOTES - MIN_NOTES + 1);

            let mut notes = Vec::with_capacity(note_count);
            for n in 0..note_count {
                let note_source = match source {
                    Provenance::A => NoteSource::A,
                    Provenance::B => NoteSource::B,
                    Provenance::Mixed => {
                        if next_random(rng) > 0.5 {
                            NoteSource::A
                        } else {
                            NoteSource::B
                        }
                    }
                };
                notes.push(Note {
                    id: NoteId::new(n as u32),
                    measure: i,
                    beat: n as u8 + 1,
                    pitch: Pitch::ALL[next_index(rng, Pitch::ALL.len())],
                    length: NoteLength::ALL[next_index(rng, NoteLength::ALL.len())],
                    source: note_source,
                });
            }

            measures.push(Measure {
                id: MeasureId::new(i as u32),
                number: i as u16 + 1,
                notes,
                source,
                selected: false,
            });
        }

        Ok(Score { measures })
    }
}
