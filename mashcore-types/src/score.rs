//! Score data model: pitches, note lengths, notes, measures, and the score
//! container produced by the generator.

use serde::{Deserialize, Serialize};

use crate::{MeasureId, NoteId};

/// Number of measures in every generated score.
pub const MEASURES_PER_SCORE: usize = 32;

/// Which input song a note is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoteSource {
    A,
    B,
}

impl NoteSource {
    pub fn name(&self) -> &'static str {
        match self {
            NoteSource::A => "A",
            NoteSource::B => "B",
        }
    }

    pub fn flipped(&self) -> Self {
        match self {
            NoteSource::A => NoteSource::B,
            NoteSource::B => NoteSource::A,
        }
    }
}

/// Provenance classification of a whole measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provenance {
    A,
    B,
    Mixed,
}

impl Provenance {
    pub fn name(&self) -> &'static str {
        match self {
            Provenance::A => "A",
            Provenance::B => "B",
            Provenance::Mixed => "Mixed",
        }
    }

    /// Swap A and B attribution. Mixed stays mixed.
    pub fn flipped(&self) -> Self {
        match self {
            Provenance::A => Provenance::B,
            Provenance::B => Provenance::A,
            Provenance::Mixed => Provenance::Mixed,
        }
    }
}

/// The fixed ten-step diatonic pitch set spanning C4–E5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Pitch {
    C4,
    D4,
    E4,
    F4,
    G4,
    A4,
    B4,
    C5,
    D5,
    E5,
}

impl Pitch {
    pub const ALL: [Pitch; 10] = [
        Pitch::C4,
        Pitch::D4,
        Pitch::E4,
        Pitch::F4,
        Pitch::G4,
        Pitch::A4,
        Pitch::B4,
        Pitch::C5,
        Pitch::D5,
        Pitch::E5,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Pitch::C4 => "C4",
            Pitch::D4 => "D4",
            Pitch::E4 => "E4",
            Pitch::F4 => "F4",
            Pitch::G4 => "G4",
            Pitch::A4 => "A4",
            Pitch::B4 => "B4",
            Pitch::C5 => "C5",
            Pitch::D5 => "D5",
            Pitch::E5 => "E5",
        }
    }

    /// Position within the diatonic set (0-based).
    pub fn step(&self) -> usize {
        Pitch::ALL.iter().position(|p| p == self).unwrap_or(0)
    }

    /// Move `steps` diatonic steps, saturating at C4 and E5.
    pub fn transposed(&self, steps: i8) -> Pitch {
        let idx = self.step() as i32 + steps as i32;
        let idx = idx.clamp(0, Pitch::ALL.len() as i32 - 1) as usize;
        Pitch::ALL[idx]
    }
}

/// Relative note length. The generator only ever emits these four values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NoteLength {
    Sixteenth,
    Eighth,
    Quarter,
    Half,
}

impl NoteLength {
    pub const ALL: [NoteLength; 4] = [
        NoteLength::Sixteenth,
        NoteLength::Eighth,
        NoteLength::Quarter,
        NoteLength::Half,
    ];

    /// Length in beats: 0.25, 0.5, 1, or 2.
    pub fn beats(&self) -> f32 {
        match self {
            NoteLength::Sixteenth => 0.25,
            NoteLength::Eighth => 0.5,
            NoteLength::Quarter => 1.0,
            NoteLength::Half => 2.0,
        }
    }

    /// Half the length, saturating at a sixteenth.
    pub fn halved(&self) -> Self {
        match self {
            NoteLength::Sixteenth => NoteLength::Sixteenth,
            NoteLength::Eighth => NoteLength::Sixteenth,
            NoteLength::Quarter => NoteLength::Eighth,
            NoteLength::Half => NoteLength::Quarter,
        }
    }

    /// Double the length, saturating at a half note.
    pub fn doubled(&self) -> Self {
        match self {
            NoteLength::Sixteenth => NoteLength::Eighth,
            NoteLength::Eighth => NoteLength::Quarter,
            NoteLength::Quarter => NoteLength::Half,
            NoteLength::Half => NoteLength::Half,
        }
    }
}

/// A single musical event inside a measure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Unique within the owning measure
    pub id: NoteId,
    /// Index of the owning measure (zero-based)
    pub measure: usize,
    /// 1-based position within the measure
    pub beat: u8,
    pub pitch: Pitch,
    pub length: NoteLength,
    pub source: NoteSource,
}

/// Ordered container of notes. Note order is generation order, not
/// beat-sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measure {
    pub id: MeasureId,
    /// 1-based, sequential across the score
    pub number: u16,
    pub notes: Vec<Note>,
    pub source: Provenance,
    /// The only field mutated after generation
    pub selected: bool,
}

/// A generated mashup score. Created once per Generate action, fully
/// replacing any prior score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub measures: Vec<Measure>,
}

impl Score {
    pub fn measure(&self, id: MeasureId) -> Option<&Measure> {
        self.measures.iter().find(|m| m.id == id)
    }

    pub fn measure_mut(&mut self, id: MeasureId) -> Option<&mut Measure> {
        self.measures.iter_mut().find(|m| m.id == id)
    }

    pub fn selected_count(&self) -> usize {
        self.measures.iter().filter(|m| m.selected).count()
    }

    pub fn selected_measures_mut(&mut self) -> impl Iterator<Item = &mut Measure> {
        self.measures.iter_mut().filter(|m| m.selected)
    }

    /// Flip one measure's selection flag. Returns false if the id is unknown.
    pub fn toggle_measure(&mut self, id: MeasureId) -> bool {
        match self.measure_mut(id) {
            Some(m) => {
                m.selected = !m.selected;
                true
            }
            None => false,
        }
    }

    /// Deselect every measure. Idempotent.
    pub fn clear_selection(&mut self) {
        for m in &mut self.measures {
            m.selected = false;
        }
    }
}
