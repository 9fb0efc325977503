//! Pure state-mutation reducers for the score.
//!
//! These functions are the single source of truth for score action → state
//! mutations. They mutate the `Score` only; they do not construct
//! `DispatchResult` or emit status events — that is mashcore-core's job.

use crate::action::{EditAction, ScoreAction};
use crate::score::{Measure, Score};

/// Apply a score action. Returns true if any measure changed.
pub fn reduce_score(action: &ScoreAction, score: &mut Score) -> bool {
    match action {
        ScoreAction::ToggleMeasure(id) => score.toggle_measure(*id),
        ScoreAction::ClearSelection => {
            let had_selection = score.selected_count() > 0;
            score.clear_selection();
            had_selection
        }
        ScoreAction::Edit(edit) => {
            let mut changed = false;
            for measure in score.selected_measures_mut() {
                apply_edit(edit, measure);
                changed = true;
            }
            changed
        }
    }
}

fn apply_edit(edit: &EditAction, measure: &mut Measure) {
    match edit {
        EditAction::SwapSource => {
            for note in &mut measure.notes {
                note.source = note.source.flipped();
            }
            measure.source = measure.source.flipped();
        }
        EditAction::Transpose(steps) => {
            for note in &mut measure.notes {
                note.pitch = note.pitch.transposed(*steps);
            }
        }
        EditAction::DoubleTempo => {
            for note in &mut measure.notes {
                note.length = note.length.halved();
            }
        }
        EditAction::HalfTempo => {
            for note in &mut measure.notes {
                note.length = note.length.doubled();
            }
        }
        EditAction::Reverse => {
            measure.notes.reverse();
            for (n, note) in measure.notes.iter_mut().enumerate() {
                note.beat = n as u8 + 1;
            }
        }
        EditAction::DeleteNotes => {
            measure.notes.clear();
        }
    }
}
