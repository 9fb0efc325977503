use mashcore_types::reduce::reduce_score;
use mashcore_types::{DispatchResult, ScoreAction, StatusLevel};

use crate::state::{AppState, Screen};

pub(super) fn dispatch_score(action: &ScoreAction, state: &mut AppState) -> DispatchResult {
    if state.screen != Screen::Viewing {
        return DispatchResult::none();
    }
    let score = match state.score.as_mut() {
        Some(s) => s,
        None => return DispatchResult::none(),
    };

    match action {
        ScoreAction::ToggleMeasure(_) => {
            reduce_score(action, score);
            DispatchResult::none()
        }
        ScoreAction::ClearSelection => {
            if reduce_score(action, score) {
                DispatchResult::with_status(StatusLevel::Info, "Selection cleared")
            } else {
                DispatchResult::none()
            }
        }
        ScoreAction::Edit(edit) => {
            let affected = score.selected_count();
            if reduce_score(action, score) {
                DispatchResult::with_status(
                    StatusLevel::Info,
                    format!("Applied {} to {} measure(s)", edit.name(), affected),
                )
            } else {
                DispatchResult::with_status(StatusLevel::Info, "No measures selected")
            }
        }
    }
}
