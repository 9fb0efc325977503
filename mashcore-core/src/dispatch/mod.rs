//! Action dispatch — the single entry point for state mutation.
//!
//! Dispatch owns the screen transitions; selection and edit mutations are
//! delegated to the pure reducers in `mashcore_types::reduce`.

mod local;
mod score;
mod session;

pub use local::LocalDispatcher;

use std::time::Duration;

use mashcore_types::Action;

use crate::state::AppState;
use mashcore_types::DispatchResult;

/// Dispatch an action. Returns a `DispatchResult` describing side effects
/// for the UI layer (quit flag, status events).
pub fn dispatch_action(action: &Action, state: &mut AppState, delay: Duration) -> DispatchResult {
    match action {
        Action::None => DispatchResult::none(),
        Action::Quit => DispatchResult::with_quit(),
        Action::Session(a) => session::dispatch_session(a, state, delay),
        Action::Score(a) => score::dispatch_score(a, state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Screen;
    use mashcore_types::{
        EditAction, MeasureId, ScoreAction, SessionAction, SongId, StatusLevel,
    };

    const NO_DELAY: Duration = Duration::ZERO;

    fn dispatch(action: Action, state: &mut AppState) -> DispatchResult {
        dispatch_action(&action, state, NO_DELAY)
    }

    fn state_with_songs() -> AppState {
        let mut state = AppState::new_with_seed(1);
        dispatch(
            Action::Session(SessionAction::PickSongA(SongId::new(1))),
            &mut state,
        );
        dispatch(
            Action::Session(SessionAction::PickSongB(SongId::new(2))),
            &mut state,
        );
        state
    }

    fn state_viewing() -> AppState {
        let mut state = state_with_songs();
        dispatch(Action::Session(SessionAction::Generate), &mut state);
        dispatch(Action::Session(SessionAction::FinishGenerate), &mut state);
        state
    }

    #[test]
    fn quit_action_sets_quit() {
        let mut state = AppState::new_with_seed(1);
        assert!(dispatch(Action::Quit, &mut state).quit);
    }

    #[test]
    fn valid_generate_enters_generating() {
        let mut state = state_with_songs();
        dispatch(Action::Session(SessionAction::Generate), &mut state);
        assert!(matches!(state.screen, Screen::Generating { .. }));
        assert!(state.score.is_none());
    }

    #[test]
    fn generate_without_songs_is_refused() {
        let mut state = AppState::new_with_seed(1);
        let result = dispatch(Action::Session(SessionAction::Generate), &mut state);
        assert_eq!(state.screen, Screen::Input);
        assert_eq!(result.status[0].level, StatusLevel::Warning);
    }

    #[test]
    fn generate_with_identical_songs_is_refused() {
        let mut state = AppState::new_with_seed(1);
        dispatch(
            Action::Session(SessionAction::PickSongA(SongId::new(3))),
            &mut state,
        );
        dispatch(
            Action::Session(SessionAction::PickSongB(SongId::new(3))),
            &mut state,
        );
        let result = dispatch(Action::Session(SessionAction::Generate), &mut state);
        assert_eq!(state.screen, Screen::Input);
        assert!(state.score.is_none());
        assert_eq!(result.status[0].level, StatusLevel::Warning);
    }

    #[test]
    fn finish_generate_stores_score_and_enters_viewing() {
        let mut state = state_with_songs();
        dispatch(Action::Session(SessionAction::Generate), &mut state);
        dispatch(Action::Session(SessionAction::FinishGenerate), &mut state);

        assert_eq!(state.screen, Screen::Viewing);
        let score = state.score.as_ref().unwrap();
        assert_eq!(score.measures.len(), 32);
    }

    #[test]
    fn finish_generate_outside_generating_is_ignored() {
        let mut state = state_with_songs();
        dispatch(Action::Session(SessionAction::FinishGenerate), &mut state);
        assert_eq!(state.screen, Screen::Input);
        assert!(state.score.is_none());
    }

    #[test]
    fn new_mashup_discards_score_and_retains_songs() {
        let mut state = state_viewing();
        dispatch(Action::Session(SessionAction::NewMashup), &mut state);

        assert_eq!(state.screen, Screen::Input);
        assert!(state.score.is_none());
        assert_eq!(state.song_a, Some(SongId::new(1)));
        assert_eq!(state.song_b, Some(SongId::new(2)));
    }

    #[test]
    fn clear_songs_resets_both_slots() {
        let mut state = state_with_songs();
        dispatch(Action::Session(SessionAction::ClearSongs), &mut state);
        assert!(state.song_a.is_none());
        assert!(state.song_b.is_none());
    }

    #[test]
    fn song_picks_outside_input_are_ignored() {
        let mut state = state_viewing();
        dispatch(
            Action::Session(SessionAction::PickSongA(SongId::new(7))),
            &mut state,
        );
        assert_eq!(state.song_a, Some(SongId::new(1)));
    }

    #[test]
    fn toggle_then_clear_scenario() {
        let mut state = state_viewing();
        dispatch(
            Action::Score(ScoreAction::ToggleMeasure(MeasureId::new(0))),
            &mut state,
        );
        assert_eq!(state.selected_count(), 1);
        assert!(state
            .score
            .as_ref()
            .unwrap()
            .measure(MeasureId::new(0))
            .unwrap()
            .selected);

        dispatch(Action::Score(ScoreAction::ClearSelection), &mut state);
        assert_eq!(state.selected_count(), 0);
    }

    #[test]
    fn score_actions_outside_viewing_are_ignored() {
        let mut state = state_with_songs();
        dispatch(
            Action::Score(ScoreAction::ToggleMeasure(MeasureId::new(0))),
            &mut state,
        );
        assert!(state.score.is_none());
    }

    #[test]
    fn edit_without_selection_reports_hint() {
        let mut state = state_viewing();
        let result = dispatch(
            Action::Score(ScoreAction::Edit(EditAction::Reverse)),
            &mut state,
        );
        assert_eq!(result.status[0].level, StatusLevel::Info);
        assert!(result.status[0].message.contains("No measures selected"));
    }

    #[test]
    fn edit_reports_affected_count() {
        let mut state = state_viewing();
        dispatch(
            Action::Score(ScoreAction::ToggleMeasure(MeasureId::new(1))),
            &mut state,
        );
        dispatch(
            Action::Score(ScoreAction::ToggleMeasure(MeasureId::new(2))),
            &mut state,
        );
        let result = dispatch(
            Action::Score(ScoreAction::Edit(EditAction::Transpose(1))),
            &mut state,
        );
        assert!(result.status[0].message.contains('2'));
    }

    #[test]
    fn local_dispatcher_round_trip() {
        let mut dispatcher = LocalDispatcher::new(AppState::new_with_seed(9), NO_DELAY);
        dispatcher.dispatch(&Action::Session(SessionAction::PickSongA(SongId::new(1))));
        dispatcher.dispatch(&Action::Session(SessionAction::PickSongB(SongId::new(2))));
        dispatcher.dispatch(&Action::Session(SessionAction::Generate));
        dispatcher.dispatch(&Action::Session(SessionAction::FinishGenerate));
        assert_eq!(dispatcher.state().screen, Screen::Viewing);
    }
}
