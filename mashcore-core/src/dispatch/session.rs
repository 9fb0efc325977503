use std::time::{Duration, Instant};

use mashcore_types::{DispatchResult, Score, SessionAction, StatusLevel};

use crate::state::{AppState, Screen};

pub(super) fn dispatch_session(
    action: &SessionAction,
    state: &mut AppState,
    delay: Duration,
) -> DispatchResult {
    match action {
        SessionAction::PickSongA(id) => {
            if state.screen != Screen::Input {
                return DispatchResult::none();
            }
            state.song_a = Some(*id);
            match state.song(*id) {
                Some(song) => {
                    DispatchResult::with_status(StatusLevel::Info, format!("Song A: {}", song.title))
                }
                None => DispatchResult::none(),
            }
        }
        SessionAction::PickSongB(id) => {
            if state.screen != Screen::Input {
                return DispatchResult::none();
            }
            state.song_b = Some(*id);
            match state.song(*id) {
                Some(song) => {
                    DispatchResult::with_status(StatusLevel::Info, format!("Song B: {}", song.title))
                }
                None => DispatchResult::none(),
            }
        }
        SessionAction::ClearSongs => {
            if state.screen != Screen::Input {
                return DispatchResult::none();
            }
            state.song_a = None;
            state.song_b = None;
            DispatchResult::with_status(StatusLevel::Info, "Song slots cleared")
        }
        SessionAction::Generate => {
            if state.screen != Screen::Input {
                return DispatchResult::none();
            }
            if !state.selection_valid() {
                return DispatchResult::with_status(
                    StatusLevel::Warning,
                    "Pick two different songs before generating",
                );
            }
            state.screen = Screen::Generating {
                until: Instant::now() + delay,
            };
            log::info!(
                "generating mashup: {:?} x {:?} (delay {:?})",
                state.song_a,
                state.song_b,
                delay
            );
            DispatchResult::none()
        }
        SessionAction::FinishGenerate => {
            // Stale completions (screen already left Generating) are dropped
            if !matches!(state.screen, Screen::Generating { .. }) {
                return DispatchResult::none();
            }
            let (song_a, song_b) = match (state.song_a(), state.song_b()) {
                (Some(a), Some(b)) => (a.clone(), b.clone()),
                _ => {
                    state.screen = Screen::Input;
                    return DispatchResult::with_status(
                        StatusLevel::Error,
                        "Song selection went missing; pick again",
                    );
                }
            };
            match Score::generate(&song_a, &song_b, &mut state.rng) {
                Ok(score) => {
                    let measures = score.measures.len();
                    state.score = Some(score);
                    state.screen = Screen::Viewing;
                    DispatchResult::with_status(
                        StatusLevel::Info,
                        format!(
                            "Mashup ready: {} x {}, {} measures",
                            song_a.title, song_b.title, measures
                        ),
                    )
                }
                Err(e) => {
                    log::warn!("generation refused: {}", e);
                    state.screen = Screen::Input;
                    DispatchResult::with_status(StatusLevel::Error, e.to_string())
                }
            }
        }
        SessionAction::NewMashup => {
            if state.screen != Screen::Viewing {
                return DispatchResult::none();
            }
            state.score = None;
            state.screen = Screen::Input;
            DispatchResult::with_status(StatusLevel::Info, "Score discarded")
        }
    }
}
