//! Action types for the dispatch system.
//!
//! Actions represent user intents that flow from the panes through
//! mashcore-core dispatch into the reducers.

use serde::{Deserialize, Serialize};

use crate::{MeasureId, SongId};

/// Severity of a status event shown on the frame's status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Status event returned from dispatch — forwarded to the status bar by the
/// UI layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEvent {
    pub level: StatusLevel,
    pub message: String,
}

/// Result of dispatching an action — side effects for the UI layer to process.
#[derive(Debug, Clone, Default)]
pub struct DispatchResult {
    pub quit: bool,
    pub status: Vec<StatusEvent>,
}

impl DispatchResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_quit() -> Self {
        Self {
            quit: true,
            ..Self::default()
        }
    }

    pub fn with_status(level: StatusLevel, message: impl Into<String>) -> Self {
        Self {
            status: vec![StatusEvent {
                level,
                message: message.into(),
            }],
            ..Self::default()
        }
    }

    pub fn push_status(&mut self, level: StatusLevel, message: impl Into<String>) {
        self.status.push(StatusEvent {
            level,
            message: message.into(),
        });
    }
}

/// Session actions: song selection and the generate lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    PickSongA(SongId),
    PickSongB(SongId),
    /// Reset both song slots (Input screen only)
    ClearSongs,
    /// Request generation; refused unless both songs are chosen and distinct
    Generate,
    /// Emitted by the generating pane once the artificial delay elapses
    FinishGenerate,
    /// Discard the score and return to the input screen. Song selections
    /// are retained.
    NewMashup,
}

/// Editing operation applied to every selected measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    /// Flip every note's source A<->B; measure provenance flips likewise
    SwapSource,
    /// Move each note the given number of diatonic steps, saturating
    Transpose(i8),
    /// Halve note lengths (play twice as fast), saturating at a sixteenth
    DoubleTempo,
    /// Double note lengths, saturating at a half note
    HalfTempo,
    /// Reverse note order, renumbering beats 1..n
    Reverse,
    /// Empty the measure's note list
    DeleteNotes,
}

impl EditAction {
    pub fn name(&self) -> &'static str {
        match self {
            EditAction::SwapSource => "swap source",
            EditAction::Transpose(n) if *n >= 0 => "transpose up",
            EditAction::Transpose(_) => "transpose down",
            EditAction::DoubleTempo => "double tempo",
            EditAction::HalfTempo => "half tempo",
            EditAction::Reverse => "reverse",
            EditAction::DeleteNotes => "delete notes",
        }
    }
}

/// Score actions: selection and editing over generated measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreAction {
    ToggleMeasure(MeasureId),
    ClearSelection,
    Edit(EditAction),
}

/// Actions returned from pane input handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    Session(SessionAction),
    Score(ScoreAction),
}
