//! Top-level application state.

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use mashcore_types::{sample_songs, Score, Song, SongId};

/// Which screen is shown. The pane layer mirrors this one-to-one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Song selection
    Input,
    /// Transient: waiting out the artificial generation delay
    Generating { until: Instant },
    /// A score is on display
    Viewing,
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Input => "input",
            Screen::Generating { .. } => "generating",
            Screen::Viewing => "viewing",
        }
    }
}

/// Application state, owned by the dispatcher and passed to panes by
/// reference. All mutation goes through `dispatch::dispatch_action`.
pub struct AppState {
    pub catalog: Vec<Song>,
    pub screen: Screen,
    pub song_a: Option<SongId>,
    pub song_b: Option<SongId>,
    pub score: Option<Score>,
    /// LCG state for the generator. Seeded from the wall clock; tests use
    /// `new_with_seed` for reproducible scores.
    pub rng: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0x4d595df4d0f33173);
        Self::new_with_seed(seed)
    }

    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            catalog: sample_songs(),
            screen: Screen::Input,
            song_a: None,
            song_b: None,
            score: None,
            rng: seed,
        }
    }

    pub fn song(&self, id: SongId) -> Option<&Song> {
        self.catalog.iter().find(|s| s.id == id)
    }

    pub fn song_a(&self) -> Option<&Song> {
        self.song_a.and_then(|id| self.song(id))
    }

    pub fn song_b(&self) -> Option<&Song> {
        self.song_b.and_then(|id| self.song(id))
    }

    /// Both songs chosen and distinct — the Generate precondition.
    pub fn selection_valid(&self) -> bool {
        matches!((self.song_a, self.song_b), (Some(a), Some(b)) if a != b)
    }

    pub fn selected_count(&self) -> usize {
        self.score.as_ref().map_or(0, |s| s.selected_count())
    }
}
