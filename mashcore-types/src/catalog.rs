//! The fixed song catalog.
//!
//! Mashcore has no real library browser; the input pane offers this
//! in-memory list of eight songs and nothing else.

use serde::{Deserialize, Serialize};

use crate::SongId;

/// A catalog entry. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: SongId,
    pub title: String,
    pub artist: String,
    /// Beats per minute, always positive
    pub bpm: u16,
    /// Display key name, free-form ("Bb", "F#m", ...)
    pub key: String,
    /// Display duration ("5:55"), not used for any computation
    pub duration: String,
}

impl Song {
    fn new(id: u32, title: &str, artist: &str, bpm: u16, key: &str, duration: &str) -> Self {
        Self {
            id: SongId::new(id),
            title: title.to_string(),
            artist: artist.to_string(),
            bpm,
            key: key.to_string(),
            duration: duration.to_string(),
        }
    }
}

/// Build the fixed eight-song catalog.
pub fn sample_songs() -> Vec<Song> {
    vec![
        Song::new(1, "Bohemian Rhapsody", "Queen", 72, "Bb", "5:55"),
        Song::new(2, "Billie Jean", "Michael Jackson", 117, "F#m", "4:54"),
        Song::new(3, "Stairway to Heaven", "Led Zeppelin", 82, "Am", "8:02"),
        Song::new(4, "Superstition", "Stevie Wonder", 101, "Ebm", "4:26"),
        Song::new(5, "Take Five", "Dave Brubeck", 172, "Ebm", "5:24"),
        Song::new(6, "So What", "Miles Davis", 136, "Dm", "9:22"),
        Song::new(7, "Clocks", "Coldplay", 131, "Ebm", "5:07"),
        Song::new(8, "Get Lucky", "Daft Punk", 116, "F#m", "6:09"),
    ]
}
