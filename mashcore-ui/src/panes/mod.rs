mod generating_pane;
mod score_pane;
mod song_input_pane;

pub use generating_pane::GeneratingPane;
pub use score_pane::ScorePane;
pub use song_input_pane::SongInputPane;
