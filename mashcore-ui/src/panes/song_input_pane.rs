use std::any::Any;

use mashcore_core::state::AppState;
use mashcore_types::{Action, SessionAction, Song};

use crate::ui::layout_helpers::center_rect;
use crate::ui::{selected_style, Color, InputEvent, KeyCode, Pane, Rect, RenderBuf, Style};

/// Which song slot receives the next pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    A,
    B,
}

/// Song selection screen: two slots fed from the fixed catalog.
pub struct SongInputPane {
    focus: Slot,
    cursor: usize,
}

const BOX_WIDTH: u16 = 76;
const BOX_HEIGHT: u16 = 22;

impl SongInputPane {
    pub fn new() -> Self {
        Self {
            focus: Slot::A,
            cursor: 0,
        }
    }

    fn slot_line(song: Option<&Song>) -> String {
        match song {
            Some(s) => format!(
                "{} - {}  ({} BPM, Key {}, {})",
                s.title, s.artist, s.bpm, s.key, s.duration
            ),
            None => "Select a song...".to_string(),
        }
    }
}

impl Default for SongInputPane {
    fn default() -> Self {
        Self::new()
    }
}

impl Pane for SongInputPane {
    fn id(&self) -> &'static str {
        "song_input"
    }

    fn handle_key(&mut self, event: &InputEvent, state: &AppState) -> Action {
        match event.key {
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Slot::A => Slot::B,
                    Slot::B => Slot::A,
                };
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.cursor = (self.cursor + 1).min(state.catalog.len().saturating_sub(1));
                Action::None
            }
            KeyCode::Enter => {
                let song = match state.catalog.get(self.cursor) {
                    Some(s) => s,
                    None => return Action::None,
                };
                let action = match self.focus {
                    Slot::A => SessionAction::PickSongA(song.id),
                    Slot::B => SessionAction::PickSongB(song.id),
                };
                // Picking slot A moves focus on to slot B
                if self.focus == Slot::A {
                    self.focus = Slot::B;
                }
                Action::Session(action)
            }
            KeyCode::Char('g') => Action::Session(SessionAction::Generate),
            KeyCode::Char('x') => Action::Session(SessionAction::ClearSongs),
            KeyCode::Char('q') => Action::Quit,
            _ => Action::None,
        }
    }

    fn render(&mut self, area: Rect, buf: &mut RenderBuf, state: &AppState) {
        let rect = center_rect(area, BOX_WIDTH, BOX_HEIGHT);
        let border_style = Style::new().fg(Color::GRAY);
        buf.draw_block(rect, " Pick Two Songs ", border_style, border_style);

        let cx = rect.x + 2;
        let mut y = rect.y + 2;

        // Slot cards
        for (slot, label, color, song) in [
            (Slot::A, "SONG A", Color::SONG_A, state.song_a()),
            (Slot::B, "SONG B", Color::SONG_B, state.song_b()),
        ] {
            let marker = if self.focus == slot { "> " } else { "  " };
            buf.draw_str(cx, y, marker, Style::new().fg(Color::WHITE).bold());
            buf.draw_str(cx + 2, y, label, Style::new().fg(color).bold());
            let detail_style = if song.is_some() {
                Style::new().fg(Color::WHITE)
            } else {
                Style::new().fg(Color::DARK_GRAY)
            };
            buf.draw_str(cx + 10, y, &Self::slot_line(song), detail_style);
            y += 2;
        }

        // Catalog list
        y += 1;
        buf.draw_str(cx, y, "CATALOG", Style::new().fg(Color::DARK_GRAY));
        y += 1;
        for (i, song) in state.catalog.iter().enumerate() {
            let is_cursor = i == self.cursor;
            let mut line = format!(
                "{:>2}. {:<24} {:<16} {:>3} BPM  {:<3} {}",
                song.id, song.title, song.artist, song.bpm, song.key, song.duration
            );
            line.truncate(BOX_WIDTH as usize - 6);
            let mut style = selected_style(is_cursor, Color::WHITE);
            if state.song_a == Some(song.id) {
                style = selected_style(is_cursor, Color::SONG_A);
            } else if state.song_b == Some(song.id) {
                style = selected_style(is_cursor, Color::SONG_B);
            }
            buf.draw_str(cx + 1, y + i as u16, &line, style);
        }
        y += state.catalog.len() as u16 + 1;

        // Generate control, rendered disabled until the selection is valid
        if state.selection_valid() {
            buf.draw_str(
                cx,
                y,
                "g: Generate mashup",
                Style::new().fg(Color::OK_COLOR).bold(),
            );
        } else {
            buf.draw_str(
                cx,
                y,
                "g: Generate mashup (pick two different songs)",
                Style::new().fg(Color::DARK_GRAY),
            );
        }

        let help_y = rect.y + rect.height - 2;
        buf.draw_line(
            Rect::new(cx, help_y, rect.width.saturating_sub(4), 1),
            &[(
                "Tab:slot  j/k:move  Enter:assign  g:generate  x:clear  q:quit",
                Style::new().fg(Color::DARK_GRAY),
            )],
        );
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
