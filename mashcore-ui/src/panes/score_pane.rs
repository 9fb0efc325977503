use std::any::Any;

use mashcore_core::state::AppState;
use mashcore_types::{
    Action, EditAction, Measure, MeasureId, Provenance, ScoreAction, SessionAction,
    MEASURES_PER_SCORE,
};

use crate::ui::layout_helpers::center_rect;
use crate::ui::{
    Color, InputEvent, KeyCode, MouseButton, MouseEvent, MouseEventKind, Pane, Rect, RenderBuf,
    Style,
};

const GRID_COLS: usize = 8;
const GRID_ROWS: usize = 4;
const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;

// Fits the 80x24 minimum terminal
const BOX_WIDTH: u16 = GRID_COLS as u16 * CELL_WIDTH + 4;
const BOX_HEIGHT: u16 = 20;

/// Score viewer: the 32-measure grid with selection and editing.
pub struct ScorePane {
    cursor: usize,
}

impl ScorePane {
    pub fn new() -> Self {
        Self { cursor: 0 }
    }

    fn provenance_color(source: Provenance) -> Color {
        match source {
            Provenance::A => Color::SONG_A,
            Provenance::B => Color::SONG_B,
            Provenance::Mixed => Color::MIXED,
        }
    }

    fn cell_style(measure: &Measure, is_cursor: bool) -> Style {
        let fg = Self::provenance_color(measure.source);
        let style = if measure.selected {
            Style::new().fg(fg).bg(Color::SELECTION_BG)
        } else {
            Style::new().fg(fg)
        };
        if is_cursor {
            style.bold()
        } else {
            style
        }
    }

    fn cell_tag(source: Provenance) -> &'static str {
        match source {
            Provenance::A => "A",
            Provenance::B => "B",
            Provenance::Mixed => "M",
        }
    }

    fn detail_line(measure: &Measure) -> String {
        if measure.notes.is_empty() {
            return format!("{:02} [{}]: (empty)", measure.number, measure.source.name());
        }
        let notes: Vec<String> = measure
            .notes
            .iter()
            .map(|n| format!("{}/{}{}", n.pitch.name(), n.length.beats(), n.source.name()))
            .collect();
        format!(
            "{:02} [{}]: {}",
            measure.number,
            measure.source.name(),
            notes.join(" ")
        )
    }
}

impl Default for ScorePane {
    fn default() -> Self {
        Self::new()
    }
}

impl Pane for ScorePane {
    fn id(&self) -> &'static str {
        "score"
    }

    fn handle_key(&mut self, event: &InputEvent, _state: &AppState) -> Action {
        match event.key {
            KeyCode::Left | KeyCode::Char('h') => {
                self.cursor = self.cursor.saturating_sub(1);
                Action::None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.cursor = (self.cursor + 1).min(MEASURES_PER_SCORE - 1);
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(GRID_COLS);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.cursor = (self.cursor + GRID_COLS).min(MEASURES_PER_SCORE - 1);
                Action::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => Action::Score(ScoreAction::ToggleMeasure(
                MeasureId::new(self.cursor as u32),
            )),
            KeyCode::Char('c') => Action::Score(ScoreAction::ClearSelection),
            KeyCode::Char('s') => Action::Score(ScoreAction::Edit(EditAction::SwapSource)),
            KeyCode::Char('=') | KeyCode::Char('+') => {
                Action::Score(ScoreAction::Edit(EditAction::Transpose(1)))
            }
            KeyCode::Char('-') => Action::Score(ScoreAction::Edit(EditAction::Transpose(-1))),
            KeyCode::Char('.') => Action::Score(ScoreAction::Edit(EditAction::DoubleTempo)),
            KeyCode::Char(',') => Action::Score(ScoreAction::Edit(EditAction::HalfTempo)),
            KeyCode::Char('r') => Action::Score(ScoreAction::Edit(EditAction::Reverse)),
            KeyCode::Char('x') => Action::Score(ScoreAction::Edit(EditAction::DeleteNotes)),
            KeyCode::Char('n') => Action::Session(SessionAction::NewMashup),
            KeyCode::Char('q') => Action::Quit,
            _ => Action::None,
        }
    }

    fn handle_mouse(&mut self, event: &MouseEvent, area: Rect, state: &AppState) -> Action {
        let rect = center_rect(area, BOX_WIDTH, BOX_HEIGHT);
        let cx = rect.x + 2;
        let grid_y = rect.y + 3;
        let grid_h = GRID_ROWS as u16 * CELL_HEIGHT;

        if state.score.is_none() {
            return Action::None;
        }

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let col = event.column;
                let row = event.row;
                if col >= cx
                    && col < cx + GRID_COLS as u16 * CELL_WIDTH
                    && row >= grid_y
                    && row < grid_y + grid_h
                {
                    let col_idx = ((col - cx) / CELL_WIDTH) as usize;
                    let row_idx = ((row - grid_y) / CELL_HEIGHT) as usize;
                    let idx = row_idx * GRID_COLS + col_idx;
                    if idx < MEASURES_PER_SCORE {
                        self.cursor = idx;
                        return Action::Score(ScoreAction::ToggleMeasure(MeasureId::new(
                            idx as u32,
                        )));
                    }
                }
                Action::None
            }
            MouseEventKind::ScrollUp => {
                self.cursor = self.cursor.saturating_sub(GRID_COLS);
                Action::None
            }
            MouseEventKind::ScrollDown => {
                self.cursor = (self.cursor + GRID_COLS).min(MEASURES_PER_SCORE - 1);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, area: Rect, buf: &mut RenderBuf, state: &AppState) {
        let rect = center_rect(area, BOX_WIDTH, BOX_HEIGHT);
        let border_style = Style::new().fg(Color::GRAY);
        buf.draw_block(rect, " Score ", border_style, border_style);

        let cx = rect.x + 2;

        let score = match state.score.as_ref() {
            Some(s) => s,
            None => {
                buf.draw_str(
                    cx,
                    rect.y + 2,
                    "No score generated",
                    Style::new().fg(Color::DARK_GRAY),
                );
                return;
            }
        };

        // Legend
        buf.draw_line(
            Rect::new(cx, rect.y + 1, rect.width.saturating_sub(4), 1),
            &[
                ("■ Song A  ", Style::new().fg(Color::SONG_A)),
                ("■ Song B  ", Style::new().fg(Color::SONG_B)),
                ("■ Mixed", Style::new().fg(Color::MIXED)),
            ],
        );

        // Measure grid
        let grid_y = rect.y + 3;
        for (i, measure) in score.measures.iter().enumerate() {
            let col = (i % GRID_COLS) as u16;
            let row = (i / GRID_COLS) as u16;
            let x = cx + col * CELL_WIDTH;
            let y = grid_y + row * CELL_HEIGHT;

            let is_cursor = i == self.cursor;
            let style = Self::cell_style(measure, is_cursor);

            let marker = if is_cursor { '>' } else { ' ' };
            let head = format!(
                "{}{:02} [{}]",
                marker,
                measure.number,
                Self::cell_tag(measure.source)
            );
            buf.draw_str(x, y, &head, style);
            let body = format!(" {} notes", measure.notes.len());
            buf.draw_str(x, y + 1, &body, style);
        }

        // Cursor measure detail
        let detail_y = grid_y + GRID_ROWS as u16 * CELL_HEIGHT + 1;
        if let Some(measure) = score.measures.get(self.cursor) {
            let mut line = Self::detail_line(measure);
            line.truncate((rect.width as usize).saturating_sub(4));
            buf.draw_str(cx, detail_y, &line, Style::new().fg(Color::WHITE));
        }

        // Help line
        let help_y = rect.y + rect.height - 2;
        buf.draw_line(
            Rect::new(cx, help_y, rect.width.saturating_sub(4), 1),
            &[(
                "Enter:sel c:clear s:swap -/=:transp ,/.:tempo r:rev x:del n:new q:quit",
                Style::new().fg(Color::DARK_GRAY),
            )],
        );
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mashcore_core::dispatch::dispatch_action;
    use mashcore_types::SongId;
    use std::time::Duration;

    fn key(code: KeyCode) -> InputEvent {
        InputEvent::key(code)
    }

    fn viewing_state() -> AppState {
        let mut state = AppState::new_with_seed(3);
        for action in [
            Action::Session(SessionAction::PickSongA(SongId::new(1))),
            Action::Session(SessionAction::PickSongB(SongId::new(2))),
            Action::Session(SessionAction::Generate),
            Action::Session(SessionAction::FinishGenerate),
        ] {
            dispatch_action(&action, &mut state, Duration::ZERO);
        }
        state
    }

    #[test]
    fn cursor_navigation_clamps_to_grid() {
        let state = viewing_state();
        let mut pane = ScorePane::new();

        pane.handle_key(&key(KeyCode::Left), &state);
        assert_eq!(pane.cursor, 0);

        pane.handle_key(&key(KeyCode::Down), &state);
        assert_eq!(pane.cursor, 8);
        pane.handle_key(&key(KeyCode::Right), &state);
        assert_eq!(pane.cursor, 9);
        pane.handle_key(&key(KeyCode::Up), &state);
        assert_eq!(pane.cursor, 1);

        for _ in 0..50 {
            pane.handle_key(&key(KeyCode::Right), &state);
        }
        assert_eq!(pane.cursor, 31);
    }

    #[test]
    fn enter_toggles_measure_at_cursor() {
        let state = viewing_state();
        let mut pane = ScorePane::new();
        pane.handle_key(&key(KeyCode::Right), &state);

        let action = pane.handle_key(&key(KeyCode::Enter), &state);
        assert_eq!(
            action,
            Action::Score(ScoreAction::ToggleMeasure(MeasureId::new(1)))
        );
    }

    #[test]
    fn edit_keys_map_to_edit_actions() {
        let state = viewing_state();
        let mut pane = ScorePane::new();
        let cases = [
            ('s', EditAction::SwapSource),
            ('=', EditAction::Transpose(1)),
            ('-', EditAction::Transpose(-1)),
            ('.', EditAction::DoubleTempo),
            (',', EditAction::HalfTempo),
            ('r', EditAction::Reverse),
            ('x', EditAction::DeleteNotes),
        ];
        for (ch, expected) in cases {
            assert_eq!(
                pane.handle_key(&key(KeyCode::Char(ch)), &state),
                Action::Score(ScoreAction::Edit(expected)),
                "key {}",
                ch
            );
        }
    }

    #[test]
    fn new_mashup_key() {
        let state = viewing_state();
        let mut pane = ScorePane::new();
        assert_eq!(
            pane.handle_key(&key(KeyCode::Char('n')), &state),
            Action::Session(SessionAction::NewMashup)
        );
    }

    #[test]
    fn click_toggles_clicked_measure() {
        let state = viewing_state();
        let mut pane = ScorePane::new();
        let area = Rect::new(0, 0, 100, 30);

        let rect = center_rect(area, BOX_WIDTH, BOX_HEIGHT);
        // Second cell of the second grid row
        let event = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: rect.x + 2 + CELL_WIDTH,
            row: rect.y + 3 + CELL_HEIGHT,
        };
        let action = pane.handle_mouse(&event, area, &state);
        assert_eq!(
            action,
            Action::Score(ScoreAction::ToggleMeasure(MeasureId::new(9)))
        );
        assert_eq!(pane.cursor, 9);
    }
}
