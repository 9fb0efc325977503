use mashcore_core::state::{AppState, Screen};

use super::status_bar::{StatusBar, StatusLevel};
use super::{Color, Rect, RenderBuf, Style};

/// Frame wrapping the active pane with border, header bar, and status bar.
pub struct Frame {
    pub status_bar: StatusBar,
}

impl Frame {
    pub fn new() -> Self {
        Self {
            status_bar: StatusBar::new(),
        }
    }

    pub const MIN_WIDTH: u16 = 80;
    pub const MIN_HEIGHT: u16 = 24;

    /// Returns true if the terminal area is large enough for normal rendering.
    pub fn is_size_ok(area: Rect) -> bool {
        area.width >= Self::MIN_WIDTH && area.height >= Self::MIN_HEIGHT
    }

    /// Render the frame border, header, indicators, and status bar.
    pub fn render_buf(&self, area: Rect, buf: &mut RenderBuf, state: &AppState) {
        if !Self::is_size_ok(area) {
            let msg = format!(
                "{}x{} required, got {}x{}",
                Self::MIN_WIDTH,
                Self::MIN_HEIGHT,
                area.width,
                area.height
            );
            let x = area.x + area.width.saturating_sub(msg.len() as u16) / 2;
            let y = area.y + area.height / 2;
            buf.draw_str(x, y, &msg, Style::new().fg(Color::ERROR_COLOR));
            return;
        }

        let border_style = Style::new().fg(Color::GRAY);
        buf.draw_block(area, "", border_style, border_style);

        // Header line in the top border (left-aligned)
        let pair = match (state.song_a(), state.song_b()) {
            (Some(a), Some(b)) => format!("{} x {}", a.title, b.title),
            (Some(a), None) => format!("{} x ?", a.title),
            (None, Some(b)) => format!("? x {}", b.title),
            (None, None) => "no songs picked".to_string(),
        };
        let header = format!(" MASHCORE - {}  [{}] ", pair, state.screen.name());
        let header_style = Style::new().fg(Color::CYAN).bold();
        buf.draw_line(
            Rect::new(area.x + 1, area.y, area.width.saturating_sub(2), 1),
            &[(&header, header_style)],
        );

        // Right-aligned selection readout while a score is on display
        if state.screen == Screen::Viewing {
            let sel_text = format!(" {} selected ", state.selected_count());
            let start = area.x + area.width.saturating_sub(1 + sel_text.len() as u16);
            buf.draw_str(start, area.y, &sel_text, Style::new().fg(Color::WHITE).bold());
        }

        // Status bar in the bottom border
        if let Some(msg) = self.status_bar.current() {
            let style = match msg.level {
                StatusLevel::Info => Style::new().fg(Color::OK_COLOR),
                StatusLevel::Warning => Style::new().fg(Color::WARN_COLOR).bold(),
                StatusLevel::Error => Style::new().fg(Color::ERROR_COLOR).bold(),
            };
            let y = area.y + area.height.saturating_sub(1);
            let text = format!(" {} ", msg.text);
            buf.draw_str(area.x + 2, y, &text, style);
        }
    }

    /// Inner area available to the active pane.
    pub fn inner(area: Rect) -> Rect {
        Rect::new(
            area.x + 1,
            area.y + 1,
            area.width.saturating_sub(2),
            area.height.saturating_sub(2),
        )
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}
