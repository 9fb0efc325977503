use std::any::Any;
use std::time::Instant;

use mashcore_core::state::{AppState, Screen};
use mashcore_types::{Action, SessionAction};

use crate::ui::layout_helpers::render_dialog_frame;
use crate::ui::{Color, InputEvent, KeyCode, Pane, Rect, RenderBuf, Style};

const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Transient screen shown while the artificial generation delay runs out.
/// Its `tick` drives the `Generating → Viewing` transition; the wait is
/// not cancellable.
pub struct GeneratingPane {
    entered: Instant,
}

impl GeneratingPane {
    pub fn new() -> Self {
        Self {
            entered: Instant::now(),
        }
    }
}

impl Default for GeneratingPane {
    fn default() -> Self {
        Self::new()
    }
}

impl Pane for GeneratingPane {
    fn id(&self) -> &'static str {
        "generating"
    }

    fn handle_key(&mut self, event: &InputEvent, _state: &AppState) -> Action {
        match event.key {
            KeyCode::Char('q') => Action::Quit,
            _ => Action::None,
        }
    }

    fn on_enter(&mut self, _state: &AppState) {
        self.entered = Instant::now();
    }

    fn tick(&mut self, state: &AppState) -> Vec<Action> {
        match state.screen {
            Screen::Generating { until } if Instant::now() >= until => {
                vec![Action::Session(SessionAction::FinishGenerate)]
            }
            _ => vec![],
        }
    }

    fn render(&mut self, area: Rect, buf: &mut RenderBuf, _state: &AppState) {
        let inner = render_dialog_frame(area, buf, " Generating ", 48, 7, Color::CYAN);

        let frame = (self.entered.elapsed().as_millis() / 80) as usize % SPINNER.len();
        let spinner = SPINNER[frame].to_string();
        let line1 = format!("{} Generating mashup...", spinner);
        let x = inner.x + (inner.width.saturating_sub(line1.len() as u16)) / 2;
        buf.draw_str(x, inner.y + 1, &line1, Style::new().fg(Color::WHITE).bold());

        let line2 = "Analyzing harmonies & rhythms";
        let x = inner.x + (inner.width.saturating_sub(line2.len() as u16)) / 2;
        buf.draw_str(x, inner.y + 3, line2, Style::new().fg(Color::DARK_GRAY));
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn tick_fires_once_deadline_passes() {
        let mut state = AppState::new_with_seed(1);
        state.screen = Screen::Generating {
            until: Instant::now() - Duration::from_millis(1),
        };
        let mut pane = GeneratingPane::new();
        assert_eq!(
            pane.tick(&state),
            vec![Action::Session(SessionAction::FinishGenerate)]
        );
    }

    #[test]
    fn tick_waits_for_deadline() {
        let mut state = AppState::new_with_seed(1);
        state.screen = Screen::Generating {
            until: Instant::now() + Duration::from_secs(60),
        };
        let mut pane = GeneratingPane::new();
        assert!(pane.tick(&state).is_empty());
    }

    #[test]
    fn tick_is_inert_on_other_screens() {
        let state = AppState::new_with_seed(1);
        let mut pane = GeneratingPane::new();
        assert!(pane.tick(&state).is_empty());
    }
}
