//! App runtime coordinator.
//!
//! Owns the dispatcher, pane set, and frame chrome, and drives the event
//! loop: poll input, hand it to the active pane, dispatch the resulting
//! action, drain pane ticks, render on a throttle.

use std::time::{Duration, Instant};

use mashcore_core::config::Config;
use mashcore_core::dispatch::LocalDispatcher;
use mashcore_core::state::{AppState, Screen};
use mashcore_types::{Action, DispatchResult};

use crate::panes::{GeneratingPane, ScorePane, SongInputPane};
use crate::ui::{
    AppEvent, Frame, InputSource, KeyCode, PaneManager, RatatuiBackend, Rect, RenderBuf,
};

const POLL_INTERVAL: Duration = Duration::from_millis(50);
const RENDER_INTERVAL: Duration = Duration::from_millis(33);

fn pane_for_screen(screen: &Screen) -> &'static str {
    match screen {
        Screen::Input => "song_input",
        Screen::Generating { .. } => "generating",
        Screen::Viewing => "score",
    }
}

/// Top-level runtime that owns all application state and drives the event loop.
pub struct AppRuntime {
    dispatcher: LocalDispatcher,
    panes: PaneManager,
    app_frame: Frame,
    render_needed: bool,
    last_render_time: Instant,
    // Last rendered pane area, for mouse hit-testing
    last_area: Rect,
}

impl AppRuntime {
    pub fn new() -> Self {
        let config = Config::load();
        let state = AppState::new();
        let dispatcher = LocalDispatcher::new(state, config.generate_delay());

        let mut panes = PaneManager::new(Box::new(SongInputPane::new()));
        panes.add_pane(Box::new(GeneratingPane::new()));
        panes.add_pane(Box::new(ScorePane::new()));

        Self {
            dispatcher,
            panes,
            app_frame: Frame::new(),
            render_needed: true,
            last_render_time: Instant::now(),
            last_area: Rect::new(1, 1, 78, 22),
        }
    }

    fn apply(&mut self, result: DispatchResult) -> bool {
        for event in &result.status {
            self.app_frame.status_bar.push(&event.message, event.level);
        }
        if !result.status.is_empty() {
            self.render_needed = true;
        }
        result.quit
    }

    /// Main event loop.
    pub fn run(&mut self, backend: &mut RatatuiBackend) -> std::io::Result<()> {
        loop {
            // Sync the active pane to the screen dispatch moved us to
            let pane_id = pane_for_screen(&self.dispatcher.state().screen);
            if self.panes.active().id() != pane_id {
                self.panes.switch_to(pane_id, self.dispatcher.state());
                self.render_needed = true;
            }

            if let Some(app_event) = backend.poll_event(POLL_INTERVAL) {
                let action = match app_event {
                    AppEvent::Resize(_, _) => {
                        self.render_needed = true;
                        Action::None
                    }
                    AppEvent::Key(event) => {
                        if event.modifiers.ctrl && event.key == KeyCode::Char('c') {
                            break;
                        }
                        self.render_needed = true;
                        self.panes
                            .active_mut()
                            .handle_key(&event, self.dispatcher.state())
                    }
                    AppEvent::Mouse(event) => {
                        self.render_needed = true;
                        let area = self.last_area;
                        self.panes
                            .active_mut()
                            .handle_mouse(&event, area, self.dispatcher.state())
                    }
                };

                let result = self.dispatcher.dispatch(&action);
                if self.apply(result) {
                    break;
                }
            }

            // Time-based pane updates (spinner deadline, etc.)
            let tick_actions = self.panes.active_mut().tick(self.dispatcher.state());
            for action in &tick_actions {
                let result = self.dispatcher.dispatch(action);
                if self.apply(result) {
                    return Ok(());
                }
                self.render_needed = true;
            }

            self.maybe_render(backend)?;
        }
        Ok(())
    }

    fn maybe_render(&mut self, backend: &mut RatatuiBackend) -> std::io::Result<()> {
        let generating = matches!(self.dispatcher.state().screen, Screen::Generating { .. });
        let now = Instant::now();
        let due = now.duration_since(self.last_render_time) >= RENDER_INTERVAL;
        // The generating spinner animates without input
        if !due || (!self.render_needed && !generating && !self.status_expiring()) {
            return Ok(());
        }
        self.last_render_time = now;
        self.render_needed = false;

        let mut frame = backend.begin_frame()?;
        let area = frame.area();
        let mut buf = RenderBuf::new(frame.buffer_mut());
        self.app_frame.render_buf(area, &mut buf, self.dispatcher.state());
        if Frame::is_size_ok(area) {
            self.last_area = Frame::inner(area);
            self.panes
                .render(self.last_area, &mut buf, self.dispatcher.state());
        }
        backend.end_frame(frame)
    }

    fn status_expiring(&self) -> bool {
        self.app_frame.status_bar.current().is_some()
    }
}

impl Default for AppRuntime {
    fn default() -> Self {
        Self::new()
    }
}

/// Public entry point.
pub fn run(backend: &mut RatatuiBackend) -> std::io::Result<()> {
    let mut runtime = AppRuntime::new();
    runtime.run(backend)
}
