use std::any::Any;

use mashcore_core::state::AppState;
use mashcore_types::Action;

use super::{InputEvent, MouseEvent, Rect, RenderBuf};

/// Trait for UI panes (screens/views).
pub trait Pane {
    /// Unique identifier for this pane
    fn id(&self) -> &'static str;

    /// Handle a key event, returning an action for dispatch
    fn handle_key(&mut self, event: &InputEvent, state: &AppState) -> Action;

    /// Handle mouse input. Area is the full terminal area (same as render receives).
    fn handle_mouse(&mut self, _event: &MouseEvent, _area: Rect, _state: &AppState) -> Action {
        Action::None
    }

    /// Render the pane to the buffer
    fn render(&mut self, area: Rect, buf: &mut RenderBuf, state: &AppState);

    /// Called when this pane becomes active
    fn on_enter(&mut self, _state: &AppState) {}

    /// Called each frame to check for time-based state changes.
    /// Returns actions to dispatch (default: empty).
    fn tick(&mut self, _state: &AppState) -> Vec<Action> {
        vec![]
    }

    /// Return self as Any for downcasting (required for type-specific access)
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Manages a set of panes with one active pane.
pub struct PaneManager {
    panes: Vec<Box<dyn Pane>>,
    active_index: usize,
}

impl PaneManager {
    /// Create a new pane manager with an initial pane
    pub fn new(initial_pane: Box<dyn Pane>) -> Self {
        Self {
            panes: vec![initial_pane],
            active_index: 0,
        }
    }

    /// Add a pane to the manager (does not make it active)
    pub fn add_pane(&mut self, pane: Box<dyn Pane>) {
        self.panes.push(pane);
    }

    /// Get the currently active pane
    pub fn active(&self) -> &dyn Pane {
        self.panes[self.active_index].as_ref()
    }

    /// Get the currently active pane mutably
    pub fn active_mut(&mut self) -> &mut dyn Pane {
        self.panes[self.active_index].as_mut()
    }

    /// Switch to a pane by ID
    pub fn switch_to(&mut self, id: &str, state: &AppState) -> bool {
        if let Some(index) = self.panes.iter().position(|p| p.id() == id) {
            if index != self.active_index {
                self.active_index = index;
                self.panes[self.active_index].on_enter(state);
            }
            true
        } else {
            false
        }
    }

    /// Render the active pane to the buffer.
    pub fn render(&mut self, area: Rect, buf: &mut RenderBuf, state: &AppState) {
        self.panes[self.active_index].render(area, buf, state);
    }

    /// Get a mutable reference to a pane by ID, downcasted to a specific type
    #[allow(dead_code)]
    pub fn get_pane_mut<T: 'static>(&mut self, id: &str) -> Option<&mut T> {
        self.panes
            .iter_mut()
            .find(|p| p.id() == id)
            .and_then(|p| p.as_any_mut().downcast_mut::<T>())
    }
}
