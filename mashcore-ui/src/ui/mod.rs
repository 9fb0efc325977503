pub mod frame;
pub mod input;
pub mod layout_helpers;
pub mod pane;
pub mod ratatui_impl;
pub mod render;
pub mod status_bar;
pub mod style;

pub use frame::Frame;
pub use input::{
    AppEvent, InputEvent, InputSource, KeyCode, Modifiers, MouseButton, MouseEvent, MouseEventKind,
};
pub use pane::{Pane, PaneManager};
pub use ratatui_impl::RatatuiBackend;
pub use render::{Rect, RenderBuf};
pub use status_bar::{StatusBar, StatusLevel};
pub use style::{selected_style, Color, Style};
