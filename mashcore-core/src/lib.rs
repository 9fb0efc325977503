//! # mashcore-core
//!
//! Backend library for the Mashcore mashup score editor. Provides the
//! application state, action dispatch, and configuration — independent of
//! any UI framework.
//!
//! ```rust,ignore
//! use mashcore_core::config::Config;
//! use mashcore_core::dispatch::LocalDispatcher;
//! use mashcore_core::state::AppState;
//!
//! let config = Config::load();
//! let mut dispatcher = LocalDispatcher::new(AppState::new(), config.generate_delay());
//! let result = dispatcher.dispatch(&action);
//! // Process DispatchResult: quit flag, status events for the status bar
//! ```
//!
//! - [`state`] — `AppState` and the `Screen` state machine
//!   (`Input` → `Generating` → `Viewing`)
//! - [`dispatch`] — `dispatch_action()`, the single entry point for state
//!   mutation; selection and edit actions delegate to `mashcore_types::reduce`
//! - [`config`] — TOML configuration (embedded default + user override)

pub mod config;
pub mod dispatch;
pub mod state;
