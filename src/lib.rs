//! TUI Platformer (workspace facade crate).
//!
//! This package exposes `tui_platformer::{core,input,term,types}` while the
//! implementation lives in dedicated crates under `crates/`, plus the
//! runtime pieces shared by the binaries: environment [`config`] and
//! [`logging`] setup.

pub mod config;
pub mod logging;

pub use tui_platformer_core as core;
pub use tui_platformer_input as input;
pub use tui_platformer_term as term;
pub use tui_platformer_types as types;
