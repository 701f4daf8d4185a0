//! Terminal input module (engine-facing).
//!
//! This crate is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::PlayerAction`] and tracks which keys are held,
//! so the game loop can sample an [`InputState`](crate::types::InputState)
//! once per frame, including on terminals that never report key releases.

pub mod handler;
pub mod map;

pub use tui_platformer_types as types;

pub use handler::InputHandler;
pub use map::{action_for_code, handle_key_event, should_quit};
