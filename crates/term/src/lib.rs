//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! The world is simulated in pixels; [`WorldView`] rasterises it into a
//! framebuffer of styled character cells, and [`TerminalRenderer`] flushes
//! that framebuffer to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Provide a rendering pipeline that feels closer to a game renderer
//! - Allow precise control over how many world pixels one cell covers

pub mod fb;
pub mod renderer;
pub mod world_view;

pub use tui_platformer_core as core;
pub use tui_platformer_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_exit_into, encode_full_into, TerminalRenderer};
pub use world_view::{AnchorY, Viewport, WorldView};
