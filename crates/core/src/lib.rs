//! Core simulation module - pure, deterministic, and testable
//!
//! This crate contains the whole platformer simulation: entities, the
//! per-frame physics update and level layouts. It has **no dependencies** on
//! the terminal, input devices or timing, making it:
//!
//! - **Deterministic**: the same input sequence always produces the same run
//! - **Testable**: physics and collision are plain functions over plain data
//! - **Portable**: runs in the terminal binary and in the headless trace tool
//!
//! # Module Structure
//!
//! - [`image`]: pixel surfaces and spritesheets
//! - [`sprite`]: the positioned image shared by every entity, built on the tile grid
//! - [`player`]: movement, gravity, jumping and ground collision
//! - [`ground`]: static ground tiles
//! - [`level`]: tile-grid layouts (built-in demo level and ASCII parser)
//! - [`world`]: owns the entities, runs the frame update, yields the draw order
//! - [`snapshot`]: serializable plain-data view of the world
//! - [`rng`]: seeded random-walk input for tracing and soak tests
//!
//! # Example
//!
//! ```
//! use tui_platformer_core::World;
//! use tui_platformer_types::InputState;
//!
//! let mut world = World::default();
//! for _ in 0..30 {
//!     world.update(InputState::NONE);
//! }
//! assert!(world.player().standing);
//! ```
//!
//! # Timing
//!
//! The world advances one fixed step per [`World::update`] call. Callers run
//! it at [`FPS`](tui_platformer_types::FPS) frames per second.

pub mod ground;
pub mod image;
pub mod level;
pub mod player;
pub mod rng;
pub mod snapshot;
pub mod sprite;
pub mod world;

pub use tui_platformer_types as types;

// Re-export commonly used types for convenience
pub use ground::GroundTile;
pub use image::{Image, Spritesheet};
pub use level::{Level, LevelError};
pub use player::{Player, PlayerEvents};
pub use rng::{RandomInput, SimpleRng};
pub use snapshot::{PlayerSnapshot, WorldSnapshot};
pub use sprite::{Sprite, SpriteBuilder};
pub use world::World;
