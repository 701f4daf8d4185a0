//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, making them usable
//! in any context (simulation, terminal rendering, headless tracing).
//!
//! # World Dimensions
//!
//! The world is simulated in a fixed pixel space, independent of the terminal
//! it is finally drawn to:
//!
//! - **Width**: 640 pixels (20 tiles)
//! - **Height**: 420 pixels (13 tiles and a bit)
//! - **Tile**: 32x32 pixels
//!
//! Coordinates follow screen conventions: `x` grows to the right, `y` grows
//! downward. Velocities follow the opposite convention for `y`: a positive
//! `y_velocity` moves the player up.
//!
//! # Physics Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FPS` | 30 | Fixed tick rate |
//! | `MAX_GRAVITY` | -3.0 | Terminal fall speed (pixels per frame) |
//! | `GRAVITY_STEP` | 0.5 | Velocity lost every frame |
//! | `JUMP_VELOCITY` | 10.0 | Upward velocity applied by a jump |
//! | `PLAYER_SPEED` | 5 | Horizontal pixels per frame |
//!
//! # Examples
//!
//! ```
//! use tui_platformer_types::{PlayerAction, Rect, TILE_SIZE};
//!
//! let a = Rect::new(0, 0, TILE_SIZE, TILE_SIZE);
//! let b = Rect::new(16, 16, TILE_SIZE, TILE_SIZE);
//! assert!(a.collides(&b));
//!
//! assert_eq!(PlayerAction::from_str("jump"), Some(PlayerAction::Jump));
//! ```

/// World width in pixels.
pub const WINDOW_WIDTH: i32 = 640;

/// World height in pixels.
pub const WINDOW_HEIGHT: i32 = 420;

/// Edge length of a grid tile in pixels.
pub const TILE_SIZE: i32 = 32;

/// Fixed tick rate.
pub const FPS: u32 = 30;

/// Fixed timestep interval in milliseconds at the default tick rate.
pub const TICK_MS: u32 = 1000 / FPS;

/// Terminal fall speed. Vertical velocity never drops below this.
pub const MAX_GRAVITY: f32 = -3.0;

/// Amount subtracted from the vertical velocity each frame.
pub const GRAVITY_STEP: f32 = 0.5;

/// Vertical velocity set by a successful jump.
pub const JUMP_VELOCITY: f32 = 10.0;

/// Horizontal displacement per frame while a direction is held.
pub const PLAYER_SPEED: i32 = 5;

/// Draw layer of ground tiles (and of plain sprites unless overridden).
pub const GROUND_LAYER: i32 = 0;

/// Draw layer of the player.
pub const PLAYER_LAYER: i32 = 1;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

pub const BLACK: Rgb = Rgb::new(0, 0, 0);
pub const RED: Rgb = Rgb::new(255, 0, 0);
pub const GREEN: Rgb = Rgb::new(0, 255, 0);
pub const GREY: Rgb = Rgb::new(128, 128, 128);

/// Integer axis-aligned rectangle in world pixels.
///
/// `x`/`y` is the top-left corner. The rectangle covers `x..x + w` and
/// `y..y + h` (half-open).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Move the rectangle vertically so its bottom edge sits at `bottom`.
    pub fn set_bottom(&mut self, bottom: i32) {
        self.y = bottom - self.h;
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Strict overlap test.
    ///
    /// Rectangles that only share an edge do not collide, and empty
    /// rectangles never collide with anything.
    pub fn collides(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.left() && x < self.right() && y >= self.top() && y < self.bottom()
    }
}

/// Player actions produced by keyboard input.
///
/// Movement and jump are *held* actions sampled every frame; pause and
/// restart are one-shot actions applied to the world when the key is pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerAction {
    /// Walk left while held
    MoveLeft,
    /// Walk right while held
    MoveRight,
    /// Jump (only takes effect while standing)
    Jump,
    /// Toggle pause state
    Pause,
    /// Rebuild the world from its level
    Restart,
}

impl PlayerAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_platformer_types::PlayerAction;
    ///
    /// assert_eq!(PlayerAction::from_str("moveLeft"), Some(PlayerAction::MoveLeft));
    /// assert_eq!(PlayerAction::from_str("JUMP"), Some(PlayerAction::Jump));
    /// assert_eq!(PlayerAction::from_str("fly"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" | "left" => Some(PlayerAction::MoveLeft),
            "moveright" | "right" => Some(PlayerAction::MoveRight),
            "jump" => Some(PlayerAction::Jump),
            "pause" => Some(PlayerAction::Pause),
            "restart" => Some(PlayerAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerAction::MoveLeft => "moveLeft",
            PlayerAction::MoveRight => "moveRight",
            PlayerAction::Jump => "jump",
            PlayerAction::Pause => "pause",
            PlayerAction::Restart => "restart",
        }
    }

    /// Whether the action is sampled as a held key each frame.
    pub fn is_held(&self) -> bool {
        matches!(
            self,
            PlayerAction::MoveLeft | PlayerAction::MoveRight | PlayerAction::Jump
        )
    }
}

/// Keys held during one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl InputState {
    pub const NONE: InputState = InputState {
        left: false,
        right: false,
        jump: false,
    };

    /// Build a held-key state from a list of actions. One-shot actions are ignored.
    pub fn from_actions(actions: &[PlayerAction]) -> Self {
        let mut state = Self::default();
        for action in actions {
            match action {
                PlayerAction::MoveLeft => state.left = true,
                PlayerAction::MoveRight => state.right = true,
                PlayerAction::Jump => state.jump = true,
                PlayerAction::Pause | PlayerAction::Restart => {}
            }
        }
        state
    }

    /// Net horizontal direction: -1, 0 or 1.
    pub fn horizontal(&self) -> i32 {
        (self.right as i32) - (self.left as i32)
    }
}
