//! Player module - the per-frame physics and ground collision update
//!
//! Each frame runs four steps in a fixed order:
//!
//! 1. **Movement**: held left/right shift the player by [`PLAYER_SPEED`];
//!    held jump calls [`Player::jump`].
//! 2. **Integration**: the vertical position moves by the current velocity.
//!    Velocity is fractional but positions are whole pixels, so the result is
//!    truncated toward zero.
//! 3. **Collision**: every overlapping ground tile whose top lies within one
//!    gravity step above the player's bottom snaps the player onto it.
//!    Tiles entered from below or from the side are ignored, which makes
//!    every tile a one-way platform.
//! 4. **Gravity**: velocity decreases by [`GRAVITY_STEP`] down to
//!    [`MAX_GRAVITY`].
//!
//! As long as the fall speed stays below a tile's height, the player cannot
//! pass through the top of a tile: the first frame that overlaps it overlaps
//! by at most one gravity step.

use crate::ground::GroundTile;
use crate::sprite::{Sprite, SpriteBuilder};
use crate::types::{
    InputState, Rect, GRAVITY_STEP, JUMP_VELOCITY, MAX_GRAVITY, PLAYER_LAYER, PLAYER_SPEED, RED,
};

/// What happened to the player during one update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayerEvents {
    pub jumped: bool,
    pub landed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub sprite: Sprite,
    /// Vertical velocity in pixels per frame. Positive moves up.
    pub y_velocity: f32,
    /// Horizontal pixels per frame.
    pub speed: i32,
    pub standing: bool,
}

impl Player {
    /// Spawn the player at tile coordinates `(x, y)`, already falling.
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            sprite: SpriteBuilder::new(x, y).layer(PLAYER_LAYER).color(RED).build(),
            y_velocity: MAX_GRAVITY,
            speed: PLAYER_SPEED,
            standing: false,
        }
    }

    #[inline]
    pub fn rect(&self) -> &Rect {
        &self.sprite.rect
    }

    /// Advance one frame.
    pub fn update(&mut self, input: InputState, ground: &[GroundTile]) -> PlayerEvents {
        let was_standing = self.standing;

        let jumped = self.handle_movement(input);
        self.integrate();
        self.check_collision(ground);
        self.apply_gravity();

        PlayerEvents {
            jumped,
            landed: self.standing && !was_standing,
        }
    }

    /// Start a jump. Only succeeds while standing.
    pub fn jump(&mut self) -> bool {
        if !self.standing {
            return false;
        }
        self.y_velocity = JUMP_VELOCITY;
        self.standing = false;
        true
    }

    fn handle_movement(&mut self, input: InputState) -> bool {
        self.sprite.rect.x += input.horizontal() * self.speed;
        input.jump && self.jump()
    }

    fn integrate(&mut self) {
        let y = self.sprite.rect.y as f32 - self.y_velocity;
        self.sprite.rect.y = y as i32;
    }

    fn check_collision(&mut self, ground: &[GroundTile]) {
        self.standing = false;
        for tile in ground {
            if !tile.rect().collides(&self.sprite.rect) {
                continue;
            }
            if tile.rect().top() as f32 >= self.sprite.rect.bottom() as f32 + MAX_GRAVITY {
                self.sprite.rect.set_bottom(tile.rect().top());
                self.standing = true;
            }
        }
    }

    fn apply_gravity(&mut self) {
        self.y_velocity = (self.y_velocity - GRAVITY_STEP).max(MAX_GRAVITY);
    }
}
