//! Static ground tiles.

use crate::sprite::{Sprite, SpriteBuilder};
use crate::types::{Rect, GREEN, GROUND_LAYER};

/// A green, one-tile, solid-from-above block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroundTile {
    pub sprite: Sprite,
}

impl GroundTile {
    /// Create a ground tile at tile coordinates `(x, y)`.
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            sprite: SpriteBuilder::new(x, y)
                .layer(GROUND_LAYER)
                .color(GREEN)
                .build(),
        }
    }

    #[inline]
    pub fn rect(&self) -> &Rect {
        &self.sprite.rect
    }
}
