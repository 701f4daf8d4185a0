//! Sprite module - the positioned image shared by every entity
//!
//! Sprites are placed on the tile grid: position and size are given in tile
//! units and converted to pixels with [`TILE_SIZE`]. When built from a
//! spritesheet, the displayed region is addressed in tile units too, with an
//! extra pixel shift for sheets whose regions are not tile-aligned.

use crate::image::{Image, Spritesheet};
use crate::types::{Rect, Rgb, GREY, GROUND_LAYER, TILE_SIZE};

/// A positioned image on a draw layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    pub rect: Rect,
    pub layer: i32,
    pub image: Image,
}

impl Sprite {
    /// Color of the image pixel under world point `(x, y)`.
    ///
    /// The image is stretched over the sprite's rect when sizes differ.
    pub fn sample(&self, x: i32, y: i32) -> Option<Rgb> {
        if !self.rect.contains_point(x, y) {
            return None;
        }
        let ix = (x - self.rect.x) * self.image.width() / self.rect.w;
        let iy = (y - self.rect.y) * self.image.height() / self.rect.h;
        self.image.get(ix, iy)
    }
}

/// Builder for [`Sprite`] from tile-grid coordinates.
///
/// # Examples
///
/// ```
/// use tui_platformer_core::SpriteBuilder;
/// use tui_platformer_core::types::{GREY, TILE_SIZE};
///
/// let sprite = SpriteBuilder::new(2, 3).scale(2, 1).layer(4).build();
/// assert_eq!(sprite.rect.x, 2 * TILE_SIZE);
/// assert_eq!(sprite.rect.y, 3 * TILE_SIZE);
/// assert_eq!(sprite.rect.w, 2 * TILE_SIZE);
/// assert_eq!(sprite.layer, 4);
/// assert_eq!(sprite.image.get(0, 0), Some(GREY));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SpriteBuilder<'a> {
    x: i32,
    y: i32,
    x_pos: i32,
    y_pos: i32,
    x_shift: i32,
    y_shift: i32,
    x_scale: i32,
    y_scale: i32,
    layer: i32,
    color: Rgb,
    spritesheet: Option<&'a Spritesheet>,
}

impl<'a> SpriteBuilder<'a> {
    /// Start a one-tile grey sprite at tile `(x, y)`.
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            x_pos: 0,
            y_pos: 0,
            x_shift: 0,
            y_shift: 0,
            x_scale: 1,
            y_scale: 1,
            layer: GROUND_LAYER,
            color: GREY,
            spritesheet: None,
        }
    }

    /// Size in tiles.
    pub fn scale(mut self, x_scale: i32, y_scale: i32) -> Self {
        self.x_scale = x_scale;
        self.y_scale = y_scale;
        self
    }

    pub fn layer(mut self, layer: i32) -> Self {
        self.layer = layer;
        self
    }

    /// Fill color used when no spritesheet is set.
    pub fn color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    /// Take the image from `sheet`, at tile `(x_pos, y_pos)` plus a pixel shift.
    pub fn from_sheet(
        mut self,
        sheet: &'a Spritesheet,
        x_pos: i32,
        y_pos: i32,
        x_shift: i32,
        y_shift: i32,
    ) -> Self {
        self.spritesheet = Some(sheet);
        self.x_pos = x_pos;
        self.y_pos = y_pos;
        self.x_shift = x_shift;
        self.y_shift = y_shift;
        self
    }

    pub fn build(self) -> Sprite {
        let width = TILE_SIZE * self.x_scale;
        let height = TILE_SIZE * self.y_scale;

        let image = match self.spritesheet {
            Some(sheet) => sheet.get_sprite(
                self.x_pos * TILE_SIZE + self.x_shift,
                self.y_pos * TILE_SIZE + self.y_shift,
                width,
                height,
            ),
            None => Image::solid(width, height, self.color),
        };

        Sprite {
            rect: Rect::new(self.x * TILE_SIZE, self.y * TILE_SIZE, width, height),
            layer: self.layer,
            image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BLACK, GREEN, RED};

    #[test]
    fn default_sprite_is_one_grey_tile() {
        let s = SpriteBuilder::new(0, 0).build();
        assert_eq!(s.rect, Rect::new(0, 0, TILE_SIZE, TILE_SIZE));
        assert_eq!(s.layer, GROUND_LAYER);
        assert_eq!(s.image.width(), TILE_SIZE);
        assert_eq!(s.image.get(5, 5), Some(GREY));
    }

    #[test]
    fn sheet_region_is_addressed_in_tiles_plus_shift() {
        let mut sheet_img = Image::solid(TILE_SIZE * 4, TILE_SIZE * 2, BLACK);
        // Paint tile (2, 1) red and the pixel right after it green.
        for y in TILE_SIZE..TILE_SIZE * 2 {
            for x in TILE_SIZE * 2..TILE_SIZE * 3 {
                sheet_img.set(x, y, RED);
            }
        }
        sheet_img.set(TILE_SIZE * 3, TILE_SIZE, GREEN);
        let sheet = Spritesheet::new(sheet_img);

        let s = SpriteBuilder::new(1, 1).from_sheet(&sheet, 2, 1, 0, 0).build();
        assert_eq!(s.image.get(0, 0), Some(RED));
        assert_eq!(s.image.get(TILE_SIZE - 1, TILE_SIZE - 1), Some(RED));

        let shifted = SpriteBuilder::new(1, 1).from_sheet(&sheet, 2, 1, 1, 0).build();
        assert_eq!(shifted.image.get(TILE_SIZE - 1, 0), Some(GREEN));
    }

    #[test]
    fn sample_maps_world_point_to_image_pixel() {
        let mut s = SpriteBuilder::new(1, 0).color(RED).build();
        s.image.set(0, 0, GREEN);
        assert_eq!(s.sample(TILE_SIZE, 0), Some(GREEN));
        assert_eq!(s.sample(TILE_SIZE + 1, 1), Some(RED));
        assert_eq!(s.sample(0, 0), None);
    }
}
