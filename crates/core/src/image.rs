//! Image module - in-memory pixel surfaces and spritesheets
//!
//! An [`Image`] is what a sprite displays. It is either a solid filled
//! surface or a region cut out of a [`Spritesheet`]. Decoding image files is
//! not handled here; sheets are built from pixel data already in memory.

use crate::types::{Rgb, BLACK};

/// Width x height grid of pixels, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: i32,
    height: i32,
    pixels: Vec<Rgb>,
}

impl Image {
    /// Create a black image. Negative dimensions are treated as zero.
    pub fn new(width: i32, height: i32) -> Self {
        Self::solid(width, height, BLACK)
    }

    /// Create an image filled with a single color.
    pub fn solid(width: i32, height: i32, color: Rgb) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            pixels: vec![color; (width as usize) * (height as usize)],
        }
    }

    /// Wrap existing row-major pixel data.
    ///
    /// Returns `None` when `pixels.len()` does not match `width * height`.
    pub fn from_pixels(width: i32, height: i32, pixels: Vec<Rgb>) -> Option<Self> {
        if width < 0 || height < 0 || pixels.len() != (width as usize) * (height as usize) {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Pixel at `(x, y)`, or `None` when out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<Rgb> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    pub fn set(&mut self, x: i32, y: i32, color: Rgb) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.pixels[i] = color;
                true
            }
            None => false,
        }
    }

    /// Copy `src` onto this image with its top-left corner at `(dx, dy)`.
    /// Pixels falling outside this image are dropped.
    pub fn blit(&mut self, src: &Image, dx: i32, dy: i32) {
        for sy in 0..src.height {
            for sx in 0..src.width {
                if let Some(color) = src.get(sx, sy) {
                    self.set(dx + sx, dy + sy, color);
                }
            }
        }
    }
}

/// Source image subdivided into sprite regions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spritesheet {
    sheet: Image,
}

impl Spritesheet {
    pub fn new(sheet: Image) -> Self {
        Self { sheet }
    }

    /// Cut a `width x height` region starting at `(x, y)` out of the sheet.
    ///
    /// The region is blitted onto a fresh black surface, so any part of it
    /// lying outside the sheet comes back black.
    pub fn get_sprite(&self, x: i32, y: i32, width: i32, height: i32) -> Image {
        let mut sprite = Image::new(width, height);
        sprite.blit(&self.sheet, -x, -y);
        sprite
    }
}
