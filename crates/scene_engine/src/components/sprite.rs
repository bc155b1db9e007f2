//! Sprite component

use bitflags::bitflags;

use crate::foundation::math::{Color, Vec2};

bitflags! {
    /// Mirroring applied when the sprite is drawn
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SpriteFlip: u8 {
        /// Mirror horizontally
        const X = 0b01;
        /// Mirror vertically
        const Y = 0b10;
    }
}

/// A component representing a sprite (small image)
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    source: String,
    color: Color,
    flip: SpriteFlip,
    sorting_layer: i32,
    order_in_layer: i32,
    size: Vec2,
}

impl Sprite {
    /// Create an untinted, unflipped sprite
    pub fn new(source: impl Into<String>, size: Vec2) -> Self {
        Self {
            source: source.into(),
            color: Color::white(),
            flip: SpriteFlip::empty(),
            sorting_layer: 0,
            order_in_layer: 0,
            size,
        }
    }

    /// Set the tint color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the mirroring
    pub fn with_flip(mut self, flip: SpriteFlip) -> Self {
        self.flip = flip;
        self
    }

    /// Set sorting layer and order within it
    pub fn with_sorting(mut self, sorting_layer: i32, order_in_layer: i32) -> Self {
        self.sorting_layer = sorting_layer;
        self.order_in_layer = order_in_layer;
        self
    }

    /// Get the image source path
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Set the image source path
    pub fn set_source(&mut self, source: impl Into<String>) {
        self.source = source.into();
    }

    /// Get the tint color
    pub fn color(&self) -> Color {
        self.color
    }

    /// Set the tint color
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Whether the sprite is mirrored horizontally
    pub fn flip_x(&self) -> bool {
        self.flip.contains(SpriteFlip::X)
    }

    /// Mirror horizontally or not
    pub fn set_flip_x(&mut self, flip: bool) {
        self.flip.set(SpriteFlip::X, flip);
    }

    /// Whether the sprite is mirrored vertically
    pub fn flip_y(&self) -> bool {
        self.flip.contains(SpriteFlip::Y)
    }

    /// Mirror vertically or not
    pub fn set_flip_y(&mut self, flip: bool) {
        self.flip.set(SpriteFlip::Y, flip);
    }

    /// Get all mirroring flags
    pub fn flip(&self) -> SpriteFlip {
        self.flip
    }

    /// Get the sorting layer
    pub fn sorting_layer(&self) -> i32 {
        self.sorting_layer
    }

    /// Set the sorting layer
    pub fn set_sorting_layer(&mut self, sorting_layer: i32) {
        self.sorting_layer = sorting_layer;
    }

    /// Get the order within the sorting layer
    pub fn order_in_layer(&self) -> i32 {
        self.order_in_layer
    }

    /// Set the order within the sorting layer
    pub fn set_order_in_layer(&mut self, order_in_layer: i32) {
        self.order_in_layer = order_in_layer;
    }

    /// Get the drawn size
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Set the drawn size
    pub fn set_size(&mut self, size: Vec2) {
        self.size = size;
    }
}

crate::impl_component!(Sprite);
