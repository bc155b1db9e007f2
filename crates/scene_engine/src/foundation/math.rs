//! Math utilities and types
//!
//! Provides the small set of math and color types the scene model carries
//! around as plain data.

use serde::{Deserialize, Serialize};

pub use nalgebra::{Vector2, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// RGBA color with components in the `0.0..=1.0` range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red channel
    pub r: f32,
    /// Green channel
    pub g: f32,
    /// Blue channel
    pub b: f32,
    /// Alpha channel
    pub a: f32,
}

impl Color {
    /// Create a new color from RGBA components
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from RGB components
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Opaque white
    pub const fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }

    /// Opaque black
    pub const fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    /// Opaque red
    pub const fn red() -> Self {
        Self::rgb(1.0, 0.0, 0.0)
    }

    /// Opaque green
    pub const fn green() -> Self {
        Self::rgb(0.0, 1.0, 0.0)
    }

    /// Opaque blue
    pub const fn blue() -> Self {
        Self::rgb(0.0, 0.0, 1.0)
    }

    /// Opaque cyan
    pub const fn cyan() -> Self {
        Self::rgb(0.0, 1.0, 1.0)
    }

    /// Opaque magenta
    pub const fn magenta() -> Self {
        Self::rgb(1.0, 0.0, 1.0)
    }

    /// Opaque yellow
    pub const fn yellow() -> Self {
        Self::rgb(1.0, 1.0, 0.0)
    }

    /// Fully transparent black
    pub const fn transparent() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Convert to a 4D vector for renderer consumption
    pub fn to_vec4(self) -> Vec4 {
        Vec4::new(self.r, self.g, self.b, self.a)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::white()
    }
}

impl From<Vec4> for Color {
    fn from(v: Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}
