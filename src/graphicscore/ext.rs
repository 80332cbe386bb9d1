//! `graphicscore::ext` hidden submodule supplies helper structs
//! that are used throughout `gizmo3d::graphicscore` module.
//!

use serde::{Deserialize, Serialize};

/// [`Color`] struct represents RGBA model of color.
///
/// # Example
/// ```rust
/// # use gizmo3d::graphicscore::Color;
/// let color: Color = Color { r: 1, g: 2, b: 3, a: 4 };
/// assert_eq!(Color::RED, Color { r: 255, g: 0, b: 0, a: 255 });
/// assert_eq!(Color::GREEN, Color { r: 0, g: 255, b: 0, a: 255 });
/// assert_eq!(Color::BLUE, Color { r: 0, g: 0, b: 255, a: 255 });
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Color {
    /// Red component of color.
    ///
    pub r: u8,

    /// Green component of color.
    ///
    pub g: u8,

    /// Blue component of color.
    ///
    pub b: u8,

    /// Alpha channel value of color.
    ///
    pub a: u8,
}
impl Color {
    /// Color that corresponds to white.
    ///
    pub const WHITE: Self = Color {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };
    /// Color that corresponds to black.
    ///
    pub const BLACK: Self = Color {
        r: 0,
        g: 0,
        b: 0,
        a: 255,
    };
    /// Color that corresponds to red.
    ///
    pub const RED: Self = Color {
        r: 255,
        g: 0,
        b: 0,
        a: 255,
    };
    /// Color that corresponds to green.
    ///
    pub const GREEN: Self = Color {
        r: 0,
        g: 255,
        b: 0,
        a: 255,
    };
    /// Color that corresponds to blue.
    ///
    pub const BLUE: Self = Color {
        r: 0,
        g: 0,
        b: 255,
        a: 255,
    };

    /// Initializes color from the packed `0xAARRGGBB` representation.
    ///
    /// # Example
    /// ```rust
    /// # use gizmo3d::graphicscore::Color;
    /// assert_eq!(Color::from_argb8888(0xff00ff00), Color::GREEN);
    /// ```
    ///
    pub const fn from_argb8888(value: u32) -> Self {
        Color {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
            a: (value >> 24) as u8,
        }
    }
    /// Returns the packed `0xAARRGGBB` representation of this color.
    ///
    /// # Example
    /// ```rust
    /// # use gizmo3d::graphicscore::Color;
    /// assert_eq!(Color::RED.to_argb8888(), 0xffff0000);
    /// ```
    ///
    pub const fn to_argb8888(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn argb8888_packing() {
        let color: Color = Color {
            r: 0x12,
            g: 0x34,
            b: 0x56,
            a: 0x78,
        };
        assert_eq!(color.to_argb8888(), 0x78123456);
        assert_eq!(Color::from_argb8888(0x78123456), color);

        assert_eq!(Color::WHITE.to_argb8888(), 0xffffffff);
        assert_eq!(Color::BLACK.to_argb8888(), 0xff000000);
        assert_eq!(Color::from_argb8888(0x00000000), Color::default());
    }
}
