//! A [`Color`] is a four channel value with red, green, blue and alpha
//! channels nominally in the 0..255 range.

use crate::math::{scale, Vector3};

#[cfg(not(feature = "f32"))]
/// A 64-bit floating point value that all channels are stored as.
pub type Component = f64;

#[cfg(feature = "f32")]
/// A 32-bit floating point value that all channels are stored as.
pub type Component = f32;

/// The largest value of a channel.
pub const CHANNEL_MAX: Component = 255.0;

/// A color with all four channels present. Channels are not clamped, so
/// operations are free to produce values outside of 0..255.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// The red channel.
    pub red: Component,
    /// The green channel.
    pub green: Component,
    /// The blue channel.
    pub blue: Component,
    /// The alpha channel.
    pub alpha: Component,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Color = Color::opaque(CHANNEL_MAX, CHANNEL_MAX, CHANNEL_MAX);

    /// Opaque black.
    pub const BLACK: Color = Color::opaque(0.0, 0.0, 0.0);

    /// Create a new [`Color`] from all four channels.
    pub const fn new(red: Component, green: Component, blue: Component, alpha: Component) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Create a new [`Color`] with full opacity.
    pub const fn opaque(red: Component, green: Component, blue: Component) -> Self {
        Self::new(red, green, blue, CHANNEL_MAX)
    }

    /// Create an opaque color from a vector with components in the unit
    /// interval.
    pub fn from_vector(value: Vector3) -> Self {
        let Vector3 { x, y, z, .. } = scale(value, CHANNEL_MAX);
        Self::opaque(x, y, z)
    }

    /// Return the red, green and blue channels divided by 255.
    pub fn to_unit_vector(&self) -> Vector3 {
        Vector3::new(
            self.red / CHANNEL_MAX,
            self.green / CHANNEL_MAX,
            self.blue / CHANNEL_MAX,
        )
    }

    /// Return true if the red, green and blue channels are all exactly zero.
    pub fn is_black(&self) -> bool {
        self.red == 0.0 && self.green == 0.0 && self.blue == 0.0
    }

    /// Round and clamp the channels to bytes, suitable for display.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let byte = |value: Component| value.round().clamp(0.0, CHANNEL_MAX) as u8;
        [
            byte(self.red),
            byte(self.green),
            byte(self.blue),
            byte(self.alpha),
        ]
    }
}

impl From<[u8; 4]> for Color {
    fn from(value: [u8; 4]) -> Self {
        let [red, green, blue, alpha] = value.map(Component::from);
        Self::new(red, green, blue, alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_color_with_correct_channels() {
        let c = Color::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(c.red, 10.0);
        assert_eq!(c.green, 20.0);
        assert_eq!(c.blue, 30.0);
        assert_eq!(c.alpha, 40.0);

        let c = Color::opaque(10.0, 20.0, 30.0);
        assert_eq!(c.alpha, 255.0);
    }

    #[test]
    fn vector_conversions() {
        let c = Color::from_vector(Vector3::new(1.0, 0.5, 0.0));
        assert_eq!(c, Color::new(255.0, 127.5, 0.0, 255.0));

        let v = Color::new(255.0, 51.0, 0.0, 12.0).to_unit_vector();
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 0.2);
        assert_eq!(v.z, 0.0);
    }

    #[test]
    fn black_is_detected_regardless_of_alpha() {
        assert!(Color::BLACK.is_black());
        assert!(Color::new(0.0, 0.0, 0.0, 0.0).is_black());
        assert!(!Color::new(0.0, 0.0, 1.0, 255.0).is_black());
    }

    #[test]
    fn bytes_are_rounded_and_clamped() {
        let c = Color::new(-3.0, 127.5, 300.0, 254.6);
        assert_eq!(c.to_rgba8(), [0, 128, 255, 255]);
        assert_eq!(Color::from([1, 2, 3, 4]), Color::new(1.0, 2.0, 3.0, 4.0));
    }
}
