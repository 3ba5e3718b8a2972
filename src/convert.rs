//! Conversion between the painter's RYB model and RGB.
//!
//! Both directions interpolate trilinearly between the eight corners of the
//! unit cube. The corners were tuned by hand to approximate an artist's color
//! wheel, and each direction has its own table. The two transforms are not
//! exact inverses of each other.

use bitflags::bitflags;

use crate::{
    color::{Color, Component, CHANNEL_MAX},
    math::{add, scale, Vector3},
};

bitflags! {
    /// Identifies a corner of the unit cube. A set bit means the channel for
    /// that axis is at its maximum.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Corner : u8 {
        /// The first axis (red for both directions).
        const FIRST = 0b100;
        /// The second axis (yellow for RYB input, green for RGB input).
        const SECOND = 0b010;
        /// The third axis (blue for both directions).
        const THIRD = 0b001;
    }
}

/// The values of the eight corners of the unit cube, indexed by the bit
/// pattern of a [`Corner`].
#[derive(Clone, Debug, PartialEq)]
pub struct CornerTable([Vector3; 8]);

impl CornerTable {
    /// Return the value stored for the given corner.
    pub fn corner(&self, corner: Corner) -> Vector3 {
        self.0[corner.bits() as usize]
    }

    /// Trilinear interpolation of the corners at the given position, with each
    /// coordinate in the unit interval. Edges are blended along the first
    /// axis, then the second and finally the third.
    pub fn interpolate(&self, first: Component, second: Component, third: Component) -> Vector3 {
        use Corner as C;

        let edge = |lo: Corner, t: Component| {
            add(
                scale(self.corner(lo), 1.0 - t),
                scale(self.corner(lo | C::FIRST), t),
            )
        };

        let c00 = edge(C::empty(), first);
        let c01 = edge(C::THIRD, first);
        let c10 = edge(C::SECOND, first);
        let c11 = edge(C::SECOND | C::THIRD, first);

        let c0 = add(scale(c00, 1.0 - second), scale(c10, second));
        let c1 = add(scale(c01, 1.0 - second), scale(c11, second));

        add(scale(c0, 1.0 - third), scale(c1, third))
    }
}

/// Corners of the RYB cube expressed in RGB.
#[rustfmt::skip]
pub const RYB_TO_RGB: CornerTable = CornerTable([
    Vector3::new(0.0, 0.0,  0.0), // 000 black
    Vector3::new(0.0, 0.36, 1.0), // 001 blue, a little green avoids a flat spectrum around blue
    Vector3::new(0.9, 0.9,  0.0), // 010 yellow
    Vector3::new(0.0, 0.9,  0.2), // 011 green, toned down so it doesn't dominate
    Vector3::new(1.0, 0.0,  0.0), // 100 red
    Vector3::new(0.6, 0.0,  1.0), // 101 purple
    Vector3::new(1.0, 0.6,  0.0), // 110 orange
    Vector3::new(1.0, 1.0,  1.0), // 111 white
]);

/// Corners of the RGB cube expressed in RYB.
#[rustfmt::skip]
pub const RGB_TO_RYB: CornerTable = CornerTable([
    Vector3::new(0.0,   0.0,   0.0),   // 000 black
    Vector3::new(0.07,  0.08,  0.893), // 001 blue
    Vector3::new(0.0,   0.714, 0.374), // 010 green
    Vector3::new(0.0,   0.116, 0.313), // 011 cyan, kept dark
    Vector3::new(0.891, 0.0,   0.0),   // 100 red
    Vector3::new(0.554, 0.0,   0.1),   // 101 magenta, kept dark
    Vector3::new(0.0,   0.915, 0.0),   // 110 yellow
    Vector3::new(1.0,   1.0,   1.0),   // 111 white
]);

/// The saturation boost applied to the result of [`xform_rgb_to_ryb`].
pub const RGB_TO_RYB_SATURATION: Component = 0.5;

/// Convert RYB channels (0..255) to an opaque RGB color.
pub fn xform_ryb_to_rgb(red: Component, yellow: Component, blue: Component) -> Color {
    let c = RYB_TO_RGB.interpolate(red / CHANNEL_MAX, yellow / CHANNEL_MAX, blue / CHANNEL_MAX);
    Color::from_vector(c)
}

/// Convert RGB channels (0..255) to RYB. The red, yellow and blue values are
/// returned in the red, green and blue channels of the color.
pub fn xform_rgb_to_ryb(red: Component, green: Component, blue: Component) -> Color {
    let c = RGB_TO_RYB.interpolate(red / CHANNEL_MAX, green / CHANNEL_MAX, blue / CHANNEL_MAX);
    Color::from_vector(c).saturate(RGB_TO_RYB_SATURATION)
}
