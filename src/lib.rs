//! ryb converts between a painter's red, yellow, blue color model and RGB,
//! samples a painter's color wheel and provides perceptual color adjustments
//! and mixing.
//!
//! All operations are pure functions over [`Color`] values.
//!
//! ```rust
//! use ryb::{map2, Color};
//! let red = map2(0.0).saturate(0.0).brighten(0.0);
//! assert_eq!(red, Color::opaque(255.0, 0.0, 0.0));
//! ```

#![deny(missing_docs)]

mod adjust;
mod color;
mod convert;
pub mod math;
mod mix;
pub mod models;
mod vision;
mod wheel;

#[cfg(test)]
mod test;

pub use color::{Color, Component, CHANNEL_MAX};
pub use convert::{
    xform_rgb_to_ryb, xform_ryb_to_rgb, Corner, CornerTable, RGB_TO_RYB, RGB_TO_RYB_SATURATION,
    RYB_TO_RGB,
};
pub use mix::{color_distance, color_inv, color_mix, color_mix_lin, color_mix_sub};
pub use vision::{color_blind_transform, ColorBlindness};
pub use wheel::{map2, step2, wheel, MIN_WHEEL_STEP};

/// Saturate a color, see [`Color::saturate`].
pub fn saturate(color: &Color, amount: Component) -> Color {
    color.saturate(amount)
}

/// Brighten or darken a color, see [`Color::brighten`].
pub fn brighten(color: &Color, amount: Component) -> Color {
    color.brighten(amount)
}
