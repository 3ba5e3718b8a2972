//! Model a color in the painter's RYB model.

use crate::{
    color::{Color, Component},
    convert::xform_ryb_to_rgb,
};

ryb_macros::gen_model! {
    /// A color in the red, yellow, blue model.
    pub struct Ryb {
        /// The red channel.
        red: Component,
        /// The yellow channel.
        yellow: Component,
        /// The blue channel.
        blue: Component,
    }
}

impl Ryb {
    /// Convert to an opaque RGB color.
    pub fn to_rgb(&self) -> Color {
        xform_ryb_to_rgb(self.red, self.yellow, self.blue)
    }
}
