//! Model a color in the RGB model.

use crate::{
    color::{Color, Component},
    convert::xform_rgb_to_ryb,
    models::Ryb,
};

ryb_macros::gen_model! {
    /// A color in the red, green, blue model.
    pub struct Rgb {
        /// The red channel.
        red: Component,
        /// The green channel.
        green: Component,
        /// The blue channel.
        blue: Component,
    }
}

impl Rgb {
    /// Convert to the RYB model. The result is pushed halfway towards full
    /// chroma.
    pub fn to_ryb(&self) -> Ryb {
        let Color {
            red, green, blue, ..
        } = xform_rgb_to_ryb(self.red, self.green, self.blue);
        Ryb::new(red, green, blue)
    }
}

impl From<Color> for Rgb {
    fn from(value: Color) -> Self {
        Self::new(value.red, value.green, value.blue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn from_color_drops_alpha() {
        let rgb = Rgb::from(Color::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(rgb, Rgb::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn black_and_white() {
        assert_eq!(Rgb::new(0.0, 0.0, 0.0).to_ryb(), Ryb::new(0.0, 0.0, 0.0));
        assert_eq!(
            Rgb::new(255.0, 255.0, 255.0).to_ryb(),
            Ryb::new(255.0, 255.0, 255.0)
        );
    }

    #[test]
    fn yellow() {
        // Yellow is at a corner holding only the yellow channel, which is
        // pushed halfway towards its maximum.
        let ryb = Rgb::new(255.0, 255.0, 0.0).to_ryb();
        assert_component_eq!(ryb.red, 0.0);
        assert_component_eq!(ryb.yellow, 255.0 * (0.915 + 0.5 * (1.0 - 0.915)));
        assert_component_eq!(ryb.blue, 0.0);
    }
}
