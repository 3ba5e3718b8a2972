//! Simulation of color vision deficiencies.

use crate::{
    color::Color,
    math::{transform, transform_3x3, Transform, Vector3},
};

/// The kinds of color vision that can be simulated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum ColorBlindness {
    /// Normal color vision.
    #[default]
    Normal = 0,
    /// Missing red cones.
    Protanopia = 1,
    /// Missing green cones.
    Deuteranopia = 2,
    /// Missing blue cones.
    Tritanopia = 3,
    /// No color vision, only luminance.
    Achromatopsia = 4,
}

#[rustfmt::skip]
const PROTANOPIA: Transform = transform_3x3(
    0.567, 0.558, 0.000,
    0.433, 0.442, 0.242,
    0.000, 0.000, 0.758,
);

#[rustfmt::skip]
const DEUTERANOPIA: Transform = transform_3x3(
    0.625, 0.700, 0.000,
    0.375, 0.300, 0.300,
    0.000, 0.000, 0.700,
);

#[rustfmt::skip]
const TRITANOPIA: Transform = transform_3x3(
    0.950, 0.000, 0.000,
    0.050, 0.433, 0.475,
    0.000, 0.567, 0.525,
);

#[rustfmt::skip]
const ACHROMATOPSIA: Transform = transform_3x3(
    0.299, 0.299, 0.299,
    0.587, 0.587, 0.587,
    0.114, 0.114, 0.114,
);

impl ColorBlindness {
    /// Map an integer tag to a kind. Unknown tags are treated as normal
    /// vision.
    pub fn from_tag(tag: u8) -> Self {
        match tag {
            1 => Self::Protanopia,
            2 => Self::Deuteranopia,
            3 => Self::Tritanopia,
            4 => Self::Achromatopsia,
            _ => Self::Normal,
        }
    }

    fn matrix(&self) -> Option<&'static Transform> {
        match self {
            Self::Normal => None,
            Self::Protanopia => Some(&PROTANOPIA),
            Self::Deuteranopia => Some(&DEUTERANOPIA),
            Self::Tritanopia => Some(&TRITANOPIA),
            Self::Achromatopsia => Some(&ACHROMATOPSIA),
        }
    }
}

impl From<u8> for ColorBlindness {
    fn from(value: u8) -> Self {
        Self::from_tag(value)
    }
}

impl Color {
    /// Return this color as it would be perceived with the given kind of
    /// color vision. Alpha is left untouched.
    pub fn simulate(&self, kind: ColorBlindness) -> Color {
        let Some(matrix) = kind.matrix() else {
            return *self;
        };

        let Vector3 { x, y, z, .. } =
            transform(matrix, Vector3::new(self.red, self.green, self.blue));
        Color::new(x, y, z, self.alpha)
    }
}

/// Simulate color vision selected by an integer tag: 0 normal, 1 protanopia,
/// 2 deuteranopia, 3 tritanopia and 4 achromatopsia.
pub fn color_blind_transform(input: &Color, kind: u8) -> Color {
    input.simulate(ColorBlindness::from_tag(kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    const SAMPLES: [Color; 4] = [
        Color::new(255.0, 0.0, 0.0, 255.0),
        Color::new(10.0, 200.0, 30.0, 12.0),
        Color::new(0.0, 0.0, 0.0, 0.0),
        Color::new(300.0, -20.0, 128.0, 255.0),
    ];

    #[test]
    fn normal_vision_is_identity() {
        for c in SAMPLES {
            assert_eq!(color_blind_transform(&c, 0), c);
        }
    }

    #[test]
    fn unknown_tags_are_identity() {
        for c in SAMPLES {
            assert_eq!(color_blind_transform(&c, 5), c);
            assert_eq!(color_blind_transform(&c, 255), c);
        }
    }

    #[test]
    fn tags_map_to_kinds() {
        assert_eq!(ColorBlindness::from(0), ColorBlindness::Normal);
        assert_eq!(ColorBlindness::from(1), ColorBlindness::Protanopia);
        assert_eq!(ColorBlindness::from(2), ColorBlindness::Deuteranopia);
        assert_eq!(ColorBlindness::from(3), ColorBlindness::Tritanopia);
        assert_eq!(ColorBlindness::from(4), ColorBlindness::Achromatopsia);
        assert_eq!(ColorBlindness::from(9), ColorBlindness::Normal);
        assert_eq!(ColorBlindness::Tritanopia as u8, 3);
    }

    #[test]
    fn protanopia() {
        let c = color_blind_transform(&Color::new(100.0, 200.0, 50.0, 7.0), 1);
        assert_component_eq!(c.red, 100.0 * 0.567 + 200.0 * 0.433);
        assert_component_eq!(c.green, 100.0 * 0.558 + 200.0 * 0.442);
        assert_component_eq!(c.blue, 200.0 * 0.242 + 50.0 * 0.758);
        assert_eq!(c.alpha, 7.0);
    }

    #[test]
    fn deuteranopia() {
        let c = color_blind_transform(&Color::new(100.0, 200.0, 50.0, 7.0), 2);
        assert_component_eq!(c.red, 137.5);
        assert_component_eq!(c.green, 130.0);
        assert_component_eq!(c.blue, 95.0);
        assert_eq!(c.alpha, 7.0);
    }

    #[test]
    fn tritanopia() {
        let c = color_blind_transform(&Color::new(100.0, 200.0, 50.0, 7.0), 3);
        assert_component_eq!(c.red, 105.0);
        assert_component_eq!(c.green, 200.0 * 0.433 + 50.0 * 0.567);
        assert_component_eq!(c.blue, 200.0 * 0.475 + 50.0 * 0.525);
        assert_eq!(c.alpha, 7.0);
    }

    #[test]
    fn achromatopsia_is_gray() {
        for c in SAMPLES {
            let gray = c.simulate(ColorBlindness::Achromatopsia);
            assert_eq!(gray.red, gray.green);
            assert_eq!(gray.green, gray.blue);
            assert_eq!(gray.alpha, c.alpha);
        }

        let gray = Color::opaque(255.0, 255.0, 255.0).simulate(ColorBlindness::Achromatopsia);
        assert_component_eq!(gray.red, 255.0);
    }
}
