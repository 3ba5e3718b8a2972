//! Saturation and brightness adjustments.

use crate::{
    color::{Color, Component, CHANNEL_MAX},
    math::{lerp, scale, Vector3},
    mix::color_mix,
};

/// Saturation changes smaller than this can not change an 8-bit channel.
const MIN_SATURATION: Component = 0.004;

impl Color {
    /// Move this color towards full chroma (`sat > 0`) or towards the gray of
    /// its channel average (`sat < 0`). `sat` is expected in -1..1.
    ///
    /// Imperceptible changes and black are returned unchanged, otherwise the
    /// result is opaque.
    pub fn saturate(&self, sat: Component) -> Color {
        if sat.abs() < MIN_SATURATION {
            return *self;
        }
        // Black can not be normalized by its largest channel.
        if self.is_black() {
            return *self;
        }

        let mut clerp = self.to_unit_vector();

        if sat > 0.0 {
            let mx = self.red.max(self.green).max(self.blue) / CHANNEL_MAX;
            let max_sat = scale(clerp, 1.0 / mx);
            clerp = lerp(clerp, max_sat, sat);
        }

        if sat < 0.0 {
            let avg = (self.red + self.green + self.blue) / (3.0 * CHANNEL_MAX);
            let gray = Vector3::new(avg, avg, avg);
            clerp = lerp(clerp, gray, -sat);
        }

        Color::from_vector(clerp)
    }

    /// Blend this color towards white (`bright > 0`) or black (`bright < 0`)
    /// with the quadratic mean mix.
    pub fn brighten(&self, bright: Component) -> Color {
        if bright > 0.0 {
            color_mix(self, &Color::WHITE, bright)
        } else if bright < 0.0 {
            color_mix(self, &Color::BLACK, -bright)
        } else {
            *self
        }
    }
}
