//! Sampling hues around a painter's color wheel.

use crate::{
    color::{Color, Component, CHANNEL_MAX},
    convert::xform_ryb_to_rgb,
    math::Vector3,
};

/// One phase of the hue waveform. Returns a value in 0..1 for an angle in
/// degrees: full for 0..60, easing down to nothing over 60..120, nothing for
/// 120..240 and easing back up over 240..300.
pub fn step2(deg: Component) -> Component {
    debug_assert!(deg.is_finite(), "angle must be finite: {deg}");

    let mut deg = deg;
    while deg < 0.0 {
        deg += 360.0;
    }
    while deg > 360.0 {
        deg -= 360.0;
    }

    if deg <= 60.0 {
        1.0
    } else if deg <= 120.0 {
        let sc = (deg - 60.0) / 60.0;
        1.0 - 2.0 * sc / (1.0 + 3.0 * sc * sc).sqrt()
    } else if deg <= 240.0 {
        0.0
    } else if deg <= 300.0 {
        let sc = (deg - 240.0) / 60.0;
        2.0 * sc / (1.0 + 3.0 * sc * sc).sqrt()
    } else if deg <= 360.0 {
        1.0
    } else {
        // Only reachable with NaN.
        0.0
    }
}

/// The color at `deg` degrees around the wheel. Three copies of [`step2`],
/// each 120 degrees apart, are used as red, yellow and blue.
pub fn map2(deg: Component) -> Color {
    let out = Vector3::new(
        CHANNEL_MAX * step2(deg),
        CHANNEL_MAX * step2(deg - 120.0),
        CHANNEL_MAX * step2(deg - 240.0),
    );

    xform_ryb_to_rgb(out.x, out.y, out.z)
}

/// The smallest step accepted by [`wheel`], giving 360 000 samples.
pub const MIN_WHEEL_STEP: Component = 0.001;

/// Sample the wheel every `step` degrees starting at 0, adjusting each color
/// by `saturation` and then `brightness`. A step below [`MIN_WHEEL_STEP`] or
/// one that is not finite yields no samples.
pub fn wheel(step: Component, saturation: Component, brightness: Component) -> Vec<Color> {
    if !step.is_finite() || step < MIN_WHEEL_STEP {
        return Vec::new();
    }

    let mut colors = Vec::with_capacity((360.0 / step).ceil() as usize);
    let mut i: usize = 0;
    loop {
        let deg = i as Component * step;
        if deg >= 360.0 {
            break;
        }
        colors.push(map2(deg).saturate(saturation).brighten(brightness));
        i += 1;
    }
    colors
}
