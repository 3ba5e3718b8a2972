//! Mixing two colors together.

use num_traits::Float;

use crate::color::{Color, Component, CHANNEL_MAX};

/// Blend by `(1 - t) * a + t * b`.
fn blend<T: Float>(a: T, b: T, t: T) -> T {
    (T::one() - t) * a + t * b
}

/// Blend the squares of the values and take the root.
fn quadratic_blend<T: Float>(a: T, b: T, t: T) -> T {
    ((T::one() - t) * (a * a) + t * (b * b)).sqrt()
}

/// Mix two colors by the quadratic mean of their channels. This is closer to
/// how light adds up than a linear mix. Alpha is mixed linearly.
pub fn color_mix(a: &Color, b: &Color, t: Component) -> Color {
    Color::new(
        quadratic_blend(a.red, b.red, t),
        quadratic_blend(a.green, b.green, t),
        quadratic_blend(a.blue, b.blue, t),
        blend(a.alpha, b.alpha, t),
    )
}

/// Mix two colors linearly, including alpha.
pub fn color_mix_lin(a: &Color, b: &Color, t: Component) -> Color {
    Color::new(
        blend(a.red, b.red, t),
        blend(a.green, b.green, t),
        blend(a.blue, b.blue, t),
        blend(a.alpha, b.alpha, t),
    )
}

/// The opaque inverse of a color.
pub fn color_inv(input: &Color) -> Color {
    Color::opaque(
        CHANNEL_MAX - input.red,
        CHANNEL_MAX - input.green,
        CHANNEL_MAX - input.blue,
    )
}

/// Euclidean distance between two colors, scaled so that black to white is 1.
pub fn color_distance(a: &Color, b: &Color) -> Component {
    let dr = a.red - b.red;
    let dg = a.green - b.green;
    let db = a.blue - b.blue;
    let d = dr * dr + dg * dg + db * db;
    d.sqrt() / ((3.0 as Component).sqrt() * CHANNEL_MAX)
}

/// Mix two colors like paint.
///
/// A linear mix of two distant colors looks too bright. The linear mix is
/// pulled towards the subtractive combination of both colors (the inverses
/// added up and inverted again), by an amount that grows with the distance
/// between the colors and peaks when `t` is 0.5. The result is always opaque.
pub fn color_mix_sub(a: &Color, b: &Color, t: Component) -> Color {
    let c = color_inv(a);
    let d = color_inv(b);

    let f = Color::opaque(
        (CHANNEL_MAX - c.red - d.red).max(0.0),
        (CHANNEL_MAX - c.green - d.green).max(0.0),
        (CHANNEL_MAX - c.blue - d.blue).max(0.0),
    );

    let cd = 4.0 * t * (1.0 - t) * color_distance(a, b);

    Color {
        alpha: CHANNEL_MAX,
        ..color_mix_lin(&color_mix_lin(a, b, t), &f, cd)
    }
}
