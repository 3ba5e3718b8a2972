//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};

use crate::color::Component;

/// A generic three component vector.
pub type Vector3 = Vector3D<Component>;

/// A linear transform applied to three components.
pub type Transform = Transform3D<Component>;

/// Component-wise sum of two vectors.
pub fn add(v1: Vector3, v2: Vector3) -> Vector3 {
    v1 + v2
}

/// Multiply every component of `v` by `scalar`.
pub fn scale(v: Vector3, scalar: Component) -> Vector3 {
    v * scalar
}

/// Interpolate from `v1` to `v2` by `amount`. Values of `amount` outside of
/// 0..1 extrapolate.
pub fn lerp(v1: Vector3, v2: Vector3, amount: Component) -> Vector3 {
    Vector3::new(
        v1.x + amount * (v2.x - v1.x),
        v1.y + amount * (v2.y - v1.y),
        v1.z + amount * (v2.z - v1.z),
    )
}

/// Build a [`Transform`] from a 3x3 matrix. Row `n` holds the weights of
/// input component `n` for each of the output components.
#[allow(clippy::too_many_arguments)]
pub const fn transform_3x3(
    m11: Component,
    m12: Component,
    m13: Component,
    m21: Component,
    m22: Component,
    m23: Component,
    m31: Component,
    m32: Component,
    m33: Component,
) -> Transform {
    Transform::new(
        m11, m12, m13, 0.0, //
        m21, m22, m23, 0.0, //
        m31, m32, m33, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Multiply the given matrix in `transform` with the vector.
pub fn transform(transform: &Transform, v: Vector3) -> Vector3 {
    transform.transform_vector3d(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_scale() {
        let v = add(Vector3::new(1.0, 2.0, 3.0), Vector3::new(0.5, -2.0, 1.0));
        assert_eq!(v, Vector3::new(1.5, 0.0, 4.0));

        let v = scale(Vector3::new(1.0, -2.0, 0.25), 4.0);
        assert_eq!(v, Vector3::new(4.0, -8.0, 1.0));
    }

    #[test]
    fn lerp_extrapolates() {
        let a = Vector3::new(0.0, 1.0, 2.0);
        let b = Vector3::new(2.0, 3.0, 6.0);
        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
        assert_eq!(lerp(a, b, 0.5), Vector3::new(1.0, 2.0, 4.0));
        assert_eq!(lerp(a, b, 2.0), Vector3::new(4.0, 5.0, 10.0));
        assert_eq!(lerp(a, b, -1.0), Vector3::new(-2.0, -1.0, -2.0));
    }

    #[test]
    fn transform_uses_rows_as_input_weights() {
        #[rustfmt::skip]
        const T: Transform = transform_3x3(
            1.0, 0.0, 2.0,
            0.0, 1.0, 0.0,
            0.0, 3.0, 1.0,
        );
        let v = transform(&T, Vector3::new(1.0, 2.0, 4.0));
        assert_eq!(v, Vector3::new(1.0, 14.0, 6.0));
    }
}
