//! Apex-up triangles.
//!
//! The centered builders put `(x, y)` a third of the height above the base
//! midpoint. For an equilateral triangle that is its centroid; for an
//! isosceles one it only approximates it. The `_aligned_left` / `_aligned_right`
//! variants anchor on the bottom-left / bottom-right corner and
//! `_aligned_top` anchors on the base one full height below `(x, y)`.

use crate::io::PathData;
use crate::primitives::{half, Scalar};

fn third<F: Scalar>(value: F) -> F {
    value / F::from(3).unwrap_or_else(F::nan)
}

// `PI / 3` rather than `FRAC_PI_3`: the two differ in the last bit.
fn equilateral_height<F: Scalar>(length: F) -> F {
    third(F::PI()).sin() * length
}

/// Base from `start` running right by `bottom`, then up to the apex.
fn from_base_left<F: Scalar>(start_x: F, start_y: F, bottom: F, height: F) -> String {
    let mut path = PathData::new();
    path.move_to(start_x, start_y)
        .line_by(bottom, F::zero())
        .line_by(-half(bottom), -height)
        .close();
    path.to_string()
}

/// Equilateral triangle with side `length`, centered on `(x, y)`.
///
/// ```
/// use shapepath::triangle;
///
/// let path = triangle::equilateral(0.0, 0.0, 30.0);
/// assert!(path.starts_with("M-15 8.66"));
/// assert!(path.contains("l30 0l-15 -25.98"));
/// ```
pub fn equilateral<F: Scalar>(x: F, y: F, length: F) -> String {
    isosceles(x, y, length, equilateral_height(length))
}

/// Isosceles triangle with base `bottom` and height `height`, centered on `(x, y)`.
pub fn isosceles<F: Scalar>(x: F, y: F, bottom: F, height: F) -> String {
    from_base_left(x - half(bottom), y + third(height), bottom, height)
}

/// [`equilateral`] with `(x, y)` on the bottom-left corner.
pub fn equilateral_aligned_left<F: Scalar>(x: F, y: F, length: F) -> String {
    isosceles_aligned_left(x, y, length, equilateral_height(length))
}

/// [`equilateral`] with `(x, y)` on the apex.
pub fn equilateral_aligned_top<F: Scalar>(x: F, y: F, length: F) -> String {
    isosceles_aligned_top(x, y, length, equilateral_height(length))
}

/// [`equilateral`] with `(x, y)` on the bottom-right corner.
pub fn equilateral_aligned_right<F: Scalar>(x: F, y: F, length: F) -> String {
    isosceles_aligned_right(x, y, length, equilateral_height(length))
}

/// [`isosceles`] with `(x, y)` on the bottom-left corner.
pub fn isosceles_aligned_left<F: Scalar>(x: F, y: F, bottom: F, height: F) -> String {
    from_base_left(x, y, bottom, height)
}

/// [`isosceles`] with `(x, y)` on the apex.
pub fn isosceles_aligned_top<F: Scalar>(x: F, y: F, bottom: F, height: F) -> String {
    from_base_left(x - half(bottom), y + height, bottom, height)
}

/// [`isosceles`] with `(x, y)` on the bottom-right corner.
pub fn isosceles_aligned_right<F: Scalar>(x: F, y: F, bottom: F, height: F) -> String {
    from_base_left(x - bottom, y, bottom, height)
}
