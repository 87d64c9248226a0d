//! Circles and ellipses drawn as two half arcs.
//!
//! Path data has no full-circle command, so each shape starts on its right
//! edge and sweeps two complementary 180° arcs.
//!
//! Note that [`ellipse`] takes its `width` and `height` as the two *radii*,
//! not as diameters: `ellipse(x, y, 10, 5)` is 20 wide and 10 tall.

use crate::io::PathData;
use crate::primitives::{twice, Scalar};

/// Full circle centered on `(x, y)`.
///
/// Not validated: a zero or negative radius renders a degenerate path.
pub fn basic<F: Scalar>(x: F, y: F, radius: F) -> String {
    two_arcs(x, y, radius, radius)
}

/// Full ellipse centered on `(x, y)` with horizontal radius `width` and
/// vertical radius `height`.
pub fn ellipse<F: Scalar>(x: F, y: F, width: F, height: F) -> String {
    two_arcs(x, y, width, height)
}

/// [`basic`] with `(x, y)` on the circle's left edge.
pub fn basic_aligned_left<F: Scalar>(x: F, y: F, radius: F) -> String {
    basic(x + radius, y, radius)
}

/// [`basic`] with `(x, y)` on the circle's top edge.
pub fn basic_aligned_top<F: Scalar>(x: F, y: F, radius: F) -> String {
    basic(x, y + radius, radius)
}

/// [`ellipse`] with `(x, y)` on the ellipse's left edge.
pub fn ellipse_aligned_left<F: Scalar>(x: F, y: F, width: F, height: F) -> String {
    ellipse(x + width, y, width, height)
}

/// [`ellipse`] with `(x, y)` on the ellipse's top edge.
pub fn ellipse_aligned_top<F: Scalar>(x: F, y: F, width: F, height: F) -> String {
    ellipse(x, y + height, width, height)
}

fn two_arcs<F: Scalar>(x: F, y: F, rx: F, ry: F) -> String {
    let span = twice(rx);
    let mut path = PathData::new();
    path.move_to(x + rx, y)
        .arc_by(rx, ry, true, false, -span, F::zero())
        .arc_by(rx, ry, true, false, span, F::zero());
    path.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        assert_eq!(
            basic(20.0, 10.0, 30.0),
            "M50 10a30 30 0 1 0 -60 0a30 30 0 1 0 60 0"
        );
    }

    #[test]
    fn test_basic_zero_radius_still_renders() {
        assert_eq!(basic(1.0, 2.0, 0.0), "M1 2a0 0 0 1 0 0 0a0 0 0 1 0 0 0");
    }

    #[test]
    fn test_ellipse_uses_radii() {
        assert_eq!(
            ellipse(0.0, 0.0, 10.0, 5.0),
            "M10 0a10 5 0 1 0 -20 0a10 5 0 1 0 20 0"
        );
    }

    #[test]
    fn test_circle_matches_round_ellipse() {
        for r in [0.5, 1.0, 7.25, 30.0, 1e4] {
            assert_eq!(basic(3.0, -4.0, r), ellipse(3.0, -4.0, r, r));
        }
    }

    #[test]
    fn test_aligned() {
        assert_eq!(basic_aligned_left(0.0, 0.0, 5.0), basic(5.0, 0.0, 5.0));
        assert_eq!(basic_aligned_top(0.0, 0.0, 5.0), basic(0.0, 5.0, 5.0));
        assert_eq!(
            ellipse_aligned_left(0.0, 0.0, 10.0, 4.0),
            ellipse(10.0, 0.0, 10.0, 4.0)
        );
        assert_eq!(
            ellipse_aligned_top(0.0, 0.0, 10.0, 4.0),
            ellipse(0.0, 4.0, 10.0, 4.0)
        );
    }

    #[test]
    fn test_aligned_left_starts_at_far_edge() {
        assert!(basic_aligned_left(0.0, 0.0, 5.0).starts_with("M10 0"));
    }
}
