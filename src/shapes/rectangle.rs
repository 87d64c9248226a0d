//! Rectangles, rounded rectangles, diamonds and parallelograms.
//!
//! Plain builders are centered on `(x, y)`; the `_aligned` variants treat
//! `(x, y)` as the top-left corner of the bounding box.
//!
//! # Example
//!
//! ```
//! use shapepath::{rectangle, Radius4};
//!
//! assert_eq!(rectangle::basic(300.0, 300.0, 200.0, 100.0), "M200 250l200 0l0 100l-200 0Z");
//!
//! // only the top corners are rounded
//! let tab = rectangle::round(0.0, 0.0, 40.0, 20.0, Radius4 {
//!     top_left: 4.0,
//!     top_right: 4.0,
//!     ..Radius4::default()
//! });
//! assert!(tab.starts_with("M-16 -10l32 0a4 4 0 0 1 4 4"));
//! ```

use crate::io::PathData;
use crate::primitives::{half, Radius4, Scalar};

/// Axis-aligned rectangle centered on `(x, y)`.
pub fn basic<F: Scalar>(x: F, y: F, width: F, height: F) -> String {
    let zero = F::zero();
    let mut path = PathData::new();
    path.move_to(x - half(width), y - half(height))
        .line_by(width, zero)
        .line_by(zero, height)
        .line_by(-width, zero)
        .close();
    path.to_string()
}

/// Rounded rectangle centered on `(x, y)`.
///
/// `radius` is either one number for all corners or a [`Radius4`]. Each
/// corner is limited to half the shorter side; the caller's value is not
/// modified. Edges and arcs run clockwise from the top edge.
pub fn round<F: Scalar>(x: F, y: F, width: F, height: F, radius: impl Into<Radius4<F>>) -> String {
    let r = radius.into().clamped(half(width.min(height)));
    let zero = F::zero();

    let mut path = PathData::new();
    path.move_to(x - half(width) + r.top_left, y - half(height))
        .line_by(width - r.top_right - r.top_left, zero)
        .arc_by(r.top_right, r.top_right, false, true, r.top_right, r.top_right)
        .line_by(zero, height - r.top_right - r.bottom_right)
        .arc_by(r.bottom_right, r.bottom_right, false, true, -r.bottom_right, r.bottom_right)
        .line_by(r.bottom_left + r.bottom_right - width, zero)
        .arc_by(r.bottom_left, r.bottom_left, false, true, -r.bottom_left, -r.bottom_left)
        .line_by(zero, r.top_left + r.bottom_left - height)
        .arc_by(r.top_left, r.top_left, false, true, r.top_left, -r.top_left)
        .close();
    path.to_string()
}

/// Rhombus through the four edge midpoints of the bounding box, centered on `(x, y)`.
pub fn diamond<F: Scalar>(x: F, y: F, width: F, height: F) -> String {
    let rx = half(width);
    let ry = half(height);
    let mut path = PathData::new();
    path.move_to(x - rx, y)
        .line_by(rx, ry)
        .line_by(rx, -ry)
        .line_by(-rx, -ry)
        .close();
    path.to_string()
}

/// Rectangle whose bottom edge is shifted right by `offset` (left when
/// negative), centered on `(x, y)` within its bounding box.
pub fn parallelogram<F: Scalar>(x: F, y: F, width: F, height: F, offset: F) -> String {
    let zero = F::zero();
    let mut path = PathData::new();
    path.move_to(x - half(width + offset), y - half(height))
        .line_by(width, zero)
        .line_by(offset, height)
        .line_by(-width, zero)
        .close();
    path.to_string()
}

/// [`basic`] anchored at the top-left corner.
pub fn basic_aligned<F: Scalar>(x: F, y: F, width: F, height: F) -> String {
    basic(x + half(width), y + half(height), width, height)
}

/// [`round`] anchored at the top-left corner.
pub fn round_aligned<F: Scalar>(
    x: F,
    y: F,
    width: F,
    height: F,
    radius: impl Into<Radius4<F>>,
) -> String {
    round(x + half(width), y + half(height), width, height, radius)
}

/// [`diamond`] anchored at the top-left corner of its bounding box.
pub fn diamond_aligned<F: Scalar>(x: F, y: F, width: F, height: F) -> String {
    diamond(x + half(width), y + half(height), width, height)
}

/// [`diamond`] with `(x, y)` on its top vertex.
pub fn diamond_aligned_top<F: Scalar>(x: F, y: F, width: F, height: F) -> String {
    diamond(x, y + half(height), width, height)
}

/// [`diamond`] with `(x, y)` on its left vertex.
pub fn diamond_aligned_left<F: Scalar>(x: F, y: F, width: F, height: F) -> String {
    diamond(x + half(width), y, width, height)
}

/// [`parallelogram`] anchored at the top-left corner of its bounding box.
pub fn parallelogram_aligned<F: Scalar>(x: F, y: F, width: F, height: F, offset: F) -> String {
    parallelogram(
        x + half(width + offset.abs()),
        y + half(height),
        width,
        height,
        offset,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Offset drawn by the final `Z`: from the end of the last relative
    /// `l` / `a` command back to the starting `M`.
    fn closing_edge(path: &str) -> (f64, f64) {
        let mut end = (0.0, 0.0);
        for chunk in path.split(|c: char| c == 'l' || c == 'a').skip(1) {
            let nums: Vec<f64> = chunk
                .trim_end_matches('Z')
                .split(' ')
                .map(|s| s.parse().unwrap())
                .collect();
            let n = nums.len();
            end.0 += nums[n - 2];
            end.1 += nums[n - 1];
        }
        (-end.0, -end.1)
    }

    /// Radii of every arc command.
    fn arc_radii(path: &str) -> Vec<f64> {
        path.split('a')
            .skip(1)
            .map(|chunk| chunk.split(' ').next().unwrap().parse().unwrap())
            .collect()
    }

    #[test]
    fn test_basic() {
        let path = basic(300.0, 300.0, 200.0, 100.0);
        assert_eq!(path, "M200 250l200 0l0 100l-200 0Z");
        // three explicit sides; `Z` draws the left one
        assert!(path.ends_with('Z'));
        assert_eq!(closing_edge(&path), (0.0, -100.0));
    }

    #[test]
    fn test_basic_closes_for_odd_sizes() {
        let path = basic(1.5, -2.0, 7.25, 3.5);
        assert!(path.starts_with("M-2.125 -3.75"));
        assert_eq!(closing_edge(&path), (0.0, -3.5));
    }

    #[test]
    fn test_round_fixture() {
        let path = round(300.0, 300.0, 200.0, 100.0, 20.0_f64);
        assert_eq!(
            path,
            "M220 250l160 0a20 20 0 0 1 20 20l0 60a20 20 0 0 1 -20 20\
             l-160 0a20 20 0 0 1 -20 -20l0 -60a20 20 0 0 1 20 -20Z"
        );
        assert_eq!(path.matches('a').count(), 4);
        assert!(path.ends_with('Z'));
    }

    #[test]
    fn test_round_number_equals_uniform_radius4() {
        for r in [0.0_f64, 3.0, 20.0, 49.5, 50.0, 75.0] {
            assert_eq!(
                round(10.0, 20.0, 200.0, 100.0, r),
                round(10.0, 20.0, 200.0, 100.0, Radius4::uniform(r))
            );
        }
    }

    #[test]
    fn test_round_clamps_to_half_short_side() {
        for r in [10.0_f64, 50.0, 51.0, 500.0] {
            let path = round(0.0, 0.0, 200.0, 100.0, r);
            for radius in arc_radii(&path) {
                assert!(radius <= 50.0, "radius {} exceeds 50 in {}", radius, path);
            }
            assert_eq!(closing_edge(&path), (0.0, 0.0));
        }
    }

    #[test]
    fn test_round_mixed_corners() {
        let r = Radius4::new(5.0, 80.0, 0.0, 10.0);
        let path = round(0.0, 0.0, 200.0, 100.0, r);
        assert_eq!(arc_radii(&path), vec![50.0, 10.0, 0.0, 5.0]);
        assert_eq!(closing_edge(&path), (0.0, 0.0));
        // the caller's radii are reusable as given
        assert_eq!(r, Radius4::new(5.0, 80.0, 0.0, 10.0));
    }

    #[test]
    fn test_round_nan_corner_counts_as_zero() {
        let r = Radius4::new(f64::NAN, 10.0, 10.0, 10.0);
        let path = round(0.0, 0.0, 100.0, 100.0, r);
        assert!(path.starts_with("M-50 -50l90 0"));
        assert!(!path.contains("NaN"));
    }

    #[test]
    fn test_diamond() {
        assert_eq!(
            diamond(300.0, 300.0, 200.0, 100.0),
            "M200 300l100 50l100 -50l-100 -50Z"
        );
    }

    #[test]
    fn test_parallelogram() {
        assert_eq!(
            parallelogram(300.0, 300.0, 200.0, 100.0, 30.0),
            "M185 250l200 0l30 100l-200 0Z"
        );
    }

    #[test]
    fn test_parallelogram_negative_offset_is_symmetric() {
        // bounding box spans 300 +/- 115 for either sign
        let path = parallelogram(300.0, 300.0, 200.0, 100.0, -30.0);
        assert_eq!(path, "M215 250l200 0l-30 100l-200 0Z");
    }

    #[test]
    fn test_aligned_variants() {
        assert_eq!(basic_aligned(0.0, 0.0, 200.0, 100.0), "M0 0l200 0l0 100l-200 0Z");
        assert!(round_aligned(0.0, 0.0, 200.0, 100.0, 20.0_f64).starts_with("M20 0"));
        assert_eq!(
            diamond_aligned(0.0, 0.0, 200.0, 100.0),
            diamond(100.0, 50.0, 200.0, 100.0)
        );
        assert_eq!(
            diamond_aligned_top(0.0, 0.0, 200.0, 100.0),
            diamond(0.0, 50.0, 200.0, 100.0)
        );
        assert_eq!(
            diamond_aligned_left(0.0, 0.0, 200.0, 100.0),
            diamond(100.0, 0.0, 200.0, 100.0)
        );
    }

    #[test]
    fn test_parallelogram_aligned() {
        assert_eq!(
            parallelogram_aligned(0.0, 0.0, 200.0, 100.0, 30.0),
            "M0 0l200 0l30 100l-200 0Z"
        );
        // with a negative offset the bottom-left corner touches x = 0
        assert_eq!(
            parallelogram_aligned(0.0, 0.0, 200.0, 100.0, -30.0),
            "M30 0l200 0l-30 100l-200 0Z"
        );
    }

    #[test]
    fn test_repeatable() {
        let r = Radius4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(
            round_aligned(5.0, 5.0, 50.0, 30.0, r),
            round_aligned(5.0, 5.0, 50.0, 30.0, r)
        );
    }
}
