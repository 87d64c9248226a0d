//! Quadratic and cubic Bézier paths.
//!
//! Point-sequence builders read their input as consecutive Bézier points:
//!
//! - [`quadratic`]: `p0, c1, p1`, then one end point per smooth `T` segment
//! - [`cubic`]: `p0, c1, c2, p1`, then `(control, end)` pairs per smooth `S` segment
//!
//! # Example
//!
//! ```
//! use shapepath::bezier;
//!
//! let path = bezier::quadratic(&[[120.0_f64, 30.0], [80.0, 100.0], [70.0, 180.0]]);
//! assert_eq!(path, "M120 30Q80 100,70 180");
//! ```

use crate::error::{at_least, fail_soft, ShapeResult};
use crate::io::PathData;
use crate::primitives::{collect_points, Point2, Scalar};

/// Single quadratic segment from `(x0, y0)` to `(x1, y1)` with control point `(cx, cy)`.
pub fn quadratic_basic<F: Scalar>(x0: F, y0: F, x1: F, y1: F, cx: F, cy: F) -> String {
    let mut path = PathData::new();
    path.move_to(x0, y0)
        .quadratic_to(Point2::new(cx, cy), Point2::new(x1, y1));
    path.to_string()
}

/// Single cubic segment from `(x0, y0)` to `(x1, y1)` with control points
/// `(cx0, cy0)` and `(cx1, cy1)`.
#[allow(clippy::too_many_arguments)]
pub fn cubic_basic<F: Scalar>(
    x0: F,
    y0: F,
    x1: F,
    y1: F,
    cx0: F,
    cy0: F,
    cx1: F,
    cy1: F,
) -> String {
    let mut path = PathData::new();
    path.move_to(x0, y0).cubic_to(
        Point2::new(cx0, cy0),
        Point2::new(cx1, cy1),
        Point2::new(x1, y1),
    );
    path.to_string()
}

/// Quadratic spline through `points`.
///
/// Empty if fewer than 3 points are given.
pub fn quadratic<F, P>(points: &[P]) -> String
where
    F: Scalar,
    P: Copy + Into<Point2<F>>,
{
    fail_soft("bezier::quadratic", build_quadratic(&collect_points(points)))
}

fn build_quadratic<F: Scalar>(points: &[Point2<F>]) -> ShapeResult<F> {
    at_least(3, points.len())?;

    let mut path = PathData::new();
    path.move_to(points[0].x, points[0].y)
        .quadratic_to(points[1], points[2]);
    for &end in &points[3..] {
        path.smooth_quadratic_to(end);
    }
    Ok(path)
}

/// Cubic spline through `points`.
///
/// A trailing point without a partner is ignored. Empty if fewer than 4
/// points are given.
///
/// ```
/// use shapepath::bezier;
///
/// let points = [(0.0_f64, 0.0), (1.0, 2.0), (3.0, 2.0), (4.0, 0.0), (5.0, -2.0), (8.0, 0.0), (9.0, 9.0)];
/// assert_eq!(bezier::cubic(&points), "M0 0C1 2,3 2,4 0S5 -2,8 0");
/// ```
pub fn cubic<F, P>(points: &[P]) -> String
where
    F: Scalar,
    P: Copy + Into<Point2<F>>,
{
    fail_soft("bezier::cubic", build_cubic(&collect_points(points)))
}

fn build_cubic<F: Scalar>(points: &[Point2<F>]) -> ShapeResult<F> {
    at_least(4, points.len())?;

    let mut path = PathData::new();
    path.move_to(points[0].x, points[0].y)
        .cubic_to(points[1], points[2], points[3]);
    for pair in points[4..].chunks_exact(2) {
        path.smooth_cubic_to(pair[0], pair[1]);
    }
    Ok(path)
}
