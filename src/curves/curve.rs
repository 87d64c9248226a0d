//! Smooth curves: a single quadratic and a polyline with rounded corners.

use crate::error::{at_least, fail_soft, ShapeResult};
use crate::io::PathData;
use crate::primitives::{collect_points, Point2, Scalar};

/// Single quadratic segment from `(x, y)` to `(x1, y1)` through control point `(cx, cy)`.
///
/// ```
/// use shapepath::{bezier, curve};
///
/// assert_eq!(curve::basic(20.0, 10.0, 30.0, 50.0, 25.0, 50.0), "M20 10Q25 50,30 50");
/// assert_eq!(
///     curve::basic(20.0, 10.0, 30.0, 50.0, 25.0, 50.0),
///     bezier::quadratic_basic(20.0, 10.0, 30.0, 50.0, 25.0, 50.0)
/// );
/// ```
pub fn basic<F: Scalar>(x: F, y: F, x1: F, y1: F, cx: F, cy: F) -> String {
    let mut path = PathData::new();
    path.move_to(x, y)
        .quadratic_to(Point2::new(cx, cy), Point2::new(x1, y1));
    path.to_string()
}

/// Polyline through `points` with every interior corner rounded.
///
/// At each interior vertex the line stops `radius` short of the corner,
/// and a quadratic with the vertex as control point carries it to `radius`
/// along the next side. A vertex that coincides with one of its neighbors
/// has no direction to pull back along and stays sharp.
///
/// Empty if fewer than 2 points are given.
///
/// ```
/// use shapepath::curve;
///
/// let path = curve::multi(&[[0.0_f64, 0.0], [100.0, 0.0], [100.0, 100.0]], 10.0);
/// assert_eq!(path, "M0 0L90 0Q100 0,100 10L100 100");
/// ```
pub fn multi<F, P>(points: &[P], radius: F) -> String
where
    F: Scalar,
    P: Copy + Into<Point2<F>>,
{
    fail_soft("curve::multi", build_multi(&collect_points(points), radius))
}

fn build_multi<F: Scalar>(points: &[Point2<F>], radius: F) -> ShapeResult<F> {
    at_least(2, points.len())?;

    let first = points[0];
    let mut path = PathData::new();
    path.move_to(first.x, first.y);

    for corner in points.windows(3) {
        let (prev, p, next) = (corner[0], corner[1], corner[2]);
        match ((p - prev).normalize(), (next - p).normalize()) {
            (Some(incoming), Some(outgoing)) => {
                let entry = p + incoming * -radius;
                let exit = p + outgoing * radius;
                path.line_to(entry.x, entry.y).quadratic_to(p, exit);
            }
            _ => {
                path.line_to(p.x, p.y);
            }
        }
    }

    let last = points[points.len() - 1];
    path.line_to(last.x, last.y);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_basic() {
        assert_eq!(
            basic(20.0, 10.0, 30.0, 50.0, 25.0, 50.0),
            "M20 10Q25 50,30 50"
        );
    }

    #[test]
    fn test_multi_two_points_is_a_line() {
        let points: [[f64; 2]; 2] = [[1.0, 2.0], [3.0, 4.0]];
        assert_eq!(multi(&points, 5.0), "M1 2L3 4");
    }

    #[test]
    fn test_multi_rejects_short() {
        let one: [[f64; 2]; 1] = [[1.0, 2.0]];
        assert_eq!(multi(&one, 5.0), "");
        let none: [[f64; 2]; 0] = [];
        assert_eq!(multi(&none, 5.0), "");
    }

    #[test]
    fn test_multi_right_angle() {
        let points: [[f64; 2]; 4] = [[0.0, 0.0], [100.0, 0.0], [100.0, 100.0], [0.0, 100.0]];
        assert_eq!(
            multi(&points, 10.0),
            "M0 0L90 0Q100 0,100 10L100 90Q100 100,90 100L0 100"
        );
    }

    #[test]
    fn test_multi_uses_each_side_length() {
        // the first side is exactly `radius` long, the second is 16
        let points: [[f64; 2]; 3] = [[420.0, 300.0], [423.0, 304.0], [423.0, 320.0]];
        let path = multi(&points, 5.0);
        let entry: Vec<f64> = path
            .split('L')
            .nth(1)
            .unwrap()
            .split('Q')
            .next()
            .unwrap()
            .split(' ')
            .map(|s| s.parse().unwrap())
            .collect();
        assert_relative_eq!(entry[0], 420.0, epsilon = 1e-9);
        assert_relative_eq!(entry[1], 300.0, epsilon = 1e-9);
        assert!(path.contains("Q423 304,423 309"));
    }

    #[test]
    fn test_multi_coincident_neighbor_stays_sharp() {
        let points: [[f64; 2]; 4] = [[0.0, 0.0], [0.0, 0.0], [10.0, 0.0], [10.0, 10.0]];
        let path = multi(&points, 2.0);
        assert!(!path.contains("NaN"));
        assert_eq!(path, "M0 0L0 0L8 0Q10 0,10 2L10 10");
    }
}
