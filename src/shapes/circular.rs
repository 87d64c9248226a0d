//! Sectors (annulus wedges) and pies.
//!
//! Angles are measured from the positive x axis and grow counter-clockwise on
//! screen: the y component of every point is negated, since y grows downward
//! in SVG.
//!
//! Two arc flags are derived from the angles:
//!
//! - *large-arc* is set when `|start - end| mod 2π` exceeds π (a span of
//!   exactly π is not large);
//! - *sweep* is set when `start > end`.
//!
//! # Example
//!
//! ```
//! use shapepath::circular;
//!
//! let quarter = circular::pie(0.0, 0.0, 10.0, 0.0, 90.0);
//! assert!(quarter.starts_with("M0 0L10 0A10 10 0 0 0 "));
//! assert_eq!(circular::pie(0.0, 0.0, 0.0, 0.0, 90.0), "");
//! ```

use crate::error::{fail_soft, less, positive, ShapeResult};
use crate::io::PathData;
use crate::primitives::{Point2, Scalar, Vec2};

/// Annulus wedge between `radius0` (inner) and `radius1` (outer), from
/// `start` to `end` radians.
///
/// Empty if `radius0 <= 0` or `radius0 >= radius1`.
pub fn sector_radians<F: Scalar>(
    x: F,
    y: F,
    radius0: F,
    radius1: F,
    start: F,
    end: F,
) -> String {
    fail_soft(
        "circular::sector",
        build_sector(x, y, radius0, radius1, start, end),
    )
}

fn build_sector<F: Scalar>(x: F, y: F, radius0: F, radius1: F, start: F, end: F) -> ShapeResult<F> {
    positive("radius0", radius0)?;
    less("radius0", radius0, "radius1", radius1)?;

    let center = Point2::new(x, y);
    let large = is_large_arc(start, end);
    let clockwise = start > end;

    let inner_start = on_circle(center, radius0, start);
    let inner_end = on_circle(center, radius0, end);
    let outer_end = on_circle(center, radius1, end);
    let outer_start = on_circle(center, radius1, start);

    let mut path = PathData::new();
    path.move_to(inner_start.x, inner_start.y)
        .arc_to(radius0, radius0, large, clockwise, inner_end.x, inner_end.y)
        .line_to(outer_end.x, outer_end.y)
        .arc_to(radius1, radius1, large, !clockwise, outer_start.x, outer_start.y)
        .close();
    Ok(path)
}

/// [`sector_radians`] with `start` and `end` in degrees.
pub fn sector<F: Scalar>(x: F, y: F, radius0: F, radius1: F, start: F, end: F) -> String {
    sector_radians(x, y, radius0, radius1, start.to_radians(), end.to_radians())
}

/// Filled wedge of radius `radius` from `start` to `end` radians.
///
/// Empty if `radius <= 0`.
pub fn pie_radians<F: Scalar>(x: F, y: F, radius: F, start: F, end: F) -> String {
    fail_soft("circular::pie", build_pie(x, y, radius, start, end))
}

fn build_pie<F: Scalar>(x: F, y: F, radius: F, start: F, end: F) -> ShapeResult<F> {
    positive("radius", radius)?;

    let center = Point2::new(x, y);
    let from = on_circle(center, radius, start);
    let to = on_circle(center, radius, end);

    let mut path = PathData::new();
    path.move_to(x, y)
        .line_to(from.x, from.y)
        .arc_to(radius, radius, is_large_arc(start, end), start > end, to.x, to.y)
        .close();
    Ok(path)
}

/// [`pie_radians`] with `start` and `end` in degrees.
pub fn pie<F: Scalar>(x: F, y: F, radius: F, start: F, end: F) -> String {
    pie_radians(x, y, radius, start.to_radians(), end.to_radians())
}

fn is_large_arc<F: Scalar>(start: F, end: F) -> bool {
    (start - end).abs() % F::TAU() > F::PI()
}

/// Point at `angle` on the circle, with y flipped into screen space.
fn on_circle<F: Scalar>(center: Point2<F>, radius: F, angle: F) -> Point2<F> {
    let offset = Vec2::from_angle(angle, radius);
    Point2::new(center.x + offset.x, center.y - offset.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    /// Arc commands as `(large_arc, sweep)` flag pairs, in order.
    fn arc_flags(path: &str) -> Vec<(String, String)> {
        path.split('A')
            .skip(1)
            .map(|arc| {
                let fields: Vec<&str> = arc.split(|c: char| c == ' ' || c.is_ascii_alphabetic()).collect();
                (fields[3].to_string(), fields[4].to_string())
            })
            .collect()
    }

    #[test]
    fn test_quarter_flags() {
        let path = sector_radians(0.0, 0.0, 64.0, 96.0, 0.0, PI / 2.0);
        let flags = arc_flags(&path);
        assert_eq!(flags[0], ("0".to_string(), "0".to_string()));
        assert_eq!(flags[1], ("0".to_string(), "1".to_string()));

        let degrees = sector(0.0, 0.0, 64.0, 96.0, 0.0, 90.0);
        assert_eq!(arc_flags(&degrees)[0], ("0".to_string(), "0".to_string()));
    }

    #[test]
    fn test_half_turn_is_not_large() {
        let path = sector_radians(0.0, 0.0, 64.0, 96.0, PI, 0.0);
        let flags = arc_flags(&path);
        assert_eq!(flags[0], ("0".to_string(), "1".to_string()));
        assert_eq!(flags[1], ("0".to_string(), "0".to_string()));
    }

    #[test]
    fn test_large_arc() {
        let path = sector_radians(0.0, 0.0, 10.0, 20.0, 0.0, 1.5 * PI);
        assert_eq!(arc_flags(&path)[0].0, "1");
    }

    #[test]
    fn test_sector_exact_path() {
        assert_eq!(
            sector_radians(0.0, 0.0, 64.0, 96.0, 0.0, 0.0),
            "M64 0A64 64 0 0 0 64 0L96 0A96 96 0 0 1 96 0Z"
        );
    }

    #[test]
    fn test_sector_points_use_screen_y() {
        // 90° is straight up on screen: negative y.
        let path = sector(10.0, 10.0, 1.0, 2.0, 0.0, 90.0);
        let end = path.split('L').nth(1).unwrap();
        let coords: Vec<f64> = end
            .split(|c: char| c == ' ' || c == 'A')
            .take(2)
            .map(|s| s.parse().unwrap())
            .collect();
        assert_relative_eq!(coords[0], 10.0, epsilon = 1e-12);
        assert_relative_eq!(coords[1], 8.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sector_rejects() {
        assert_eq!(sector(0.0, 0.0, 0.0, 96.0, 0.0, 90.0), "");
        assert_eq!(sector(0.0, 0.0, 96.0, 96.0, 0.0, 90.0), "");
        assert_eq!(sector(0.0, 0.0, 100.0, 96.0, 0.0, 90.0), "");
    }

    #[test]
    fn test_pie_exact_path() {
        assert_eq!(
            pie_radians(5.0, 5.0, 10.0, 0.0, 0.0),
            "M5 5L15 5A10 10 0 0 0 15 5Z"
        );
    }

    #[test]
    fn test_pie_flags() {
        let path = pie(0.0, 0.0, 72.0, 90.0, 30.0);
        assert_eq!(arc_flags(&path)[0], ("0".to_string(), "1".to_string()));

        let path = pie(0.0, 0.0, 72.0, 0.0, 270.0);
        assert_eq!(arc_flags(&path)[0], ("1".to_string(), "0".to_string()));
    }

    #[test]
    fn test_pie_rejects() {
        assert_eq!(pie(0.0, 0.0, 0.0, 0.0, 90.0), "");
        assert_eq!(pie_radians(0.0, 0.0, -1.0, 0.0, 1.0), "");
    }

    #[test]
    fn test_degree_wrappers_match_radians() {
        assert_eq!(
            pie(0.0, 0.0, 72.0, 30.0, 60.0),
            pie_radians(0.0, 0.0, 72.0, 30f64.to_radians(), 60f64.to_radians())
        );
    }
}
