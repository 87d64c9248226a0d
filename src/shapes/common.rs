//! Compound shapes: plus sign and popup balloon.

use crate::error::{fail_soft, less, positive, ShapeResult};
use crate::io::PathData;
use crate::primitives::{half, twice, Scalar};

/// Plus sign of overall extent `size` and bar thickness `thickness`,
/// centered on `(x, y)`.
///
/// Empty if `thickness <= 0` or `size <= thickness`.
///
/// ```
/// use shapepath::common;
///
/// assert_eq!(
///     common::plus(0.0, 0.0, 48.0, 16.0),
///     "M-24 -8l16 0l0 -16l16 0l0 16l16 0l0 16l-16 0l0 16l-16 0l0 -16l-16 0Z"
/// );
/// ```
pub fn plus<F: Scalar>(x: F, y: F, size: F, thickness: F) -> String {
    fail_soft("common::plus", build_plus(x, y, size, thickness))
}

fn build_plus<F: Scalar>(x: F, y: F, size: F, thickness: F) -> ShapeResult<F> {
    positive("thickness", thickness)?;
    less("thickness", thickness, "size", size)?;

    let mw = half(thickness);
    let ew = half(size);
    let arm = ew - mw;
    let zero = F::zero();

    let mut path = PathData::new();
    path.move_to(x - ew, y - mw)
        .line_by(arm, zero)
        .line_by(zero, -arm)
        .line_by(thickness, zero)
        .line_by(zero, arm)
        .line_by(arm, zero)
        .line_by(zero, thickness)
        .line_by(-arm, zero)
        .line_by(zero, arm)
        .line_by(-thickness, zero)
        .line_by(zero, -arm)
        .line_by(-arm, zero)
        .close();
    Ok(path)
}

/// Rounded balloon body centered on `(x, y)` with a triangular tail hanging
/// from the middle of its bottom edge.
///
/// All four body corners share `radius`. The radius is limited to half the
/// shorter side and, where needed, shrunk so the tail base still fits on the
/// straight part of the bottom edge. The tail apex sits `triangle_height`
/// below the body.
///
/// Empty if `width <= 0`, `height <= 0` or `triangle_width >= width`.
pub fn popup<F: Scalar>(
    x: F,
    y: F,
    width: F,
    height: F,
    radius: F,
    triangle_width: F,
    triangle_height: F,
) -> String {
    fail_soft(
        "common::popup",
        build_popup(x, y, width, height, radius, triangle_width, triangle_height),
    )
}

fn build_popup<F: Scalar>(
    x: F,
    y: F,
    width: F,
    height: F,
    radius: F,
    triangle_width: F,
    triangle_height: F,
) -> ShapeResult<F> {
    positive("width", width)?;
    positive("height", height)?;
    less("triangle_width", triangle_width, "width", width)?;

    let zero = F::zero();
    let r = radius
        .min(half(width.min(height)))
        .min(half(width - triangle_width))
        .max(zero);
    let straight_x = width - twice(r);
    let straight_y = height - twice(r);
    let shoulder = half(straight_x - triangle_width);
    let tail = half(triangle_width);

    let mut path = PathData::new();
    path.move_to(x - half(width) + r, y - half(height))
        .line_by(straight_x, zero)
        .arc_by(r, r, false, true, r, r)
        .line_by(zero, straight_y)
        .arc_by(r, r, false, true, -r, r)
        .line_by(-shoulder, zero)
        .line_by(-tail, triangle_height)
        .line_by(-tail, -triangle_height)
        .line_by(-shoulder, zero)
        .arc_by(r, r, false, true, -r, -r)
        .line_by(zero, -straight_y)
        .arc_by(r, r, false, true, r, -r)
        .close();
    Ok(path)
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

    #[test]
    fn test_plus_is_closed() {
        let path = plus(3.0, 4.0, 48.0, 16.0);
        assert!(path.starts_with("M-21 -4"));
        // 11 explicit sides; `Z` draws the twelfth, up the left arm
        assert_eq!(path.matches('l').count(), 11);
        assert!(path.ends_with('Z'));
        assert_eq!(closing_edge(&path), (0.0, -16.0));
    }

    #[test]
    fn test_plus_rejects() {
        assert_eq!(plus(0.0, 0.0, 48.0, 0.0), "");
        assert_eq!(plus(0.0, 0.0, 16.0, 16.0), "");
        assert_eq!(plus(0.0, 0.0, 10.0, 16.0), "");
    }

    #[test]
    fn test_popup() {
        assert_eq!(
            popup(0.0, 0.0, 100.0, 40.0, 8.0, 20.0, 10.0),
            "M-42 -20l84 0a8 8 0 0 1 8 8l0 24a8 8 0 0 1 -8 8l-32 0l-10 10l-10 -10l-32 0\
             a8 8 0 0 1 -8 -8l0 -24a8 8 0 0 1 8 -8Z"
        );
    }

    #[test]
    fn test_popup_is_closed() {
        let path = popup(10.0, 10.0, 120.0, 60.0, 12.0, 30.0, 15.0);
        assert_eq!(closing_edge(&path), (0.0, 0.0));
        assert_eq!(path.matches('a').count(), 4);
    }

    #[test]
    fn test_popup_clamps_radius() {
        // Radius 50 exceeds half the height; it is cut to 20, then to 15 so
        // the 70-wide tail still fits on the 100-wide bottom edge.
        let path = popup(0.0, 0.0, 100.0, 40.0, 50.0, 70.0, 10.0);
        assert!(path.starts_with("M-35 -20l70 0a15 15 0 0 1 15 15"));
        assert_eq!(closing_edge(&path), (0.0, 0.0));
    }

    #[test]
    fn test_popup_rejects() {
        assert_eq!(popup(0.0, 0.0, 0.0, 40.0, 8.0, 20.0, 10.0), "");
        assert_eq!(popup(0.0, 0.0, 100.0, -1.0, 8.0, 20.0, 10.0), "");
        assert_eq!(popup(0.0, 0.0, 100.0, 40.0, 8.0, 100.0, 10.0), "");
    }
}
