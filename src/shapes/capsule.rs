//! Capsule (stadium) shapes.
//!
//! A capsule is a rectangle whose two short sides are replaced by half
//! circles. Plain builders are centered on `(x, y)`; the `_aligned` variants
//! treat `(x, y)` as the top-left corner of the bounding box.
//!
//! # Example
//!
//! ```
//! use shapepath::capsule;
//!
//! assert_eq!(
//!     capsule::row(0.0, 10.0, 80.0, 30.0),
//!     "M-25 -5l50 0a15 15 0 0 1 0 30l-50 0a15 15 0 0 1 0 -30Z"
//! );
//! assert_eq!(capsule::row(0.0, 10.0, 30.0, 80.0), "");
//! ```

use crate::error::{fail_soft, not_shorter, ShapeResult};
use crate::io::PathData;
use crate::primitives::{half, Scalar};

/// Horizontal capsule with half-circle caps of radius `height / 2`.
///
/// Empty if `width < height`.
pub fn row<F: Scalar>(x: F, y: F, width: F, height: F) -> String {
    fail_soft("capsule::row", build_row(x, y, width, height))
}

fn build_row<F: Scalar>(x: F, y: F, width: F, height: F) -> ShapeResult<F> {
    not_shorter("width", width, "height", height)?;

    let r = half(height);
    let mut path = PathData::new();
    path.move_to(x - half(width) + r, y - r)
        .line_by(width - height, F::zero())
        .arc_by(r, r, false, true, F::zero(), height)
        .line_by(height - width, F::zero())
        .arc_by(r, r, false, true, F::zero(), -height)
        .close();
    Ok(path)
}

/// Vertical capsule with half-circle caps of radius `width / 2`.
///
/// Empty if `height < width`.
pub fn col<F: Scalar>(x: F, y: F, width: F, height: F) -> String {
    fail_soft("capsule::col", build_col(x, y, width, height))
}

fn build_col<F: Scalar>(x: F, y: F, width: F, height: F) -> ShapeResult<F> {
    not_shorter("height", height, "width", width)?;

    let r = half(width);
    let mut path = PathData::new();
    path.move_to(x - r, y - half(height) + r)
        .arc_by(r, r, false, true, width, F::zero())
        .line_by(F::zero(), height - width)
        .arc_by(r, r, false, true, -width, F::zero())
        .close();
    Ok(path)
}

/// [`row`] when `width > height`, otherwise [`col`].
pub fn auto<F: Scalar>(x: F, y: F, width: F, height: F) -> String {
    if width > height {
        row(x, y, width, height)
    } else {
        col(x, y, width, height)
    }
}

/// [`row`] anchored at the top-left corner.
pub fn row_aligned<F: Scalar>(x: F, y: F, width: F, height: F) -> String {
    row(x + half(width), y + half(height), width, height)
}

/// [`col`] anchored at the top-left corner.
pub fn col_aligned<F: Scalar>(x: F, y: F, width: F, height: F) -> String {
    col(x + half(width), y + half(height), width, height)
}

/// [`auto`] anchored at the top-left corner.
pub fn auto_aligned<F: Scalar>(x: F, y: F, width: F, height: F) -> String {
    auto(x + half(width), y + half(height), width, height)
}
