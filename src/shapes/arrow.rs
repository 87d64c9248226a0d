//! Arrowhead profiles.
//!
//! Every profile is anchored at `(x, y)`: the tip for [`vee`], the middle of
//! the base for the others. Profiles point up (towards negative y); rotate the
//! rendered path to aim it elsewhere.
//!
//! # Example
//!
//! ```
//! use shapepath::arrow;
//!
//! assert_eq!(arrow::triangle(0.0, 0.0, 16.0, 20.0), "M-8 0l16 0l-8 -20Z");
//! assert_eq!(arrow::triangle(0.0, 0.0, 0.0, 20.0), "");
//! ```

use crate::error::{fail_soft, less, positive, ShapeResult};
use crate::io::PathData;
use crate::primitives::{half, Scalar};

/// Concave V-notch arrow with its notch `low` and its wings `high` below the tip.
///
/// Empty if `width <= 0`, `low >= high` or `high <= 0`.
pub fn vee<F: Scalar>(x: F, y: F, width: F, low: F, high: F) -> String {
    fail_soft("arrow::vee", build_vee(x, y, width, low, high))
}

fn build_vee<F: Scalar>(x: F, y: F, width: F, low: F, high: F) -> ShapeResult<F> {
    positive("width", width)?;
    less("low", low, "high", high)?;
    positive("high", high)?;

    let r = half(width);
    let mut path = PathData::new();
    path.move_to(x, y)
        .line_by(-r, -low)
        .line_by(r, low - high)
        .line_by(r, high - low)
        .close();
    Ok(path)
}

/// Open two-segment chevron of the given width and height.
///
/// Empty if `width <= 0` or `height <= 0`.
pub fn basic<F: Scalar>(x: F, y: F, width: F, height: F) -> String {
    fail_soft("arrow::basic", build_basic(x, y, width, height))
}

fn build_basic<F: Scalar>(x: F, y: F, width: F, height: F) -> ShapeResult<F> {
    positive("width", width)?;
    positive("height", height)?;

    let r = half(width);
    let mut path = PathData::new();
    path.move_to(x - r, y + height)
        .line_by(r, -height)
        .line_by(r, height);
    Ok(path)
}

/// Closed triangular arrow.
///
/// Empty if `width <= 0` or `height <= 0`.
pub fn triangle<F: Scalar>(x: F, y: F, width: F, height: F) -> String {
    fail_soft("arrow::triangle", build_triangle(x, y, width, height))
}

fn build_triangle<F: Scalar>(x: F, y: F, width: F, height: F) -> ShapeResult<F> {
    positive("width", width)?;
    positive("height", height)?;

    let r = half(width);
    let mut path = PathData::new();
    path.move_to(x - r, y)
        .line_by(width, F::zero())
        .line_by(-r, -height)
        .close();
    Ok(path)
}

/// Flat-sided arrow: straight shoulders up to `low`, then a point at `high`.
///
/// Empty if `width <= 0`, `low <= 0` or `low >= high`.
pub fn blunt<F: Scalar>(x: F, y: F, width: F, low: F, high: F) -> String {
    fail_soft("arrow::blunt", build_blunt(x, y, width, low, high))
}

fn build_blunt<F: Scalar>(x: F, y: F, width: F, low: F, high: F) -> ShapeResult<F> {
    positive("width", width)?;
    positive("low", low)?;
    less("low", low, "high", high)?;

    let r = half(width);
    let mut path = PathData::new();
    path.move_to(x - r, y)
        .line_by(F::zero(), -low)
        .line_by(r, low - high)
        .line_by(r, high - low)
        .line_by(F::zero(), low)
        .close();
    Ok(path)
}

/// Straight shoulders up to `low`, capped by a half circle of radius `width / 2`.
///
/// Empty if `width <= 0` or `low <= 0`.
pub fn dome<F: Scalar>(x: F, y: F, width: F, low: F) -> String {
    fail_soft("arrow::dome", build_dome(x, y, width, low))
}

fn build_dome<F: Scalar>(x: F, y: F, width: F, low: F) -> ShapeResult<F> {
    positive("width", width)?;
    positive("low", low)?;

    let r = half(width);
    let mut path = PathData::new();
    path.move_to(x - r, y)
        .line_by(F::zero(), -low)
        .arc_by(r, r, false, true, width, F::zero())
        .line_by(F::zero(), low)
        .close();
    Ok(path)
}

/// Half ellipse with horizontal radius `width / 2` and vertical radius `height`.
///
/// Empty if `width <= 0` or `height <= 0`.
pub fn bullet<F: Scalar>(x: F, y: F, width: F, height: F) -> String {
    fail_soft("arrow::bullet", build_bullet(x, y, width, height))
}

fn build_bullet<F: Scalar>(x: F, y: F, width: F, height: F) -> ShapeResult<F> {
    positive("width", width)?;
    positive("height", height)?;

    let r = half(width);
    let mut path = PathData::new();
    path.move_to(x - r, y)
        .arc_by(r, height, false, true, width, F::zero())
        .close();
    Ok(path)
}
