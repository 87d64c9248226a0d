//! Orthogonal staircase lines.
//!
//! A step line alternates horizontal and vertical runs, always starting
//! horizontal. Runs are given either as signed deltas ([`relative`]) or as
//! absolute axis positions ([`basic`]). With a radius, every corner between
//! two runs is replaced by a quarter arc ([`round`]).
//!
//! # Example
//!
//! ```
//! use shapepath::step;
//!
//! assert_eq!(step::relative(0.0, 0.0, &[120.0, 30.0, -60.0], None), "M0 0l120 0l0 30l-60 0");
//! ```

use crate::error::{at_least, fail_soft, ShapeResult};
use crate::io::PathData;
use crate::primitives::{half, Scalar};

/// Staircase from `(x, y)` made of the signed runs in `deltas`.
///
/// A radius that is present, non-zero and not NaN rounds the corners (see
/// [`round`]); otherwise the corners are sharp.
pub fn relative<F: Scalar>(x: F, y: F, deltas: &[F], radius: Option<F>) -> String {
    match radius.filter(|r| *r != F::zero() && !r.is_nan()) {
        Some(r) => round(x, y, deltas, r),
        None => sharp(x, y, deltas),
    }
}

fn sharp<F: Scalar>(x: F, y: F, deltas: &[F]) -> String {
    let zero = F::zero();
    let mut path = PathData::new();
    path.move_to(x, y);
    for (i, &d) in deltas.iter().enumerate() {
        if i % 2 == 0 {
            path.line_by(d, zero);
        } else {
            path.line_by(zero, d);
        }
    }
    path.to_string()
}

/// Staircase from `(x, y)` through absolute axis positions.
///
/// `positions[0]` and `positions[1]` are the starting x and y; every later
/// entry is the next x, then the next y, and so on. With two positions or
/// fewer they are drawn as plain deltas instead, and `radius` is ignored.
///
/// ```
/// use shapepath::step;
///
/// let path = step::basic(0.0, 0.0, &[0.0, 0.0, 120.0, 30.0, 60.0], None);
/// assert_eq!(path, "M0 0l120 0l0 30l-60 0");
/// ```
pub fn basic<F: Scalar>(x: F, y: F, positions: &[F], radius: Option<F>) -> String {
    if positions.len() <= 2 {
        return relative(x, y, positions, None);
    }

    let mut h = positions[0];
    let mut v = positions[1];
    let deltas: Vec<F> = positions[2..]
        .iter()
        .enumerate()
        .map(|(i, &p)| {
            let last = if i % 2 == 0 { &mut h } else { &mut v };
            let delta = p - *last;
            *last = p;
            delta
        })
        .collect();
    relative(x, y, &deltas, radius)
}

/// Staircase from `(x, y)` with each corner rounded by a quarter arc.
///
/// The arc at a corner uses the smallest of `radius` and half of each run
/// meeting there, so short runs are never overshot. The runs are shortened
/// to make room for the arcs and the path still ends at the sum of the
/// deltas.
///
/// Empty if fewer than 2 deltas are given.
pub fn round<F: Scalar>(x: F, y: F, deltas: &[F], radius: F) -> String {
    fail_soft("step::round", build_round(x, y, deltas, radius))
}

fn build_round<F: Scalar>(x: F, y: F, deltas: &[F], radius: F) -> ShapeResult<F> {
    at_least(2, deltas.len())?;

    let zero = F::zero();
    let signed = |toward: F, r: F| if toward > zero { r } else { -r };

    let mut path = PathData::new();
    path.move_to(x, y);

    let mut horizontal = true;
    let mut next = deltas[0];
    for pair in deltas.windows(2) {
        let (run, turn) = (pair[0], pair[1]);
        let r = half(run.abs()).min(half(turn.abs())).min(radius);
        let same_sign = (run > zero) == (turn > zero);
        if horizontal {
            let dx = signed(run, r);
            let dy = signed(turn, r);
            path.line_by(next - dx, zero)
                .arc_by(r, r, false, same_sign, dx, dy);
            next = turn - dy;
        } else {
            let dx = signed(turn, r);
            let dy = signed(run, r);
            path.line_by(zero, next - dy)
                .arc_by(r, r, false, !same_sign, dx, dy);
            next = turn - dx;
        }
        horizontal = !horizontal;
    }

    if horizontal {
        path.line_by(next, zero);
    } else {
        path.line_by(zero, next);
    }
    Ok(path)
}
