//! Floating-point value types shared by the shape builders.

mod point2;
mod radius4;
mod vec2;

pub(crate) use point2::collect_points;
pub use point2::Point2;
pub use radius4::Radius4;
pub use vec2::Vec2;

use num_traits::{Float, FloatConst};
use std::fmt;

/// Coordinate scalar accepted by every builder.
///
/// Implemented for any float that can be formatted, which in practice means
/// `f32` and `f64`.
pub trait Scalar: Float + FloatConst + fmt::Display {}

impl<T: Float + FloatConst + fmt::Display> Scalar for T {}

/// Returns `value / 2`.
#[inline]
pub(crate) fn half<F: Float>(value: F) -> F {
    value / (F::one() + F::one())
}

/// Returns `value * 2`.
#[inline]
pub(crate) fn twice<F: Float>(value: F) -> F {
    value + value
}
