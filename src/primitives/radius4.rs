//! Per-corner radii for rounded rectangles.

use num_traits::Float;

/// Independent radii for the four corners of a rectangle.
///
/// A plain number converts into a uniform `Radius4`, so shape builders can
/// take `impl Into<Radius4<F>>` and accept either form. Corners left out with
/// struct-update syntax default to zero:
///
/// ```
/// use shapepath::Radius4;
///
/// let r = Radius4 { top_left: 8.0, ..Radius4::default() };
/// assert_eq!(r.bottom_right, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Radius4<F> {
    pub top_left: F,
    pub top_right: F,
    pub bottom_left: F,
    pub bottom_right: F,
}

impl<F: Float> Radius4<F> {
    /// Creates radii from the four corners.
    #[inline]
    pub fn new(top_left: F, top_right: F, bottom_left: F, bottom_right: F) -> Self {
        Self {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        }
    }

    /// Uniform radius on all four corners.
    #[inline]
    pub fn uniform(radius: F) -> Self {
        Self::new(radius, radius, radius, radius)
    }

    /// Returns a copy with every corner limited to `max`.
    ///
    /// NaN corners count as absent and become zero. `self` is left untouched,
    /// so one value can be reused across many shapes.
    pub fn clamped(self, max: F) -> Self {
        let clamp = |r: F| if r.is_nan() { F::zero() } else { r.min(max) };
        Self {
            top_left: clamp(self.top_left),
            top_right: clamp(self.top_right),
            bottom_left: clamp(self.bottom_left),
            bottom_right: clamp(self.bottom_right),
        }
    }

    /// Returns the largest of the four corners.
    pub fn max_corner(self) -> F {
        self.top_left
            .max(self.top_right)
            .max(self.bottom_left)
            .max(self.bottom_right)
    }
}

impl<F: Float> Default for Radius4<F> {
    fn default() -> Self {
        Self::uniform(F::zero())
    }
}

impl<F: Float> From<F> for Radius4<F> {
    #[inline]
    fn from(radius: F) -> Self {
        Self::uniform(radius)
    }
}
