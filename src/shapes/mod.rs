//! Closed and fixed-outline shapes.
//!
//! Unless a function says otherwise, `(x, y)` is the shape's center and the
//! `_aligned` variants move it to the top-left corner of the bounding box.

pub mod arrow;
pub mod capsule;
pub mod circle;
pub mod circular;
pub mod common;
pub mod polygon;
pub mod rectangle;
pub mod triangle;
