//! Bézier splines and rounded polylines.

pub mod bezier;
pub mod curve;
