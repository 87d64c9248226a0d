//! Straight and orthogonal polylines.

pub mod line;
pub mod step;
