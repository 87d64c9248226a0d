//! Path-data output.
//!
//! Every shape in this crate is assembled as a [`PathData`] and rendered to the
//! SVG path mini-language.

mod svg;

pub use svg::{PathCommand, PathData};
