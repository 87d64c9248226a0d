//! shapepath - SVG path data for common 2D shapes
//!
//! Every function takes plain coordinates and returns the `d` attribute of an
//! SVG `<path>` as a `String`, ready to drop into markup or any 2D API that
//! speaks the same path mini-language.
//!
//! Invalid input never panics. Guarded functions return an empty string
//! instead, which renders as nothing.
//!
//! ```
//! use shapepath::{capsule, rectangle, step};
//!
//! assert_eq!(rectangle::basic(300.0, 300.0, 200.0, 100.0), "M200 250l200 0l0 100l-200 0Z");
//! assert_eq!(step::relative(0.0, 0.0, &[120.0, 30.0, -60.0], None), "M0 0l120 0l0 30l-60 0");
//!
//! // a capsule must be at least as long as it is thick
//! assert_eq!(capsule::row(0.0, 0.0, 10.0, 20.0), "");
//! ```
//!
//! Builders are generic over the coordinate type, so `f32` works as well as `f64`.
//! Enable the `tracing` feature to get a `debug` event for every rejected input.

pub mod curves;
pub mod error;
pub mod io;
mod log;
pub mod lines;
pub mod primitives;
pub mod shapes;

pub use curves::{bezier, curve};
pub use error::ShapeError;
pub use lines::{line, step};
pub use primitives::{Point2, Radius4, Scalar, Vec2};
pub use shapes::{arrow, capsule, circle, circular, common, polygon, rectangle, triangle};
