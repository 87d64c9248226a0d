//! SVG path-data serialization.
//!
//! Shape builders assemble a [`PathData`] command list and render it with
//! `Display`. The output is the compact form of the path mini-language:
//!
//! - commands are concatenated with no separator: `M0 0l120 0l0 30`
//! - arguments within a command are separated by a single space
//! - the points of `Q`, `C` and `S` are separated by a comma: `Q80 100,70 180`
//! - numbers use their shortest round-trip form, `-0` prints as `0`, and
//!   infinities print as `Infinity` / `-Infinity`
//! - numbers never use exponent notation: `1e-7` prints as `0.0000001` and
//!   `1e21` as `1000000000000000000000`
//!
//! # Supported Commands
//!
//! - `M` - Move to
//! - `L`/`l` - Line to (absolute/relative)
//! - `Q` - Quadratic Bézier curve
//! - `T` - Smooth quadratic Bézier
//! - `C` - Cubic Bézier curve
//! - `S` - Smooth cubic Bézier
//! - `A`/`a` - Elliptical arc (absolute/relative)
//! - `Z` - Close path
//!
//! # Example
//!
//! ```
//! use shapepath::io::PathData;
//!
//! let mut path = PathData::new();
//! path.move_to(0.0, 0.0).line_by(10.0, 0.0).line_by(0.0, -2.5).close();
//! assert_eq!(path.to_string(), "M0 0l10 0l0 -2.5Z");
//! ```

use crate::primitives::{Point2, Scalar, Vec2};
use std::fmt;

/// An SVG path command.
#[derive(Debug, Clone, PartialEq)]
pub enum PathCommand<F> {
    /// Move to (absolute).
    MoveTo(Point2<F>),
    /// Line to (absolute).
    LineTo(Point2<F>),
    /// Line to (relative).
    LineToRel(Vec2<F>),
    /// Quadratic Bézier curve (absolute): control point, end point.
    QuadraticTo(Point2<F>, Point2<F>),
    /// Smooth quadratic Bézier (absolute), control point reflected from the previous segment.
    SmoothQuadraticTo(Point2<F>),
    /// Cubic Bézier curve (absolute): two control points, end point.
    CubicTo(Point2<F>, Point2<F>, Point2<F>),
    /// Smooth cubic Bézier (absolute): second control point, end point.
    SmoothCubicTo(Point2<F>, Point2<F>),
    /// Elliptical arc (absolute).
    ArcTo {
        rx: F,
        ry: F,
        x_axis_rotation: F,
        large_arc: bool,
        sweep: bool,
        end: Point2<F>,
    },
    /// Elliptical arc (relative).
    ArcToRel {
        rx: F,
        ry: F,
        x_axis_rotation: F,
        large_arc: bool,
        sweep: bool,
        end: Vec2<F>,
    },
    /// Close path.
    ClosePath,
}

impl<F> PathCommand<F> {
    /// The command letter as it appears in path data.
    pub fn letter(&self) -> char {
        match self {
            PathCommand::MoveTo(_) => 'M',
            PathCommand::LineTo(_) => 'L',
            PathCommand::LineToRel(_) => 'l',
            PathCommand::QuadraticTo(..) => 'Q',
            PathCommand::SmoothQuadraticTo(_) => 'T',
            PathCommand::CubicTo(..) => 'C',
            PathCommand::SmoothCubicTo(..) => 'S',
            PathCommand::ArcTo { .. } => 'A',
            PathCommand::ArcToRel { .. } => 'a',
            PathCommand::ClosePath => 'Z',
        }
    }
}

/// A single number in path-data form.
struct Num<F>(F);

impl<F: Scalar> fmt::Display for Num<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v == F::zero() {
            // also catches -0
            f.write_str("0")
        } else if v.is_infinite() {
            f.write_str(if v > F::zero() { "Infinity" } else { "-Infinity" })
        } else {
            fmt::Display::fmt(&v, f)
        }
    }
}

/// An `x y` pair.
struct Pair<F>(F, F);

impl<F: Scalar> fmt::Display for Pair<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", Num(self.0), Num(self.1))
    }
}

fn flag(value: bool) -> u8 {
    u8::from(value)
}

impl<F: Scalar> fmt::Display for PathCommand<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = self.letter();
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) | PathCommand::SmoothQuadraticTo(p) => {
                write!(f, "{}{}", letter, Pair(p.x, p.y))
            }
            PathCommand::LineToRel(v) => write!(f, "{}{}", letter, Pair(v.x, v.y)),
            PathCommand::QuadraticTo(c, p) | PathCommand::SmoothCubicTo(c, p) => {
                write!(f, "{}{},{}", letter, Pair(c.x, c.y), Pair(p.x, p.y))
            }
            PathCommand::CubicTo(c0, c1, p) => write!(
                f,
                "{}{},{},{}",
                letter,
                Pair(c0.x, c0.y),
                Pair(c1.x, c1.y),
                Pair(p.x, p.y)
            ),
            PathCommand::ArcTo {
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                end,
            } => write!(
                f,
                "{}{} {} {} {} {}",
                letter,
                Pair(rx, ry),
                Num(x_axis_rotation),
                flag(large_arc),
                flag(sweep),
                Pair(end.x, end.y)
            ),
            PathCommand::ArcToRel {
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                end,
            } => write!(
                f,
                "{}{} {} {} {} {}",
                letter,
                Pair(rx, ry),
                Num(x_axis_rotation),
                flag(large_arc),
                flag(sweep),
                Pair(end.x, end.y)
            ),
            PathCommand::ClosePath => f.write_str("Z"),
        }
    }
}

/// An SVG path under construction.
///
/// Builder methods take `&mut self` and return it, so they chain and can also
/// be called from loops.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData<F> {
    /// The list of path commands.
    pub commands: Vec<PathCommand<F>>,
}

impl<F: Scalar> PathData<F> {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Returns true if the path has no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Returns the number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Appends a raw command.
    pub fn push(&mut self, command: PathCommand<F>) -> &mut Self {
        self.commands.push(command);
        self
    }

    /// `M x y`
    pub fn move_to(&mut self, x: F, y: F) -> &mut Self {
        self.push(PathCommand::MoveTo(Point2::new(x, y)))
    }

    /// `L x y`
    pub fn line_to(&mut self, x: F, y: F) -> &mut Self {
        self.push(PathCommand::LineTo(Point2::new(x, y)))
    }

    /// `l dx dy`
    pub fn line_by(&mut self, dx: F, dy: F) -> &mut Self {
        self.push(PathCommand::LineToRel(Vec2::new(dx, dy)))
    }

    /// `Q cx cy,x y`
    pub fn quadratic_to(&mut self, control: Point2<F>, end: Point2<F>) -> &mut Self {
        self.push(PathCommand::QuadraticTo(control, end))
    }

    /// `T x y`
    pub fn smooth_quadratic_to(&mut self, end: Point2<F>) -> &mut Self {
        self.push(PathCommand::SmoothQuadraticTo(end))
    }

    /// `C c0x c0y,c1x c1y,x y`
    pub fn cubic_to(&mut self, control0: Point2<F>, control1: Point2<F>, end: Point2<F>) -> &mut Self {
        self.push(PathCommand::CubicTo(control0, control1, end))
    }

    /// `S cx cy,x y`
    pub fn smooth_cubic_to(&mut self, control: Point2<F>, end: Point2<F>) -> &mut Self {
        self.push(PathCommand::SmoothCubicTo(control, end))
    }

    /// `A rx ry 0 large sweep x y`
    pub fn arc_to(&mut self, rx: F, ry: F, large_arc: bool, sweep: bool, x: F, y: F) -> &mut Self {
        self.push(PathCommand::ArcTo {
            rx,
            ry,
            x_axis_rotation: F::zero(),
            large_arc,
            sweep,
            end: Point2::new(x, y),
        })
    }

    /// `a rx ry 0 large sweep dx dy`
    pub fn arc_by(&mut self, rx: F, ry: F, large_arc: bool, sweep: bool, dx: F, dy: F) -> &mut Self {
        self.push(PathCommand::ArcToRel {
            rx,
            ry,
            x_axis_rotation: F::zero(),
            large_arc,
            sweep,
            end: Vec2::new(dx, dy),
        })
    }

    /// `Z`
    pub fn close(&mut self) -> &mut Self {
        self.push(PathCommand::ClosePath)
    }
}

impl<F: Scalar> fmt::Display for PathData<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for command in &self.commands {
            write!(f, "{}", command)?;
        }
        Ok(())
    }
}
