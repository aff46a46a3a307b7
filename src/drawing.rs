//! Backend-neutral drawing operations.
//!
//! The renderer never talks to a graphics library directly. It emits [`DrawOp`]s into a
//! [`DrawingSink`]; a [`Drawing`] records them so they can be compared, inspected or replayed
//! into another sink (such as the SVG writer).

use crate::float_types::Real;
use crate::style::Style;
use nalgebra::Point2;

/// Integer drawing-unit coordinate.
pub type Coord = Point2<i64>;

/// Physical size of the page and its resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    pub width_mm: i64,
    pub height_mm: i64,
    /// Drawing units per millimetre.
    pub scale: i64,
}

impl Canvas {
    /// Width in drawing units.
    pub const fn width(&self) -> i64 {
        self.width_mm * self.scale
    }

    /// Height in drawing units.
    pub const fn height(&self) -> i64 {
        self.height_mm * self.scale
    }

    /// `(min_x, min_y, width, height)` of the viewport in drawing units.
    pub const fn view_box(&self) -> (i64, i64, i64, i64) {
        (0, 0, self.width(), self.height())
    }
}

/// Transform applied to every operation of a group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    Translate(Coord),
    /// Rotation in degrees, positive turning +X towards +Y.
    Rotate(Real),
}

/// One primitive drawing operation, coordinates in drawing units.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Circle {
        center: Coord,
        radius: i64,
        style: Style,
    },
    Line {
        from: Coord,
        to: Coord,
        style: Style,
    },
    Polyline {
        points: Vec<Coord>,
        style: Style,
    },
    /// Minor circular arc swept in the positive-angle direction.
    Arc {
        from: Coord,
        to: Coord,
        radius: i64,
        style: Style,
    },
    Text {
        at: Coord,
        content: String,
        style: Style,
    },
    BeginGroup(Transform),
    EndGroup,
}

/// Anything that can receive the output of a render pass.
pub trait DrawingSink {
    /// Called once, before any operation.
    fn begin(&mut self, canvas: &Canvas);
    fn draw(&mut self, op: DrawOp);
}

/// A recorded render pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Drawing {
    pub canvas: Option<Canvas>,
    pub ops: Vec<DrawOp>,
}

impl Drawing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the recorded pass into another sink.
    pub fn replay<K: DrawingSink>(&self, sink: &mut K) {
        if let Some(canvas) = &self.canvas {
            sink.begin(canvas);
        }
        for op in &self.ops {
            sink.draw(op.clone());
        }
    }

    /// Number of operations matching `pred`.
    pub fn count(&self, pred: impl Fn(&DrawOp) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(*op)).count()
    }
}

impl DrawingSink for Drawing {
    fn begin(&mut self, canvas: &Canvas) {
        self.canvas = Some(*canvas);
        self.ops.clear();
    }

    fn draw(&mut self, op: DrawOp) {
        self.ops.push(op);
    }
}

/// Truncate a point in drawing units to integer coordinates.
#[inline]
pub fn to_coord(p: &Point2<Real>) -> Coord {
    p.map(|c| c as i64)
}
