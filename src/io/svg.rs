//! SVG backend built on the `svg` crate.

use super::IoError;
use crate::drawing::{Canvas, Coord, DrawOp, Drawing, DrawingSink, Transform};
use crate::style::Style;
use ::svg::Document;
use ::svg::Node;
use ::svg::node::element::{Circle, Group, Line, Path, Polyline, Text};
use std::io::Write;

/// Export a recorded drawing as an SVG document.
pub trait ToSVG {
    fn to_svg(&self) -> String;
    fn write_svg<W: Write>(&self, writer: W) -> Result<(), IoError>;
}

impl ToSVG for Drawing {
    fn to_svg(&self) -> String {
        let mut sink = SvgSink::new();
        self.replay(&mut sink);
        sink.into_document().to_string()
    }

    fn write_svg<W: Write>(&self, writer: W) -> Result<(), IoError> {
        let mut sink = SvgSink::new();
        self.replay(&mut sink);
        ::svg::write(writer, &sink.into_document())?;
        Ok(())
    }
}

/// A [`DrawingSink`] that builds an [`svg::Document`](::svg::Document).
///
/// The page is declared in millimetres with a viewBox in drawing units, so integer
/// coordinates keep sub-millimetre precision.
pub struct SvgSink {
    document: Document,
    groups: Vec<Group>,
    scale: i64,
}

impl Default for SvgSink {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgSink {
    pub fn new() -> Self {
        Self {
            document: Document::new(),
            groups: Vec::new(),
            scale: 1,
        }
    }

    /// Finish the document, closing any groups left open.
    pub fn into_document(mut self) -> Document {
        while let Some(group) = self.groups.pop() {
            self.append(group);
        }
        self.document
    }

    fn append<N: Into<Box<dyn Node>>>(&mut self, node: N) {
        match self.groups.last_mut() {
            Some(group) => group.append(node),
            None => self.document.append(node),
        }
    }

    fn css(&self, style: Style) -> String {
        style.descriptor(self.scale).to_css()
    }
}

impl DrawingSink for SvgSink {
    fn begin(&mut self, canvas: &Canvas) {
        let (min_x, min_y, width, height) = canvas.view_box();
        self.scale = canvas.scale;
        self.groups.clear();
        self.document = Document::new()
            .set("width", format!("{}mm", canvas.width_mm))
            .set("height", format!("{}mm", canvas.height_mm))
            .set("viewBox", format!("{min_x} {min_y} {width} {height}"));
    }

    fn draw(&mut self, op: DrawOp) {
        match op {
            DrawOp::Circle {
                center,
                radius,
                style,
            } => {
                let circle = Circle::new()
                    .set("cx", center.x.to_string())
                    .set("cy", center.y.to_string())
                    .set("r", radius.to_string())
                    .set("style", self.css(style));
                self.append(circle);
            },
            DrawOp::Line { from, to, style } => {
                let line = Line::new()
                    .set("x1", from.x.to_string())
                    .set("y1", from.y.to_string())
                    .set("x2", to.x.to_string())
                    .set("y2", to.y.to_string())
                    .set("style", self.css(style));
                self.append(line);
            },
            DrawOp::Polyline { points, style } => {
                let polyline = Polyline::new()
                    .set("points", points_attr(&points))
                    .set("style", self.css(style));
                self.append(polyline);
            },
            DrawOp::Arc {
                from,
                to,
                radius,
                style,
            } => {
                let d = format!(
                    "M{},{} A{radius},{radius} 0 0 1 {},{}",
                    from.x, from.y, to.x, to.y
                );
                let path = Path::new().set("d", d).set("style", self.css(style));
                self.append(path);
            },
            DrawOp::Text { at, content, style } => {
                let text = Text::new(content)
                    .set("x", at.x.to_string())
                    .set("y", at.y.to_string())
                    .set("style", self.css(style));
                self.append(text);
            },
            DrawOp::BeginGroup(transform) => {
                self.groups
                    .push(Group::new().set("transform", transform_attr(&transform)));
            },
            DrawOp::EndGroup => {
                if let Some(group) = self.groups.pop() {
                    self.append(group);
                }
            },
        }
    }
}

fn transform_attr(transform: &Transform) -> String {
    match transform {
        Transform::Translate(by) => format!("translate({}, {})", by.x, by.y),
        Transform::Rotate(deg) => format!("rotate({deg:.4})"),
    }
}

fn points_attr(points: &[Coord]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}
