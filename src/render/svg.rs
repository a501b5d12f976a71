use std::borrow::Cow;
use std::io::{self, Write};

use crate::geometry::{BoundaryPath, Circle, PathCommand};
use crate::hypergraph::Bounds;
use crate::math::Point2;
use crate::style::{Padding, Paint};

/// The visible region of the drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    /// Pads vertex bounds; without bounds, pads the origin.
    #[must_use]
    pub fn around(bounds: Option<Bounds>, padding: &Padding) -> Self {
        let bounds = bounds.unwrap_or(Bounds {
            min: Point2::origin(),
            max: Point2::origin(),
        });
        let size = bounds.size();
        Self {
            min_x: bounds.min.x - padding.left,
            min_y: bounds.min.y - padding.top,
            width: size.x + padding.left + padding.right,
            height: size.y + padding.top + padding.bottom,
        }
    }
}

/// Streams SVG elements to a writer.
///
/// Numbers are written with six decimals. Path data puts one command per
/// line.
#[derive(Debug)]
pub struct SvgWriter<W: Write> {
    out: W,
}

impl<W: Write> SvgWriter<W> {
    /// Wraps `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Writes the XML prolog and opens the `<svg>` element.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn begin(&mut self, view_box: &ViewBox) -> io::Result<()> {
        writeln!(self.out, r#"<?xml version="1.0" encoding="utf-8"?>"#)?;
        writeln!(
            self.out,
            r#"<svg version="1.1" xmlns="http://www.w3.org/2000/svg" viewBox="{:.6} {:.6} {:.6} {:.6}">"#,
            view_box.min_x, view_box.min_y, view_box.width, view_box.height
        )
    }

    /// Writes a `<circle>` element.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn circle(&mut self, circle: &Circle, paint: &Paint) -> io::Result<()> {
        write!(
            self.out,
            r#"    <circle r="{:.6}" cx="{:.6}" cy="{:.6}" "#,
            circle.radius, circle.center.x, circle.center.y
        )?;
        self.paint_attributes(paint)?;
        writeln!(self.out, " />")
    }

    /// Writes a `<path>` element replaying the path's commands in order.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn path(&mut self, path: &BoundaryPath, paint: &Paint) -> io::Result<()> {
        writeln!(self.out, r#"    <path d=""#)?;
        for command in path.commands() {
            match *command {
                PathCommand::MoveTo(p) => writeln!(self.out, "        M {:.6} {:.6}", p.x, p.y)?,
                PathCommand::LineTo(p) => writeln!(self.out, "        L {:.6} {:.6}", p.x, p.y)?,
                PathCommand::ArcTo {
                    radius,
                    large_arc,
                    sweep,
                    end,
                } => writeln!(
                    self.out,
                    "        A {radius:.6} {radius:.6} 0 {} {} {:.6} {:.6}",
                    u8::from(large_arc),
                    u8::from(sweep),
                    end.x,
                    end.y
                )?,
            }
        }
        write!(self.out, r#"        " "#)?;
        self.paint_attributes(paint)?;
        writeln!(self.out, " />")
    }

    /// Writes a centered `<text>` label.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn label(&mut self, at: Point2, text: &str) -> io::Result<()> {
        writeln!(
            self.out,
            r#"    <text x="{:.6}" y="{:.6}" dominant-baseline="middle" text-anchor="middle" font-size="10">{}</text>"#,
            at.x,
            at.y,
            escape_xml(text)
        )
    }

    /// Closes the `<svg>` element, flushes, and returns the writer.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        writeln!(self.out, "</svg>")?;
        self.out.flush()?;
        Ok(self.out)
    }

    fn paint_attributes(&mut self, paint: &Paint) -> io::Result<()> {
        write!(
            self.out,
            r#"fill="{}" fill-opacity="{:.6}" stroke="{}" stroke-opacity="{:.6}" stroke-width="{:.6}" stroke-linecap="round""#,
            escape_xml(&paint.fill),
            paint.fill_opacity,
            escape_xml(&paint.stroke),
            paint.stroke_opacity,
            paint.stroke_width
        )
    }
}

/// Escapes the five XML special characters.
#[must_use]
pub fn escape_xml(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}
