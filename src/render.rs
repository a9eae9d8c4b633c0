//! Drawing a [`Path`] on a 2D surface.
//!
//! Canvas-like APIs (HTML canvas, cairo, skia, ...) all expose the same three path commands
//! this crate needs, so a backend only has to implement [`DrawingSurface`]. [`SvgPathData`] is
//! a backend that produces the `d` attribute of an SVG `<path>` element.

use alloc::string::String;
use core::fmt::{self, Write};

use crate::path::Path;
use crate::point::Point;

/// The subset of a 2D drawing context used to stroke a path.
pub trait DrawingSurface {
    /// Start a new path, discarding any previous one.
    fn begin_path(&mut self);

    /// Move the pen to `to` without drawing.
    fn move_to(&mut self, to: Point);

    /// Draw a quadratic Bézier from the current pen position through `control` to `end`.
    fn quadratic_curve_to(&mut self, control: Point, end: Point);
}

/// Issue the commands for `path`: begin a new path, move to its start, then one
/// quadratic curve per segment. Nothing else on the surface is touched.
pub fn draw<S>(surface: &mut S, path: &Path)
where
    S: DrawingSurface + ?Sized,
{
    surface.begin_path();
    surface.move_to(path.start());
    for curve in path.curves() {
        surface.quadratic_curve_to(curve.control(), curve.end());
    }
}

/// SVG path data (`M x y Q cx cy x y ...`) built from drawing commands.
///
/// # Examples
/// ```rust
/// use smoothpath::{build_path, Point, SvgPathData};
///
/// let path = build_path(&[
///     Point::new(0.0, 0.0),
///     Point::new(10.0, 0.0),
///     Point::new(10.0, 10.0),
/// ])
/// .unwrap();
///
/// let mut svg = SvgPathData::new();
/// path.draw(&mut svg);
/// assert_eq!(svg.as_str(), "M0 0Q10 0 10 10");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SvgPathData {
    data: String,
}

impl SvgPathData {
    pub fn new() -> Self {
        SvgPathData::default()
    }

    pub fn as_str(&self) -> &str {
        &self.data
    }

    pub fn into_string(self) -> String {
        self.data
    }
}

impl DrawingSurface for SvgPathData {
    fn begin_path(&mut self) {
        self.data.clear();
    }

    fn move_to(&mut self, to: Point) {
        write!(self.data, "M{} {}", to.x, to.y).ok();
    }

    fn quadratic_curve_to(&mut self, control: Point, end: Point) {
        write!(self.data, "Q{} {} {} {}", control.x, control.y, end.x, end.y).ok();
    }
}

impl fmt::Display for SvgPathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_path;
    use alloc::string::ToString;
    use alloc::vec::Vec;

    #[derive(Debug, PartialEq)]
    enum Command {
        Begin,
        MoveTo(Point),
        QuadTo(Point, Point),
    }

    #[derive(Default)]
    struct Recorder {
        commands: Vec<Command>,
    }

    impl DrawingSurface for Recorder {
        fn begin_path(&mut self) {
            self.commands.push(Command::Begin);
        }

        fn move_to(&mut self, to: Point) {
            self.commands.push(Command::MoveTo(to));
        }

        fn quadratic_curve_to(&mut self, control: Point, end: Point) {
            self.commands.push(Command::QuadTo(control, end));
        }
    }

    #[test]
    fn draw_issues_one_quad_per_curve() {
        let path = build_path(&[
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ])
        .unwrap();

        let mut recorder = Recorder::default();
        draw(&mut recorder, &path);

        assert_eq!(
            recorder.commands,
            [
                Command::Begin,
                Command::MoveTo(Point::new(0.0, 0.0)),
                Command::QuadTo(Point::new(10.0, 0.0), Point::new(10.0, 5.0)),
                Command::QuadTo(Point::new(10.0, 10.0), Point::new(0.0, 10.0)),
            ]
        );
    }

    #[test]
    fn draw_works_through_trait_objects() {
        let path = build_path(&[
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 0.0),
        ])
        .unwrap();

        let mut recorder = Recorder::default();
        let surface: &mut dyn DrawingSurface = &mut recorder;
        path.draw(surface);
        assert_eq!(recorder.commands.len(), 3);
    }

    #[test]
    fn svg_path_data_restarts_on_begin_path() {
        let path = build_path(&[
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ])
        .unwrap();

        let mut svg = SvgPathData::new();
        path.draw(&mut svg);
        path.draw(&mut svg);
        assert_eq!(svg.to_string(), "M0 0Q10 0 10 5Q10 10 0 10");
        assert_eq!(svg.into_string(), "M0 0Q10 0 10 5Q10 10 0 10");
    }
}
