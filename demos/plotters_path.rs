extern crate plotters;
use plotters::prelude::*;

use smoothpath::{build_path, Curve, DrawingSurface, Point};

/// Flattens the drawing commands into polylines that plotters can stroke.
struct PolylineSurface {
    subpaths: Vec<Vec<(f64, f64)>>,
    cursor: Point,
    steps: usize,
}

impl DrawingSurface for PolylineSurface {
    fn begin_path(&mut self) {
        self.subpaths.clear();
    }

    fn move_to(&mut self, to: Point) {
        self.cursor = to;
        self.subpaths.push(vec![(to.x, to.y)]);
    }

    fn quadratic_curve_to(&mut self, control: Point, end: Point) {
        let curve = Curve::new(self.cursor, control, end);
        if let Some(subpath) = self.subpaths.last_mut() {
            for i in 1..=self.steps {
                let p = curve.eval(i as f64 / self.steps as f64);
                subpath.push((p.x, p.y));
            }
        }
        self.cursor = end;
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let points = vec![
        Point::new(0.0, 1.77),
        Point::new(1.1, -1.0),
        Point::new(4.3, 3.0),
        Point::new(3.2, -4.0),
        Point::new(6.0, -2.5),
        Point::new(7.5, 2.0),
    ];
    let path = build_path(&points)?;

    let mut surface = PolylineSurface {
        subpaths: Vec::new(),
        cursor: path.start(),
        steps: 64,
    };
    path.draw(&mut surface);

    // the chart has to show the control points too, which lie outside the curves
    let (min, max) = points.iter().fold(path.bounding_box(), |(min, max), p| {
        (
            Point::new(min.x.min(p.x), min.y.min(p.y)),
            Point::new(max.x.max(p.x), max.y.max(p.y)),
        )
    });

    let root = BitMapBackend::new("smooth_path.png", (640, 480)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Smooth Quadratic Path", ("sans-serif", 21).into_font())
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d((min.x - 1.0)..(max.x + 1.0), (min.y - 1.0)..(max.y + 1.0))?;

    chart.configure_mesh().draw()?;

    // draw the input points
    chart
        .draw_series(
            points
                .iter()
                .map(|p| Circle::new((p.x, p.y), 4, BLUE.filled())),
        )?
        .label("Input Points")
        .legend(|(x, y)| Circle::new((x + 10, y), 4, BLUE.filled()));

    // draw the path itself
    for subpath in surface.subpaths {
        chart
            .draw_series(LineSeries::new(subpath, &RED))?
            .label("Path")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));
    }

    // draw a marker every 10 percent from the lookup table
    chart
        .draw_series(
            path.lookup_table()
                .iter()
                .step_by(10)
                .map(|p| Circle::new((p.x, p.y), 3, GREEN.filled())),
        )?
        .label("10 % Markers")
        .legend(|(x, y)| Circle::new((x + 10, y), 3, GREEN.filled()));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
