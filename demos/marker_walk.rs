use smoothpath::{build_path, distance, GeoPoint, Point, SvgPathData};

fn main() {
    let path = build_path(&[
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(0.0, 10.0),
        Point::new(0.0, 20.0),
    ])
    .unwrap();

    println!("curves: {}  length: {:.4}", path.len(), path.length());
    println!("segment percentages: {:?}", path.segment_percentages());

    let mut prev: Option<Point> = None;
    for percentage in (0..=100u8).step_by(10) {
        let p = path.point_at_percentage(percentage).unwrap();
        let gap = prev.map(|q| p.distance(q));
        match (gap, path.tangent_at_percentage(f64::from(percentage))) {
            (Some(d), Some(tangent)) => println!(
                "{:>3} %  p=({:.3}, {:.3})  gap={:.4}  heading={:.1}°",
                percentage,
                p.x,
                p.y,
                d,
                tangent.y.atan2(tangent.x).to_degrees()
            ),
            _ => println!("{:>3} %  p=({:.3}, {:.3})", percentage, p.x, p.y),
        }
        prev = Some(p);
    }

    let mut svg = SvgPathData::new();
    path.draw(&mut svg);
    println!("svg: <path d=\"{}\"/>", svg);

    let berlin = GeoPoint::new(52.5200, 13.4050);
    let brandenburg_gate = GeoPoint::new(52.5163, 13.3777);
    println!(
        "Berlin center to Brandenburg Gate: {:.0} m",
        distance(&berlin, &brandenburg_gate)
    );
}
