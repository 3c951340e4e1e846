use kurbo::{BezPath, Point};

/// Angular sampling step in radians. Fine enough that the chord error is
/// invisible at the target raster sizes.
pub const ANGLE_STEP: f64 = 0.02;

/// Arcs start at 12 o'clock and sweep clockwise.
const START_ANGLE: f64 = -std::f64::consts::FRAC_PI_2;

fn point_at(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

/// Sampled angles from the start through `fraction` of a full turn. The last
/// entry is the exact end angle, so the arc terminates precisely at
/// `-90° + 360°*fraction` regardless of step rounding. Empty for
/// `fraction <= 0`; `fraction` is clamped to 1 so overshoot never wraps.
fn arc_angles(fraction: f64) -> Vec<f64> {
    let fraction = if fraction.is_nan() { 0.0 } else { fraction };
    if fraction <= 0.0 {
        return Vec::new();
    }
    let end = START_ANGLE + std::f64::consts::TAU * fraction.min(1.0);

    let mut angles = Vec::new();
    let mut a = START_ANGLE;
    while a < end {
        angles.push(a);
        a += ANGLE_STEP;
    }
    angles.push(end);
    angles
}

/// Centerline polyline of the progress arc.
pub fn arc_points(center: Point, radius: f64, fraction: f64) -> Vec<Point> {
    arc_angles(fraction)
        .into_iter()
        .map(|a| point_at(center, radius, a))
        .collect()
}

/// Closed band swept between `radius ± stroke_width/2` over the arc's
/// angular range: outer edge forward, inner edge reversed, flat caps at the
/// exact end angles. Fill with non-zero winding.
pub fn arc_band(center: Point, radius: f64, stroke_width: f64, fraction: f64) -> BezPath {
    let angles = arc_angles(fraction);
    let mut path = BezPath::new();
    let Some(&first) = angles.first() else {
        return path;
    };

    let outer = radius + stroke_width / 2.0;
    let inner = (radius - stroke_width / 2.0).max(0.0);

    path.move_to(point_at(center, outer, first));
    for &a in &angles[1..] {
        path.line_to(point_at(center, outer, a));
    }
    for &a in angles.iter().rev() {
        path.line_to(point_at(center, inner, a));
    }
    path.close_path();
    path
}

/// Full annulus for the ring's background track: outer circle forward,
/// inner circle reversed so non-zero winding leaves the hole open.
pub fn ring_track(center: Point, radius: f64, stroke_width: f64) -> BezPath {
    let angles = arc_angles(1.0);
    let outer = radius + stroke_width / 2.0;
    let inner = (radius - stroke_width / 2.0).max(0.0);

    let mut path = BezPath::new();
    let Some(&first) = angles.first() else {
        return path;
    };

    path.move_to(point_at(center, outer, first));
    for &a in &angles[1..] {
        path.line_to(point_at(center, outer, a));
    }
    path.close_path();

    path.move_to(point_at(center, inner, first));
    for &a in angles.iter().rev() {
        path.line_to(point_at(center, inner, a));
    }
    path.close_path();
    path
}
