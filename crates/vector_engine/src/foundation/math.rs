//! Math utilities and types
//!
//! Provides the 2D vector type used by every entity, plus the polyline and
//! shape transforms used to build vector-graphics outlines.
//!
//! Screen space has X growing right and Y growing down. Rotations are in
//! degrees and follow the arcade convention `x' = x cosθ + y sinθ`,
//! `y' = -x sinθ + y cosθ`, so a heading of 180° points up the screen.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f64>;

/// Open or closed sequence of points
pub type Polyline = Vec<Vec2>;

/// A set of polylines drawn together (hull, windshield, ...)
pub type Shape = Vec<Polyline>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f64 = std::f64::consts::PI;

    /// 2 * Pi
    pub const TAU: f64 = 2.0 * PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f64 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f64 = 180.0 / PI;
}

/// Convert degrees to radians
pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees * constants::DEG_TO_RAD
}

/// Convert radians to degrees
pub fn rad_to_deg(radians: f64) -> f64 {
    radians * constants::RAD_TO_DEG
}

/// Translate a point
pub fn translate(v: Vec2, translation: Vec2) -> Vec2 {
    v + translation
}

/// Rotate a point around the origin by `theta_deg` degrees
pub fn rotate_deg(v: Vec2, theta_deg: f64) -> Vec2 {
    let (sin, cos) = deg_to_rad(theta_deg).sin_cos();
    Vec2::new(v.x * cos + v.y * sin, -v.x * sin + v.y * cos)
}

/// Unit vector a ship with rotation `rot_deg` points along
pub fn heading(rot_deg: f64) -> Vec2 {
    rotate_deg(Vec2::new(0.0, 1.0), rot_deg)
}

/// Euclidean distance between two points
pub fn distance(a: Vec2, b: Vec2) -> f64 {
    (b - a).norm()
}

/// Middle point between two points
pub fn midpoint(a: Vec2, b: Vec2) -> Vec2 {
    (a + b) * 0.5
}

/// Normalize a vector, leaving the zero vector untouched
pub fn normalized_or_zero(v: Vec2) -> Vec2 {
    let len = v.norm();
    if len == 0.0 {
        v
    } else {
        v / len
    }
}

/// Rotate every point of a polyline around the origin
pub fn rotate_polyline(points: &mut Polyline, theta_deg: f64) {
    for p in points.iter_mut() {
        *p = rotate_deg(*p, theta_deg);
    }
}

/// Translate every point of a polyline
pub fn translate_polyline(points: &mut Polyline, translation: Vec2) {
    for p in points.iter_mut() {
        *p += translation;
    }
}

/// Rotate every polyline of a shape around the origin
pub fn rotate_shape(shape: &mut Shape, theta_deg: f64) {
    for line in shape.iter_mut() {
        rotate_polyline(line, theta_deg);
    }
}

/// Translate every polyline of a shape
pub fn translate_shape(shape: &mut Shape, translation: Vec2) {
    for line in shape.iter_mut() {
        translate_polyline(line, translation);
    }
}

/// Scale unit-sized outline points component-wise
pub fn scale_polyline(points: &[(f64, f64)], size: Vec2) -> Polyline {
    points
        .iter()
        .map(|&(x, y)| Vec2::new(x * size.x, y * size.y))
        .collect()
}

/// Break polylines into independent two-point segments
pub fn split_into_segments(shape: &Shape) -> Shape {
    shape
        .iter()
        .flat_map(|line| line.windows(2).map(<[Vec2]>::to_vec))
        .collect()
}
