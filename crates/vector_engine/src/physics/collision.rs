//! Collision primitives
//!
//! Arcade collision is distance based: two bodies touch when their centres
//! are no further apart than the sum of their radii. Touching edges count
//! as a hit.

use crate::foundation::math::{distance, Vec2};

/// A bounding circle for collision detection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingCircle {
    /// The center position of the circle in screen space
    pub center: Vec2,
    /// The radius of the circle
    pub radius: f64,
}

impl BoundingCircle {
    /// Creates a new bounding circle with the given center and radius
    pub fn new(center: Vec2, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Check if this circle intersects with another
    pub fn intersects(&self, other: &Self) -> bool {
        let distance_squared = (self.center - other.center).norm_squared();
        let radius_sum = self.radius + other.radius;
        distance_squared <= radius_sum * radius_sum
    }

    /// Check if a point lies inside or on the circle
    pub fn contains_point(&self, point: Vec2) -> bool {
        distance(self.center, point) <= self.radius
    }
}

/// Axis-aligned play area with its origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Width of the area
    pub width: f64,
    /// Height of the area
    pub height: f64,
}

impl Bounds {
    /// Create bounds of the given size
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether a point is inside the area, edges included
    pub fn contains(&self, p: Vec2) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }

    /// Whether the X coordinate is inside the horizontal extent
    pub fn contains_x(&self, x: f64) -> bool {
        (0.0..=self.width).contains(&x)
    }

    /// Wrap a point that left the area to the opposite edge
    pub fn wrap(&self, mut p: Vec2) -> Vec2 {
        p.x = wrap_axis(p.x, self.width);
        p.y = wrap_axis(p.y, self.height);
        p
    }

    /// Wrap only the vertical coordinate
    pub fn wrap_y(&self, mut p: Vec2) -> Vec2 {
        p.y = wrap_axis(p.y, self.height);
        p
    }
}

fn wrap_axis(value: f64, extent: f64) -> f64 {
    if value < 0.0 {
        extent
    } else if value > extent {
        0.0
    } else {
        value
    }
}
