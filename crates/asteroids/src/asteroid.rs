//! Asteroids and their particle bursts

use rand::Rng;
use vector_engine::foundation::math::{rotate_polyline, translate_polyline, Polyline, Vec2};
use vector_engine::foundation::random;
use vector_engine::physics::collision::BoundingCircle;
use vector_engine::render::{Color, DrawList};

/// Outline vertex count
pub const OUTLINE_VERTICES: usize = 16;
/// Burst animation length
pub const EXPLOSION_TICKS: u32 = 64;
/// Upper bound of burst particles
pub const MAX_DEBRIS: usize = 16;

const SPIN_FACTOR: f64 = 0.25;
const DEBRIS_BASE_SPEED: f64 = 16.0;
const DEBRIS_SCALE: f64 = 8.0;

/// Asteroid size class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AsteroidClass {
    /// Spawned at level start
    Big,
    /// Half of a big one
    Medium,
    /// Half of a medium one; does not split
    Small,
}

impl AsteroidClass {
    /// Points for shooting an asteroid of this class
    pub const fn points(self) -> u32 {
        match self {
            Self::Big => 5,
            Self::Medium => 10,
            Self::Small => 20,
        }
    }

    /// Nominal radius
    pub const fn base_radius(self) -> f64 {
        match self {
            Self::Big => 30.0,
            Self::Medium => 20.0,
            Self::Small => 10.0,
        }
    }

    /// Random radius added on top of the nominal one
    pub const fn radius_jitter(self) -> f64 {
        match self {
            Self::Big => 3.0,
            Self::Medium | Self::Small => 5.0,
        }
    }

    /// Outline jaggedness
    pub const fn roughness(self) -> f64 {
        match self {
            Self::Big => 5.0,
            Self::Medium => 3.0,
            Self::Small => 2.0,
        }
    }

    /// Class of the two fragments, `None` for the smallest class
    pub const fn split(self) -> Option<Self> {
        match self {
            Self::Big => Some(Self::Medium),
            Self::Medium => Some(Self::Small),
            Self::Small => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Particle {
    offset: Vec2,
    scale: f64,
}

/// An asteroid
#[derive(Debug, Clone)]
pub struct Asteroid {
    class: AsteroidClass,
    position: Vec2,
    velocity: Vec2,
    radius: f64,
    rotation: f64,
    spin: f64,
    outline: Polyline,
    alive: bool,
    explosion_ticks: u32,
    burst_origin: Vec2,
    debris: Vec<Particle>,
}

impl Asteroid {
    /// Create a live asteroid with a random outline and spin
    pub fn new<R: Rng + ?Sized>(
        class: AsteroidClass,
        position: Vec2,
        velocity: Vec2,
        radius: f64,
        rng: &mut R,
    ) -> Self {
        let roughness = class.roughness();
        let step = 360.0 / OUTLINE_VERTICES as f64;
        let outline = (0..OUTLINE_VERTICES)
            .map(|i| {
                let angle = (i as f64 * step).to_radians();
                Vec2::new(
                    radius * angle.cos() + random::signed(rng, roughness),
                    radius * angle.sin() + random::signed(rng, roughness),
                )
            })
            .collect();
        let spin = random::unit(rng) * velocity.norm() * SPIN_FACTOR * random::sign(rng);

        Self {
            class,
            position,
            velocity,
            radius,
            rotation: 0.0,
            spin,
            outline,
            alive: true,
            explosion_ticks: 0,
            burst_origin: position,
            debris: Vec::new(),
        }
    }

    /// Size class
    pub fn class(&self) -> AsteroidClass {
        self.class
    }

    /// Position in screen space
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Move the asteroid
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Velocity in pixels per simulated second
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Collision radius
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Outline in asteroid-local space
    pub fn outline(&self) -> &Polyline {
        &self.outline
    }

    /// Points for shooting it
    pub fn points(&self) -> u32 {
        self.class.points()
    }

    /// Whether the asteroid is intact
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Whether the burst animation is running
    pub fn is_exploding(&self) -> bool {
        self.explosion_ticks > 0
    }

    /// Destroyed and done animating; safe to drop
    pub fn is_finished(&self) -> bool {
        !self.alive && !self.is_exploding()
    }

    /// Number of burst particles
    pub fn debris_count(&self) -> usize {
        self.debris.len()
    }

    /// Whether a point is inside the collision radius
    pub fn collide(&self, point: Vec2) -> bool {
        BoundingCircle::new(self.position, self.radius).contains_point(point)
    }

    /// Destroy the asteroid and start its particle burst
    pub fn explode<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.alive = false;
        self.explosion_ticks = EXPLOSION_TICKS;
        self.burst_origin = self.position;

        let half = (MAX_DEBRIS / 2) as f64;
        let count = (half + random::unsigned(rng, MAX_DEBRIS as f64) / 2.0) as usize;
        let size = self.radius.trunc();
        let step = std::f64::consts::TAU / count as f64;

        self.debris = (0..count)
            .map(|i| {
                let reach = size / 4.0 + random::signed(rng, size).abs();
                let angle = i as f64 * step;
                Particle {
                    offset: Vec2::new(angle.cos(), angle.sin()) * reach,
                    scale: random::unsigned(rng, DEBRIS_SCALE),
                }
            })
            .collect();
    }

    /// Advance one tick
    pub fn update(&mut self, dt: f64) {
        if self.alive {
            self.position += self.velocity * dt;
            self.rotation += self.spin;
        } else if self.is_exploding() {
            self.explosion_ticks -= 1;
            // The burst keeps the asteroid's momentum
            self.burst_origin += self.velocity * dt;
        }
    }

    /// Record the asteroid's draw commands
    pub fn draw(&self, list: &mut DrawList) {
        if self.alive {
            let mut outline = self.outline.clone();
            rotate_polyline(&mut outline, self.rotation);
            translate_polyline(&mut outline, self.position);
            list.lines(outline, true, Color::WHITE);
        } else if self.is_exploding() {
            let elapsed = f64::from(EXPLOSION_TICKS - self.explosion_ticks);
            let color = Color::WHITE.scaled(f64::from(self.explosion_ticks) / f64::from(EXPLOSION_TICKS));
            for particle in &self.debris {
                let spread = (DEBRIS_BASE_SPEED + particle.scale) / 100.0 * elapsed;
                list.point(self.burst_origin + particle.offset * spread, color);
            }
        }
    }
}
