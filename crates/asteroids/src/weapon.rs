//! Weapons
//!
//! A weapon is inert until armed with a position and velocity. Only armed
//! weapons move, draw, or hit anything.

use vector_engine::foundation::math::Vec2;
use vector_engine::render::{Color, DrawList};

use crate::ship::ShipClass;

/// Common weapon behaviour
pub trait Weapon {
    /// Position in screen space
    fn position(&self) -> Vec2;

    /// Velocity in pixels per simulated second
    fn velocity(&self) -> Vec2;

    /// Whether the weapon is live
    fn is_armed(&self) -> bool;

    /// Launch from `position` with `velocity`
    fn arm(&mut self, position: Vec2, velocity: Vec2);

    /// Make the weapon inert
    fn disarm(&mut self);

    /// Advance one tick
    fn update(&mut self, dt: f64);

    /// Record draw commands
    fn draw(&self, list: &mut DrawList);
}

/// A single-pixel missile
#[derive(Debug, Clone)]
pub struct Missile {
    owner: ShipClass,
    position: Vec2,
    velocity: Vec2,
    armed: bool,
    ttl: f64,
    age: f64,
}

impl Missile {
    /// Unarmed missile belonging to `owner` that expires after `ttl` seconds
    pub fn new(owner: ShipClass, ttl: f64) -> Self {
        Self {
            owner,
            position: Vec2::new(-10.0, -10.0),
            velocity: Vec2::zeros(),
            armed: false,
            ttl,
            age: 0.0,
        }
    }

    /// The class of ship that fired it; a missile never hits its owner
    pub fn owner(&self) -> ShipClass {
        self.owner
    }

    /// Simulated seconds since it was armed
    pub fn age(&self) -> f64 {
        self.age
    }
}

impl Weapon for Missile {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn is_armed(&self) -> bool {
        self.armed
    }

    fn arm(&mut self, position: Vec2, velocity: Vec2) {
        self.position = position;
        self.velocity = velocity;
        self.age = 0.0;
        self.armed = true;
    }

    fn disarm(&mut self) {
        self.armed = false;
    }

    fn update(&mut self, dt: f64) {
        if !self.armed {
            return;
        }
        self.position += self.velocity * dt;
        self.age += dt;
        if self.age >= self.ttl {
            self.armed = false;
        }
    }

    fn draw(&self, list: &mut DrawList) {
        if self.armed {
            list.point(self.position, Color::WHITE);
        }
    }
}
