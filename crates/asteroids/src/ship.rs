//! Ships: the human fighter and the two saucers

use rand::Rng;
use vector_engine::foundation::math::{
    distance, heading, midpoint, rotate_polyline, rotate_shape, scale_polyline, split_into_segments,
    translate_shape, Polyline, Shape, Vec2,
};
use vector_engine::foundation::random;
use vector_engine::render::{Color, DrawList};

use crate::config::GameConfig;

const HUMAN_HULL: [(f64, f64); 5] = [(0.5, -0.5), (0.0, 0.5), (-0.5, -0.5), (0.0, -0.25), (0.5, -0.5)];
const ENGINE_FLAME: [(f64, f64); 5] = [(-0.25, -0.25), (-0.1, -0.3), (0.0, -0.75), (0.1, -0.3), (0.25, -0.25)];
const SAUCER_HULL: [(f64, f64); 8] = [
    (0.5, 0.0),
    (0.25, 0.25),
    (-0.25, 0.25),
    (-0.5, 0.0),
    (-0.25, -0.25),
    (0.25, -0.25),
    (0.5, 0.0),
    (-0.5, 0.0),
];
const SAUCER_WINDSHIELD: [(f64, f64); 4] = [(0.2, 0.25), (0.15, 0.4), (-0.15, 0.4), (-0.2, 0.25)];

const SHIELD_SEGMENTS: usize = 64;
const SHIELD_SCALE: f64 = 1.25;
const SHIELD_BLINK_STEPS: u32 = 4;
const DEBRIS_SPIN_DEG: f64 = 2.5;
const DEBRIS_SPREAD: f64 = 0.01;
const DEBRIS_MOMENTUM: f64 = 0.5;

/// Where a parked saucer waits off screen
pub const PARKING_SPOT: Vec2 = Vec2::new(-100.0, -100.0);

/// Kind of ship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShipClass {
    /// The player
    Human,
    /// Small, accurate saucer
    AlienSmall,
    /// Big, sloppy saucer
    AlienBig,
}

impl ShipClass {
    /// Every class, in slot order
    pub const ALL: [Self; 3] = [Self::Human, Self::AlienSmall, Self::AlienBig];

    /// Slot of this class in the game's ship array
    pub const fn index(self) -> usize {
        match self {
            Self::Human => 0,
            Self::AlienSmall => 1,
            Self::AlienBig => 2,
        }
    }

    /// Whether this is a saucer
    pub const fn is_alien(self) -> bool {
        !matches!(self, Self::Human)
    }
}

/// Per-ship tuning taken from the game configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ShipTuning {
    /// Per-axis speed limit
    pub max_velocity: f64,
    /// Flame duration after a thrust
    pub impulse_ticks: u32,
    /// Debris animation length
    pub explosion_ticks: u32,
    /// Shield duration and recharge time
    pub shield_ticks: u32,
    /// Saucer course change period
    pub jitter_ticks: u32,
    /// Saucer course change magnitude
    pub jitter: f64,
}

impl ShipTuning {
    /// Extract the ship tuning from the game configuration
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            max_velocity: config.ships.max_velocity,
            impulse_ticks: config.ships.impulse_ticks,
            explosion_ticks: config.ships.explosion_ticks,
            shield_ticks: config.ships.shield_ticks,
            jitter_ticks: config.aliens.jitter_ticks,
            jitter: config.aliens.jitter,
        }
    }
}

impl Default for ShipTuning {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

/// A ship
#[derive(Debug, Clone)]
pub struct Ship {
    class: ShipClass,
    size: Vec2,
    position: Vec2,
    velocity: Vec2,
    rotation: f64,
    alive: bool,
    visible: bool,
    shield: bool,
    shield_tick: u32,
    shield_blink: u32,
    impulse_ticks: u32,
    explosion_ticks: Option<u32>,
    jitter_tick: u32,
    hull: Shape,
    engine: Shape,
    shield_outline: Shape,
    debris: Shape,
    debris_spin: Vec<f64>,
    debris_drift: Vec<Vec2>,
    debris_offset: Vec2,
    tuning: ShipTuning,
}

impl Ship {
    /// Build a ship of the given class and size, parked, alive and hidden
    pub fn new(class: ShipClass, size: Vec2, tuning: ShipTuning) -> Self {
        let (hull, engine, shield_outline) = match class {
            ShipClass::Human => (
                vec![scale_polyline(&HUMAN_HULL, size)],
                vec![scale_polyline(&ENGINE_FLAME, size)],
                vec![shield_circle(size.x * SHIELD_SCALE)],
            ),
            ShipClass::AlienSmall | ShipClass::AlienBig => {
                // Saucers are drawn upside down relative to the human outline
                let flipped = Vec2::new(size.x, -size.y);
                (
                    vec![
                        scale_polyline(&SAUCER_HULL, flipped),
                        scale_polyline(&SAUCER_WINDSHIELD, flipped),
                    ],
                    Shape::new(),
                    Shape::new(),
                )
            }
        };

        Self {
            class,
            size,
            position: Vec2::zeros(),
            velocity: Vec2::zeros(),
            rotation: 0.0,
            alive: true,
            visible: false,
            shield: false,
            shield_tick: 0,
            shield_blink: 0,
            impulse_ticks: 0,
            explosion_ticks: None,
            jitter_tick: 0,
            hull,
            engine,
            shield_outline,
            debris: Shape::new(),
            debris_spin: Vec::new(),
            debris_drift: Vec::new(),
            debris_offset: Vec2::zeros(),
            tuning,
        }
    }

    /// Ship class
    pub fn class(&self) -> ShipClass {
        self.class
    }

    /// Hull size
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Position in screen space
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Move the ship
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Velocity in pixels per simulated second
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Change the velocity
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    /// Heading in degrees
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Change the heading
    pub fn set_rotation(&mut self, rotation: f64) {
        self.rotation = rotation;
    }

    /// Whether the ship is flying
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Mark the ship alive or dead
    pub fn set_alive(&mut self, alive: bool) {
        self.alive = alive;
    }

    /// Whether the ship is on screen
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the ship
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Alive and on screen; only active ships take part in ship collisions
    pub fn is_active(&self) -> bool {
        self.alive && self.visible
    }

    /// Whether the shield is up
    pub fn is_shield_active(&self) -> bool {
        self.shield
    }

    /// Ticks since the shield was last raised
    pub fn shield_tick(&self) -> u32 {
        self.shield_tick
    }

    /// Remaining engine flame ticks
    pub fn impulse_ticks(&self) -> u32 {
        self.impulse_ticks
    }

    /// Remaining debris ticks, `None` when never exploded since the last reset
    pub fn explosion_ticks(&self) -> Option<u32> {
        self.explosion_ticks
    }

    /// Whether the debris animation is running
    pub fn is_exploding(&self) -> bool {
        self.explosion_ticks.is_some_and(|ticks| ticks > 0)
    }

    /// Current debris segments in ship-local space
    pub fn debris(&self) -> &Shape {
        &self.debris
    }

    /// Back to the initial state: centred on the origin, alive, hidden
    pub fn reset(&mut self) {
        self.position = Vec2::zeros();
        self.velocity = Vec2::zeros();
        self.rotation = 0.0;
        self.explosion_ticks = None;
        self.impulse_ticks = 0;
        self.shield = false;
        self.shield_tick = 0;
        self.jitter_tick = 0;
        self.debris.clear();
        self.alive = true;
        self.visible = false;
    }

    /// Turn counter-clockwise on screen
    pub fn rotate_left(&mut self, degrees: f64) {
        self.rotation += degrees;
    }

    /// Turn clockwise on screen
    pub fn rotate_right(&mut self, degrees: f64) {
        self.rotation -= degrees;
    }

    /// Thrust along the heading; each velocity component is capped
    pub fn impulse(&mut self, amount: f64) {
        let max = self.tuning.max_velocity;
        self.velocity += heading(self.rotation) * amount;
        self.velocity.x = self.velocity.x.clamp(-max, max);
        self.velocity.y = self.velocity.y.clamp(-max, max);
        self.impulse_ticks = self.tuning.impulse_ticks;
    }

    /// Raise the shield if it has recharged; returns whether it went up
    pub fn activate_shield(&mut self) -> bool {
        if self.shield_tick > self.tuning.shield_ticks {
            self.shield_tick = 0;
            self.shield = true;
            true
        } else {
            false
        }
    }

    /// Whether a point touches the hull
    pub fn is_colliding(&self, point: Vec2) -> bool {
        distance(self.position, point) <= self.size.x
    }

    /// Blow the ship up and start the debris animation
    pub fn explode<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.alive = false;
        self.visible = false;
        self.explosion_ticks = Some(self.tuning.explosion_ticks);

        self.debris = split_into_segments(&self.hull);
        self.debris_offset = Vec2::zeros();

        let spread = self.size.norm() * DEBRIS_SPREAD;
        self.debris_spin = self.debris.iter().map(|_| random::signed(rng, DEBRIS_SPIN_DEG)).collect();
        self.debris_drift = self
            .debris
            .iter()
            .map(|segment| midpoint(segment[0], segment[1]) * random::unsigned(rng, spread))
            .collect();
    }

    /// Advance one tick
    pub fn update<R: Rng + ?Sized>(&mut self, dt: f64, rng: &mut R) {
        if self.alive {
            match self.class {
                ShipClass::Human => self.update_human(dt),
                ShipClass::AlienSmall | ShipClass::AlienBig => self.update_saucer(dt, rng),
            }
        } else if self.is_exploding() {
            self.update_debris(dt);
        }
    }

    fn update_human(&mut self, dt: f64) {
        self.shield_tick += 1;
        if self.shield_tick > self.tuning.shield_ticks {
            self.shield = false;
        }
        if self.shield {
            self.shield_blink = (self.shield_blink + 1) % (SHIELD_BLINK_STEPS + 1);
        }

        self.position += self.velocity * dt;
        self.impulse_ticks = self.impulse_ticks.saturating_sub(1);
    }

    fn update_saucer<R: Rng + ?Sized>(&mut self, dt: f64, rng: &mut R) {
        self.jitter_tick += 1;
        if self.jitter_tick >= self.tuning.jitter_ticks {
            self.jitter_tick = 0;
            self.velocity.y += random::signed(rng, 2.0 * self.tuning.jitter);
            self.velocity.x += random::unsigned(rng, self.tuning.jitter);
        }
        self.position += self.velocity * dt;
    }

    fn update_debris(&mut self, dt: f64) {
        let remaining = self.explosion_ticks.unwrap_or(0).saturating_sub(1);
        self.explosion_ticks = Some(remaining);
        if remaining == 0 {
            return;
        }

        for ((segment, spin), drift) in self.debris.iter_mut().zip(&self.debris_spin).zip(&self.debris_drift) {
            rotate_polyline(segment, *spin);
            for point in segment.iter_mut() {
                *point += drift;
            }
        }
        // Debris keeps part of the ship's momentum
        self.debris_offset += self.velocity * dt * DEBRIS_MOMENTUM;
    }

    /// Record the ship's draw commands
    pub fn draw(&self, list: &mut DrawList) {
        if self.alive {
            if !self.visible {
                return;
            }
            match self.class {
                ShipClass::Human => self.draw_human(list),
                ShipClass::AlienSmall | ShipClass::AlienBig => {
                    let mut hull = self.hull.clone();
                    translate_shape(&mut hull, self.position);
                    list.shape(hull, false, Color::WHITE);
                }
            }
        } else if self.is_exploding() {
            let total = f64::from(self.tuning.explosion_ticks.max(1));
            let remaining = f64::from(self.explosion_ticks.unwrap_or(0));

            let mut debris = self.debris.clone();
            rotate_shape(&mut debris, self.rotation);
            translate_shape(&mut debris, self.position + self.debris_offset);
            list.shape(debris, false, Color::WHITE.scaled(remaining / total));
        }
    }

    fn draw_human(&self, list: &mut DrawList) {
        let mut hull = self.hull.clone();
        rotate_shape(&mut hull, self.rotation);
        translate_shape(&mut hull, self.position);
        list.shape(hull, false, Color::WHITE);

        if self.impulse_ticks > 0 {
            let mut flame = self.engine.clone();
            rotate_shape(&mut flame, self.rotation);
            translate_shape(&mut flame, self.position);
            list.shape(flame, false, Color::WHITE);
        }

        if self.shield {
            let mut outline = self.shield_outline.clone();
            translate_shape(&mut outline, self.position);
            // Blink while the shield is running out
            let color = if self.shield_tick * 4 > self.tuning.shield_ticks * 3 {
                Color::WHITE.scaled(f64::from(self.shield_blink) / f64::from(SHIELD_BLINK_STEPS))
            } else {
                Color::WHITE
            };
            list.shape(outline, false, color);
        }
    }
}

fn shield_circle(radius: f64) -> Polyline {
    let step = std::f64::consts::TAU / SHIELD_SEGMENTS as f64;
    let mut circle: Polyline = (0..SHIELD_SEGMENTS)
        .map(|i| {
            let angle = i as f64 * step;
            Vec2::new(angle.cos() * radius, angle.sin() * radius)
        })
        .collect();
    circle.push(circle[0]);
    circle
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn human() -> Ship {
        let mut ship = Ship::new(ShipClass::Human, Vec2::new(16.0, 16.0), ShipTuning::default());
        ship.set_visible(true);
        ship
    }

    #[test]
    fn test_reset_state() {
        let mut ship = human();
        ship.set_position(Vec2::new(10.0, 10.0));
        ship.impulse(4.0);
        ship.reset();

        assert_eq!(ship.position(), Vec2::zeros());
        assert_eq!(ship.velocity(), Vec2::zeros());
        assert_eq!(ship.explosion_ticks(), None);
        assert_eq!(ship.impulse_ticks(), 0);
        assert!(ship.is_alive());
        assert!(!ship.is_visible());
        assert!(!ship.is_shield_active());
    }

    #[test]
    fn test_impulse_follows_heading() {
        let mut ship = human();
        ship.set_rotation(180.0);
        ship.impulse(4.0);
        assert_relative_eq!(ship.velocity().x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(ship.velocity().y, -4.0, epsilon = 1e-9);
        assert_eq!(ship.impulse_ticks(), 20);
    }

    #[test]
    fn test_speed_is_clamped_per_axis() {
        let mut ship = human();
        ship.set_rotation(90.0);
        for _ in 0..100 {
            ship.impulse(4.0);
        }
        assert_relative_eq!(ship.velocity().x, 250.0);

        ship.set_rotation(-90.0);
        for _ in 0..200 {
            ship.impulse(4.0);
        }
        assert_relative_eq!(ship.velocity().x, -250.0);
    }

    #[test]
    fn test_shield_needs_recharge() {
        let mut ship = human();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(!ship.activate_shield());

        for _ in 0..101 {
            ship.update(0.1, &mut rng);
        }
        assert!(ship.activate_shield());
        assert!(ship.is_shield_active());
        assert!(!ship.activate_shield());

        for _ in 0..101 {
            ship.update(0.1, &mut rng);
        }
        assert!(!ship.is_shield_active());
    }

    #[test]
    fn test_explosion_runs_out() {
        let mut ship = human();
        let mut rng = StdRng::seed_from_u64(2);
        ship.explode(&mut rng);

        assert!(!ship.is_alive());
        assert!(ship.is_exploding());
        assert_eq!(ship.debris().len(), HUMAN_HULL.len() - 1);

        for _ in 0..32 {
            ship.update(0.1, &mut rng);
        }
        assert!(!ship.is_exploding());
    }

    #[test]
    fn test_explosion_leaves_shield_until_reset() {
        let mut ship = human();
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..101 {
            ship.update(0.1, &mut rng);
        }
        assert!(ship.activate_shield());

        ship.explode(&mut rng);
        assert!(ship.is_shield_active());

        ship.reset();
        assert!(!ship.is_shield_active());
    }

    #[test]
    fn test_collision_radius_is_width() {
        let mut ship = human();
        ship.set_position(Vec2::new(100.0, 100.0));
        assert!(ship.is_colliding(Vec2::new(116.0, 100.0)));
        assert!(!ship.is_colliding(Vec2::new(116.5, 100.0)));
    }

    #[test]
    fn test_saucer_drifts_right() {
        let mut saucer = Ship::new(ShipClass::AlienBig, Vec2::new(24.0, 24.0), ShipTuning::default());
        let mut rng = StdRng::seed_from_u64(3);
        saucer.set_velocity(Vec2::new(30.0, 0.0));
        for _ in 0..26 {
            saucer.update(0.1, &mut rng);
        }
        assert!(saucer.velocity().x >= 30.0);
        assert!(saucer.position().x > 0.0);
    }

    #[test]
    fn test_draw_hidden_ship_records_nothing() {
        let ship = Ship::new(ShipClass::AlienSmall, Vec2::new(16.0, 16.0), ShipTuning::default());
        let mut list = DrawList::new(vector_engine::render::Viewport::default());
        ship.draw(&mut list);
        assert!(list.is_empty());
    }
}
