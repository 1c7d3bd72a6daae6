//! Demo pilot for headless runs
//!
//! Turns toward the nearest live asteroid, fires when lined up and in range,
//! raises the shield when something gets close and thrusts now and then.
//! It only produces key presses, so it drives the game exactly like a player.

use vector_engine::foundation::math::{distance, rad_to_deg, Vec2};
use vector_engine::input::KeyCode;

use crate::game::Game;
use crate::ship::ShipClass;

/// Autopilot tuning
#[derive(Debug, Clone, PartialEq)]
pub struct AutopilotConfig {
    /// Heading error (degrees) within which the pilot fires
    pub fire_tolerance_deg: f64,
    /// Targets further away than this are chased, not shot
    pub fire_distance: f64,
    /// Raise the shield when an asteroid edge is this close
    pub shield_distance: f64,
    /// Thrust for one tick out of this many while chasing
    pub thrust_period: u64,
}

impl Default for AutopilotConfig {
    fn default() -> Self {
        Self {
            fire_tolerance_deg: 8.0,
            fire_distance: 300.0,
            shield_distance: 24.0,
            thrust_period: 15,
        }
    }
}

/// Keyboard-driving demo pilot
#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    config: AutopilotConfig,
}

/// Signed difference `to - from` in degrees, in `(-180, 180]`
fn angle_delta(from: f64, to: f64) -> f64 {
    let delta = (to - from).rem_euclid(360.0);
    if delta > 180.0 {
        delta - 360.0
    } else {
        delta
    }
}

/// Ship rotation that points along `direction`
pub fn rotation_towards(direction: Vec2) -> f64 {
    rad_to_deg(direction.x.atan2(direction.y))
}

impl Autopilot {
    /// Pilot with the given tuning
    pub fn new(config: AutopilotConfig) -> Self {
        Self { config }
    }

    /// Tuning in use
    pub fn config(&self) -> &AutopilotConfig {
        &self.config
    }

    /// Keys to hold this frame
    pub fn keys(&self, game: &Game) -> Vec<KeyCode> {
        let human = game.ship(ShipClass::Human);
        if game.is_game_over() || !human.is_alive() {
            return Vec::new();
        }
        let position = human.position();

        let nearest = game
            .asteroids()
            .map(|(_, a)| a)
            .filter(|a| a.is_alive())
            .map(|a| (a, distance(position, a.position())))
            .min_by(|a, b| a.1.total_cmp(&b.1));
        let Some((target, range)) = nearest else {
            return Vec::new();
        };

        let mut keys = Vec::new();
        let error = angle_delta(human.rotation(), rotation_towards(target.position() - position));
        let step = game.config().ships.rotation_step / 2.0;
        if error > step {
            keys.push(KeyCode::Left);
        } else if error < -step {
            keys.push(KeyCode::Right);
        }

        if error.abs() <= self.config.fire_tolerance_deg && range <= self.config.fire_distance {
            keys.push(KeyCode::Space);
        }
        if range - target.radius() <= self.config.shield_distance {
            keys.push(KeyCode::S);
        }
        if range > self.config.fire_distance && game.ticks() % self.config.thrust_period.max(1) == 0 {
            keys.push(KeyCode::Up);
        }
        keys
    }
}
