//! Per-tick handlers: saucers, limits, respawn, bonus, level, text

use rand::Rng;
use vector_engine::foundation::math::{distance, Vec2};
use vector_engine::foundation::random;
use vector_engine::render::TextAlign;

use super::Game;
use crate::config::GameConfig;
use crate::event::GameEvent;
use crate::ship::{ShipClass, PARKING_SPOT};
use crate::weapon::{Missile, Weapon};

/// Vertical distance between lines of a text block
const LINE_HEIGHT: f64 = 20.0;
/// Baseline of the HUD
const HUD_Y: f64 = 16.0;
/// Horizontal inset of the side HUD fields
const HUD_INSET: f64 = 96.0;
/// Top of the help and best-score blocks
const SPLASH_BLOCK_Y: f64 = 128.0;
/// Saucers never enter closer than this to the top or bottom edge
const SAUCER_EDGE_MARGIN: f64 = 50.0;

/// Ticks until the next saucer appearance
pub(super) fn alien_countdown<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> i64 {
    let mean = f64::from(config.aliens.spawn_ticks);
    ((mean + random::signed(rng, mean / 2.0)).round() as i64).max(1)
}

/// Page shown on the game-over splash
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashPage {
    /// "Game Over" in the middle of the screen
    GameOver,
    /// The help text
    Help,
    /// The best-score table
    BestScores,
}

impl Game {
    /// Page the splash is currently showing
    pub fn splash_page(&self) -> SplashPage {
        let delay = self.config.gameplay.splash_delay_ms.max(1);
        let shown_for = self.elapsed_ms().saturating_sub(self.splash_started_ms);
        match (shown_for / delay) % 3 {
            0 => SplashPage::GameOver,
            1 => SplashPage::Help,
            _ => SplashPage::BestScores,
        }
    }

    /// Every few ticks each active saucer fires at the human
    pub(super) fn aliens_fire(&mut self) {
        self.alien_fire_tick += 1;
        if self.alien_fire_tick < self.config.gameplay.alien_shot_delay_ticks {
            return;
        }
        self.alien_fire_tick = 0;

        let target = self.ship(ShipClass::Human).position();
        for class in [ShipClass::AlienBig, ShipClass::AlienSmall] {
            let saucer = self.ship(class);
            if !saucer.is_active() {
                continue;
            }
            let origin = saucer.position();

            // Deliberately off target; the small saucer aims better
            let inaccuracy = match class {
                ShipClass::AlienBig => self.config.aliens.big_inaccuracy,
                _ => self.config.aliens.small_inaccuracy,
            };
            let delta = target - origin;
            let angle = delta.y.atan2(delta.x) + inaccuracy + random::signed(&mut self.rng, inaccuracy);
            let velocity = Vec2::new(angle.cos(), angle.sin()) * self.config.gameplay.missile_speed;

            let mut missile = Missile::new(class, self.config.gameplay.missile_ttl);
            missile.arm(origin, velocity);
            self.missiles.insert(missile);
            log::trace!("{:?} fired at {:.0},{:.0}", class, target.x, target.y);
        }
    }

    /// Wrap ships and asteroids that left the screen
    ///
    /// A saucer that leaves sideways is gone for good and parked off screen.
    pub(super) fn force_inside_limits(&mut self) {
        let bounds = self.viewport.bounds();

        for ship in &mut self.ships {
            let position = ship.position();
            if bounds.contains(position) {
                continue;
            }
            if !ship.class().is_alien() {
                ship.set_position(bounds.wrap(position));
            } else if bounds.contains_x(position.x) {
                ship.set_position(bounds.wrap_y(position));
            } else {
                if ship.is_visible() {
                    self.events.push(GameEvent::SaucerGone(ship.class()));
                    log::debug!("{:?} left the screen", ship.class());
                }
                ship.set_visible(false);
                ship.set_alive(false);
                ship.set_position(PARKING_SPOT);
            }
        }

        for asteroid in self.asteroids.values_mut().filter(|a| a.is_alive()) {
            asteroid.set_position(bounds.wrap(asteroid.position()));
        }
    }

    /// Whether no live asteroid is within the safety distance of `position`
    pub fn is_safe_position(&self, position: Vec2) -> bool {
        let safety = self.config.gameplay.safety_distance;
        self.asteroids
            .values()
            .filter(|a| a.is_alive())
            .all(|a| distance(a.position(), position) > safety)
    }

    /// Bring the human back once its debris has settled and the centre is clear
    pub(super) fn respawn_human(&mut self) {
        let center = self.viewport.center();
        let human = self.ship(ShipClass::Human);
        if human.is_alive() || human.is_exploding() || !self.is_safe_position(center) {
            return;
        }

        let human = self.ship_mut(ShipClass::Human);
        human.reset();
        human.set_position(center);
        human.set_rotation(super::SPAWN_ROTATION);
        human.set_visible(true);
        log::debug!("Human ship respawned");
    }

    /// Count down to the next saucer and send one in
    pub(super) fn spawn_aliens(&mut self) {
        self.alien_countdown -= 1;

        let class = if random::sign(&mut self.rng) > 0.0 {
            ShipClass::AlienBig
        } else {
            ShipClass::AlienSmall
        };
        if self.alien_countdown > 0 {
            return;
        }
        self.alien_countdown = alien_countdown(&self.config, &mut self.rng);

        if self.ship(class).is_visible() {
            return;
        }

        let center = self.viewport.center();
        let y = center.y + random::signed(&mut self.rng, center.y - SAUCER_EDGE_MARGIN);
        let entry_speed = self.config.aliens.entry_speed;
        let speed = entry_speed + random::unsigned(&mut self.rng, entry_speed);

        let saucer = self.ship_mut(class);
        saucer.reset();
        saucer.set_position(Vec2::new(0.0, y));
        saucer.set_velocity(Vec2::new(speed, 0.0));
        saucer.set_visible(true);

        self.events.push(GameEvent::SaucerAppeared(class));
        log::debug!("{:?} appeared at y={:.0}", class, y);
    }

    /// Extra life every `bonus_points` points; zero disables bonuses
    pub(super) fn award_bonus(&mut self) {
        let bonus_points = self.config.gameplay.bonus_points;
        if bonus_points > 0 && self.score >= bonus_points.saturating_mul(self.bonus_count) {
            self.lives += 1;
            self.bonus_count += 1;
            self.events.push(GameEvent::BonusLife);
            log::info!("Bonus life at {} points, {} lives", self.score, self.lives);
        }
    }

    /// Next wave once every asteroid is gone
    pub(super) fn advance_level(&mut self) {
        if self.asteroids.values().all(|a| !a.is_alive()) {
            self.next_level();
        }
    }

    pub(super) fn draw_splash(&mut self) {
        let center = self.viewport.center();
        match self.splash_page() {
            SplashPage::GameOver => {
                self.draw_list.text("Game Over", center.x, center.y, TextAlign::Center);
            }
            SplashPage::Help => {
                let lines = self.help.clone();
                self.draw_list
                    .text_block(lines, center.x, SPLASH_BLOCK_Y, LINE_HEIGHT, TextAlign::Center);
            }
            SplashPage::BestScores => {
                let lines = self.scores.display_lines();
                self.draw_list
                    .text_block(lines, center.x, SPLASH_BLOCK_Y, LINE_HEIGHT, TextAlign::Center);
            }
        }
    }

    pub(super) fn draw_hud(&mut self) {
        let width = f64::from(self.viewport.width);
        self.draw_list
            .text(format!("Ships: {}", self.lives), HUD_INSET, HUD_Y, TextAlign::Center);
        self.draw_list
            .text(format!("Level: {}", self.level), width / 2.0, HUD_Y, TextAlign::Center);
        self.draw_list
            .text(format!("Score: {}", self.score), width - HUD_INSET, HUD_Y, TextAlign::Center);
    }
}
