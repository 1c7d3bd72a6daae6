//! Collision resolution, run once per tick while a game is in progress

use vector_engine::foundation::math::Vec2;
use vector_engine::foundation::random;
use vector_engine::physics::collision::BoundingCircle;

use super::{AsteroidKey, Game, MissileKey};
use crate::asteroid::Asteroid;
use crate::event::GameEvent;
use crate::ship::{Ship, ShipClass};
use crate::weapon::Weapon;

/// Children an asteroid breaks into
const SPLIT_COUNT: usize = 2;

fn hull_circle(ship: &Ship) -> BoundingCircle {
    BoundingCircle::new(ship.position(), ship.size().norm() / 2.0)
}

fn rock_circle(asteroid: &Asteroid) -> BoundingCircle {
    BoundingCircle::new(asteroid.position(), asteroid.radius())
}

impl Game {
    /// Resolve every collision of this tick
    pub(super) fn handle_collisions(&mut self) {
        self.collide_human_with_saucer();
        self.collide_asteroids_with_ships();
        self.collide_missiles_with_ships();
        self.collide_missiles_with_asteroids();
        self.remove_stray_missiles();

        if self.lives == 0 && !self.game_over {
            self.game_over();
            if self.scores.qualifies(self.score) {
                self.pending_record = Some(self.score);
                self.events.push(GameEvent::BestScore(self.score));
                self.stop_game();
                log::info!("Score {} made the best-score table", self.score);
            }
        }
    }

    fn collide_human_with_saucer(&mut self) {
        let human = self.ship(ShipClass::Human);
        if !human.is_alive() {
            return;
        }

        let saucer = [ShipClass::AlienBig, ShipClass::AlienSmall]
            .into_iter()
            .find(|&class| self.ship(class).is_active());
        let Some(saucer) = saucer else {
            return;
        };

        if hull_circle(human).intersects(&hull_circle(self.ship(saucer))) {
            log::debug!("Human rammed {:?}", saucer);
            self.explode_ship(ShipClass::Human);
            self.explode_ship(saucer);
            self.lose_life();
        }
    }

    fn collide_asteroids_with_ships(&mut self) {
        let keys: Vec<AsteroidKey> = self
            .asteroids
            .iter()
            .filter(|(_, a)| a.is_alive())
            .map(|(key, _)| key)
            .collect();

        for key in keys {
            let Some(asteroid) = self.asteroids.get(key) else {
                continue;
            };
            let rock = rock_circle(asteroid);

            // An asteroid takes at most one ship with it
            let victim = ShipClass::ALL.into_iter().find(|&class| {
                let ship = self.ship(class);
                ship.is_alive() && rock.intersects(&BoundingCircle::new(ship.position(), ship.size().x / 2.0))
            });
            let Some(class) = victim else {
                continue;
            };

            log::debug!("{:?} hit an asteroid", class);
            self.explode_asteroid(key);
            self.explode_ship(class);
            if class == ShipClass::Human {
                self.lose_life();
            }
        }
    }

    fn collide_missiles_with_ships(&mut self) {
        let keys: Vec<MissileKey> = self.missiles.keys().collect();

        for key in keys {
            let Some(missile) = self.missiles.get(key).filter(|m| m.is_armed()) else {
                continue;
            };
            let (position, owner) = (missile.position(), missile.owner());

            let victim = ShipClass::ALL.into_iter().find(|&class| {
                let ship = self.ship(class);
                class != owner && ship.is_alive() && !ship.is_shield_active() && ship.is_colliding(position)
            });
            let Some(class) = victim else {
                continue;
            };

            self.missiles.remove(key);
            self.explode_ship(class);
            log::debug!("{:?} missile hit {:?}", owner, class);

            match class {
                ShipClass::Human => self.lose_life(),
                ShipClass::AlienBig if owner == ShipClass::Human => {
                    self.score += self.config.scoring.big_saucer;
                }
                ShipClass::AlienSmall if owner == ShipClass::Human => {
                    self.score += self.config.scoring.small_saucer;
                }
                _ => {}
            }
        }
    }

    fn collide_missiles_with_asteroids(&mut self) {
        let keys: Vec<MissileKey> = self.missiles.keys().collect();

        for key in keys {
            let Some(missile) = self.missiles.get(key).filter(|m| m.is_armed()) else {
                continue;
            };
            let (position, owner) = (missile.position(), missile.owner());

            let target = self
                .asteroids
                .iter()
                .find(|(_, a)| a.is_alive() && a.collide(position))
                .map(|(asteroid, _)| asteroid);
            if let Some(asteroid) = target {
                self.missiles.remove(key);
                self.destroy_asteroid(asteroid, owner == ShipClass::Human);
            }
        }
    }

    fn remove_stray_missiles(&mut self) {
        let bounds = self.viewport.bounds();
        self.missiles.retain(|_, m| bounds.contains(m.position()));
    }

    /// Shoot an asteroid: explode, score and split it
    fn destroy_asteroid(&mut self, key: AsteroidKey, scored: bool) {
        let Some(asteroid) = self.asteroids.get(key) else {
            return;
        };
        let (class, position, velocity) = (asteroid.class(), asteroid.position(), asteroid.velocity());

        self.explode_asteroid(key);
        if scored {
            self.score += class.points();
        }

        let Some(child) = class.split() else {
            return;
        };
        let ratio = self.config.gameplay.asteroid_speed_ratio;
        for _ in 0..SPLIT_COUNT {
            let rng = &mut self.rng;
            let kick = Vec2::new(
                random::signed(rng, velocity.x) / ratio,
                random::signed(rng, velocity.y) / ratio,
            );
            let radius = child.base_radius() + random::unsigned(rng, child.radius_jitter());
            let fragment = Asteroid::new(child, position, velocity + (velocity + kick), radius, rng);
            self.asteroids.insert(fragment);
        }
        log::debug!("{:?} asteroid split into {:?}", class, child);
    }

    fn explode_asteroid(&mut self, key: AsteroidKey) {
        if let Some(asteroid) = self.asteroids.get_mut(key) {
            asteroid.explode(&mut self.rng);
            self.events.push(GameEvent::AsteroidExploded(asteroid.class()));
        }
    }

    fn explode_ship(&mut self, class: ShipClass) {
        let ship = &mut self.ships[class.index()];
        if class.is_alien() && ship.is_visible() {
            self.events.push(GameEvent::SaucerGone(class));
        }
        ship.explode(&mut self.rng);
        self.events.push(GameEvent::ShipExploded(class));
    }

    fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        log::info!("Ship lost, {} left", self.lives);
    }
}
