//! Game controller
//!
//! Owns every entity and runs one simulation tick per call to
//! [`Game::run`]. Nothing here blocks or touches a device: each tick
//! records a frame of draw commands and queues [`GameEvent`]s for the
//! caller to turn into sound.

mod collisions;
mod handlers;
#[cfg(test)]
mod tests;

use rand::rngs::StdRng;
use rand::SeedableRng;
use slotmap::{new_key_type, SlotMap};
use vector_engine::events::EventQueue;
use vector_engine::foundation::collections::sweep;
use vector_engine::foundation::math::{heading, Vec2};
use vector_engine::foundation::random;
use vector_engine::render::{Color, DrawList, Viewport};

use crate::asteroid::{Asteroid, AsteroidClass};
use crate::config::GameConfig;
use crate::error::GameError;
use crate::event::GameEvent;
use crate::help;
use crate::scores::{BestScores, ScoreError};
use crate::ship::{Ship, ShipClass, ShipTuning, PARKING_SPOT};
use crate::weapon::{Missile, Weapon};

pub use handlers::SplashPage;

new_key_type! {
    /// Handle of a missile in flight
    pub struct MissileKey;
    /// Handle of an asteroid
    pub struct AsteroidKey;
}

/// Heading of the human ship after a (re)spawn
pub const SPAWN_ROTATION: f64 = 180.0;

/// The game
pub struct Game {
    config: GameConfig,
    viewport: Viewport,
    ships: [Ship; 3],
    missiles: SlotMap<MissileKey, Missile>,
    asteroids: SlotMap<AsteroidKey, Asteroid>,
    score: u32,
    level: u32,
    lives: u32,
    bonus_count: u32,
    running: bool,
    paused: bool,
    game_over: bool,
    pending_record: Option<u32>,
    scores: BestScores,
    help: Vec<String>,
    rng: StdRng,
    seed: u64,
    draw_list: DrawList,
    events: EventQueue<GameEvent>,
    ticks: u64,
    last_shot_ms: Option<u64>,
    last_thrust_ms: Option<u64>,
    alien_fire_tick: u32,
    alien_countdown: i64,
    splash_started_ms: u64,
}

impl Game {
    /// Create a game ready to play level one
    pub fn new(config: GameConfig, scores: BestScores, help: Vec<String>) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        let viewport = config.viewport();

        let tuning = ShipTuning::from_config(&config);
        let size = config.ships.size;
        let big = size * config.aliens.big_scale;
        let ships = [
            Ship::new(ShipClass::Human, Vec2::new(size, size), tuning.clone()),
            Ship::new(ShipClass::AlienSmall, Vec2::new(size, size), tuning.clone()),
            Ship::new(ShipClass::AlienBig, Vec2::new(big, big), tuning),
        ];
        let alien_countdown = handlers::alien_countdown(&config, &mut rng);

        let mut game = Self {
            lives: config.gameplay.lives,
            level: config.gameplay.start_level,
            viewport,
            ships,
            missiles: SlotMap::with_key(),
            asteroids: SlotMap::with_key(),
            score: 0,
            bonus_count: 1,
            running: true,
            paused: false,
            game_over: false,
            pending_record: None,
            scores,
            help,
            rng,
            seed,
            draw_list: DrawList::new(viewport),
            events: EventQueue::new(),
            ticks: 0,
            last_shot_ms: None,
            last_thrust_ms: None,
            alien_fire_tick: 0,
            alien_countdown,
            splash_started_ms: 0,
            config,
        };
        game.restart();
        game.events.clear();

        log::info!("Game created with seed {}", seed);
        game
    }

    /// Create a game with the best scores and help text found under the
    /// configured data directory
    pub fn from_config(config: GameConfig) -> Result<Self, GameError> {
        let scores = BestScores::load(config.paths.scores_path(), config.scoring.best_scores)?;
        let help = help::load_or_default(config.paths.help_path());
        Ok(Self::new(config, scores, help))
    }

    /// Configuration in use
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seed of the game's RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The client area
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Ship of the given class
    pub fn ship(&self, class: ShipClass) -> &Ship {
        &self.ships[class.index()]
    }

    /// Mutable ship of the given class, for scripted scenarios
    pub fn ship_mut(&mut self, class: ShipClass) -> &mut Ship {
        &mut self.ships[class.index()]
    }

    /// Missiles in flight
    pub fn missiles(&self) -> impl Iterator<Item = (MissileKey, &Missile)> {
        self.missiles.iter()
    }

    /// Asteroids, including exploding ones
    pub fn asteroids(&self) -> impl Iterator<Item = (AsteroidKey, &Asteroid)> {
        self.asteroids.iter()
    }

    /// Asteroid by handle
    pub fn asteroid(&self, key: AsteroidKey) -> Option<&Asteroid> {
        self.asteroids.get(key)
    }

    /// Number of missiles in flight
    pub fn missile_count(&self) -> usize {
        self.missiles.len()
    }

    /// Number of asteroids, including exploding ones
    pub fn asteroid_count(&self) -> usize {
        self.asteroids.len()
    }

    /// Number of intact asteroids
    pub fn live_asteroid_count(&self) -> usize {
        self.asteroids.values().filter(|a| a.is_alive()).count()
    }

    /// Put an asteroid into play
    pub fn add_asteroid(&mut self, asteroid: Asteroid) -> AsteroidKey {
        self.asteroids.insert(asteroid)
    }

    /// Put a missile into play
    pub fn add_missile(&mut self, missile: Missile) -> MissileKey {
        self.missiles.insert(missile)
    }

    /// Current score
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Current level
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Remaining lives
    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Whether ticks are being run
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether the game is paused
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Whether the game is over (attract mode)
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Final score waiting for a name, if it made the best-score table
    pub fn pending_record(&self) -> Option<u32> {
        self.pending_record
    }

    /// Best-score table
    pub fn best_scores(&self) -> &BestScores {
        &self.scores
    }

    /// Help text shown on the splash
    pub fn help(&self) -> &[String] {
        &self.help
    }

    /// Frame recorded by the last tick
    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    /// Events queued since the last drain
    pub fn events(&self) -> &EventQueue<GameEvent> {
        &self.events
    }

    /// Event queue, for draining
    pub fn events_mut(&mut self) -> &mut EventQueue<GameEvent> {
        &mut self.events
    }

    /// Ticks run so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Simulated time in milliseconds
    pub fn elapsed_ms(&self) -> u64 {
        self.config.ticks_to_ms(self.ticks)
    }

    /// Reset score, lives and level and start playing
    pub fn restart(&mut self) {
        self.missiles.clear();
        self.asteroids.clear();
        self.events.push(GameEvent::Restarted);

        let center = self.viewport.center();
        for ship in &mut self.ships {
            ship.reset();
            if ship.class() == ShipClass::Human {
                ship.set_position(center);
                ship.set_rotation(SPAWN_ROTATION);
                ship.set_visible(true);
            } else {
                ship.set_position(PARKING_SPOT);
                ship.set_alive(false);
            }
        }

        self.lives = self.config.gameplay.lives;
        self.level = self.config.gameplay.start_level;
        self.score = 0;
        self.bonus_count = 1;
        self.game_over = false;
        self.pending_record = None;
        self.last_shot_ms = None;
        self.last_thrust_ms = None;
        self.alien_fire_tick = 0;
        self.alien_countdown = handlers::alien_countdown(&self.config, &mut self.rng);

        self.spawn_asteroids(self.level * self.config.gameplay.asteroids_per_level);
        log::info!("Game restarted at level {}", self.level);
    }

    /// End the game and start the attract loop
    pub fn game_over(&mut self) {
        self.running = true;
        self.game_over = true;

        for ship in &mut self.ships {
            if ship.class().is_alien() && ship.is_visible() {
                self.events.push(GameEvent::SaucerGone(ship.class()));
            }
            ship.set_visible(false);
            ship.set_alive(false);
        }

        self.splash_started_ms = self.elapsed_ms();
        self.events.push(GameEvent::GameOver);
        log::info!("Game over: score {}, level {}", self.score, self.level);
    }

    /// Clear the field and spawn the next wave
    pub fn next_level(&mut self) {
        self.missiles.clear();
        self.asteroids.clear();
        self.level += 1;
        self.spawn_asteroids(self.level * self.config.gameplay.asteroids_per_level);

        self.events.push(GameEvent::LevelCleared(self.level));
        log::info!("Level {} ({} asteroids)", self.level, self.asteroids.len());
    }

    /// Fire a missile from the human ship, rate limited; returns whether it fired
    pub fn shoot_missile(&mut self) -> bool {
        let human = &self.ships[ShipClass::Human.index()];
        if !human.is_alive() {
            return false;
        }

        let now = self.elapsed_ms();
        if let Some(last) = self.last_shot_ms {
            if now.saturating_sub(last) < self.config.gameplay.human_shot_delay_ms {
                return false;
            }
        }
        self.last_shot_ms = Some(now);

        let velocity = heading(human.rotation()) * self.config.gameplay.missile_speed + human.velocity();
        let mut missile = Missile::new(ShipClass::Human, self.config.gameplay.missile_ttl);
        missile.arm(human.position(), velocity);
        self.missiles.insert(missile);

        self.events.push(GameEvent::MissileFired);
        true
    }

    /// Turn the human ship left one step
    pub fn rotate_left(&mut self) {
        let step = self.config.ships.rotation_step;
        self.ships[ShipClass::Human.index()].rotate_left(step);
    }

    /// Turn the human ship right one step
    pub fn rotate_right(&mut self) {
        let step = self.config.ships.rotation_step;
        self.ships[ShipClass::Human.index()].rotate_right(step);
    }

    /// Fire the human ship's engine
    pub fn thrust(&mut self) {
        let impulse = self.config.ships.impulse;
        let human = &mut self.ships[ShipClass::Human.index()];
        if !human.is_alive() {
            return;
        }
        human.impulse(impulse);

        let now = self.elapsed_ms();
        let quiet = self
            .last_thrust_ms
            .map_or(true, |last| now.saturating_sub(last) >= self.config.gameplay.thrust_sound_delay_ms);
        if quiet {
            self.last_thrust_ms = Some(now);
            self.events.push(GameEvent::Thrust);
        }
    }

    /// Raise the human ship's shield if it has recharged
    pub fn raise_shield(&mut self) -> bool {
        let human = &mut self.ships[ShipClass::Human.index()];
        let raised = human.is_alive() && human.activate_shield();
        if raised {
            self.events.push(GameEvent::ShieldRaised);
        }
        raised
    }

    /// Stop running ticks (the front end should quit)
    pub fn end_game(&mut self) {
        self.running = false;
        log::info!("Game ended");
    }

    /// Flip the pause flag
    pub fn toggle_pause(&mut self) {
        self.set_paused(!self.paused);
    }

    /// Set the pause flag
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
        log::debug!("Paused: {}", paused);
    }

    /// Resume running ticks
    pub fn run_game(&mut self) {
        self.running = true;
        self.paused = false;
    }

    /// Suspend ticks, e.g. while a best-score name is entered
    pub fn stop_game(&mut self) {
        self.running = false;
        self.paused = true;
    }

    /// Record the pending best score under `name`, save the table and resume
    ///
    /// Returns the rank of the new record, or `None` when nothing was pending.
    pub fn submit_best_score(&mut self, name: &str) -> Result<Option<usize>, ScoreError> {
        let Some(score) = self.pending_record.take() else {
            return Ok(None);
        };
        let rank = self.scores.register(name, score);
        self.run_game();
        self.scores.save()?;

        log::info!("Best score {} registered for {:?} at rank {:?}", score, name, rank);
        Ok(rank)
    }

    /// Drop the pending best score and resume
    pub fn dismiss_best_score(&mut self) {
        if self.pending_record.take().is_some() {
            log::info!("Best score dismissed");
        }
        self.run_game();
    }

    /// Run one tick
    pub fn run(&mut self) {
        self.ticks += 1;
        let dt = self.config.display.dt;

        for ship in &mut self.ships {
            ship.update(dt, &mut self.rng);
        }
        self.aliens_fire();

        for missile in self.missiles.values_mut().filter(|m| m.is_armed()) {
            missile.update(dt);
        }
        for asteroid in self.asteroids.values_mut() {
            if asteroid.is_alive() || asteroid.is_exploding() {
                asteroid.update(dt);
            }
        }
        self.force_inside_limits();

        if !self.game_over {
            self.respawn_human();
            self.spawn_aliens();
            self.handle_collisions();
            self.award_bonus();
            self.advance_level();
        }

        let spent = sweep(&mut self.missiles, Missile::is_armed);
        let finished = sweep(&mut self.asteroids, |a| !a.is_finished());
        if spent + finished > 0 {
            log::trace!("Removed {} missiles and {} asteroids", spent, finished);
        }

        self.draw_frame();
    }

    fn spawn_asteroids(&mut self, count: u32) {
        let bounds = self.viewport.bounds();
        let speed = self.config.gameplay.asteroid_speed;
        let class = AsteroidClass::Big;

        for _ in 0..count {
            let rng = &mut self.rng;
            let position = Vec2::new(random::unsigned(rng, bounds.width), random::unsigned(rng, bounds.height));
            let velocity = Vec2::new(
                random::signed(rng, speed) + speed / 5.0,
                random::signed(rng, speed) + speed / 5.0,
            );
            let radius = class.base_radius() + random::unsigned(rng, class.radius_jitter());
            let asteroid = Asteroid::new(class, position, velocity, radius, rng);
            self.asteroids.insert(asteroid);
        }
        log::debug!("Spawned {} asteroids", count);
    }

    fn draw_frame(&mut self) {
        self.draw_list.clear_screen(Color::BLACK);

        for ship in &self.ships {
            ship.draw(&mut self.draw_list);
        }
        for missile in self.missiles.values() {
            missile.draw(&mut self.draw_list);
        }
        for asteroid in self.asteroids.values() {
            asteroid.draw(&mut self.draw_list);
        }

        if self.game_over {
            self.draw_splash();
        }
        self.draw_hud();
    }
}
