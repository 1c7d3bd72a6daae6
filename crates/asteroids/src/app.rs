//! Frame driver: keyboard in, one tick, sound out

use vector_engine::audio::SoundManager;
use vector_engine::input::{InputState, KeyCode};

use crate::game::Game;
use crate::sfx;
use crate::ship::ShipClass;

/// What the front end should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    /// Keep calling [`App::frame`]
    Continue,
    /// The player asked to quit
    Quit,
}

/// A game wired to its sound output
pub struct App {
    game: Game,
    sounds: SoundManager,
}

impl App {
    /// Wrap a game and start in attract mode
    pub fn new(game: Game, sounds: SoundManager) -> Self {
        let mut app = Self { game, sounds };
        app.game.game_over();
        app
    }

    /// The game
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The game, mutably (best-score entry, scripted setups)
    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    /// The sound manager
    pub fn sounds(&self) -> &SoundManager {
        &self.sounds
    }

    /// Apply this frame's keys to the game
    pub fn handle_keys(&mut self, input: &InputState) -> FrameStatus {
        if input.is_held(KeyCode::Escape) || input.is_held(KeyCode::Q) {
            self.game.end_game();
            return FrameStatus::Quit;
        }

        if input.just_pressed(KeyCode::N) && !self.game.is_paused() {
            self.game.restart();
        }
        if input.just_pressed(KeyCode::P) {
            self.game.toggle_pause();
        }
        if input.just_pressed(KeyCode::Add) {
            self.sounds.increase_master_volume();
        }
        if input.just_pressed(KeyCode::Subtract) {
            self.sounds.decrease_master_volume();
        }

        if !self.game.ship(ShipClass::Human).is_alive() {
            return FrameStatus::Continue;
        }
        if input.is_held(KeyCode::S) {
            self.game.raise_shield();
        }
        if input.is_held(KeyCode::Space) {
            self.game.shoot_missile();
        }
        if input.is_held(KeyCode::Left) {
            self.game.rotate_left();
        }
        if input.is_held(KeyCode::Right) {
            self.game.rotate_right();
        }
        if input.is_held(KeyCode::Up) {
            self.game.thrust();
        }
        FrameStatus::Continue
    }

    /// Run one frame
    pub fn frame(&mut self, input: &InputState) -> FrameStatus {
        let status = self.handle_keys(input);
        if status == FrameStatus::Continue && self.game.is_running() && !self.game.is_paused() {
            self.game.run();
        }

        sfx::play_events(self.game.events_mut(), &mut self.sounds);
        self.sounds.update();
        status
    }
}
