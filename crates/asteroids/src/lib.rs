//! # Asteroids 2k
//!
//! The classic vector arcade shooter on top of `vector_engine`: a human
//! fighter, two kinds of saucer, splitting asteroids, bonus lives and a
//! persistent best-score table.
//!
//! The game is a pure simulation. [`Game::run`] advances one tick and
//! leaves a frame of draw commands and a queue of [`GameEvent`]s behind;
//! [`App`] feeds it keys and turns the events into sound.
//!
//! ```rust
//! use asteroids::{BestScores, Game, GameConfig};
//!
//! let config = GameConfig { seed: Some(1), ..GameConfig::default() };
//! let mut game = Game::new(config, BestScores::new(10), Vec::new());
//! game.run();
//! assert_eq!(game.ticks(), 1);
//! assert!(!game.draw_list().is_empty());
//! ```

#![warn(missing_docs)]

pub mod app;
pub mod asteroid;
pub mod autopilot;
pub mod config;
pub mod error;
pub mod event;
pub mod game;
pub mod help;
pub mod scores;
pub mod sfx;
pub mod ship;
pub mod weapon;

pub use app::{App, FrameStatus};
pub use asteroid::{Asteroid, AsteroidClass};
pub use autopilot::{Autopilot, AutopilotConfig};
pub use config::GameConfig;
pub use error::GameError;
pub use event::GameEvent;
pub use game::{AsteroidKey, Game, MissileKey, SplashPage};
pub use scores::{BestScores, RecordScore, ScoreError};
pub use ship::{Ship, ShipClass};
pub use weapon::{Missile, Weapon};
