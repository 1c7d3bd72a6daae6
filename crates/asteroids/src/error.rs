//! Game-level errors

use thiserror::Error;
use vector_engine::audio::AudioError;
use vector_engine::config::ConfigError;

use crate::scores::ScoreError;

/// Errors raised while setting up or shutting down a game
#[derive(Error, Debug)]
pub enum GameError {
    /// Configuration could not be loaded or saved
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Audio setup failed
    #[error("Audio error: {0}")]
    Audio(#[from] AudioError),

    /// Best-score table could not be read or written
    #[error("Best scores error: {0}")]
    Scores(#[from] ScoreError),

    /// Any other I/O failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
