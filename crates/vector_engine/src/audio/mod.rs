//! Audio system
//!
//! Sounds are named cues ("ship_fire", "bang_large", ...) loaded from
//! `<dir>/<name>.wav`. The [`SoundManager`] owns the registry and the
//! master volume; actual playback is delegated to an [`AudioBackend`].

pub mod backend;
pub mod sound_manager;

use std::path::PathBuf;

use thiserror::Error;

pub use backend::null_backend::{NullBackend, PlaybackLog};
pub use backend::{AudioBackend, AudioBackendConfig};
pub use sound_manager::SoundManager;

/// Audio errors
#[derive(Error, Debug)]
pub enum AudioError {
    /// Backend used before `initialize`
    #[error("Audio backend not initialized")]
    BackendNotInitialized,

    /// Backend could not open an output device
    #[error("Audio backend initialization failed: {0}")]
    BackendInitFailed(String),

    /// Decoding or playback failed
    #[error("Playback failed: {0}")]
    PlaybackFailed(String),

    /// Sound file missing on disk
    #[error("Sound file not found: {}", .0.display())]
    SoundNotFound(PathBuf),

    /// Cue name that was never loaded
    #[error("Unknown sound: {0}")]
    UnknownSound(String),

    /// IO error while reading a sound file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
