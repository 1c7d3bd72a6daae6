//! Audio backend implementations
//!
//! Platform-independent abstraction over audio playback libraries.

pub mod null_backend;
#[cfg(feature = "rodio-audio")]
pub mod rodio_backend;

use std::sync::Arc;

use crate::audio::AudioError;

/// Audio backend trait for platform abstraction
///
/// Each cue name maps to a single voice: playing a cue again restarts it,
/// and a looping cue keeps playing until stopped.
pub trait AudioBackend {
    /// Initialize the audio backend
    fn initialize(&mut self, config: &AudioBackendConfig) -> Result<(), AudioError>;

    /// Shutdown the audio backend
    fn shutdown(&mut self);

    /// Check if backend is initialized
    fn is_initialized(&self) -> bool;

    /// Register a cue; `data` holds the encoded file, `None` for a silent cue
    fn load(&mut self, name: &str, data: Option<Arc<[u8]>>) -> Result<(), AudioError>;

    /// Start (or restart) a cue
    fn play(&mut self, name: &str, looping: bool) -> Result<(), AudioError>;

    /// Stop a cue; stopping a silent cue is not an error
    fn stop(&mut self, name: &str);

    /// Stop all playing sounds
    fn stop_all(&mut self);

    /// Set the listener gain applied to every cue
    fn set_master_volume(&mut self, volume: f32);

    /// Update the backend (cleanup finished sounds, etc.)
    fn update(&mut self) {}
}

/// Configuration for audio backend
#[derive(Debug, Clone)]
pub struct AudioBackendConfig {
    /// Sample rate (e.g., 44100, 48000)
    pub sample_rate: u32,
    /// Number of output channels (1=mono, 2=stereo)
    pub channels: u16,
}

impl Default for AudioBackendConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44100,
            channels: 2,
        }
    }
}

/// Create the default audio backend for the platform
///
/// With the `rodio-audio` feature a real output device is opened; when that
/// fails (no device, CI) the null backend is used instead.
pub fn create_backend(config: &AudioBackendConfig) -> Box<dyn AudioBackend> {
    #[cfg(feature = "rodio-audio")]
    {
        let mut backend = rodio_backend::RodioBackend::new();
        match backend.initialize(config) {
            Ok(()) => return Box::new(backend),
            Err(e) => log::warn!("Falling back to silent audio: {}", e),
        }
    }

    let mut backend = null_backend::NullBackend::new();
    if let Err(e) = backend.initialize(config) {
        log::error!("Silent audio backend failed to initialize: {}", e);
    }
    Box::new(backend)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_backend_is_ready() {
        let backend = create_backend(&AudioBackendConfig::default());
        assert!(backend.is_initialized());
    }
}
