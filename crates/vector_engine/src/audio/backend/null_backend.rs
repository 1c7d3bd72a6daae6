//! Silent backend that only records what it was asked to do
//!
//! Used for headless runs and tests. The [`PlaybackLog`] handle stays valid
//! after the backend is boxed into a `SoundManager`, so callers can inspect
//! which cues were played.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use std::sync::Arc;

use super::{AudioBackend, AudioBackendConfig};
use crate::audio::AudioError;

#[derive(Debug, Default)]
struct LogState {
    loaded: HashSet<String>,
    played: Vec<(String, bool)>,
    looping: HashSet<String>,
    master_volume: f32,
}

/// Shared view of everything a [`NullBackend`] has done
#[derive(Debug, Clone, Default)]
pub struct PlaybackLog {
    state: Rc<RefCell<LogState>>,
}

impl PlaybackLog {
    /// Every `(cue, looping)` play request in order
    pub fn played(&self) -> Vec<(String, bool)> {
        self.state.borrow().played.clone()
    }

    /// How many times a cue was started
    pub fn play_count(&self, name: &str) -> usize {
        self.state.borrow().played.iter().filter(|(n, _)| n == name).count()
    }

    /// Whether a looping cue is currently running
    pub fn is_looping(&self, name: &str) -> bool {
        self.state.borrow().looping.contains(name)
    }

    /// Whether a cue was loaded
    pub fn is_loaded(&self, name: &str) -> bool {
        self.state.borrow().loaded.contains(name)
    }

    /// Last master volume applied
    pub fn master_volume(&self) -> f32 {
        self.state.borrow().master_volume
    }

    /// Forget the play history
    pub fn clear_history(&self) {
        self.state.borrow_mut().played.clear();
    }
}

/// Backend that produces no sound
#[derive(Debug, Default)]
pub struct NullBackend {
    log: PlaybackLog,
    initialized: bool,
}

impl NullBackend {
    /// Create a new null backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle onto this backend's playback log
    pub fn log(&self) -> PlaybackLog {
        self.log.clone()
    }
}

impl AudioBackend for NullBackend {
    fn initialize(&mut self, _config: &AudioBackendConfig) -> Result<(), AudioError> {
        self.initialized = true;
        Ok(())
    }

    fn shutdown(&mut self) {
        self.stop_all();
        self.initialized = false;
    }

    fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn load(&mut self, name: &str, _data: Option<Arc<[u8]>>) -> Result<(), AudioError> {
        self.log.state.borrow_mut().loaded.insert(name.to_string());
        Ok(())
    }

    fn play(&mut self, name: &str, looping: bool) -> Result<(), AudioError> {
        if !self.initialized {
            return Err(AudioError::BackendNotInitialized);
        }
        let mut state = self.log.state.borrow_mut();
        state.played.push((name.to_string(), looping));
        if looping {
            state.looping.insert(name.to_string());
        }
        Ok(())
    }

    fn stop(&mut self, name: &str) {
        self.log.state.borrow_mut().looping.remove(name);
    }

    fn stop_all(&mut self) {
        self.log.state.borrow_mut().looping.clear();
    }

    fn set_master_volume(&mut self, volume: f32) {
        self.log.state.borrow_mut().master_volume = volume;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playback_without_initialization() {
        let mut backend = NullBackend::new();
        assert!(matches!(
            backend.play("bonus", false),
            Err(AudioError::BackendNotInitialized)
        ));
    }

    #[test]
    fn test_log_survives_boxing() {
        let mut backend = NullBackend::new();
        let log = backend.log();
        backend.initialize(&AudioBackendConfig::default()).unwrap();

        let mut boxed: Box<dyn AudioBackend> = Box::new(backend);
        boxed.play("saucer_big", true).unwrap();
        assert!(log.is_looping("saucer_big"));

        boxed.stop("saucer_big");
        assert!(!log.is_looping("saucer_big"));
        assert_eq!(log.play_count("saucer_big"), 1);
    }
}
