//! Named sound cues and master volume
//!
//! Cues are loaded from `<dir>/<name>.wav`. Playing an unknown cue is an
//! error the caller can log and ignore; the game never stops over audio.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::backend::AudioBackend;
use super::AudioError;

/// Default master volume
pub const DEFAULT_VOLUME: f32 = 0.25;
/// Default volume change per increase/decrease request
pub const VOLUME_STEP: f32 = 0.05;

/// Sound asset manager
pub struct SoundManager {
    backend: Box<dyn AudioBackend>,
    sound_dir: PathBuf,
    names: BTreeSet<String>,
    master_volume: f32,
    volume_step: f32,
}

impl SoundManager {
    /// Create a manager over an initialized backend
    pub fn new(backend: Box<dyn AudioBackend>, sound_dir: impl Into<PathBuf>) -> Self {
        let mut manager = Self {
            backend,
            sound_dir: sound_dir.into(),
            names: BTreeSet::new(),
            master_volume: DEFAULT_VOLUME,
            volume_step: VOLUME_STEP,
        };
        manager.backend.set_master_volume(DEFAULT_VOLUME);
        manager
    }

    /// Directory cue files are loaded from
    pub fn sound_dir(&self) -> &Path {
        &self.sound_dir
    }

    /// Path of a cue's file
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.sound_dir.join(format!("{}.wav", name))
    }

    /// Load one cue from disk
    pub fn load_sound(&mut self, name: &str) -> Result<(), AudioError> {
        let path = self.path_for(name);
        if !path.exists() {
            return Err(AudioError::SoundNotFound(path));
        }
        let data: Arc<[u8]> = std::fs::read(&path)?.into();
        self.backend.load(name, Some(data))?;
        self.names.insert(name.to_string());
        log::debug!("Loaded sound '{}' from {}", name, path.display());
        Ok(())
    }

    /// Load every cue, failing on the first missing or broken file
    pub fn load_sounds<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) -> Result<(), AudioError> {
        for name in names {
            self.load_sound(name)?;
        }
        Ok(())
    }

    /// Register cues without backing files
    ///
    /// Used when running without sound assets; the cues exist and can be
    /// played, they just make no noise.
    pub fn register_silent<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) -> Result<(), AudioError> {
        for name in names {
            self.backend.load(name, None)?;
            self.names.insert(name.to_string());
        }
        Ok(())
    }

    /// Whether a cue is known
    pub fn is_loaded(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Start a cue, restarting it if already playing
    pub fn play(&mut self, name: &str, looping: bool) -> Result<(), AudioError> {
        if !self.is_loaded(name) {
            return Err(AudioError::UnknownSound(name.to_string()));
        }
        self.backend.play(name, looping)
    }

    /// Stop a cue
    pub fn stop(&mut self, name: &str) {
        self.backend.stop(name);
    }

    /// Stop everything
    pub fn stop_all(&mut self) {
        self.backend.stop_all();
    }

    /// Current master volume
    pub fn master_volume(&self) -> f32 {
        self.master_volume
    }

    /// Set the master volume, clamped to `0.0..=1.0`
    pub fn set_master_volume(&mut self, volume: f32) {
        self.master_volume = volume.clamp(0.0, 1.0);
        self.backend.set_master_volume(self.master_volume);
        log::debug!("Master volume {:.2}", self.master_volume);
    }

    /// Change the increase/decrease step
    pub fn set_volume_step(&mut self, step: f32) {
        self.volume_step = step.abs();
    }

    /// Raise the master volume one step
    pub fn increase_master_volume(&mut self) {
        self.set_master_volume(self.master_volume + self.volume_step);
    }

    /// Lower the master volume one step
    pub fn decrease_master_volume(&mut self) {
        self.set_master_volume(self.master_volume - self.volume_step);
    }

    /// Per-frame backend housekeeping
    pub fn update(&mut self) {
        self.backend.update();
    }
}

impl Drop for SoundManager {
    fn drop(&mut self) {
        self.backend.shutdown();
    }
}
