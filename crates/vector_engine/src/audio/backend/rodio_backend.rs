//! Rodio audio backend implementation
//!
//! Cues are kept as encoded bytes in memory and decoded into a fresh
//! [`Sink`] each time they start. One sink per cue name: starting a cue
//! that is already playing restarts it.
//!
//! # Example
//!
//! ```no_run
//! use vector_engine::audio::backend::{AudioBackend, AudioBackendConfig};
//! use vector_engine::audio::backend::rodio_backend::RodioBackend;
//!
//! let mut backend = RodioBackend::new();
//! backend.initialize(&AudioBackendConfig::default()).unwrap();
//!
//! let data = std::fs::read("sounds/bonus.wav").unwrap();
//! backend.load("bonus", Some(data.into())).unwrap();
//! backend.play("bonus", false).unwrap();
//! ```

use std::collections::HashMap;
use std::io::Cursor;
use std::sync::Arc;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};

use super::{AudioBackend, AudioBackendConfig};
use crate::audio::AudioError;

/// Rodio-based audio backend
pub struct RodioBackend {
    /// Audio output stream (must be kept alive)
    _output_stream: Option<OutputStream>,
    /// Output stream handle for creating sinks
    stream_handle: Option<OutputStreamHandle>,
    /// Encoded cue data; `None` marks a silent cue
    tracks: HashMap<String, Option<Arc<[u8]>>>,
    /// Sink currently voicing each cue
    active: HashMap<String, Sink>,
    master_volume: f32,
    initialized: bool,
}

impl RodioBackend {
    /// Create a new Rodio backend
    pub fn new() -> Self {
        Self {
            _output_stream: None,
            stream_handle: None,
            tracks: HashMap::new(),
            active: HashMap::new(),
            master_volume: 1.0,
            initialized: false,
        }
    }

    fn start_sink(&self, data: Arc<[u8]>, looping: bool) -> Result<Sink, AudioError> {
        let stream_handle = self.stream_handle.as_ref().ok_or(AudioError::BackendNotInitialized)?;

        let sink = Sink::try_new(stream_handle)
            .map_err(|e| AudioError::PlaybackFailed(format!("Failed to create sink: {}", e)))?;
        let source = Decoder::new(Cursor::new(data))
            .map_err(|e| AudioError::PlaybackFailed(format!("Failed to decode audio: {}", e)))?;

        if looping {
            sink.append(source.repeat_infinite());
        } else {
            sink.append(source);
        }
        sink.set_volume(self.master_volume);
        Ok(sink)
    }
}

impl AudioBackend for RodioBackend {
    fn initialize(&mut self, _config: &AudioBackendConfig) -> Result<(), AudioError> {
        if self.initialized {
            return Ok(());
        }

        let (stream, stream_handle) = OutputStream::try_default()
            .map_err(|e| AudioError::BackendInitFailed(format!("Failed to create audio output: {}", e)))?;

        self._output_stream = Some(stream);
        self.stream_handle = Some(stream_handle);
        self.initialized = true;

        log::info!("Rodio audio backend initialized");
        Ok(())
    }

    fn shutdown(&mut self) {
        if !self.initialized {
            return;
        }

        self.stop_all();
        self.stream_handle = None;
        self._output_stream = None;
        self.initialized = false;

        log::info!("Rodio audio backend shutdown");
    }

    fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn load(&mut self, name: &str, data: Option<Arc<[u8]>>) -> Result<(), AudioError> {
        if let Some(bytes) = &data {
            // Decode once up front so a corrupt file fails at load time
            Decoder::new(Cursor::new(Arc::clone(bytes)))
                .map_err(|e| AudioError::PlaybackFailed(format!("Failed to decode {}: {}", name, e)))?;
        }
        self.tracks.insert(name.to_string(), data);
        Ok(())
    }

    fn play(&mut self, name: &str, looping: bool) -> Result<(), AudioError> {
        if !self.initialized {
            return Err(AudioError::BackendNotInitialized);
        }
        let data = match self.tracks.get(name) {
            Some(Some(data)) => Arc::clone(data),
            Some(None) => return Ok(()),
            None => return Err(AudioError::UnknownSound(name.to_string())),
        };

        if let Some(previous) = self.active.remove(name) {
            previous.stop();
        }
        let sink = self.start_sink(data, looping)?;
        self.active.insert(name.to_string(), sink);
        Ok(())
    }

    fn stop(&mut self, name: &str) {
        if let Some(sink) = self.active.remove(name) {
            sink.stop();
        }
    }

    fn stop_all(&mut self) {
        for (_name, sink) in self.active.drain() {
            sink.stop();
        }
    }

    fn set_master_volume(&mut self, volume: f32) {
        self.master_volume = volume;
        for sink in self.active.values() {
            sink.set_volume(volume);
        }
    }

    fn update(&mut self) {
        // Remove finished sounds
        self.active.retain(|_name, sink| !sink.empty());
    }
}

impl Default for RodioBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for RodioBackend {
    fn drop(&mut self) {
        self.shutdown();
    }
}
