//! Time management utilities

use std::time::{Duration, Instant};

/// Simple stopwatch for measuring elapsed time
pub struct Stopwatch {
    start_time: Option<Instant>,
    elapsed: Duration,
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwatch {
    /// Create a new stopped stopwatch
    pub fn new() -> Self {
        Self {
            start_time: None,
            elapsed: Duration::ZERO,
        }
    }

    /// Create a new stopwatch and start it immediately
    pub fn start_new() -> Self {
        let mut stopwatch = Self::new();
        stopwatch.start();
        stopwatch
    }

    /// Start the stopwatch
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Stop the stopwatch and accumulate elapsed time
    pub fn stop(&mut self) {
        if let Some(start) = self.start_time.take() {
            self.elapsed += start.elapsed();
        }
    }

    /// Get the elapsed time
    pub fn elapsed(&self) -> Duration {
        self.elapsed + self.start_time.map_or(Duration::ZERO, |start| start.elapsed())
    }

    /// Check if the stopwatch is currently running
    pub fn is_running(&self) -> bool {
        self.start_time.is_some()
    }
}

/// Paces a loop to a fixed number of frames per second
///
/// Frame rate is what makes the simulation speed CPU independent: every
/// frame advances the world by one fixed tick, so the loop must not run
/// faster than the configured rate.
pub struct FrameLimiter {
    frame_duration: Duration,
    last_frame: Instant,
}

impl FrameLimiter {
    /// Create a limiter for `fps` frames per second (at least 1)
    pub fn new(fps: u32) -> Self {
        Self {
            frame_duration: Duration::from_secs_f64(1.0 / f64::from(fps.max(1))),
            last_frame: Instant::now(),
        }
    }

    /// Target duration of a single frame
    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// Time left in the current frame
    pub fn remaining(&self) -> Duration {
        self.frame_duration.saturating_sub(self.last_frame.elapsed())
    }

    /// Sleep out the rest of the frame and start the next one
    pub fn wait(&mut self) {
        let remaining = self.remaining();
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
        self.last_frame = Instant::now();
    }
}
