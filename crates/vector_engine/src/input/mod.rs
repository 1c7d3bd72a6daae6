//! Input management system
//!
//! Keyboard state is polled once per frame, so several keys can be held at
//! the same time (thrust while turning while firing). Keys are reported as
//! held for every frame they are down; `just_pressed` is true only on the
//! first frame.

use std::collections::HashSet;

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// N key
    N,
    /// P key
    P,
    /// Q key
    Q,
    /// S key
    S,
    /// Space key
    Space,
    /// Escape key
    Escape,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Up arrow
    Up,
    /// Numpad plus
    Add,
    /// Numpad minus
    Subtract,
}

/// Polled keyboard state
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<KeyCode>,
    previous: HashSet<KeyCode>,
}

impl InputState {
    /// Create an input state with no keys down
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new frame: what was held becomes the previous state
    pub fn begin_frame(&mut self) {
        self.previous.clone_from(&self.held);
    }

    /// Handle key input
    pub fn handle_key_input(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            self.held.insert(key);
        } else {
            self.held.remove(&key);
        }
    }

    /// Replace the whole held set (for pollers that read every key at once)
    pub fn set_held<I: IntoIterator<Item = KeyCode>>(&mut self, keys: I) {
        self.held = keys.into_iter().collect();
    }

    /// Whether a key is down this frame
    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// Whether a key went down this frame
    pub fn just_pressed(&self, key: KeyCode) -> bool {
        self.held.contains(&key) && !self.previous.contains(&key)
    }

    /// Release every key
    pub fn clear(&mut self) {
        self.held.clear();
        self.previous.clear();
    }
}
