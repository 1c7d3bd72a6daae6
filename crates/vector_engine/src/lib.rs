//! # Vector Engine
//!
//! A small, frame-driven engine for vector-graphics arcade games.
//!
//! ## Features
//!
//! - **2D Math**: `nalgebra` vectors plus polyline/shape transforms
//! - **Draw Lists**: Backend-free line, point and text commands per frame
//! - **Audio**: Named sound cues over a pluggable playback backend
//! - **Config**: TOML/RON configuration loading and saving
//! - **Input**: Held/pressed key tracking for polled keyboard handling
//!
//! ## Quick Start
//!
//! ```rust
//! use vector_engine::prelude::*;
//!
//! let mut list = DrawList::new(Viewport::new(800, 600));
//! let mut hull: Polyline = vec![Vec2::new(0.0, 8.0), Vec2::new(-8.0, -8.0), Vec2::new(8.0, -8.0)];
//! rotate_polyline(&mut hull, 180.0);
//! translate_polyline(&mut hull, list.viewport().center());
//! list.lines(hull, true, Color::WHITE);
//! assert_eq!(list.len(), 1);
//! ```

#![warn(missing_docs)]

pub mod audio;
pub mod config;
pub mod events;
pub mod foundation;
pub mod input;
pub mod physics;
pub mod render;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        audio::{AudioBackend, AudioError, NullBackend, SoundManager},
        config::{Config, ConfigError},
        events::EventQueue,
        foundation::{
            math::{
                distance, heading, midpoint, rotate_deg, rotate_polyline, rotate_shape,
                translate_polyline, translate_shape, Polyline, Shape, Vec2,
            },
            time::{FrameLimiter, Stopwatch},
        },
        input::{InputState, KeyCode},
        physics::collision::BoundingCircle,
        render::{Color, DrawCommand, DrawList, TextAlign, Viewport},
    };
}
