//! Backend-free frame output
//!
//! The game never talks to a graphics API. Each frame it fills a
//! [`DrawList`] with line, point and text commands in screen space; a
//! front-end (window, terminal, recorder) turns the list into pixels.

pub mod commands;
pub mod viewport;

pub use commands::{Color, DrawCommand, DrawList, TextAlign};
pub use viewport::Viewport;
