//! Draw commands recorded during a frame

use crate::foundation::math::{Polyline, Shape, Vec2};
use crate::render::Viewport;

/// 8-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Black
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// White
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Create a colour from its channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Grey with all channels at `level`
    pub const fn grey(level: u8) -> Self {
        Self::rgb(level, level, level)
    }

    /// Scale every channel by `factor` (clamped to 0..=1)
    pub fn scaled(self, factor: f64) -> Self {
        let f = factor.clamp(0.0, 1.0);
        let scale = |c: u8| (f64::from(c) * f).round() as u8;
        Self::rgb(scale(self.r), scale(self.g), scale(self.b))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Horizontal anchoring of text relative to its position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    /// Text starts at the position
    Left,
    /// Text is centred on the position
    #[default]
    Center,
    /// Text ends at the position
    Right,
}

/// A single drawing primitive in screen space
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Connected line segments, optionally closed back to the first point
    Lines {
        /// Vertices in drawing order
        points: Polyline,
        /// Whether the last point joins the first
        closed: bool,
        /// Line colour
        color: Color,
    },

    /// A single pixel
    Point {
        /// Position of the pixel
        position: Vec2,
        /// Pixel colour
        color: Color,
    },

    /// One or more lines of text stacked downwards
    Text {
        /// Text lines, top to bottom
        lines: Vec<String>,
        /// Anchor X
        x: f64,
        /// Anchor Y of the first line
        y: f64,
        /// Line height for multi-line text
        line_height: f64,
        /// Horizontal anchoring
        align: TextAlign,
        /// Text colour
        color: Color,
    },
}

/// Commands recorded for one frame
#[derive(Debug, Clone)]
pub struct DrawList {
    viewport: Viewport,
    background: Color,
    commands: Vec<DrawCommand>,
}

impl DrawList {
    /// Create an empty list for the given client area
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            background: Color::BLACK,
            commands: Vec::new(),
        }
    }

    /// The client area the commands are expressed in
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Background colour set by the last clear
    pub fn background(&self) -> Color {
        self.background
    }

    /// Start a new frame filled with `color`
    pub fn clear_screen(&mut self, color: Color) {
        self.background = color;
        self.commands.clear();
    }

    /// Record a polyline
    pub fn lines(&mut self, points: Polyline, closed: bool, color: Color) {
        if points.len() >= 2 {
            self.commands.push(DrawCommand::Lines { points, closed, color });
        }
    }

    /// Record every polyline of a shape
    pub fn shape(&mut self, shape: Shape, closed: bool, color: Color) {
        for points in shape {
            self.lines(points, closed, color);
        }
    }

    /// Record a single point
    pub fn point(&mut self, position: Vec2, color: Color) {
        self.commands.push(DrawCommand::Point { position, color });
    }

    /// Record a single line of text
    pub fn text(&mut self, text: impl Into<String>, x: f64, y: f64, align: TextAlign) {
        self.text_block(vec![text.into()], x, y, 0.0, align);
    }

    /// Record a block of text lines
    pub fn text_block(&mut self, lines: Vec<String>, x: f64, y: f64, line_height: f64, align: TextAlign) {
        self.commands.push(DrawCommand::Text {
            lines,
            x,
            y,
            line_height,
            align,
            color: Color::WHITE,
        });
    }

    /// Recorded commands in drawing order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Every text line recorded this frame, in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().flat_map(|command| match command {
            DrawCommand::Text { lines, .. } => lines.iter().map(String::as_str).collect::<Vec<_>>(),
            _ => Vec::new(),
        })
    }
}
