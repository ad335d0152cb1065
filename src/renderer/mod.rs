//! 2D rendering
//!
//! The simulation never draws. `scene::draw_frame` walks a `GameState` and
//! issues primitive calls against a `DrawSurface`; the browser build backs
//! that with a canvas 2D context, tests and the headless runner with a
//! `DrawList` that just records.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use scene::draw_frame;

use glam::Vec2;

use crate::color::Color;

/// Minimal immediate-mode drawing capability
pub trait DrawSurface {
    /// Fill the whole surface
    fn clear(&mut self, color: Color, width: f32, height: f32);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Color, line_width: f32);
    /// Rectangle starting at `origin`, extending `length` along `angle`,
    /// centered across its `width`
    fn fill_rotated_rect(&mut self, origin: Vec2, angle: f32, length: f32, width: f32, color: Color);
    /// Global alpha for subsequent draws (0-1)
    fn set_alpha(&mut self, alpha: f32);
    /// Shadow glow for subsequent draws (blur 0 disables)
    fn set_glow(&mut self, blur: f32, color: Color);
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        color: Color,
        width: f32,
        height: f32,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    CircleOutline {
        center: Vec2,
        radius: f32,
        color: Color,
        line_width: f32,
    },
    RotatedRect {
        origin: Vec2,
        angle: f32,
        length: f32,
        width: f32,
        color: Color,
    },
    Alpha(f32),
    Glow {
        blur: f32,
        color: Color,
    },
}

/// A surface that records commands instead of drawing them
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    /// Filled circles drawn in a given color
    pub fn circles_of(&self, color: Color) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { color: cc, .. } if *cc == color))
            .count()
    }
}

impl DrawSurface for DrawList {
    fn clear(&mut self, color: Color, width: f32, height: f32) {
        self.commands.push(DrawCommand::Clear {
            color,
            width,
            height,
        });
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Color, line_width: f32) {
        self.commands.push(DrawCommand::CircleOutline {
            center,
            radius,
            color,
            line_width,
        });
    }

    fn fill_rotated_rect(&mut self, origin: Vec2, angle: f32, length: f32, width: f32, color: Color) {
        self.commands.push(DrawCommand::RotatedRect {
            origin,
            angle,
            length,
            width,
            color,
        });
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.commands.push(DrawCommand::Alpha(alpha));
    }

    fn set_glow(&mut self, blur: f32, color: Color) {
        self.commands.push(DrawCommand::Glow { blur, color });
    }
}
