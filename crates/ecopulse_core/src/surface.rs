//! Surface - the 2D drawing abstraction scenes paint into
//!
//! A `Surface` is the EcoPulse view of a canvas: something that can be
//! cleared, filled with simple shapes, and asked for its bounds. The scenes
//! only ever talk to this trait, so rendering backends (and tests) decide
//! what actually happens to the draw calls.

use crate::{Color, Point, Rect, Size};

/// A 2D drawing target
///
/// Coordinates are in surface-local pixels with the origin at the top-left.
pub trait Surface {
    /// Clear the whole surface
    fn clear(&mut self);

    /// Fill a rectangle with a solid color
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Fill a circle centered at (cx, cy)
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color);

    /// Draw a single line of text centered on the given point
    fn draw_text(&mut self, text: &str, center: Point, size: f32, color: Color);

    /// Current surface bounds
    fn viewport_size(&self) -> Size;

    fn width(&self) -> f32 {
        self.viewport_size().width
    }

    fn height(&self) -> f32 {
        self.viewport_size().height
    }
}

/// A recorded draw call
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceCommand {
    Clear,
    FillRect {
        rect: Rect,
        color: Color,
    },
    FillCircle {
        center: Point,
        radius: f32,
        color: Color,
    },
    DrawText {
        text: String,
        center: Point,
        size: f32,
        color: Color,
    },
}

/// A surface that records draw calls instead of rasterizing them
///
/// This is the reference `Surface` implementation: renderer backends replay
/// the recorded commands, and tests assert against them directly.
pub struct RecordingSurface {
    size: Size,
    commands: Vec<SurfaceCommand>,
}

impl RecordingSurface {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    /// Get all recorded commands since the last `take_commands`
    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, leaving the buffer empty
    pub fn take_commands(&mut self) -> Vec<SurfaceCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Rebind the surface to new bounds (e.g. after a viewport resize)
    pub fn resize(&mut self, size: Size) {
        tracing::debug!(width = size.width, height = size.height, "surface resized");
        self.size = size;
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        // A clear invalidates everything before it; drop stale commands so
        // the buffer holds exactly one frame.
        self.commands.clear();
        self.commands.push(SurfaceCommand::Clear);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(SurfaceCommand::FillRect { rect, color });
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color) {
        self.commands.push(SurfaceCommand::FillCircle {
            center: Point::new(cx, cy),
            radius,
            color,
        });
    }

    fn draw_text(&mut self, text: &str, center: Point, size: f32, color: Color) {
        self.commands.push(SurfaceCommand::DrawText {
            text: text.to_string(),
            center,
            size,
            color,
        });
    }

    fn viewport_size(&self) -> Size {
        self.size
    }
}
