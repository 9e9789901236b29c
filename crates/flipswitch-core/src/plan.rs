//! Ordered recording of draw commands.

use crate::draw::{BoxStyle, DrawCommand, StrokeStyle, TextStyle};
use crate::{Color, CornerRadius, Point, Rect};
use serde::{Deserialize, Serialize};

/// An ordered sequence of draw commands describing one widget's appearance
/// for a single frame.
///
/// The plan is backend-agnostic: the host executes it with whatever drawing
/// primitives it has. It is also useful for:
/// - Testing (verify what would be painted, and in which order)
/// - Serialization (send commands to a GPU/WASM renderer)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderPlan {
    commands: Vec<DrawCommand>,
}

impl RenderPlan {
    /// Create a new empty plan.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the plan.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Add a raw draw command.
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Record a filled rounded rectangle.
    pub fn fill_rounded_rect(&mut self, bounds: Rect, radius: f32, color: Color) {
        self.commands
            .push(DrawCommand::rounded_rect(bounds, radius, color));
    }

    /// Record a stroked rounded rectangle.
    pub fn stroke_rounded_rect(&mut self, bounds: Rect, radius: f32, color: Color, width: f32) {
        self.commands.push(DrawCommand::Rect {
            bounds,
            radius: CornerRadius::uniform(radius),
            style: BoxStyle::stroke(StrokeStyle { color, width }),
        });
    }

    /// Record a filled circle.
    pub fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.commands
            .push(DrawCommand::filled_circle(center, radius, color));
    }

    /// Record a stroked circle.
    pub fn stroke_circle(&mut self, center: Point, radius: f32, color: Color, width: f32) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            style: BoxStyle::stroke(StrokeStyle { color, width }),
        });
    }

    /// Record positioned text.
    pub fn draw_text(&mut self, text: &str, position: Point, style: TextStyle) {
        self.commands.push(DrawCommand::Text {
            content: text.to_string(),
            position,
            style,
        });
    }
}
