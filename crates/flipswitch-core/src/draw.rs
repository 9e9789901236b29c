//! Draw commands for rendering backends.
//!
//! All rendering reduces to these primitives.

use crate::{Color, CornerRadius, Point, Rect};
use serde::{Deserialize, Serialize};

/// Stroke style for outlines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Stroke color
    pub color: Color,
    /// Stroke width in pixels
    pub width: f32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

/// Box style for rectangles and circles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxStyle {
    /// Fill color (None = no fill)
    pub fill: Option<Color>,
    /// Stroke style (None = no stroke)
    pub stroke: Option<StrokeStyle>,
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            fill: Some(Color::WHITE),
            stroke: None,
        }
    }
}

impl BoxStyle {
    /// Create a box with only fill color.
    #[must_use]
    pub const fn fill(color: Color) -> Self {
        Self {
            fill: Some(color),
            stroke: None,
        }
    }

    /// Create a box with only stroke.
    #[must_use]
    pub const fn stroke(style: StrokeStyle) -> Self {
        Self {
            fill: None,
            stroke: Some(style),
        }
    }
}

/// Text style for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub size: f32,
    /// Text color
    pub color: Color,
    /// Font weight
    pub weight: FontWeight,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 16.0,
            color: Color::BLACK,
            weight: FontWeight::Normal,
        }
    }
}

impl TextStyle {
    /// The default style in a given color.
    #[must_use]
    pub fn colored(color: Color) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }
}

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontWeight {
    /// Light (300)
    Light,
    /// Normal (400)
    #[default]
    Normal,
    /// Medium (500)
    Medium,
    /// Bold (700)
    Bold,
}

/// Drawing primitive - all rendering reduces to these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Draw a (possibly rounded) rectangle
    Rect {
        /// Rectangle bounds
        bounds: Rect,
        /// Corner radius
        radius: CornerRadius,
        /// Box style
        style: BoxStyle,
    },

    /// Draw a circle
    Circle {
        /// Center point
        center: Point,
        /// Radius
        radius: f32,
        /// Box style
        style: BoxStyle,
    },

    /// Draw text
    Text {
        /// Text content
        content: String,
        /// Position of the top-left corner
        position: Point,
        /// Text style
        style: TextStyle,
    },
}

impl DrawCommand {
    /// A filled rounded rectangle.
    #[must_use]
    pub fn rounded_rect(bounds: Rect, radius: f32, color: Color) -> Self {
        Self::Rect {
            bounds,
            radius: CornerRadius::uniform(radius),
            style: BoxStyle::fill(color),
        }
    }

    /// A filled circle.
    #[must_use]
    pub const fn filled_circle(center: Point, radius: f32, color: Color) -> Self {
        Self::Circle {
            center,
            radius,
            style: BoxStyle::fill(color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_style_fill() {
        let style = BoxStyle::fill(Color::WHITE);
        assert_eq!(style.fill, Some(Color::WHITE));
        assert!(style.stroke.is_none());
    }

    #[test]
    fn test_box_style_stroke() {
        let style = BoxStyle::stroke(StrokeStyle {
            color: Color::BLACK,
            width: 2.0,
        });
        assert!(style.fill.is_none());
        assert_eq!(style.stroke.map(|s| s.width), Some(2.0));
    }

    #[test]
    fn test_rounded_rect_constructor() {
        let cmd = DrawCommand::rounded_rect(Rect::new(0.0, 0.0, 40.0, 20.0), 10.0, Color::WHITE);
        match cmd {
            DrawCommand::Rect { radius, style, .. } => {
                assert_eq!(radius, CornerRadius::uniform(10.0));
                assert_eq!(style.fill, Some(Color::WHITE));
            }
            _ => panic!("Expected Rect command"),
        }
    }

    #[test]
    fn test_filled_circle_constructor() {
        let cmd = DrawCommand::filled_circle(Point::new(5.0, 5.0), 4.0, Color::BLACK);
        match cmd {
            DrawCommand::Circle { center, radius, style } => {
                assert_eq!(center, Point::new(5.0, 5.0));
                assert_eq!(radius, 4.0);
                assert_eq!(style.fill, Some(Color::BLACK));
            }
            _ => panic!("Expected Circle command"),
        }
    }

    #[test]
    fn test_text_style_colored() {
        let style = TextStyle::colored(Color::WHITE);
        assert_eq!(style.color, Color::WHITE);
        assert_eq!(style.size, TextStyle::default().size);
    }
}
