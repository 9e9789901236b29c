//! Frame, knob, and label geometry.

use flipswitch_core::{Point, Rect, Size};

use crate::config::ToggleConfig;

/// Host-provided measurements the layout depends on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostMetrics {
    /// Default line height, used when no explicit height is configured.
    pub line_height: f32,
    /// Padding between a frame edge and its content.
    pub frame_padding: Size,
    /// Spacing between a widget and its inline label.
    pub item_spacing: Size,
}

impl Default for HostMetrics {
    fn default() -> Self {
        Self {
            line_height: 20.0,
            frame_padding: Size::new(4.0, 3.0),
            item_spacing: Size::new(8.0, 4.0),
        }
    }
}

/// The two knob shapes. Selected once per call from the knob rounding;
/// a toggle never has both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnobShape {
    /// A full circle, drawn from a center and radius.
    Circle,
    /// A rounded rectangle sliding inside the frame.
    Rectangle,
}

impl KnobShape {
    /// Derive the shape from a normalized knob rounding value.
    #[must_use]
    pub fn from_rounding(rounding: f32) -> Self {
        match rounding {
            r if r >= 1.0 => Self::Circle,
            r if r < 1.0 => Self::Rectangle,
            // NaN slips through both comparisons; normalization never
            // produces it, so treat it as a regression, not an input.
            _ => unreachable!("knob rounding selected no shape"),
        }
    }
}

/// Resolved geometry for one toggle call.
///
/// Positions parameterized by animation progress (`knob_circle`,
/// `knob_rect`) are methods; everything else is computed once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToggleLayout {
    /// Top-left corner of the frame.
    pub origin: Point,
    /// Frame width.
    pub width: f32,
    /// Frame height.
    pub height: f32,
    /// Half the frame height; the knob's nominal radius.
    pub radius: f32,
    /// Knob inset after re-clamping against the radius.
    pub inset: f32,
    /// Knob shape for this call.
    pub shape: KnobShape,
    /// The frame box.
    pub frame: Rect,
    /// The full widget box, including label space and knob overhang.
    pub total: Rect,
    knob_offset: Point,
    knob_rounding: f32,
    frame_rounding: f32,
    frame_padding: Size,
    label_size: Size,
    item_spacing: Size,
}

impl ToggleLayout {
    /// Compute the layout for a call.
    ///
    /// `config` must already be resolved; `label_size` is the host-measured
    /// size of the (possibly empty) label.
    #[must_use]
    pub fn compute(
        origin: Point,
        config: &ToggleConfig,
        label_size: Size,
        metrics: &HostMetrics,
    ) -> Self {
        let height = if config.size.height > 0.0 {
            config.size.height
        } else {
            metrics.line_height
        };
        let width = if config.size.width > 0.0 {
            config.size.width
        } else {
            height * config.width_ratio
        };
        let radius = height * 0.5;
        // never let the knob shrink past zero or invert
        let inset = config.knob_inset.min(radius);

        let frame = Rect::at(origin, Size::new(width, height));

        let has_label = label_size.width > 0.0;
        let overhang = (-config.knob_offset.x / 2.0).max(0.0);
        let total_width = width
            + overhang
            + if has_label {
                metrics.item_spacing.width + label_size.width
            } else {
                0.0
            };
        let total_height = if has_label {
            height.max(label_size.height) + 2.0 * metrics.frame_padding.height
        } else {
            height
        };
        let total = Rect::at(origin, Size::new(total_width, total_height));

        Self {
            origin,
            width,
            height,
            radius,
            inset,
            shape: KnobShape::from_rounding(config.knob_rounding),
            frame,
            total,
            knob_offset: config.knob_offset,
            knob_rounding: config.knob_rounding,
            frame_rounding: config.frame_rounding,
            frame_padding: metrics.frame_padding,
            label_size,
            item_spacing: metrics.item_spacing,
        }
    }

    /// Corner radius for the frame fill and border.
    #[must_use]
    pub fn frame_corner_radius(&self) -> f32 {
        self.radius * self.frame_rounding
    }

    /// Horizontal knob travel at progress `t`, relative to the frame's
    /// left edge. The x offset shifts the two extremes asymmetrically.
    fn travel(&self, t: f32) -> f32 {
        let span = self.width - 2.0 * self.radius - self.knob_offset.x / 2.0;
        t * span + (1.0 - t) * (self.knob_offset.x / 2.0)
    }

    /// Center and drawn radius of the circle knob at progress `t`.
    #[must_use]
    pub fn knob_circle(&self, t: f32) -> (Point, f32) {
        let center = Point::new(
            self.origin.x + self.radius + self.travel(t),
            self.origin.y + self.radius + self.knob_offset.y,
        );
        (center, self.radius - self.inset)
    }

    /// Box and corner radius of the rectangle knob at progress `t`.
    #[must_use]
    pub fn knob_rect(&self, t: f32) -> (Rect, f32) {
        let left = self.origin.x + self.travel(t) + self.inset;
        let right = left + 2.0 * self.radius - 2.0 * self.inset;
        let top = self.origin.y + self.inset + self.knob_offset.y;
        let bottom = self.origin.y + self.height - self.inset + self.knob_offset.y;
        let rect = Rect::from_points(Point::new(left, top), Point::new(right, bottom));
        (rect, rect.height / 2.0 * self.knob_rounding)
    }

    /// Label position: right of the frame past any knob overhang,
    /// vertically centered on the toggle height.
    #[must_use]
    pub fn label_pos(&self) -> Point {
        let overhang = (-self.knob_offset.x / 2.0).max(0.0);
        Point::new(
            self.frame.right() + overhang + self.item_spacing.width,
            self.origin.y + (self.height - self.label_size.height) / 2.0,
        )
    }

    /// Position of the "on" glyph: left-aligned inside the frame with
    /// frame padding, vertically centered from its own measured size.
    #[must_use]
    pub fn on_glyph_pos(&self, glyph_size: Size) -> Point {
        Point::new(
            self.origin.x + self.frame_padding.width,
            self.origin.y + (self.height - glyph_size.height) / 2.0,
        )
    }

    /// Position of the "off" glyph: right-aligned, mirroring the on glyph.
    #[must_use]
    pub fn off_glyph_pos(&self, glyph_size: Size) -> Point {
        Point::new(
            self.frame.right() - self.frame_padding.width - glyph_size.width,
            self.origin.y + (self.height - glyph_size.height) / 2.0,
        )
    }
}
