//! Toggle configuration and normalization.

use flipswitch_core::{Point, Size};
use serde::{Deserialize, Serialize};

use crate::palette::TogglePalette;

/// Limits and defaults for [`ToggleConfig`] fields.
pub mod limits {
    /// The golden ratio, default width-to-height ratio of the frame.
    pub const WIDTH_RATIO_DEFAULT: f32 = 1.618_034;

    /// The lowest allowable width ratio.
    pub const WIDTH_RATIO_MIN: f32 = 1.1;

    /// The highest allowable width ratio. It starts to get silly quickly.
    pub const WIDTH_RATIO_MAX: f32 = 10.0;

    /// The lowest frame/knob rounding value (full rectangle).
    pub const ROUNDING_MIN: f32 = 0.0;

    /// The highest frame/knob rounding value (fully round).
    pub const ROUNDING_MAX: f32 = 1.0;

    /// Default knob inset in pixels.
    pub const KNOB_INSET_DEFAULT: f32 = 1.5;

    /// The most a knob may be outset from the frame.
    pub const KNOB_INSET_MIN: f32 = -100.0;

    /// The most a knob may be inset into the frame.
    pub const KNOB_INSET_MAX: f32 = 100.0;

    /// Default border thickness for frame and knob, in pixels.
    pub const BORDER_THICKNESS_DEFAULT: f32 = 1.0;

    /// Default animation duration in seconds.
    pub const ANIMATION_DURATION_DEFAULT: f32 = 0.08;
}

/// Independent behavior and display switches for a toggle.
///
/// Every field is its own concern; none are mutually exclusive. The knob
/// shape is not a flag: it is selected by `ToggleConfig::knob_rounding`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ToggleFlags {
    /// Animate the knob position when the value changes.
    pub animate_knob: bool,
    /// Interpolate the frame color while animating (snaps when off).
    pub animate_frame_color: bool,
    /// Interpolate the knob color while animating (snaps when off).
    pub animate_knob_color: bool,
    /// Draw a border on the frame.
    pub bordered_frame: bool,
    /// Draw a border on the knob.
    pub bordered_knob: bool,
    /// Draw on/off glyphs inside the frame to indicate state.
    pub a11y_labels: bool,
}

impl ToggleFlags {
    /// No flags set.
    pub const NONE: Self = Self {
        animate_knob: false,
        animate_frame_color: false,
        animate_knob_color: false,
        bordered_frame: false,
        bordered_knob: false,
        a11y_labels: false,
    };

    /// Animated knob with interpolated frame and knob colors.
    pub const ANIMATED: Self = Self {
        animate_knob: true,
        animate_frame_color: true,
        animate_knob_color: true,
        ..Self::NONE
    };

    /// Bordered frame and knob.
    pub const BORDERED: Self = Self {
        bordered_frame: true,
        bordered_knob: true,
        ..Self::NONE
    };

    /// The flags used when a config specifies none at all: a static,
    /// non-animated toggle.
    pub const DEFAULT: Self = Self::NONE;

    /// Whether any animation concern is enabled.
    #[must_use]
    pub const fn any_animation(&self) -> bool {
        self.animate_knob || self.animate_frame_color || self.animate_knob_color
    }

    /// Enable knob position animation.
    #[must_use]
    pub const fn with_animate_knob(mut self) -> Self {
        self.animate_knob = true;
        self
    }

    /// Enable frame color interpolation.
    #[must_use]
    pub const fn with_animate_frame_color(mut self) -> Self {
        self.animate_frame_color = true;
        self
    }

    /// Enable knob color interpolation.
    #[must_use]
    pub const fn with_animate_knob_color(mut self) -> Self {
        self.animate_knob_color = true;
        self
    }

    /// Enable the frame border.
    #[must_use]
    pub const fn with_bordered_frame(mut self) -> Self {
        self.bordered_frame = true;
        self
    }

    /// Enable the knob border.
    #[must_use]
    pub const fn with_bordered_knob(mut self) -> Self {
        self.bordered_knob = true;
        self
    }

    /// Enable the on/off state glyphs.
    #[must_use]
    pub const fn with_a11y_labels(mut self) -> Self {
        self.a11y_labels = true;
        self
    }

    /// Merge two flag sets, keeping every switch that either side enables.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            animate_knob: self.animate_knob || other.animate_knob,
            animate_frame_color: self.animate_frame_color || other.animate_frame_color,
            animate_knob_color: self.animate_knob_color || other.animate_knob_color,
            bordered_frame: self.bordered_frame || other.bordered_frame,
            bordered_knob: self.bordered_knob || other.bordered_knob,
            a11y_labels: self.a11y_labels || other.a11y_labels,
        }
    }
}

/// Full configuration for a toggle call.
///
/// A plain value: supplied fresh each call, or held by the caller across
/// calls. The engine keeps nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToggleConfig {
    /// Behavior and display switches.
    pub flags: ToggleFlags,
    /// Seconds a knob animation takes. Zero or negative disables animation.
    pub animation_duration: f32,
    /// How rounded the frame is. 0 is square, 1 is a pill.
    pub frame_rounding: f32,
    /// How rounded the knob is. 0 is square, 1 is a full circle; values at
    /// or above 1 select the circle knob shape, below 1 the rectangle.
    pub knob_rounding: f32,
    /// Frame width as a multiple of its height. Ignored when `size.width`
    /// is given.
    pub width_ratio: f32,
    /// Pixels the knob shrinks into the frame. Negative values make the
    /// knob overhang the frame.
    pub knob_inset: f32,
    /// Border thickness drawn when `flags.bordered_frame` is set.
    pub frame_border_thickness: f32,
    /// Border thickness drawn when `flags.bordered_knob` is set.
    pub knob_border_thickness: f32,
    /// Glyph drawn inside the frame for the on state.
    pub on_label: String,
    /// Glyph drawn inside the frame for the off state.
    pub off_label: String,
    /// Explicit size. A zero width derives from `width_ratio`, a zero
    /// height from the host line height.
    pub size: Size,
    /// Pixel offset applied to the knob: x shifts the travel asymmetrically,
    /// y shifts vertically.
    pub knob_offset: Point,
    /// Optional color overrides. Absent means theme colors only.
    pub palette: Option<TogglePalette>,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            flags: ToggleFlags::DEFAULT,
            animation_duration: limits::ANIMATION_DURATION_DEFAULT,
            frame_rounding: limits::ROUNDING_MAX,
            knob_rounding: limits::ROUNDING_MAX,
            width_ratio: limits::WIDTH_RATIO_DEFAULT,
            knob_inset: limits::KNOB_INSET_DEFAULT,
            frame_border_thickness: limits::BORDER_THICKNESS_DEFAULT,
            knob_border_thickness: limits::BORDER_THICKNESS_DEFAULT,
            on_label: "1".to_string(),
            off_label: "0".to_string(),
            size: Size::ZERO,
            knob_offset: Point::ORIGIN,
            palette: None,
        }
    }
}

impl ToggleConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the behavior flags.
    #[must_use]
    pub const fn flags(mut self, flags: ToggleFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Set the animation duration in seconds.
    #[must_use]
    pub const fn animation_duration(mut self, seconds: f32) -> Self {
        self.animation_duration = seconds;
        self
    }

    /// Set the frame rounding.
    #[must_use]
    pub const fn frame_rounding(mut self, rounding: f32) -> Self {
        self.frame_rounding = rounding;
        self
    }

    /// Set the knob rounding (and with it the knob shape).
    #[must_use]
    pub const fn knob_rounding(mut self, rounding: f32) -> Self {
        self.knob_rounding = rounding;
        self
    }

    /// Set the width ratio.
    #[must_use]
    pub const fn width_ratio(mut self, ratio: f32) -> Self {
        self.width_ratio = ratio;
        self
    }

    /// Set the knob inset.
    #[must_use]
    pub const fn knob_inset(mut self, inset: f32) -> Self {
        self.knob_inset = inset;
        self
    }

    /// Set an explicit size.
    #[must_use]
    pub const fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Set the knob offset.
    #[must_use]
    pub const fn knob_offset(mut self, offset: Point) -> Self {
        self.knob_offset = offset;
        self
    }

    /// Set a palette of color overrides.
    #[must_use]
    pub fn palette(mut self, palette: TogglePalette) -> Self {
        self.palette = Some(palette);
        self
    }

    /// Normalize the configuration for use by the engine.
    ///
    /// Out-of-range cosmetic values are clamped to their documented bounds;
    /// a config with no flags at all gets the library default flag set.
    /// Idempotent.
    ///
    /// # Panics
    ///
    /// Panics when an explicit size has a negative component. That is a
    /// structurally invalid request from the caller, not a style value to
    /// repair.
    #[must_use]
    pub fn resolve(mut self) -> Self {
        assert!(
            self.size.width >= 0.0 && self.size.height >= 0.0,
            "toggle size components must be non-negative"
        );

        if self.flags == ToggleFlags::NONE {
            self.flags = ToggleFlags::DEFAULT;
        }

        self.animation_duration = self.animation_duration.max(0.0);
        self.frame_rounding = self
            .frame_rounding
            .clamp(limits::ROUNDING_MIN, limits::ROUNDING_MAX);
        self.knob_rounding = self
            .knob_rounding
            .clamp(limits::ROUNDING_MIN, limits::ROUNDING_MAX);
        self.width_ratio = self
            .width_ratio
            .clamp(limits::WIDTH_RATIO_MIN, limits::WIDTH_RATIO_MAX);
        self.knob_inset = self
            .knob_inset
            .clamp(limits::KNOB_INSET_MIN, limits::KNOB_INSET_MAX);
        self.frame_border_thickness = self.frame_border_thickness.max(0.0);
        self.knob_border_thickness = self.knob_border_thickness.max(0.0);
        self
    }
}
