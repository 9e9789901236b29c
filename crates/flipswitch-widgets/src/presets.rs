//! Ready-made toggle styles.
//!
//! Presets only populate configuration values; they carry no behavior of
//! their own.

use flipswitch_core::{Color, Point, Size};

use crate::config::{ToggleConfig, ToggleFlags};
use crate::palette::TogglePalette;

/// The library default style: a static pill with a circle knob.
#[must_use]
pub fn default_style() -> ToggleConfig {
    ToggleConfig::default()
}

/// An animated, square-ish style: barely rounded frame, rounded-rectangle
/// knob.
#[must_use]
pub fn rectangle_style() -> ToggleConfig {
    ToggleConfig::default()
        .flags(ToggleFlags::ANIMATED)
        .frame_rounding(0.1)
        .knob_rounding(0.3)
        .animation_duration(0.5)
}

/// An iOS-like style: a large green-on pill with a white knob and state
/// glyphs. `light_mode` swaps the off-frame colors and adds a light border.
#[must_use]
pub fn ios_style(size_scale: f32, light_mode: bool) -> ToggleConfig {
    let frame_on = Color::rgb(0.3, 0.85, 0.39);
    let frame_on_hover = Color::rgb(0.0, 1.0, 0.57);
    let frame_off = if light_mode {
        Color::rgb(0.91, 0.91, 0.92)
    } else {
        Color::rgb(0.22, 0.22, 0.24)
    };
    let frame_off_hover = if light_mode {
        Color::rgb(0.7, 0.7, 0.7)
    } else {
        Color::rgb(0.4, 0.4, 0.4)
    };
    let light_gray = Color::rgb(0.89, 0.89, 0.89);

    let palette = TogglePalette {
        knob_off: Color::WHITE,
        knob_off_hover: Color::WHITE,
        knob_on: Color::WHITE,
        knob_on_hover: Color::WHITE,
        frame_off,
        frame_off_hover,
        frame_on,
        frame_on_hover,
        frame_border: light_gray,
        knob_border: light_gray,
    };

    let mut flags = ToggleFlags::ANIMATED.with_a11y_labels();
    if light_mode {
        flags = flags.union(ToggleFlags::BORDERED);
    }

    let mut config = ToggleConfig::default()
        .flags(flags)
        .size(Size::new(153.0, 93.0).scale(size_scale))
        .knob_inset(6.0 * size_scale)
        .palette(palette);
    config.frame_border_thickness = size_scale;
    config.knob_border_thickness = size_scale;
    config
}

/// A Material-like style: a slim track with a knob that overhangs it.
#[must_use]
pub fn material_style(size_scale: f32) -> ToggleConfig {
    let purple = Color::rgb(0.4, 0.08, 0.97);
    let purple_dim = Color::rgb(0.78, 0.65, 0.99);
    let purple_hover = Color::rgb(0.53, 0.08, 1.0);

    let inset = -2.5 * size_scale;
    let palette = TogglePalette {
        knob_on: purple,
        knob_on_hover: purple_hover,
        frame_on: purple_dim,
        frame_on_hover: purple_dim,
        ..TogglePalette::unset()
    };

    ToggleConfig::default()
        .flags(ToggleFlags::ANIMATED)
        .size(Size::new(37.0, 16.0).scale(size_scale))
        .knob_inset(inset)
        .knob_offset(Point::new(-inset, 0.0))
        .palette(palette)
}
