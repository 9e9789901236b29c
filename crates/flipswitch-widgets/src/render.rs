//! Assembly of the per-frame render plan.

use flipswitch_core::{RenderPlan, Size, TextStyle, ThemeColors};

use crate::animation::state_color;
use crate::config::ToggleConfig;
use crate::layout::{KnobShape, ToggleLayout};
use crate::palette::TogglePalette;

/// Measured sizes of the two accessibility glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GlyphSizes {
    /// Measured size of the on glyph.
    pub on: Size,
    /// Measured size of the off glyph.
    pub off: Size,
}

/// The fixed three-glyph text summary of a toggle's state, used by the
/// host's text capture (logging/accessibility) path.
#[must_use]
pub const fn state_glyph(value: bool, mixed: bool) -> &'static str {
    if mixed {
        "[~]"
    } else if value {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Build the ordered draw plan for one call.
///
/// Order is significant: frame fill, frame border, state glyphs, knob
/// fill, knob border, label. Borders follow their fill immediately so a
/// border never occludes a later element.
#[must_use]
pub fn build_plan(
    config: &ToggleConfig,
    layout: &ToggleLayout,
    palette: &TogglePalette,
    theme: &ThemeColors,
    t: f32,
    hovered: bool,
    label: &str,
    glyphs: GlyphSizes,
) -> RenderPlan {
    let mut plan = RenderPlan::new();

    let (frame_off, frame_on) = if hovered {
        (palette.frame_off_hover, palette.frame_on_hover)
    } else {
        (palette.frame_off, palette.frame_on)
    };
    let frame_color = state_color(frame_off, frame_on, t, config.flags.animate_frame_color);

    let (knob_off, knob_on) = if hovered {
        (palette.knob_off_hover, palette.knob_on_hover)
    } else {
        (palette.knob_off, palette.knob_on)
    };
    let knob_color = state_color(knob_off, knob_on, t, config.flags.animate_knob_color);

    let frame_radius = layout.frame_corner_radius();
    plan.fill_rounded_rect(layout.frame, frame_radius, frame_color);
    if config.flags.bordered_frame {
        plan.stroke_rounded_rect(
            layout.frame,
            frame_radius,
            palette.frame_border,
            config.frame_border_thickness,
        );
    }

    if config.flags.a11y_labels {
        let glyph_style = TextStyle::colored(knob_color);
        plan.draw_text(&config.on_label, layout.on_glyph_pos(glyphs.on), glyph_style);
        plan.draw_text(
            &config.off_label,
            layout.off_glyph_pos(glyphs.off),
            glyph_style,
        );
    }

    match layout.shape {
        KnobShape::Circle => {
            let (center, radius) = layout.knob_circle(t);
            plan.fill_circle(center, radius, knob_color);
            if config.flags.bordered_knob {
                plan.stroke_circle(center, radius, palette.knob_border, config.knob_border_thickness);
            }
        }
        KnobShape::Rectangle => {
            let (rect, corner) = layout.knob_rect(t);
            plan.fill_rounded_rect(rect, corner, knob_color);
            if config.flags.bordered_knob {
                plan.stroke_rounded_rect(
                    rect,
                    corner,
                    palette.knob_border,
                    config.knob_border_thickness,
                );
            }
        }
    }

    if !label.is_empty() {
        plan.draw_text(label, layout.label_pos(), TextStyle::colored(theme.text));
    }

    plan
}
