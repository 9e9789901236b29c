//! Animation progress and state color selection.

use flipswitch_core::Color;

use crate::config::ToggleConfig;

/// Compute the display progress `t` for a toggle, in `[0, 1]`.
///
/// `0` is the off extreme, `1` the on extreme, `0.5` the mixed position.
/// A mixed value always renders centered, whatever the animation state.
///
/// When knob animation is enabled and the host reports this widget as the
/// currently (or most recently) active item, `elapsed_active` — the host's
/// per-identifier "seconds since this item became active" — drives a linear
/// ramp from the opposite extreme toward the new value's extreme. The ramp
/// shape is independent of which direction the value flipped.
#[must_use]
pub fn progress(
    value: bool,
    mixed: bool,
    config: &ToggleConfig,
    active: bool,
    elapsed_active: f32,
) -> f32 {
    if mixed {
        return 0.5;
    }

    let mut t = if value { 1.0 } else { 0.0 };

    if config.flags.animate_knob && config.animation_duration > 0.0 && active {
        let t_anim = (elapsed_active / config.animation_duration).clamp(0.0, 1.0);
        t = if value { t_anim } else { 1.0 - t_anim };
    }

    t
}

/// Select the color for a two-state concern at progress `t`.
///
/// With interpolation enabled the off and on colors are lerped by `t`.
/// Otherwise the color snaps by thresholding `t` at 0.5 — not by the
/// boolean value — so a mixed toggle (`t == 0.5`) snaps to the on color.
#[must_use]
pub fn state_color(off: Color, on: Color, t: f32, interpolate: bool) -> Color {
    if interpolate {
        off.lerp(&on, t)
    } else if t < 0.5 {
        off
    } else {
        on
    }
}
