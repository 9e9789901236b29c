//! The toggle call surface: interaction plus per-frame orchestration.

use flipswitch_core::RenderPlan;

use crate::animation::progress;
use crate::config::{ToggleConfig, ToggleFlags};
use crate::host::ToggleHost;
use crate::layout::ToggleLayout;
use crate::palette::TogglePalette;
use crate::render::{build_plan, state_glyph, GlyphSizes};

/// What one toggle call produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToggleResponse {
    /// The bound value was flipped this frame.
    pub pressed: bool,
    /// The ordered draw commands for this frame. Empty when the item was
    /// skipped or culled.
    pub plan: RenderPlan,
}

impl ToggleResponse {
    fn skipped() -> Self {
        Self::default()
    }
}

/// Draw a toggle switch with the default configuration.
///
/// Reads `value`, flips it on press, and reports the flip together with
/// the frame's draw plan.
pub fn toggle<H>(host: &mut H, label: &str, value: &mut bool) -> ToggleResponse
where
    H: ToggleHost + ?Sized,
{
    toggle_with(host, label, value, &ToggleConfig::default())
}

/// Draw a toggle switch with the given behavior flags.
pub fn toggle_flags<H>(
    host: &mut H,
    label: &str,
    value: &mut bool,
    flags: ToggleFlags,
) -> ToggleResponse
where
    H: ToggleHost + ?Sized,
{
    toggle_with(host, label, value, &ToggleConfig::default().flags(flags))
}

/// Draw an animated toggle switch.
///
/// Forces all three animation switches on, as callers asking for a
/// duration mean the toggle to animate.
pub fn toggle_animated<H>(
    host: &mut H,
    label: &str,
    value: &mut bool,
    duration: f32,
) -> ToggleResponse
where
    H: ToggleHost + ?Sized,
{
    let config = ToggleConfig::default()
        .flags(ToggleFlags::ANIMATED)
        .animation_duration(duration);
    toggle_with(host, label, value, &config)
}

/// Draw a toggle switch with full configuration.
///
/// This is the primary entry point; the other `toggle*` functions are
/// sugar over it. The configuration is normalized first, so out-of-range
/// style values are safe to pass.
///
/// # Panics
///
/// Panics when `config.size` has a negative component.
pub fn toggle_with<H>(
    host: &mut H,
    label: &str,
    value: &mut bool,
    config: &ToggleConfig,
) -> ToggleResponse
where
    H: ToggleHost + ?Sized,
{
    if host.items_skipped() {
        return ToggleResponse::skipped();
    }

    let config = config.clone().resolve();
    let id = host.widget_id(label);
    let label_size = host.measure_text(label);
    let layout = ToggleLayout::compute(host.cursor(), &config, label_size, &host.metrics());

    if !host.register_item(layout.total, id) {
        return ToggleResponse::skipped();
    }

    let response = host.button_behavior(layout.total, id);
    if response.pressed {
        *value = !*value;
        host.mark_edited(id);
    }

    let mixed = host.mixed_value();
    let t = progress(
        *value,
        mixed,
        &config,
        host.is_active(id),
        host.active_time(id),
    );

    let theme = host.theme();
    let palette = TogglePalette::resolve(config.palette.as_ref(), &theme);
    let glyphs = if config.flags.a11y_labels {
        GlyphSizes {
            on: host.measure_text(&config.on_label),
            off: host.measure_text(&config.off_label),
        }
    } else {
        GlyphSizes::default()
    };

    let plan = build_plan(
        &config,
        &layout,
        &palette,
        &theme,
        t,
        response.hovered,
        label,
        glyphs,
    );

    if host.text_capture_enabled() {
        host.capture_text(layout.label_pos(), state_glyph(*value, mixed));
    }

    ToggleResponse {
        pressed: response.pressed,
        plan,
    }
}
