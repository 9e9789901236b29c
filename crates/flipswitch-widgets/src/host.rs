//! The boundary to the immediate-mode host.

use flipswitch_core::{Point, Rect, Size, ThemeColors};

use crate::layout::HostMetrics;

/// Opaque per-widget identifier.
///
/// Derived from the label by the host on every call; all per-widget
/// continuity (hover, press, activation timing) lives behind it, on the
/// host's side. The engine is stateless relative to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(pub u64);

impl WidgetId {
    /// Create a new widget ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

/// What the host's press behavior reported for one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonResponse {
    /// The item was pressed this frame (registered on click-down).
    pub pressed: bool,
    /// The cursor is over the item.
    pub hovered: bool,
    /// The press is still held.
    pub held: bool,
}

/// Per-frame services the engine borrows from the immediate-mode host.
///
/// One call to [`crate::toggle`] makes one pass over this trait: skip
/// check, id derivation, measurement, item registration, press behavior,
/// activation timing, and finally text capture. Everything here is the
/// host's state; the engine never caches any of it across calls.
///
/// Hosts without a per-identifier activation timer must supply one in
/// their embedding layer (for example a map from id to activation
/// timestamp); [`ToggleHost::active_time`] is how the engine sees it.
pub trait ToggleHost {
    /// Current theme colors.
    fn theme(&self) -> ThemeColors;

    /// Layout metrics (line height, paddings).
    fn metrics(&self) -> HostMetrics;

    /// Measure a string in the current font.
    fn measure_text(&self, text: &str) -> Size;

    /// Where the next item will be placed.
    fn cursor(&self) -> Point;

    /// Derive the opaque identifier for a label.
    fn widget_id(&self, label: &str) -> WidgetId;

    /// Whether the current window skips all items (fully clipped,
    /// collapsed, ...). When true the engine does no work at all.
    fn items_skipped(&self) -> bool {
        false
    }

    /// Reserve layout space for an item. Returns false when the item is
    /// culled and needs neither interaction nor drawing.
    fn register_item(&mut self, bounds: Rect, id: WidgetId) -> bool;

    /// Run press/hover/held detection over a rectangle. A press is
    /// registered on click-down, not release.
    fn button_behavior(&mut self, bounds: Rect, id: WidgetId) -> ButtonResponse;

    /// Whether this id is the currently (or most recently) active item.
    fn is_active(&self, id: WidgetId) -> bool;

    /// Seconds since this id became the active item.
    fn active_time(&self, id: WidgetId) -> f32;

    /// Whether the current item displays an indeterminate value this call.
    fn mixed_value(&self) -> bool {
        false
    }

    /// The item's value was edited this frame (undo/telemetry hook).
    fn mark_edited(&mut self, id: WidgetId);

    /// Whether text capture (logging/accessibility) is active.
    fn text_capture_enabled(&self) -> bool {
        false
    }

    /// Capture rendered text at a position. Only called while
    /// [`ToggleHost::text_capture_enabled`] returns true.
    fn capture_text(&mut self, position: Point, text: &str) {
        let _ = (position, text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_id_equality() {
        assert_eq!(WidgetId::new(42), WidgetId(42));
        assert_ne!(WidgetId::new(42), WidgetId::new(43));
    }

    #[test]
    fn test_button_response_default() {
        let response = ButtonResponse::default();
        assert!(!response.pressed);
        assert!(!response.hovered);
        assert!(!response.held);
    }
}
