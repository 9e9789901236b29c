//! Toggle color palette and theme resolution.

use flipswitch_core::{Color, ThemeColors};
use serde::{Deserialize, Serialize};

/// Caller-supplied color overrides for a toggle.
///
/// Every slot defaults to [`Color::TRANSPARENT`], the unset sentinel. Unset
/// slots resolve to theme-derived colors; set slots win as-is. An unset slot
/// never reaches a draw command.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TogglePalette {
    /// Knob color when off.
    pub knob_off: Color,
    /// Knob color when off and hovered.
    pub knob_off_hover: Color,
    /// Knob color when on.
    pub knob_on: Color,
    /// Knob color when on and hovered.
    pub knob_on_hover: Color,
    /// Frame background when off.
    pub frame_off: Color,
    /// Frame background when off and hovered.
    pub frame_off_hover: Color,
    /// Frame background when on.
    pub frame_on: Color,
    /// Frame background when on and hovered.
    pub frame_on_hover: Color,
    /// Frame border color.
    pub frame_border: Color,
    /// Knob border color.
    pub knob_border: Color,
}

impl TogglePalette {
    const SLOT_COUNT: usize = 10;

    /// An all-unset palette: resolving it yields pure theme colors.
    #[must_use]
    pub fn unset() -> Self {
        Self::default()
    }

    /// The palette derived entirely from host theme colors.
    ///
    /// Knobs take the text color, the off-frame takes the frame background
    /// pair, the on-frame takes the accent pair, and both borders take the
    /// border color.
    #[must_use]
    pub fn from_theme(theme: &ThemeColors) -> Self {
        Self {
            knob_off: theme.text,
            knob_off_hover: theme.text,
            knob_on: theme.text,
            knob_on_hover: theme.text,
            frame_off: theme.frame_background,
            frame_off_hover: theme.frame_background_hovered,
            frame_on: theme.accent,
            frame_on_hover: theme.accent_hovered,
            frame_border: theme.border,
            knob_border: theme.border,
        }
    }

    /// Resolve a candidate palette against theme colors.
    ///
    /// Produces exactly one effective palette: theme-derived everywhere,
    /// except where the candidate sets a slot to a non-sentinel color.
    #[must_use]
    pub fn resolve(candidate: Option<&Self>, theme: &ThemeColors) -> Self {
        let base = Self::from_theme(theme);
        match candidate {
            None => base,
            Some(overrides) => {
                let mut slots = base.slots();
                for (slot, wanted) in slots.iter_mut().zip(overrides.slots()) {
                    if !wanted.is_unset() {
                        *slot = wanted;
                    }
                }
                Self::from_slots(slots)
            }
        }
    }

    /// Whether every slot is the unset sentinel.
    #[must_use]
    pub fn is_unset(&self) -> bool {
        self.slots().iter().all(Color::is_unset)
    }

    fn slots(&self) -> [Color; Self::SLOT_COUNT] {
        [
            self.knob_off,
            self.knob_off_hover,
            self.knob_on,
            self.knob_on_hover,
            self.frame_off,
            self.frame_off_hover,
            self.frame_on,
            self.frame_on_hover,
            self.frame_border,
            self.knob_border,
        ]
    }

    fn from_slots(slots: [Color; Self::SLOT_COUNT]) -> Self {
        let [knob_off, knob_off_hover, knob_on, knob_on_hover, frame_off, frame_off_hover, frame_on, frame_on_hover, frame_border, knob_border] =
            slots;
        Self {
            knob_off,
            knob_off_hover,
            knob_on,
            knob_on_hover,
            frame_off,
            frame_off_hover,
            frame_on,
            frame_on_hover,
            frame_border,
            knob_border,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette_is_unset() {
        assert!(TogglePalette::unset().is_unset());
    }

    #[test]
    fn test_from_theme_mapping() {
        let theme = ThemeColors::light();
        let palette = TogglePalette::from_theme(&theme);

        assert_eq!(palette.knob_off, theme.text);
        assert_eq!(palette.knob_on_hover, theme.text);
        assert_eq!(palette.frame_off, theme.frame_background);
        assert_eq!(palette.frame_off_hover, theme.frame_background_hovered);
        assert_eq!(palette.frame_on, theme.accent);
        assert_eq!(palette.frame_on_hover, theme.accent_hovered);
        assert_eq!(palette.frame_border, theme.border);
        assert_eq!(palette.knob_border, theme.border);
    }

    #[test]
    fn test_resolve_without_candidate_is_theme() {
        let theme = ThemeColors::dark();
        assert_eq!(
            TogglePalette::resolve(None, &theme),
            TogglePalette::from_theme(&theme)
        );
    }

    #[test]
    fn test_resolve_unset_slots_fall_back_to_theme() {
        let theme = ThemeColors::light();
        let candidate = TogglePalette {
            frame_on: Color::rgb(0.3, 0.85, 0.39),
            ..TogglePalette::unset()
        };

        let resolved = TogglePalette::resolve(Some(&candidate), &theme);
        assert_eq!(resolved.frame_on, Color::rgb(0.3, 0.85, 0.39));
        // every other slot comes from the theme
        assert_eq!(resolved.frame_off, theme.frame_background);
        assert_eq!(resolved.knob_on, theme.text);
        assert_eq!(resolved.knob_border, theme.border);
    }

    #[test]
    fn test_resolve_set_slots_round_trip() {
        let theme = ThemeColors::dark();
        let candidate = TogglePalette {
            knob_off: Color::rgb(0.1, 0.2, 0.3),
            knob_off_hover: Color::rgb(0.2, 0.3, 0.4),
            knob_on: Color::rgb(0.3, 0.4, 0.5),
            knob_on_hover: Color::rgb(0.4, 0.5, 0.6),
            frame_off: Color::rgb(0.5, 0.6, 0.7),
            frame_off_hover: Color::rgb(0.6, 0.7, 0.8),
            frame_on: Color::rgb(0.7, 0.8, 0.9),
            frame_on_hover: Color::rgb(0.8, 0.9, 1.0),
            frame_border: Color::rgb(0.9, 1.0, 0.1),
            knob_border: Color::rgb(1.0, 0.1, 0.2),
        };

        let resolved = TogglePalette::resolve(Some(&candidate), &theme);
        assert_eq!(resolved, candidate);
    }

    #[test]
    fn test_resolve_never_yields_unset_slot() {
        let theme = ThemeColors::light();
        let candidate = TogglePalette {
            knob_on: Color::WHITE,
            ..TogglePalette::unset()
        };
        let resolved = TogglePalette::resolve(Some(&candidate), &theme);
        assert!(!resolved.is_unset());
        for slot in resolved.slots() {
            assert!(!slot.is_unset());
        }
    }
}
