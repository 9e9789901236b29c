//! Host theme colors consumed by widget palette resolution.

use crate::color::Color;
use serde::{Deserialize, Serialize};

/// The named theme slots a host exposes to widgets.
///
/// These are the only colors the engine ever asks the host for; everything
/// else is derived from them or overridden by a caller palette.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThemeColors {
    /// Text and default knob color
    pub text: Color,
    /// Background of inactive framed controls
    pub frame_background: Color,
    /// Hovered variant of `frame_background`
    pub frame_background_hovered: Color,
    /// Accent color for active controls
    pub accent: Color,
    /// Hovered variant of `accent`
    pub accent_hovered: Color,
    /// Border color for framed controls
    pub border: Color,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self::dark()
    }
}

impl ThemeColors {
    /// A light theme.
    #[must_use]
    pub fn light() -> Self {
        Self {
            text: Color::new(0.13, 0.13, 0.13, 1.0), // Dark gray
            frame_background: Color::new(0.91, 0.91, 0.92, 1.0),
            frame_background_hovered: Color::new(0.82, 0.82, 0.84, 1.0),
            accent: Color::new(0.2, 0.47, 0.96, 1.0), // Blue
            accent_hovered: Color::new(0.31, 0.56, 1.0, 1.0),
            border: Color::new(0.62, 0.62, 0.65, 1.0),
        }
    }

    /// A dark theme.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            text: Color::WHITE,
            frame_background: Color::new(0.16, 0.29, 0.48, 0.54),
            frame_background_hovered: Color::new(0.26, 0.59, 0.98, 0.4),
            accent: Color::new(0.26, 0.59, 0.98, 0.4), // Blue
            accent_hovered: Color::new(0.26, 0.59, 0.98, 1.0),
            border: Color::new(0.43, 0.43, 0.5, 0.5),
        }
    }
}
