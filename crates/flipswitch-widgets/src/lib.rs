//! An animated toggle switch for immediate-mode UIs.
//!
//! The engine is stateless: every call takes a label, a `&mut bool`, and a
//! configuration, asks the host for per-frame services (theme, metrics,
//! press detection, activation timing), and returns whether the value
//! flipped together with an ordered, backend-agnostic draw plan.
//!
//! ```
//! use flipswitch_widgets::{toggle, ToggleHost};
//! # fn demo(host: &mut dyn ToggleHost) {
//! let mut dark_mode = false;
//! let response = toggle(host, "Dark mode", &mut dark_mode);
//! if response.pressed {
//!     // value changed this frame; response.plan holds the draw commands
//! }
//! # }
//! ```

pub mod animation;
pub mod config;
pub mod host;
pub mod layout;
pub mod palette;
pub mod presets;
pub mod render;
mod toggle;

pub use config::{limits, ToggleConfig, ToggleFlags};
pub use host::{ButtonResponse, ToggleHost, WidgetId};
pub use layout::{HostMetrics, KnobShape, ToggleLayout};
pub use palette::TogglePalette;
pub use render::{state_glyph, GlyphSizes};
pub use toggle::{toggle, toggle_animated, toggle_flags, toggle_with, ToggleResponse};
