//! Core types for the flipswitch toggle widget engine.
//!
//! This crate provides the foundational types the widget layer builds on:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`], [`CornerRadius`]
//! - Color representation: [`Color`] with the transparent "unset" sentinel
//! - Draw primitives: [`DrawCommand`] and the ordered [`RenderPlan`]
//! - Host theming: [`ThemeColors`]

mod color;
pub mod draw;
mod geometry;
mod plan;
mod theme;

pub use color::Color;
pub use draw::{BoxStyle, DrawCommand, FontWeight, StrokeStyle, TextStyle};
pub use geometry::{CornerRadius, Point, Rect, Size};
pub use plan::RenderPlan;
pub use theme::ThemeColors;

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_color_new_always_in_range(r in -10.0f32..10.0, g in -10.0f32..10.0,
                                          b in -10.0f32..10.0, a in -10.0f32..10.0) {
            let c = Color::new(r, g, b, a);
            prop_assert!((0.0..=1.0).contains(&c.r));
            prop_assert!((0.0..=1.0).contains(&c.g));
            prop_assert!((0.0..=1.0).contains(&c.b));
            prop_assert!((0.0..=1.0).contains(&c.a));
        }

        #[test]
        fn prop_lerp_stays_between_endpoints(t in 0.0f32..1.0) {
            let a = Color::rgb(0.2, 0.4, 0.6);
            let b = Color::rgb(0.8, 0.6, 0.9);
            let c = a.lerp(&b, t);
            prop_assert!(c.r >= a.r - 1e-6 && c.r <= b.r + 1e-6);
            prop_assert!(c.g >= a.g - 1e-6 && c.g <= b.g + 1e-6);
            prop_assert!(c.b >= a.b - 1e-6 && c.b <= b.b + 1e-6);
        }

        #[test]
        fn prop_rect_contains_center(x in -100.0f32..100.0, y in -100.0f32..100.0,
                                     w in 0.1f32..100.0, h in 0.1f32..100.0) {
            let r = Rect::new(x, y, w, h);
            prop_assert!(r.contains_point(&r.center()));
        }
    }
}
