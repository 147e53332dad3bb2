//! Static face elements: background, disk, outline, hub, numerals, tick dots.
//!
//! Draw order is back to front; later elements overdraw earlier ones.
//!
//! ```text
//! 1. clear background        4. center hub
//! 2. face disk (optional)    5. numerals 1-12
//! 3. outline ring (+shadow)  6. tick dots (optional)
//! ```

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::PrimitiveStyle;
use heapless::String;

use super::primitives::{draw_text_centered, fill_circle, shadow_stroke, stroke_circle};
use crate::config::{NUMERAL_COUNT, TICK_COUNT};
use crate::geometry::{is_hour_tick, numeral_angle, polar, tick_angle};
use crate::layout::ClockLayout;
use crate::styles::ClockStyle;

/// Draw every static element of the face.
pub fn draw_face<D>(
    display: &mut D,
    layout: &ClockLayout,
    style: &ClockStyle,
) where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(style.background).ok();

    if let Some(fill) = style.face_fill {
        fill_circle(display, layout.center, layout.outline_radius, fill);
    }

    draw_outline(display, layout, style);
    fill_circle(display, layout.center, layout.hub_radius, style.hub_color);
    draw_numerals(display, layout, style);

    if style.show_tick_dots {
        draw_tick_dots(display, layout, style);
    }
}

/// Outline ring, with its drop shadow underneath when styled.
fn draw_outline<D>(
    display: &mut D,
    layout: &ClockLayout,
    style: &ClockStyle,
) where
    D: DrawTarget<Color = Rgb565>,
{
    if let Some(shadow) = &layout.face_shadow {
        stroke_circle(
            display,
            layout.center + shadow.offset,
            layout.outline_radius,
            shadow_stroke(shadow, layout.outline_stroke),
        );
    }
    stroke_circle(
        display,
        layout.center,
        layout.outline_radius,
        PrimitiveStyle::with_stroke(style.face_stroke, layout.outline_stroke),
    );
}

/// Numerals 1-12, each centred on the numeral circle at `(n - 3) × 30°`.
pub fn draw_numerals<D>(
    display: &mut D,
    layout: &ClockLayout,
    style: &ClockStyle,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let text_style = MonoTextStyle::new(layout.numeral_font(), style.numeral_color);
    for n in 1..=NUMERAL_COUNT {
        let mut label: String<2> = String::new();
        let _ = write!(label, "{n}");
        let position = polar(layout.center, numeral_angle(n), layout.radius);
        draw_text_centered(display, &label, position, text_style);
    }
}

/// 60 dots on the tick ring. Hour positions get a larger dot in the numeral color.
pub fn draw_tick_dots<D>(
    display: &mut D,
    layout: &ClockLayout,
    style: &ClockStyle,
) where
    D: DrawTarget<Color = Rgb565>,
{
    for i in 1..=TICK_COUNT {
        let (size, color) = if is_hour_tick(i) {
            (layout.big_dot_size, style.numeral_color)
        } else {
            (layout.small_dot_size, style.dot_color)
        };
        let position = polar(layout.center, tick_angle(i), layout.dot_ring);
        fill_circle(display, position, size as f32 / 2.0, color);
    }
}
