//! Hour, minute and second hands.
//!
//! Each hand is a straight line from the face center to a tip at
//! `center + (cos θ, sin θ) × length`. When the style carries a hand shadow,
//! all three shadows are painted first so no shadow falls across another hand.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::PrimitiveStyle;

use super::primitives::{draw_line, shadow_stroke};
use crate::geometry::{Hand, hand_angle, polar};
use crate::layout::ClockLayout;
use crate::styles::ClockStyle;
use crate::time::ClockTime;

/// Tip of `hand` at `time`.
#[inline]
pub fn hand_endpoint(
    layout: &ClockLayout,
    hand: Hand,
    time: ClockTime,
) -> Point {
    polar(layout.center, hand_angle(hand, time), layout.hand_length(hand))
}

/// Draw all three hands, hour first and second last.
pub fn draw_hands<D>(
    display: &mut D,
    layout: &ClockLayout,
    style: &ClockStyle,
    time: ClockTime,
) where
    D: DrawTarget<Color = Rgb565>,
{
    if let Some(shadow) = &layout.hand_shadow {
        for hand in Hand::ALL {
            let tip = hand_endpoint(layout, hand, time);
            draw_line(
                display,
                layout.center + shadow.offset,
                tip + shadow.offset,
                shadow_stroke(shadow, layout.hand_stroke(hand)),
            );
        }
    }

    for hand in Hand::ALL {
        let tip = hand_endpoint(layout, hand, time);
        draw_line(
            display,
            layout.center,
            tip,
            PrimitiveStyle::with_stroke(style.hand_color(hand), layout.hand_stroke(hand)),
        );
    }
}
