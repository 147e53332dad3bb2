//! Widget components for the clock face.
//!
//! - [`face`]: Static face elements (background, outline, hub, numerals, tick dots)
//! - [`hands`]: Time-dependent hour/minute/second hands
//! - [`primitives`]: Shared low-level drawing utilities
//!
//! # Architecture
//!
//! A frame is drawn in two passes over the same [`ClockLayout`](crate::layout::ClockLayout):
//! 1. [`draw_face`] repaints the whole surface, back to front
//! 2. [`draw_hands`] paints the three hands on top
//!
//! Both passes are generic over any `DrawTarget<Color = Rgb565>`, so the same
//! code draws into the simulator window and into test framebuffers.

mod face;
mod hands;
mod primitives;

pub use face::{draw_face, draw_numerals, draw_tick_dots};
pub use hands::{draw_hands, hand_endpoint};
pub use primitives::{draw_line, draw_text_centered, fill_circle, shadow_stroke, stroke_circle};
