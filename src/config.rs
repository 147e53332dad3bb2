//! Application configuration constants.
//!
//! The clock exposes no runtime configuration of its own: the visual
//! proportions below are compile-time constants, and per-variant choices
//! (colors, dots, shadows, numeral size) live in [`crate::styles`].
//!
//! Every length on the face is a fixed fraction of the surface diameter, so
//! the divisors here fully describe the geometry:
//!
//! ```text
//! font_size          = diameter / numeral_size_ratio
//! second truncation  = diameter / HAND_TRUNCATION_DIVISOR
//! minute truncation  = diameter / MINUTE_HAND_TRUNCATION_DIVISOR
//! hour truncation    = diameter / HAND_TRUNCATION_DIVISOR
//!                    + diameter / HOUR_HAND_TRUNCATION_DIVISOR
//! ```

use std::time::Duration;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Delay between a rendered frame and the next requested redraw.
/// Twice per second keeps the second hand current without redrawing every frame.
pub const REDRAW_INTERVAL: Duration = Duration::from_millis(500);

/// How often the simulator loop polls window events while waiting for a redraw.
pub const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(16);

// =============================================================================
// Simulator Window Configuration
// =============================================================================

/// Default simulator surface edge in pixels (square window).
pub const DEFAULT_SURFACE_SIZE: u32 = 320;

/// Default pixel scale of the simulator window.
pub const DEFAULT_WINDOW_SCALE: u32 = 2;

/// Simulator window title.
pub const WINDOW_TITLE: &str = "Analog Clock";

// =============================================================================
// Layout Proportions
// =============================================================================

/// Font sizes below this get extra padding so small numerals still clear the outline.
pub const SMALL_FONT_THRESHOLD: f32 = 20.0;

/// Padding multiplier applied to small fonts.
pub const SMALL_FONT_PADDING_FACTOR: f32 = 1.5;

/// Base truncation shared by all hands (and the whole truncation of the second hand).
pub const HAND_TRUNCATION_DIVISOR: f32 = 25.0;

/// Extra truncation for the hour hand.
pub const HOUR_HAND_TRUNCATION_DIVISOR: f32 = 7.0;

/// Truncation for the minute hand.
pub const MINUTE_HAND_TRUNCATION_DIVISOR: f32 = 10.0;

/// Stroke width divisors, applied to the font size. Hour hand is the thickest.
pub const HOUR_STROKE_DIVISOR: f32 = 5.0;
pub const MINUTE_STROKE_DIVISOR: f32 = 8.0;
pub const SECOND_STROKE_DIVISOR: f32 = 15.0;

/// Outline stroke is half the font size.
pub const OUTLINE_STROKE_DIVISOR: f32 = 2.0;

/// Center hub radius is a third of the font size.
pub const HUB_RADIUS_DIVISOR: f32 = 3.0;

/// Tick dot diameters, applied to the font size.
pub const SMALL_DOT_DIVISOR: f32 = 8.0;
pub const BIG_DOT_DIVISOR: f32 = 4.0;

/// Number of tick dots around the ring (one per minute).
pub const TICK_COUNT: u8 = 60;

/// Number of numerals on the face.
pub const NUMERAL_COUNT: u8 = 12;
