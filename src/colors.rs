//! Color constants for the clock face.
//!
//! # Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)
//!
//! The orange pair mirrors the classic "holo" palette: `#FFBB33` for the hands
//! and `#FF8800` for the outline, down-converted to 5/6/5 bits.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black (0, 0, 0). Default background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Numerals on dark faces.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red (31, 0, 0). Second hand on the shadowed face.
pub const RED: Rgb565 = Rgb565::RED;

// =============================================================================
// Custom Colors
// =============================================================================

/// Light orange (`#FFBB33`). Hands, hub and numerals on the classic face.
pub const ORANGE_LIGHT: Rgb565 = Rgb565::new(31, 46, 6);

/// Dark orange (`#FF8800`). Face outline.
pub const ORANGE_DARK: Rgb565 = Rgb565::new(31, 34, 0);

/// Dim gray for minute tick dots.
/// RGB565: (12, 24, 12) - roughly 40% brightness.
pub const GRAY: Rgb565 = Rgb565::new(12, 24, 12);

/// Near-black charcoal used to fill the face disk on the shadowed variant.
pub const CHARCOAL: Rgb565 = Rgb565::new(3, 6, 3);

/// Drop shadow tone. Dark enough to read as a shadow on both black and charcoal.
pub const SHADOW: Rgb565 = Rgb565::new(1, 2, 1);
