//! Clock style descriptors and numeral fonts.
//!
//! A [`ClockStyle`] is an immutable value describing every cosmetic choice of
//! the face: colors, whether tick dots are shown, optional drop shadows and the
//! numeral size ratio. Drawing code receives it by reference and derives a
//! fresh `PrimitiveStyle`/`MonoTextStyle` for each primitive, so no draw call
//! can inherit state (a stale stroke width, a forgotten shadow) from the last.
//!
//! # Variants
//!
//! | Variant | Face fill | Tick dots | Shadows | Ratio |
//! |---------|-----------|-----------|---------|-------|
//! | [`ClockVariant::Classic`] | none | no | no | 20 |
//! | [`ClockVariant::Dotted`] | none | yes | no | 20 |
//! | [`ClockVariant::Shadowed`] | charcoal | yes | outline + hands | 18 |
//!
//! # Numeral Fonts
//!
//! Numerals use `ProFont` at the largest size that fits the computed font
//! size. Selection happens once per layout pass, see
//! [`numeral_font_index`].

use core::fmt;

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::pixelcolor::Rgb565;
use profont::{
    PROFONT_7_POINT,
    PROFONT_9_POINT,
    PROFONT_10_POINT,
    PROFONT_12_POINT,
    PROFONT_14_POINT,
    PROFONT_18_POINT,
    PROFONT_24_POINT,
};

use crate::colors::{BLACK, CHARCOAL, GRAY, ORANGE_DARK, ORANGE_LIGHT, RED, SHADOW, WHITE};
use crate::geometry::Hand;

// =============================================================================
// Numeral Fonts
// =============================================================================

/// Numeral fonts ordered from smallest to largest glyph height.
pub const NUMERAL_FONTS: [&MonoFont<'static>; 7] = [
    &PROFONT_7_POINT,
    &PROFONT_9_POINT,
    &PROFONT_10_POINT,
    &PROFONT_12_POINT,
    &PROFONT_14_POINT,
    &PROFONT_18_POINT,
    &PROFONT_24_POINT,
];

/// Index into [`NUMERAL_FONTS`] of the largest font no taller than `font_size` pixels.
///
/// Falls back to the smallest font when nothing fits.
pub fn numeral_font_index(font_size: f32) -> usize {
    NUMERAL_FONTS
        .iter()
        .rposition(|font| font.character_size.height as f32 <= font_size)
        .unwrap_or(0)
}

// =============================================================================
// Shadow
// =============================================================================

/// Drop shadow description, relative to the numeral font size.
///
/// Shadows are drawn as an offset copy of the element in `color`, widened by
/// `spread`, underneath the element itself. Fractions keep the shadow in
/// proportion on any surface size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    /// Shadow color.
    pub color: Rgb565,
    /// Horizontal offset as a fraction of font size.
    pub offset_x: f32,
    /// Vertical offset as a fraction of font size.
    pub offset_y: f32,
    /// Extra stroke width as a fraction of font size (the shadow "radius").
    pub spread: f32,
}

impl Shadow {
    /// Soft shadow falling down and to the right.
    pub const DROP: Self = Self {
        color: SHADOW,
        offset_x: 0.15,
        offset_y: 0.15,
        spread: 0.1,
    };
}

// =============================================================================
// ClockStyle
// =============================================================================

/// Immutable style descriptor for one clock face.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClockStyle {
    /// Color the whole surface is cleared to.
    pub background: Rgb565,
    /// Fill of the face disk. `None` leaves the background showing.
    pub face_fill: Option<Rgb565>,
    /// Outline ring color.
    pub face_stroke: Rgb565,
    /// Center hub color.
    pub hub_color: Rgb565,
    pub numeral_color: Rgb565,
    pub hour_hand: Rgb565,
    pub minute_hand: Rgb565,
    pub second_hand: Rgb565,
    /// Minute tick color. Hour ticks use `numeral_color`.
    pub dot_color: Rgb565,
    /// Draw the 60-dot tick ring.
    pub show_tick_dots: bool,
    /// Shadow under the three hands.
    pub hand_shadow: Option<Shadow>,
    /// Shadow under the outline ring.
    pub face_shadow: Option<Shadow>,
    /// Surface diameter divided by this gives the numeral font size.
    pub numeral_size_ratio: f32,
}

impl ClockStyle {
    /// Black face, dark orange ring, light orange hands and numerals.
    pub const CLASSIC: Self = Self {
        background: BLACK,
        face_fill: None,
        face_stroke: ORANGE_DARK,
        hub_color: ORANGE_LIGHT,
        numeral_color: ORANGE_LIGHT,
        hour_hand: ORANGE_LIGHT,
        minute_hand: ORANGE_LIGHT,
        second_hand: ORANGE_LIGHT,
        dot_color: GRAY,
        show_tick_dots: false,
        hand_shadow: None,
        face_shadow: None,
        numeral_size_ratio: 20.0,
    };

    /// Classic face with the minute/hour tick ring.
    pub const DOTTED: Self = Self {
        show_tick_dots: true,
        ..Self::CLASSIC
    };

    /// Filled face with tick ring and drop shadows.
    pub const SHADOWED: Self = Self {
        face_fill: Some(CHARCOAL),
        numeral_color: WHITE,
        second_hand: RED,
        show_tick_dots: true,
        hand_shadow: Some(Shadow::DROP),
        face_shadow: Some(Shadow::DROP),
        numeral_size_ratio: 18.0,
        ..Self::CLASSIC
    };

    /// Hand color for the given hand.
    #[inline]
    pub const fn hand_color(&self, hand: Hand) -> Rgb565 {
        match hand {
            Hand::Hour => self.hour_hand,
            Hand::Minute => self.minute_hand,
            Hand::Second => self.second_hand,
        }
    }
}

impl Default for ClockStyle {
    fn default() -> Self { Self::CLASSIC }
}

// =============================================================================
// ClockVariant
// =============================================================================

/// Named presets, selectable from the simulator command line.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug, clap::ValueEnum)]
pub enum ClockVariant {
    /// Plain face, numerals and hands.
    #[default]
    Classic,
    /// Adds 60 tick dots.
    Dotted,
    /// Filled face, tick dots and drop shadows.
    Shadowed,
}

impl ClockVariant {
    /// Style preset for this variant.
    #[inline]
    pub const fn style(self) -> ClockStyle {
        match self {
            Self::Classic => ClockStyle::CLASSIC,
            Self::Dotted => ClockStyle::DOTTED,
            Self::Shadowed => ClockStyle::SHADOWED,
        }
    }
}

impl fmt::Display for ClockVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Classic => "classic",
            Self::Dotted => "dotted",
            Self::Shadowed => "shadowed",
        })
    }
}
