//! Layout metrics derived from the surface size.
//!
//! Every length on the face is a proportional function of the surface
//! diameter (the smaller of width and height). The trigonometry and font
//! selection are paid once per surface size: [`LayoutCache`] keeps the last
//! [`ClockLayout`] and only recomputes it when the size changes or the cache
//! is invalidated.
//!
//! # Derivation
//!
//! ```text
//! diameter   = min(width, height)
//! font_size  = diameter / numeral_size_ratio
//! padding    = font_size < 20 ? font_size × 1.5 : font_size
//! radius     = diameter/2 - padding - font_size/4     (numeral circle)
//! outline    = radius + padding                       (ring centre line)
//! hand len   = radius - truncation(hand)
//! ```
//!
//! The `font_size/4` term leaves room for half of the outline stroke
//! (`font_size/2` wide), so the ring never leaves the surface.
//!
//! # Clamping
//!
//! Degenerate sizes never produce negative lengths: every derived length is
//! clamped at zero and stroke widths at one pixel. A zero-area surface yields
//! no layout at all.

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::{Point, Size};
use log::debug;

use crate::config::{
    BIG_DOT_DIVISOR,
    HAND_TRUNCATION_DIVISOR,
    HOUR_HAND_TRUNCATION_DIVISOR,
    HOUR_STROKE_DIVISOR,
    HUB_RADIUS_DIVISOR,
    MINUTE_HAND_TRUNCATION_DIVISOR,
    MINUTE_STROKE_DIVISOR,
    OUTLINE_STROKE_DIVISOR,
    SECOND_STROKE_DIVISOR,
    SMALL_DOT_DIVISOR,
    SMALL_FONT_PADDING_FACTOR,
    SMALL_FONT_THRESHOLD,
};
use crate::geometry::Hand;
use crate::styles::{ClockStyle, NUMERAL_FONTS, Shadow, numeral_font_index};

// =============================================================================
// Resolved Shadow
// =============================================================================

/// A [`Shadow`] scaled to pixels for one layout.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ResolvedShadow {
    pub color: Rgb565,
    /// Pixel offset of the shadow copy.
    pub offset: Point,
    /// Extra stroke width of the shadow copy.
    pub spread: u32,
}

impl ResolvedShadow {
    /// Scale `shadow` by `font_size`. Offsets of at least one pixel keep the shadow visible.
    fn resolve(shadow: &Shadow, font_size: f32) -> Self {
        let px = |fraction: f32| -> i32 {
            let v = (fraction * font_size).round() as i32;
            if fraction > 0.0 { v.max(1) } else { v }
        };
        Self {
            color: shadow.color,
            offset: Point::new(px(shadow.offset_x), px(shadow.offset_y)),
            spread: (shadow.spread * font_size).round().max(0.0) as u32,
        }
    }
}

// =============================================================================
// ClockLayout
// =============================================================================

/// Pixel metrics for one surface size.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ClockLayout {
    /// Surface size these metrics were computed for.
    pub size: Size,
    /// Face center.
    pub center: Point,
    pub diameter: f32,
    pub font_size: f32,
    pub padding: f32,
    /// Radius of the numeral circle.
    pub radius: f32,
    /// Radius of the outline ring's centre line.
    pub outline_radius: f32,
    pub outline_stroke: u32,
    pub hub_radius: f32,

    pub hour_hand_truncation: f32,
    pub minute_hand_truncation: f32,
    pub second_hand_truncation: f32,
    pub hour_hand_length: f32,
    pub minute_hand_length: f32,
    pub second_hand_length: f32,
    pub hour_stroke: u32,
    pub minute_stroke: u32,
    pub second_stroke: u32,

    /// Radius of the tick dot ring.
    pub dot_ring: f32,
    /// Diameter of minute dots.
    pub small_dot_size: u32,
    /// Diameter of hour dots.
    pub big_dot_size: u32,

    pub hand_shadow: Option<ResolvedShadow>,
    pub face_shadow: Option<ResolvedShadow>,

    /// Index into [`NUMERAL_FONTS`].
    numeral_font: usize,
}

/// Round a length to a stroke width of at least one pixel.
#[inline]
fn stroke_width(length: f32) -> u32 { length.round().max(1.0) as u32 }

impl ClockLayout {
    /// Compute metrics for a surface of `size`. Returns `None` for a zero-area surface.
    pub fn compute(
        size: Size,
        style: &ClockStyle,
    ) -> Option<Self> {
        if size.width == 0 || size.height == 0 {
            return None;
        }

        let diameter = size.width.min(size.height) as f32;
        let half = diameter / 2.0;
        let font_size = diameter / style.numeral_size_ratio.max(1.0);

        let padding = if font_size < SMALL_FONT_THRESHOLD {
            font_size * SMALL_FONT_PADDING_FACTOR
        } else {
            font_size
        };
        let padding = padding.min(half);
        let radius = (half - padding - font_size / 4.0).max(0.0);

        let second_hand_truncation = diameter / HAND_TRUNCATION_DIVISOR;
        let minute_hand_truncation = diameter / MINUTE_HAND_TRUNCATION_DIVISOR;
        let hour_hand_truncation = second_hand_truncation + diameter / HOUR_HAND_TRUNCATION_DIVISOR;

        Some(Self {
            size,
            center: Point::new((size.width / 2) as i32, (size.height / 2) as i32),
            diameter,
            font_size,
            padding,
            radius,
            outline_radius: radius + padding,
            outline_stroke: stroke_width(font_size / OUTLINE_STROKE_DIVISOR),
            hub_radius: font_size / HUB_RADIUS_DIVISOR,

            hour_hand_truncation,
            minute_hand_truncation,
            second_hand_truncation,
            hour_hand_length: (radius - hour_hand_truncation).max(0.0),
            minute_hand_length: (radius - minute_hand_truncation).max(0.0),
            second_hand_length: (radius - second_hand_truncation).max(0.0),
            hour_stroke: stroke_width(font_size / HOUR_STROKE_DIVISOR),
            minute_stroke: stroke_width(font_size / MINUTE_STROKE_DIVISOR),
            second_stroke: stroke_width(font_size / SECOND_STROKE_DIVISOR),

            dot_ring: (radius - font_size).max(0.0),
            small_dot_size: stroke_width(font_size / SMALL_DOT_DIVISOR),
            big_dot_size: stroke_width(font_size / BIG_DOT_DIVISOR).max(2),

            hand_shadow: style.hand_shadow.as_ref().map(|s| ResolvedShadow::resolve(s, font_size)),
            face_shadow: style.face_shadow.as_ref().map(|s| ResolvedShadow::resolve(s, font_size)),

            numeral_font: numeral_font_index(font_size),
        })
    }

    /// Length of `hand` from center to tip.
    #[inline]
    pub const fn hand_length(&self, hand: Hand) -> f32 {
        match hand {
            Hand::Hour => self.hour_hand_length,
            Hand::Minute => self.minute_hand_length,
            Hand::Second => self.second_hand_length,
        }
    }

    /// Stroke width of `hand`.
    #[inline]
    pub const fn hand_stroke(&self, hand: Hand) -> u32 {
        match hand {
            Hand::Hour => self.hour_stroke,
            Hand::Minute => self.minute_stroke,
            Hand::Second => self.second_stroke,
        }
    }

    /// Font used for the numerals.
    #[inline]
    pub fn numeral_font(&self) -> &'static MonoFont<'static> { NUMERAL_FONTS[self.numeral_font] }
}

// =============================================================================
// LayoutCache
// =============================================================================

/// Size-keyed cache of the last computed layout.
///
/// Two states: uninitialized (no layout) and initialized. Any size change, or
/// an explicit [`invalidate`](Self::invalidate), drops back to uninitialized
/// before the next draw.
#[derive(Debug, Default)]
pub struct LayoutCache {
    cached: Option<ClockLayout>,
    /// Number of times a layout was actually computed.
    computations: u32,
}

impl LayoutCache {
    pub const fn new() -> Self {
        Self {
            cached: None,
            computations: 0,
        }
    }

    /// Whether a layout is cached.
    #[inline]
    pub const fn is_initialized(&self) -> bool { self.cached.is_some() }

    /// Number of layout passes performed so far.
    #[inline]
    pub const fn computations(&self) -> u32 { self.computations }

    /// Drop the cached layout so the next draw recomputes it.
    #[inline]
    pub fn invalidate(&mut self) { self.cached = None; }

    /// Cached layout for `size`, recomputing it if the size changed.
    pub fn get_or_compute(
        &mut self,
        size: Size,
        style: &ClockStyle,
    ) -> Option<&ClockLayout> {
        let stale = self.cached.as_ref().is_none_or(|layout| layout.size != size);
        if stale {
            self.cached = ClockLayout::compute(size, style);
            if let Some(layout) = &self.cached {
                self.computations = self.computations.wrapping_add(1);
                debug!(
                    "clock layout computed for {}x{}: diameter={} font_size={:.1} radius={:.1}",
                    size.width, size.height, layout.diameter, layout.font_size, layout.radius
                );
            }
        }
        self.cached.as_ref()
    }
}
