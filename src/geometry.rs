//! Angle math for numerals, tick dots and hands.
//!
//! All angles are in radians, measured clockwise from the positive x-axis
//! (screen y grows downward). A -90° rotation is baked in so that position 0
//! of every scale sits at 12 o'clock:
//!
//! ```text
//!              12  (-90°)
//!               |
//!   9 (180°) ---+--- 3 (0°)
//!               |
//!               6  (90°)
//! ```

use core::f32::consts::{FRAC_PI_2, PI};

use embedded_graphics::prelude::Point;

use crate::time::ClockTime;

/// One of the three clock hands.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Hand {
    Hour,
    Minute,
    Second,
}

impl Hand {
    /// Hands in draw order (back to front).
    pub const ALL: [Self; 3] = [Self::Hour, Self::Minute, Self::Second];
}

/// Angle of numeral `n` (1-12): `(n - 3) × 30°`.
#[inline]
pub fn numeral_angle(n: u8) -> f32 { PI / 6.0 * (f32::from(n) - 3.0) }

/// Angle of tick dot `i` (1-60): `(i - 3) × 6°`.
#[inline]
pub fn tick_angle(i: u8) -> f32 { PI / 30.0 * (f32::from(i) - 3.0) }

/// Whether tick `i` is an hour marker. Exactly 12 of 1..=60 qualify, one per numeral slot.
#[inline]
pub const fn is_hour_tick(i: u8) -> bool { i % 5 == 3 }

/// Position of a hand on the 60-step dial.
///
/// The hour hand moves between hour marks as the minutes advance.
#[inline]
pub fn hand_position(hand: Hand, time: ClockTime) -> f32 {
    match hand {
        Hand::Hour => time.fractional_hour() * 5.0,
        Hand::Minute => f32::from(time.minute),
        Hand::Second => f32::from(time.second),
    }
}

/// Angle of `hand` at `time`: `π/30 × position - π/2`.
#[inline]
pub fn hand_angle(hand: Hand, time: ClockTime) -> f32 { PI / 30.0 * hand_position(hand, time) - FRAC_PI_2 }

/// Point at `distance` from `center` along `angle`, rounded to the nearest pixel.
#[inline]
pub fn polar(center: Point, angle: f32, distance: f32) -> Point {
    let (sin, cos) = angle.sin_cos();
    Point::new(
        center.x + (cos * distance).round() as i32,
        center.y + (sin * distance).round() as i32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    /// Normalize to [0, 2π) so angles can be compared modulo a full turn.
    fn normalize(angle: f32) -> f32 { angle.rem_euclid(2.0 * PI) }

    fn assert_angle_eq(actual: f32, expected_deg: f32, what: &str) {
        let diff = (normalize(actual) - normalize(expected_deg.to_radians())).abs();
        let diff = diff.min(2.0 * PI - diff);
        assert!(diff < EPSILON, "{what}: got {}°, expected {expected_deg}°", actual.to_degrees());
    }

    // -------------------------------------------------------------------------
    // Numerals
    // -------------------------------------------------------------------------

    #[test]
    fn test_numeral_angles() {
        for n in 1..=12u8 {
            assert_angle_eq(numeral_angle(n), (f32::from(n) - 3.0) * 30.0, "numeral angle");
        }
    }

    #[test]
    fn test_numeral_cardinal_positions() {
        let center = Point::new(100, 100);
        assert_eq!(polar(center, numeral_angle(12), 50.0), Point::new(100, 50), "12 is due north");
        assert_eq!(polar(center, numeral_angle(3), 50.0), Point::new(150, 100), "3 is due east");
        assert_eq!(polar(center, numeral_angle(6), 50.0), Point::new(100, 150), "6 is due south");
        assert_eq!(polar(center, numeral_angle(9), 50.0), Point::new(50, 100), "9 is due west");
    }

    // -------------------------------------------------------------------------
    // Tick dots
    // -------------------------------------------------------------------------

    #[test]
    fn test_hour_tick_count() {
        let big = (1..=60u8).filter(|&i| is_hour_tick(i)).count();
        assert_eq!(big, 12, "Exactly 12 of 60 ticks are hour markers");
    }

    #[test]
    fn test_hour_ticks_align_with_numerals() {
        let center = Point::new(0, 0);
        for i in (1..=60u8).filter(|&i| is_hour_tick(i)) {
            let tick = polar(center, tick_angle(i), 1000.0);
            let matches_numeral = (1..=12u8).any(|n| polar(center, numeral_angle(n), 1000.0) == tick);
            assert!(matches_numeral, "Hour tick {i} should share an angular slot with a numeral");
        }
    }

    #[test]
    fn test_tick_angles() {
        assert_angle_eq(tick_angle(3), 0.0, "tick 3");
        assert_angle_eq(tick_angle(48), -90.0, "tick 48 at 12 o'clock");
        assert_angle_eq(tick_angle(15), 72.0, "tick 15");
    }

    // -------------------------------------------------------------------------
    // Hands
    // -------------------------------------------------------------------------

    #[test]
    fn test_minute_and_second_angles() {
        for v in [0u8, 7, 15, 30, 45, 59] {
            let t = ClockTime::new(0, v, v);
            let expected = 6.0 * f32::from(v) - 90.0;
            assert_angle_eq(hand_angle(Hand::Minute, t), expected, "minute hand");
            assert_angle_eq(hand_angle(Hand::Second, t), expected, "second hand");
        }
    }

    #[test]
    fn test_hour_angle_includes_minutes() {
        let t = ClockTime::new(14, 30, 0);
        assert_angle_eq(hand_angle(Hand::Hour, t), 30.0 * 2.5 - 90.0, "hour hand at 2:30");
    }

    #[test]
    fn test_three_oclock_points_east() {
        let t = ClockTime::new(3, 0, 0);
        assert!(hand_angle(Hand::Hour, t).abs() < EPSILON, "Hour hand at 3:00 should be at 0°");
        let end = polar(Point::new(0, 0), hand_angle(Hand::Hour, t), 40.0);
        assert_eq!(end, Point::new(40, 0), "Hour hand at 3:00 should point east");
    }

    #[test]
    fn test_afternoon_matches_morning() {
        let am = ClockTime::new(4, 20, 0);
        let pm = ClockTime::new(16, 20, 0);
        assert!(
            (hand_angle(Hand::Hour, am) - hand_angle(Hand::Hour, pm)).abs() < EPSILON,
            "Hour hand uses a 12-hour dial"
        );
    }

    #[test]
    fn test_hand_draw_order() {
        assert_eq!(Hand::ALL, [Hand::Hour, Hand::Minute, Hand::Second]);
    }
}
