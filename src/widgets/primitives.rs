//! Low-level drawing primitives shared across widgets.
//!
//! Every helper takes its style as an explicit value. Nothing is carried over
//! between calls, so a shadow or stroke width used for one element can never
//! leak into the next.
//!
//! Draw results are discarded with `.ok()`: a failed primitive only costs one
//! cosmetic frame, and the next redraw repaints everything.
//!
//! # Circle Sizing
//!
//! `Circle::with_center` takes an integer diameter. Radii are doubled and
//! rounded, and anything under one pixel is skipped rather than drawn as a
//! zero-size primitive.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle};
use embedded_graphics::text::renderer::TextRenderer;
use embedded_graphics::text::{Baseline, Text};

use crate::layout::ResolvedShadow;

/// Integer diameter for `radius`, or `None` if it rounds below one pixel.
#[inline]
fn circle_diameter(radius: f32) -> Option<u32> {
    let diameter = (radius * 2.0).round();
    (diameter >= 1.0).then_some(diameter as u32)
}

/// Fill a disk of `radius` around `center`.
pub fn fill_circle<D>(
    display: &mut D,
    center: Point,
    radius: f32,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let Some(diameter) = circle_diameter(radius) else {
        return;
    };
    Circle::with_center(center, diameter)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

/// Stroke a ring whose centre line has `radius`.
pub fn stroke_circle<D>(
    display: &mut D,
    center: Point,
    radius: f32,
    style: PrimitiveStyle<Rgb565>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let Some(diameter) = circle_diameter(radius) else {
        return;
    };
    Circle::with_center(center, diameter)
        .into_styled(style)
        .draw(display)
        .ok();
}

/// Draw a straight line.
pub fn draw_line<D>(
    display: &mut D,
    from: Point,
    to: Point,
    style: PrimitiveStyle<Rgb565>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Line::new(from, to).into_styled(style).draw(display).ok();
}

/// Stroke style for the shadow copy of an element stroked `width` wide.
#[inline]
pub const fn shadow_stroke(
    shadow: &ResolvedShadow,
    width: u32,
) -> PrimitiveStyle<Rgb565> {
    PrimitiveStyle::with_stroke(shadow.color, width + shadow.spread)
}

/// Draw `text` centred on `center`.
///
/// The string's bounding box is measured with the given style and the text is
/// placed so that the box's midpoint lands on `center`.
pub fn draw_text_centered<D>(
    display: &mut D,
    text: &str,
    center: Point,
    style: MonoTextStyle<'_, Rgb565>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let bounds = style.measure_string(text, Point::zero(), Baseline::Top).bounding_box;
    let top_left = center - Point::new(bounds.size.width as i32 / 2, bounds.size.height as i32 / 2);
    Text::with_baseline(text, top_left, style, Baseline::Top)
        .draw(display)
        .ok();
}

#[cfg(test)]
mod tests {
    use embedded_graphics::mono_font::ascii::FONT_6X10;

    use super::*;
    use crate::colors::{RED, WHITE};
    use crate::test_support::TestDisplay;

    #[test]
    fn test_circle_diameter_rounding() {
        assert_eq!(circle_diameter(0.2), None, "Sub-pixel circles are skipped");
        assert_eq!(circle_diameter(0.5), Some(1));
        assert_eq!(circle_diameter(10.0), Some(20));
    }

    #[test]
    fn test_fill_circle_covers_center() {
        let mut display = TestDisplay::new(Size::new(32, 32));
        fill_circle(&mut display, Point::new(16, 16), 5.0, RED);
        assert_eq!(display.pixel(Point::new(16, 16)), Some(RED));
        assert_eq!(display.pixel(Point::new(0, 0)), None, "Outside the disk stays untouched");
    }

    #[test]
    fn test_tiny_circle_draws_nothing() {
        let mut display = TestDisplay::new(Size::new(8, 8));
        fill_circle(&mut display, Point::new(4, 4), 0.1, RED);
        assert_eq!(display.draw_calls(), 0, "Sub-pixel circle must not reach the display");
    }

    #[test]
    fn test_stroke_circle_leaves_center_empty() {
        let mut display = TestDisplay::new(Size::new(40, 40));
        stroke_circle(&mut display, Point::new(20, 20), 15.0, PrimitiveStyle::with_stroke(RED, 2));
        assert_eq!(display.pixel(Point::new(20, 20)), None, "Ring interior is not filled");
        assert!(display.count_color(RED) > 0, "Ring is drawn");
    }

    #[test]
    fn test_shadow_stroke_widens() {
        let shadow = ResolvedShadow {
            color: WHITE,
            offset: Point::new(1, 1),
            spread: 2,
        };
        assert_eq!(shadow_stroke(&shadow, 3).stroke_width, 5);
        assert_eq!(shadow_stroke(&shadow, 3).stroke_color, Some(WHITE));
    }

    #[test]
    fn test_text_is_centered_on_point() {
        let mut display = TestDisplay::new(Size::new(40, 40));
        let center = Point::new(20, 20);
        draw_text_centered(&mut display, "88", center, MonoTextStyle::new(&FONT_6X10, WHITE));

        let bounds = display.bounds_of(WHITE).expect("text should draw pixels");
        let mid = bounds.center();
        assert!((mid.x - center.x).abs() <= 2, "Text should be horizontally centered, got {mid:?}");
        assert!((mid.y - center.y).abs() <= 2, "Text should be vertically centered, got {mid:?}");
    }
}
