//! Test doubles shared by the unit tests.

use core::convert::Infallible;
use std::time::Duration;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::scheduler::RedrawScheduler;

/// In-memory framebuffer that remembers every pixel and counts draw calls.
///
/// Pixels never written read back as `None`; out-of-bounds pixels are dropped.
pub struct TestDisplay {
    size: Size,
    pixels: Vec<Option<Rgb565>>,
    draw_calls: usize,
}

impl TestDisplay {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            pixels: vec![None; (size.width * size.height) as usize],
            draw_calls: 0,
        }
    }

    fn index(
        &self,
        point: Point,
    ) -> Option<usize> {
        let in_bounds =
            point.x >= 0 && point.y >= 0 && (point.x as u32) < self.size.width && (point.y as u32) < self.size.height;
        in_bounds.then(|| point.y as usize * self.size.width as usize + point.x as usize)
    }

    /// Color at `point`, or `None` if nothing was drawn there.
    pub fn pixel(
        &self,
        point: Point,
    ) -> Option<Rgb565> {
        self.index(point).and_then(|i| self.pixels[i])
    }

    /// Number of `draw_iter` calls received.
    pub const fn draw_calls(&self) -> usize { self.draw_calls }

    /// Number of pixels currently holding `color`.
    pub fn count_color(
        &self,
        color: Rgb565,
    ) -> usize {
        self.pixels.iter().filter(|&&p| p == Some(color)).count()
    }

    /// Whether `color` appears in the square of half-width `reach` around `center`.
    pub fn any_in_square(
        &self,
        center: Point,
        reach: i32,
        color: Rgb565,
    ) -> bool {
        (center.y - reach..=center.y + reach)
            .any(|y| (center.x - reach..=center.x + reach).any(|x| self.pixel(Point::new(x, y)) == Some(color)))
    }

    /// Smallest rectangle enclosing every pixel of `color`.
    pub fn bounds_of(
        &self,
        color: Rgb565,
    ) -> Option<Rectangle> {
        let mut min = Point::new(i32::MAX, i32::MAX);
        let mut max = Point::new(i32::MIN, i32::MIN);
        for y in 0..self.size.height as i32 {
            for x in 0..self.size.width as i32 {
                if self.pixel(Point::new(x, y)) == Some(color) {
                    min = min.component_min(Point::new(x, y));
                    max = max.component_max(Point::new(x, y));
                }
            }
        }
        (min.x <= max.x).then(|| Rectangle::with_corners(min, max))
    }
}

impl OriginDimensions for TestDisplay {
    fn size(&self) -> Size { self.size }
}

impl DrawTarget for TestDisplay {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.draw_calls += 1;
        for Pixel(point, color) in pixels {
            if let Some(i) = self.index(point) {
                self.pixels[i] = Some(color);
            }
        }
        Ok(())
    }
}

/// Scheduler that records every requested delay.
#[derive(Debug, Default)]
pub struct RecordingScheduler {
    pub delays: Vec<Duration>,
    pub cancels: usize,
}

impl RedrawScheduler for RecordingScheduler {
    fn schedule_redraw(
        &mut self,
        delay: Duration,
    ) {
        self.delays.push(delay);
    }

    fn cancel(&mut self) { self.cancels += 1; }
}
