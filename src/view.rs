//! The clock widget.
//!
//! [`ClockView`] turns a surface and a time into one frame and asks its
//! [`RedrawScheduler`] for the next one. It is driven entirely from the host's
//! UI thread; nothing here blocks or spawns.
//!
//! # Lifecycle
//!
//! ```text
//! new ──► attach ──► render ──► render ──► ... ──► detach
//!           │           │                            │
//!           │           └─ schedule(REDRAW_INTERVAL) └─ cancel + drop layout
//!           └─ schedule(0)
//! ```
//!
//! # Layout Latch
//!
//! Layout is computed lazily on the first render and cached per surface size.
//! A render on a differently sized surface, [`ClockView::on_resize`] or
//! [`ClockView::detach`] drops the cache so geometry is never stale.
//!
//! # Degenerate Surfaces
//!
//! A zero-area surface is skipped without a single draw call. The follow-up
//! redraw is still requested so the clock recovers once the host gives it a
//! real size.

use std::time::Duration;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use log::{debug, info, trace};

use crate::config::REDRAW_INTERVAL;
use crate::layout::{ClockLayout, LayoutCache};
use crate::scheduler::RedrawScheduler;
use crate::styles::ClockStyle;
use crate::time::ClockTime;
use crate::widgets::{draw_face, draw_hands};

/// Result of one [`ClockFace::render`] call.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RenderOutcome {
    /// A full frame was drawn.
    Drawn,
    /// The surface had no drawable area; nothing was drawn.
    Skipped,
}

/// Capability interface of a clock face: lay out for a size, render a time.
pub trait ClockFace {
    /// Layout for a surface of `size`, computing it if needed.
    fn layout(
        &mut self,
        size: Size,
    ) -> Option<&ClockLayout>;

    /// Draw one frame showing `time` onto `display`.
    fn render<D>(
        &mut self,
        display: &mut D,
        time: ClockTime,
    ) -> RenderOutcome
    where
        D: DrawTarget<Color = Rgb565>;
}

/// Analog clock widget with a self-perpetuating redraw loop.
pub struct ClockView<S> {
    style: ClockStyle,
    cache: LayoutCache,
    scheduler: S,
    attached: bool,
    frames_rendered: u64,
}

impl<S: RedrawScheduler> ClockView<S> {
    /// Create a detached view.
    pub const fn new(
        style: ClockStyle,
        scheduler: S,
    ) -> Self {
        Self {
            style,
            cache: LayoutCache::new(),
            scheduler,
            attached: false,
            frames_rendered: 0,
        }
    }

    #[inline]
    pub const fn style(&self) -> &ClockStyle { &self.style }

    /// Swap the style. Layout depends on it, so the cache is dropped.
    pub fn set_style(
        &mut self,
        style: ClockStyle,
    ) {
        self.style = style;
        self.cache.invalidate();
    }

    #[inline]
    pub const fn is_attached(&self) -> bool { self.attached }

    /// Whether a layout is cached.
    #[inline]
    pub const fn is_initialized(&self) -> bool { self.cache.is_initialized() }

    /// Number of layout passes so far.
    #[inline]
    pub const fn layout_computations(&self) -> u32 { self.cache.computations() }

    /// Frames fully drawn so far.
    #[inline]
    pub const fn frames_rendered(&self) -> u64 { self.frames_rendered }

    #[inline]
    pub const fn scheduler(&self) -> &S { &self.scheduler }

    #[inline]
    pub const fn scheduler_mut(&mut self) -> &mut S { &mut self.scheduler }

    /// Start the redraw loop. The first frame is requested immediately.
    pub fn attach(&mut self) {
        if self.attached {
            return;
        }
        self.attached = true;
        self.scheduler.schedule_redraw(Duration::ZERO);
        info!("clock attached ({} ms refresh)", REDRAW_INTERVAL.as_millis());
    }

    /// Stop the redraw loop and release cached geometry.
    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        self.attached = false;
        self.scheduler.cancel();
        self.cache.invalidate();
        info!("clock detached after {} frames", self.frames_rendered);
    }

    /// Host-signalled size change. The next render recomputes layout.
    pub fn on_resize(&mut self) { self.cache.invalidate(); }

    fn request_next_frame(&mut self) {
        if self.attached {
            self.scheduler.schedule_redraw(REDRAW_INTERVAL);
        }
    }
}

impl<S: RedrawScheduler> ClockFace for ClockView<S> {
    fn layout(
        &mut self,
        size: Size,
    ) -> Option<&ClockLayout> {
        self.cache.get_or_compute(size, &self.style)
    }

    fn render<D>(
        &mut self,
        display: &mut D,
        time: ClockTime,
    ) -> RenderOutcome
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let size = display.bounding_box().size;
        let Some(layout) = self.cache.get_or_compute(size, &self.style).copied() else {
            debug!("skipping clock frame on {}x{} surface", size.width, size.height);
            self.request_next_frame();
            return RenderOutcome::Skipped;
        };

        draw_face(display, &layout, &self.style);
        draw_hands(display, &layout, &self.style, time);

        self.frames_rendered = self.frames_rendered.wrapping_add(1);
        trace!(
            "clock frame {} at {:02}:{:02}:{:02}",
            self.frames_rendered, time.hour, time.minute, time.second
        );

        self.request_next_frame();
        RenderOutcome::Drawn
    }
}
