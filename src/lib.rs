//! Analog clock widget for `embedded-graphics` draw targets.
//!
//! The widget draws a round clock face (outline, hub, numerals 1-12, optional
//! tick dots and drop shadows) plus hour, minute and second hands onto any
//! `DrawTarget<Color = Rgb565>`, then asks the host to redraw it 500 ms later.
//!
//! - [`colors`]: RGB565 color constants
//! - [`config`]: Timing and layout proportion constants
//! - [`styles`]: [`ClockStyle`] descriptor, variant presets, numeral fonts
//! - [`time`]: [`ClockTime`] read from the local system clock
//! - [`geometry`]: Angle math for numerals, ticks and hands
//! - [`layout`]: Cached pixel metrics per surface size
//! - [`widgets`]: Face and hand drawing
//! - [`scheduler`]: Redraw requests ([`RedrawScheduler`], [`RefreshTimer`])
//! - [`view`]: The [`ClockView`] widget and its [`ClockFace`] interface
//! - [`logging`]: `env_logger` setup for binaries
//!
//! # Example
//!
//! ```ignore
//! let mut view = ClockView::new(ClockStyle::DOTTED, RefreshTimer::new());
//! view.attach();
//! loop {
//!     if view.scheduler_mut().take_due(Instant::now()) {
//!         view.render(&mut display, ClockTime::now());
//!     }
//! }
//! ```

// Crate-level lints
#![allow(clippy::cast_possible_truncation)] // f32 -> i32/u32 pixel math
#![allow(clippy::cast_precision_loss)] // u32 -> f32 in layout calculations
#![allow(clippy::cast_possible_wrap)] // u32 -> i32 for surface coordinates
#![allow(clippy::cast_sign_loss)] // clamped f32 -> u32 stroke widths

pub mod colors;
pub mod config;
pub mod geometry;
pub mod layout;
pub mod logging;
pub mod scheduler;
pub mod styles;
pub mod time;
pub mod view;
pub mod widgets;

#[cfg(test)]
mod test_support;

// Re-export commonly used items
pub use layout::{ClockLayout, LayoutCache};
pub use scheduler::{RedrawScheduler, RefreshTimer};
pub use styles::{ClockStyle, ClockVariant, Shadow};
pub use time::ClockTime;
pub use view::{ClockFace, ClockView, RenderOutcome};
