//! Analog clock simulator.
//!
//! Opens an `embedded-graphics-simulator` window and runs the clock's redraw
//! loop against it: the view asks for a frame every 500 ms, and the loop
//! polls window events in between.
//!
//! # Usage
//!
//! ```text
//! clock-sim [--variant classic|dotted|shadowed] [--width 320] [--height 320] [--scale 2]
//! ```
//!
//! `--log-filter` (or `RUST_LOG`) takes an `env_logger` filter such as
//! `analog_clock=debug`.
//!
//! # Controls
//!
//! | Key | Action |
//! |-----|--------|
//! | `1` / `2` / `3` | Switch to classic / dotted / shadowed |
//! | Close window | Detach the clock and exit |

use std::thread;
use std::time::Instant;

use analog_clock::config::{DEFAULT_SURFACE_SIZE, DEFAULT_WINDOW_SCALE, EVENT_POLL_INTERVAL, WINDOW_TITLE};
use analog_clock::logging::{LoggingConfig, init_logging};
use analog_clock::{ClockFace, ClockTime, ClockVariant, ClockView, RefreshTimer};
use clap::Parser;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use log::info;

#[derive(Debug, Parser)]
#[command(name = "clock-sim", about = "Analog clock widget simulator")]
struct Args {
    /// Face style preset.
    #[arg(long, value_enum, default_value_t = ClockVariant::Classic)]
    variant: ClockVariant,

    /// Surface width in pixels.
    #[arg(long, default_value_t = DEFAULT_SURFACE_SIZE)]
    width: u32,

    /// Surface height in pixels.
    #[arg(long, default_value_t = DEFAULT_SURFACE_SIZE)]
    height: u32,

    /// Window pixel scale.
    #[arg(long, default_value_t = DEFAULT_WINDOW_SCALE)]
    scale: u32,

    /// `env_logger` filter, overrides `RUST_LOG`.
    #[arg(long)]
    log_filter: Option<String>,
}

fn main() {
    let args = Args::parse();
    init_logging(LoggingConfig {
        env_filter: args.log_filter.clone(),
        ..LoggingConfig::default()
    });

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(args.width, args.height));
    let output_settings = OutputSettingsBuilder::new().scale(args.scale.max(1)).build();
    let mut window = Window::new(WINDOW_TITLE, &output_settings);

    let style = args.variant.style();
    display.clear(style.background).ok();
    window.update(&display);

    info!(
        "starting {} clock on a {}x{} surface",
        args.variant, args.width, args.height
    );

    let mut view = ClockView::new(style, RefreshTimer::new());
    view.attach();

    loop {
        let events: Vec<_> = window.events().collect();
        for ev in events {
            match ev {
                SimulatorEvent::Quit => {
                    view.detach();
                    return;
                }
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    let variant = match keycode {
                        Keycode::Num1 => Some(ClockVariant::Classic),
                        Keycode::Num2 => Some(ClockVariant::Dotted),
                        Keycode::Num3 => Some(ClockVariant::Shadowed),
                        _ => None,
                    };
                    if let Some(variant) = variant {
                        info!("switching to {variant} style");
                        view.set_style(variant.style());
                        // Repaint now rather than waiting out the interval
                        view.render(&mut display, ClockTime::now());
                        window.update(&display);
                    }
                }
                _ => {}
            }
        }

        if view.scheduler_mut().take_due(Instant::now()) {
            view.render(&mut display, ClockTime::now());
            window.update(&display);
        }

        // Wake for the next frame or the next event poll, whichever is sooner
        let wait = view
            .scheduler()
            .time_until_due(Instant::now())
            .map_or(EVENT_POLL_INTERVAL, |left| left.min(EVENT_POLL_INTERVAL));
        thread::sleep(wait);
    }
}
